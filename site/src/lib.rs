//! # moondry-site
//!
//! Static catalog and structured-data builder for the Moondry landing
//! page.
//!
//! This crate is the single canonical content source for the site:
//! subscription tiers, FAQ entries, B2B segments, add-ons, and site
//! metadata live here as constants, and the SEO layer derives the
//! schema.org JSON-LD documents and `<head>` metadata from them. Both
//! renderers (the SSR shell and the CSR app) read this crate, so the
//! visible page and the machine-readable metadata can never disagree.
//!
//! ## Quick Start
//!
//! ```rust
//! use moondry_site::{catalog, seo};
//!
//! // Visible prices
//! for tier in catalog::TIERS {
//!     let monthly = catalog::format_inr(tier.price(false));
//!     println!("{}: {monthly}/mo", tier.name);
//! }
//!
//! // Search-engine metadata
//! let business = seo::local_business(false);
//! assert_eq!(business["makesOffer"].as_array().unwrap().len(), 3);
//! ```
//!
//! ## Architecture
//!
//! - [`catalog`] - the constant content tables and display helpers
//! - [`seo`] - JSON-LD builders and the canonical page metadata
//!
//! There is no runtime failure surface: every input is a compile-time
//! constant and every transform is a pure function.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod seo;

pub use catalog::{SITE, SiteMetadata, SubscriptionTier};
pub use seo::PageMeta;

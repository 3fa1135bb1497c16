//! Leptos components for the static page shell.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── MetaTags          (title, description, canonical, OG, Twitter)
//! ├── JsonLd x3         (LocalBusiness, FAQPage, Organization)
//! └── StaticFallback    (noscript plan summary + contact)
//! ```
//!
//! Components are typically used via [`crate::render_shell`], but can
//! be composed directly for custom shells:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use moondry_shell::components::JsonLd;
//! use moondry_site::seo;
//!
//! view! { <JsonLd document=seo::faq_page() /> }
//! ```

mod document;
mod meta;

pub use document::{SiteDocument, StaticFallback};
pub use meta::{JsonLd, MetaTags};

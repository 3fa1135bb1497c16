//! # moondry-shell
//!
//! Leptos SSR renderer for the static Moondry landing page shell.
//!
//! The shell is the deployable `index.html`: the full `<head>` with
//! metadata tags and three embedded JSON-LD documents, inline CSS, and
//! a `<noscript>` fallback body. The interactive page (the
//! `moondry-landing` CSR crate) mounts into this shell at load time.
//!
//! ## Quick Start
//!
//! ```rust
//! use moondry_shell::render_shell;
//!
//! let html = render_shell(true);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Write to file
//! std::fs::write("index.html", html).unwrap();
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait; no reactive runtime
//! or hydration is involved, this is pure static HTML generation.
//!
//! ## Architecture
//!
//! - [`components`] - the document, metadata, and JSON-LD components
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete HTML shell for the landing page.
///
/// # Arguments
///
/// * `annual` - billing mode reflected in the JSON-LD offer prices
///   (`true` lists annual prices, `false` monthly)
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_shell(annual: bool) -> String {
    let doc = view! {
        <SiteDocument annual=annual />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_complete_document() {
        let html = render_shell(true);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\""));
        assert!(html.contains("Moondry"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn embeds_three_jsonld_documents() {
        let html = render_shell(true);
        let count = html.matches("application/ld+json").count();
        assert_eq!(count, 3);

        assert!(html.contains("\"@type\":\"LocalBusiness\""));
        assert!(html.contains("\"@type\":\"FAQPage\""));
        assert!(html.contains("\"@type\":\"Organization\""));
    }

    #[test]
    fn head_carries_canonical_and_social_tags() {
        let html = render_shell(true);

        assert!(html.contains("rel=\"canonical\""));
        assert!(html.contains("https://moondry.in"));
        assert!(html.contains("og:title"));
        assert!(html.contains("og:image"));
        assert!(html.contains("twitter:card"));
        assert!(html.contains("summary_large_image"));
    }

    #[test]
    fn offer_prices_follow_billing_mode() {
        // serde_json sorts keys, so "price" is adjacent to "priceCurrency"
        let monthly = render_shell(false);
        assert!(monthly.contains("\"price\":799,\"priceCurrency\""));
        assert!(monthly.contains("\"price\":1299,\"priceCurrency\""));
        assert!(monthly.contains("\"price\":1999,\"priceCurrency\""));

        let annual = render_shell(true);
        assert!(annual.contains("\"price\":7990,\"priceCurrency\""));
        assert!(annual.contains("\"price\":12990,\"priceCurrency\""));
        assert!(annual.contains("\"price\":19990,\"priceCurrency\""));
    }

    #[test]
    fn fallback_lists_every_plan() {
        let html = render_shell(true);
        assert!(html.contains("<noscript>"));
        for name in ["Starter", "Standard", "Pro"] {
            assert!(html.contains(name), "missing plan {name}");
        }
    }
}

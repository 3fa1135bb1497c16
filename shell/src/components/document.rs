//! Root document component - the complete HTML page shell.

use super::{JsonLd, MetaTags};
use crate::styles::BASE_CSS;
use leptos::prelude::*;
use moondry_site::catalog::{SITE, TIERS, format_inr};
use moondry_site::seo;

/// The complete HTML document for the landing page shell.
///
/// Renders the `<head>` (metadata tags, inline CSS, and the three
/// JSON-LD documents) and a `<body>` carrying the no-JS fallback. The
/// CSR app mounts into the body at load time and replaces nothing in
/// the head, so crawlers and users see the same metadata.
#[component]
pub fn SiteDocument(
    /// Billing mode reflected in the JSON-LD offer prices
    #[prop(default = true)]
    annual: bool,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <MetaTags meta=seo::page_meta() />
                <style>{BASE_CSS}</style>
                <JsonLd document=seo::local_business(annual) />
                <JsonLd document=seo::faq_page() />
                <JsonLd document=seo::organization() />
            </head>
            <body>
                <StaticFallback />
            </body>
        </html>
    }
}

/// Minimal content for clients without JavaScript: the plan summary
/// and a way to get in touch. Wrapped in `<noscript>` so the CSR app
/// renders over an empty body everywhere else.
#[component]
pub fn StaticFallback() -> impl IntoView {
    view! {
        <noscript>
            <div class="container section">
                <h1 class="hero-title">{SITE.name}": subscription laundry, picked up at your door"</h1>
                <p class="hero-description">{SITE.description}</p>
                <ul class="plan-bullets">
                    {TIERS.iter().map(|tier| {
                        let line = format!(
                            "{} ({}): {}/mo or {}/yr",
                            tier.name,
                            tier.tag,
                            format_inr(tier.monthly),
                            format_inr(tier.yearly),
                        );
                        view! { <li>{line}</li> }
                    }).collect::<Vec<_>>()}
                </ul>
                <p>"Call us: "{SITE.phone}</p>
            </div>
        </noscript>
    }
}

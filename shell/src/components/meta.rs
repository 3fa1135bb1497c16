//! Head metadata components: the tag set and the JSON-LD embeds.

use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::custom_attribute;
use moondry_site::PageMeta;

/// The full `<head>` tag set derived from one [`PageMeta`] record.
///
/// Open Graph and Twitter tags share the same title, description, and
/// image fields, so the two card formats cannot drift apart.
#[component]
pub fn MetaTags(meta: PageMeta) -> impl IntoView {
    view! {
        <meta charset="UTF-8" />
        <meta name="viewport" content="width=device-width, initial-scale=1" />
        <title>{meta.title}</title>
        <meta name="description" content=meta.description.clone() />
        <link rel="canonical" href=meta.canonical.clone() />
        <meta name="robots" content=meta.robots />
        <meta name="theme-color" content=meta.theme_color />

        // Open Graph
        <meta content="website" {..custom_attribute("property", "og:type")} />
        <meta content=meta.social_title.clone() {..custom_attribute("property", "og:title")} />
        <meta content=meta.description.clone() {..custom_attribute("property", "og:description")} />
        <meta content=meta.canonical {..custom_attribute("property", "og:url")} />
        <meta content=meta.social_image.clone() {..custom_attribute("property", "og:image")} />

        // Twitter
        <meta name="twitter:card" content="summary_large_image" />
        <meta name="twitter:title" content=meta.social_title />
        <meta name="twitter:description" content=meta.description />
        <meta name="twitter:image" content=meta.social_image />
    }
}

/// One embedded `application/ld+json` script.
///
/// Serialized compactly; schema.org keys contain no `</script>`
/// sequences, so the payload is safe to inline.
#[component]
pub fn JsonLd(document: serde_json::Value) -> impl IntoView {
    let payload = document.to_string();
    view! {
        <script type="application/ld+json">{payload}</script>
    }
}

//! SEO metadata and schema.org JSON-LD builders.
//!
//! Pure transformations of the [`catalog`](crate::catalog) into the
//! machine-readable documents search engines consume: a LocalBusiness
//! listing with per-tier offers, a FAQPage listing, and an
//! Organization listing, plus the canonical [`PageMeta`] record behind
//! every `<head>` tag on the page.
//!
//! Inputs are compile-time constants, so none of these functions can
//! fail.
//!
//! # Example
//!
//! ```rust
//! use moondry_site::seo;
//!
//! let business = seo::local_business(false);
//! assert_eq!(business["@type"], "LocalBusiness");
//! assert_eq!(business["makesOffer"][0]["priceCurrency"], "INR");
//! ```

use crate::catalog::{FAQ, SITE, TIERS};
use serde_json::{Value, json};

/// The canonical page metadata record.
///
/// The single source for the document title, meta description,
/// canonical link, and the Open Graph / Twitter card tags. Social
/// tags derive from `social_title`/`social_image` so the two card
/// formats can never drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    /// Document `<title>`
    pub title: String,
    /// Meta description, shared by OG and Twitter descriptions
    pub description: String,
    /// Canonical URL
    pub canonical: String,
    /// Robots directive
    pub robots: String,
    /// Browser theme color
    pub theme_color: String,
    /// Short title for OG and Twitter cards
    pub social_title: String,
    /// Absolute URL of the social preview image
    pub social_image: String,
}

/// Build the page metadata from the site record.
pub fn page_meta() -> PageMeta {
    PageMeta {
        title: format!(
            "{} — Subscription Laundry with 24-hour Doorstep Pickup & Delivery",
            SITE.name
        ),
        description: SITE.description.to_string(),
        canonical: SITE.url.to_string(),
        robots: "index,follow".to_string(),
        theme_color: "#0f172a".to_string(),
        social_title: format!("{} — Subscription Laundry", SITE.name),
        social_image: format!("{}/og-cover.jpg", SITE.url),
    }
}

/// One schema.org Offer per subscription tier.
///
/// The `annual` flag selects which price appears, mirroring the
/// billing toggle on the visible plan cards.
pub fn offers(annual: bool) -> Vec<Value> {
    TIERS
        .iter()
        .map(|tier| {
            json!({
                "@type": "Offer",
                "name": format!("{} plan", tier.name),
                "price": tier.price(annual),
                "priceCurrency": "INR",
                "category": "LaundrySubscription",
                "availability": "https://schema.org/InStock",
            })
        })
        .collect()
}

/// The schema.org LocalBusiness document, offers included.
pub fn local_business(annual: bool) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": SITE.name,
        "url": SITE.url,
        "image": SITE.logo,
        "telephone": SITE.phone,
        "description": SITE.description,
        "address": { "@type": "PostalAddress", "addressCountry": "IN" },
        "sameAs": SITE.same_as,
        "areaServed": "IN",
        "openingHours": "Mo-Su 08:00-21:00",
        "makesOffer": offers(annual),
    })
}

/// The schema.org FAQPage document, one Question per FAQ entry.
pub fn faq_page() -> Value {
    let entities: Vec<Value> = FAQ
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": { "@type": "Answer", "text": entry.answer },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities,
    })
}

/// The schema.org Organization document.
pub fn organization() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": SITE.name,
        "url": SITE.url,
        "logo": SITE.logo,
        "sameAs": SITE.same_as,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn offer_prices(annual: bool) -> Vec<u64> {
        offers(annual)
            .iter()
            .map(|o| o["price"].as_u64().unwrap())
            .collect()
    }

    #[test]
    fn one_offer_per_tier() {
        assert_eq!(offers(false).len(), TIERS.len());
        assert_eq!(offers(true).len(), TIERS.len());
    }

    #[test]
    fn offers_are_always_inr_and_in_stock() {
        for offer in offers(false).iter().chain(offers(true).iter()) {
            assert_eq!(offer["priceCurrency"], "INR");
            assert_eq!(offer["availability"], "https://schema.org/InStock");
            assert_eq!(offer["category"], "LaundrySubscription");
        }
    }

    #[test]
    fn monthly_mode_lists_monthly_prices() {
        assert_eq!(offer_prices(false), vec![799, 1299, 1999]);
    }

    #[test]
    fn annual_mode_lists_annual_prices() {
        assert_eq!(offer_prices(true), vec![7990, 12990, 19990]);
    }

    #[test]
    fn offer_names_carry_tier_names() {
        let names: Vec<_> = offers(false)
            .iter()
            .map(|o| o["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Starter plan", "Standard plan", "Pro plan"]);
    }

    #[test]
    fn local_business_shape() {
        let business = local_business(false);
        assert_eq!(business["@context"], "https://schema.org");
        assert_eq!(business["@type"], "LocalBusiness");
        assert_eq!(business["name"], "Moondry");
        assert_eq!(business["address"]["addressCountry"], "IN");
        assert_eq!(business["areaServed"], "IN");
        assert_eq!(business["openingHours"], "Mo-Su 08:00-21:00");
        assert_eq!(business["makesOffer"].as_array().unwrap().len(), TIERS.len());
    }

    #[test]
    fn faq_page_preserves_order() {
        let page = faq_page();
        assert_eq!(page["@type"], "FAQPage");
        let entities = page["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), FAQ.len());
        for (entity, entry) in entities.iter().zip(FAQ) {
            assert_eq!(entity["@type"], "Question");
            assert_eq!(entity["name"], entry.question);
            assert_eq!(entity["acceptedAnswer"]["text"], entry.answer);
        }
    }

    #[test]
    fn organization_shape() {
        let org = organization();
        assert_eq!(org["@type"], "Organization");
        assert_eq!(org["url"], "https://moondry.in");
        assert_eq!(org["sameAs"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn page_meta_is_consistent_with_site() {
        let meta = page_meta();
        assert_eq!(meta.canonical, SITE.url);
        assert!(meta.title.starts_with("Moondry"));
        assert!(meta.social_image.starts_with(SITE.url));
        assert_eq!(meta.description, SITE.description);
    }
}

//! The static content catalog for the landing page.
//!
//! Everything the page displays lives here as process-lifetime
//! constants: subscription tiers, FAQ entries, B2B segments, add-ons,
//! and the site-wide metadata record. Nothing in this module is ever
//! mutated; the rest of the workspace only reads it.
//!
//! # Example
//!
//! ```rust
//! use moondry_site::catalog::TIERS;
//!
//! let featured = TIERS.iter().find(|t| t.featured).unwrap();
//! assert_eq!(featured.name, "Standard");
//! assert_eq!(featured.price(true), featured.monthly * 10);
//! ```

use serde::Serialize;

/// A named subscription plan with prices and feature bullets.
///
/// Prices are whole INR amounts. The yearly price is always ten times
/// the monthly price (two months free on annual billing).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SubscriptionTier {
    /// Plan name shown on the card and in structured data
    pub name: &'static str,
    /// Short audience tag ("Individuals", "Families", ...)
    pub tag: &'static str,
    /// Whether this plan gets the highlighted card treatment
    pub featured: bool,
    /// Monthly price in INR
    pub monthly: u32,
    /// Annual price in INR (monthly x 10)
    pub yearly: u32,
    /// Feature bullets, in display order
    pub bullets: &'static [&'static str],
}

impl SubscriptionTier {
    /// Price for the selected billing mode.
    pub fn price(&self, annual: bool) -> u32 {
        if annual { self.yearly } else { self.monthly }
    }

    /// Billing-period suffix shown next to the price ("/mo" or "/yr").
    pub fn period_suffix(annual: bool) -> &'static str {
        if annual { "/yr" } else { "/mo" }
    }
}

/// One question/answer pair for the FAQ section and the FAQPage
/// structured data. List order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    /// The question as displayed
    pub question: &'static str,
    /// The full answer text
    pub answer: &'static str,
}

/// A business segment served by the B2B offering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct B2bSegment {
    /// Segment name ("Hotels", "Hostels", ...)
    pub label: &'static str,
    /// One-line description of what the segment needs
    pub description: &'static str,
}

/// An optional add-on service sold on top of a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Addon {
    /// Add-on name
    pub name: &'static str,
    /// One-line pitch
    pub description: &'static str,
}

/// Site-wide metadata feeding the `<head>` tags and the JSON-LD
/// documents.
///
/// The url, phone, and logo values are deployment placeholders,
/// substituted manually before going live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    /// Business name
    pub name: &'static str,
    /// Canonical site URL (no trailing slash)
    pub url: &'static str,
    /// Meta description, shared by OG/Twitter tags
    pub description: &'static str,
    /// Logo path, relative to the site root
    pub logo: &'static str,
    /// Contact phone in E.164-ish display form
    pub phone: &'static str,
    /// Social profile URLs for the `sameAs` listing
    pub same_as: &'static [&'static str],
}

/// The site metadata record. Single canonical source for every
/// metadata tag and structured-data document on the page.
pub const SITE: SiteMetadata = SiteMetadata {
    name: "Moondry",
    url: "https://moondry.in",
    description: "Subscription-based laundry service in India. Doorstep pickup, \
        eco-friendly cleaning, ironing, and 24-hour delivery with add-ons for \
        baby and intimates.",
    logo: "/logo.png",
    phone: "+91-0000000000",
    same_as: &[
        "https://www.facebook.com/moondry",
        "https://www.instagram.com/moondry",
    ],
};

/// The three subscription tiers, in display order.
pub const TIERS: &[SubscriptionTier] = &[
    SubscriptionTier {
        name: "Starter",
        tag: "Individuals",
        featured: false,
        monthly: 799,
        yearly: 799 * 10,
        bullets: &[
            "1 pickup/week",
            "Up to 20 kg/month",
            "48-hour turnaround",
            "Pickup + delivery included",
            "App/WhatsApp tracking",
        ],
    },
    SubscriptionTier {
        name: "Standard",
        tag: "Families",
        featured: true,
        monthly: 1299,
        yearly: 1299 * 10,
        bullets: &[
            "2 pickups/week",
            "Up to 50 kg/month",
            "24-hour turnaround",
            "Free eco-detergent",
            "Priority support",
        ],
    },
    SubscriptionTier {
        name: "Pro",
        tag: "Power users",
        featured: false,
        monthly: 1999,
        yearly: 1999 * 10,
        bullets: &[
            "3 pickups/week",
            "Up to 90 kg/month",
            "Same-day express 2x/mo",
            "Dedicated concierge",
            "Damage protection",
        ],
    },
];

/// FAQ entries, in display order.
pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What's included in the subscription?",
        answer: "Pickup, washing, drying, ironing, and delivery. Stain treatment \
            and express are available as add-ons in some plans.",
    },
    FaqEntry {
        question: "How fast is delivery?",
        answer: "Standard 24 hours. Express same-day is optional and subject to \
            slot availability.",
    },
    FaqEntry {
        question: "How do you ensure hygiene?",
        answer: "Loads are segregated by color and fabric. Baby and intimates use \
            separate cycles with hypoallergenic chemistry.",
    },
    FaqEntry {
        question: "Is there a contract?",
        answer: "Subscriptions renew monthly or annually. Pause or cancel anytime \
            before the next billing date.",
    },
];

/// B2B segments, in display order.
pub const B2B_SEGMENTS: &[B2bSegment] = &[
    B2bSegment { label: "Hotels", description: "Housekeeping cycles and linens" },
    B2bSegment { label: "Hostels", description: "High churn, daily returns" },
    B2bSegment { label: "Hospitals", description: "Hygiene-first, segregated" },
    B2bSegment { label: "Catering", description: "Stain treatment, bulk" },
];

/// Add-on services, in display order.
pub const ADDONS: &[Addon] = &[
    Addon {
        name: "Baby care",
        description: "Separate hypoallergenic cycles for baby clothes and cloth nappies",
    },
    Addon {
        name: "Intimates",
        description: "Dedicated mesh-bag cycles with gentle chemistry",
    },
    Addon {
        name: "Stain treatment",
        description: "Pre-treatment for oil, turmeric, and ink before the main wash",
    },
    Addon {
        name: "Same-day express",
        description: "Morning pickup, evening delivery, subject to slot availability",
    },
];

/// Format a whole-INR amount with a rupee sign and digit grouping,
/// e.g. `12990` -> `"₹12,990"`.
///
/// Catalog prices stay below one lakh, so plain three-digit grouping
/// matches the Indian rendering for every value we display.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('₹');
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn yearly_is_ten_months() {
        for tier in TIERS {
            assert_eq!(tier.yearly, tier.monthly * 10, "tier {}", tier.name);
        }
    }

    #[test]
    fn exactly_one_featured_tier() {
        let featured: Vec<_> = TIERS.iter().filter(|t| t.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name, "Standard");
    }

    #[test]
    fn tier_names_are_distinct() {
        let mut names: Vec<_> = TIERS.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TIERS.len());
    }

    #[test]
    fn price_follows_billing_mode() {
        for tier in TIERS {
            assert_eq!(tier.price(false), tier.monthly);
            assert_eq!(tier.price(true), tier.yearly);
        }
    }

    #[test]
    fn double_toggle_returns_original_price() {
        let mut annual = false;
        let before: Vec<_> = TIERS.iter().map(|t| t.price(annual)).collect();
        annual = !annual;
        annual = !annual;
        let after: Vec<_> = TIERS.iter().map(|t| t.price(annual)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn every_tier_has_bullets() {
        for tier in TIERS {
            assert!(!tier.bullets.is_empty(), "tier {}", tier.name);
        }
    }

    #[test]
    fn inr_formatting_groups_digits() {
        assert_eq!(format_inr(799), "₹799");
        assert_eq!(format_inr(1299), "₹1,299");
        assert_eq!(format_inr(19990), "₹19,990");
    }
}

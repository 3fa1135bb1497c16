use leptos::prelude::*;
use moondry_site::catalog::{SubscriptionTier, TIERS, format_inr};

#[component]
pub fn Plans() -> impl IntoView {
    let (annual, set_annual) = signal(true);

    view! {
        <section id="plans" class="section plans">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Plans for every basket"</h2>
                    <p class="section-description">
                        "Every plan includes pickup, washing, drying, ironing, and delivery. "
                        "Pause or cancel anytime before the next billing date."
                    </p>
                </div>

                <div class="billing-row">
                    <div class="billing-toggle" role="group" aria-label="Billing period">
                        <button
                            class=move || if annual.get() { "billing-option" } else { "billing-option active" }
                            on:click=move |_| set_annual.set(false)
                        >
                            "Monthly"
                        </button>
                        <button
                            class=move || if annual.get() { "billing-option active" } else { "billing-option" }
                            on:click=move |_| set_annual.set(true)
                        >
                            "Annual"
                        </button>
                    </div>
                    <span class="billing-note">"Annual billing = 2 months free"</span>
                </div>

                <div class="card-grid">
                    {TIERS.iter().map(|tier| view! {
                        <PlanCard tier=tier annual=annual />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(tier: &'static SubscriptionTier, annual: ReadSignal<bool>) -> impl IntoView {
    let card_class = if tier.featured { "card plan-card featured" } else { "card plan-card" };

    view! {
        <article class=card_class>
            {tier.featured.then(|| view! { <div class="plan-badge">"Most popular"</div> })}
            <p class="plan-tag">{tier.tag}</p>
            <h3 class="plan-name">{tier.name}</h3>
            <div class="plan-price-row">
                <span class="plan-price">
                    {move || format_inr(tier.price(annual.get()))}
                </span>
                <span class="plan-period">
                    {move || SubscriptionTier::period_suffix(annual.get())}
                </span>
            </div>
            <ul class="plan-bullets">
                {tier.bullets.iter().map(|bullet| view! {
                    <li>{*bullet}</li>
                }).collect::<Vec<_>>()}
            </ul>
            <a href="#contact" class="btn btn-primary plan-cta">"Choose "{tier.name}</a>
        </article>
    }
}

use leptos::prelude::*;
use moondry_site::SITE;
use moondry_site::catalog::B2B_SEGMENTS;

#[component]
pub fn B2b() -> impl IntoView {
    view! {
        <section id="b2b" class="section b2b">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"For businesses"</h2>
                    <p class="section-description">
                        "Volume pricing, dedicated slots, and hygiene-first handling."
                    </p>
                </div>
                <div class="card-grid">
                    {B2B_SEGMENTS.iter().map(|segment| view! {
                        <div class="card b2b-card">
                            <h3 class="b2b-label">{segment.label}</h3>
                            <p class="b2b-description">{segment.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
                <p class="b2b-contact">
                    "Talk to us about a custom contract: "
                    <a href=format!("tel:{}", SITE.phone)>{SITE.phone}</a>
                </p>
            </div>
        </section>
    }
}

use leptos::prelude::*;
use moondry_site::catalog::ADDONS;

#[component]
pub fn Addons() -> impl IntoView {
    view! {
        <section id="addons" class="section addons">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Add-ons"</h2>
                    <p class="section-description">
                        "Bolt onto any plan, billed per pickup."
                    </p>
                </div>
                <div class="card-grid">
                    {ADDONS.iter().map(|addon| view! {
                        <div class="card addon-card">
                            <h3 class="addon-name">{addon.name}</h3>
                            <p class="addon-description">{addon.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

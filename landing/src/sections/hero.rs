use leptos::prelude::*;
use moondry_site::SITE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            <span class="hero-accent">"Laundry, subscribed."</span>
                            <br />
                            "Picked up at your door, back in 24 hours."
                        </h1>
                        <p class="hero-description">{SITE.description}</p>
                        <div class="hero-actions">
                            <a href="#plans" class="btn btn-primary">"See plans"</a>
                            <a href="#how" class="btn">"How it works →"</a>
                        </div>
                    </div>
                    <PickupCard />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PickupCard() -> impl IntoView {
    view! {
        <div class="card pickup-card">
            <div class="pickup-header">
                <span class="pickup-title">"This week"</span>
            </div>
            <div class="pickup-row">
                <span>"Tue 08:30"</span>
                <span>"Pickup · 6.2 kg"</span>
            </div>
            <div class="pickup-row">
                <span>"Wed 18:00"</span>
                <span>"Delivered · ironed"</span>
            </div>
            <div class="pickup-row">
                <span>"Fri 08:30"</span>
                <span>"Pickup · scheduled"</span>
            </div>
            <div class="pickup-note">"Track every load on WhatsApp"</div>
        </div>
    }
}

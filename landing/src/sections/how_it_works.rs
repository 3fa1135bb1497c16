use leptos::prelude::*;

const STEPS: &[(&str, &str, &str)] = &[
    ("1", "Schedule", "Pick a weekly pickup slot in the app or on WhatsApp."),
    ("2", "We collect", "A rider picks up your bag at the door and weighs it on the spot."),
    ("3", "Clean + press", "Washed, dried, and ironed with loads segregated by color and fabric."),
    ("4", "Back in 24h", "Delivered folded to your door the next day, express same-day optional."),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how" class="section how">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"How it works"</h2>
                    <p class="section-description">
                        "One subscription, zero laundry days."
                    </p>
                </div>
                <div class="card-grid">
                    {STEPS.iter().map(|(num, title, description)| view! {
                        <div class="card step-card">
                            <div class="step-number">{*num}</div>
                            <h3 class="step-title">{*title}</h3>
                            <p class="step-description">{*description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;
use moondry_site::catalog::FAQ;

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id="faq" class="section faq">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Frequently asked questions"</h2>
                </div>
                <div class="faq-list">
                    {FAQ.iter().map(|entry| view! {
                        <details class="faq-item">
                            <summary>{entry.question}</summary>
                            <p class="faq-answer">{entry.answer}</p>
                        </details>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

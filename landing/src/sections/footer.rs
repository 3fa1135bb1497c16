use leptos::prelude::*;
use moondry_site::SITE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="nav-logo"></span>
                    <span class="footer-title">{SITE.name}</span>
                </div>
                <div class="footer-links">
                    {SITE.same_as.iter().map(|url| {
                        let label = if url.contains("facebook") { "Facebook" } else { "Instagram" };
                        view! {
                            <a href=*url target="_blank" class="footer-link">{label}</a>
                        }
                    }).collect::<Vec<_>>()}
                    <a href=format!("tel:{}", SITE.phone) class="footer-link">{SITE.phone}</a>
                </div>
                <p class="footer-copyright">
                    {format!("© 2026 {}. Eco-friendly laundry, delivered.", SITE.name)}
                </p>
            </div>
        </footer>
    }
}

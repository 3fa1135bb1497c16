use leptos::prelude::*;
use moondry_site::SITE;

const NAV_ANCHORS: &[(&str, &str)] = &[
    ("#how", "How it works"),
    ("#plans", "Plans"),
    ("#addons", "Add-ons"),
    ("#b2b", "B2B"),
    ("#faq", "FAQ"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href="/" class="nav-brand">
                    <div class="nav-logo"></div>
                    <span class="nav-title">{SITE.name}</span>
                </a>
                <div class="nav-links">
                    {NAV_ANCHORS.iter().map(|(href, label)| view! {
                        <a href=*href class="nav-link">{*label}</a>
                    }).collect::<Vec<_>>()}
                </div>
                <button
                    class="nav-menu-btn"
                    aria-label="Menu"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            // Mobile menu overlay
            <Show when=move || menu_open.get()>
                <div class="nav-mobile">
                    {NAV_ANCHORS.iter().map(|(href, label)| view! {
                        <a
                            href=*href
                            class="nav-link"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            {*label}
                        </a>
                    }).collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}

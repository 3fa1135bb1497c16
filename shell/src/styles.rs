//! CSS styles for the landing page.
//!
//! This module contains the base CSS embedded in the static shell:
//! typography, the card grids, and the light indigo/cyan theme. The
//! CSR app relies on the same class names, so shell and app stay
//! visually consistent.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use moondry_shell::styles::BASE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", BASE_CSS, my_css);
//! ```

/// Base CSS for the page - light theme, indigo accent.
pub const BASE_CSS: &str = r#"
:root {
    --bg: #fafafa;
    --surface: #ffffff;
    --text: #171717;
    --text-dim: #525252;
    --border: #e5e5e5;
    --accent: #4f46e5;
    --accent-soft: #eef2ff;
    --cyan: #22d3ee;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    line-height: 1.6;
}

.container {
    max-width: 1120px;
    margin: 0 auto;
    padding: 0 24px;
}

.nav {
    position: sticky;
    top: 0;
    z-index: 40;
    background: rgba(255, 255, 255, 0.85);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--border);
}

.nav-inner {
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    height: 32px;
    width: 32px;
    border-radius: 12px;
    background: linear-gradient(135deg, var(--accent), var(--cyan));
}

.nav-links { display: flex; gap: 32px; }
.nav-link { color: var(--text-dim); text-decoration: none; }
.nav-link:hover { color: var(--accent); }
.nav-menu-btn { display: none; background: none; border: 0; cursor: pointer; }

.nav-mobile {
    position: absolute;
    top: 64px;
    left: 0;
    right: 0;
    display: flex;
    flex-direction: column;
    gap: 16px;
    padding: 16px 24px;
    background: var(--surface);
    border-top: 1px solid var(--border);
}

.hero { padding: 96px 0 64px; }
.hero-title { font-size: 48px; line-height: 1.1; margin: 0 0 16px; }
.hero-accent { color: var(--accent); }
.hero-description { color: var(--text-dim); max-width: 560px; }

.btn {
    display: inline-block;
    padding: 12px 24px;
    border-radius: 12px;
    text-decoration: none;
    border: 1px solid var(--border);
}
.btn-primary { background: var(--accent); color: #fff; border-color: var(--accent); }

.section { padding: 64px 0; }
.section-title { font-size: 32px; margin: 0 0 8px; }
.section-description { color: var(--text-dim); margin: 0 0 32px; }

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 24px;
}

.card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 16px;
    padding: 24px;
}

.plan-card.featured {
    border-color: var(--accent);
    box-shadow: 0 8px 24px rgba(79, 70, 229, 0.15);
}

.plan-tag {
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    color: var(--text-dim);
}

.plan-price { font-size: 36px; font-weight: 700; }
.plan-period { font-size: 14px; color: var(--text-dim); }
.plan-bullets { padding-left: 20px; color: var(--text-dim); }

.billing-toggle {
    display: inline-flex;
    border: 1px solid var(--border);
    border-radius: 12px;
    overflow: hidden;
    margin-bottom: 24px;
}
.billing-option { padding: 8px 20px; background: var(--surface); border: 0; cursor: pointer; }
.billing-option.active { background: var(--accent-soft); color: var(--accent); }
.billing-note { font-size: 13px; color: var(--text-dim); margin-left: 12px; }

.billing-row { display: flex; align-items: center; margin-bottom: 24px; }

.step-number {
    width: 32px;
    height: 32px;
    border-radius: 50%;
    background: var(--accent-soft);
    color: var(--accent);
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
}

.plan-badge {
    display: inline-block;
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    color: var(--accent);
    background: var(--accent-soft);
    border-radius: 999px;
    padding: 4px 12px;
}

.pickup-card { font-size: 14px; }
.pickup-title { font-weight: 600; }
.pickup-row {
    display: flex;
    justify-content: space-between;
    border-top: 1px solid var(--border);
    padding: 8px 0;
    color: var(--text-dim);
}
.pickup-note { margin-top: 8px; font-size: 13px; color: var(--accent); }

.faq-item { border-bottom: 1px solid var(--border); padding: 16px 0; }
.faq-item summary { cursor: pointer; font-weight: 600; }
.faq-answer { color: var(--text-dim); margin-top: 8px; }

.footer {
    border-top: 1px solid var(--border);
    padding: 40px 0;
    color: var(--text-dim);
    font-size: 14px;
}
.footer-links { display: flex; gap: 24px; margin-bottom: 16px; }
.footer-link { color: var(--text-dim); text-decoration: none; }

@media (max-width: 768px) {
    .nav-links { display: none; }
    .nav-menu-btn { display: block; }
    .hero-title { font-size: 36px; }
}
"#;

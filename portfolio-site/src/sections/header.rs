use leptos::prelude::*;
use portfolio_core::content::Accent;

/// Centered section title with an accent underline.
#[component]
pub fn SectionHeader(title: &'static str, accent: Accent) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class=format!("section-title {}", accent.css_class())>{title}</h2>
            <div class=format!("section-rule {}", accent.css_class())></div>
        </div>
    }
}

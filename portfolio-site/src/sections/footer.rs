use leptos::prelude::*;
use portfolio_core::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">
                    {format!("© 2024 {}. Built with Rust, Leptos and WebAssembly.", PROFILE.name)}
                </p>
            </div>
        </footer>
    }
}

// Alex Chen portfolio — Leptos 0.8 Edition
// Single page, client rendered, scroll-tracked navigation.

mod dom;
mod sections;
mod telemetry;
mod tracking;

use leptos::prelude::*;
use portfolio_core::MenuState;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    telemetry::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let active = tracking::use_active_section();
    let menu = RwSignal::new(MenuState::new());

    tracing::info!(version = sections::VERSION, "portfolio mounted");

    view! {
        <DevConsole menu=menu />
        <Nav active=active menu=menu />
        <main>
            <Hero />
            <About />
            <Projects />
            <Skills />
            <Contact />
        </main>
        <Footer />
    }
}

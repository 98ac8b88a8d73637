use leptos::prelude::*;
use portfolio_core::content::PROFILE;
use portfolio_core::{MenuState, Section};

use super::icons::{ICON_CLOSE, ICON_MENU, Icon};
use crate::tracking::navigate;

#[component]
pub fn Nav(active: Signal<Section>, menu: RwSignal<MenuState>) -> impl IntoView {
    let is_open = move || menu.with(MenuState::is_open);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <div class="nav-brand">
                    <span class="nav-title">{PROFILE.brand}</span>
                </div>

                <div class="nav-links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavEntry section=section active=active menu=menu class="nav-link" /> })
                        .collect_view()}
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    <Show
                        when=is_open
                        fallback=|| view! { <Icon path=ICON_MENU /> }
                    >
                        <Icon path=ICON_CLOSE />
                    </Show>
                </button>
            </div>

            // Mobile panel
            <Show when=is_open>
                <div class="nav-drawer">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavEntry section=section active=active menu=menu class="nav-drawer-link" /> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavEntry(
    section: Section,
    active: Signal<Section>,
    menu: RwSignal<MenuState>,
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            class=move || entry_class(class, active.get() == section)
            on:click=move |_| navigate(section, menu)
        >
            {section.label()}
        </button>
    }
}

fn entry_class(base: &str, is_active: bool) -> String {
    if is_active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

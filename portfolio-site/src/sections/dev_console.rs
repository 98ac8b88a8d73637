//! Developer console hooks for people who open devtools.
//!
//! Prints a banner on mount and installs a `portfolio` namespace on
//! `window` with a few helpers. The namespace is removed again when the
//! owning component is cleaned up.

use js_sys::{Object, Reflect};
use leptos::prelude::*;
use portfolio_core::content::{PROFILE, PROJECTS};
use portfolio_core::{MenuState, Section};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use super::VERSION;
use crate::tracking::navigate;

const NAMESPACE: &str = "portfolio";

fn banner() -> String {
    format!(
        r#"
   ___  ____  ____  ____
  / _ \/ __ \/ __ \/_  /
 / ___/ /_/ / /_/ / / /_
/_/   \____/\____/ /___/

  {name}
  {VERSION} | built with Rust + Leptos
"#,
        name = PROFILE.name
    )
}

/// Mounts the console hooks. Renders nothing.
#[component]
#[allow(clippy::unused_unit)]
pub fn DevConsole(menu: RwSignal<MenuState>) -> impl IntoView {
    Effect::new(move || {
        print_banner();
        install_namespace(menu);
    });
    on_cleanup(remove_namespace);

    view! {}
}

fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", banner())),
        &JsValue::from_str("color: #22d3ee; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c(^_^) portfolio.goto(\"projects\") scrolls to a section"),
        &JsValue::from_str("color: #a78bfa;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c(o_o) portfolio.sections() lists section ids"),
        &JsValue::from_str("color: #a78bfa;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c(*_*) portfolio.projects() returns the showcase as JSON"),
        &JsValue::from_str("color: #a78bfa;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%cSay hi: {}", PROFILE.email)),
        &JsValue::from_str("color: #fb923c; font-weight: bold;"),
    );
}

fn install_namespace(menu: RwSignal<MenuState>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let namespace = Object::new();

    // goto(id)
    let goto_fn = Closure::wrap(Box::new(move |id: String| match id.parse::<Section>() {
        Ok(section) => navigate(section, menu),
        Err(err) => tracing::warn!(%err, "console navigation ignored"),
    }) as Box<dyn Fn(String)>);
    let _ = Reflect::set(&namespace, &JsValue::from_str("goto"), goto_fn.as_ref());
    goto_fn.forget();

    // sections()
    let sections_fn = Closure::wrap(Box::new(|| {
        let ids: Vec<&str> = Section::ALL.iter().map(Section::id).collect();
        JsValue::from_str(&ids.join(", "))
    }) as Box<dyn Fn() -> JsValue>);
    let _ = Reflect::set(
        &namespace,
        &JsValue::from_str("sections"),
        sections_fn.as_ref(),
    );
    sections_fn.forget();

    // projects()
    let projects_fn = Closure::wrap(Box::new(|| match serde_json::to_string_pretty(PROJECTS) {
        Ok(json) => JsValue::from_str(&json),
        Err(err) => {
            tracing::warn!(%err, "could not serialize projects");
            JsValue::NULL
        }
    }) as Box<dyn Fn() -> JsValue>);
    let _ = Reflect::set(
        &namespace,
        &JsValue::from_str("projects"),
        projects_fn.as_ref(),
    );
    projects_fn.forget();

    if Reflect::set(&window, &JsValue::from_str(NAMESPACE), &namespace).is_err() {
        tracing::warn!("could not install console namespace");
    }
}

fn remove_namespace() {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::delete_property(&window, &JsValue::from_str(NAMESPACE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_owner_and_version() {
        let text = banner();
        assert!(text.contains(PROFILE.name));
        assert!(text.contains(VERSION));
    }
}

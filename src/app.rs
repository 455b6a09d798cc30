//! Tier List Frontend App
//!
//! Header with theme toggle, toolbar, tier board and item pool.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemPool, TierBoard, Toolbar};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

/// Initial theme follows the OS preference
fn prefers_dark_mode() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply_theme(dark_mode: bool) {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", dark_mode);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(prefers_dark_mode()));
    provide_context(store);
    provide_context(AppContext::new());

    Effect::new(move |_| apply_theme(store.dark_mode().get()));

    let toggle_theme = move |_| store.dark_mode().update(|dark| *dark = !*dark);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Tier List Generator"</h1>
                <button class="theme-toggle" on:click=toggle_theme>
                    {move || if store.dark_mode().get() { "☀" } else { "☾" }}
                </button>
            </header>
            <main class="main-content">
                <Toolbar />
                <TierBoard />
                <ItemPool />
            </main>
        </div>
    }
}

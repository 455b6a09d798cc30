//! Toolbar Component
//!
//! PNG export and tier creation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use tierlist_core::{tier_color_for_hue, NEW_TIER_LABEL};

use crate::context::use_app_context;
use crate::export::export_png;
use crate::store::{store_add_tier, use_app_store, AppStateStoreFields};

#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (exporting, set_exporting) = signal(false);

    let on_export = move |_| {
        let Some(board) = ctx.board_ref.get_untracked() else { return };
        let dark_mode = store.dark_mode().get_untracked();
        set_exporting.set(true);
        spawn_local(async move {
            match export_png(&board, dark_mode).await {
                Ok(()) => web_sys::console::log_1(&"[EXPORT] Saved tier list image".into()),
                Err(e) => web_sys::console::error_1(&format!("[EXPORT] Failed to export image: {}", e).into()),
            }
            set_exporting.set(false);
        });
    };

    let on_add_tier = move |_| {
        let color = tier_color_for_hue(js_sys::Math::random() * 360.0);
        store_add_tier(&store, NEW_TIER_LABEL, color);
    };

    view! {
        <div class="toolbar">
            <button class="export-btn" on:click=on_export disabled=move || exporting.get()>
                {move || if exporting.get() { "Exporting..." } else { "Export as PNG" }}
            </button>
            <button class="add-tier-btn" on:click=on_add_tier>"+ Add Tier"</button>
        </div>
    }
}

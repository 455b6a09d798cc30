//! Item Pool Component
//!
//! Unassigned items plus the controls that create new ones.
//! Dropping on the pool (or anywhere outside a tier) sends an item here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use tierlist_core::{ItemContent, NEW_TEXT_ITEM};
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseover};

use crate::components::ItemCard;
use crate::context::use_app_context;
use crate::store::{store_add_item, use_app_store, AppStateStoreFields};
use crate::upload::{first_file, read_file_as_data_url};

/// Drop target id reported by the pool area
pub const POOL_TARGET_ID: &str = "pool";

#[component]
pub fn ItemPool() -> impl IntoView {
    let store = use_app_store();
    let dnd = use_app_context().dnd;

    let on_mouseover = make_on_target_mouseover(dnd, POOL_TARGET_ID.to_string());
    let on_mouseleave = make_on_mouseleave(dnd);

    let add_text = move |_| {
        store_add_item(&store, ItemContent::text(NEW_TEXT_ITEM));
    };

    let on_image_picked = move |ev: web_sys::Event| {
        let Some(file) = first_file(&ev) else { return };
        spawn_local(async move {
            let content = read_file_as_data_url(file)
                .await
                .and_then(|url| ItemContent::image(url).map_err(|e| e.to_string()));
            match content {
                Ok(content) => {
                    let id = store_add_item(&store, content);
                    web_sys::console::log_1(&format!("[UPLOAD] Added image item {}", id).into());
                }
                Err(e) => web_sys::console::error_1(&format!("[UPLOAD] {}", e).into()),
            }
        });
    };

    let pool_items = move || store.board().read().pool().to_vec();

    view! {
        <section class="item-pool" on:mouseover=on_mouseover on:mouseleave=on_mouseleave>
            <div class="item-pool-header">
                <h2>"Items"</h2>
                <div class="item-pool-actions">
                    <button class="pool-btn" on:click=add_text>"Add Text"</button>
                    <label class="pool-btn">
                        "Add Image"
                        <input type="file" accept="image/*" class="hidden-input" on:change=on_image_picked />
                    </label>
                </div>
            </div>
            <div class="item-pool-items">
                {move || pool_items().into_iter().map(|item| view! { <ItemCard item=item /> }).collect_view()}
            </div>
            <p class="item-count">{move || format!("{} items", store.board().read().item_count())}</p>
        </section>
    }
}

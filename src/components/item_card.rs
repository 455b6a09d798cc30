//! Item Card Component
//!
//! A draggable item: text at its font size, or an image.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use tierlist_core::{Item, ItemContent, ItemKind, ItemPatch};
use leptos_dragdrop::{make_on_mousedown, make_on_target_mouseover};

use crate::context::use_app_context;
use crate::store::{store_remove_item, store_update_item, use_app_store};
use crate::upload::{first_file, read_file_as_data_url};

/// Font size used when an item has none set
const DEFAULT_FONT_SIZE: f32 = 14.0;
const FONT_SIZE_STEP: f32 = 2.0;
const FONT_SIZE_RANGE: (f32, f32) = (8.0, 48.0);

fn stepped_font_size(current: Option<f32>, delta: f32) -> f32 {
    let (min, max) = FONT_SIZE_RANGE;
    (current.unwrap_or(DEFAULT_FONT_SIZE) + delta).clamp(min, max)
}

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let dnd = ctx.dnd;

    let id = item.id.clone();
    let font_size = item.font_size;
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(item.content.payload().to_string());

    let on_mousedown = make_on_mousedown(dnd, id.to_string());
    let on_mouseover = make_on_target_mouseover(dnd, id.to_string());

    let drag_id = id.to_string();
    let card_class = move || {
        if dnd.is_dragging_item(&drag_id) { "item-card dragging" } else { "item-card" }
    };

    let save_id = id.clone();
    let save = move || {
        store_update_item(&store, &save_id, ItemPatch::content(draft.get_untracked()));
        set_editing.set(false);
    };

    let upload_id = id.clone();
    let on_image_picked = move |ev: web_sys::Event| {
        let Some(file) = first_file(&ev) else { return };
        let item_id = upload_id.clone();
        spawn_local(async move {
            match read_file_as_data_url(file).await {
                Ok(data_url) => store_update_item(&store, &item_id, ItemPatch::image(data_url)),
                Err(e) => web_sys::console::error_1(&format!("[UPLOAD] {}", e).into()),
            }
        });
    };

    let is_text = item.kind() == ItemKind::Text;
    let body = match item.content {
        ItemContent::Text(text) => {
            let size_style = format!("font-size: {}px;", font_size.unwrap_or(DEFAULT_FONT_SIZE));
            let save_on_enter = save.clone();
            view! {
                <Show
                    when=move || editing.get()
                    fallback=move || view! { <span class="item-text" style=size_style.clone()>{text.clone()}</span> }
                >
                    <input
                        class="item-edit-input"
                        type="text"
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                                set_draft.set(input.value());
                            }
                        }
                        on:keydown={
                            let save = save_on_enter.clone();
                            move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" { save(); }
                                if ev.key() == "Escape" { set_editing.set(false); }
                            }
                        }
                    />
                    <button class="item-save-btn" on:click={
                        let save = save_on_enter.clone();
                        move |_| save()
                    }>"✓"</button>
                </Show>
            }.into_any()
        }
        ItemContent::Image(src) => view! {
            <img class="item-image" src=src alt="" draggable="false" />
        }.into_any(),
    };

    let shrink_id = id.clone();
    let grow_id = id.clone();
    let reset_id = id.clone();
    let remove_id = id.clone();

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseover=on_mouseover
        >
            {body}
            <div class="item-actions">
                {is_text.then(|| view! {
                    <button class="item-btn" title="Edit" on:click=move |_| {
                        if !ctx.swallow_click() { set_editing.set(true); }
                    }>"✎"</button>
                    <button class="item-btn" title="Smaller" on:click=move |_| {
                        store_update_item(&store, &shrink_id, ItemPatch::font_size(stepped_font_size(font_size, -FONT_SIZE_STEP)));
                    }>"A-"</button>
                    <button class="item-btn" title="Larger" on:click=move |_| {
                        store_update_item(&store, &grow_id, ItemPatch::font_size(stepped_font_size(font_size, FONT_SIZE_STEP)));
                    }>"A+"</button>
                    {font_size.is_some().then(|| view! {
                        <button class="item-btn" title="Default size" on:click=move |_| {
                            store_update_item(&store, &reset_id, ItemPatch::reset_font_size());
                        }>"A"</button>
                    })}
                })}
                <label class="item-btn" title="Use image">
                    "🖼"
                    <input type="file" accept="image/*" class="hidden-input" on:change=on_image_picked />
                </label>
                <button class="item-btn delete-btn" title="Remove" on:click=move |_| {
                    store_remove_item(&store, &remove_id);
                }>"×"</button>
            </div>
        </div>
    }
}

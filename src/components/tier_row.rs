//! Tier Row Component
//!
//! One tier: colored label swatch, its items, and row controls.
//! The row, the swatch and the label all report the tier id as drop target.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use tierlist_core::{Tier, TierPatch};
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseover};

use crate::components::{ConfirmButton, ItemCard};
use crate::context::use_app_context;
use crate::store::{store_remove_tier, store_shift_tier, store_update_tier, use_app_store, AppStateStoreFields};

fn input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[component]
pub fn TierRow(tier: Tier) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let dnd = ctx.dnd;

    let Tier { id, label, color, items } = tier;
    let (editing_label, set_editing_label) = signal(false);
    let (label_draft, set_label_draft) = signal(label.clone());

    let on_mouseover = make_on_target_mouseover(dnd, id.to_string());
    let on_mouseleave = make_on_mouseleave(dnd);

    let hover_id = id.clone();
    let row_class = move || {
        let hovered = store.drag().read().hovered_tier() == Some(&hover_id);
        if hovered { "tier-row drop-target" } else { "tier-row" }
    };

    let label_id = id.clone();
    let save_label = move || {
        store_update_tier(&store, &label_id, TierPatch::label(label_draft.get_untracked()));
        set_editing_label.set(false);
    };

    let color_id = id.clone();
    let on_color_input = move |ev: web_sys::Event| {
        if let Some(value) = input_value(&ev) {
            store_update_tier(&store, &color_id, TierPatch::color(value));
        }
    };

    let up_id = id.clone();
    let down_id = id.clone();
    let remove_id = id.clone();

    view! {
        <div class=row_class on:mouseover=on_mouseover on:mouseleave=on_mouseleave>
            <div class="tier-swatch" style=format!("background-color: {};", color)>
                <Show
                    when=move || editing_label.get()
                    fallback=move || view! {
                        <span
                            class="tier-label"
                            on:click=move |_| {
                                if !ctx.swallow_click() { set_editing_label.set(true); }
                            }
                        >
                            {label.clone()}
                        </span>
                    }
                >
                    <input
                        class="tier-label-input"
                        type="text"
                        prop:value=move || label_draft.get()
                        on:input=move |ev| {
                            if let Some(value) = input_value(&ev) { set_label_draft.set(value); }
                        }
                        on:keydown={
                            let save = save_label.clone();
                            move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" { save(); }
                            }
                        }
                        on:blur={
                            let save = save_label.clone();
                            move |_| save()
                        }
                    />
                </Show>
                <input
                    type="color"
                    class="tier-color-input"
                    title="Tier color"
                    prop:value=color.clone()
                    on:input=on_color_input
                />
            </div>

            <div class="tier-items">
                {items.into_iter().map(|item| view! { <ItemCard item=item /> }).collect_view()}
            </div>

            <div class="tier-controls">
                <button class="tier-btn" title="Move up" on:click=move |_| store_shift_tier(&store, &up_id, -1)>"▲"</button>
                <button class="tier-btn" title="Move down" on:click=move |_| store_shift_tier(&store, &down_id, 1)>"▼"</button>
                <ConfirmButton
                    button_class="tier-btn delete-btn"
                    prompt="Remove tier?"
                    on_confirm=move |_| store_remove_tier(&store, &remove_id)
                />
            </div>
        </div>
    }
}

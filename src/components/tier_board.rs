//! Tier Board Component
//!
//! Renders every tier and wires mouse gestures to the drag coordinator.

use leptos::prelude::*;

use tierlist_core::GestureOutcome;
use leptos_dragdrop::{bind_gesture_handlers, GestureHandlers};

use crate::components::TierRow;
use crate::context::use_app_context;
use crate::store::{
    store_drag_cancel, store_drag_over, store_drag_release, store_drag_start, use_app_store,
    AppStateStoreFields,
};

fn log_outcome(outcome: &GestureOutcome) {
    match outcome {
        GestureOutcome::Moved { item_id, from, to, index } => {
            web_sys::console::log_1(&format!("[DND] Moved {} from {} to {}[{}]", item_id, from, to, index).into());
        }
        GestureOutcome::Stale => {
            web_sys::console::log_1(&"[DND] Drop ignored: item no longer in its source".into());
        }
        GestureOutcome::SameTier => {
            web_sys::console::log_1(&"[DND] Drop on own tier, nothing to do".into());
        }
        _ => {}
    }
}

#[component]
pub fn TierBoard() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    bind_gesture_handlers(ctx.dnd, GestureHandlers {
        on_start: Callback::new(move |item_id: String| {
            web_sys::console::log_1(&format!("[DND] Drag start: {}", item_id).into());
            store_drag_start(&store, item_id);
        }),
        on_over: Callback::new(move |target: Option<String>| {
            store_drag_over(&store, target.as_deref());
        }),
        on_release: Callback::new(move |target: Option<String>| {
            let outcome = store_drag_release(&store, target.as_deref());
            log_outcome(&outcome);
        }),
        on_cancel: Callback::new(move |_: ()| {
            web_sys::console::log_1(&"[DND] Drag cancelled".into());
            store_drag_cancel(&store);
        }),
    });

    let tiers = move || store.board().read().tiers().to_vec();

    view! {
        <div class="tier-board" node_ref=ctx.board_ref>
            {move || tiers().into_iter().map(|tier| view! { <TierRow tier=tier /> }).collect_view()}
        </div>
    }
}

//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board itself
//! is a plain `TierListStore`; the helpers below are the only place the UI
//! mutates it.

use leptos::prelude::*;
use reactive_stores::Store;
use tierlist_core::{
    DragCoordinator, GestureOutcome, ItemContent, ItemId, ItemPatch, TierId, TierListStore,
    TierPatch,
};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tiers and the unassigned pool
    pub board: TierListStore,
    /// Gesture in flight, if any
    pub drag: DragCoordinator,
    /// Dark theme toggle
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Board Helper Functions
// ========================

pub fn store_add_tier(store: &AppStore, label: &str, color: String) -> TierId {
    store.board().write().add_tier(label, color)
}

pub fn store_remove_tier(store: &AppStore, tier_id: &TierId) {
    store.board().write().remove_tier(tier_id);
}

pub fn store_update_tier(store: &AppStore, tier_id: &TierId, patch: TierPatch) {
    store.board().write().update_tier(tier_id, patch);
}

/// Shift a tier up (negative) or down (positive) in the ranking
pub fn store_shift_tier(store: &AppStore, tier_id: &TierId, offset: isize) {
    let position = store.board().read_untracked().snapshot().tier_position(tier_id);
    match position {
        Ok(from) => {
            let Some(to) = from.checked_add_signed(offset) else { return };
            store.board().write().reorder_tiers(from, to);
        }
        Err(e) => web_sys::console::error_1(&format!("[STORE] Cannot move tier: {}", e).into()),
    }
}

pub fn store_add_item(store: &AppStore, content: ItemContent) -> ItemId {
    store.board().write().add_item(content, None)
}

pub fn store_update_item(store: &AppStore, item_id: &ItemId, patch: ItemPatch) {
    store.board().write().update_item(item_id, patch);
}

pub fn store_remove_item(store: &AppStore, item_id: &ItemId) {
    store.board().write().remove_item(item_id);
}

// ========================
// Gesture Helper Functions
// ========================

pub fn store_drag_start(store: &AppStore, item_id: String) -> GestureOutcome {
    let snapshot = store.board().read_untracked().snapshot().clone();
    store.drag().write().start(&snapshot, ItemId::new(item_id))
}

pub fn store_drag_over(store: &AppStore, target: Option<&str>) -> GestureOutcome {
    let snapshot = store.board().read_untracked().snapshot().clone();
    store.drag().write().hover(&snapshot, target)
}

/// Release the gesture; the only path by which a drag touches the board
pub fn store_drag_release(store: &AppStore, target: Option<&str>) -> GestureOutcome {
    let mut state = store.write();
    let AppState { board, drag, .. } = &mut *state;
    drag.release(board, target)
}

pub fn store_drag_cancel(store: &AppStore) -> GestureOutcome {
    store.drag().write().cancel()
}

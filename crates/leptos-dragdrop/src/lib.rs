//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and reports each
//! gesture as start / over / release (or cancel) with opaque string ids.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set, so the trailing click is swallowed
const DRAG_END_GRACE_MS: u32 = 100;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    /// Id of the droppable currently under the pointer
    pub drop_target_read: ReadSignal<Option<String>>,
    pub drop_target_write: WriteSignal<Option<String>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Gesture callbacks, one per phase
#[derive(Clone, Copy)]
pub struct GestureHandlers {
    /// Pointer moved past the threshold while holding an item
    pub on_start: Callback<String>,
    /// Droppable under the pointer changed
    pub on_over: Callback<Option<String>>,
    /// Pointer released; `None` when outside every droppable
    pub on_release: Callback<Option<String>>,
    /// Escape pressed or window lost focus mid-drag
    pub on_cancel: Callback<()>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<String>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl DndSignals {
    pub fn is_dragging(&self) -> bool {
        self.dragging_id_read.get().is_some()
    }

    pub fn is_dragging_item(&self, id: &str) -> bool {
        self.dragging_id_read.with(|d| d.as_deref() == Some(id))
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    Timeout::new(DRAG_END_GRACE_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(item_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseover handler for droppables (tiers and the items inside them)
///
/// The innermost droppable wins: propagation stops at the first match.
pub fn make_on_target_mouseover(dnd: DndSignals, target_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_none() {
            return;
        }
        ev.stop_propagation();
        let unchanged = dnd
            .drop_target_read
            .with_untracked(|t| t.as_deref() == Some(target_id.as_str()));
        if !unchanged {
            dnd.drop_target_write.set(Some(target_id.clone()));
        }
    }
}

/// Create mouseleave handler for droppable containers
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// What a document mouseup means for the gesture in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MouseUp {
    /// A drag was live; release it over `target`
    Release { target: Option<String> },
    /// Plain click, at most a pending press to forget
    Click,
}

/// Classify a mouseup from the drag and hover state at that moment
pub fn classify_mouseup(dragging_id: Option<&str>, drop_target: Option<String>) -> MouseUp {
    match dragging_id {
        Some(_) => MouseUp::Release { target: drop_target },
        None => MouseUp::Click,
    }
}

/// Id of the drag that begins with this pointer position, if any
///
/// A pressed item becomes a drag once the pointer travels past
/// `DRAG_THRESHOLD_PX` on either axis. The pressed item is also the first
/// droppable under the pointer.
pub fn drag_to_begin(
    pending_id: Option<String>,
    already_dragging: bool,
    start: (i32, i32),
    current: (i32, i32),
) -> Option<String> {
    if already_dragging {
        return None;
    }
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    pending_id.filter(|_| dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX)
}

fn bind_document_listener(event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Bind document-level handlers that turn mouse input into gesture phases
pub fn bind_gesture_handlers(dnd: DndSignals, handlers: GestureHandlers) {
    // Start dragging once the pointer has moved far enough
    bind_document_listener("mousemove", move |ev: web_sys::Event| {
        let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else { return };
        let begins = drag_to_begin(
            dnd.pending_id_read.get_untracked(),
            dnd.dragging_id_read.get_untracked().is_some(),
            (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked()),
            (ev.client_x(), ev.client_y()),
        );
        if let Some(id) = begins {
            // No mouseover fires until the pointer leaves the pressed card
            dnd.drop_target_write.set(Some(id.clone()));
            dnd.dragging_id_write.set(Some(id.clone()));
            handlers.on_start.run(id.clone());
            handlers.on_over.run(Some(id));
        }
    });

    bind_document_listener("mouseup", move |_ev: web_sys::Event| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        match classify_mouseup(dragging_id.as_deref(), drop_target) {
            MouseUp::Release { target } => {
                end_drag(&dnd);
                handlers.on_release.run(target);
            }
            // The click that follows must reach its element untouched
            MouseUp::Click => dnd.pending_id_write.set(None),
        }
    });

    bind_document_listener("keydown", move |ev: web_sys::Event| {
        let Some(ev) = ev.dyn_ref::<web_sys::KeyboardEvent>() else { return };
        if ev.key() == "Escape" && dnd.dragging_id_read.get_untracked().is_some() {
            end_drag(&dnd);
            handlers.on_cancel.run(());
        }
    });

    if let Some(win) = web_sys::window() {
        let on_blur = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            if dnd.dragging_id_read.get_untracked().is_some() {
                end_drag(&dnd);
                handlers.on_cancel.run(());
            }
        });
        let _ = win.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
        on_blur.forget();
    }

    // Forward hover changes while a drag is live
    Effect::new(move |_| {
        let target = dnd.drop_target_read.get();
        if dnd.dragging_id_read.get_untracked().is_some() {
            handlers.on_over.run(target);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_click_is_not_a_release() {
        assert_eq!(classify_mouseup(None, None), MouseUp::Click);
        assert_eq!(classify_mouseup(None, Some("s".to_string())), MouseUp::Click);
    }

    #[test]
    fn test_live_drag_releases_over_target() {
        assert_eq!(
            classify_mouseup(Some("i1"), Some("a".to_string())),
            MouseUp::Release { target: Some("a".to_string()) }
        );
        assert_eq!(classify_mouseup(Some("i1"), None), MouseUp::Release { target: None });
    }

    #[test]
    fn test_drag_begins_past_threshold() {
        let pending = Some("i1".to_string());
        assert_eq!(drag_to_begin(pending.clone(), false, (10, 10), (13, 14)), None);
        assert_eq!(drag_to_begin(pending.clone(), false, (10, 10), (10, 16)), pending);
        assert_eq!(drag_to_begin(pending.clone(), false, (10, 10), (4, 10)), pending);
    }

    #[test]
    fn test_drag_needs_a_pressed_item() {
        assert_eq!(drag_to_begin(None, false, (0, 0), (50, 50)), None);
        assert_eq!(drag_to_begin(Some("i1".to_string()), true, (0, 0), (50, 50)), None);
    }
}

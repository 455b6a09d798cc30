//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Mouse drag signals shared by every draggable and droppable
    pub dnd: DndSignals,
    /// The rendered tier list, handed to the PNG exporter
    pub board_ref: NodeRef<html::Div>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            dnd: create_dnd_signals(),
            board_ref: NodeRef::new(),
        }
    }

    /// True right after a drag ended; the click that follows a drop is not a real click
    pub fn swallow_click(&self) -> bool {
        self.dnd.drag_just_ended_read.get_untracked()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

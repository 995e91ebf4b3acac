//! Drag Session Context
//!
//! The ephemeral drag session (active id + overlay content), alive only
//! between a drag start and the matching drag end. Provided via the Leptos
//! Context API.

use leptos::prelude::*;

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct DragSession {
    /// Id of the in-flight drag, if any - read
    pub active_id: ReadSignal<Option<String>>,
    set_active_id: WriteSignal<Option<String>>,
    /// Content rendered in the floating overlay - read
    pub active_content: ReadSignal<String>,
    set_active_content: WriteSignal<String>,
}

impl DragSession {
    pub fn new(
        active_id: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        active_content: (ReadSignal<String>, WriteSignal<String>),
    ) -> Self {
        Self {
            active_id: active_id.0,
            set_active_id: active_id.1,
            active_content: active_content.0,
            set_active_content: active_content.1,
        }
    }

    /// Record the drag that just started
    pub fn begin(&self, id: String, content: String) {
        self.set_active_id.set(Some(id));
        self.set_active_content.set(content);
    }

    /// Clear the session, mutation or not
    pub fn clear(&self) {
        self.set_active_id.set(None);
        self.set_active_content.set(String::new());
    }
}

/// Get the drag session from context
pub fn use_drag_session() -> DragSession {
    expect_context::<DragSession>()
}

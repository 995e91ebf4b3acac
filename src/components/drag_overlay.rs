//! Drag Overlay Component
//!
//! Floating copy of the dragged content, offset from the live cursor
//! position. Pointer events are disabled in CSS so the overlay never
//! steals mouseenter from the targets underneath it.

use leptos::prelude::*;

use crate::context::use_drag_session;
use crate::models::BoardDnd;

#[component]
pub fn DragOverlay(dnd: BoardDnd) -> impl IntoView {
    let session = use_drag_session();

    let style = move || {
        format!(
            "left: {}px; top: {}px;",
            dnd.cursor_x_read.get() + 12,
            dnd.cursor_y_read.get() + 12
        )
    };

    move || {
        if dnd.active_read.get().is_some() {
            view! {
                <div class="drag-overlay" style=style>
                    {move || session.active_content.get()}
                </div>
            }
            .into_any()
        } else {
            view! { <div class="drag-overlay hidden"></div> }.into_any()
        }
    }
}

//! Sortable Card Component
//!
//! A card inside a section: draggable, and an over target for insertion
//! position. Leaving the card falls back to the enclosing section zone so
//! the section stays resolvable while the pointer is between cards.

use leptos::prelude::*;

use crate::models::{BoardDnd, Card, CardSource};
use leptos_dragdrop::{make_on_mousedown, make_on_target_mouseenter, make_on_target_mouseleave};

#[component]
pub fn SortableCard(card: Card, zone_id: String, dnd: BoardDnd) -> impl IntoView {
    let id = card.id.clone();
    let on_mousedown = make_on_mousedown(dnd, id.clone(), CardSource::Placed);
    let on_mouseenter = make_on_target_mouseenter(dnd, id.clone());
    let on_mouseleave = make_on_target_mouseleave(dnd, id.clone(), Some(zone_id));

    let is_active = {
        let id = id.clone();
        move || matches!(dnd.active_read.get(), Some(a) if a.id == id)
    };

    let card_class = move || {
        let mut c = String::from("board-card");
        if card.preview {
            c.push_str(" preview");
        }
        if is_active() {
            c.push_str(" dragging");
        }
        c
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {card.content.clone()}
        </div>
    }
}

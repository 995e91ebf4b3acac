//! Supply Panel Component
//!
//! Left-hand pool of source cards. Cards are keyed by their drag id, so
//! re-keying a card after a drop gives the gesture layer a brand-new
//! draggable for the same logical card.

use leptos::prelude::*;

use crate::models::{BoardDnd, CardSource};
use crate::store::{use_board_store, BoardStateStoreFields};
use leptos_dragdrop::make_on_mousedown;

#[component]
pub fn SupplyPanel(dnd: BoardDnd) -> impl IntoView {
    let store = use_board_store();

    view! {
        <div class="supply-panel">
            <h2>"Supplying Section"</h2>
            <For
                each=move || store.supply().get()
                key=|card| card.drag_id.clone()
                children=move |card| {
                    let drag_id = card.drag_id.clone();
                    let on_mousedown = make_on_mousedown(
                        dnd,
                        drag_id.clone(),
                        CardSource::Supply {
                            stable_id: card.stable_id.clone(),
                            content: card.content.clone(),
                        },
                    );
                    let is_active = {
                        let drag_id = drag_id.clone();
                        move || matches!(dnd.active_read.get(), Some(a) if a.id == drag_id)
                    };
                    let card_class = move || {
                        let mut c = String::from("supply-card");
                        if is_active() {
                            c.push_str(" dragging");
                        }
                        c
                    };
                    view! {
                        <div class=card_class on:mousedown=on_mousedown>
                            {card.content.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}

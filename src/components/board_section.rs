//! Board Section Component
//!
//! A droppable section: registers its drop zone under the `section-<id>`
//! naming convention, renders its cards, and highlights while it is the
//! hover target of an in-flight drag.

use leptos::prelude::*;

use crate::components::SortableCard;
use crate::models::BoardDnd;
use crate::resolver::section_zone_id;
use crate::store::{use_board_store, BoardStateStoreFields};
use leptos_dragdrop::{make_on_target_mouseenter, make_on_target_mouseleave};

#[component]
pub fn BoardSection(section_id: String, dnd: BoardDnd) -> impl IntoView {
    let store = use_board_store();
    let zone_id = section_zone_id(&section_id);

    let section = {
        let section_id = section_id.clone();
        move || {
            store
                .sections()
                .get()
                .into_iter()
                .find(|s| s.id == section_id)
        }
    };
    let title = {
        let section = section.clone();
        move || section().map(|s| s.title).unwrap_or_default()
    };
    let cards = {
        let section = section.clone();
        move || section().map(|s| s.cards).unwrap_or_default()
    };

    let on_mouseenter = make_on_target_mouseenter(dnd, zone_id.clone());
    let on_mouseleave = make_on_target_mouseleave(dnd, zone_id.clone(), None);

    // Hovered anywhere inside: the zone itself or one of its cards
    let is_over = {
        let zone_id = zone_id.clone();
        let cards = cards.clone();
        move || {
            dnd.active_read.get().is_some()
                && match dnd.over_read.get() {
                    Some(over) => over == zone_id || cards().iter().any(|c| c.id == over),
                    None => false,
                }
        }
    };

    let section_class = move || {
        let mut c = String::from("board-section");
        if is_over() {
            c.push_str(" drop-hover");
        }
        c
    };

    view! {
        <div class=section_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <h2>{title}</h2>
            <For
                each=cards
                key=|card| (card.id.clone(), card.preview)
                children={
                    let zone_id = zone_id.clone();
                    move |card| {
                        view! { <SortableCard card=card zone_id=zone_id.clone() dnd=dnd /> }
                    }
                }
            />
        </div>
    }
}

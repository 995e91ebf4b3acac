//! Sortboard App
//!
//! Wires the gesture crate's lifecycle signals to the resolver and commits
//! the snapshots it returns. The resolver is the only code that touches
//! the section store; this component just routes signals.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BoardSection, DragOverlay, SupplyPanel};
use crate::context::DragSession;
use crate::ids;
use crate::models::{BoardDnd, CardSource};
use crate::resolver;
use crate::store::{
    store_commit_sections, store_refresh_supply_card, BoardState, BoardStateStoreFields,
    BoardStore,
};
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals};

#[component]
pub fn App() -> impl IntoView {
    let store: BoardStore = Store::new(BoardState::new());
    provide_context(store);

    let session = DragSession::new(signal(None::<String>), signal(String::new()));
    provide_context(session);

    let dnd: BoardDnd = create_dnd_signals::<CardSource>();

    bind_global_handlers(
        dnd,
        move |active| {
            let sections = store.sections().get_untracked();
            let content = resolver::preview_content(&sections, active).unwrap_or_default();
            session.begin(active.id.clone(), content);
        },
        move |active, over| {
            let sections = store.sections().get_untracked();
            if let Some(next) = resolver::on_drag_over(&sections, active, over) {
                store_commit_sections(&store, next);
            }
        },
        move |active, over| {
            web_sys::console::log_1(
                &format!("[DND] drop: active={}, over={:?}", active.id, over).into(),
            );
            let sections = store.sections().get_untracked();
            if let Some(next) = resolver::on_drag_end(&sections, active, over, ids::card_id) {
                store_commit_sections(&store, next);
            }
            if let CardSource::Supply { stable_id, .. } = &active.data {
                // Same logical card, fresh draggable for the next gesture
                store_refresh_supply_card(&store, stable_id);
            }
            session.clear();
        },
    );

    view! {
        <div class="app-layout">
            <SupplyPanel dnd=dnd />
            <div class="board-columns">
                <For
                    each=move || store.sections().get()
                    key=|section| section.id.clone()
                    children=move |section| {
                        view! { <BoardSection section_id=section.id dnd=dnd /> }
                    }
                />
            </div>
            <DragOverlay dnd=dnd />
        </div>
    }
}

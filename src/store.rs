//! Global Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Sections are
//! only ever replaced wholesale with the snapshot the resolver returns —
//! no in-place edits, so renders never observe a half-applied move.

use crate::ids;
use crate::models::{Section, SupplyCard};
use leptos::prelude::*;
use reactive_stores::Store;

/// Application state: the supply pool and the section store
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Source cards, copied (never moved) into sections
    pub supply: Vec<SupplyCard>,
    /// The only mutable domain state
    pub sections: Vec<Section>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            supply: (1..=5)
                .map(|n| SupplyCard::new(n.to_string(), format!("Item {n}")))
                .collect(),
            sections: vec![
                Section::new("a", "Section A"),
                Section::new("b", "Section B"),
                Section::new("c", "Section C"),
            ],
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the section store with the resolver's next snapshot
pub fn store_commit_sections(store: &BoardStore, next: Vec<Section>) {
    store.sections().set(next);
}

/// Re-key a supply card after a completed drop so it renders as a fresh
/// draggable while keeping its stable identity
pub fn store_refresh_supply_card(store: &BoardStore, stable_id: &str) {
    store
        .supply()
        .write()
        .iter_mut()
        .find(|c| c.stable_id == stable_id)
        .map(|c| c.drag_id = ids::supply_drag_id(stable_id));
}

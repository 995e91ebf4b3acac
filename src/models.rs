//! Board Models
//!
//! Domain data structures for the supply pool and the section store.

use leptos_dragdrop::DndSignals;
use serde::{Deserialize, Serialize};

/// A card placed inside a section.
///
/// `preview` marks the temporary entry inserted while a supply card is
/// hovering over a section; previews are purged or finalized on drag end
/// and never survive a gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub preview: bool,
}

impl Card {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            preview: false,
        }
    }
}

/// A named, ordered list of cards. Sections are fixed for the process
/// lifetime; only `cards` ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }
}

/// A source card in the supply panel.
///
/// `stable_id` identifies the logical card; `drag_id` is the render/drag
/// identity, regenerated after every completed drop so the gesture layer
/// sees a fresh draggable each time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyCard {
    pub stable_id: String,
    pub drag_id: String,
    pub content: String,
}

impl SupplyCard {
    pub fn new(stable_id: impl Into<String>, content: impl Into<String>) -> Self {
        let stable_id = stable_id.into();
        let drag_id = crate::ids::supply_drag_id(&stable_id);
        Self {
            stable_id,
            drag_id,
            content: content.into(),
        }
    }
}

/// Where an active drag originated. Carried as the drag payload and
/// pattern-matched exhaustively by the resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum CardSource {
    /// Dragged out of the supply panel; the content travels with the drag
    /// because the card belongs to no section yet.
    Supply { stable_id: String, content: String },
    /// Dragged from within a section; content is looked up by id.
    Placed,
}

/// The dnd signal bundle specialized to this board's payload
pub type BoardDnd = DndSignals<CardSource>;

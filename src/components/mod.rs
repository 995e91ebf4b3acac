//! UI Components
//!
//! Reusable Leptos components.

mod board_section;
mod drag_overlay;
mod sortable_card;
mod supply_panel;

pub use board_section::BoardSection;
pub use drag_overlay::DragOverlay;
pub use sortable_card::SortableCard;
pub use supply_panel::SupplyPanel;

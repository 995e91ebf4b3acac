//! Leptos DragDrop Utilities
//!
//! Pointer-based drag-and-drop for Leptos using mouse events.
//! A movement threshold distinguishes click from drag; once a drag is
//! active, three lifecycle signals are delivered to the consumer:
//! start (threshold crossed), over (pointer moving with a registered
//! target underneath), and end (button released).
//!
//! The crate is generic over the drag payload `T`, an opaque value the
//! consumer attaches at mousedown and receives back in every signal.
//! Target identity is a plain string id; the crate attaches no meaning
//! to it.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// The entity being dragged: its id plus the consumer's payload.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveDrag<T: Clone + 'static> {
    pub id: String,
    pub data: T,
}

/// DnD state signals. `Copy`, so handlers can capture it by value.
pub struct DndSignals<T: Clone + Send + Sync + 'static> {
    /// Pressed but not yet past the threshold
    pub pending_read: ReadSignal<Option<ActiveDrag<T>>>,
    pub pending_write: WriteSignal<Option<ActiveDrag<T>>>,
    /// The drag in progress, if any
    pub active_read: ReadSignal<Option<ActiveDrag<T>>>,
    pub active_write: WriteSignal<Option<ActiveDrag<T>>>,
    /// Id of the target currently under the pointer
    pub over_read: ReadSignal<Option<String>>,
    pub over_write: WriteSignal<Option<String>>,
    /// Press origin for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Live cursor position, for overlays that follow the pointer
    pub cursor_x_read: ReadSignal<i32>,
    pub cursor_x_write: WriteSignal<i32>,
    pub cursor_y_read: ReadSignal<i32>,
    pub cursor_y_write: WriteSignal<i32>,
}

impl<T: Clone + Send + Sync + 'static> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + Send + Sync + 'static> Copy for DndSignals<T> {}

pub fn create_dnd_signals<T: Clone + Send + Sync + 'static>() -> DndSignals<T> {
    let (pending_read, pending_write) = signal(None::<ActiveDrag<T>>);
    let (active_read, active_write) = signal(None::<ActiveDrag<T>>);
    let (over_read, over_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (cursor_x_read, cursor_x_write) = signal(0i32);
    let (cursor_y_read, cursor_y_write) = signal(0i32);
    DndSignals {
        pending_read,
        pending_write,
        active_read,
        active_write,
        over_read,
        over_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        cursor_x_read,
        cursor_x_write,
        cursor_y_read,
        cursor_y_write,
    }
}

/// Clear all drag state
pub fn end_drag<T: Clone + Send + Sync + 'static>(dnd: &DndSignals<T>) {
    dnd.pending_write.set(None);
    dnd.active_write.set(None);
    dnd.over_write.set(None);
}

/// Create mousedown handler for draggable elements.
/// Arms a pending drag with the given id/payload and records the press origin.
pub fn make_on_mousedown<T: Clone + Send + Sync + 'static>(
    dnd: DndSignals<T>,
    id: String,
    data: T,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on form controls
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        dnd.pending_write.set(Some(ActiveDrag {
            id: id.clone(),
            data: data.clone(),
        }));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mouseenter handler for a drop target (a card or a whole zone)
pub fn make_on_target_mouseenter<T: Clone + Send + Sync + 'static>(
    dnd: DndSignals<T>,
    target_id: String,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.active_read.get_untracked().is_some() || dnd.pending_read.get_untracked().is_some() {
            dnd.over_write.set(Some(target_id.clone()));
        }
    }
}

/// Create mouseleave handler for a drop target.
///
/// `fallback` is the id to fall back to when leaving this target — a nested
/// target (a card inside a zone) passes its enclosing zone's id so the zone
/// stays the over target while the pointer is still inside it.
pub fn make_on_target_mouseleave<T: Clone + Send + Sync + 'static>(
    dnd: DndSignals<T>,
    target_id: String,
    fallback: Option<String>,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        // Only clear if we are still the registered target; a mouseenter on
        // the next target may already have fired.
        if dnd.over_read.get_untracked().as_deref() == Some(target_id.as_str()) {
            dnd.over_write.set(fallback.clone());
        }
    }
}

/// Bind document-level mousemove/mouseup listeners and deliver the three
/// lifecycle signals.
///
/// `on_start` fires once when the movement threshold is crossed. `on_over`
/// fires on every mousemove while a drag is active and a target is under the
/// pointer — consumers must be idempotent for repeated identical inputs.
/// `on_end` fires on release with the final over target (`None` when
/// released outside every target), after which all drag state is cleared.
pub fn bind_global_handlers<T, FStart, FOver, FEnd>(
    dnd: DndSignals<T>,
    on_start: FStart,
    on_over: FOver,
    on_end: FEnd,
) where
    T: Clone + Send + Sync + 'static,
    FStart: Fn(&ActiveDrag<T>) + 'static,
    FOver: Fn(&ActiveDrag<T>, &str) + 'static,
    FEnd: Fn(&ActiveDrag<T>, Option<&str>) + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        dnd.cursor_x_write.set(ev.client_x());
        dnd.cursor_y_write.set(ev.client_y());

        if dnd.active_read.get_untracked().is_none() {
            // Promote pending -> active once moved past the threshold
            let Some(pending) = dnd.pending_read.get_untracked() else {
                return;
            };
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.active_write.set(Some(pending.clone()));
                on_start(&pending);
            }
            return;
        }

        if let Some(active) = dnd.active_read.get_untracked() {
            if let Some(over) = dnd.over_read.get_untracked() {
                on_over(&active, &over);
            }
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let active = dnd.active_read.get_untracked();
        let over = dnd.over_read.get_untracked();
        end_drag(&dnd);
        // A press that never crossed the threshold is a plain click
        if let Some(active) = active {
            on_end(&active, over.as_deref());
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

//! Id Generation
//!
//! Ids combine a millisecond timestamp with a process-wide counter; the
//! counter alone guarantees uniqueness within the process, the timestamp
//! keeps ids distinguishable across reloads in console output.

use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn timestamp_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Fresh id for a card finalized into a section
pub fn card_id() -> String {
    format!(
        "card-{:x}-{:x}",
        timestamp_ms(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    )
}

/// Fresh drag id for a supply card, re-keyed after every completed drop
pub fn supply_drag_id(stable_id: &str) -> String {
    format!(
        "supply-{}-{:x}",
        stable_id,
        COUNTER.fetch_add(1, Ordering::Relaxed)
    )
}

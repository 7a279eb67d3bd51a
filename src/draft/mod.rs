//! The local draft layer: a trailing-debounce scheduler over an injected
//! clock, plus the binary draft cache keyed by package identifier.

mod cache;
mod scheduler;

pub use cache::{DraftCache, DraftRecord};
pub use scheduler::{DEBOUNCE_WINDOW, DraftScheduler};

//! Action module — sequential stop/remove batches and their per-item outcomes.

pub mod outcome;
pub mod remove;
pub mod stop;

pub use outcome::{ActionKind, ActionReport, Effect, ItemOutcome, RunReport};
pub use remove::remove_images;
pub use stop::{stop_containers, STOP_GRACE_SECS};

pub mod engine;

pub use engine::{Selection, SelectionReason, select_containers, select_images, is_untagged};

//! Text-level translation applied between parsing and rendering.

pub mod model;
pub mod refs;

pub use model::{map_model, ModelAlias};
pub use refs::rewrite_command_refs;

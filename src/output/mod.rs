pub mod render;
pub mod write;

pub use render::OutputDocument;
pub use write::{ensure_dir, write_atomic};

//! Image export: PNG encoding and timestamped file saving.

pub mod file;
pub mod types;

pub use file::{expand_tilde, generate_filename, save_canvas};
pub use types::ExportError;

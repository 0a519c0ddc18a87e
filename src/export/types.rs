//! Data types for image export.

use thiserror::Error;

/// Errors that can occur while saving the canvas to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("failed to write image file: {0}")]
    Io(#[from] std::io::Error),
}

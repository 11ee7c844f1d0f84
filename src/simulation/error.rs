//! Error types for the simulation core.
//!
//! Only the collaborator-facing surface (terrain editing, persistence, pool
//! construction) can fail. Tick execution itself never returns an error.

use thiserror::Error;

/// Main error type for simulation operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// File system errors while saving or loading.
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON encoding/decoding errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A terrain edit addressed a cell outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} field")]
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Field width.
        width: usize,
        /// Field height.
        height: usize,
    },

    /// A loaded cell array does not match the declared dimensions.
    #[error("field declares {width}x{height} but holds a {rows}x{cols} cell array")]
    ShapeMismatch {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
        /// Rows actually present.
        rows: usize,
        /// Columns actually present.
        cols: usize,
    },

    /// A field must have at least one cell.
    #[error("field dimensions must be non-zero")]
    EmptyField,

    /// The worker pool could not be started.
    #[error("Worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;

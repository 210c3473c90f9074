//! Storage error types
//!
//! Internal error chain for snapshot and export I/O. The public surface
//! of this crate degrades gracefully instead of propagating these:
//! loads fall back to an empty engine and writes report a boolean.

use thiserror::Error;

/// Errors that can occur while reading or writing engine state
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot serialization or deserialization failed
    #[error("Snapshot format error: {0}")]
    Format(#[from] serde_json::Error),
}

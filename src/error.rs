//! Error types
//!
//! Only range validation reaches callers. Store failures are absorbed by the
//! history and settings layers, which fall back to empty/default state.

use thiserror::Error;

/// Errors surfaced by the draw engine and game builders
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
}

/// Errors raised by a key-value store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage write failed for key '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

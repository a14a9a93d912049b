// crates/travelrec-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TravelError>;

/// Errors produced while loading or parsing the recommendation dataset.
///
/// There are no fatal errors in this crate: front ends are expected to
/// catch these and render a user-visible message instead of aborting.
#[derive(Debug, Error)]
pub enum TravelError {
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport failure or non-success status.
    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(String),
}

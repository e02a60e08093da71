//! Error types for product-harvest.
//!
//! Extraction itself is best-effort: absent elements, malformed JSON-LD
//! blocks, and selectors that match nothing are all represented as `None`
//! and fall through to the next strategy or tactic. The `Error` enum only
//! covers the API boundary, where the caller handed us something we cannot
//! even begin to work with.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page URL could not be parsed or has no host.
    #[error("invalid page URL: {0}")]
    InvalidUrl(String),

    /// Character encoding detection or conversion failed.
    #[error("encoding detection failed: {0}")]
    EncodingError(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

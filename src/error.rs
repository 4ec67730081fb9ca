//! Error types for the library.
//!
//! This module defines all error types that can occur during hyperlink
//! extraction and print-document assembly.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A matched anchor token whose URL or label cannot be used to build a
    /// valid destination or link (e.g. empty URL). Reported per occurrence;
    /// never aborts the surrounding scan.
    #[error("Malformed link for '{url}': {reason}")]
    MalformedLink {
        /// URL of the offending anchor (may be empty)
        url: String,
        /// Reason the destination/link could not be created
        reason: String,
    },

    /// Print settings could not be loaded or saved. Recovered locally by
    /// substituting defaults; surfaced as a non-blocking warning.
    #[error("Print settings unavailable: {0}")]
    SettingsUnavailable(String),

    /// Row data missing required fields for the requested document kind.
    /// The row is skipped; the print continues with the rest.
    #[error("Invalid row at index {index}: {reason}")]
    InvalidRow {
        /// Index of the row in the caller-supplied sequence
        index: usize,
        /// Reason the row was rejected
        reason: String,
    },

    /// Total inability to produce any usable data for the request.
    #[error("No usable data: {0}")]
    NoData(String),

    /// Referenced story does not exist in the document
    #[error("Story not found: {0}")]
    StoryNotFound(u32),

    /// Text span lies outside the content it refers to
    #[error("Span [{start}, {end}) out of bounds for content of length {len}")]
    InvalidSpan {
        /// Span start (chars)
        start: usize,
        /// Span end, exclusive (chars)
        end: usize,
        /// Content length (chars)
        len: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! Error types for lada-common.

use thiserror::Error;

/// Low-level read errors shared by all Lada parsers.
///
/// Every variant carries the byte offset at which the failing read started,
/// so higher layers can report exactly where a file diverges from the
/// expected layout.
#[derive(Debug, Error)]
pub enum Error {
    /// A read would run past the end of the buffer.
    #[error("out of bounds at offset {offset}: needed {needed} bytes but only {available} available")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A null-terminated string ran to the end of the buffer without a terminator.
    #[error("string at offset {offset} is missing its null terminator")]
    MissingNullTerminator { offset: usize },

    /// String bytes were not valid UTF-8.
    #[error("invalid string data at offset {offset}: {source}")]
    InvalidString {
        offset: usize,
        source: std::str::Utf8Error,
    },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

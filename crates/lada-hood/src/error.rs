//! Error types for neighborhood decoding.
//!
//! Offsets in roster and family errors are relative to the start of the
//! chunk payload being decoded; the absolute position is the chunk's
//! payload offset plus the reported value.

use thiserror::Error;

/// Errors that can occur while decoding neighborhood chunks.
#[derive(Debug, Error)]
pub enum Error {
    /// Container framing failed.
    #[error("{0}")]
    Container(#[from] lada_iff::Error),

    /// The NBRS chunk did not carry the expected `SRBN` magic.
    #[error("invalid roster magic: expected \"SRBN\", got {found:?}")]
    InvalidRosterMagic { found: [u8; 4] },

    /// A roster record did not start with the marker value 1.
    ///
    /// Record boundaries are implicit, so an unrecognized marker means the
    /// rest of the roster cannot be trusted; the whole decode fails.
    #[error("unsupported record marker {found} at offset {offset}")]
    UnsupportedRecordMarker { offset: usize, found: i32 },

    /// A roster record carried a version other than 4 or 10.
    #[error("unsupported sim record version {version} at offset {offset}")]
    UnsupportedSimVersion { offset: usize, version: i32 },

    /// A FAMs string table used a format code other than -3.
    #[error("unsupported string table format code {found}")]
    UnsupportedStringFormat { found: i16 },

    /// A FAMI chunk did not carry the expected `IMAF` magic.
    #[error("invalid family magic: expected \"IMAF\", got {found:?}")]
    InvalidFamilyMagic { found: [u8; 4] },

    /// A length-prefixed list declared a negative element count.
    #[error("invalid element count {found} at offset {offset}")]
    InvalidCount { offset: usize, found: i32 },

    /// The roster chunk ended before its declared records did.
    ///
    /// Partial rosters are never returned; downstream scoring assumes a
    /// complete sim set.
    #[error("truncated roster: read past end of chunk at offset {offset}")]
    TruncatedRoster { offset: usize },

    /// Low-level read error.
    #[error("{0}")]
    Common(#[from] lada_common::Error),
}

/// Result type for neighborhood decoding.
pub type Result<T> = std::result::Result<T, Error>;

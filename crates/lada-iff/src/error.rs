//! Error types for IFF container parsing.

use thiserror::Error;

/// Errors that can occur while framing an IFF container.
///
/// All of these are fatal to the whole parse: once a chunk boundary is
/// wrong there is no resynchronization point in the format.
#[derive(Debug, Error)]
pub enum Error {
    /// The 60-byte file signature did not match.
    #[error("not an IFF file: bad signature")]
    InvalidSignature,

    /// The file ended inside a chunk header.
    #[error("truncated chunk header at offset {offset}: {available} of 76 bytes present")]
    TruncatedHeader { offset: usize, available: usize },

    /// A chunk declared a size smaller than its own header.
    #[error("chunk at offset {offset} declares size {size}, smaller than the 76-byte header")]
    ChunkTooSmall { offset: usize, size: u32 },

    /// A chunk declared a size that runs past the end of the buffer.
    #[error("chunk at offset {offset} declares size {size} but only {available} bytes remain")]
    ChunkTruncated {
        offset: usize,
        size: u32,
        available: usize,
    },

    /// Low-level read error.
    #[error("{0}")]
    Common(#[from] lada_common::Error),
}

/// Result type for IFF operations.
pub type Result<T> = std::result::Result<T, Error>;

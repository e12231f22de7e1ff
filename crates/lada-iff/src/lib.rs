//! IFF container parser for The Sims 1 resource files.
//!
//! The Sims stores neighborhood and object data in an IFF-derived container:
//! a fixed 60-byte ASCII signature, a 4-byte resource-map offset, then a
//! flat sequence of chunks. Each chunk starts with a 76-byte header:
//!
//! - 4 bytes: type tag (ASCII, e.g. `NBRS`, `FAMI`)
//! - 4 bytes: chunk size, big-endian, *including* the header itself
//! - 2 bytes: chunk id, big-endian
//! - 2 bytes: flags, big-endian
//! - 64 bytes: null-padded label
//!
//! Chunk payloads are opaque at this layer; decoding them is the job of
//! `lada-hood`. Framing errors are fatal: chunk boundaries cannot be
//! recovered once the stream desynchronizes, so a bad size aborts iteration
//! instead of skipping ahead.
//!
//! # Example
//!
//! ```no_run
//! use lada_iff::IffFile;
//!
//! let data = std::fs::read("Neighborhood.iff")?;
//! let iff = IffFile::parse(&data)?;
//!
//! for chunk in iff.chunks() {
//!     let chunk = chunk?;
//!     println!("{} id={} {} bytes", chunk.tag(), chunk.id, chunk.payload.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod chunk;
mod error;
mod file;

pub use chunk::{RawChunk, CHUNK_HEADER_SIZE, LABEL_SIZE};
pub use error::{Error, Result};
pub use file::{Chunks, IffFile, SIGNATURE};

//! Common utilities for Lada.
//!
//! This crate provides the foundational types used across all Lada crates:
//!
//! - [`ByteCursor`] - Bounds-checked sequential reading from byte slices,
//!   with explicit endianness per read
//! - [`Error`] - Shared low-level read errors, carrying the byte offset at
//!   which a read failed

mod cursor;
mod error;

pub use cursor::ByteCursor;
pub use error::{Error, Result};

/// Re-export memchr for accelerated byte searching
pub use memchr;

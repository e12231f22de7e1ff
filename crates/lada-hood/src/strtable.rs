//! STR string table decoder (format code -3 / 0xFFFD).
//!
//! FAMs family-name chunks use the same small table format as other
//! in-game string resources: an i16 format code, a u16 entry count, then
//! per entry a one-byte language code, a null-terminated value and a
//! null-terminated comment (commonly empty).

use lada_common::ByteCursor;

use crate::{Error, Result};

/// Chunk type tag of a family-name string table.
pub const FAMS_TAG: &[u8; 4] = b"FAMs";

/// The only supported STR format code.
const FORMAT_CODE: i16 = -3;

/// One entry of a string table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrEntry {
    pub language: u8,
    pub value: String,
    pub comment: String,
}

/// A decoded STR table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrTable {
    pub entries: Vec<StrEntry>,
}

impl StrTable {
    /// Decode a format -3 string table.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(payload);

        let format = cursor.read_i16_le()?;
        if format != FORMAT_CODE {
            return Err(Error::UnsupportedStringFormat { found: format });
        }

        let count = cursor.read_u16_le()?;
        let mut entries = Vec::with_capacity(usize::from(count).min(1024));
        for _ in 0..count {
            let language = cursor.read_u8()?;
            let (value, _) = cursor.read_cstring()?;
            let (comment, _) = cursor.read_cstring()?;
            entries.push(StrEntry {
                language,
                value: value.to_string(),
                comment: comment.to_string(),
            });
        }

        Ok(Self { entries })
    }

    /// The first entry's value - the display name for FAMs tables.
    pub fn first_value(&self) -> Option<&str> {
        self.entries.first().map(|entry| entry.value.as_str())
    }
}

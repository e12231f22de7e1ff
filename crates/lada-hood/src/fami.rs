//! FAMI chunk decoder - family definitions.
//!
//! FAMI has a strictly fixed 40-byte layout followed by a guid list, so
//! unlike the roster there is no padding ambiguity; only truncation can
//! fail it. The display name lives in a separate FAMs chunk sharing the
//! same chunk id and is joined in by [`crate::Neighborhood::parse`].

use lada_common::ByteCursor;

use crate::model::Family;
use crate::{Error, Result};

/// Chunk type tag of a family definition.
pub const FAMI_TAG: &[u8; 4] = b"FAMI";

/// Magic inside the FAMI chunk header.
const FAMILY_MAGIC: &[u8; 4] = b"IMAF";

/// Decode a FAMI chunk payload.
///
/// Layout: pad, version, magic, house number, family number, budget,
/// architecture value, friend count, flags, guid count, then the guids.
pub fn decode_family(chunk_id: u16, payload: &[u8]) -> Result<Family> {
    let mut cursor = ByteCursor::new(payload);

    cursor.skip(4)?;
    let _version = cursor.read_u32_le()?;
    let magic = cursor.read_array::<4>()?;
    if &magic != FAMILY_MAGIC {
        return Err(Error::InvalidFamilyMagic { found: magic });
    }

    let house_number = cursor.read_u32_le()?;
    let family_number = cursor.read_u32_le()? as u16;
    let budget = cursor.read_i32_le()?;
    let _architecture_value = cursor.read_i32_le()?;
    let _friend_count = cursor.read_i32_le()?;
    let _flags = cursor.read_i32_le()?;

    let count_offset = cursor.position();
    let guid_count = cursor.read_i32_le()?;
    let guid_count = usize::try_from(guid_count).map_err(|_| Error::InvalidCount {
        offset: count_offset,
        found: guid_count,
    })?;

    let mut member_guids = Vec::with_capacity(guid_count.min(1024));
    for _ in 0..guid_count {
        member_guids.push(cursor.read_u32_le()?);
    }

    Ok(Family {
        chunk_id,
        family_number,
        house_number,
        budget,
        member_guids,
        name: String::new(),
    })
}

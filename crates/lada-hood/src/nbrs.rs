//! NBRS chunk decoder - the neighbor roster.
//!
//! The roster is a count-prefixed run of per-sim records with *implicit*
//! boundaries: there is no per-record length field, so a single misread
//! corrupts every record after it. The decoder therefore treats the whole
//! chunk as one atomic unit - any unrecognized marker, version or truncated
//! field fails the entire roster rather than guessing a resync point.
//!
//! Record layout (all little-endian):
//!
//! 1. i32 marker, must be 1
//! 2. i32 record version, 4 (base game) or 10 (Hot Date)
//! 3. version 10 only: one extra i32 (observed as 9)
//! 4. null-terminated name; if the terminated byte count is even, one
//!    extra pad byte follows
//! 5. i32 integrity field, expected 0 (soft check, value is preserved)
//! 6. i32 person mode; 0 or below means no statistics block
//! 7. statistics region: 0x200 bytes for version 10, 0xA0 for version 4,
//!    holding up to 88 i16 values followed by padding
//! 8. i16 neighbor id, u32 guid, i32 (observed -1), then the
//!    relationship list

use lada_common::ByteCursor;

use crate::model::{Gender, Interests, PersonData, Personality, Relationship, Sim, Topic};
use crate::normalize;
use crate::{Error, Result};

/// Chunk type tag of the neighbor roster.
pub const NBRS_TAG: &[u8; 4] = b"NBRS";

/// Magic inside the roster chunk header.
const ROSTER_MAGIC: &[u8; 4] = b"SRBN";

/// Base-game record version.
const VERSION_BASE: i32 = 4;
/// Hot Date record version.
const VERSION_HOT_DATE: i32 = 0xA;

/// Number of meaningful i16 values in a statistics block.
const STATS_VALUES: usize = 88;
/// Statistics region size for version 10 records.
const STATS_REGION_HOT_DATE: usize = 0x200;
/// Statistics region size for version 4 records. Holds only 80 values;
/// the missing trailing indices default to zero.
const STATS_REGION_BASE: usize = 0xA0;

// Statistics block indices.
const PD_NICE: usize = 2;
const PD_ACTIVE: usize = 3;
const PD_PLAYFUL: usize = 5;
const PD_OUTGOING: usize = 6;
const PD_NEAT: usize = 7;
const PD_AGE: usize = 58;
const PD_FAMILY_NUMBER: usize = 61;
const PD_GENDER: usize = 65;
const PD_ZODIAC: usize = 70;

/// Statistics block index of each interest topic.
const INTEREST_SLOTS: [(Topic, usize); Topic::COUNT] = [
    (Topic::Exercise, 13),
    (Topic::Food, 14),
    (Topic::Parties, 16),
    (Topic::Style, 20),
    (Topic::Hollywood, 26),
    (Topic::Travel, 46),
    (Topic::Violence, 47),
    (Topic::Politics, 48),
    (Topic::Sixties, 49),
    (Topic::Weather, 50),
    (Topic::Sports, 51),
    (Topic::Music, 52),
    (Topic::Outdoors, 53),
    (Topic::Technology, 54),
    (Topic::Romance, 55),
];

/// Map cursor failures onto the roster error policy: running out of bytes
/// mid-roster means the chunk is truncated.
fn read<T>(result: lada_common::Result<T>) -> Result<T> {
    result.map_err(|err| match err {
        lada_common::Error::OutOfBounds { offset, .. }
        | lada_common::Error::MissingNullTerminator { offset } => Error::TruncatedRoster { offset },
        other => Error::Common(other),
    })
}

fn read_count(cursor: &mut ByteCursor) -> Result<usize> {
    let offset = cursor.position();
    let count = read(cursor.read_i32_le())?;
    usize::try_from(count).map_err(|_| Error::InvalidCount {
        offset,
        found: count,
    })
}

/// Decode an NBRS chunk payload into the full sim roster.
///
/// Returns every record, including sims without person data; callers that
/// present sims to users must filter on [`Sim::has_person_data`].
pub fn decode_roster(payload: &[u8]) -> Result<Vec<Sim>> {
    let mut cursor = ByteCursor::new(payload);

    read(cursor.skip(4))?;
    let _chunk_version = read(cursor.read_u32_le())?;
    let magic = read(cursor.read_array::<4>())?;
    if &magic != ROSTER_MAGIC {
        return Err(Error::InvalidRosterMagic { found: magic });
    }
    let count = read(cursor.read_u32_le())? as usize;

    let mut sims = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        sims.push(decode_sim(&mut cursor)?);
    }
    Ok(sims)
}

fn decode_sim(cursor: &mut ByteCursor) -> Result<Sim> {
    let marker_offset = cursor.position();
    let marker = read(cursor.read_i32_le())?;
    if marker != 1 {
        return Err(Error::UnsupportedRecordMarker {
            offset: marker_offset,
            found: marker,
        });
    }

    let version_offset = cursor.position();
    let version = read(cursor.read_i32_le())?;
    if version != VERSION_BASE && version != VERSION_HOT_DATE {
        return Err(Error::UnsupportedSimVersion {
            offset: version_offset,
            version,
        });
    }
    if version == VERSION_HOT_DATE {
        // Extra field before the name, observed as 9.
        read(cursor.read_i32_le())?;
    }

    let (name, terminated_len) = read(cursor.read_cstring())?;
    // Names keep the following fields aligned: when the terminated byte
    // count is even, one pad byte follows. Parity is on the byte count
    // including the terminator, not on the character count.
    if terminated_len % 2 == 0 {
        read(cursor.skip(1))?;
    }

    // Expected 0; preserved as-is, the field is cosmetic padding.
    let mystery_zero = read(cursor.read_i32_le())?;

    let person_mode = read(cursor.read_i32_le())?;
    let person = if person_mode > 0 {
        let region_size = if version == VERSION_HOT_DATE {
            STATS_REGION_HOT_DATE
        } else {
            STATS_REGION_BASE
        };
        Some(decode_person(cursor, region_size)?)
    } else {
        None
    };

    let neighbor_id = read(cursor.read_i16_le())? as u16;
    let guid = read(cursor.read_u32_le())?;
    // Observed as -1 in every file; not validated.
    let _ = read(cursor.read_i32_le())?;

    let rel_count = read_count(cursor)?;
    let mut relationships = Vec::with_capacity(rel_count.min(1024));
    for _ in 0..rel_count {
        relationships.push(decode_relationship(cursor)?);
    }

    Ok(Sim {
        neighbor_id,
        guid,
        name: name.to_string(),
        mystery_zero,
        person,
        relationships,
    })
}

fn decode_person(cursor: &mut ByteCursor, region_size: usize) -> Result<PersonData> {
    let value_count = STATS_VALUES.min(region_size / 2);
    let mut stats = [0i16; STATS_VALUES];
    for slot in stats.iter_mut().take(value_count) {
        *slot = read(cursor.read_i16_le())?;
    }
    // The rest of the region is padding, not data.
    read(cursor.skip(region_size - value_count * 2))?;

    let personality = Personality {
        nice: stats[PD_NICE],
        active: stats[PD_ACTIVE],
        playful: stats[PD_PLAYFUL],
        outgoing: stats[PD_OUTGOING],
        neat: stats[PD_NEAT],
    };

    let mut interests = Interests::new();
    for (topic, index) in INTEREST_SLOTS {
        if index < value_count {
            interests.set(topic, i32::from(stats[index]));
        }
    }
    normalize::normalize(&mut interests);

    Ok(PersonData {
        personality,
        interests,
        age_raw: stats[PD_AGE] as u16,
        gender: Gender::from_raw(stats[PD_GENDER]),
        family_number: stats[PD_FAMILY_NUMBER] as u16,
        zodiac: stats[PD_ZODIAC],
    })
}

fn decode_relationship(cursor: &mut ByteCursor) -> Result<Relationship> {
    let key_count = read_count(cursor)?;
    let mut keys = Vec::with_capacity(key_count.min(1024));
    for _ in 0..key_count {
        keys.push(read(cursor.read_i32_le())?);
    }

    let value_count = read_count(cursor)?;
    let mut values = Vec::with_capacity(value_count.min(1024));
    for _ in 0..value_count {
        values.push(read(cursor.read_i32_le())?);
    }

    Ok(Relationship { keys, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::model::Age;

    #[test]
    fn test_decode_hot_date_record() {
        let stats = fixtures::stats(&[
            (PD_NICE, 700),
            (PD_ACTIVE, 300),
            (PD_PLAYFUL, 900),
            (PD_OUTGOING, 500),
            (PD_NEAT, 100),
            (46, 1000), // travel
            (52, 450),  // music
            (55, 300),  // romance
            (PD_AGE, 27),
            (PD_FAMILY_NUMBER, 3),
            (PD_GENDER, 1),
            (PD_ZODIAC, 6),
        ]);
        let record = fixtures::encode_sim_record(
            VERSION_HOT_DATE,
            "Bella Goth",
            2,
            0x1234_5678,
            Some(&stats),
            &[(&[5], &[40, 1, -10])],
        );
        let payload = fixtures::encode_roster(&[record]);

        let sims = decode_roster(&payload).unwrap();
        assert_eq!(sims.len(), 1);

        let sim = &sims[0];
        assert_eq!(sim.neighbor_id, 2);
        assert_eq!(sim.guid, 0x1234_5678);
        assert_eq!(sim.name, "Bella Goth");
        assert_eq!(sim.mystery_zero, 0);

        let person = sim.person.as_ref().unwrap();
        assert_eq!(person.personality.nice, 700);
        assert_eq!(person.personality.neat, 100);
        assert_eq!(person.interests.get(Topic::Travel), Some(1000));
        assert_eq!(person.interests.get(Topic::Music), Some(450));
        assert_eq!(person.interests.get(Topic::Romance), Some(300));
        assert_eq!(person.age_raw, 27);
        assert_eq!(person.age(), Age::Adult);
        assert_eq!(person.gender, Gender::Female);
        assert_eq!(person.family_number, 3);
        assert_eq!(person.zodiac, 6);

        assert_eq!(sim.relationships.len(), 1);
        let rel = sim.relationship_to(5).unwrap();
        assert_eq!(rel.daily(), Some(40));
        assert!(rel.is_friend());
        assert_eq!(rel.lifetime(), Some(-10));
    }

    #[test]
    fn test_base_version_without_person_data_advances_exactly() {
        // If the cursor advance for the first record were off by even one
        // byte, the second record's marker read would fail.
        let first = fixtures::encode_sim_record(VERSION_BASE, "Freddy", 1, 10, None, &[]);
        let second = fixtures::encode_sim_record(
            VERSION_BASE,
            "Nina",
            2,
            20,
            Some(&fixtures::stats(&[(46, 500)])),
            &[],
        );
        // Steps 1-5 plus person mode: marker (4) + version (4) + name with
        // terminator (7, odd, no pad) + mystery zero (4) + person mode (4),
        // then the trailer: id (2) + guid (4) + filler (4) + count (4).
        assert_eq!(first.len(), 4 + 4 + 7 + 4 + 4 + 2 + 4 + 4 + 4);

        let payload = fixtures::encode_roster(&[first, second]);
        let sims = decode_roster(&payload).unwrap();

        assert_eq!(sims.len(), 2);
        assert!(!sims[0].has_person_data());
        assert_eq!(sims[1].name, "Nina");
        assert_eq!(
            sims[1].person.as_ref().unwrap().interests.get(Topic::Travel),
            Some(500)
        );
    }

    #[test]
    fn test_name_padding_parity() {
        // "Bell\0" is 5 bytes (odd): no pad. "Bella\0" is 6 bytes (even):
        // one pad byte. A second record proves the boundary stayed aligned.
        for name in ["Bell", "Bella"] {
            let first = fixtures::encode_sim_record(VERSION_BASE, name, 1, 10, None, &[]);
            let second = fixtures::encode_sim_record(VERSION_BASE, "Check", 2, 20, None, &[]);
            let payload = fixtures::encode_roster(&[first, second]);

            let sims = decode_roster(&payload).unwrap();
            assert_eq!(sims[0].name, name);
            assert_eq!(sims[1].name, "Check");
        }

        let odd = fixtures::encode_sim_record(VERSION_BASE, "Bell", 1, 10, None, &[]);
        let even = fixtures::encode_sim_record(VERSION_BASE, "Bella", 1, 10, None, &[]);
        // One extra name byte plus one pad byte.
        assert_eq!(even.len(), odd.len() + 2);
    }

    #[test]
    fn test_base_version_stats_region_is_160_bytes() {
        // Version 4 regions hold 80 values; interest indices all fall below
        // that, and the record after the region must stay aligned.
        let stats = fixtures::stats(&[(53, 800), (55, 250)]);
        let first = fixtures::encode_sim_record(VERSION_BASE, "Kana", 1, 10, Some(&stats), &[]);
        let second = fixtures::encode_sim_record(VERSION_BASE, "Check", 2, 20, None, &[]);
        let payload = fixtures::encode_roster(&[first, second]);

        let sims = decode_roster(&payload).unwrap();
        let person = sims[0].person.as_ref().unwrap();
        assert_eq!(person.interests.get(Topic::Outdoors), Some(800));
        assert_eq!(person.interests.get(Topic::Romance), Some(250));
        assert_eq!(sims[1].name, "Check");
    }

    #[test]
    fn test_legacy_scale_rescaled_at_decode() {
        let stats = fixtures::stats(&[(46, 3), (50, 9)]);
        let record =
            fixtures::encode_sim_record(VERSION_HOT_DATE, "Tutorial", 1, 10, Some(&stats), &[]);
        let payload = fixtures::encode_roster(&[record]);

        let sims = decode_roster(&payload).unwrap();
        let interests = &sims[0].person.as_ref().unwrap().interests;
        assert_eq!(interests.get(Topic::Travel), Some(300));
        assert_eq!(interests.get(Topic::Weather), Some(900));
    }

    #[test]
    fn test_unsupported_record_marker_fails_roster() {
        let mut record = fixtures::encode_sim_record(VERSION_BASE, "Bad", 1, 10, None, &[]);
        record[..4].copy_from_slice(&0i32.to_le_bytes());
        let payload = fixtures::encode_roster(&[record]);

        assert!(matches!(
            decode_roster(&payload),
            Err(Error::UnsupportedRecordMarker { offset: 16, found: 0 })
        ));
    }

    #[test]
    fn test_unsupported_sim_version() {
        let mut record = fixtures::encode_sim_record(VERSION_BASE, "Bad", 1, 10, None, &[]);
        record[4..8].copy_from_slice(&7i32.to_le_bytes());
        let payload = fixtures::encode_roster(&[record]);

        assert!(matches!(
            decode_roster(&payload),
            Err(Error::UnsupportedSimVersion { offset: 20, version: 7 })
        ));
    }

    #[test]
    fn test_bad_roster_magic() {
        let mut payload = fixtures::encode_roster(&[]);
        payload[8..12].copy_from_slice(b"XXXX");

        assert!(matches!(
            decode_roster(&payload),
            Err(Error::InvalidRosterMagic { found: [b'X', b'X', b'X', b'X'] })
        ));
    }

    #[test]
    fn test_truncated_roster() {
        let record = fixtures::encode_sim_record(VERSION_BASE, "Cut", 1, 10, None, &[]);
        let payload = fixtures::encode_roster(&[record]);
        let truncated = &payload[..payload.len() - 6];

        assert!(matches!(
            decode_roster(truncated),
            Err(Error::TruncatedRoster { .. })
        ));
    }

    #[test]
    fn test_relationship_keys_and_values_preserved() {
        let record = fixtures::encode_sim_record(
            VERSION_BASE,
            "Keys",
            1,
            10,
            None,
            &[(&[9, 77], &[10, 0, 30, 123, 456])],
        );
        let payload = fixtures::encode_roster(&[record]);

        let sims = decode_roster(&payload).unwrap();
        let rel = &sims[0].relationships[0];
        assert_eq!(rel.keys, vec![9, 77]);
        assert_eq!(rel.values, vec![10, 0, 30, 123, 456]);
        assert_eq!(rel.target(), Some(9));
        assert!(!rel.is_friend());
    }

    #[test]
    fn test_mystery_zero_mismatch_is_soft() {
        let mut record = fixtures::encode_sim_record(VERSION_BASE, "Odd", 1, 10, None, &[]);
        // Name "Odd\0" is 4 bytes (even) so one pad byte follows; the
        // integrity field starts at 4 + 4 + 4 + 1 = 13.
        record[13..17].copy_from_slice(&42i32.to_le_bytes());
        let payload = fixtures::encode_roster(&[record]);

        let sims = decode_roster(&payload).unwrap();
        assert_eq!(sims[0].mystery_zero, 42);
    }
}

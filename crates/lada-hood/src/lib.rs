//! Neighborhood decoder for The Sims 1.
//!
//! Decodes the three chunk types of `Neighborhood.iff` that carry social
//! data, and joins them into one read-only object graph:
//!
//! - `NBRS` - the neighbor roster (sim records; see [`nbrs`])
//! - `FAMI` - family definitions (see [`fami`])
//! - `FAMs` - family names as STR tables (see [`strtable`])
//!
//! Unknown chunk types are skipped. Everything is rebuilt from scratch on
//! every parse; nothing is cached or mutated afterwards, so concurrent
//! parses over independent buffers need no synchronization.
//!
//! # Example
//!
//! ```no_run
//! use lada_hood::Neighborhood;
//!
//! let data = std::fs::read("Neighborhood.iff")?;
//! let hood = Neighborhood::parse(&data)?;
//!
//! for sim in hood.sims.iter().filter(|s| s.has_person_data()) {
//!     let family = hood.family_of(sim).map(|f| f.name.as_str()).unwrap_or("-");
//!     println!("{} ({})", sim.name, family);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod model;

pub mod fami;
pub mod nbrs;
pub mod normalize;
pub mod strtable;

pub use error::{Error, Result};
pub use model::{
    Age, Family, Gender, Interests, PersonData, Personality, Relationship, Sim, Topic,
};
pub use strtable::{StrEntry, StrTable};

use std::collections::HashMap;

use lada_iff::IffFile;

/// A fully decoded neighborhood: every sim and family in the file.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Neighborhood {
    pub sims: Vec<Sim>,
    pub families: Vec<Family>,
}

impl Neighborhood {
    /// Parse a complete `Neighborhood.iff` buffer.
    ///
    /// Routes each chunk by type tag to its decoder, then resolves family
    /// names by pairing FAMI and FAMs chunks on their chunk id. A family
    /// without a matching FAMs chunk keeps an empty name; that is the only
    /// soft failure here, everything else aborts the parse.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let iff = IffFile::parse(data).map_err(Error::Container)?;

        let mut sims = Vec::new();
        let mut families = Vec::new();
        let mut family_names: HashMap<u16, String> = HashMap::new();

        for chunk in iff.chunks() {
            let chunk = chunk.map_err(Error::Container)?;
            match &chunk.type_tag {
                nbrs::NBRS_TAG => sims.extend(nbrs::decode_roster(chunk.payload)?),
                fami::FAMI_TAG => families.push(fami::decode_family(chunk.id, chunk.payload)?),
                strtable::FAMS_TAG => {
                    let table = StrTable::decode(chunk.payload)?;
                    if let Some(name) = table.first_value() {
                        family_names.insert(chunk.id, name.to_string());
                    }
                }
                _ => {}
            }
        }

        for family in &mut families {
            if let Some(name) = family_names.get(&family.chunk_id) {
                family.name = name.clone();
            }
        }

        Ok(Self { sims, families })
    }

    /// Look up a sim by neighbor id.
    pub fn sim(&self, neighbor_id: u16) -> Option<&Sim> {
        self.sims.iter().find(|sim| sim.neighbor_id == neighbor_id)
    }

    /// Look up a family by chunk id.
    pub fn family(&self, chunk_id: u16) -> Option<&Family> {
        self.families.iter().find(|family| family.chunk_id == chunk_id)
    }

    /// The family whose member list contains the sim's guid.
    pub fn family_of(&self, sim: &Sim) -> Option<&Family> {
        self.families
            .iter()
            .find(|family| family.member_guids.contains(&sim.guid))
    }
}

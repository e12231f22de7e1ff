//! Lada - The Sims 1 neighborhood parsing and compatibility analysis.
//!
//! This crate provides a unified interface to the Lada library ecosystem
//! for working with Sims 1 neighborhood files.
//!
//! # Crates
//!
//! - [`lada_common`] - Common utilities (bounds-checked binary cursor)
//! - [`lada_iff`] - IFF container framing
//! - [`lada_hood`] - Neighborhood decoding (sims, families, interests)
//! - [`lada_score`] - Interest-based compatibility scoring
//!
//! # Example
//!
//! ```no_run
//! use lada::prelude::*;
//!
//! let data = std::fs::read("Neighborhood.iff")?;
//! let hood = Neighborhood::parse(&data)?;
//!
//! if let Some(sim) = hood.sim(3) {
//!     for entry in rank_against(sim, &hood.sims) {
//!         println!("{:>4}  {}", entry.score, entry.sim.name);
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use lada_common as common;
pub use lada_hood as hood;
pub use lada_iff as iff;
pub use lada_score as score;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lada_common::ByteCursor;
    pub use lada_hood::{
        Age, Family, Gender, Interests, Neighborhood, PersonData, Personality, Relationship, Sim,
        Topic,
    };
    pub use lada_iff::{IffFile, RawChunk};
    pub use lada_score::{rank_against, score, Compatibility, CompatibilityRanking};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

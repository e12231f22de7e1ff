//! Interest scale normalization.
//!
//! Interest values appear in the wild on two scales: pre-authored sims use
//! 0-1000, while user-created sims are sometimes authored on 0-10. The
//! format carries no scale flag, so a heuristic decides: if the maximum
//! value in a group is at most 10, the whole group is multiplied by 100.
//!
//! The base-game and expansion topic groups are rescaled independently.
//! User-created sims commonly mix an already-1000-scale expansion group
//! with a 10-scale base group, and a single whole-set maximum would leave
//! the base group unscaled.
//!
//! Known limitation: a sim whose true maximum interest in a group is
//! legitimately at most 10 on the 1000 scale gets rescaled anyway.

use crate::model::{Interests, Topic};

/// Upper bound of the canonical interest scale.
pub const SCALE_MAX: i32 = 1000;

/// A group maximum at or below this is taken to mean the 0-10 scale.
const LEGACY_MAX: i32 = 10;

/// Factor between the 0-10 and 0-1000 scales.
const LEGACY_FACTOR: i32 = 100;

/// Rescale both topic groups of an interest set onto the 0-1000 scale.
///
/// Idempotent: interests already on the canonical scale are unchanged.
pub fn normalize(interests: &mut Interests) {
    rescale_group(interests, false);
    rescale_group(interests, true);
}

fn rescale_group(interests: &mut Interests, expansion: bool) {
    let group = Topic::ALL.iter().copied().filter(|t| t.is_expansion() == expansion);

    let max = group
        .clone()
        .filter_map(|topic| interests.get(topic))
        .max();

    match max {
        Some(max) if max <= LEGACY_MAX => {
            for topic in group {
                if let Some(value) = interests.get(topic) {
                    interests.set(topic, value * LEGACY_FACTOR);
                }
            }
        }
        _ => {}
    }
}

//! Interest-based compatibility scoring.
//!
//! Conversation outcomes in the game are driven purely by interest values:
//! the game picks a topic, and each sim reacts positively when their
//! interest is at or above 4 on the authored 0-10 scale - 400 after
//! normalization. Compatibility therefore measures per-topic agreement:
//!
//! - both sims at or above 400: a **common interest**, worth the weaker
//!   sim's value (a stronger shared passion scores higher)
//! - exactly one at or above 400: a **risky topic**, penalized by the gap
//! - neither cares: no effect
//!
//! Topics absent from either sim's interest map are left out entirely.
//! The raw sum over the 15 known topics spans [-15000, +15000] and is
//! mapped onto a 0-1000 score. Scoring is a pure function over decoded
//! sims; nothing here reads files or caches state.

use lada_hood::{Sim, Topic};

/// Interest threshold on the normalized 0-1000 scale; at or above means
/// the sim reacts positively to the topic.
pub const INTEREST_THRESHOLD: i32 = 400;

/// Largest possible raw contribution magnitude: every topic common at the
/// maximum value, or every topic risky with the maximum gap.
const MAX_RAW: i32 = Topic::COUNT as i32 * 1000;

/// The outcome of scoring one pair of sims.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Compatibility {
    /// Final score in [0, 1000].
    pub score: i32,
    /// Topics both sims care about, in topic order.
    pub common_interests: Vec<Topic>,
    /// Topics exactly one sim cares about, in topic order.
    pub risky_topics: Vec<Topic>,
}

/// One entry of a ranked compatibility listing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompatibilityRanking<'a> {
    pub sim: &'a Sim,
    pub score: i32,
    pub common_interests: Vec<Topic>,
    pub risky_topics: Vec<Topic>,
    /// Daily relationship score from the ranked-for sim towards this one,
    /// if the two have met.
    pub daily: Option<i32>,
    /// Lifetime relationship score, if the two have met.
    pub lifetime: Option<i32>,
    pub is_friend: bool,
}

/// Score a pair of sims.
///
/// Returns `None` when either sim has no person data; such records carry
/// no interests to compare. The score is symmetric.
pub fn score(a: &Sim, b: &Sim) -> Option<Compatibility> {
    let interests_a = &a.person.as_ref()?.interests;
    let interests_b = &b.person.as_ref()?.interests;

    let mut common_interests = Vec::new();
    let mut risky_topics = Vec::new();
    let mut raw = 0i32;

    for topic in Topic::ALL {
        let (Some(value_a), Some(value_b)) = (interests_a.get(topic), interests_b.get(topic))
        else {
            continue;
        };

        let a_positive = value_a >= INTEREST_THRESHOLD;
        let b_positive = value_b >= INTEREST_THRESHOLD;

        if a_positive && b_positive {
            common_interests.push(topic);
            raw += value_a.min(value_b);
        } else if a_positive != b_positive {
            risky_topics.push(topic);
            raw -= (value_a - value_b).abs();
        }
    }

    let score = (f64::from(raw + MAX_RAW) / f64::from(2 * MAX_RAW) * 1000.0).round() as i32;

    Some(Compatibility {
        score: score.clamp(0, 1000),
        common_interests,
        risky_topics,
    })
}

/// Rank every other sim in the roster against `target`.
///
/// Sims without person data and the target itself are excluded. The
/// result is ordered by descending score; ties break by ascending
/// neighbor id so the ordering is deterministic.
pub fn rank_against<'a>(target: &Sim, sims: &'a [Sim]) -> Vec<CompatibilityRanking<'a>> {
    let mut rankings: Vec<CompatibilityRanking<'a>> = sims
        .iter()
        .filter(|other| other.neighbor_id != target.neighbor_id)
        .filter_map(|other| {
            let compat = score(target, other)?;
            let rel = target.relationship_to(other.neighbor_id);
            Some(CompatibilityRanking {
                sim: other,
                score: compat.score,
                common_interests: compat.common_interests,
                risky_topics: compat.risky_topics,
                daily: rel.and_then(|r| r.daily()),
                lifetime: rel.and_then(|r| r.lifetime()),
                is_friend: rel.is_some_and(|r| r.is_friend()),
            })
        })
        .collect();

    rankings.sort_by(|x, y| {
        y.score
            .cmp(&x.score)
            .then(x.sim.neighbor_id.cmp(&y.sim.neighbor_id))
    });
    rankings
}

#[cfg(test)]
mod tests {
    use super::*;
    use lada_hood::{Gender, Interests, PersonData, Personality, Relationship};

    fn sim_with_interests(neighbor_id: u16, values: &[(Topic, i32)]) -> Sim {
        let mut interests = Interests::new();
        for &(topic, value) in values {
            interests.set(topic, value);
        }
        Sim {
            neighbor_id,
            guid: u32::from(neighbor_id),
            name: format!("Sim {neighbor_id}"),
            mystery_zero: 0,
            person: Some(PersonData {
                personality: Personality::default(),
                interests,
                age_raw: 25,
                gender: Gender::Male,
                family_number: 1,
                zodiac: 0,
            }),
            relationships: Vec::new(),
        }
    }

    fn empty_sim(neighbor_id: u16) -> Sim {
        Sim {
            neighbor_id,
            guid: u32::from(neighbor_id),
            name: String::new(),
            mystery_zero: 0,
            person: None,
            relationships: Vec::new(),
        }
    }

    #[test]
    fn test_worked_example() {
        let a = sim_with_interests(
            1,
            &[
                (Topic::Weather, 1000),
                (Topic::Sports, 1000),
                (Topic::Music, 900),
                (Topic::Violence, 100),
            ],
        );
        let b = sim_with_interests(
            2,
            &[
                (Topic::Weather, 1000),
                (Topic::Sports, 1000),
                (Topic::Music, 100),
                (Topic::Violence, 1000),
            ],
        );

        // common: weather + sports = +2000; risky: music 800 + violence
        // 900 = -1700; raw 300 -> round(15300 / 30000 * 1000) = 510.
        let result = score(&a, &b).unwrap();
        assert_eq!(result.score, 510);
        assert_eq!(result.common_interests, vec![Topic::Weather, Topic::Sports]);
        assert_eq!(result.risky_topics, vec![Topic::Violence, Topic::Music]);
    }

    #[test]
    fn test_symmetry() {
        let a = sim_with_interests(1, &[(Topic::Travel, 700), (Topic::Music, 200)]);
        let b = sim_with_interests(2, &[(Topic::Travel, 450), (Topic::Music, 950)]);

        assert_eq!(score(&a, &b).unwrap().score, score(&b, &a).unwrap().score);
    }

    #[test]
    fn test_score_bounds() {
        let all_max: Vec<_> = Topic::ALL.iter().map(|&t| (t, 1000)).collect();
        let all_min: Vec<_> = Topic::ALL.iter().map(|&t| (t, 0)).collect();
        let best = sim_with_interests(1, &all_max);
        let worst = sim_with_interests(2, &all_min);

        assert_eq!(score(&best, &best.clone()).unwrap().score, 1000);
        // All 15 topics risky at the maximum gap.
        assert_eq!(score(&best, &worst).unwrap().score, 0);
    }

    #[test]
    fn test_mutual_disinterest_is_neutral() {
        let a = sim_with_interests(1, &[(Topic::Politics, 100)]);
        let b = sim_with_interests(2, &[(Topic::Politics, 399)]);

        let result = score(&a, &b).unwrap();
        assert!(result.common_interests.is_empty());
        assert!(result.risky_topics.is_empty());
        assert_eq!(result.score, 500);
    }

    #[test]
    fn test_absent_topics_excluded() {
        // Sports is present only on one side; it must not count as risky.
        let a = sim_with_interests(1, &[(Topic::Weather, 1000), (Topic::Sports, 1000)]);
        let b = sim_with_interests(2, &[(Topic::Weather, 1000)]);

        let result = score(&a, &b).unwrap();
        assert_eq!(result.common_interests, vec![Topic::Weather]);
        assert!(result.risky_topics.is_empty());
        assert_eq!(result.score, 533); // round(16000 / 30000 * 1000)
    }

    #[test]
    fn test_sims_without_person_data_are_unscorable() {
        let a = sim_with_interests(1, &[(Topic::Weather, 1000)]);
        let b = empty_sim(2);

        assert!(score(&a, &b).is_none());
        assert!(score(&b, &a).is_none());
    }

    #[test]
    fn test_rank_ordering_and_tie_break() {
        let target = sim_with_interests(1, &[(Topic::Weather, 1000)]);
        // Same score for ids 4 and 2; id 2 must come first.
        let tied_a = sim_with_interests(4, &[(Topic::Weather, 600)]);
        let tied_b = sim_with_interests(2, &[(Topic::Weather, 600)]);
        let better = sim_with_interests(3, &[(Topic::Weather, 900)]);
        let unscorable = empty_sim(5);

        let sims = vec![target.clone(), tied_a, tied_b, better, unscorable];
        let rankings = rank_against(&target, &sims);

        let order: Vec<u16> = rankings.iter().map(|r| r.sim.neighbor_id).collect();
        assert_eq!(order, vec![3, 2, 4]);
        assert!(rankings[0].score > rankings[1].score);
        assert_eq!(rankings[1].score, rankings[2].score);
    }

    #[test]
    fn test_rank_carries_relationship() {
        let mut target = sim_with_interests(1, &[(Topic::Weather, 1000)]);
        target.relationships.push(Relationship {
            keys: vec![2],
            values: vec![35, 1, 20],
        });
        let known = sim_with_interests(2, &[(Topic::Weather, 500)]);
        let stranger = sim_with_interests(3, &[(Topic::Weather, 500)]);

        let sims = vec![known, stranger];
        let rankings = rank_against(&target, &sims);

        let known_entry = rankings.iter().find(|r| r.sim.neighbor_id == 2).unwrap();
        assert_eq!(known_entry.daily, Some(35));
        assert_eq!(known_entry.lifetime, Some(20));
        assert!(known_entry.is_friend);

        let stranger_entry = rankings.iter().find(|r| r.sim.neighbor_id == 3).unwrap();
        assert_eq!(stranger_entry.daily, None);
        assert!(!stranger_entry.is_friend);
    }
}

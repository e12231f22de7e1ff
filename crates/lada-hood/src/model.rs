//! Decoded neighborhood data model.
//!
//! Everything here is construct-once, read-only: a parse builds the full
//! object graph from the container bytes and nothing is mutated afterwards.

/// The 15 conversation topics whose interest values drive compatibility.
///
/// `Travel` through `Outdoors` are the base-game topics; the rest were
/// added by the Hot Date expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Topic {
    Exercise,
    Food,
    Parties,
    Style,
    Hollywood,
    Travel,
    Violence,
    Politics,
    Sixties,
    Weather,
    Sports,
    Music,
    Outdoors,
    Technology,
    Romance,
}

impl Topic {
    /// Number of known topics.
    pub const COUNT: usize = 15;

    /// All topics, expansion group first, base group in decode order.
    pub const ALL: [Topic; Topic::COUNT] = [
        Topic::Exercise,
        Topic::Food,
        Topic::Parties,
        Topic::Style,
        Topic::Hollywood,
        Topic::Travel,
        Topic::Violence,
        Topic::Politics,
        Topic::Sixties,
        Topic::Weather,
        Topic::Sports,
        Topic::Music,
        Topic::Outdoors,
        Topic::Technology,
        Topic::Romance,
    ];

    /// Stable lowercase name, matching the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Topic::Exercise => "exercise",
            Topic::Food => "food",
            Topic::Parties => "parties",
            Topic::Style => "style",
            Topic::Hollywood => "hollywood",
            Topic::Travel => "travel",
            Topic::Violence => "violence",
            Topic::Politics => "politics",
            Topic::Sixties => "sixties",
            Topic::Weather => "weather",
            Topic::Sports => "sports",
            Topic::Music => "music",
            Topic::Outdoors => "outdoors",
            Topic::Technology => "technology",
            Topic::Romance => "romance",
        }
    }

    /// Whether this topic was introduced by the Hot Date expansion.
    ///
    /// The two groups are normalized independently; see
    /// [`normalize`](crate::normalize::normalize).
    pub const fn is_expansion(self) -> bool {
        !matches!(
            self,
            Topic::Travel
                | Topic::Violence
                | Topic::Politics
                | Topic::Sixties
                | Topic::Weather
                | Topic::Sports
                | Topic::Music
                | Topic::Outdoors
        )
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-sim interest values, keyed by topic.
///
/// Values lie in [0, 1000] after normalization. A topic can be absent
/// (e.g. expansion topics on a statistics block that predates them);
/// absent topics are excluded from scoring entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interests {
    values: [Option<i32>; Topic::COUNT],
}

impl Interests {
    /// An interest set with every topic absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a topic, if present.
    #[inline]
    pub fn get(&self, topic: Topic) -> Option<i32> {
        self.values[topic.index()]
    }

    /// Set the value for a topic.
    #[inline]
    pub fn set(&mut self, topic: Topic, value: i32) {
        self.values[topic.index()] = Some(value);
    }

    /// Iterate over the present topics in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Topic, i32)> + '_ {
        Topic::ALL
            .iter()
            .filter_map(|&topic| self.get(topic).map(|value| (topic, value)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Interests {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;
        for (topic, value) in self.iter() {
            map.serialize_entry(topic.name(), &value)?;
        }
        map.end()
    }
}

/// The five personality axes, on the game's 0-1000 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Personality {
    pub nice: i16,
    pub active: i16,
    pub playful: i16,
    pub outgoing: i16,
    pub neat: i16,
}

/// Sim gender, decoded from the statistics block (0 = male, 1 = female).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub(crate) fn from_raw(value: i16) -> Self {
        if value == 1 {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Gender::Male => "male",
            Gender::Female => "female",
        })
    }
}

/// Life stage, derived from the raw age value (below 18 is a child).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Age {
    Child,
    Adult,
}

impl Age {
    const ADULT_THRESHOLD: u16 = 18;

    pub(crate) fn from_raw(value: u16) -> Self {
        if value < Self::ADULT_THRESHOLD {
            Age::Child
        } else {
            Age::Adult
        }
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Age::Child => "child",
            Age::Adult => "adult",
        })
    }
}

/// One relationship entry from a sim's roster record.
///
/// The format stores a generic key list and value list per entry. In every
/// observed file the key list holds exactly one key, the target neighbor
/// id; extra keys are preserved verbatim but not interpreted. The first
/// three values are the daily score, the friendship flag and the lifetime
/// score; later values are preserved unread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Relationship {
    pub keys: Vec<i32>,
    pub values: Vec<i32>,
}

impl Relationship {
    const VALUE_DAILY: usize = 0;
    const VALUE_FRIEND: usize = 1;
    const VALUE_LIFETIME: usize = 2;

    /// The target neighbor id (the first key).
    pub fn target(&self) -> Option<i32> {
        self.keys.first().copied()
    }

    /// Daily relationship score, -100 to 100.
    pub fn daily(&self) -> Option<i32> {
        self.values.get(Self::VALUE_DAILY).copied()
    }

    /// Whether the sims are friends.
    pub fn is_friend(&self) -> bool {
        self.values
            .get(Self::VALUE_FRIEND)
            .is_some_and(|&v| v != 0)
    }

    /// Lifetime relationship score, -100 to 100.
    pub fn lifetime(&self) -> Option<i32> {
        self.values.get(Self::VALUE_LIFETIME).copied()
    }
}

/// The statistics block carried by sims with person data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PersonData {
    pub personality: Personality,
    /// Normalized interest values; see [`crate::normalize`].
    pub interests: Interests,
    pub age_raw: u16,
    pub gender: Gender,
    /// In-game family number from the statistics block.
    pub family_number: u16,
    /// Zodiac sign index, 0-11. Display only.
    pub zodiac: i16,
}

impl PersonData {
    /// Life stage derived from [`PersonData::age_raw`].
    pub fn age(&self) -> Age {
        Age::from_raw(self.age_raw)
    }
}

/// A decoded character record from the neighbor roster.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sim {
    /// Roster id, unique within the file.
    pub neighbor_id: u16,
    /// Object GUID; links the sim to family membership.
    pub guid: u32,
    pub name: String,
    /// Integrity field, expected to be 0. A mismatch is preserved rather
    /// than rejected; the field is cosmetic padding.
    pub mystery_zero: i32,
    /// Statistics block, absent for template/placeholder records. Sims
    /// without person data never appear in user-facing listings.
    pub person: Option<PersonData>,
    pub relationships: Vec<Relationship>,
}

impl Sim {
    /// Whether this sim carries a statistics block.
    pub fn has_person_data(&self) -> bool {
        self.person.is_some()
    }

    /// The relationship entry targeting the given neighbor id, if any.
    pub fn relationship_to(&self, neighbor_id: u16) -> Option<&Relationship> {
        self.relationships
            .iter()
            .find(|rel| rel.target() == Some(i32::from(neighbor_id)))
    }
}

/// A decoded family definition (FAMI chunk plus resolved FAMs name).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Family {
    /// IFF chunk id, used to pair the FAMI record with its FAMs name table.
    pub chunk_id: u16,
    /// In-game family number.
    pub family_number: u16,
    /// Lot number; 0 means the family is unplaced.
    pub house_number: u32,
    pub budget: i32,
    /// GUIDs of the member sims, in record order.
    pub member_guids: Vec<u32>,
    /// Display name from the paired FAMs chunk; empty when no FAMs chunk
    /// shares the chunk id.
    pub name: String,
}

impl Family {
    /// Whether the family is placed on a lot.
    pub fn is_placed(&self) -> bool {
        self.house_number != 0
    }
}

//! Common types used throughout the pairing engine

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unique identifier for a registered player
///
/// Wraps the numeric id assigned at registration so ids cannot be confused
/// with scores or round numbers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Tournament score in match points
pub type Score = u32;

/// One-based round number within a tournament
pub type RoundNumber = u32;

/// A registered player together with their current score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: Score,
}

/// One slot in a round's candidate sequence
///
/// Either a real player or the single placeholder added when the roster is
/// odd. Making the placeholder its own variant keeps it from ever being
/// mistaken for player data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Slot {
    Player(PlayerId),
    Bye,
}

impl Slot {
    /// The player id behind this slot, unless it is the bye
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            Slot::Player(id) => Some(*id),
            Slot::Bye => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Player(id) => write!(f, "{}", id),
            Slot::Bye => write!(f, "bye"),
        }
    }
}

/// Canonical unordered pair of player ids
///
/// The constructor normalizes order, so `{a, b}` and `{b, a}` produce the
/// same key and rematch lookups cover both orientations by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey(PlayerId, PlayerId);

impl PairKey {
    pub fn new(a: PlayerId, b: PlayerId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// The lower id of the pair
    pub fn low(&self) -> PlayerId {
        self.0
    }

    /// The higher id of the pair
    pub fn high(&self) -> PlayerId {
        self.1
    }
}

/// Set of unordered pairs that have already played
///
/// Byes are not pairs and never appear here.
pub type MatchHistory = HashSet<PairKey>;

/// A single table assignment for one round
///
/// Equality is unordered: the same two players compare equal in either
/// orientation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pairing {
    pub a: Player,
    pub b: Player,
}

impl Pairing {
    /// Canonical key for history bookkeeping
    pub fn key(&self) -> PairKey {
        PairKey::new(self.a.id, self.b.id)
    }

    /// Whether the given player sits at this table
    pub fn involves(&self, id: PlayerId) -> bool {
        self.a.id == id || self.b.id == id
    }
}

impl PartialEq for Pairing {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Eq for Pairing {}

impl std::fmt::Display for Pairing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.a.name, self.b.name)
    }
}

/// Everything produced for one round: the table pairings plus the bye
/// recipient when the roster was odd
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundPairings {
    pub pairs: Vec<Pairing>,
    pub bye: Option<Player>,
}

impl RoundPairings {
    /// Ids of every player covered by this round, bye recipient included
    pub fn player_ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self
            .pairs
            .iter()
            .flat_map(|pair| [pair.a.id, pair.b.id])
            .collect();
        if let Some(bye) = &self.bye {
            ids.push(bye.id);
        }
        ids
    }

    /// Number of tables in this round (the bye is not a table)
    pub fn table_count(&self) -> usize {
        self.pairs.len()
    }
}

impl std::fmt::Display for RoundPairings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pair in &self.pairs {
            writeln!(f, "{}", pair)?;
        }
        if let Some(bye) = &self.bye {
            writeln!(f, "{} has the bye", bye.name)?;
        }
        Ok(())
    }
}

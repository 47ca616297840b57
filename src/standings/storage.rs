//! Standings storage interface and implementations
//!
//! This module defines the interface for registering players and recording
//! match outcomes, with an in-memory implementation that computes scores on
//! demand from the match log so standings can never drift from the results.

use crate::config::{validate_scoring, ScoringConfig};
use crate::types::{MatchHistory, PairKey, Player, PlayerId, RoundNumber, Score};
use crate::utils::current_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// One recorded outcome in the match log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRecord {
    /// A played match; on a tie the winner and loser slots are
    /// interchangeable
    Played {
        winner: PlayerId,
        loser: PlayerId,
        tie: bool,
        round: RoundNumber,
        recorded_at: DateTime<Utc>,
    },
    /// An unplayed round awarded to one player
    Bye {
        player: PlayerId,
        round: RoundNumber,
        recorded_at: DateTime<Utc>,
    },
}

/// Registered player entry
#[derive(Debug, Clone)]
struct Registration {
    id: PlayerId,
    name: String,
}

/// Trait for standings storage operations
pub trait StandingsStore: Send + Sync {
    /// Register a new player and return the assigned id
    fn register_player(&self, name: &str) -> crate::error::Result<PlayerId>;

    /// Get the total number of registered players
    fn player_count(&self) -> crate::error::Result<usize>;

    /// Get the current roster with scores, sorted by score (descending)
    fn roster(&self) -> crate::error::Result<Vec<Player>>;

    /// Get every unordered pair that has already played a match
    ///
    /// Byes are not pairs and never appear here.
    fn played_pairs(&self) -> crate::error::Result<MatchHistory>;

    /// Record the outcome of a played match
    ///
    /// When `tie` is set, the winner and loser arguments are
    /// interchangeable and both players score tie points.
    fn record_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
        round: RoundNumber,
        tie: bool,
    ) -> crate::error::Result<()>;

    /// Record a bye awarded for the given round
    fn record_bye(&self, player: PlayerId, round: RoundNumber) -> crate::error::Result<()>;

    /// Get the players currently holding the top score
    fn leaders(&self) -> crate::error::Result<Vec<Player>>;
}

/// In-memory standings storage implementation
#[derive(Debug)]
pub struct InMemoryStandings {
    scoring: ScoringConfig,
    players: RwLock<Vec<Registration>>,
    matches: RwLock<Vec<MatchRecord>>,
}

impl InMemoryStandings {
    /// Create a new in-memory store with standard scoring
    pub fn new() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            players: RwLock::new(Vec::new()),
            matches: RwLock::new(Vec::new()),
        }
    }

    /// Create a new in-memory store with custom scoring
    pub fn with_scoring(scoring: ScoringConfig) -> crate::error::Result<Self> {
        validate_scoring(&scoring)?;
        Ok(Self {
            scoring,
            players: RwLock::new(Vec::new()),
            matches: RwLock::new(Vec::new()),
        })
    }

    /// Get the full match log, oldest record first
    pub fn match_log(&self) -> crate::error::Result<Vec<MatchRecord>> {
        let matches =
            self.matches
                .read()
                .map_err(|_| crate::error::PairingError::Internal {
                    message: "Failed to acquire matches read lock".to_string(),
                })?;

        Ok(matches.clone())
    }

    /// Fold the match log into one player's score
    fn score_of(&self, id: PlayerId, matches: &[MatchRecord]) -> Score {
        let mut score = 0;
        for record in matches {
            match record {
                MatchRecord::Played {
                    winner,
                    loser,
                    tie,
                    ..
                } => {
                    if *tie {
                        if *winner == id || *loser == id {
                            score += self.scoring.tie_points;
                        }
                    } else if *winner == id {
                        score += self.scoring.win_points;
                    }
                }
                MatchRecord::Bye { player, .. } => {
                    if *player == id {
                        score += self.scoring.bye_points;
                    }
                }
            }
        }
        score
    }
}

impl Default for InMemoryStandings {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_registered(players: &[Registration], id: PlayerId) -> crate::error::Result<()> {
    if players.iter().any(|p| p.id == id) {
        Ok(())
    } else {
        Err(crate::error::PairingError::PlayerNotFound {
            player_id: id.to_string(),
        }
        .into())
    }
}

impl StandingsStore for InMemoryStandings {
    fn register_player(&self, name: &str) -> crate::error::Result<PlayerId> {
        let mut players =
            self.players
                .write()
                .map_err(|_| crate::error::PairingError::Internal {
                    message: "Failed to acquire players write lock".to_string(),
                })?;

        let id = PlayerId::new(players.len() as u32 + 1);
        players.push(Registration {
            id,
            name: name.to_string(),
        });

        Ok(id)
    }

    fn player_count(&self) -> crate::error::Result<usize> {
        let players =
            self.players
                .read()
                .map_err(|_| crate::error::PairingError::Internal {
                    message: "Failed to acquire players read lock".to_string(),
                })?;

        Ok(players.len())
    }

    fn roster(&self) -> crate::error::Result<Vec<Player>> {
        let players =
            self.players
                .read()
                .map_err(|_| crate::error::PairingError::Internal {
                    message: "Failed to acquire players read lock".to_string(),
                })?;
        let matches =
            self.matches
                .read()
                .map_err(|_| crate::error::PairingError::Internal {
                    message: "Failed to acquire matches read lock".to_string(),
                })?;

        let mut roster: Vec<Player> = players
            .iter()
            .map(|registration| Player {
                id: registration.id,
                name: registration.name.clone(),
                score: self.score_of(registration.id, &matches),
            })
            .collect();

        // Stable sort keeps registration order within a score tier
        roster.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(roster)
    }

    fn played_pairs(&self) -> crate::error::Result<MatchHistory> {
        let matches =
            self.matches
                .read()
                .map_err(|_| crate::error::PairingError::Internal {
                    message: "Failed to acquire matches read lock".to_string(),
                })?;

        let mut pairs = MatchHistory::new();
        for record in matches.iter() {
            if let MatchRecord::Played { winner, loser, .. } = record {
                pairs.insert(PairKey::new(*winner, *loser));
            }
        }

        Ok(pairs)
    }

    fn record_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
        round: RoundNumber,
        tie: bool,
    ) -> crate::error::Result<()> {
        if winner == loser {
            return Err(crate::error::PairingError::InvalidInput {
                reason: format!("player {} cannot play against themselves", winner),
            }
            .into());
        }

        let players =
            self.players
                .read()
                .map_err(|_| crate::error::PairingError::Internal {
                    message: "Failed to acquire players read lock".to_string(),
                })?;
        ensure_registered(&players, winner)?;
        ensure_registered(&players, loser)?;
        drop(players);

        let mut matches =
            self.matches
                .write()
                .map_err(|_| crate::error::PairingError::Internal {
                    message: "Failed to acquire matches write lock".to_string(),
                })?;

        matches.push(MatchRecord::Played {
            winner,
            loser,
            tie,
            round,
            recorded_at: current_timestamp(),
        });

        Ok(())
    }

    fn record_bye(&self, player: PlayerId, round: RoundNumber) -> crate::error::Result<()> {
        let players =
            self.players
                .read()
                .map_err(|_| crate::error::PairingError::Internal {
                    message: "Failed to acquire players read lock".to_string(),
                })?;
        ensure_registered(&players, player)?;
        drop(players);

        let mut matches =
            self.matches
                .write()
                .map_err(|_| crate::error::PairingError::Internal {
                    message: "Failed to acquire matches write lock".to_string(),
                })?;

        matches.push(MatchRecord::Bye {
            player,
            round,
            recorded_at: current_timestamp(),
        });

        Ok(())
    }

    fn leaders(&self) -> crate::error::Result<Vec<Player>> {
        let roster = self.roster()?;

        let top_score = match roster.first() {
            Some(player) => player.score,
            None => return Ok(Vec::new()),
        };

        Ok(roster
            .into_iter()
            .take_while(|player| player.score == top_score)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PairingError;

    fn store_with_players(names: &[&str]) -> (InMemoryStandings, Vec<PlayerId>) {
        let store = InMemoryStandings::new();
        let ids = names
            .iter()
            .map(|name| store.register_player(name).unwrap())
            .collect();
        (store, ids)
    }

    #[test]
    fn test_registration_assigns_sequential_ids() {
        let (store, ids) = store_with_players(&["Alice", "Bruno", "Carla"]);

        assert_eq!(ids, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
        assert_eq!(store.player_count().unwrap(), 3);
    }

    #[test]
    fn test_fresh_roster_has_zero_scores() {
        let (store, _) = store_with_players(&["Alice", "Bruno"]);

        let roster = store.roster().unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.iter().all(|player| player.score == 0));
    }

    #[test]
    fn test_standard_scoring_arithmetic() {
        let (store, ids) = store_with_players(&["Alice", "Bruno", "Carla", "Dora"]);

        // Alice beats Bruno, Carla ties Dora, Alice takes a bye later
        store.record_match(ids[0], ids[1], 1, false).unwrap();
        store.record_match(ids[2], ids[3], 1, true).unwrap();
        store.record_bye(ids[0], 2).unwrap();

        let roster = store.roster().unwrap();
        let score_of = |id: PlayerId| roster.iter().find(|p| p.id == id).unwrap().score;

        assert_eq!(score_of(ids[0]), 3); // win + bye
        assert_eq!(score_of(ids[1]), 0); // loss
        assert_eq!(score_of(ids[2]), 1); // tie
        assert_eq!(score_of(ids[3]), 1); // tie
    }

    #[test]
    fn test_tie_scores_both_players_regardless_of_slot_order() {
        let (store, ids) = store_with_players(&["Alice", "Bruno"]);

        store.record_match(ids[1], ids[0], 1, true).unwrap();

        let roster = store.roster().unwrap();
        assert!(roster.iter().all(|player| player.score == 1));
    }

    #[test]
    fn test_roster_is_sorted_by_score_descending() {
        let (store, ids) = store_with_players(&["Alice", "Bruno", "Carla", "Dora"]);

        store.record_match(ids[2], ids[0], 1, false).unwrap();
        store.record_match(ids[2], ids[1], 2, false).unwrap();
        store.record_match(ids[3], ids[1], 3, false).unwrap();

        let roster = store.roster().unwrap();
        let scores: Vec<Score> = roster.iter().map(|p| p.score).collect();

        assert_eq!(scores, vec![4, 2, 0, 0]);
        assert_eq!(roster[0].id, ids[2]);
    }

    #[test]
    fn test_custom_scoring_is_applied() {
        let store = InMemoryStandings::with_scoring(ScoringConfig {
            win_points: 3,
            tie_points: 1,
            bye_points: 3,
        })
        .unwrap();
        let alice = store.register_player("Alice").unwrap();
        let bruno = store.register_player("Bruno").unwrap();

        store.record_match(alice, bruno, 1, false).unwrap();
        store.record_bye(bruno, 1).unwrap();

        let roster = store.roster().unwrap();
        let score_of = |id: PlayerId| roster.iter().find(|p| p.id == id).unwrap().score;

        assert_eq!(score_of(alice), 3);
        assert_eq!(score_of(bruno), 3);
    }

    #[test]
    fn test_invalid_scoring_config_is_rejected() {
        let result = InMemoryStandings::with_scoring(ScoringConfig {
            win_points: 0,
            tie_points: 0,
            bye_points: 0,
        });

        assert!(result.is_err());
    }

    #[test]
    fn test_played_pairs_cover_both_orientations_and_skip_byes() {
        let (store, ids) = store_with_players(&["Alice", "Bruno", "Carla"]);

        store.record_match(ids[0], ids[1], 1, false).unwrap();
        store.record_bye(ids[2], 1).unwrap();

        let pairs = store.played_pairs().unwrap();
        assert_eq!(pairs.len(), 1);
        assert!(pairs.contains(&PairKey::new(ids[1], ids[0])));
    }

    #[test]
    fn test_recording_against_unknown_player_fails() {
        let (store, ids) = store_with_players(&["Alice"]);

        let err = store
            .record_match(ids[0], PlayerId::new(9), 1, false)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PairingError>(),
            Some(PairingError::PlayerNotFound { .. })
        ));

        let err = store.record_bye(PlayerId::new(9), 1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PairingError>(),
            Some(PairingError::PlayerNotFound { .. })
        ));
    }

    #[test]
    fn test_self_match_is_rejected() {
        let (store, ids) = store_with_players(&["Alice"]);

        let err = store.record_match(ids[0], ids[0], 1, false).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PairingError>(),
            Some(PairingError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_leaders_include_every_tied_player() {
        let (store, ids) = store_with_players(&["Alice", "Bruno", "Carla", "Dora"]);

        store.record_match(ids[0], ids[2], 1, false).unwrap();
        store.record_match(ids[1], ids[3], 1, false).unwrap();

        let leaders = store.leaders().unwrap();
        let leader_ids: Vec<PlayerId> = leaders.iter().map(|p| p.id).collect();

        assert_eq!(leader_ids.len(), 2);
        assert!(leader_ids.contains(&ids[0]));
        assert!(leader_ids.contains(&ids[1]));
    }

    #[test]
    fn test_leaders_on_an_empty_store() {
        let store = InMemoryStandings::new();
        assert!(store.leaders().unwrap().is_empty());
    }

    #[test]
    fn test_match_log_keeps_recording_order() {
        let (store, ids) = store_with_players(&["Alice", "Bruno", "Carla"]);

        store.record_match(ids[0], ids[1], 1, false).unwrap();
        store.record_bye(ids[2], 1).unwrap();
        store.record_match(ids[2], ids[0], 2, true).unwrap();

        let log = store.match_log().unwrap();
        assert_eq!(log.len(), 3);
        assert!(matches!(log[0], MatchRecord::Played { tie: false, .. }));
        assert!(matches!(log[1], MatchRecord::Bye { .. }));
        assert!(matches!(log[2], MatchRecord::Played { tie: true, .. }));
    }
}

//! Test fixtures and mock implementations for integration testing

use std::sync::RwLock;
use swiss_arbiter::error::Result;
use swiss_arbiter::types::{MatchHistory, PairKey, Player, PlayerId, RoundNumber};
use swiss_arbiter::StandingsStore;

/// A recording call captured by the mock store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Match {
        winner: PlayerId,
        loser: PlayerId,
        round: RoundNumber,
        tie: bool,
    },
    Bye {
        player: PlayerId,
        round: RoundNumber,
    },
}

/// Mock standings store that serves a preset roster and captures every
/// recording call for inspection
///
/// Scores stay frozen at their preset values; recorded matches only extend
/// the served history. Flows that need evolving scores use the real
/// in-memory store instead.
#[derive(Debug, Default)]
pub struct RecordingStandings {
    roster: RwLock<Vec<Player>>,
    history: RwLock<MatchHistory>,
    calls: RwLock<Vec<RecordedCall>>,
}

impl RecordingStandings {
    pub fn with_roster(roster: Vec<Player>) -> Self {
        Self {
            roster: RwLock::new(roster),
            history: RwLock::new(MatchHistory::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Preset played pairs to serve alongside recorded ones
    pub fn preset_history(&self, history: MatchHistory) {
        if let Ok(mut stored) = self.history.write() {
            *stored = history;
        }
    }

    /// Get all recording calls made (for testing)
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls
            .read()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Count captured bye recordings
    pub fn bye_count(&self) -> usize {
        self.recorded_calls()
            .iter()
            .filter(|call| matches!(call, RecordedCall::Bye { .. }))
            .count()
    }
}

impl StandingsStore for RecordingStandings {
    fn register_player(&self, name: &str) -> Result<PlayerId> {
        let mut roster =
            self.roster
                .write()
                .map_err(|_| swiss_arbiter::error::PairingError::Internal {
                    message: "Failed to acquire roster write lock".to_string(),
                })?;

        let next = roster.iter().map(|p| p.id.value()).max().unwrap_or(0) + 1;
        let id = PlayerId::new(next);
        roster.push(Player {
            id,
            name: name.to_string(),
            score: 0,
        });
        Ok(id)
    }

    fn player_count(&self) -> Result<usize> {
        let roster =
            self.roster
                .read()
                .map_err(|_| swiss_arbiter::error::PairingError::Internal {
                    message: "Failed to acquire roster read lock".to_string(),
                })?;

        Ok(roster.len())
    }

    fn roster(&self) -> Result<Vec<Player>> {
        let roster =
            self.roster
                .read()
                .map_err(|_| swiss_arbiter::error::PairingError::Internal {
                    message: "Failed to acquire roster read lock".to_string(),
                })?;

        let mut served = roster.clone();
        served.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(served)
    }

    fn played_pairs(&self) -> Result<MatchHistory> {
        let history =
            self.history
                .read()
                .map_err(|_| swiss_arbiter::error::PairingError::Internal {
                    message: "Failed to acquire history read lock".to_string(),
                })?;

        let mut served = history.clone();
        for call in self.recorded_calls() {
            if let RecordedCall::Match { winner, loser, .. } = call {
                served.insert(PairKey::new(winner, loser));
            }
        }
        Ok(served)
    }

    fn record_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
        round: RoundNumber,
        tie: bool,
    ) -> Result<()> {
        if let Ok(mut calls) = self.calls.write() {
            calls.push(RecordedCall::Match {
                winner,
                loser,
                round,
                tie,
            });
        }
        Ok(())
    }

    fn record_bye(&self, player: PlayerId, round: RoundNumber) -> Result<()> {
        if let Ok(mut calls) = self.calls.write() {
            calls.push(RecordedCall::Bye { player, round });
        }
        Ok(())
    }

    fn leaders(&self) -> Result<Vec<Player>> {
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

/// Build a roster of players with fixed ids and scores
pub fn preset_roster(entries: &[(u32, u32)]) -> Vec<Player> {
    entries
        .iter()
        .map(|&(id, score)| Player {
            id: PlayerId::new(id),
            name: format!("player-{}", id),
            score,
        })
        .collect()
}

//! Round orchestration over a standings store
//!
//! This module ties the pairing engine to a standings store: it reads the
//! roster (plus the match history for later rounds), runs the round's
//! pairing, records the bye immediately so the next round sees it, and hands
//! the assembled pairings back to the caller.

use crate::error::{PairingError, Result};
use crate::pairing::{pair_scored_round, seed_round_one};
use crate::standings::StandingsStore;
use crate::types::{PlayerId, RoundNumber, RoundPairings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{info, warn};

/// Statistics about round manager operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundManagerStats {
    /// Total number of rounds paired
    pub rounds_paired: u64,
    /// Total number of byes awarded
    pub byes_awarded: u64,
    /// Total number of results recorded
    pub results_recorded: u64,
}

/// Drives one tournament's rounds against a standings store
///
/// Rounds must be requested in order, each after the previous round's
/// results have been recorded; the manager does not replay history.
pub struct RoundManager {
    /// Standings store holding registrations and results
    standings: Arc<dyn StandingsStore>,
    /// Random generator for seeding and tier shuffles
    rng: StdRng,
    /// Manager statistics
    stats: RoundManagerStats,
}

impl RoundManager {
    /// Create a new round manager with an entropy-seeded generator
    pub fn new(standings: Arc<dyn StandingsStore>) -> Self {
        Self {
            standings,
            rng: StdRng::from_entropy(),
            stats: RoundManagerStats::default(),
        }
    }

    /// Create a new round manager with a fixed seed, for reproducible
    /// pairings
    pub fn with_seed(standings: Arc<dyn StandingsStore>, seed: u64) -> Self {
        Self {
            standings,
            rng: StdRng::seed_from_u64(seed),
            stats: RoundManagerStats::default(),
        }
    }

    /// Pair the given round from current standings
    ///
    /// Round 1 is seeded at random; later rounds pair by score tier with
    /// rematch avoidance. A bye, when one is awarded, is recorded in the
    /// store before this returns.
    pub fn pair_round(&mut self, round: RoundNumber) -> Result<RoundPairings> {
        if round == 0 {
            return Err(PairingError::InvalidInput {
                reason: "round numbers start at 1".to_string(),
            }
            .into());
        }

        let players = self.standings.roster()?;
        info!("Pairing round {} for {} players", round, players.len());

        let outcome = if round == 1 {
            seed_round_one(&players, &mut self.rng)
        } else {
            let history = self.standings.played_pairs()?;
            pair_scored_round(&players, &history, &mut self.rng)
        };

        let pairings = match outcome {
            Ok(pairings) => pairings,
            Err(err) => {
                warn!("Round {} could not be paired: {}", round, err);
                return Err(err);
            }
        };

        if let Some(bye) = &pairings.bye {
            self.standings.record_bye(bye.id, round)?;
            self.stats.byes_awarded += 1;
            info!("Round {} bye goes to '{}' ({})", round, bye.name, bye.id);
        }

        self.stats.rounds_paired += 1;
        info!(
            "Round {} paired into {} tables",
            round,
            pairings.pairs.len()
        );

        Ok(pairings)
    }

    /// Record a played result through the underlying store
    pub fn record_result(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
        round: RoundNumber,
        tie: bool,
    ) -> Result<()> {
        self.standings.record_match(winner, loser, round, tie)?;
        self.stats.results_recorded += 1;
        Ok(())
    }

    /// Get current manager statistics
    pub fn stats(&self) -> RoundManagerStats {
        self.stats
    }
}

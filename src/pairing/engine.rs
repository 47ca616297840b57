//! Engine entry points tying the pairing stages together
//!
//! Two operations cover a whole tournament: `seed_round_one` for the opening
//! round where no scores exist, and `pair_scored_round` for every round
//! after it. Both are pure apart from the injected random generator; they
//! never touch storage.

use crate::error::{PairingError, Result};
use crate::pairing::assembler::assemble_round;
use crate::pairing::grouping::order_by_score_tiers;
use crate::pairing::matcher::find_rematch_free_order;
use crate::pairing::seeding::random_seed_order;
use crate::types::{MatchHistory, Player, PlayerId, RoundPairings, Slot};
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Pair an opening round
///
/// No score information exists yet, so the order is a uniform shuffle with
/// the bye slot (odd rosters) shuffled in along with the players.
pub fn seed_round_one<R: Rng>(players: &[Player], rng: &mut R) -> Result<RoundPairings> {
    ensure_distinct_ids(players)?;

    let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
    let order = random_seed_order(&ids, rng);
    debug!("Seeded round 1 for {} players", players.len());

    assemble_round(&order, players)
}

/// Pair a later round from current standings
///
/// Players are grouped into score tiers with random order inside each tier,
/// the bye slot for an odd roster joins after the lowest tier, and the
/// backtracking matcher repairs the sequence until no table is a rematch.
pub fn pair_scored_round<R: Rng>(
    players: &[Player],
    history: &MatchHistory,
    rng: &mut R,
) -> Result<RoundPairings> {
    ensure_distinct_ids(players)?;

    let mut slots: Vec<Slot> = order_by_score_tiers(players, rng)
        .into_iter()
        .map(Slot::Player)
        .collect();
    if slots.len() % 2 == 1 {
        slots.push(Slot::Bye);
    }

    let order = find_rematch_free_order(&slots, history)?;
    assemble_round(&order, players)
}

/// Duplicate ids make a roster unpairable before any search begins.
fn ensure_distinct_ids(players: &[Player]) -> Result<()> {
    let mut seen: HashSet<PlayerId> = HashSet::with_capacity(players.len());
    for player in players {
        if !seen.insert(player.id) {
            return Err(PairingError::InvalidInput {
                reason: format!("duplicate player id {} in roster", player.id),
            }
            .into());
        }
    }
    Ok(())
}

//! Rematch-avoiding matching over an ordered candidate sequence
//!
//! Depth-first backtracking over the "first remaining element" strategy: the
//! head of the remaining sequence is paired with the earliest compatible
//! candidate, and the search recurses on what is left. Each branch owns its
//! own copy of the remaining slots, so unwinding any number of levels
//! restores exactly the state that level saw. Input order is a soft
//! preference: earlier candidates are tried first, which is how score-tier
//! grouping steers who meets whom.

use crate::error::{PairingError, Result};
use crate::types::{MatchHistory, PairKey, PlayerId, Slot};
use std::collections::HashSet;
use tracing::debug;

/// Bookkeeping carried through one matching search.
struct SearchState<'a> {
    history: &'a MatchHistory,
    /// Remainders already proven unpairable, keyed in sorted order. Whether
    /// a set of slots can be matched does not depend on element order, so a
    /// failure recorded once holds for every permutation.
    dead_remainders: HashSet<Vec<Slot>>,
    dead_ends: u64,
}

/// Rearrange `candidates` so adjacent slots (0,1), (2,3), .. form valid
/// tables: no pair recorded in `history`, the bye slot used at most once
///
/// The output is a permutation of the input. Returns
/// [`PairingError::NoValidPairingFound`] once exhaustive search proves that
/// no complete rematch-free matching exists for this sequence and history.
pub fn find_rematch_free_order(candidates: &[Slot], history: &MatchHistory) -> Result<Vec<Slot>> {
    validate_candidates(candidates, history)?;

    let mut state = SearchState {
        history,
        dead_remainders: HashSet::new(),
        dead_ends: 0,
    };

    match search(candidates.to_vec(), &mut state) {
        Some(order) => {
            debug!(
                "Matched {} slots after {} dead ends",
                candidates.len(),
                state.dead_ends
            );
            Ok(order)
        }
        None => {
            debug!(
                "Exhausted search over {} slots after {} dead ends",
                candidates.len(),
                state.dead_ends
            );
            Err(PairingError::NoValidPairingFound.into())
        }
    }
}

/// One recursion level: pair the head with each later candidate in order.
///
/// An empty remainder means the matching is complete. If every candidate for
/// the head fails, the caller's pair choice was wrong and `None` unwinds one
/// level.
fn search(remaining: Vec<Slot>, state: &mut SearchState<'_>) -> Option<Vec<Slot>> {
    if remaining.is_empty() {
        return Some(Vec::new());
    }

    let mut memo_key = remaining.clone();
    memo_key.sort_unstable();
    if state.dead_remainders.contains(&memo_key) {
        return None;
    }

    let head = remaining[0];
    for position in 1..remaining.len() {
        let candidate = remaining[position];
        if !is_valid_pair(head, candidate, state.history) {
            continue;
        }

        // Branch-local copy of the remainder; a failed branch leaves
        // nothing to undo.
        let mut rest = remaining.clone();
        rest.remove(position);
        rest.remove(0);

        if let Some(tail) = search(rest, state) {
            let mut order = Vec::with_capacity(remaining.len());
            order.push(head);
            order.push(candidate);
            order.extend(tail);
            return Some(order);
        }
    }

    state.dead_ends += 1;
    state.dead_remainders.insert(memo_key);
    None
}

/// A pair is playable when it is not a rematch. The bye sits with anyone;
/// two byes never meet because validation admits at most one bye slot.
fn is_valid_pair(a: Slot, b: Slot, history: &MatchHistory) -> bool {
    match (a.player_id(), b.player_id()) {
        (Some(x), Some(y)) => !history.contains(&PairKey::new(x, y)),
        _ => true,
    }
}

/// Reject inputs the search contract does not cover.
fn validate_candidates(candidates: &[Slot], history: &MatchHistory) -> Result<()> {
    if candidates.len() % 2 == 1 {
        return Err(PairingError::InvalidInput {
            reason: format!(
                "candidate sequence has odd length {}; pad with a bye slot first",
                candidates.len()
            ),
        }
        .into());
    }

    let mut seen: HashSet<PlayerId> = HashSet::with_capacity(candidates.len());
    let mut byes = 0usize;
    for slot in candidates {
        match slot.player_id() {
            Some(id) => {
                if !seen.insert(id) {
                    return Err(PairingError::InvalidInput {
                        reason: format!("duplicate player id {} in candidate sequence", id),
                    }
                    .into());
                }
            }
            None => byes += 1,
        }
    }

    if byes > 1 {
        return Err(PairingError::InvalidInput {
            reason: format!(
                "{} bye slots in candidate sequence; at most one is allowed",
                byes
            ),
        }
        .into());
    }

    for pair in history {
        if !seen.contains(&pair.low()) || !seen.contains(&pair.high()) {
            return Err(PairingError::InvalidInput {
                reason: format!(
                    "history pair {}-{} references a player outside this round",
                    pair.low(),
                    pair.high()
                ),
            }
            .into());
        }
    }

    Ok(())
}

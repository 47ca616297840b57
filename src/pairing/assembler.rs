//! Pair assembly from a matched slot order
//!
//! Folds the matcher's flat sequence into structured pairings with player
//! data attached, splitting out the bye record. Assembly is deterministic:
//! the same order and roster always produce the same result.

use crate::error::{PairingError, Result};
use crate::types::{Pairing, Player, PlayerId, RoundPairings, Slot};
use std::collections::HashMap;

/// Attach player data to a matched slot order, two slots per table
///
/// The bye, when present, is returned separately and is not a table.
pub fn assemble_round(order: &[Slot], roster: &[Player]) -> Result<RoundPairings> {
    if order.len() % 2 == 1 {
        return Err(PairingError::InvalidInput {
            reason: format!("slot order has odd length {}", order.len()),
        }
        .into());
    }

    let index: HashMap<PlayerId, &Player> = roster.iter().map(|p| (p.id, p)).collect();

    let mut pairs = Vec::with_capacity(order.len() / 2);
    let mut bye: Option<Player> = None;

    for table in order.chunks_exact(2) {
        match (table[0], table[1]) {
            (Slot::Bye, Slot::Bye) => {
                return Err(PairingError::InvalidInput {
                    reason: "two bye slots paired together".to_string(),
                }
                .into());
            }
            (Slot::Player(id), Slot::Bye) | (Slot::Bye, Slot::Player(id)) => {
                if bye.is_some() {
                    return Err(PairingError::InvalidInput {
                        reason: "more than one bye table in the round".to_string(),
                    }
                    .into());
                }
                bye = Some(lookup(&index, id)?.clone());
            }
            (Slot::Player(a), Slot::Player(b)) => {
                pairs.push(Pairing {
                    a: lookup(&index, a)?.clone(),
                    b: lookup(&index, b)?.clone(),
                });
            }
        }
    }

    Ok(RoundPairings { pairs, bye })
}

fn lookup<'a>(index: &HashMap<PlayerId, &'a Player>, id: PlayerId) -> Result<&'a Player> {
    index.get(&id).copied().ok_or_else(|| {
        PairingError::PlayerNotFound {
            player_id: id.to_string(),
        }
        .into()
    })
}

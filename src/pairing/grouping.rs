//! Score-tier grouping for later-round candidate ordering
//!
//! Players on equal scores form a tier. Tiers are emitted highest score
//! first, and only the order inside a tier is randomized, so the candidate
//! sequence always prefers opponents on similar standings.

use crate::types::{Player, PlayerId, Score};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Order player ids by score tier, highest tier first, with uniformly random
/// order inside each tier
///
/// Players on different scores never trade places across the tier boundary;
/// repeated calls differ only in intra-tier order.
pub fn order_by_score_tiers<R: Rng>(players: &[Player], rng: &mut R) -> Vec<PlayerId> {
    let mut tiers: BTreeMap<Score, Vec<PlayerId>> = BTreeMap::new();
    for player in players {
        tiers.entry(player.score).or_default().push(player.id);
    }

    let mut ordered = Vec::with_capacity(players.len());
    for (_, mut tier) in tiers.into_iter().rev() {
        tier.shuffle(rng);
        ordered.extend(tier);
    }
    ordered
}

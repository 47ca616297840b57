//! Round-1 random seeding
//!
//! The opening round has no score information, so the candidate order is a
//! uniform shuffle. For an odd roster the bye slot joins the sequence before
//! shuffling, which randomizes the bye recipient along with everything else.

use crate::types::{PlayerId, Slot};
use rand::seq::SliceRandom;
use rand::Rng;

/// Produce the round-1 candidate order: every id exactly once, plus one bye
/// slot when the count is odd, uniformly shuffled
pub fn random_seed_order<R: Rng>(ids: &[PlayerId], rng: &mut R) -> Vec<Slot> {
    let mut slots: Vec<Slot> = ids.iter().copied().map(Slot::Player).collect();
    if slots.len() % 2 == 1 {
        slots.push(Slot::Bye);
    }
    slots.shuffle(rng);
    slots
}

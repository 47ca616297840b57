//! Swiss pairing engine
//!
//! This module turns a roster and a match history into one round of
//! pairings: score-tier grouping, candidate ordering, rematch-avoiding
//! matching, and assembly into player-level pairs.

pub mod assembler;
pub mod engine;
pub mod grouping;
pub mod matcher;
pub mod seeding;

// Re-export commonly used entry points
pub use assembler::assemble_round;
pub use engine::{pair_scored_round, seed_round_one};
pub use grouping::order_by_score_tiers;
pub use matcher::find_rematch_free_order;
pub use seeding::random_seed_order;

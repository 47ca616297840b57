//! Swiss Arbiter - Swiss-system tournament pairing engine
//!
//! This crate assigns opponents for each round of a Swiss-system tournament.
//! Pairings avoid rematches and keep players on similar scores together,
//! with at most one bye per round when the roster is odd. Standings live
//! behind a storage trait with an in-memory implementation included.

pub mod config;
pub mod error;
pub mod pairing;
pub mod round;
pub mod standings;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{PairingError, Result};
pub use types::*;

// Re-export key components
pub use pairing::{pair_scored_round, seed_round_one};
pub use round::{RoundManager, RoundManagerStats};
pub use standings::{InMemoryStandings, StandingsStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

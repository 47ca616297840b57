//! Standings bookkeeping for the pairing engine
//!
//! The engine itself consumes rosters and histories handed to it; this
//! module is where those come from. It defines the storage interface plus an
//! in-memory implementation with registration, a match log, and on-demand
//! score computation.

pub mod storage;

// Re-export commonly used types
pub use storage::{InMemoryStandings, MatchRecord, StandingsStore};

//! Utility functions for the pairing engine

use chrono::{DateTime, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Number of Swiss rounds needed to single out a leader among `players`
/// entrants
///
/// Odd rosters lose one effective entrant to the bye each round, so the
/// count is taken over the even part of the field.
pub fn recommended_round_count(players: usize) -> u32 {
    let effective = if players % 2 == 1 {
        players - 1
    } else {
        players
    };
    if effective <= 1 {
        return 0;
    }
    effective.next_power_of_two().trailing_zeros()
}

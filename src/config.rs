//! Scoring configuration for standings bookkeeping

use crate::error::{PairingError, Result};
use serde::{Deserialize, Serialize};

/// Match points awarded per recorded outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points for winning a played match
    pub win_points: u32,
    /// Points each player receives for a tie
    pub tie_points: u32,
    /// Points for receiving the round's bye
    pub bye_points: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            win_points: 2,
            tie_points: 1,
            bye_points: 1,
        }
    }
}

/// Validate scoring values
pub fn validate_scoring(config: &ScoringConfig) -> Result<()> {
    if config.win_points == 0 {
        return Err(PairingError::Configuration {
            message: "Win points must be greater than 0".to_string(),
        }
        .into());
    }

    if config.tie_points > config.win_points {
        return Err(PairingError::Configuration {
            message: "Tie points cannot exceed win points".to_string(),
        }
        .into());
    }

    if config.bye_points > config.win_points {
        return Err(PairingError::Configuration {
            message: "Bye points cannot exceed win points".to_string(),
        }
        .into());
    }

    Ok(())
}

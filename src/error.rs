//! Error types for the pairing engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific pairing scenarios
#[derive(Debug, thiserror::Error)]
pub enum PairingError {
    #[error("Invalid pairing input: {reason}")]
    InvalidInput { reason: String },

    #[error("No rematch-free pairing exists for this round")]
    NoValidPairingFound,

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal standings error: {message}")]
    Internal { message: String },
}

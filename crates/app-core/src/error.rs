//! Error types for game logic

use storage::KvError;
use thiserror::Error;

use crate::contrast_hero::GamePhase;

/// Game error types
#[derive(Debug, Error)]
pub enum GameError {
    /// An answer was submitted before one was selected
    #[error("No answer selected")]
    NoAnswerSelected,

    /// The session was asked to do something its current phase forbids
    #[error("Invalid game phase: expected {expected:?}, found {actual:?}")]
    InvalidPhase {
        /// Phase the action requires
        expected: GamePhase,
        /// Phase the session is in
        actual: GamePhase,
    },

    /// A session was started without any questions
    #[error("Game has no questions")]
    NoQuestions,

    /// Score storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Configuration could not be parsed or is out of range
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;

//! Core game logic for Accessibility Build
//!
//! This crate provides the Contrast Hero game (question generation, grading
//! and session flow), game score tracking with progress statistics, and the
//! game configuration. It has no UI; the presentation layer drives a
//! [`contrast_hero::GameSession`] and renders what it returns.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod contrast_hero;
pub mod error;
pub mod scores;

pub use config::GameConfig;
pub use contrast_hero::{
    generate_questions, generate_questions_ordered, performance_message, AnswerOutcome,
    ContrastQuestion, GamePhase, GameSession,
};
pub use error::{GameError, Result};
pub use scores::{
    Achievement, AchievementKind, GameScore, ProgressSummary, ScoreBand, ScoreManager,
    CONTRAST_HERO,
};

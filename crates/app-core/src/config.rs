//! Game configuration
//!
//! The Contrast Hero grading threshold is configurable: by default questions
//! are graded against WCAG AA for normal text (4.5:1), but a deployment can
//! switch to large-text or AAA grading.

use contrast::{TextSize, WcagLevel};
use serde::{Deserialize, Serialize};
use storage::kv::scoped_key;

use crate::error::{GameError, Result};

/// Default number of questions per Contrast Hero round
pub const DEFAULT_TOTAL_QUESTIONS: usize = 10;

/// Default number of scores kept per game
pub const DEFAULT_MAX_SCORES_PER_GAME: usize = 10;

/// Default scope the score list is stored under (`scores:contrast-hero`)
pub const DEFAULT_SCORE_SCOPE: [&str; 2] = ["scores", "contrast-hero"];

/// Configuration for a Contrast Hero deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Questions per round
    pub total_questions: usize,
    /// WCAG level questions are graded against
    pub grading_level: WcagLevel,
    /// Text size questions are graded for
    pub text_size: TextSize,
    /// Key scopes the score list is stored under
    pub score_scope: Vec<String>,
    /// Scores retained per game
    pub max_scores_per_game: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_questions: DEFAULT_TOTAL_QUESTIONS,
            grading_level: WcagLevel::Aa,
            text_size: TextSize::Normal,
            score_scope: DEFAULT_SCORE_SCOPE.iter().map(|s| s.to_string()).collect(),
            max_scores_per_game: DEFAULT_MAX_SCORES_PER_GAME,
        }
    }
}

impl GameConfig {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable
    pub fn validate(&self) -> Result<()> {
        if self.total_questions == 0 {
            return Err(GameError::Config("totalQuestions must be at least 1".to_string()));
        }
        if self.max_scores_per_game == 0 {
            return Err(GameError::Config("maxScoresPerGame must be at least 1".to_string()));
        }
        scoped_key(&self.score_scope_refs())
            .map_err(|e| GameError::Config(format!("scoreScope: {}", e)))?;
        Ok(())
    }

    /// Score scope as borrowed segments
    pub fn score_scope_refs(&self) -> Vec<&str> {
        self.score_scope.iter().map(String::as_str).collect()
    }

    /// Minimum contrast ratio a question must reach to count as passing
    pub fn grading_threshold(&self) -> f64 {
        self.grading_level.threshold(self.text_size)
    }

    /// Set the number of questions per round
    pub fn total_questions(mut self, count: usize) -> Self {
        self.total_questions = count;
        self
    }

    /// Set the grading level and text size
    pub fn grading(mut self, level: WcagLevel, text_size: TextSize) -> Self {
        self.grading_level = level;
        self.text_size = text_size;
        self
    }

    /// Set the score storage scope
    pub fn score_scope(mut self, scopes: &[&str]) -> Self {
        self.score_scope = scopes.iter().map(|s| s.to_string()).collect();
        self
    }
}

//! Contrast Hero: a quiz on whether color pairs meet WCAG contrast
//!
//! Each question shows sample text in one color on a background of another
//! and asks whether the pair passes. The correct answer is not stored in the
//! bank; it is computed from the pair's contrast ratio against the grading
//! threshold of the active [`GameConfig`].
//!
//! # Flow
//!
//! ```text
//! Answering --select_answer/submit--> ShowingResult --next_question--> Answering
//!                                          |
//!                                          +--(last question)--> Finished
//! ```

use contrast::{contrast_ratio, palette, Color};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::scores::{GameScore, CONTRAST_HERO};

struct ColorPair {
    foreground: Color,
    background: Color,
    explanation: &'static str,
}

const COLOR_PAIRS: [ColorPair; 10] = [
    // Passing combinations
    ColorPair {
        foreground: palette::BLACK,
        background: palette::WHITE,
        explanation: "This high contrast combination easily passes WCAG AA with a ratio above 15:1.",
    },
    ColorPair {
        foreground: palette::WHITE,
        background: palette::BLACK,
        explanation: "White text on black background provides excellent contrast for accessibility.",
    },
    ColorPair {
        foreground: palette::BLUE,
        background: palette::WHITE,
        explanation: "Blue text on white background typically provides good contrast.",
    },
    ColorPair {
        foreground: palette::WHITE,
        background: palette::SYSTEM_BLUE,
        explanation: "White text on blue background usually meets WCAG AA requirements.",
    },
    // Failing combinations
    ColorPair {
        foreground: palette::SYSTEM_GRAY,
        background: palette::WHITE,
        explanation: "Light gray on white has poor contrast and fails WCAG AA requirements.",
    },
    ColorPair {
        foreground: palette::YELLOW,
        background: palette::WHITE,
        explanation: "Yellow text on white background has very poor contrast and is hard to read.",
    },
    ColorPair {
        foreground: palette::SYSTEM_GRAY2,
        background: palette::SYSTEM_GRAY6,
        explanation: "Similar gray tones provide insufficient contrast.",
    },
    ColorPair {
        foreground: palette::RED,
        background: palette::SYSTEM_PINK,
        explanation: "Red text on pink background lacks adequate contrast.",
    },
    // Borderline cases
    ColorPair {
        foreground: palette::SYSTEM_ORANGE,
        background: palette::WHITE,
        explanation: "Orange text on white may or may not pass depending on the specific shade.",
    },
    ColorPair {
        foreground: palette::PURPLE,
        background: palette::WHITE,
        explanation: "Purple text contrast depends on the specific shade and lightness.",
    },
];

/// Sample strings rendered in the question's colors
pub const SAMPLE_TEXTS: [&str; 5] = ["Sample Text", "Read Me", "Important", "Click Here", "Menu Item"];

/// Number of distinct color pairs in the question bank
pub const QUESTION_BANK_SIZE: usize = COLOR_PAIRS.len();

/// One Contrast Hero question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastQuestion {
    /// Text color
    pub foreground: Color,
    /// Background color
    pub background: Color,
    /// Text shown in the sample
    pub sample_text: String,
    /// Explanation revealed after answering
    pub explanation: String,
    /// Contrast ratio of the pair
    pub contrast_ratio: f64,
    /// Whether the pair meets the grading threshold
    pub correct_answer: bool,
}

impl ContrastQuestion {
    fn from_pair(pair: &ColorPair, sample_text: &str, threshold: f64) -> Self {
        let ratio = contrast_ratio(&pair.foreground, &pair.background);
        Self {
            foreground: pair.foreground,
            background: pair.background,
            sample_text: sample_text.to_string(),
            explanation: pair.explanation.to_string(),
            contrast_ratio: ratio,
            correct_answer: ratio >= threshold,
        }
    }

    /// Whether `answer` ("passes?") is right for this question
    pub fn is_correct(&self, answer: bool) -> bool {
        answer == self.correct_answer
    }

    /// Ratio formatted to one decimal, e.g. `"4.0:1"`
    pub fn ratio_label(&self) -> String {
        format!("{:.1}:1", self.contrast_ratio)
    }
}

/// Build `count` questions in bank order, cycling through pairs and texts
pub fn generate_questions_ordered(count: usize, threshold: f64) -> Vec<ContrastQuestion> {
    (0..count)
        .map(|i| {
            let pair = &COLOR_PAIRS[i % COLOR_PAIRS.len()];
            let text = SAMPLE_TEXTS[i % SAMPLE_TEXTS.len()];
            ContrastQuestion::from_pair(pair, text, threshold)
        })
        .collect()
}

/// Build `count` questions and shuffle them
pub fn generate_questions<R: Rng + ?Sized>(
    count: usize,
    threshold: f64,
    rng: &mut R,
) -> Vec<ContrastQuestion> {
    let mut questions = generate_questions_ordered(count, threshold);
    questions.shuffle(rng);
    questions
}

/// Feedback line for a final percentage
pub fn performance_message(percentage: u32) -> &'static str {
    match percentage {
        90..=u32::MAX => "Excellent! You're a contrast expert!",
        70..=89 => "Great job! You have a solid understanding of contrast.",
        50..=69 => "Good effort! Keep practicing to improve.",
        _ => "Keep learning! Contrast is tricky but important.",
    }
}

/// Where a session is in its question loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    /// Waiting for an answer to the current question
    Answering,
    /// Showing whether the submitted answer was right
    ShowingResult,
    /// All questions answered
    Finished,
}

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    /// Whether the player was right
    pub correct: bool,
    /// Whether the pair actually passes
    pub correct_answer: bool,
    /// Contrast ratio of the pair
    pub contrast_ratio: f64,
}

/// A single round of Contrast Hero
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    questions: Vec<ContrastQuestion>,
    current: usize,
    score: u32,
    selected: Option<bool>,
    phase: GamePhase,
}

impl GameSession {
    /// Start a round with freshly generated, shuffled questions
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let questions =
            generate_questions(config.total_questions, config.grading_threshold(), rng);
        Self::with_questions(config, questions)
    }

    /// Start a round over a fixed list of questions
    pub fn with_questions(config: &GameConfig, questions: Vec<ContrastQuestion>) -> Result<Self> {
        config.validate()?;
        if questions.is_empty() {
            return Err(GameError::NoQuestions);
        }
        tracing::debug!("Starting {} with {} questions", CONTRAST_HERO, questions.len());

        Ok(Self {
            config: config.clone(),
            questions,
            current: 0,
            score: 0,
            selected: None,
            phase: GamePhase::Answering,
        })
    }

    /// Regenerate questions and start over
    ///
    /// The new round has as many questions as the current one.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions =
            generate_questions(self.questions.len(), self.config.grading_threshold(), rng);
        self.current = 0;
        self.score = 0;
        self.selected = None;
        self.phase = GamePhase::Answering;
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Correct answers so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Questions in this round
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// One-based number of the current question
    pub fn question_number(&self) -> usize {
        (self.current + 1).min(self.questions.len())
    }

    /// The question being played, or `None` once finished
    pub fn current_question(&self) -> Option<&ContrastQuestion> {
        match self.phase {
            GamePhase::Finished => None,
            _ => self.questions.get(self.current),
        }
    }

    /// The pending answer, if one has been selected
    pub fn selected_answer(&self) -> Option<bool> {
        self.selected
    }

    /// Percentage of questions answered correctly, truncated
    pub fn percentage(&self) -> u32 {
        (self.score as usize * 100 / self.questions.len()) as u32
    }

    /// Choose an answer for the current question; may be changed until submitted
    pub fn select_answer(&mut self, passes: bool) -> Result<()> {
        self.expect_phase(GamePhase::Answering)?;
        self.selected = Some(passes);
        Ok(())
    }

    /// Grade the selected answer
    pub fn submit(&mut self) -> Result<AnswerOutcome> {
        self.expect_phase(GamePhase::Answering)?;
        let answer = self.selected.ok_or(GameError::NoAnswerSelected)?;
        let question = &self.questions[self.current];

        let correct = question.is_correct(answer);
        if correct {
            self.score += 1;
        }
        self.phase = GamePhase::ShowingResult;
        tracing::debug!(
            "Question {} answered {}: ratio {:.2}",
            self.current + 1,
            if correct { "correctly" } else { "incorrectly" },
            question.contrast_ratio
        );

        Ok(AnswerOutcome {
            correct,
            correct_answer: question.correct_answer,
            contrast_ratio: question.contrast_ratio,
        })
    }

    /// Move past the shown result
    ///
    /// Returns the final [`GameScore`] when the last question has been
    /// played; the caller decides whether to save it.
    pub fn next_question(&mut self) -> Result<Option<GameScore>> {
        self.expect_phase(GamePhase::ShowingResult)?;
        self.current += 1;
        self.selected = None;

        if self.current >= self.questions.len() {
            self.phase = GamePhase::Finished;
            let score = self.final_score();
            tracing::info!("{} finished: {}", CONTRAST_HERO, score.formatted_score());
            return Ok(Some(score));
        }

        self.phase = GamePhase::Answering;
        Ok(None)
    }

    /// Score record for the round as it stands
    pub fn final_score(&self) -> GameScore {
        GameScore::new(CONTRAST_HERO, self.score, self.questions.len() as u32)
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<()> {
        if self.phase != expected {
            return Err(GameError::InvalidPhase { expected, actual: self.phase });
        }
        Ok(())
    }
}

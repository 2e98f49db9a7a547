//! Game score tracking
//!
//! Scores are kept as a single JSON list in the key-value store (one keyed
//! blob). The [`ScoreManager`] loads that list once, keeps it in memory and
//! writes it back after every change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::kv::scoped_key;
use storage::{KvError, KvStore};
use uuid::Uuid;

use crate::config::{GameConfig, DEFAULT_MAX_SCORES_PER_GAME};
use crate::error::Result;

/// Display name of the Contrast Hero game
pub const CONTRAST_HERO: &str = "Contrast Hero";

/// Number of scores returned by [`ScoreManager::recent_scores`] by default
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// A finished game's result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    /// Unique score identifier
    pub id: Uuid,
    /// Name of the game played
    pub game_name: String,
    /// Correct answers
    pub score: u32,
    /// Questions asked
    pub total_questions: u32,
    /// When the game finished
    pub timestamp: DateTime<Utc>,
}

impl GameScore {
    /// Record a score finishing now
    pub fn new(game_name: impl Into<String>, score: u32, total_questions: u32) -> Self {
        Self::with_timestamp(game_name, score, total_questions, Utc::now())
    }

    /// Record a score with an explicit finish time
    pub fn with_timestamp(
        game_name: impl Into<String>,
        score: u32,
        total_questions: u32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            game_name: game_name.into(),
            score,
            total_questions,
            timestamp,
        }
    }

    /// Whole-number percentage of correct answers, truncated
    pub fn percentage(&self) -> u32 {
        percentage_of(self.score as u64, self.total_questions as u64)
    }

    /// Score formatted as `"8/10 (80%)"`
    pub fn formatted_score(&self) -> String {
        format!("{}/{} ({}%)", self.score, self.total_questions, self.percentage())
    }

    /// Display band for this score
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage())
    }
}

fn percentage_of(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part * 100 / whole) as u32
}

/// Coarse rating of a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    /// 90% and above
    Excellent,
    /// 70% to 89%
    Good,
    /// Below 70%
    NeedsWork,
}

impl ScoreBand {
    /// Band for a percentage
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90..=u32::MAX => ScoreBand::Excellent,
            70..=89 => ScoreBand::Good,
            _ => ScoreBand::NeedsWork,
        }
    }
}

/// Aggregate statistics across all recorded games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Number of recorded games
    pub games_played: usize,
    /// Highest percentage of any game, if one was played
    pub best_percentage: Option<u32>,
    /// Correct answers over questions asked across all games, truncated
    pub accuracy: u32,
}

/// Achievements shown on the progress screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AchievementKind {
    /// Complete a game
    FirstSteps,
    /// Score 80% or higher
    ContrastExpert,
    /// Score 100%
    PerfectScore,
    /// Play five games
    DedicatedLearner,
    /// Master all concepts (not yet attainable)
    AccessibilityChampion,
}

impl AchievementKind {
    /// All achievements in display order
    pub const ALL: [AchievementKind; 5] = [
        AchievementKind::FirstSteps,
        AchievementKind::ContrastExpert,
        AchievementKind::PerfectScore,
        AchievementKind::DedicatedLearner,
        AchievementKind::AccessibilityChampion,
    ];

    /// Title
    pub fn title(&self) -> &'static str {
        match self {
            AchievementKind::FirstSteps => "First Steps",
            AchievementKind::ContrastExpert => "Contrast Expert",
            AchievementKind::PerfectScore => "Perfect Score",
            AchievementKind::DedicatedLearner => "Dedicated Learner",
            AchievementKind::AccessibilityChampion => "Accessibility Champion",
        }
    }

    /// Description
    pub fn description(&self) -> &'static str {
        match self {
            AchievementKind::FirstSteps => "Complete your first game",
            AchievementKind::ContrastExpert => "Score 80% or higher",
            AchievementKind::PerfectScore => "Get 100% on any game",
            AchievementKind::DedicatedLearner => "Play 5 games",
            AchievementKind::AccessibilityChampion => "Master all concepts",
        }
    }

    fn is_unlocked_by(&self, scores: &[GameScore]) -> bool {
        match self {
            AchievementKind::FirstSteps => !scores.is_empty(),
            AchievementKind::ContrastExpert => scores.iter().any(|s| s.percentage() >= 80),
            AchievementKind::PerfectScore => scores.iter().any(|s| s.percentage() == 100),
            AchievementKind::DedicatedLearner => scores.len() >= 5,
            AchievementKind::AccessibilityChampion => false,
        }
    }
}

/// An achievement with its current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Which achievement
    pub kind: AchievementKind,
    /// Whether it has been earned
    pub unlocked: bool,
}

/// Loads, updates and persists game scores
pub struct ScoreManager {
    kv: Arc<KvStore>,
    key: String,
    max_per_game: usize,
    scores: Vec<GameScore>,
}

impl ScoreManager {
    /// Open the score list stored under the scoped key built from `scopes`
    ///
    /// A missing list starts empty. A list that no longer decodes is
    /// discarded with a warning rather than failing the caller.
    pub fn open(kv: Arc<KvStore>, scopes: &[&str]) -> Result<Self> {
        let key = scoped_key(scopes)?;
        let scores = match kv.get::<Vec<GameScore>>(&key) {
            Ok(Some(scores)) => scores,
            Ok(None) => Vec::new(),
            Err(KvError::Serialization(e)) => {
                tracing::warn!("Discarding unreadable score list at {}: {}", key, e);
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!("Loaded {} scores from {}", scores.len(), key);

        Ok(Self { kv, key, max_per_game: DEFAULT_MAX_SCORES_PER_GAME, scores })
    }

    /// Open using the key and retention limit from a [`GameConfig`]
    pub fn with_config(kv: Arc<KvStore>, config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let mut manager = Self::open(kv, &config.score_scope_refs())?;
        manager.max_per_game = config.max_scores_per_game;
        Ok(manager)
    }

    /// Record a score, keeping only the best scores for its game
    pub fn save_score(&mut self, score: GameScore) -> Result<()> {
        tracing::info!("Saving {} score {}", score.game_name, score.formatted_score());

        let game_name = score.game_name.clone();
        let (mut same_game, others): (Vec<_>, Vec<_>) = self
            .scores
            .iter()
            .cloned()
            .chain(std::iter::once(score))
            .partition(|s| s.game_name == game_name);
        same_game.sort_by(|a, b| b.score.cmp(&a.score));
        same_game.truncate(self.max_per_game);
        same_game.extend(others);

        self.kv.set(&self.key, &same_game)?;
        self.scores = same_game;
        Ok(())
    }

    /// Score with the most correct answers for a game
    pub fn high_score(&self, game_name: &str) -> Option<&GameScore> {
        self.scores.iter().filter(|s| s.game_name == game_name).max_by_key(|s| s.score)
    }

    /// Score with the highest percentage for a game
    pub fn best_score(&self, game_name: &str) -> Option<&GameScore> {
        self.scores
            .iter()
            .filter(|s| s.game_name == game_name)
            .max_by_key(|s| s.percentage())
    }

    /// All scores for a game, most correct answers first
    pub fn scores_for(&self, game_name: &str) -> Vec<&GameScore> {
        let mut scores: Vec<_> =
            self.scores.iter().filter(|s| s.game_name == game_name).collect();
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores
    }

    /// Most recent scores across all games, newest first
    pub fn recent_scores(&self, limit: usize) -> Vec<&GameScore> {
        let mut scores: Vec<_> = self.scores.iter().collect();
        scores.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        scores.truncate(limit);
        scores
    }

    /// Every recorded score
    pub fn all(&self) -> &[GameScore] {
        &self.scores
    }

    /// Aggregate statistics
    pub fn summary(&self) -> ProgressSummary {
        let correct: u64 = self.scores.iter().map(|s| s.score as u64).sum();
        let asked: u64 = self.scores.iter().map(|s| s.total_questions as u64).sum();
        ProgressSummary {
            games_played: self.scores.len(),
            best_percentage: self.scores.iter().map(GameScore::percentage).max(),
            accuracy: percentage_of(correct, asked),
        }
    }

    /// Every achievement with its unlocked state
    pub fn achievements(&self) -> Vec<Achievement> {
        AchievementKind::ALL
            .iter()
            .map(|kind| Achievement { kind: *kind, unlocked: kind.is_unlocked_by(&self.scores) })
            .collect()
    }

    /// Forget every score and drop the stored list
    pub fn clear(&mut self) -> Result<()> {
        self.kv.remove(&self.key)?;
        self.scores.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn manager() -> ScoreManager {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        ScoreManager::open(kv, &["scores", "test"]).unwrap()
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, minute, 0).unwrap()
    }

    // ==========================================================================
    // GameScore
    // ==========================================================================

    #[test]
    fn test_percentage_truncates() {
        assert_eq!(GameScore::new(CONTRAST_HERO, 8, 10).percentage(), 80);
        assert_eq!(GameScore::new(CONTRAST_HERO, 2, 3).percentage(), 66);
        assert_eq!(GameScore::new(CONTRAST_HERO, 10, 10).percentage(), 100);
    }

    #[test]
    fn test_percentage_with_no_questions() {
        assert_eq!(GameScore::new(CONTRAST_HERO, 0, 0).percentage(), 0);
    }

    #[test]
    fn test_formatted_score() {
        assert_eq!(GameScore::new(CONTRAST_HERO, 7, 10).formatted_score(), "7/10 (70%)");
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_percentage(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_percentage(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_percentage(89), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percentage(70), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percentage(69), ScoreBand::NeedsWork);
        assert_eq!(GameScore::new(CONTRAST_HERO, 3, 10).band(), ScoreBand::NeedsWork);
    }

    #[test]
    fn test_score_json_shape() {
        let score = GameScore::with_timestamp(CONTRAST_HERO, 8, 10, at(0));
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["gameName"], "Contrast Hero");
        assert_eq!(json["totalQuestions"], 10);
        assert!(json.get("id").is_some());
        assert!(json.get("timestamp").is_some());
    }

    // ==========================================================================
    // ScoreManager
    // ==========================================================================

    #[test]
    fn test_open_empty() {
        let manager = manager();
        assert!(manager.all().is_empty());
        assert!(manager.high_score(CONTRAST_HERO).is_none());
    }

    #[test]
    fn test_open_discards_unreadable_blob() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        kv.set("scores:test", &"garbage").unwrap();

        let manager = ScoreManager::open(kv, &["scores", "test"]).unwrap();
        assert!(manager.all().is_empty());
    }

    #[test]
    fn test_save_keeps_top_ten_per_game() {
        let mut manager = manager();
        for score in 0..12 {
            manager.save_score(GameScore::new(CONTRAST_HERO, score, 12)).unwrap();
        }
        manager.save_score(GameScore::new("Focus Flow", 1, 5)).unwrap();

        let hero = manager.scores_for(CONTRAST_HERO);
        assert_eq!(hero.len(), 10);
        assert_eq!(hero[0].score, 11);
        assert_eq!(hero[9].score, 2);
        assert_eq!(manager.scores_for("Focus Flow").len(), 1);
        assert_eq!(manager.all().len(), 11);
    }

    #[test]
    fn test_save_for_one_game_keeps_other_games() {
        let mut manager = manager();
        manager.save_score(GameScore::new("Focus Flow", 3, 5)).unwrap();
        for _ in 0..11 {
            manager.save_score(GameScore::new(CONTRAST_HERO, 5, 10)).unwrap();
        }
        assert_eq!(manager.scores_for("Focus Flow").len(), 1);
        assert_eq!(manager.scores_for(CONTRAST_HERO).len(), 10);
    }

    #[test]
    fn test_high_and_best_score() {
        let mut manager = manager();
        manager.save_score(GameScore::new(CONTRAST_HERO, 9, 20)).unwrap();
        manager.save_score(GameScore::new(CONTRAST_HERO, 8, 10)).unwrap();

        // Most correct answers vs highest percentage
        assert_eq!(manager.high_score(CONTRAST_HERO).unwrap().score, 9);
        assert_eq!(manager.best_score(CONTRAST_HERO).unwrap().percentage(), 80);
        assert!(manager.high_score("Focus Flow").is_none());
    }

    #[test]
    fn test_lookups_outlive_game_name() {
        let mut manager = manager();
        manager.save_score(GameScore::new(CONTRAST_HERO, 7, 10)).unwrap();

        let (high, best, listed) = {
            let name = CONTRAST_HERO.to_string();
            (manager.high_score(&name), manager.best_score(&name), manager.scores_for(&name))
        };
        assert_eq!(high.unwrap().score, 7);
        assert_eq!(best.unwrap().percentage(), 70);
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn test_recent_scores_newest_first() {
        let mut manager = manager();
        manager.save_score(GameScore::with_timestamp(CONTRAST_HERO, 9, 10, at(1))).unwrap();
        manager.save_score(GameScore::with_timestamp(CONTRAST_HERO, 2, 10, at(3))).unwrap();
        manager.save_score(GameScore::with_timestamp(CONTRAST_HERO, 5, 10, at(2))).unwrap();

        let recent = manager.recent_scores(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].score, 2);
        assert_eq!(recent[1].score, 5);
        assert_eq!(manager.recent_scores(DEFAULT_RECENT_LIMIT).len(), 3);
    }

    #[test]
    fn test_summary() {
        let mut manager = manager();
        assert_eq!(
            manager.summary(),
            ProgressSummary { games_played: 0, best_percentage: None, accuracy: 0 }
        );

        manager.save_score(GameScore::new(CONTRAST_HERO, 8, 10)).unwrap();
        manager.save_score(GameScore::new(CONTRAST_HERO, 1, 5)).unwrap();

        let summary = manager.summary();
        assert_eq!(summary.games_played, 2);
        assert_eq!(summary.best_percentage, Some(80));
        // 9 of 15
        assert_eq!(summary.accuracy, 60);
    }

    #[test]
    fn test_achievements() {
        let mut manager = manager();
        assert!(manager.achievements().iter().all(|a| !a.unlocked));

        manager.save_score(GameScore::new(CONTRAST_HERO, 8, 10)).unwrap();
        let unlocked: Vec<_> = manager
            .achievements()
            .into_iter()
            .filter(|a| a.unlocked)
            .map(|a| a.kind)
            .collect();
        assert_eq!(unlocked, vec![AchievementKind::FirstSteps, AchievementKind::ContrastExpert]);

        for _ in 0..4 {
            manager.save_score(GameScore::new(CONTRAST_HERO, 10, 10)).unwrap();
        }
        let achievements = manager.achievements();
        assert!(achievements.iter().any(|a| a.kind == AchievementKind::PerfectScore && a.unlocked));
        assert!(achievements
            .iter()
            .any(|a| a.kind == AchievementKind::DedicatedLearner && a.unlocked));
        assert!(achievements
            .iter()
            .any(|a| a.kind == AchievementKind::AccessibilityChampion && !a.unlocked));
    }

    #[test]
    fn test_achievement_text() {
        assert_eq!(AchievementKind::ContrastExpert.title(), "Contrast Expert");
        assert_eq!(AchievementKind::DedicatedLearner.description(), "Play 5 games");
    }

    #[test]
    fn test_with_config_limits_retention() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        let config = GameConfig { max_scores_per_game: 2, ..GameConfig::default() };
        let mut manager = ScoreManager::with_config(kv.clone(), &config).unwrap();

        for score in [4, 9, 6] {
            manager.save_score(GameScore::new(CONTRAST_HERO, score, 10)).unwrap();
        }
        let kept: Vec<u32> = manager.scores_for(CONTRAST_HERO).iter().map(|s| s.score).collect();
        assert_eq!(kept, vec![9, 6]);

        let stored: Vec<GameScore> = kv.get("scores:contrast-hero").unwrap().unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_clear() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        let mut manager = ScoreManager::open(kv.clone(), &["scores", "test"]).unwrap();
        manager.save_score(GameScore::new(CONTRAST_HERO, 8, 10)).unwrap();

        manager.clear().unwrap();
        assert!(manager.all().is_empty());
        let stored: Option<Vec<GameScore>> = kv.get("scores:test").unwrap();
        assert!(stored.is_none());
    }

    /// A manager whose writes are rejected by the store
    fn unwritable_manager(scores: Vec<GameScore>) -> ScoreManager {
        ScoreManager {
            kv: Arc::new(KvStore::in_memory().unwrap()),
            key: String::new(),
            max_per_game: DEFAULT_MAX_SCORES_PER_GAME,
            scores,
        }
    }

    #[test]
    fn test_failed_save_leaves_scores_unchanged() {
        let existing = GameScore::new(CONTRAST_HERO, 4, 10);
        let mut manager = unwritable_manager(vec![existing.clone()]);

        let result = manager.save_score(GameScore::new(CONTRAST_HERO, 9, 10));
        assert!(matches!(result, Err(GameError::Storage(KvError::InvalidKey(_)))));
        assert_eq!(manager.all(), &[existing][..]);
    }

    #[test]
    fn test_failed_clear_leaves_scores_unchanged() {
        let existing = GameScore::new(CONTRAST_HERO, 4, 10);
        let mut manager = unwritable_manager(vec![existing.clone()]);

        assert!(manager.clear().is_err());
        assert_eq!(manager.all().len(), 1);
    }

    #[test]
    fn test_open_rejects_bad_scope() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        assert!(matches!(
            ScoreManager::open(kv, &["scores", ""]),
            Err(GameError::Storage(KvError::InvalidKey(_)))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_retention_keeps_best_ten(points in proptest::collection::vec(0u32..=10, 0..25)) {
            let mut manager = manager();
            for score in &points {
                manager.save_score(GameScore::new(CONTRAST_HERO, *score, 10)).unwrap();
            }

            let mut expected = points.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            expected.truncate(DEFAULT_MAX_SCORES_PER_GAME);

            let kept: Vec<u32> = manager.scores_for(CONTRAST_HERO).iter().map(|s| s.score).collect();
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn prop_percentage_bounded(total in 1u32..1000, ratio in 0.0..=1.0f64) {
            let score = (total as f64 * ratio) as u32;
            let percentage = GameScore::new(CONTRAST_HERO, score, total).percentage();
            prop_assert!(percentage <= 100);
        }
    }
}

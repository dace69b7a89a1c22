//! Core types for the kanji-reading match game.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;

/// Game mode: which word pool a round prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Draw preferentially from words not yet answered correctly.
    Newbie,
    /// Draw preferentially from words already answered correctly.
    Review,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::Newbie
    }
}

impl GameMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newbie => "newbie",
            Self::Review => "review",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "newbie" => Some(Self::Newbie),
            "review" => Some(Self::Review),
            _ => None,
        }
    }
}

/// Catalog word. Immutable once loaded; owned by the catalog collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub kanji: String,
    pub ruby: String,
    /// Continuous 0-10 level assigned by the catalog.
    pub level: f64,
    #[serde(default)]
    pub jp_meanings: Vec<String>,
    #[serde(default)]
    pub zh_meanings: Vec<String>,
    #[serde(default)]
    pub example_sentence: String,
    #[serde(default)]
    pub example_translation: String,
}

/// Per-word learning record. A word counts as learned once
/// `correct_count >= 1`.
///
/// Kanji and reading are denormalized so record listings don't need a
/// catalog join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRecord {
    pub word_id: String,
    pub kanji: String,
    pub ruby: String,
    pub correct_count: u32,
    pub first_correct_at: DateTime<Utc>,
    pub last_correct_at: DateTime<Utc>,
}

/// All learning records, keyed by word id.
pub type LearningRecordMap = HashMap<String, LearningRecord>;

/// Ephemeral per-round card. Two columns are built per round, one showing
/// kanji and one showing readings; `word_id` is a plain back-reference into
/// the round's word list, never a shared pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameCard {
    pub id: String,
    pub word_id: String,
    pub text: String,
    pub removed: bool,
}

/// Configuration of the most recent round, kept for replay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub mode: GameMode,
    pub count: usize,
    pub difficulty: Difficulty,
}

/// Summary of a completed round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub requested_count: usize,
    pub correct_pairs: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Wall-clock seconds, floored, never negative.
    pub elapsed_seconds: u64,
    /// Words whose first-ever correct match happened in this round.
    pub newly_learned_words: Vec<Word>,
}

/// Schema version written into every backup export.
pub const BACKUP_SCHEMA_VERSION: &str = "1.0.0";

/// Full learning-data export, suitable for download or external backup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningDataBackup {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub game_config: RoundConfig,
    pub summary: BackupSummary,
    pub records: LearningRecordMap,
}

/// Headline counts included in a backup export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSummary {
    pub learned_word_count: usize,
    pub total_word_count: usize,
}

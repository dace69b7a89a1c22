//! Core engine for the kanji-reading match game, shared by every shell
//! that drives it.
//!
//! Provides:
//! - Round word selection with learned/unlearned pools and fallbacks
//! - The round/session state machine (card selection, match handling,
//!   record updates, round results)
//! - Difficulty classification and per-band progress aggregation
//! - Per-word statistics with sorting and filtering
//! - Collaborator traits for the word catalog and the record store

pub mod board;
pub mod difficulty;
pub mod error;
pub mod matching;
pub mod progress;
pub mod random;
pub mod records;
pub mod repository;
pub mod selection;
pub mod session;
pub mod statistics;
pub mod types;

pub use board::{build_board_cards, BoardCards};
pub use difficulty::Difficulty;
pub use error::{BoxError, GameError, Result};
pub use matching::is_correct_match;
pub use progress::{build_difficulty_progress, estimate_learner_level, DifficultyProgress};
pub use records::{is_learned, register_correct_match, MatchRegistration};
pub use repository::{MemoryRecordStore, RecordStore, StaticCatalog, WordCatalog};
pub use selection::{select_round_words, RoundSelection};
pub use session::{GameSession, MatchOutcome, RoundStatus};
pub use statistics::{build_statistics, StatisticsFilter, StatisticsSort, WordStatistics};
pub use types::{
    BackupSummary, GameCard, GameMode, LearningDataBackup, LearningRecord, LearningRecordMap,
    RoundConfig, RoundResult, Word, BACKUP_SCHEMA_VERSION,
};

//! API request/response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from kanji-match-core
pub use kanji_match_core::{
    Difficulty, DifficultyProgress, GameCard, GameMode, GameSession, LearningDataBackup,
    RoundResult, RoundStatus, StatisticsFilter, StatisticsSort, WordStatistics,
};

/// Body of `POST /api/round/start`.
///
/// Count and difficulty arrive as free-form numbers and are absorbed into
/// valid values rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct StartRoundRequest {
    pub mode: GameMode,
    #[serde(default = "default_count")]
    pub count: f64,
    #[serde(default = "default_difficulty")]
    pub difficulty: f64,
}

fn default_count() -> f64 {
    10.0
}

fn default_difficulty() -> f64 {
    1.0
}

impl StartRoundRequest {
    /// Requested count floored to an integer, never below 1.
    pub fn resolved_count(&self) -> usize {
        if self.count.is_finite() {
            self.count.floor().max(1.0) as usize
        } else {
            1
        }
    }

    pub fn resolved_difficulty(&self) -> Difficulty {
        Difficulty::normalize(self.difficulty)
    }
}

/// Body of the card-selection endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectCardRequest {
    pub card_id: String,
}

/// Query parameters of `GET /api/statistics`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatisticsQuery {
    #[serde(default)]
    pub sort: StatisticsSort,
    #[serde(default)]
    pub filter: StatisticsFilter,
}

/// Full view of the session for the client, returned by every round
/// endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RoundSnapshot {
    pub status: RoundStatus,
    pub round_id: Uuid,
    pub mode: GameMode,
    pub requested_count: usize,
    pub difficulty: Difficulty,
    pub notice: Option<String>,
    pub kanji_cards: Vec<GameCard>,
    pub ruby_cards: Vec<GameCard>,
    pub selected_kanji_card_id: Option<String>,
    pub wrong_kanji_card_ids: Vec<String>,
    pub wrong_ruby_card_ids: Vec<String>,
    pub total_pairs: usize,
    pub remaining_pairs: usize,
    pub result: Option<RoundResult>,
}

impl RoundSnapshot {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            status: session.status(),
            round_id: session.round_id(),
            mode: session.mode(),
            requested_count: session.requested_count(),
            difficulty: session.difficulty(),
            notice: session.round_notice().map(str::to_string),
            kanji_cards: session.kanji_cards().to_vec(),
            ruby_cards: session.ruby_cards().to_vec(),
            selected_kanji_card_id: session.selected_kanji_card_id().map(str::to_string),
            wrong_kanji_card_ids: session.wrong_kanji_card_ids().to_vec(),
            wrong_ruby_card_ids: session.wrong_ruby_card_ids().to_vec(),
            total_pairs: session.total_pairs(),
            remaining_pairs: session.remaining_pairs(),
            result: session.round_result().cloned(),
        }
    }
}

/// Response of `GET /api/progress`.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub items: Vec<DifficultyProgress>,
    pub estimated_level: Difficulty,
    pub learned_word_count: usize,
    pub total_word_count: usize,
}

//! Progress and statistics endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use kanji_match_core::estimate_learner_level;

use crate::error::Result;
use crate::models::{ProgressResponse, StatisticsQuery, WordStatistics};
use crate::AppState;

/// GET /api/progress
pub async fn progress(State(state): State<AppState>) -> Result<Json<ProgressResponse>> {
    let mut session = state.session.lock().expect("session lock");
    let items = session.difficulty_progress()?;
    let estimated_level = estimate_learner_level(&items);

    Ok(Json(ProgressResponse {
        estimated_level,
        learned_word_count: session.learned_word_count(),
        total_word_count: session.total_word_count(),
        items,
    }))
}

/// GET /api/statistics
pub async fn statistics(
    State(state): State<AppState>,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<Vec<WordStatistics>>> {
    let mut session = state.session.lock().expect("session lock");
    let items = session.statistics(query.sort, query.filter)?;

    Ok(Json(items))
}

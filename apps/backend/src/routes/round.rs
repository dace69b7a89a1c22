//! Round lifecycle endpoints

use std::time::Duration;

use axum::{extract::State, Json};

use kanji_match_core::MatchOutcome;

use crate::error::{ApiError, Result};
use crate::models::{RoundSnapshot, SelectCardRequest, StartRoundRequest};
use crate::AppState;

/// How long the wrong-pair highlight stays up before the deferred clear.
const WRONG_FEEDBACK_DELAY: Duration = Duration::from_millis(320);

/// GET /api/round
pub async fn snapshot(State(state): State<AppState>) -> Result<Json<RoundSnapshot>> {
    let session = state.session.lock().expect("session lock");
    Ok(Json(RoundSnapshot::from_session(&session)))
}

/// POST /api/round/start
pub async fn start(
    State(state): State<AppState>,
    Json(payload): Json<StartRoundRequest>,
) -> Result<Json<RoundSnapshot>> {
    let mut session = state.session.lock().expect("session lock");
    session.start_round(
        payload.mode,
        payload.resolved_count(),
        payload.resolved_difficulty(),
    )?;

    Ok(Json(RoundSnapshot::from_session(&session)))
}

/// POST /api/round/kanji
pub async fn select_kanji(
    State(state): State<AppState>,
    Json(payload): Json<SelectCardRequest>,
) -> Result<Json<RoundSnapshot>> {
    let mut session = state.session.lock().expect("session lock");
    session.select_kanji_card(&payload.card_id);

    Ok(Json(RoundSnapshot::from_session(&session)))
}

/// POST /api/round/ruby
///
/// Resolves the pending pair. A mismatch schedules a deferred highlight
/// clear scoped to the current round, so a clear left over from one round
/// can never touch the next.
pub async fn select_ruby(
    State(state): State<AppState>,
    Json(payload): Json<SelectCardRequest>,
) -> Result<Json<RoundSnapshot>> {
    let mut session = state.session.lock().expect("session lock");
    let outcome = session.select_ruby_card(&payload.card_id)?;

    if outcome == MatchOutcome::Mismatched {
        let round_id = session.round_id();
        let shared = state.session.clone();
        tokio::spawn(async move {
            tokio::time::sleep(WRONG_FEEDBACK_DELAY).await;
            if let Ok(mut session) = shared.lock() {
                session.clear_wrong_feedback(round_id);
            }
        });
    }

    Ok(Json(RoundSnapshot::from_session(&session)))
}

/// POST /api/round/quit
pub async fn quit(State(state): State<AppState>) -> Result<Json<RoundSnapshot>> {
    let mut session = state.session.lock().expect("session lock");
    session.quit_round();

    Ok(Json(RoundSnapshot::from_session(&session)))
}

/// POST /api/round/replay
pub async fn replay(State(state): State<AppState>) -> Result<Json<RoundSnapshot>> {
    let mut session = state.session.lock().expect("session lock");
    if !session.replay_last_round()? {
        return Err(ApiError::BadRequest("no previous round to replay".to_string()));
    }

    Ok(Json(RoundSnapshot::from_session(&session)))
}

/// DELETE /api/round/result
pub async fn clear_result(State(state): State<AppState>) -> Result<Json<RoundSnapshot>> {
    let mut session = state.session.lock().expect("session lock");
    session.clear_round_result();

    Ok(Json(RoundSnapshot::from_session(&session)))
}

//! Learning-data export endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::LearningDataBackup;
use crate::AppState;

/// GET /api/backup
///
/// The full export a client can download or hand to an external backup
/// target. Shipping it anywhere is the client's business.
pub async fn export(State(state): State<AppState>) -> Result<Json<LearningDataBackup>> {
    let mut session = state.session.lock().expect("session lock");
    let backup = session.export_backup()?;

    Ok(Json(backup))
}

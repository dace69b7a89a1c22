pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kanji_match_core::GameSession;

use crate::services::{JsonFileRecordStore, StaticWordCatalog};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<GameSession>>,
}

impl AppState {
    pub fn new(session: GameSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}

/// Build the API router around a game session.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Round lifecycle
        .route("/api/round", get(routes::round::snapshot))
        .route("/api/round/start", post(routes::round::start))
        .route("/api/round/kanji", post(routes::round::select_kanji))
        .route("/api/round/ruby", post(routes::round::select_ruby))
        .route("/api/round/quit", post(routes::round::quit))
        .route("/api/round/replay", post(routes::round::replay))
        .route("/api/round/result", delete(routes::round::clear_result))
        // Read models
        .route("/api/progress", get(routes::stats::progress))
        .route("/api/statistics", get(routes::stats::statistics))
        .route("/api/backup", get(routes::backup::export))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = StaticWordCatalog::bundled()?;
    tracing::info!("Loaded {} catalog words", catalog.len());

    let records_path = std::env::var("RECORDS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| JsonFileRecordStore::default_path());
    tracing::info!("Keeping learning records at {}", records_path.display());
    let store = JsonFileRecordStore::new(records_path);

    let session = GameSession::new(Box::new(catalog), Box::new(store));
    let state = AppState::new(session);

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

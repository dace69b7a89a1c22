//! Error types for kanji-match-core.

use thiserror::Error;

/// Boxed error produced by a collaborator implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias using GameError.
pub type Result<T> = std::result::Result<T, GameError>;

/// Engine errors.
///
/// The engine itself absorbs invalid input instead of erroring; the only
/// failures it surfaces come from its two collaborators.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("word catalog error: {0}")]
    Catalog(#[source] BoxError),

    #[error("record store error: {0}")]
    RecordStore(#[source] BoxError),
}

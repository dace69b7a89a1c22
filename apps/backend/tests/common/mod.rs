//! Common test utilities for the API integration tests.
//!
//! Every test runs against the real router with an in-memory catalog and
//! record store, so no filesystem or network is touched.

use std::sync::Arc;

use axum::Router;
use chrono::Utc;

use kanji_match_backend::{router, AppState};
use kanji_match_core::{
    register_correct_match, GameSession, LearningRecordMap, MemoryRecordStore, StaticCatalog, Word,
};

/// Test context: an engine wired to in-memory collaborators behind the
/// real router.
pub struct TestContext {
    pub store: Arc<MemoryRecordStore>,
    app: Router,
}

impl TestContext {
    pub fn new(words: Vec<Word>) -> Self {
        Self::with_records(words, LearningRecordMap::new())
    }

    pub fn with_records(words: Vec<Word>, records: LearningRecordMap) -> Self {
        let store = Arc::new(MemoryRecordStore::with_records(records));
        let session = GameSession::new(
            Box::new(StaticCatalog::new(words)),
            Box::new(store.clone()),
        );
        let app = router(AppState::new(session));

        Self { store, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// Build a catalog word.
pub fn word(id: &str, kanji: &str, ruby: &str, level: f64) -> Word {
    Word {
        id: id.to_string(),
        kanji: kanji.to_string(),
        ruby: ruby.to_string(),
        level,
        jp_meanings: vec![],
        zh_meanings: vec![],
        example_sentence: String::new(),
        example_translation: String::new(),
    }
}

/// Three band-1 words, enough for a full round.
pub fn sample_words() -> Vec<Word> {
    vec![
        word("word-0", "山", "やま", 0.3),
        word("word-1", "川", "かわ", 0.5),
        word("word-2", "空", "そら", 0.8),
    ]
}

/// Record map in which the given words have been answered once.
pub fn records_for(words: &[Word]) -> LearningRecordMap {
    let mut records = LearningRecordMap::new();
    for entry in words {
        register_correct_match(entry, &mut records, Utc::now());
    }
    records
}

//! Collaborator interfaces: the word catalog and the learning-record store.
//!
//! The engine only ever reads a catalog snapshot and reads/writes full
//! record snapshots, so any storage technology can sit behind these
//! traits. In-memory implementations are provided for tests and embedders
//! that manage persistence themselves.

use std::sync::Mutex;

use crate::error::BoxError;
use crate::types::{LearningRecordMap, Word};

/// Read-only word catalog.
pub trait WordCatalog: Send + Sync {
    /// Every available word. Order is not significant.
    fn all_words(&self) -> Result<Vec<Word>, BoxError>;

    /// Look up one word by id.
    fn word_by_id(&self, word_id: &str) -> Result<Option<Word>, BoxError>;
}

/// Learning-record store with full-snapshot semantics.
pub trait RecordStore: Send + Sync {
    /// Read all records.
    fn load_all(&self) -> Result<LearningRecordMap, BoxError>;

    /// Overwrite all records.
    fn save_all(&self, records: &LearningRecordMap) -> Result<(), BoxError>;
}

impl<T: RecordStore> RecordStore for std::sync::Arc<T> {
    fn load_all(&self) -> Result<LearningRecordMap, BoxError> {
        (**self).load_all()
    }

    fn save_all(&self, records: &LearningRecordMap) -> Result<(), BoxError> {
        (**self).save_all(records)
    }
}

/// Catalog backed by a fixed word list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    words: Vec<Word>,
}

impl StaticCatalog {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl WordCatalog for StaticCatalog {
    fn all_words(&self) -> Result<Vec<Word>, BoxError> {
        Ok(self.words.clone())
    }

    fn word_by_id(&self, word_id: &str) -> Result<Option<Word>, BoxError> {
        Ok(self.words.iter().find(|word| word.id == word_id).cloned())
    }
}

/// Record store that keeps snapshots in memory.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<LearningRecordMap>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: LearningRecordMap) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Copy of the currently stored snapshot.
    pub fn snapshot(&self) -> LearningRecordMap {
        self.records.lock().expect("record store lock").clone()
    }
}

impl RecordStore for MemoryRecordStore {
    fn load_all(&self) -> Result<LearningRecordMap, BoxError> {
        Ok(self.snapshot())
    }

    fn save_all(&self, records: &LearningRecordMap) -> Result<(), BoxError> {
        *self.records.lock().expect("record store lock") = records.clone();
        Ok(())
    }
}

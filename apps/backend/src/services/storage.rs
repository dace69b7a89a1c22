//! Learning-record persistence as a JSON snapshot on disk.
//!
//! Matches the engine's store contract: read the whole map, write the
//! whole map. A missing or unreadable file is an empty map, not an error;
//! losing a corrupt snapshot beats refusing to start.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use kanji_match_core::{BoxError, LearningRecordMap, RecordStore};

pub struct JsonFileRecordStore {
    path: PathBuf,
}

impl JsonFileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default snapshot location under the platform's local data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kanji-match")
            .join("learning-records.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileRecordStore {
    fn load_all(&self) -> Result<LearningRecordMap, BoxError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Ok(LearningRecordMap::new())
            }
            Err(error) => return Err(error.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(error) => {
                tracing::warn!(
                    "discarding unreadable record snapshot at {}: {error}",
                    self.path.display()
                );
                Ok(LearningRecordMap::new())
            }
        }
    }

    fn save_all(&self, records: &LearningRecordMap) -> Result<(), BoxError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

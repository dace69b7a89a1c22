//! Learning-record updates.

use chrono::{DateTime, Utc};

use crate::types::{LearningRecord, LearningRecordMap, Word};

/// Whether a word has at least one recorded correct match.
pub fn is_learned(word_id: &str, records: &LearningRecordMap) -> bool {
    records
        .get(word_id)
        .map(|record| record.correct_count > 0)
        .unwrap_or(false)
}

/// Outcome of registering a correct match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRegistration {
    pub record: LearningRecord,
    /// True when this was the word's first-ever correct match.
    pub newly_learned: bool,
}

/// Update the record map after a correct match.
///
/// The first success fixes `first_correct_at`; every success increments
/// `correct_count` and refreshes `last_correct_at`.
pub fn register_correct_match(
    word: &Word,
    records: &mut LearningRecordMap,
    matched_at: DateTime<Utc>,
) -> MatchRegistration {
    let previous = records.get(&word.id);
    let newly_learned = previous.map(|record| record.correct_count == 0).unwrap_or(true);

    let record = LearningRecord {
        word_id: word.id.clone(),
        kanji: word.kanji.clone(),
        ruby: word.ruby.clone(),
        correct_count: previous.map(|record| record.correct_count).unwrap_or(0) + 1,
        first_correct_at: previous
            .map(|record| record.first_correct_at)
            .unwrap_or(matched_at),
        last_correct_at: matched_at,
    };

    records.insert(word.id.clone(), record.clone());

    MatchRegistration {
        record,
        newly_learned,
    }
}

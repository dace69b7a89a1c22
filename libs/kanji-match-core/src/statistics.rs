//! Per-word statistics with filtering and sorting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{LearningRecordMap, Word};

/// Sort order for the statistics list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatisticsSort {
    CountDesc,
    CountAsc,
    RecentDesc,
    RecentAsc,
    KanjiAsc,
}

impl Default for StatisticsSort {
    fn default() -> Self {
        Self::RecentDesc
    }
}

/// Which words to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatisticsFilter {
    All,
    Learned,
    Unlearned,
}

impl Default for StatisticsFilter {
    fn default() -> Self {
        Self::All
    }
}

/// One word joined with its learning record. Words without a record show
/// zero counts and no timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStatistics {
    pub word_id: String,
    pub kanji: String,
    pub ruby: String,
    pub jp_meanings: Vec<String>,
    pub zh_meanings: Vec<String>,
    pub example_sentence: String,
    pub example_translation: String,
    pub correct_count: u32,
    pub first_correct_at: Option<DateTime<Utc>>,
    pub last_correct_at: Option<DateTime<Utc>>,
    pub learned: bool,
}

fn build_item(word: &Word, records: &LearningRecordMap) -> WordStatistics {
    let record = records.get(&word.id);

    WordStatistics {
        word_id: word.id.clone(),
        kanji: word.kanji.clone(),
        ruby: word.ruby.clone(),
        jp_meanings: word.jp_meanings.clone(),
        zh_meanings: word.zh_meanings.clone(),
        example_sentence: word.example_sentence.clone(),
        example_translation: word.example_translation.clone(),
        correct_count: record.map(|record| record.correct_count).unwrap_or(0),
        first_correct_at: record.map(|record| record.first_correct_at),
        last_correct_at: record.map(|record| record.last_correct_at),
        learned: record.map(|record| record.correct_count > 0).unwrap_or(false),
    }
}

/// A missing timestamp sorts as the earliest possible time.
fn recency(item: &WordStatistics) -> DateTime<Utc> {
    item.last_correct_at.unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn apply_sort(items: &mut [WordStatistics], sort: StatisticsSort) {
    match sort {
        StatisticsSort::CountDesc => {
            items.sort_by(|a, b| b.correct_count.cmp(&a.correct_count));
        }
        StatisticsSort::CountAsc => {
            items.sort_by(|a, b| a.correct_count.cmp(&b.correct_count));
        }
        StatisticsSort::RecentDesc => {
            items.sort_by(|a, b| recency(b).cmp(&recency(a)));
        }
        StatisticsSort::RecentAsc => {
            items.sort_by(|a, b| recency(a).cmp(&recency(b)));
        }
        StatisticsSort::KanjiAsc => {
            // Dictionary order for Japanese: readings first (kana code
            // points follow gojūon order), display text as tie-break.
            items.sort_by(|a, b| a.ruby.cmp(&b.ruby).then_with(|| a.kanji.cmp(&b.kanji)));
        }
    }
}

/// Join words with their records, filter, and sort. Inputs are never
/// mutated.
pub fn build_statistics(
    words: &[Word],
    records: &LearningRecordMap,
    sort: StatisticsSort,
    filter: StatisticsFilter,
) -> Vec<WordStatistics> {
    let mut items: Vec<WordStatistics> = words
        .iter()
        .map(|word| build_item(word, records))
        .filter(|item| match filter {
            StatisticsFilter::All => true,
            StatisticsFilter::Learned => item.learned,
            StatisticsFilter::Unlearned => !item.learned,
        })
        .collect();

    apply_sort(&mut items, sort);
    items
}

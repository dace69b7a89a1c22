//! Per-band learning progress and learner-level estimation.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::records::is_learned;
use crate::types::{LearningRecordMap, Word};

/// Learned/total counts for one difficulty band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProgress {
    pub difficulty: Difficulty,
    pub total_words: usize,
    pub learned_words: usize,
    /// `learned / total`; 0 for an empty band.
    pub learned_rate: f64,
}

/// Count catalog words and learned words per band, in band order 1-10.
pub fn build_difficulty_progress(
    words: &[Word],
    records: &LearningRecordMap,
) -> Vec<DifficultyProgress> {
    let mut items: Vec<DifficultyProgress> = Difficulty::ALL
        .iter()
        .map(|difficulty| DifficultyProgress {
            difficulty: *difficulty,
            total_words: 0,
            learned_words: 0,
            learned_rate: 0.0,
        })
        .collect();

    for word in words {
        let index = usize::from(Difficulty::classify(word.level).band() - 1);
        items[index].total_words += 1;
        if is_learned(&word.id, records) {
            items[index].learned_words += 1;
        }
    }

    for item in &mut items {
        if item.total_words > 0 {
            item.learned_rate = item.learned_words as f64 / item.total_words as f64;
        }
    }

    items
}

/// Estimate the learner's level: the mean band number weighted by learned
/// word counts, normalized to a band. Nothing learned yet means band 1.
pub fn estimate_learner_level(items: &[DifficultyProgress]) -> Difficulty {
    let learned_total: usize = items.iter().map(|item| item.learned_words).sum();

    if learned_total == 0 {
        return Difficulty::MIN;
    }

    let weighted_sum: f64 = items
        .iter()
        .map(|item| f64::from(item.difficulty.band()) * item.learned_words as f64)
        .sum();

    Difficulty::normalize(weighted_sum / learned_total as f64)
}

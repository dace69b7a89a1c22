//! Round word selection.
//!
//! Picks the words for a round from the catalog, honoring mode and
//! difficulty, with a chain of fallbacks so a playable round always comes
//! out of a non-empty catalog. Shortfalls are reported through advisory
//! flags, never errors.

use crate::difficulty::Difficulty;
use crate::random::{sample_unique, shuffle};
use crate::records::is_learned;
use crate::types::{GameMode, LearningRecordMap, Word};

/// Selector output: the round's words plus the advisory flags describing
/// which fallbacks were needed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundSelection {
    pub words: Vec<Word>,
    /// The preferred pool ran short and the other pool topped it up.
    pub fallback_used: bool,
    /// Unique candidates ran out and words repeat within the round.
    pub repeated_used: bool,
    /// No word matched the requested difficulty; the whole catalog was used.
    pub difficulty_fallback_used: bool,
}

fn split_pools(words: &[Word], records: &LearningRecordMap) -> (Vec<Word>, Vec<Word>) {
    let mut learned = Vec::new();
    let mut unlearned = Vec::new();

    for word in words {
        if is_learned(&word.id, records) {
            learned.push(word.clone());
        } else {
            unlearned.push(word.clone());
        }
    }

    (learned, unlearned)
}

/// Pad `selected` up to `target` by cycling through a shuffled view of the
/// candidate set, allowing duplicates.
fn fill_to_target(mut selected: Vec<Word>, candidates: &[Word], target: usize) -> (Vec<Word>, bool) {
    if selected.len() >= target {
        selected.truncate(target);
        return (selected, false);
    }

    if candidates.is_empty() {
        return (Vec::new(), false);
    }

    let shuffled = shuffle(candidates);
    let mut cursor = 0;

    while selected.len() < target {
        selected.push(shuffled[cursor % shuffled.len()].clone());
        cursor += 1;
    }

    (selected, true)
}

/// Select the words for one round.
///
/// `count` is treated as at least 1. The pipeline: filter by difficulty
/// (empty filter result falls back to the whole catalog), split into
/// learned/unlearned pools, draw from the mode's preferred pool, top up
/// from the other pool, then pad with repetitions if unique candidates
/// still run short. An empty catalog yields an empty selection with no
/// flags raised.
pub fn select_round_words(
    mode: GameMode,
    count: usize,
    difficulty: Difficulty,
    words: &[Word],
    records: &LearningRecordMap,
) -> RoundSelection {
    if words.is_empty() {
        return RoundSelection::default();
    }

    let safe_count = count.max(1);

    let by_difficulty: Vec<Word> = words
        .iter()
        .filter(|word| difficulty.contains_level(word.level))
        .cloned()
        .collect();
    let difficulty_fallback_used = by_difficulty.is_empty();
    let candidates: &[Word] = if difficulty_fallback_used {
        words
    } else {
        &by_difficulty
    };

    let (learned, unlearned) = split_pools(candidates, records);
    let (preferred, other) = match mode {
        GameMode::Newbie => (unlearned, learned),
        GameMode::Review => (learned, unlearned),
    };

    let mut selected = sample_unique(&preferred, safe_count);
    let mut fallback_used = false;

    if selected.len() < safe_count {
        let missing = safe_count - selected.len();
        selected.extend(sample_unique(&other, missing));
        fallback_used = true;
    }

    let (words, repeated_used) = fill_to_target(selected, candidates, safe_count);

    RoundSelection {
        words,
        fallback_used,
        repeated_used,
        difficulty_fallback_used,
    }
}

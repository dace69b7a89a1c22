//! Bundled word catalog.
//!
//! The word list ships inside the binary as JSON and is normalized once
//! at load time. The game matches kanji to readings, so entries without
//! both, or whose display text contains no CJK ideograph, are dropped.

use serde::Deserialize;

use kanji_match_core::{BoxError, Word, WordCatalog};

const BUNDLED_WORDS: &str = include_str!("../../data/words.json");

/// Raw catalog entry as it appears in the data file.
#[derive(Debug, Deserialize)]
struct RawWord {
    kanji: Option<String>,
    ruby: Option<String>,
    level: Option<f64>,
    jp_meanings: Option<Vec<String>>,
    zh_meanings: Option<Vec<String>>,
    example_sentence: Option<String>,
    example_translation: Option<String>,
}

fn is_cjk_ideograph(c: char) -> bool {
    matches!(
        c,
        '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}'
    )
}

fn contains_kanji(text: &str) -> bool {
    text.chars().any(is_cjk_ideograph)
}

fn normalize_meanings(source: Option<Vec<String>>) -> Vec<String> {
    source
        .unwrap_or_default()
        .into_iter()
        .map(|meaning| meaning.trim().to_string())
        .filter(|meaning| !meaning.is_empty())
        .collect()
}

fn normalize_words(raw_words: Vec<RawWord>) -> Vec<Word> {
    let mut words = Vec::new();

    for (index, entry) in raw_words.into_iter().enumerate() {
        let kanji = entry.kanji.unwrap_or_default().trim().to_string();
        let ruby = entry.ruby.unwrap_or_default().trim().to_string();

        // A card pair needs both a written form and a reading.
        if kanji.is_empty() || ruby.is_empty() {
            continue;
        }

        // Kana-only entries have nothing to match against.
        if !contains_kanji(&kanji) {
            continue;
        }

        words.push(Word {
            id: format!("word-{index}"),
            kanji,
            ruby,
            level: entry.level.filter(|level| level.is_finite()).unwrap_or(10.0),
            jp_meanings: normalize_meanings(entry.jp_meanings),
            zh_meanings: normalize_meanings(entry.zh_meanings),
            example_sentence: entry.example_sentence.unwrap_or_default().trim().to_string(),
            example_translation: entry
                .example_translation
                .unwrap_or_default()
                .trim()
                .to_string(),
        });
    }

    words
}

/// Catalog built from the bundled word list.
#[derive(Debug, Clone)]
pub struct StaticWordCatalog {
    words: Vec<Word>,
}

impl StaticWordCatalog {
    /// Load the word list shipped with the binary.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_WORDS)
    }

    /// Load and normalize a catalog from raw JSON.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let raw_words: Vec<RawWord> = serde_json::from_str(raw)?;
        Ok(Self {
            words: normalize_words(raw_words),
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordCatalog for StaticWordCatalog {
    fn all_words(&self) -> Result<Vec<Word>, BoxError> {
        Ok(self.words.clone())
    }

    fn word_by_id(&self, word_id: &str) -> Result<Option<Word>, BoxError> {
        Ok(self.words.iter().find(|word| word.id == word_id).cloned())
    }
}

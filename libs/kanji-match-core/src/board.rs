//! Board construction: one kanji column and one reading column per round.

use crate::random::shuffle;
use crate::types::{GameCard, Word};

/// The two card columns of a round, each shuffled independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardCards {
    pub kanji_cards: Vec<GameCard>,
    pub ruby_cards: Vec<GameCard>,
}

fn build_column(words: &[Word], prefix: &str, text_of: fn(&Word) -> &str) -> Vec<GameCard> {
    words
        .iter()
        .enumerate()
        .map(|(index, word)| GameCard {
            // Position goes into the id so repeated words still get
            // distinct cards.
            id: format!("{prefix}-{index}-{}", word.id),
            word_id: word.id.clone(),
            text: text_of(word).to_string(),
            removed: false,
        })
        .collect()
}

/// Build and shuffle both columns from the round's word list.
pub fn build_board_cards(words: &[Word]) -> BoardCards {
    let kanji_cards = build_column(words, "kanji", |word| &word.kanji);
    let ruby_cards = build_column(words, "ruby", |word| &word.ruby);

    BoardCards {
        kanji_cards: shuffle(&kanji_cards),
        ruby_cards: shuffle(&ruby_cards),
    }
}

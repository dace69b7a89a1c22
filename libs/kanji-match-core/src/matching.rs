//! Match resolution for a card pair.

use crate::types::GameCard;

/// A pair matches iff both cards are present and reference the same word.
/// Any missing card is a non-match, never an error.
pub fn is_correct_match(kanji_card: Option<&GameCard>, ruby_card: Option<&GameCard>) -> bool {
    match (kanji_card, ruby_card) {
        (Some(kanji), Some(ruby)) => kanji.word_id == ruby.word_id,
        _ => false,
    }
}

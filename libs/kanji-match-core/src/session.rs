//! Round/session state machine.
//!
//! Owns the loaded catalog snapshot, the learning records and all
//! round-local state, and orchestrates selection, board building, match
//! handling and round completion. Collaborators are injected, never
//! global. Transitions with unmet preconditions (wrong state, stale or
//! removed card, no pending selection) are silent no-ops so the machine
//! can be driven by a UI that cannot prevent stale clicks; only
//! collaborator failures surface as errors.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::board::build_board_cards;
use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};
use crate::matching::is_correct_match;
use crate::progress::{build_difficulty_progress, estimate_learner_level, DifficultyProgress};
use crate::records::register_correct_match;
use crate::repository::{RecordStore, WordCatalog};
use crate::selection::select_round_words;
use crate::statistics::{build_statistics, StatisticsFilter, StatisticsSort, WordStatistics};
use crate::types::{
    BackupSummary, GameCard, GameMode, LearningDataBackup, LearningRecordMap, RoundConfig,
    RoundResult, Word, BACKUP_SCHEMA_VERSION,
};

/// Lifecycle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    Idle,
    Playing,
    Finished,
}

/// What a right-column selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Preconditions unmet; nothing changed.
    Ignored,
    /// The pair matched and was removed.
    Matched {
        newly_learned: bool,
        /// True when this match emptied the board and finished the round.
        finished: bool,
    },
    /// The pair did not match; the wrong-pair highlight is set and should
    /// be cleared after a short delay via [`GameSession::clear_wrong_feedback`].
    Mismatched,
}

/// The game session. One instance per player process.
pub struct GameSession {
    catalog: Box<dyn WordCatalog>,
    store: Box<dyn RecordStore>,

    initialized: bool,
    words: Vec<Word>,
    records: LearningRecordMap,

    mode: GameMode,
    requested_count: usize,
    difficulty: Difficulty,

    status: RoundStatus,
    round_id: Uuid,
    round_started_at: Option<DateTime<Utc>>,
    round_words: Vec<Word>,
    kanji_cards: Vec<GameCard>,
    ruby_cards: Vec<GameCard>,
    selected_kanji_card_id: Option<String>,
    wrong_kanji_card_ids: Vec<String>,
    wrong_ruby_card_ids: Vec<String>,
    round_notice: Option<String>,
    newly_learned_word_ids: Vec<String>,
    round_result: Option<RoundResult>,
    last_round_config: Option<RoundConfig>,
}

impl GameSession {
    pub fn new(catalog: Box<dyn WordCatalog>, store: Box<dyn RecordStore>) -> Self {
        Self {
            catalog,
            store,
            initialized: false,
            words: Vec::new(),
            records: LearningRecordMap::new(),
            mode: GameMode::default(),
            requested_count: 10,
            difficulty: Difficulty::default(),
            status: RoundStatus::Idle,
            round_id: Uuid::new_v4(),
            round_started_at: None,
            round_words: Vec::new(),
            kanji_cards: Vec::new(),
            ruby_cards: Vec::new(),
            selected_kanji_card_id: None,
            wrong_kanji_card_ids: Vec::new(),
            wrong_ruby_card_ids: Vec::new(),
            round_notice: None,
            newly_learned_word_ids: Vec::new(),
            round_result: None,
            last_round_config: None,
        }
    }

    /// Load the catalog and record snapshots once, on first use.
    pub fn ensure_initialized(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        self.words = self.catalog.all_words().map_err(GameError::Catalog)?;
        self.records = self.store.load_all().map_err(GameError::RecordStore)?;
        self.initialized = true;
        Ok(())
    }

    /// Start a new round. The count is coerced to at least 1. Selector
    /// shortfalls become a single human-readable notice, never an error.
    pub fn start_round(
        &mut self,
        mode: GameMode,
        count: usize,
        difficulty: Difficulty,
    ) -> Result<()> {
        self.ensure_initialized()?;

        let resolved_count = count.max(1);
        let selection =
            select_round_words(mode, resolved_count, difficulty, &self.words, &self.records);
        let board = build_board_cards(&selection.words);

        let mut notices: Vec<&str> = Vec::new();
        if selection.fallback_used {
            notices.push(match mode {
                GameMode::Newbie => "Not enough unlearned words, so learned words fill the gap.",
                GameMode::Review => "Not enough learned words, so unlearned words fill the gap.",
            });
        }
        if selection.repeated_used {
            notices.push("Not enough unique words, so some repeat this round.");
        }
        if selection.difficulty_fallback_used {
            notices.push("No words at this difficulty, so the whole catalog is in play.");
        }

        self.mode = mode;
        self.requested_count = resolved_count;
        self.difficulty = difficulty;
        self.status = RoundStatus::Playing;
        self.round_id = Uuid::new_v4();
        self.round_started_at = Some(Utc::now());
        self.round_words = selection.words;
        self.kanji_cards = board.kanji_cards;
        self.ruby_cards = board.ruby_cards;
        self.round_notice = if notices.is_empty() {
            None
        } else {
            Some(notices.join(" "))
        };
        self.newly_learned_word_ids.clear();
        self.round_result = None;
        self.reset_selection_feedback();
        self.last_round_config = Some(RoundConfig {
            mode,
            count: resolved_count,
            difficulty,
        });

        Ok(())
    }

    /// Select a kanji card as the pending half of a pair. Also clears any
    /// stale wrong-pair highlight.
    pub fn select_kanji_card(&mut self, card_id: &str) {
        if self.status != RoundStatus::Playing {
            return;
        }

        let selectable = self
            .kanji_cards
            .iter()
            .any(|card| card.id == card_id && !card.removed);
        if !selectable {
            return;
        }

        self.selected_kanji_card_id = Some(card_id.to_string());
        self.wrong_kanji_card_ids.clear();
        self.wrong_ruby_card_ids.clear();
    }

    /// Select a reading card and resolve it against the pending kanji card.
    pub fn select_ruby_card(&mut self, card_id: &str) -> Result<MatchOutcome> {
        if self.status != RoundStatus::Playing {
            return Ok(MatchOutcome::Ignored);
        }

        let Some(pending_kanji_id) = self.selected_kanji_card_id.clone() else {
            return Ok(MatchOutcome::Ignored);
        };

        let kanji_card = self
            .kanji_cards
            .iter()
            .find(|card| card.id == pending_kanji_id);
        let ruby_card = self.ruby_cards.iter().find(|card| card.id == card_id);

        let (Some(kanji), Some(ruby)) = (kanji_card, ruby_card) else {
            return Ok(MatchOutcome::Ignored);
        };
        if kanji.removed || ruby.removed {
            return Ok(MatchOutcome::Ignored);
        }

        if is_correct_match(Some(kanji), Some(ruby)) {
            let kanji_id = kanji.id.clone();
            let ruby_id = ruby.id.clone();
            let word_id = kanji.word_id.clone();
            self.handle_correct_match(&kanji_id, &ruby_id, &word_id)
        } else {
            self.wrong_kanji_card_ids = vec![kanji.id.clone()];
            self.wrong_ruby_card_ids = vec![ruby.id.clone()];
            self.selected_kanji_card_id = None;
            Ok(MatchOutcome::Mismatched)
        }
    }

    fn handle_correct_match(
        &mut self,
        kanji_card_id: &str,
        ruby_card_id: &str,
        word_id: &str,
    ) -> Result<MatchOutcome> {
        for card in &mut self.kanji_cards {
            if card.id == kanji_card_id {
                card.removed = true;
            }
        }
        for card in &mut self.ruby_cards {
            if card.id == ruby_card_id {
                card.removed = true;
            }
        }

        let mut newly_learned = false;
        if let Some(word) = self.words.iter().find(|word| word.id == word_id).cloned() {
            let registration = register_correct_match(&word, &mut self.records, Utc::now());
            self.store
                .save_all(&self.records)
                .map_err(GameError::RecordStore)?;

            if registration.newly_learned
                && !self.newly_learned_word_ids.iter().any(|id| id == word_id)
            {
                self.newly_learned_word_ids.push(word_id.to_string());
            }
            newly_learned = registration.newly_learned;
        }

        self.reset_selection_feedback();

        let finished = self.remaining_pairs() == 0;
        if finished {
            self.finish_round();
        }

        Ok(MatchOutcome::Matched {
            newly_learned,
            finished,
        })
    }

    fn finish_round(&mut self) {
        let now = Utc::now();
        let started = self.round_started_at.unwrap_or(now);
        let elapsed_seconds = (now - started).num_seconds().max(0) as u64;

        let newly_learned_words: Vec<Word> = self
            .newly_learned_word_ids
            .iter()
            .filter_map(|id| self.words.iter().find(|word| &word.id == id).cloned())
            .collect();

        self.round_result = Some(RoundResult {
            mode: self.mode,
            difficulty: self.difficulty,
            requested_count: self.requested_count,
            correct_pairs: self.total_pairs(),
            started_at: started,
            finished_at: now,
            elapsed_seconds,
            newly_learned_words,
        });
        self.status = RoundStatus::Finished;
    }

    /// Abandon the current round. Learning records and the saved round
    /// configuration survive.
    pub fn quit_round(&mut self) {
        self.reset_round_state();
        self.round_result = None;
    }

    /// Drop the stored round result, returning to idle if finished.
    pub fn clear_round_result(&mut self) {
        self.round_result = None;
        if self.status == RoundStatus::Finished {
            self.status = RoundStatus::Idle;
        }
    }

    /// Start a fresh round with the previous configuration. Returns false
    /// when no round has been played yet.
    pub fn replay_last_round(&mut self) -> Result<bool> {
        let Some(config) = self.last_round_config else {
            return Ok(false);
        };

        self.start_round(config.mode, config.count, config.difficulty)?;
        Ok(true)
    }

    /// Clear the wrong-pair highlight, but only for the round it belongs
    /// to. A deferred clear scheduled during an earlier round must not
    /// touch a later one.
    pub fn clear_wrong_feedback(&mut self, round_id: Uuid) {
        if round_id != self.round_id {
            return;
        }

        self.wrong_kanji_card_ids.clear();
        self.wrong_ruby_card_ids.clear();
    }

    /// Export all learning data for download or external backup.
    pub fn export_backup(&mut self) -> Result<LearningDataBackup> {
        self.ensure_initialized()?;

        Ok(LearningDataBackup {
            schema_version: BACKUP_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            game_config: RoundConfig {
                mode: self.mode,
                count: self.requested_count,
                difficulty: self.difficulty,
            },
            summary: BackupSummary {
                learned_word_count: self.learned_word_count(),
                total_word_count: self.words.len(),
            },
            records: self.records.clone(),
        })
    }

    /// Per-band learning progress over the whole catalog.
    pub fn difficulty_progress(&mut self) -> Result<Vec<DifficultyProgress>> {
        self.ensure_initialized()?;
        Ok(build_difficulty_progress(&self.words, &self.records))
    }

    /// Estimated learner level derived from the progress distribution.
    pub fn learner_level(&mut self) -> Result<Difficulty> {
        let progress = self.difficulty_progress()?;
        Ok(estimate_learner_level(&progress))
    }

    /// Sorted, filtered per-word statistics.
    pub fn statistics(
        &mut self,
        sort: StatisticsSort,
        filter: StatisticsFilter,
    ) -> Result<Vec<WordStatistics>> {
        self.ensure_initialized()?;
        Ok(build_statistics(&self.words, &self.records, sort, filter))
    }

    fn reset_selection_feedback(&mut self) {
        self.selected_kanji_card_id = None;
        self.wrong_kanji_card_ids.clear();
        self.wrong_ruby_card_ids.clear();
    }

    fn reset_round_state(&mut self) {
        self.status = RoundStatus::Idle;
        self.round_started_at = None;
        self.round_words.clear();
        self.kanji_cards.clear();
        self.ruby_cards.clear();
        self.round_notice = None;
        self.newly_learned_word_ids.clear();
        self.reset_selection_feedback();
    }

    // Read accessors.

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == RoundStatus::Playing
    }

    /// Identity of the current round; regenerated on every start.
    pub fn round_id(&self) -> Uuid {
        self.round_id
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn round_notice(&self) -> Option<&str> {
        self.round_notice.as_deref()
    }

    pub fn kanji_cards(&self) -> &[GameCard] {
        &self.kanji_cards
    }

    pub fn ruby_cards(&self) -> &[GameCard] {
        &self.ruby_cards
    }

    pub fn selected_kanji_card_id(&self) -> Option<&str> {
        self.selected_kanji_card_id.as_deref()
    }

    pub fn wrong_kanji_card_ids(&self) -> &[String] {
        &self.wrong_kanji_card_ids
    }

    pub fn wrong_ruby_card_ids(&self) -> &[String] {
        &self.wrong_ruby_card_ids
    }

    pub fn round_result(&self) -> Option<&RoundResult> {
        self.round_result.as_ref()
    }

    pub fn last_round_config(&self) -> Option<RoundConfig> {
        self.last_round_config
    }

    pub fn total_pairs(&self) -> usize {
        self.round_words.len()
    }

    pub fn remaining_pairs(&self) -> usize {
        self.kanji_cards.iter().filter(|card| !card.removed).count()
    }

    pub fn learned_word_count(&self) -> usize {
        self.records
            .values()
            .filter(|record| record.correct_count > 0)
            .count()
    }

    pub fn total_word_count(&self) -> usize {
        self.words.len()
    }

    /// Review mode only makes sense once something has been learned.
    pub fn can_start_review_mode(&self) -> bool {
        self.learned_word_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::BoxError;
    use crate::repository::{MemoryRecordStore, StaticCatalog};

    fn words() -> Vec<Word> {
        [("山", "やま"), ("川", "かわ"), ("空", "そら")]
            .iter()
            .enumerate()
            .map(|(index, (kanji, ruby))| Word {
                id: format!("word-{index}"),
                kanji: kanji.to_string(),
                ruby: ruby.to_string(),
                level: 0.5,
                jp_meanings: vec![],
                zh_meanings: vec![],
                example_sentence: String::new(),
                example_translation: String::new(),
            })
            .collect()
    }

    fn session_with(words: Vec<Word>) -> (GameSession, Arc<MemoryRecordStore>) {
        let store = Arc::new(MemoryRecordStore::new());
        let session = GameSession::new(
            Box::new(StaticCatalog::new(words)),
            Box::new(store.clone()),
        );
        (session, store)
    }

    /// Match one pair by word id; returns the outcome.
    fn match_pair(session: &mut GameSession, word_id: &str) -> MatchOutcome {
        let kanji_id = session
            .kanji_cards()
            .iter()
            .find(|card| card.word_id == word_id && !card.removed)
            .map(|card| card.id.clone())
            .expect("kanji card for word");
        let ruby_id = session
            .ruby_cards()
            .iter()
            .find(|card| card.word_id == word_id && !card.removed)
            .map(|card| card.id.clone())
            .expect("ruby card for word");

        session.select_kanji_card(&kanji_id);
        session.select_ruby_card(&ruby_id).expect("match")
    }

    #[test]
    fn start_round_builds_a_full_board() {
        let (mut session, _) = session_with(words());

        session
            .start_round(GameMode::Newbie, 3, Difficulty::new(1))
            .unwrap();

        assert_eq!(session.status(), RoundStatus::Playing);
        assert!(session.is_playing());
        assert_eq!(session.total_pairs(), 3);
        assert_eq!(session.remaining_pairs(), 3);
        assert_eq!(session.kanji_cards().len(), 3);
        assert_eq!(session.ruby_cards().len(), 3);
        assert_eq!(session.round_notice(), None);

        let mut kanji_words: Vec<&str> = session
            .kanji_cards()
            .iter()
            .map(|card| card.word_id.as_str())
            .collect();
        let mut ruby_words: Vec<&str> = session
            .ruby_cards()
            .iter()
            .map(|card| card.word_id.as_str())
            .collect();
        kanji_words.sort();
        ruby_words.sort();
        assert_eq!(kanji_words, vec!["word-0", "word-1", "word-2"]);
        assert_eq!(kanji_words, ruby_words);
    }

    #[test]
    fn playing_through_all_pairs_finishes_the_round() {
        let (mut session, store) = session_with(words());
        session
            .start_round(GameMode::Newbie, 3, Difficulty::new(1))
            .unwrap();

        for word_id in ["word-0", "word-1"] {
            let outcome = match_pair(&mut session, word_id);
            assert_eq!(
                outcome,
                MatchOutcome::Matched {
                    newly_learned: true,
                    finished: false
                }
            );
        }

        let outcome = match_pair(&mut session, "word-2");
        assert_eq!(
            outcome,
            MatchOutcome::Matched {
                newly_learned: true,
                finished: true
            }
        );

        assert_eq!(session.status(), RoundStatus::Finished);
        assert_eq!(session.remaining_pairs(), 0);

        let result = session.round_result().expect("round result");
        assert_eq!(result.correct_pairs, 3);
        assert_eq!(result.newly_learned_words.len(), 3);
        assert!(result.finished_at >= result.started_at);

        // Every match persisted a fresh snapshot.
        assert_eq!(store.snapshot().len(), 3);
        assert_eq!(session.learned_word_count(), 3);
        assert!(session.can_start_review_mode());
    }

    #[test]
    fn mismatch_sets_wrong_highlight_and_clears_selection() {
        let (mut session, _) = session_with(words());
        session
            .start_round(GameMode::Newbie, 3, Difficulty::new(1))
            .unwrap();

        let kanji_id = session
            .kanji_cards()
            .iter()
            .find(|card| card.word_id == "word-0")
            .map(|card| card.id.clone())
            .unwrap();
        let wrong_ruby_id = session
            .ruby_cards()
            .iter()
            .find(|card| card.word_id == "word-1")
            .map(|card| card.id.clone())
            .unwrap();

        session.select_kanji_card(&kanji_id);
        assert_eq!(session.selected_kanji_card_id(), Some(kanji_id.as_str()));

        let outcome = session.select_ruby_card(&wrong_ruby_id).unwrap();
        assert_eq!(outcome, MatchOutcome::Mismatched);
        assert_eq!(session.selected_kanji_card_id(), None);
        assert_eq!(session.wrong_kanji_card_ids(), [kanji_id.clone()]);
        assert_eq!(session.wrong_ruby_card_ids(), [wrong_ruby_id]);
        assert_eq!(session.remaining_pairs(), 3);

        // Selecting a kanji card again clears the stale highlight.
        session.select_kanji_card(&kanji_id);
        assert!(session.wrong_kanji_card_ids().is_empty());
        assert!(session.wrong_ruby_card_ids().is_empty());
    }

    #[test]
    fn wrong_clear_is_scoped_to_its_round() {
        let (mut session, _) = session_with(words());
        session
            .start_round(GameMode::Newbie, 3, Difficulty::new(1))
            .unwrap();

        let kanji_id = session.kanji_cards()[0].id.clone();
        let wrong_ruby_id = session
            .ruby_cards()
            .iter()
            .find(|card| card.word_id != session.kanji_cards()[0].word_id)
            .map(|card| card.id.clone())
            .unwrap();
        session.select_kanji_card(&kanji_id);
        session.select_ruby_card(&wrong_ruby_id).unwrap();
        assert!(!session.wrong_kanji_card_ids().is_empty());

        let stale_round = Uuid::new_v4();
        session.clear_wrong_feedback(stale_round);
        assert!(!session.wrong_kanji_card_ids().is_empty());

        session.clear_wrong_feedback(session.round_id());
        assert!(session.wrong_kanji_card_ids().is_empty());

        // Round identity changes on every start, so a clear deferred from
        // this round can never touch the next one.
        let old_round = session.round_id();
        session
            .start_round(GameMode::Newbie, 3, Difficulty::new(1))
            .unwrap();
        assert_ne!(session.round_id(), old_round);
    }

    #[test]
    fn transitions_are_no_ops_outside_their_preconditions() {
        let (mut session, _) = session_with(words());

        // Idle: selections do nothing.
        session.select_kanji_card("kanji-0-word-0");
        assert_eq!(session.selected_kanji_card_id(), None);
        assert_eq!(session.select_ruby_card("ruby-0-word-0").unwrap(), MatchOutcome::Ignored);

        session
            .start_round(GameMode::Newbie, 3, Difficulty::new(1))
            .unwrap();

        // Unknown card ids do nothing.
        session.select_kanji_card("kanji-99-word-99");
        assert_eq!(session.selected_kanji_card_id(), None);

        // Ruby selection without a pending kanji is ignored.
        let ruby_id = session.ruby_cards()[0].id.clone();
        assert_eq!(session.select_ruby_card(&ruby_id).unwrap(), MatchOutcome::Ignored);

        // Removed cards cannot be selected again.
        match_pair(&mut session, "word-0");
        let removed_kanji = session
            .kanji_cards()
            .iter()
            .find(|card| card.removed)
            .map(|card| card.id.clone())
            .unwrap();
        session.select_kanji_card(&removed_kanji);
        assert_eq!(session.selected_kanji_card_id(), None);
    }

    #[test]
    fn quit_discards_round_state_but_keeps_records_and_config() {
        let (mut session, store) = session_with(words());
        session
            .start_round(GameMode::Newbie, 3, Difficulty::new(1))
            .unwrap();
        match_pair(&mut session, "word-0");

        session.quit_round();

        assert_eq!(session.status(), RoundStatus::Idle);
        assert!(session.kanji_cards().is_empty());
        assert!(session.ruby_cards().is_empty());
        assert_eq!(session.round_result(), None);
        assert_eq!(session.round_notice(), None);
        // The learned record survives the quit.
        assert_eq!(store.snapshot().len(), 1);
        assert!(session.last_round_config().is_some());
    }

    #[test]
    fn clear_round_result_returns_finished_to_idle() {
        let (mut session, _) = session_with(vec![words().remove(0)]);
        session
            .start_round(GameMode::Newbie, 1, Difficulty::new(1))
            .unwrap();
        match_pair(&mut session, "word-0");
        assert_eq!(session.status(), RoundStatus::Finished);

        session.clear_round_result();
        assert_eq!(session.status(), RoundStatus::Idle);
        assert_eq!(session.round_result(), None);
    }

    #[test]
    fn replay_reuses_the_last_configuration() {
        let (mut session, _) = session_with(words());
        assert!(!session.replay_last_round().unwrap());

        session
            .start_round(GameMode::Newbie, 2, Difficulty::new(1))
            .unwrap();
        session.quit_round();

        assert!(session.replay_last_round().unwrap());
        assert_eq!(session.status(), RoundStatus::Playing);
        assert_eq!(session.requested_count(), 2);
        assert_eq!(session.mode(), GameMode::Newbie);
    }

    #[test]
    fn single_word_round_repeats_and_reports_one_new_word() {
        let (mut session, _) = session_with(vec![words().remove(0)]);
        session
            .start_round(GameMode::Newbie, 5, Difficulty::new(1))
            .unwrap();

        assert_eq!(session.total_pairs(), 5);
        assert_eq!(session.kanji_cards().len(), 5);
        let notice = session.round_notice().expect("repetition notice");
        assert!(notice.contains("repeat"));

        for _ in 0..4 {
            assert!(matches!(
                match_pair(&mut session, "word-0"),
                MatchOutcome::Matched { finished: false, .. }
            ));
        }
        assert!(matches!(
            match_pair(&mut session, "word-0"),
            MatchOutcome::Matched { finished: true, .. }
        ));

        let result = session.round_result().unwrap();
        assert_eq!(result.correct_pairs, 5);
        // The same word only counts as newly learned once.
        assert_eq!(result.newly_learned_words.len(), 1);
    }

    #[test]
    fn empty_catalog_round_is_playable_as_a_no_op_board() {
        let (mut session, _) = session_with(Vec::new());
        session
            .start_round(GameMode::Newbie, 4, Difficulty::new(1))
            .unwrap();

        assert_eq!(session.status(), RoundStatus::Playing);
        assert_eq!(session.total_pairs(), 0);
        assert_eq!(session.remaining_pairs(), 0);
        assert_eq!(session.round_notice(), None);
    }

    struct FailingCatalog;

    impl WordCatalog for FailingCatalog {
        fn all_words(&self) -> std::result::Result<Vec<Word>, BoxError> {
            Err("catalog offline".into())
        }

        fn word_by_id(&self, _word_id: &str) -> std::result::Result<Option<Word>, BoxError> {
            Err("catalog offline".into())
        }
    }

    #[test]
    fn collaborator_failures_surface_as_errors() {
        let mut session = GameSession::new(
            Box::new(FailingCatalog),
            Box::new(MemoryRecordStore::new()),
        );

        let error = session
            .start_round(GameMode::Newbie, 3, Difficulty::new(1))
            .unwrap_err();
        assert!(matches!(error, GameError::Catalog(_)));
    }

    #[test]
    fn backup_export_carries_config_summary_and_records() {
        let (mut session, _) = session_with(words());
        session
            .start_round(GameMode::Newbie, 3, Difficulty::new(2))
            .unwrap();
        match_pair(&mut session, "word-1");

        let backup = session.export_backup().unwrap();
        assert_eq!(backup.schema_version, BACKUP_SCHEMA_VERSION);
        assert_eq!(backup.game_config.count, 3);
        assert_eq!(backup.game_config.difficulty, Difficulty::new(2));
        assert_eq!(backup.summary.total_word_count, 3);
        assert_eq!(backup.summary.learned_word_count, 1);
        assert_eq!(backup.records.len(), 1);
    }

    #[test]
    fn progress_and_statistics_see_the_loaded_snapshot() {
        let (mut session, _) = session_with(words());
        session
            .start_round(GameMode::Newbie, 3, Difficulty::new(1))
            .unwrap();
        match_pair(&mut session, "word-0");

        let progress = session.difficulty_progress().unwrap();
        assert_eq!(progress[0].total_words, 3);
        assert_eq!(progress[0].learned_words, 1);
        assert_eq!(session.learner_level().unwrap(), Difficulty::MIN);

        let learned = session
            .statistics(StatisticsSort::CountDesc, StatisticsFilter::Learned)
            .unwrap();
        assert_eq!(learned.len(), 1);
        assert_eq!(learned[0].word_id, "word-0");
    }
}

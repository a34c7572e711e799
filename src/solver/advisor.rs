//! Game session
//!
//! The [`Advisor`] owns the constraint log for one game and turns it into an
//! [`Analysis`]: candidates, letter statistics, rankings and trap probes.
//! Every derived value is a pure function of the log, so the analysis is
//! cached against the log's fingerprint and only recomputed after a change.

use super::config::{GamePhase, ScoringConfig};
use super::filter::filter_candidates;
use super::scoring::{
    BestGuess, InfoWord, SuggestionRecord, best_guesses, info_gathering_words, rank_by_coverage,
    suggest_guesses,
};
use super::statistics::{LetterStatistics, compute_letter_statistics};
use super::trap::{PatternBreaker, PatternTrapInfo, detect_pattern_trap, find_pattern_breakers};
use crate::core::{Constraint, ConstraintLog, LetterSet, LogError, Word};
use log::{debug, warn};
use std::fmt;
use std::time::Instant;

/// Which dictionary the current candidates came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionarySource {
    Primary,
    /// The primary dictionary had no consistent word
    Extended,
}

impl DictionarySource {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything derived from one state of the constraint log
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis<'a> {
    /// 1-based number of the next guess
    pub turn: usize,
    pub phase: GamePhase,
    pub source: DictionarySource,
    pub known_letters: LetterSet,
    pub candidates: Vec<&'a Word>,
    pub statistics: LetterStatistics,
    pub suggestions: Vec<SuggestionRecord<'a>>,
    /// False when the candidate count is outside the scoring window
    pub suggestions_available: bool,
    pub best_guesses: Vec<BestGuess<'a>>,
    pub best_guesses_available: bool,
    pub info_words: Vec<InfoWord<'a>>,
    pub trap: PatternTrapInfo,
    pub pattern_breakers: Vec<PatternBreaker<'a>>,
}

impl Analysis<'_> {
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }
}

/// One game's session state
///
/// # Examples
/// ```
/// use wordle_assistant::core::{Constraint, Word};
/// use wordle_assistant::solver::Advisor;
///
/// let dictionary: Vec<Word> = ["slate", "plate", "crane", "trace"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut advisor = Advisor::new(&dictionary, &dictionary);
/// advisor.add("crane:--g-g".parse::<Constraint>().unwrap());
///
/// let analysis = advisor.analysis();
/// let remaining: Vec<&str> = analysis.candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(remaining, ["slate", "plate"]);
/// ```
#[derive(Debug)]
pub struct Advisor<'a> {
    primary: &'a [Word],
    extended: &'a [Word],
    config: ScoringConfig,
    log: ConstraintLog,
    cache: Option<(u64, Analysis<'a>)>,
}

impl<'a> Advisor<'a> {
    /// Create a session over a primary dictionary and its fallback
    #[must_use]
    pub fn new(primary: &'a [Word], extended: &'a [Word]) -> Self {
        Self {
            primary,
            extended,
            config: ScoringConfig::default(),
            log: ConstraintLog::new(),
            cache: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self.cache = None;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    #[must_use]
    pub const fn log(&self) -> &ConstraintLog {
        &self.log
    }

    /// Record the feedback for a guess
    pub fn add(&mut self, constraint: Constraint) {
        debug!("constraint {} added at turn {}", constraint, self.log.turn());
        self.log.push(constraint);
    }

    /// Drop the constraint at `index` (0-based), keeping the others in order
    ///
    /// # Errors
    /// Returns [`LogError::IndexOutOfRange`] when no constraint has that index.
    pub fn remove(&mut self, index: usize) -> Result<Constraint, LogError> {
        let removed = self.log.remove(index)?;
        debug!("constraint {removed} removed");
        Ok(removed)
    }

    /// Drop the most recent constraint
    pub fn undo(&mut self) -> Option<Constraint> {
        self.log.pop()
    }

    /// Start a new game
    pub fn reset(&mut self) {
        self.log.reset();
        self.cache = None;
    }

    /// Filter the primary dictionary, falling back to the extended one when
    /// nothing in the primary dictionary survives
    #[must_use]
    pub fn candidates(&self) -> (Vec<&'a Word>, DictionarySource) {
        let primary = filter_candidates(self.primary, self.log.as_slice());
        if !primary.is_empty() {
            return (primary, DictionarySource::Primary);
        }

        let extended = filter_candidates(self.extended, self.log.as_slice());
        warn!(
            "no primary word fits {} constraint(s), using extended dictionary ({} candidates)",
            self.log.len(),
            extended.len()
        );
        (extended, DictionarySource::Extended)
    }

    /// Dictionary backing a candidate source
    #[must_use]
    pub const fn dictionary(&self, source: DictionarySource) -> &'a [Word] {
        match source {
            DictionarySource::Primary => self.primary,
            DictionarySource::Extended => self.extended,
        }
    }

    /// Analysis for the current log, recomputed only when the log changed
    pub fn analysis(&mut self) -> &Analysis<'a> {
        let key = self.log.fingerprint();
        let analysis = match self.cache.take() {
            Some((cached, analysis)) if cached == key => {
                debug!("analysis cache hit ({key:016x})");
                analysis
            }
            _ => self.compute(),
        };
        &self.cache.insert((key, analysis)).1
    }

    /// Whether [`Advisor::analysis`] would return a cached value
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cache
            .as_ref()
            .is_some_and(|(key, _)| *key == self.log.fingerprint())
    }

    /// The single guess to play next
    ///
    /// The last candidate when only one is left, otherwise the top suggestion,
    /// then the top best guess, then the [`Advisor::opening_guess`]. In a
    /// pattern trap a probe word replaces the suggestion when it is expected
    /// to leave strictly fewer candidates. `None` when no word fits the log.
    pub fn next_guess(&mut self) -> Option<&'a Word> {
        let analysis = self.analysis();
        match analysis.candidates.as_slice() {
            [] => return None,
            [only] => return Some(*only),
            _ => {}
        }
        if let Some(top) = analysis.suggestions.first() {
            let probe = analysis
                .pattern_breakers
                .iter()
                .filter(|b| b.expected_remaining < top.expected_remaining)
                .min_by(|a, b| a.expected_remaining.total_cmp(&b.expected_remaining));
            return Some(probe.map_or(top.word, |b| b.word));
        }
        if let Some(top) = analysis.best_guesses.first() {
            return Some(top.word);
        }
        self.opening_guess()
    }

    /// Highest raw coverage word of the active dictionary
    ///
    /// Used when the candidate set is too large for the scored rankings,
    /// which includes the first guess of a game.
    pub fn opening_guess(&mut self) -> Option<&'a Word> {
        let analysis = self.analysis();
        let source = analysis.source;
        let known = analysis.known_letters;
        let weights = analysis.statistics.coverage_weights;
        rank_by_coverage(self.dictionary(source), &weights, known, 1)
            .into_iter()
            .next()
    }

    fn compute(&self) -> Analysis<'a> {
        let start = Instant::now();
        let (candidates, source) = self.candidates();
        let dictionary = self.dictionary(source);
        let turn = self.log.turn();
        let known_letters = self.log.known_letters();

        let statistics = compute_letter_statistics(&candidates, known_letters);
        let suggestions = suggest_guesses(&candidates, dictionary, turn, known_letters, &self.config);
        let best_guesses = best_guesses(&candidates, &self.config);
        let info_words = info_gathering_words(&candidates, dictionary, known_letters, &self.config);
        let trap = detect_pattern_trap(&candidates);
        let pattern_breakers = find_pattern_breakers(&candidates, dictionary, &trap);

        debug!(
            "analysis for turn {turn}: {} candidates from {source} dictionary in {:.1?}",
            candidates.len(),
            start.elapsed()
        );

        Analysis {
            turn,
            phase: GamePhase::from_turn(turn),
            source,
            known_letters,
            suggestions_available: self.config.suggestions_available(candidates.len()),
            best_guesses_available: self.config.best_guesses_available(candidates.len()),
            candidates,
            statistics,
            suggestions,
            best_guesses,
            info_words,
            trap,
            pattern_breakers,
        }
    }
}

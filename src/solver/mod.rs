//! Decision support
//!
//! Candidate filtering, letter statistics, guess scoring and pattern trap
//! detection, tied together by the [`Advisor`] session.

mod advisor;
pub mod config;
pub mod filter;
pub mod scoring;
pub mod statistics;
pub mod trap;

pub use advisor::{Advisor, Analysis, DictionarySource};
pub use config::{GamePhase, PhaseOverride, PhaseWeights, ScoringConfig, WeightsParseError};
pub use filter::filter_candidates;
pub use scoring::{
    BestGuess, InfoWord, PartitionMetrics, SuggestionRecord, best_guesses, calculate_metrics,
    info_gathering_words, suggest_guesses,
};
pub use statistics::{LetterFrequency, LetterStatistics, compute_letter_statistics};
pub use trap::{PatternBreaker, PatternTrapInfo, detect_pattern_trap, find_pattern_breakers};

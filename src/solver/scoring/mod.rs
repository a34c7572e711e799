//! Guess scoring
//!
//! Partition metrics are the shared primitive. Suggestions, best guesses and
//! information-gathering words are three rankings built on top of them.

mod best;
mod info;
mod partition;
mod suggest;

pub use best::{BestGuess, best_guesses};
pub use info::{InfoWord, info_gathering_words};
pub use partition::{PartitionMetrics, calculate_metrics, expected_remaining, group_by_pattern};
pub use suggest::{SuggestionRecord, rank_by_coverage, suggest_guesses};

//! Guess analysis command
//!
//! Partition metrics of one guess against the current candidate set.

use super::CommandError;
use crate::core::{Pattern, Word};
use crate::solver::scoring::{PartitionMetrics, calculate_metrics, group_by_pattern};
use crate::solver::{Advisor, DictionarySource};

/// Result of analyzing a guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub metrics: PartitionMetrics,
    pub total_candidates: usize,
    pub source: DictionarySource,
    /// The guess is itself a remaining candidate
    pub could_be_answer: bool,
    /// Feedback buckets, largest first
    pub buckets: Vec<(Pattern, usize)>,
}

/// Analyze how `word` would split the advisor's current candidates
///
/// The word only needs to be a well-formed guess; it does not have to be in
/// either dictionary.
///
/// # Errors
///
/// Returns an error if the word is not 5 ASCII letters.
pub fn analyze_guess(word: &str, advisor: &mut Advisor<'_>) -> Result<GuessAnalysis, CommandError> {
    let guess = Word::new(word)?;
    let analysis = advisor.analysis();
    let candidates = &analysis.candidates;

    let metrics = calculate_metrics(&guess, candidates);
    let mut buckets: Vec<(Pattern, usize)> = group_by_pattern(&guess, candidates).into_iter().collect();
    buckets.sort_by(|(pa, sa), (pb, sb)| sb.cmp(sa).then(pa.value().cmp(&pb.value())));

    Ok(GuessAnalysis {
        could_be_answer: candidates.iter().any(|&c| *c == guess),
        total_candidates: candidates.len(),
        source: analysis.source,
        word: guess,
        metrics,
        buckets,
    })
}

/// Feedback a guess would receive against a known answer
///
/// # Errors
///
/// Returns an error if either word is not 5 ASCII letters.
pub fn score_feedback(guess: &str, answer: &str) -> Result<Pattern, CommandError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(Pattern::calculate(&guess, &answer))
}

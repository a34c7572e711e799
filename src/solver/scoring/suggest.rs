//! Blended suggestion scoring
//!
//! Ranks guesses by a phase-weighted mix of expected elimination, whether the
//! guess could itself be the answer, and how many untested letters it covers.

use super::partition::calculate_metrics;
use crate::core::{LetterSet, Word};
use crate::solver::config::{GamePhase, ScoringConfig};
use crate::solver::statistics::{LetterCounts, coverage_score, coverage_weights};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;

/// One ranked guess
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRecord<'a> {
    pub word: &'a Word,
    /// Expected share of candidates removed by this guess
    pub elimination_fraction: f64,
    /// Expected candidates left, `Σ s² / n`
    pub expected_remaining: f64,
    /// The guess is itself a remaining candidate
    pub answer_flag: bool,
    /// Sum of coverage weights of the guess's untested letters
    pub coverage_score: usize,
    /// `coverage_score` min-max normalized over the scored pool
    pub coverage_component: f64,
    pub blended_score: f64,
}

/// Rank next guesses for the current candidate set
///
/// Returns at most `config.max_suggestions` records, best first. The result is
/// empty when there are fewer than two or more than
/// `config.max_suggestion_candidates` candidates; use
/// [`ScoringConfig::suggestions_available`] to tell that apart from an empty ranking.
///
/// Small candidate sets score only the candidates. Larger ones score the
/// dictionary's best coverage words plus every candidate.
#[must_use]
pub fn suggest_guesses<'a>(
    candidates: &[&'a Word],
    dictionary: &'a [Word],
    turn: usize,
    known: LetterSet,
    config: &ScoringConfig,
) -> Vec<SuggestionRecord<'a>> {
    let n = candidates.len();
    if !config.suggestions_available(n) {
        debug!("suggestions skipped for {n} candidates");
        return Vec::new();
    }

    let start = Instant::now();
    let phase = GamePhase::from_turn(turn);
    let weights = config.weights(phase);
    let coverage = coverage_weights(candidates, known);
    let pool = build_pool(candidates, dictionary, &coverage, known, config);
    let candidate_set: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();

    // Partition every pool word against the candidates (parallelized)
    let scored: Vec<_> = pool
        .par_iter()
        .map(|&guess| {
            let metrics = calculate_metrics(guess, candidates);
            let answer_flag = candidate_set.contains(guess.text());
            let coverage_score = coverage_score(guess, &coverage, known);
            (guess, metrics, answer_flag, coverage_score)
        })
        .collect();

    let min_coverage = scored.iter().map(|s| s.3).min().unwrap_or(0);
    let max_coverage = scored.iter().map(|s| s.3).max().unwrap_or(0);

    let mut records: Vec<SuggestionRecord<'a>> = scored
        .into_iter()
        .map(|(word, metrics, answer_flag, coverage_score)| {
            let coverage_component = normalize(coverage_score, min_coverage, max_coverage);
            let penalty = if word.has_repeated_letters() {
                weights.duplicate_penalty
            } else {
                0.0
            };
            let answer = if answer_flag { weights.answer } else { 0.0 };
            let blended_score = weights.elimination * metrics.elimination_fraction
                + weights.coverage * coverage_component
                + answer
                - penalty;

            SuggestionRecord {
                word,
                elimination_fraction: metrics.elimination_fraction,
                expected_remaining: metrics.expected_remaining,
                answer_flag,
                coverage_score,
                coverage_component,
                blended_score,
            }
        })
        .collect();

    records.sort_by(|a, b| {
        b.blended_score
            .total_cmp(&a.blended_score)
            .then_with(|| a.word.cmp(b.word))
    });
    records.truncate(config.max_suggestions);

    debug!(
        "scored {} guesses against {n} candidates ({phase} phase) in {:.1?}",
        pool.len(),
        start.elapsed()
    );

    records
}

/// Dictionary words ordered by raw coverage score, best first, ties alphabetical
#[must_use]
pub fn rank_by_coverage<'a>(
    dictionary: &'a [Word],
    coverage: &LetterCounts,
    known: LetterSet,
    limit: usize,
) -> Vec<&'a Word> {
    let mut ranked: Vec<(&'a Word, usize)> = dictionary
        .iter()
        .map(|word| (word, coverage_score(word, coverage, known)))
        .collect();
    ranked.sort_by(|(wa, sa), (wb, sb)| sb.cmp(sa).then_with(|| wa.cmp(wb)));
    ranked.into_iter().take(limit).map(|(word, _)| word).collect()
}

/// Words to score: the candidates alone when few remain, otherwise the top
/// coverage words with every candidate added back
fn build_pool<'a>(
    candidates: &[&'a Word],
    dictionary: &'a [Word],
    coverage: &LetterCounts,
    known: LetterSet,
    config: &ScoringConfig,
) -> Vec<&'a Word> {
    if candidates.len() <= config.small_pool_threshold {
        return candidates.to_vec();
    }

    let mut pool = rank_by_coverage(dictionary, coverage, known, config.coverage_pool_size);
    let mut seen: FxHashSet<&str> = pool.iter().map(|w| w.text()).collect();
    for &candidate in candidates {
        if seen.insert(candidate.text()) {
            pool.push(candidate);
        }
    }
    pool
}

fn normalize(value: usize, min: usize, max: usize) -> f64 {
    if max == min {
        return 0.5;
    }
    (value - min) as f64 / (max - min) as f64
}

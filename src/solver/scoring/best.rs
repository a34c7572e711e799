//! Best guesses among the remaining candidates
//!
//! Unlike [`super::suggest_guesses`] this only considers words that can still
//! win, ranked purely by expected remaining candidates.

use super::partition::calculate_metrics;
use crate::core::Word;
use crate::solver::config::ScoringConfig;
use rayon::prelude::*;

/// A candidate ranked by how well it narrows the others
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestGuess<'a> {
    pub word: &'a Word,
    pub expected_remaining: f64,
    pub elimination_fraction: f64,
}

/// Rank candidates by expected remaining candidates, lowest first
///
/// Empty when there are fewer than two or more than
/// `config.max_best_guess_candidates` candidates.
#[must_use]
pub fn best_guesses<'a>(candidates: &[&'a Word], config: &ScoringConfig) -> Vec<BestGuess<'a>> {
    if !config.best_guesses_available(candidates.len()) {
        return Vec::new();
    }

    let mut ranked: Vec<BestGuess<'a>> = candidates
        .par_iter()
        .map(|&word| {
            let metrics = calculate_metrics(word, candidates);
            BestGuess {
                word,
                expected_remaining: metrics.expected_remaining,
                elimination_fraction: metrics.elimination_fraction,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.expected_remaining
            .total_cmp(&b.expected_remaining)
            .then_with(|| a.word.cmp(b.word))
    });
    ranked.truncate(config.max_best_guesses);
    ranked
}

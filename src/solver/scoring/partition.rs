//! Feedback partition metrics
//!
//! Given a guess and a candidate set, bucket the candidates by the pattern the
//! guess would produce against each of them. Bucket sizes drive every
//! elimination estimate in the crate.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Metrics describing how a guess splits the candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionMetrics {
    /// Expected number of candidates left after the guess, `Σ s² / n`
    pub expected_remaining: f64,
    /// `(n - expected_remaining) / n`
    pub elimination_fraction: f64,
    /// Largest bucket (worst case)
    pub max_partition: usize,
    /// Number of distinct patterns
    pub bucket_count: usize,
    /// Shannon entropy in bits, reported only
    pub entropy: f64,
}

impl PartitionMetrics {
    const EMPTY: Self = Self {
        expected_remaining: 0.0,
        elimination_fraction: 0.0,
        max_partition: 0,
        bucket_count: 0,
        entropy: 0.0,
    };
}

/// Group candidates by the pattern they produce with the guess
#[must_use]
pub fn group_by_pattern(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Expected candidates remaining after `guess`, assuming every candidate is equally likely
///
/// # Examples
/// ```
/// use wordle_assistant::core::Word;
/// use wordle_assistant::solver::scoring::expected_remaining;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = [Word::new("slate").unwrap(), Word::new("zzzzz").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// // Two singleton buckets: (1 + 1) / 2
/// assert!((expected_remaining(&guess, &refs) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn expected_remaining(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let sum_of_squares: usize = group_by_pattern(guess, candidates)
        .values()
        .map(|&size| size * size)
        .sum();
    sum_of_squares as f64 / candidates.len() as f64
}

/// Calculate every partition metric for a guess
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> PartitionMetrics {
    if candidates.is_empty() {
        return PartitionMetrics::EMPTY;
    }

    let buckets = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let sum_of_squares: usize = buckets.values().map(|&size| size * size).sum();
    let expected_remaining = sum_of_squares as f64 / total;

    let entropy: f64 = buckets
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            -p * p.log2()
        })
        .sum();

    PartitionMetrics {
        expected_remaining,
        elimination_fraction: (total - expected_remaining) / total,
        max_partition: buckets.values().copied().max().unwrap_or(0),
        bucket_count: buckets.len(),
        entropy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn all_same_pattern_eliminates_nothing() {
        let guess = Word::new("zzzzz").unwrap();
        let owned = words(&["aaaaa", "bbbbb", "ccccc"]);
        let candidates: Vec<&Word> = owned.iter().collect();

        let metrics = calculate_metrics(&guess, &candidates);
        assert_eq!(metrics.bucket_count, 1);
        assert_eq!(metrics.max_partition, 3);
        assert!((metrics.expected_remaining - 3.0).abs() < 1e-9);
        assert!(metrics.elimination_fraction.abs() < 1e-9);
        assert!(metrics.entropy.abs() < 1e-9);
    }

    #[test]
    fn perfect_split() {
        let guess = Word::new("slate").unwrap();
        let owned = words(&["slate", "zzzzz"]);
        let candidates: Vec<&Word> = owned.iter().collect();

        let metrics = calculate_metrics(&guess, &candidates);
        assert_eq!(metrics.bucket_count, 2);
        assert_eq!(metrics.max_partition, 1);
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-9);
        assert!((metrics.elimination_fraction - 0.5).abs() < 1e-9);
        assert!((metrics.entropy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn uneven_split_sum_of_squares() {
        // CRANE against these: slate/plate/elate share --G-G, crate is distinct
        let guess = Word::new("crane").unwrap();
        let owned = words(&["slate", "plate", "elate", "crate"]);
        let candidates: Vec<&Word> = owned.iter().collect();

        let groups = group_by_pattern(&guess, &candidates);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.values().sum::<usize>(), 4);

        // (3² + 1²) / 4 = 2.5
        let metrics = calculate_metrics(&guess, &candidates);
        assert!((metrics.expected_remaining - 2.5).abs() < 1e-9);
        assert!((metrics.elimination_fraction - 0.375).abs() < 1e-9);
        assert!((expected_remaining(&guess, &candidates) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn empty_candidates() {
        let guess = Word::new("crane").unwrap();
        let metrics = calculate_metrics(&guess, &[]);
        assert_eq!(metrics, PartitionMetrics::EMPTY);
        assert!(expected_remaining(&guess, &[]).abs() < f64::EPSILON);
    }
}

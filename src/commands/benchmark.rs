//! Benchmark command
//!
//! Simulates the advisor over a random sample of primary words.

use super::CommandError;
use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::ScoringConfig;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Benchmark parameters
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Answers to sample from the primary dictionary
    pub count: usize,
    /// Fixed seed for a reproducible sample
    pub seed: Option<u64>,
    pub first_word: Option<String>,
    pub max_guesses: usize,
    pub scoring: ScoringConfig,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 50,
            seed: None,
            first_word: None,
            max_guesses: 6,
            scoring: ScoringConfig::default(),
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Answers not found within the guess limit
    pub failed_words: Vec<String>,
    /// Guesses summed over solved games
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by guess count
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the advisor against `config.count` random answers
///
/// # Errors
///
/// Returns an error if the forced first word is malformed.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    primary: &[Word],
    extended: &[Word],
) -> Result<BenchmarkResult, CommandError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let targets: Vec<&Word> = primary.choose_multiple(&mut rng, config.count).collect();
    info!(
        "benchmarking {} answers (seed {:?})",
        targets.len(),
        config.seed
    );

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut failed_words = Vec::new();
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for target in &targets {
        let solve_config = SolveConfig {
            target: target.text().to_string(),
            first_word: config.first_word.clone(),
            max_guesses: config.max_guesses,
            scoring: config.scoring.clone(),
        };
        let result = solve_word(&solve_config, primary, extended)?;

        if result.success {
            let guesses = result.guesses.len();
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        } else {
            failed_words.push(result.target);
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed_words,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: if duration.as_secs_f64() > 0.0 {
            total_words as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&[
            "slate", "plate", "crane", "trace", "crate", "grace", "brace", "skate", "spate",
            "state", "elate", "fuzzy", "chomp", "blimp", "batch", "watch",
        ])
    }

    fn quiet(count: usize, seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            seed: Some(seed),
            show_progress: false,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn benchmark_runs() {
        let words = dictionary();
        let result = run_benchmark(&quiet(8, 7), &words, &words).unwrap();

        assert_eq!(result.total_words, 8);
        assert_eq!(result.solved + result.failed_words.len(), 8);
        assert!(result.average_guesses >= 1.0);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn distribution_sums_to_solved() {
        let words = dictionary();
        let result = run_benchmark(&quiet(10, 1), &words, &words).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let words = dictionary();
        let a = run_benchmark(&quiet(5, 42), &words, &words).unwrap();
        let b = run_benchmark(&quiet(5, 42), &words, &words).unwrap();

        assert_eq!(a.total_guesses, b.total_guesses);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn sample_capped_at_dictionary_size() {
        let words = dictionary();
        let result = run_benchmark(&quiet(100, 3), &words, &words).unwrap();
        assert_eq!(result.total_words, words.len());
    }

    #[test]
    fn empty_dictionary() {
        let words: Vec<Word> = Vec::new();
        let result = run_benchmark(&quiet(5, 3), &words, &words).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn bad_first_word_is_an_error() {
        let words = dictionary();
        let config = BenchmarkConfig {
            first_word: Some("toolong".to_string()),
            ..quiet(2, 3)
        };
        assert!(run_benchmark(&config, &words, &words).is_err());
    }
}

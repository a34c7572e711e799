//! Game simulation command
//!
//! Plays the advisor's own recommendations against a known answer.

use super::CommandError;
use crate::core::{Constraint, Pattern, Word};
use crate::solver::scoring::expected_remaining;
use crate::solver::{Advisor, DictionarySource, ScoringConfig};

/// Configuration for simulating one game
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    /// Played as the first guess instead of the advisor's opening
    pub first_word: Option<String>,
    pub max_guesses: usize,
    pub scoring: ScoringConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            first_word: None,
            max_guesses: 6,
            scoring: ScoringConfig::default(),
        }
    }
}

/// Result of simulating a game
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess in the simulation
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected candidates left, only when more than one remained
    pub expected_remaining: Option<f64>,
    pub source: DictionarySource,
}

/// Simulate a game with the advisor choosing every guess
///
/// # Errors
///
/// Returns an error if:
/// - The target or forced first word is not 5 ASCII letters
/// - The target is in neither dictionary
pub fn solve_word(
    config: &SolveConfig,
    primary: &[Word],
    extended: &[Word],
) -> Result<SolveResult, CommandError> {
    let target = Word::new(&config.target)?;
    if !extended.contains(&target) && !primary.contains(&target) {
        return Err(CommandError::UnknownWord(config.target.clone()));
    }
    let first_word = config.first_word.as_deref().map(Word::new).transpose()?;

    let mut advisor = Advisor::new(primary, extended).with_config(config.scoring.clone());
    let mut guesses = Vec::new();

    for turn in 1..=config.max_guesses {
        let analysis = advisor.analysis();
        let candidates_before = analysis.candidate_count();
        let source = analysis.source;
        let expected = (candidates_before > 1).then(|| analysis.candidates.clone());

        let guess = match (&first_word, turn) {
            (Some(forced), 1) => forced.clone(),
            _ => match advisor.next_guess() {
                Some(word) => word.clone(),
                None => break,
            },
        };

        let expected_remaining = expected.map(|candidates| expected_remaining(&guess, &candidates));
        let pattern = Pattern::calculate(&guess, &target);
        advisor.add(Constraint::new(guess.clone(), pattern));
        let candidates_after = advisor.analysis().candidate_count();

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
            expected_remaining,
            source,
        });

        if pattern.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const ATCH: &[&str] = &[
        "batch", "catch", "hatch", "latch", "match", "patch", "watch", "blimp", "chomp",
    ];

    fn dictionary() -> Vec<Word> {
        words_from_slice(&[
            "slate", "plate", "crane", "trace", "crate", "grace", "brace", "skate", "spate",
            "state", "elate", "fuzzy",
        ])
    }

    #[test]
    fn solve_word_succeeds() {
        let words = dictionary();
        let config = SolveConfig::new("plate".to_string());

        let result = solve_word(&config, &words, &words).unwrap();
        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().word, "plate");
        assert!(result.guesses.len() <= 6);
    }

    #[test]
    fn candidates_never_grow() {
        let words = dictionary();
        let config = SolveConfig::new("grace".to_string());

        let result = solve_word(&config, &words, &words).unwrap();
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn forced_first_word_is_played() {
        let words = dictionary();
        let mut config = SolveConfig::new("elate".to_string());
        config.first_word = Some("CRANE".to_string());

        let result = solve_word(&config, &words, &words).unwrap();
        assert_eq!(result.guesses[0].word, "crane");
        assert_eq!(result.guesses[0].pattern.to_string(), "--G-G");
        assert!(result.success);
    }

    #[test]
    fn trap_family_solved_within_limit() {
        let words = words_from_slice(ATCH);
        let config = SolveConfig::new("watch".to_string());

        let result = solve_word(&config, &words, &words).unwrap();
        assert!(result.success);
    }

    #[test]
    fn max_guesses_respected() {
        let words = dictionary();
        let mut config = SolveConfig::new("fuzzy".to_string());
        config.max_guesses = 1;
        config.first_word = Some("crane".to_string());

        let result = solve_word(&config, &words, &words).unwrap();
        assert_eq!(result.guesses.len(), 1);
        assert!(!result.success);
    }

    #[test]
    fn unknown_target_returns_error() {
        let words = dictionary();
        let config = SolveConfig::new("zzzzz".to_string());

        assert!(matches!(
            solve_word(&config, &words, &words),
            Err(CommandError::UnknownWord(_))
        ));
        let config = SolveConfig::new("abc".to_string());
        assert!(matches!(
            solve_word(&config, &words, &words),
            Err(CommandError::Word(_))
        ));
    }

    #[test]
    fn falls_back_to_extended_target() {
        let primary = words_from_slice(&["slate", "plate", "crane"]);
        let extended = words_from_slice(&["slate", "plate", "crane", "fuzzy"]);
        let mut config = SolveConfig::new("fuzzy".to_string());
        config.first_word = Some("crane".to_string());

        let result = solve_word(&config, &primary, &extended).unwrap();
        assert!(result.success);
        assert_eq!(result.guesses[1].source, DictionarySource::Extended);
    }
}

//! Scoring configuration
//!
//! Phase weights and the size ceilings that keep scoring interactive.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stage of the game, derived from the turn number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Turns 1-2: favour elimination and letter coverage
    Early,
    /// Turns 3-4
    Mid,
    /// Turn 5 onwards: favour guesses that can win
    Late,
}

impl GamePhase {
    /// Phase for a 1-based turn number (guesses already made + 1)
    #[must_use]
    pub const fn from_turn(turn: usize) -> Self {
        match turn {
            0..=2 => Self::Early,
            3..=4 => Self::Mid,
            _ => Self::Late,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Mid => "mid",
            Self::Late => "late",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GamePhase {
    type Err = WeightsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "early" => Ok(Self::Early),
            "mid" => Ok(Self::Mid),
            "late" => Ok(Self::Late),
            other => Err(WeightsParseError::UnknownPhase(other.to_string())),
        }
    }
}

/// Weight profile for one game phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseWeights {
    /// Multiplier for the expected elimination fraction
    pub elimination: f64,
    /// Bonus for guesses that could be the answer
    pub answer: f64,
    /// Multiplier for the normalized coverage score
    pub coverage: f64,
    /// Subtracted from guesses with a repeated letter
    pub duplicate_penalty: f64,
}

impl PhaseWeights {
    #[must_use]
    pub const fn new(elimination: f64, answer: f64, coverage: f64, duplicate_penalty: f64) -> Self {
        Self {
            elimination,
            answer,
            coverage,
            duplicate_penalty,
        }
    }
}

/// Error returned by the weight parsers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsParseError {
    #[error("expected 4 comma-separated weights (elimination,answer,coverage,penalty), got {0}")]
    WrongCount(usize),
    #[error("invalid weight '{0}'")]
    InvalidNumber(String),
    #[error("unknown phase '{0}' (use early, mid or late)")]
    UnknownPhase(String),
    #[error("expected PHASE=WEIGHTS, got '{0}'")]
    MissingPhase(String),
}

impl FromStr for PhaseWeights {
    type Err = WeightsParseError;

    /// Parse `elimination,answer,coverage,penalty`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| WeightsParseError::InvalidNumber(part.trim().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values[..] {
            [elimination, answer, coverage, penalty] => {
                Ok(Self::new(elimination, answer, coverage, penalty))
            }
            _ => Err(WeightsParseError::WrongCount(values.len())),
        }
    }
}

/// Per-phase weight override, parsed from `PHASE=E,A,C,P`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseOverride {
    pub phase: GamePhase,
    pub weights: PhaseWeights,
}

impl FromStr for PhaseOverride {
    type Err = WeightsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (phase, weights) = s
            .split_once('=')
            .ok_or_else(|| WeightsParseError::MissingPhase(s.to_string()))?;
        Ok(Self {
            phase: phase.parse()?,
            weights: weights.parse()?,
        })
    }
}

/// Tunable parameters of the suggestion engine
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub early: PhaseWeights,
    pub mid: PhaseWeights,
    pub late: PhaseWeights,
    /// Suggestions are skipped above this many candidates
    pub max_suggestion_candidates: usize,
    /// At or below this many candidates only the candidates are scored
    pub small_pool_threshold: usize,
    /// Dictionary words kept by the coverage pre-ranking
    pub coverage_pool_size: usize,
    pub max_suggestions: usize,
    /// Best guesses are skipped above this many candidates
    pub max_best_guess_candidates: usize,
    pub max_best_guesses: usize,
    /// Untested letters considered for info-gathering words
    pub info_letter_count: usize,
    /// Minimum number of those letters an info-gathering word must contain
    pub info_min_matches: usize,
    pub max_info_words: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            early: PhaseWeights::new(1.0, 0.3, 0.4, 0.25),
            mid: PhaseWeights::new(0.8, 0.7, 0.3, 0.15),
            late: PhaseWeights::new(0.4, 1.0, 0.15, 0.05),
            max_suggestion_candidates: 300,
            small_pool_threshold: 40,
            coverage_pool_size: 120,
            max_suggestions: 10,
            max_best_guess_candidates: 150,
            max_best_guesses: 8,
            info_letter_count: 10,
            info_min_matches: 3,
            max_info_words: 8,
        }
    }
}

impl ScoringConfig {
    /// Weights for the given phase
    #[must_use]
    pub const fn weights(&self, phase: GamePhase) -> PhaseWeights {
        match phase {
            GamePhase::Early => self.early,
            GamePhase::Mid => self.mid,
            GamePhase::Late => self.late,
        }
    }

    /// Replace the weights of one phase
    pub const fn set_weights(&mut self, phase: GamePhase, weights: PhaseWeights) {
        match phase {
            GamePhase::Early => self.early = weights,
            GamePhase::Mid => self.mid = weights,
            GamePhase::Late => self.late = weights,
        }
    }

    /// Apply a list of overrides in order
    #[must_use]
    pub fn with_overrides(mut self, overrides: &[PhaseOverride]) -> Self {
        for o in overrides {
            self.set_weights(o.phase, o.weights);
        }
        self
    }

    /// Whether suggestions are computed for `candidates` remaining words
    ///
    /// `false` means "not computed", never "no good guesses".
    #[must_use]
    pub const fn suggestions_available(&self, candidates: usize) -> bool {
        candidates > 1 && candidates <= self.max_suggestion_candidates
    }

    /// Whether best guesses are computed for `candidates` remaining words
    #[must_use]
    pub const fn best_guesses_available(&self, candidates: usize) -> bool {
        candidates > 1 && candidates <= self.max_best_guess_candidates
    }
}

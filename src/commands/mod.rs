//! Command implementations
//!
//! Thin drivers around the [`Advisor`](crate::solver::Advisor). Printing lives in
//! [`crate::output`].

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{GuessAnalysis, analyze_guess, score_feedback};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlayCommand, parse_play_command, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};

use crate::core::{Constraint, ConstraintParseError, LogError, PatternParseError, WordError};
use std::io;
use thiserror::Error;

/// Errors surfaced by the command drivers
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid word: {0}")]
    Word(#[from] WordError),

    #[error("invalid feedback: {0}")]
    Pattern(#[from] PatternParseError),

    #[error("invalid constraint: {0}")]
    Constraint(#[from] ConstraintParseError),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("'{0}' is not in the dictionary")]
    UnknownWord(String),

    #[error("unrecognized input '{0}' (type 'help' for commands)")]
    UnknownCommand(String),
}

/// Parse `guess:pattern` arguments in order
///
/// # Errors
///
/// Returns the first constraint that fails to parse.
pub fn parse_constraints<S: AsRef<str>>(args: &[S]) -> Result<Vec<Constraint>, CommandError> {
    args.iter()
        .map(|arg| arg.as_ref().parse::<Constraint>().map_err(CommandError::from))
        .collect()
}

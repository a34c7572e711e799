//! Core domain types for Wordle
//!
//! Words, marks, feedback patterns and the constraint log. Everything here is
//! pure and independent of the solver.

mod constraint;
mod letters;
mod mark;
mod pattern;
mod word;

pub use constraint::{Constraint, ConstraintLog, ConstraintParseError, LogError};
pub use letters::LetterSet;
pub use mark::Mark;
pub use pattern::{Pattern, PatternParseError};
pub use word::{WORD_LENGTH, Word, WordError};

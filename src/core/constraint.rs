//! Guess constraints and the ordered constraint log
//!
//! A constraint is one observed (guess, pattern) pair. The log keeps them in the
//! order they were played and is the only mutable state of a session.

use super::{LetterSet, Pattern, PatternParseError, Word, WordError};
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

/// A guess together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    guess: Word,
    pattern: Pattern,
}

/// Error returned when parsing `"crane:--g-g"` style constraints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintParseError {
    #[error("expected GUESS:PATTERN, got '{0}'")]
    MissingSeparator(String),
    #[error("invalid guess: {0}")]
    Word(#[from] WordError),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternParseError),
}

impl Constraint {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// The constraint `answer` would produce for `guess`
    #[must_use]
    pub fn observed(guess: Word, answer: &Word) -> Self {
        let pattern = Pattern::calculate(&guess, answer);
        Self { guess, pattern }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// True if `word` could be the answer given this constraint
    ///
    /// This is feedback equivalence: scoring the guess against `word` must
    /// reproduce the observed pattern exactly.
    #[inline]
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        Pattern::calculate(&self.guess, word) == self.pattern
    }
}

impl FromStr for Constraint {
    type Err = ConstraintParseError;

    /// Parse `GUESS:PATTERN` (`=` also works as separator)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, pattern) = s
            .split_once([':', '='])
            .ok_or_else(|| ConstraintParseError::MissingSeparator(s.to_string()))?;

        Ok(Self::new(Word::new(guess)?, Pattern::parse(pattern)?))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guess, self.pattern)
    }
}

/// Error type for log mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    #[error("no guess at index {index} (log holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered log of constraints
///
/// Supports append, removal of a specific entry, and reset. Everything else in
/// the engine is derived from its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConstraintLog {
    entries: Vec<Constraint>,
}

impl ConstraintLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, constraint: Constraint) {
        self.entries.push(constraint);
    }

    /// Remove the constraint at `index` (undo a specific guess)
    ///
    /// # Errors
    /// Returns `LogError::IndexOutOfRange` if no such entry exists.
    pub fn remove(&mut self, index: usize) -> Result<Constraint, LogError> {
        if index >= self.entries.len() {
            return Err(LogError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Remove the most recent constraint
    pub fn pop(&mut self) -> Option<Constraint> {
        self.entries.pop()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Constraint] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.entries.iter()
    }

    /// Turn number of the next guess (1-based)
    #[must_use]
    pub fn turn(&self) -> usize {
        self.entries.len() + 1
    }

    /// Every letter that appeared in any guess, whatever its mark
    #[must_use]
    pub fn known_letters(&self) -> LetterSet {
        self.entries
            .iter()
            .fold(LetterSet::EMPTY, |acc, c| acc.union(c.guess.letters()))
    }

    /// Content hash used to memoize derived results
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.entries.hash(&mut hasher);
        hasher.finish()
    }
}

impl Extend<Constraint> for ConstraintLog {
    fn extend<I: IntoIterator<Item = Constraint>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<Constraint> for ConstraintLog {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConstraintLog {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

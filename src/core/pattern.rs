//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the five marks of a guess using base-3 encoding:
//! - 0 = Gray (no unclaimed occurrence left)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::letters::letter_index;
use super::word::WORD_LENGTH;
use super::{Mark, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback pattern for a Wordle guess
///
/// Represents the five marks as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternParseError {
    #[error("pattern must have exactly 5 marks, got {0}")]
    InvalidLength(usize),
    #[error("invalid mark '{0}' (use G, Y or -)")]
    InvalidMark(char),
}

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Pack five marks into a pattern
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            pattern += mark.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Unpack the five marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Gray; WORD_LENGTH];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches green; the matched answer letters are consumed
    /// 2. Second pass: left to right, each remaining guess letter claims one unconsumed
    ///    occurrence in the answer (yellow) or gets gray when none is left
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Mark, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(
    ///     pattern.marks(),
    ///     [Mark::Gray, Mark::Gray, Mark::Green, Mark::Gray, Mark::Green]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Gray; WORD_LENGTH];
        let mut unclaimed = [0u8; 26];

        // First pass: greens, and a tally of the answer letters they leave behind
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                marks[i] = Mark::Green;
            } else {
                unclaimed[letter_index(a)] += 1;
            }
        }

        // Second pass: yellows claim from the leftover pool in guess order
        for (mark, &g) in marks.iter_mut().zip(guess.chars()) {
            if *mark == Mark::Green {
                continue;
            }
            let remaining = &mut unclaimed[letter_index(g)];
            if *remaining > 0 {
                *remaining -= 1;
                *mark = Mark::Yellow;
            }
        }

        Self::from_marks(marks)
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// See [`Mark::from_char`] for the accepted characters.
    ///
    /// # Errors
    /// Returns `PatternParseError` on a wrong mark count or an unknown character.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternParseError> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LENGTH {
            return Err(PatternParseError::InvalidLength(chars.len()));
        }

        let mut marks = [Mark::Gray; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = Mark::from_char(ch).ok_or(PatternParseError::InvalidMark(ch))?;
        }

        Ok(Self::from_marks(marks))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().iter().map(|m| m.emoji()).collect()
    }
}

impl FromStr for Pattern {
    type Err = PatternParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{mark}")?;
        }
        Ok(())
    }
}

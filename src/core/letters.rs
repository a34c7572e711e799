//! Compact letter sets
//!
//! A `LetterSet` stores any subset of `a..=z` in a 26-bit mask.

use std::fmt;

/// Index of a lowercase ASCII letter (`b'a'` is 0)
#[inline]
#[must_use]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// A set of lowercase ASCII letters
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build a set from the letters of a byte slice
    ///
    /// Bytes outside `a..=z` are ignored.
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        for &letter in letters {
            set.insert(letter);
        }
        set
    }

    /// Add a letter; bytes outside `a..=z` are ignored
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 |= 1 << letter_index(letter);
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterSet({self})")
    }
}

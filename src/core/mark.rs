//! Per-letter feedback marks

use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// No unclaimed occurrence of the letter remains in the answer
    Gray,
    /// Letter is in the answer, but not at this position
    Yellow,
    /// Letter is at this position in the answer
    Green,
}

impl Mark {
    /// Base-3 digit used by `Pattern`
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Gray => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    /// Inverse of [`Mark::digit`]
    ///
    /// Digits above 2 are treated as gray.
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Gray,
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/`.`/`x`/`b`/⬜/⬛ (either case).
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '.' | 'X' | 'x' | 'B' | 'b' | '⬜' | '⬛' => Some(Self::Gray),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Gray => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Gray => '-',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_roundtrip() {
        for mark in [Mark::Gray, Mark::Yellow, Mark::Green] {
            assert_eq!(Mark::from_digit(mark.digit()), mark);
        }
    }

    #[test]
    fn from_char_accepts_aliases() {
        assert_eq!(Mark::from_char('g'), Some(Mark::Green));
        assert_eq!(Mark::from_char('🟨'), Some(Mark::Yellow));
        assert_eq!(Mark::from_char('.'), Some(Mark::Gray));
        assert_eq!(Mark::from_char('B'), Some(Mark::Gray));
        assert_eq!(Mark::from_char('q'), None);
    }
}

//! Pattern trap detection
//!
//! A pattern trap is an endgame where most positions are settled and the
//! remaining candidates differ in only one or two slots (`_ATCH`, `_IGHT`).
//! Guessing candidates one at a time can burn every remaining turn, so the
//! detector proposes probe words that test many variable letters at once.

use super::scoring::expected_remaining;
use crate::core::{LetterSet, WORD_LENGTH, Word};
use log::debug;
use rustc_hash::FxHashSet;

/// Smallest candidate set that can be a trap
pub const TRAP_MIN_CANDIDATES: usize = 2;

/// Largest candidate set the detector examines
pub const TRAP_MAX_CANDIDATES: usize = 20;

/// Share of candidates (percent) the top letter needs for a locked position
pub const LOCKED_SHARE_PERCENT: usize = 80;

/// Most distinct letters a locked position may show
pub const LOCKED_MAX_DISTINCT: usize = 2;

/// Locked positions needed before the set counts as trapped
pub const MIN_LOCKED_POSITIONS: usize = 3;

/// Most variable positions a trapped set may have
pub const MAX_VARIABLE_POSITIONS: usize = 2;

/// Probe words returned by [`find_pattern_breakers`]
pub const MAX_PATTERN_BREAKERS: usize = 5;

/// Shape of a candidate set's shared skeleton
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternTrapInfo {
    pub is_trapped: bool,
    /// Positions settled on one letter, ascending
    pub locked_positions: Vec<usize>,
    /// Positions still in play, ascending
    pub variable_positions: Vec<usize>,
    /// Every letter seen at a variable position
    pub variable_letters: LetterSet,
}

/// A non-candidate word that tests several variable letters at once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternBreaker<'a> {
    pub word: &'a Word,
    /// Variable letters contained in the word
    pub matched_letters: LetterSet,
    /// Even-split estimate of candidates left: `ceil(n / (matched + 1))`
    pub narrows_to: usize,
    /// Exact expected candidates left, `Σ s² / n`
    pub expected_remaining: f64,
}

/// Classify each position as locked or variable and decide whether the set is trapped
///
/// Sets outside `2..=20` candidates are never examined and return the default
/// (untrapped, everything empty).
#[must_use]
pub fn detect_pattern_trap(candidates: &[&Word]) -> PatternTrapInfo {
    let n = candidates.len();
    if !(TRAP_MIN_CANDIDATES..=TRAP_MAX_CANDIDATES).contains(&n) {
        return PatternTrapInfo::default();
    }

    let mut info = PatternTrapInfo::default();

    for position in 0..WORD_LENGTH {
        let mut counts = [0usize; 26];
        for word in candidates {
            counts[(word.char_at(position) - b'a') as usize] += 1;
        }

        let distinct = counts.iter().filter(|&&count| count > 0).count();
        let top = counts.iter().copied().max().unwrap_or(0);

        if top * 100 >= n * LOCKED_SHARE_PERCENT && distinct <= LOCKED_MAX_DISTINCT {
            info.locked_positions.push(position);
        } else {
            info.variable_positions.push(position);
            for word in candidates {
                info.variable_letters.insert(word.char_at(position));
            }
        }
    }

    info.is_trapped = info.locked_positions.len() >= MIN_LOCKED_POSITIONS
        && (1..=MAX_VARIABLE_POSITIONS).contains(&info.variable_positions.len());

    if info.is_trapped {
        debug!(
            "pattern trap: {n} candidates, variable positions {:?}, letters {}",
            info.variable_positions, info.variable_letters
        );
    }

    info
}

/// Probe words that split a trapped candidate set
///
/// Scans `dictionary` for non-candidates containing at least
/// `min(2, |variable_letters|)` of the variable letters. Ranked by matched
/// letters, then alphabetically; at most [`MAX_PATTERN_BREAKERS`]. Empty when
/// the set is not trapped.
#[must_use]
pub fn find_pattern_breakers<'a>(
    candidates: &[&Word],
    dictionary: &'a [Word],
    trap: &PatternTrapInfo,
) -> Vec<PatternBreaker<'a>> {
    if !trap.is_trapped || candidates.is_empty() {
        return Vec::new();
    }

    let required = trap.variable_letters.len().min(2);
    let candidate_set: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();

    let mut probes: Vec<(&'a Word, LetterSet)> = dictionary
        .iter()
        .filter(|word| !candidate_set.contains(word.text()))
        .filter_map(|word| {
            let matched = word.letters().intersection(trap.variable_letters);
            (matched.len() >= required).then_some((word, matched))
        })
        .collect();

    probes.sort_by(|(wa, ma), (wb, mb)| mb.len().cmp(&ma.len()).then_with(|| wa.cmp(wb)));
    probes.truncate(MAX_PATTERN_BREAKERS);

    let n = candidates.len();
    probes
        .into_iter()
        .map(|(word, matched_letters)| PatternBreaker {
            word,
            matched_letters,
            narrows_to: n.div_ceil(matched_letters.len() + 1),
            expected_remaining: expected_remaining(word, candidates),
        })
        .collect()
}

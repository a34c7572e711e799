//! Letter statistics over a candidate set
//!
//! Per-position frequency tables and whole-word coverage weights. Coverage
//! only counts letters that have not been guessed yet, since re-testing a
//! known letter gains nothing.

use crate::core::{LetterSet, WORD_LENGTH, Word};

/// Entries kept per position in [`position_frequencies`]
pub const TOP_LETTERS_PER_POSITION: usize = 8;

/// A letter with its count and share of the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFrequency {
    pub letter: u8,
    pub count: usize,
    /// `round(count / candidates × 100)`, 0 for an empty set
    pub percentage: u32,
}

impl LetterFrequency {
    #[must_use]
    pub const fn letter_char(&self) -> char {
        self.letter as char
    }
}

/// Per-letter counts indexed by `letter - b'a'`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterCounts([usize; 26]);

impl LetterCounts {
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> usize {
        if letter.is_ascii_lowercase() {
            self.0[(letter - b'a') as usize]
        } else {
            0
        }
    }

    #[inline]
    fn increment(&mut self, letter: u8) {
        self.0[(letter - b'a') as usize] += 1;
    }

    /// Sum of the weights of the letters in `letters`
    #[must_use]
    pub fn score(&self, letters: LetterSet) -> usize {
        letters.iter().map(|letter| self.get(letter)).sum()
    }

    /// Letters with a non-zero count, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        (b'a'..=b'z')
            .map(|letter| (letter, self.get(letter)))
            .filter(|&(_, count)| count > 0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&count| count == 0)
    }
}

/// Everything the letter panel needs for one candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStatistics {
    pub position_frequencies: [Vec<LetterFrequency>; WORD_LENGTH],
    pub coverage_weights: LetterCounts,
    /// `coverage_weights` as a ranked list
    pub common_letters: Vec<LetterFrequency>,
}

/// Compute position tables, coverage weights and the common-letter ranking
#[must_use]
pub fn compute_letter_statistics(candidates: &[&Word], known: LetterSet) -> LetterStatistics {
    let coverage_weights = coverage_weights(candidates, known);
    LetterStatistics {
        position_frequencies: position_frequencies(candidates),
        common_letters: rank_counts(&coverage_weights, candidates.len()),
        coverage_weights,
    }
}

/// Letter frequencies for each of the five positions
///
/// Each table holds at most 8 letters, by count descending then alphabetically.
#[must_use]
pub fn position_frequencies(candidates: &[&Word]) -> [Vec<LetterFrequency>; WORD_LENGTH] {
    std::array::from_fn(|position| {
        let mut counts = LetterCounts::default();
        for word in candidates {
            counts.increment(word.char_at(position));
        }
        let mut ranked = rank_counts(&counts, candidates.len());
        ranked.truncate(TOP_LETTERS_PER_POSITION);
        ranked
    })
}

/// How many candidates contain each untested letter
///
/// Repeated letters count once per word.
#[must_use]
pub fn coverage_weights(candidates: &[&Word], known: LetterSet) -> LetterCounts {
    let mut counts = LetterCounts::default();
    for word in candidates {
        for letter in word.letters().difference(known).iter() {
            counts.increment(letter);
        }
    }
    counts
}

/// Untested letters ranked by how many candidates contain them
#[must_use]
pub fn common_letters(candidates: &[&Word], known: LetterSet) -> Vec<LetterFrequency> {
    rank_counts(&coverage_weights(candidates, known), candidates.len())
}

/// Raw coverage score of a guess: weights of its distinct untested letters
#[must_use]
pub fn coverage_score(word: &Word, weights: &LetterCounts, known: LetterSet) -> usize {
    weights.score(word.letters().difference(known))
}

fn rank_counts(counts: &LetterCounts, total: usize) -> Vec<LetterFrequency> {
    let mut ranked: Vec<LetterFrequency> = counts
        .iter()
        .map(|(letter, count)| LetterFrequency {
            letter,
            count,
            percentage: percentage(count, total),
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.letter.cmp(&b.letter)));
    ranked
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn position_tables_sorted_and_rounded() {
        let owned = words(&["slate", "plate", "skate"]);
        let candidates: Vec<&Word> = owned.iter().collect();
        let tables = position_frequencies(&candidates);

        // Position 0: s (2), p (1)
        assert_eq!(tables[0].len(), 2);
        assert_eq!(tables[0][0].letter, b's');
        assert_eq!(tables[0][0].count, 2);
        assert_eq!(tables[0][0].percentage, 67);
        assert_eq!(tables[0][1].letter, b'p');
        assert_eq!(tables[0][1].percentage, 33);

        // Position 2 is always 'a'
        assert_eq!(tables[2].len(), 1);
        assert_eq!(tables[2][0].percentage, 100);
    }

    #[test]
    fn position_tables_capped_at_eight() {
        let owned = words(&[
            "aback", "baker", "cabin", "daily", "eagle", "fable", "gamer", "habit", "ideal",
            "joker",
        ]);
        let candidates: Vec<&Word> = owned.iter().collect();
        let tables = position_frequencies(&candidates);

        assert_eq!(tables[0].len(), TOP_LETTERS_PER_POSITION);
        // All first letters tie at one, so alphabetical order decides
        let letters: Vec<u8> = tables[0].iter().map(|f| f.letter).collect();
        assert_eq!(letters, b"abcdefgh");
    }

    #[test]
    fn empty_candidates() {
        let tables = position_frequencies(&[]);
        assert!(tables.iter().all(Vec::is_empty));
        assert!(coverage_weights(&[], LetterSet::EMPTY).is_empty());
        assert_eq!(percentage(3, 0), 0);
    }

    #[test]
    fn coverage_counts_each_letter_once_per_word() {
        let owned = words(&["geese", "eerie"]);
        let candidates: Vec<&Word> = owned.iter().collect();
        let weights = coverage_weights(&candidates, LetterSet::EMPTY);

        assert_eq!(weights.get(b'e'), 2);
        assert_eq!(weights.get(b'g'), 1);
        assert_eq!(weights.get(b'r'), 1);
        assert_eq!(weights.get(b'z'), 0);
    }

    #[test]
    fn coverage_excludes_known_letters() {
        let owned = words(&["slate", "plate", "skate"]);
        let candidates: Vec<&Word> = owned.iter().collect();
        let known = LetterSet::from_letters(b"crane");
        let weights = coverage_weights(&candidates, known);

        assert_eq!(weights.get(b'a'), 0);
        assert_eq!(weights.get(b'e'), 0);
        assert_eq!(weights.get(b't'), 3);
        assert_eq!(weights.get(b's'), 2);
        assert_eq!(weights.get(b'l'), 2);
        assert_eq!(weights.get(b'k'), 1);

        let word = Word::new("stalk").unwrap();
        // s=2 + t=3 + l=2 + k=1, 'a' is known
        assert_eq!(coverage_score(&word, &weights, known), 8);
    }

    #[test]
    fn common_letters_ranked() {
        let owned = words(&["slate", "plate", "skate"]);
        let candidates: Vec<&Word> = owned.iter().collect();
        let known = LetterSet::from_letters(b"crane");
        let stats = compute_letter_statistics(&candidates, known);

        let order: Vec<u8> = stats.common_letters.iter().map(|f| f.letter).collect();
        assert_eq!(order, b"tlskp");
        assert_eq!(stats.common_letters[0].percentage, 100);
        assert_eq!(stats.common_letters, common_letters(&candidates, known));
    }
}

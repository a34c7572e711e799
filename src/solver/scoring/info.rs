//! Information-gathering words
//!
//! Words from the full dictionary that test several of the most common
//! untested letters at once, whether or not they can be the answer.

use crate::core::{LetterSet, Word};
use crate::solver::config::ScoringConfig;
use crate::solver::statistics::common_letters;
use rustc_hash::FxHashSet;

/// A dictionary word valued for the letters it tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoWord<'a> {
    pub word: &'a Word,
    /// Common untested letters contained in the word
    pub matched_letters: LetterSet,
    pub could_be_answer: bool,
}

/// Find words covering the most common untested letters
///
/// Only the `config.info_letter_count` most common letters count, and a word
/// must contain at least `config.info_min_matches` of them. Ranked by matches,
/// then possible answers first, then alphabetically. Empty for two or fewer
/// candidates.
#[must_use]
pub fn info_gathering_words<'a>(
    candidates: &[&Word],
    dictionary: &'a [Word],
    known: LetterSet,
    config: &ScoringConfig,
) -> Vec<InfoWord<'a>> {
    if candidates.len() <= 2 {
        return Vec::new();
    }

    let top_letters: LetterSet = common_letters(candidates, known)
        .into_iter()
        .take(config.info_letter_count)
        .map(|f| f.letter)
        .collect();

    if top_letters.is_empty() {
        return Vec::new();
    }

    let candidate_set: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();

    let mut words: Vec<InfoWord<'a>> = dictionary
        .iter()
        .filter_map(|word| {
            let matched_letters = word.letters().intersection(top_letters);
            (matched_letters.len() >= config.info_min_matches).then(|| InfoWord {
                word,
                matched_letters,
                could_be_answer: candidate_set.contains(word.text()),
            })
        })
        .collect();

    words.sort_by(|a, b| {
        b.matched_letters
            .len()
            .cmp(&a.matched_letters.len())
            .then(b.could_be_answer.cmp(&a.could_be_answer))
            .then_with(|| a.word.cmp(b.word))
    });
    words.truncate(config.max_info_words);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn ranks_by_matches_then_answers() {
        let config = ScoringConfig::default();
        let owned = words(&["slate", "plate", "skate", "spate"]);
        let candidates: Vec<&Word> = owned.iter().collect();
        let dictionary = words(&["stalk", "split", "slate", "plate", "mound", "stump"]);
        let known = LetterSet::from_letters(b"crane");

        let found = info_gathering_words(&candidates, &dictionary, known, &config);
        let order: Vec<&str> = found.iter().map(|w| w.word.text()).collect();

        assert_eq!(order, ["split", "stalk", "plate", "slate", "stump"]);
        assert_eq!(found[0].matched_letters.to_string(), "lpst");
        assert!(!found[0].could_be_answer);
        assert!(found[2].could_be_answer);
    }

    #[test]
    fn needs_more_than_two_candidates() {
        let config = ScoringConfig::default();
        let owned = words(&["slate", "plate"]);
        let candidates: Vec<&Word> = owned.iter().collect();
        let dictionary = words(&["stalk", "split"]);

        assert!(info_gathering_words(&candidates, &dictionary, LetterSet::EMPTY, &config).is_empty());
    }

    #[test]
    fn nothing_untested_means_nothing_to_gather() {
        let config = ScoringConfig::default();
        let owned = words(&["slate", "plate", "skate"]);
        let candidates: Vec<&Word> = owned.iter().collect();
        let dictionary = words(&["stalk", "split"]);
        let known = LetterSet::from_letters(b"abcdefghijklmnopqrstuvwxyz");

        assert!(info_gathering_words(&candidates, &dictionary, known, &config).is_empty());
    }
}

//! Dictionaries
//!
//! Two word lists back every session: the primary dictionary, where answers
//! normally come from, and an extended fallback that is always a superset of it.

mod embedded;
pub mod loader;

pub use embedded::{EXTENDED, EXTENDED_COUNT, PRIMARY, PRIMARY_COUNT};

use crate::core::Word;
use log::info;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Owned primary and extended dictionaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionaries {
    pub primary: Vec<Word>,
    /// Always contains every primary word
    pub extended: Vec<Word>,
}

impl Dictionaries {
    /// Dictionaries compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            primary: loader::words_from_slice(PRIMARY),
            extended: loader::words_from_slice(EXTENDED),
        }
    }

    /// Load either dictionary from a file, using the embedded list for the other
    ///
    /// The extended dictionary is merged with the primary one so the fallback
    /// never loses a primary word.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a given file cannot be read.
    pub fn load(primary: Option<&Path>, extended: Option<&Path>) -> io::Result<Self> {
        let primary = match primary {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(PRIMARY),
        };
        let extended = match extended {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(EXTENDED),
        };

        let dictionaries = Self::from_words(primary, extended);
        info!(
            "dictionaries ready: {} primary, {} extended words",
            dictionaries.primary.len(),
            dictionaries.extended.len()
        );
        Ok(dictionaries)
    }

    /// Build from word vectors, deduplicating and folding primary into extended
    ///
    /// Both lists keep the order they were given in. Primary words missing
    /// from the extended list are appended to it.
    #[must_use]
    pub fn from_words(primary: Vec<Word>, extended: Vec<Word>) -> Self {
        let primary = dedup_in_order(primary);
        let extended = dedup_in_order(extended.into_iter().chain(primary.iter().cloned()));
        Self { primary, extended }
    }
}

fn dedup_in_order(words: impl IntoIterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(PRIMARY.len(), PRIMARY_COUNT);
        assert_eq!(EXTENDED.len(), EXTENDED_COUNT);
    }

    #[test]
    fn embedded_words_are_valid_and_sorted() {
        for list in [PRIMARY, EXTENDED] {
            for &word in list {
                assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
                assert!(
                    word.bytes().all(|b| b.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
            assert!(list.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn primary_subset_of_extended() {
        let extended: std::collections::HashSet<_> = EXTENDED.iter().collect();
        for word in PRIMARY {
            assert!(extended.contains(word), "Primary word '{word}' missing from extended");
        }
        assert!(EXTENDED_COUNT > PRIMARY_COUNT);
    }

    #[test]
    fn primary_has_common_openers() {
        for opener in ["slate", "crane", "plate", "trace"] {
            assert!(PRIMARY.binary_search(&opener).is_ok(), "missing {opener}");
        }
    }

    #[test]
    fn from_words_merges_and_dedups() {
        let primary = loader::words_from_slice(&["slate", "crane", "slate"]);
        let extended = loader::words_from_slice(&["fuzzy"]);

        let dictionaries = Dictionaries::from_words(primary, extended);
        let primary: Vec<&str> = dictionaries.primary.iter().map(Word::text).collect();
        let extended: Vec<&str> = dictionaries.extended.iter().map(Word::text).collect();
        assert_eq!(primary, ["slate", "crane"]);
        assert_eq!(extended, ["fuzzy", "slate", "crane"]);
    }

    #[test]
    fn load_keeps_file_order() {
        let path = std::env::temp_dir().join(format!("wordle_assistant_{}.txt", std::process::id()));
        std::fs::write(&path, "slate\nplate\nelate\nplate\n").unwrap();

        let dictionaries = Dictionaries::load(Some(&path), None).unwrap();
        std::fs::remove_file(&path).unwrap();

        let candidates = crate::solver::filter_candidates(&dictionaries.primary, &[]);
        let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["slate", "plate", "elate"]);

        assert!(dictionaries.extended.len() >= EXTENDED_COUNT);
        for word in &dictionaries.primary {
            assert!(dictionaries.extended.contains(word));
        }
    }

    #[test]
    fn embedded_matches_consts() {
        let dictionaries = Dictionaries::embedded();
        assert_eq!(dictionaries.primary.len(), PRIMARY_COUNT);
        assert_eq!(dictionaries.extended.len(), EXTENDED_COUNT);
    }
}

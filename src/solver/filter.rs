//! Candidate filtering
//!
//! Keeps the dictionary words that are consistent with every observed constraint.

use crate::core::{Constraint, Word};

/// Filter `dictionary` down to the words consistent with `constraints`
///
/// A word survives only if replaying every guess against it reproduces the
/// observed pattern exactly. Dictionary order is preserved.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{Constraint, Word};
/// use wordle_assistant::solver::filter_candidates;
///
/// let dictionary: Vec<Word> = ["slate", "plate", "crane", "stone"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let constraints: Vec<Constraint> = vec!["crane:--g-g".parse().unwrap()];
///
/// let candidates = filter_candidates(&dictionary, &constraints);
/// let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["slate", "plate"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(dictionary: &'a [Word], constraints: &[Constraint]) -> Vec<&'a Word> {
    dictionary
        .iter()
        .filter(|&candidate| constraints.iter().all(|c| c.admits(candidate)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn no_constraints_keeps_everything() {
        let dictionary = words(&["crane", "slate", "plate"]);
        let candidates = filter_candidates(&dictionary, &[]);
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn keeps_dictionary_order() {
        let dictionary = words(&["plate", "slate", "elate", "crate"]);
        let constraints = vec!["crane:--g-g".parse().unwrap()];
        let texts: Vec<&str> = filter_candidates(&dictionary, &constraints)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(texts, ["plate", "slate", "elate"]);
    }

    #[test]
    fn gray_excludes_absent_letters() {
        let dictionary = words(&["slate", "plate", "crate", "irate", "snake", "state"]);
        let constraints = vec!["crane:--g-g".parse().unwrap()];
        let candidates = filter_candidates(&dictionary, &constraints);

        for word in &candidates {
            assert!(!word.has_letter(b'c'));
            assert!(!word.has_letter(b'r'));
            assert!(!word.has_letter(b'n'));
        }
        let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["slate", "plate", "state"]);
    }

    #[test]
    fn triple_letter_guess_uses_exact_feedback() {
        // SASSY against CHESS: one green S, one yellow S, one gray S.
        // The answer therefore has exactly two S's.
        let answer = Word::new("chess").unwrap();
        let guess = Word::new("sassy").unwrap();
        let constraint = Constraint::new(guess.clone(), Pattern::calculate(&guess, &answer));

        let dictionary = words(&["chess", "dress", "seams", "bless", "basis"]);
        let candidates = filter_candidates(&dictionary, &[constraint]);
        let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();

        assert!(texts.contains(&"chess"));
        assert!(texts.contains(&"dress"));
        assert!(texts.contains(&"bless"));
        assert!(!texts.contains(&"basis"));
        assert!(!texts.contains(&"seams"));
    }

    #[test]
    fn impossible_pattern_yields_nothing() {
        let dictionary = words(&["crane", "slate"]);
        let constraints = vec![Constraint::new(Word::new("zzzzz").unwrap(), Pattern::PERFECT)];
        assert!(filter_candidates(&dictionary, &constraints).is_empty());
    }
}

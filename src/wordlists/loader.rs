//! Word list loading utilities
//!
//! Reads one word per line. Blank lines and lines starting with `#` are
//! ignored; anything else that is not a 5-letter word is skipped with a warning.

use crate::core::Word;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assistant::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/primary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content, &path.display().to_string()))
}

/// Parse a newline separated word list, `origin` names it in warnings
#[must_use]
pub fn parse_word_list(content: &str, origin: &str) -> Vec<Word> {
    let mut skipped = 0usize;

    let words = content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    skipped += 1;
                    warn!("{origin}:{}: skipping {trimmed:?}: {e}", number + 1);
                    None
                }
            }
        })
        .collect();

    if skipped > 0 {
        warn!("{origin}: skipped {skipped} invalid line(s)");
    }
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::loader::words_from_slice;
/// use wordle_assistant::wordlists::PRIMARY;
///
/// let words = words_from_slice(PRIMARY);
/// assert_eq!(words.len(), PRIMARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_skips_comments_blanks_and_garbage() {
        let content = "# openers\ncrane\n\n  SLATE  \nab1de\nnaïve\nplate\n";
        let words = parse_word_list(content, "test");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "plate"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("does/not/exist.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("wordle_assistant_{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\nbad\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(words.len(), 2);
    }
}

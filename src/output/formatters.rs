//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn tile(letter: u8, mark: Mark) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match mark {
        Mark::Green => text.black().on_green(),
        Mark::Yellow => text.black().on_yellow(),
        Mark::Gray => text.white().on_bright_black(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn colored_tiles(word: &Word, pattern: Pattern) -> String {
    word.chars()
        .iter()
        .zip(pattern.marks())
        .map(|(&letter, mark)| tile(letter, mark).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Fraction in `[0, 1]` as a percentage string
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Uppercase words packed `per_line` to a row
#[must_use]
pub fn word_rows(words: &[&Word], per_line: usize) -> Vec<String> {
    words
        .chunks(per_line.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(150.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(0.625), "62.5%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn tiles_contain_uppercase_letters() {
        let word = Word::new("crane").unwrap();
        let pattern: Pattern = "--G-G".parse().unwrap();
        let tiles = colored_tiles(&word, pattern);
        for letter in ['C', 'R', 'A', 'N', 'E'] {
            assert!(tiles.contains(letter));
        }
    }

    #[test]
    fn rows_wrap() {
        let owned: Vec<Word> = ["slate", "plate", "skate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let words: Vec<&Word> = owned.iter().collect();

        assert_eq!(word_rows(&words, 2), ["SLATE  PLATE", "SKATE"]);
        assert!(word_rows(&[], 4).is_empty());
    }
}

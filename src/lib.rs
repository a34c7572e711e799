//! Wordle Assistant
//!
//! Decision support for Wordle: filters the dictionary against the feedback
//! received so far, ranks next guesses by a phase-weighted blend of expected
//! elimination, answer likelihood and letter coverage, and warns about
//! pattern traps where many near-identical words remain.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::core::{Constraint, Pattern, Word};
//! use wordle_assistant::solver::filter_candidates;
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! // Feedback for CRANE against SLATE
//! let pattern = Pattern::calculate(&guess, &answer);
//! assert_eq!(pattern.to_string(), "--G-G");
//!
//! let dictionary: Vec<Word> = ["slate", "plate", "crate", "stone"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let constraints = [Constraint::new(guess, pattern)];
//! let candidates = filter_candidates(&dictionary, &constraints);
//! assert_eq!(candidates.len(), 2);
//! ```

// Core domain types
pub mod core;

// Filtering, statistics, scoring and the session
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

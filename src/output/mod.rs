//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis, print_benchmark_result, print_feedback, print_guess_analysis, print_log,
    print_solve_result,
};

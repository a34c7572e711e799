//! Interactive session
//!
//! Line-oriented loop: enter each guess with the feedback it received and
//! the full analysis is printed after every change.

use super::CommandError;
use crate::core::{Constraint, Pattern, Word};
use crate::output::{print_analysis, print_log};
use crate::solver::Advisor;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// `crane --g-g` or `crane:--g-g`
    Guess(Constraint),
    Undo,
    /// 0-based index of the guess to drop (typed 1-based)
    Remove(usize),
    Reset,
    Show,
    Help,
    Quit,
}

/// Parse one line of input
///
/// # Errors
///
/// Returns an error if the line is neither a command nor a guess with valid
/// feedback.
pub fn parse_play_command(input: &str) -> Result<PlayCommand, CommandError> {
    let input = input.trim();
    let lower = input.to_lowercase();
    let mut parts = lower.split_whitespace();

    let command = match (parts.next(), parts.next(), parts.next()) {
        (Some("quit" | "q" | "exit"), None, None) => PlayCommand::Quit,
        (Some("undo" | "u"), None, None) => PlayCommand::Undo,
        (Some("reset" | "new" | "n"), None, None) => PlayCommand::Reset,
        (Some("show" | "s") | None, None, None) => PlayCommand::Show,
        (Some("help" | "h" | "?"), None, None) => PlayCommand::Help,
        (Some("remove" | "rm"), Some(n), None) => match n.parse::<usize>() {
            Ok(n) if n > 0 => PlayCommand::Remove(n - 1),
            _ => return Err(CommandError::UnknownCommand(input.to_string())),
        },
        (Some(guess), Some(feedback), None) => {
            let pattern = match feedback {
                "win" | "solved" => Pattern::PERFECT,
                other => other.parse()?,
            };
            PlayCommand::Guess(Constraint::new(Word::new(guess)?, pattern))
        }
        (Some(single), None, None) if single.contains([':', '=']) => {
            PlayCommand::Guess(single.parse()?)
        }
        _ => return Err(CommandError::UnknownCommand(input.to_string())),
    };
    Ok(command)
}

fn print_help() {
    println!("\nEnter each guess followed by its feedback:");
    println!("  crane --g-g      G/g/🟩 green, Y/y/🟨 yellow, -/_/./x/⬜ gray");
    println!("  crane win        the guess was correct");
    println!("\nCommands: 'undo', 'remove N', 'reset', 'show', 'help', 'quit'\n");
}

fn show(advisor: &mut Advisor<'_>) {
    print_log(advisor.log());
    print_analysis(advisor.analysis());
}

/// Run the interactive session on stdin
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_play(advisor: &mut Advisor<'_>) -> Result<(), CommandError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Assistant - Interactive               ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    print_help();
    show(advisor);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n{} ", ">".bright_cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;

        match parse_play_command(&line) {
            Ok(PlayCommand::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Ok(PlayCommand::Help) => print_help(),
            Ok(PlayCommand::Show) => show(advisor),
            Ok(PlayCommand::Reset) => {
                advisor.reset();
                println!("\n🔄 New game started!");
                show(advisor);
            }
            Ok(PlayCommand::Undo) => {
                match advisor.undo() {
                    Some(removed) => println!("✓ Undid {removed}"),
                    None => println!("Nothing to undo!"),
                }
                show(advisor);
            }
            Ok(PlayCommand::Remove(index)) => match advisor.remove(index) {
                Ok(removed) => {
                    println!("✓ Removed {removed}");
                    show(advisor);
                }
                Err(e) => println!("{}", format!("❌ {e}").red()),
            },
            Ok(PlayCommand::Guess(constraint)) => {
                let solved = constraint.pattern().is_perfect();
                let turn = advisor.log().turn();
                advisor.add(constraint);

                if solved {
                    print_log(advisor.log());
                    println!(
                        "\n{}",
                        format!("🎉 Solved in {turn} {}!", if turn == 1 { "guess" } else { "guesses" })
                            .bright_green()
                            .bold()
                    );
                    advisor.reset();
                    println!("\n🔄 New game started!");
                } else {
                    show(advisor);
                }
            }
            Err(e) => println!("{}", format!("❌ {e}").red()),
        }
    }
}

//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, format_percent, word_rows};
use crate::commands::{BenchmarkResult, GuessAnalysis, SolveResult};
use crate::core::{ConstraintLog, Pattern, WORD_LENGTH, Word};
use crate::solver::{Analysis, DictionarySource};
use colored::Colorize;

const CANDIDATES_SHOWN: usize = 40;
const LETTERS_PER_POSITION_SHOWN: usize = 5;
const COMMON_LETTERS_SHOWN: usize = 10;

fn section(title: &str) {
    println!("\n{}", title.bright_cyan().bold());
}

/// Print the guesses entered so far
pub fn print_log(log: &ConstraintLog) {
    if log.is_empty() {
        return;
    }
    section("Guesses:");
    for (i, constraint) in log.iter().enumerate() {
        println!(
            "  {}. {}  {}",
            (i + 1).to_string().bright_black(),
            colored_tiles(constraint.guess(), constraint.pattern()),
            constraint.pattern().to_emoji()
        );
    }
}

/// Print every panel of an analysis
pub fn print_analysis(analysis: &Analysis<'_>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Turn {} ({} game): {} candidates",
        analysis.turn,
        analysis.phase,
        analysis.candidate_count().to_string().bright_yellow().bold()
    );
    if analysis.source == DictionarySource::Extended {
        println!(
            "{}",
            "No primary word fits, showing extended dictionary matches".yellow()
        );
    }
    println!("{}", "─".repeat(60).cyan());

    if analysis.candidates.is_empty() {
        println!(
            "\n{}",
            "❌ No word fits the feedback. Check for a typo, then 'undo' or 'remove N'.".red()
        );
        return;
    }

    print_candidates(&analysis.candidates);
    print_trap(analysis);
    print_suggestions(analysis);
    print_best_guesses(analysis);
    print_info_words(analysis);
    print_letter_statistics(analysis);
}

fn print_candidates(candidates: &[&Word]) {
    if let [only] = candidates {
        println!(
            "\n🎯 The answer is {}",
            only.text().to_uppercase().bright_green().bold()
        );
        return;
    }

    section("Candidates:");
    let shown = &candidates[..candidates.len().min(CANDIDATES_SHOWN)];
    for row in word_rows(shown, 8) {
        println!("  {row}");
    }
    if candidates.len() > CANDIDATES_SHOWN {
        println!(
            "  {}",
            format!("… and {} more", candidates.len() - CANDIDATES_SHOWN).bright_black()
        );
    }
}

fn print_trap(analysis: &Analysis<'_>) {
    let trap = &analysis.trap;
    if !trap.is_trapped {
        return;
    }

    let skeleton = trap_skeleton(analysis);

    println!(
        "\n⚠️  {} {} with {} possible letters: {}",
        "Pattern trap:".bright_red().bold(),
        skeleton.bright_yellow().bold(),
        trap.variable_letters.len(),
        trap.variable_letters.to_string().to_uppercase()
    );

    if analysis.pattern_breakers.is_empty() {
        println!("   No probe word found in the dictionary");
        return;
    }
    println!("   Probe words that test several letters at once:");
    for breaker in &analysis.pattern_breakers {
        println!(
            "   {}  tests {:<6} ~{} left (expected {:.2})",
            breaker.word.text().to_uppercase().bright_white().bold(),
            breaker.matched_letters.to_string().to_uppercase(),
            breaker.narrows_to,
            breaker.expected_remaining
        );
    }
}

/// Locked positions show their most frequent letter, variable ones `_`
fn trap_skeleton(analysis: &Analysis<'_>) -> String {
    (0..WORD_LENGTH)
        .map(|i| {
            let top = analysis.statistics.position_frequencies[i].first();
            match top {
                Some(frequency) if analysis.trap.locked_positions.contains(&i) => {
                    frequency.letter_char().to_ascii_uppercase()
                }
                _ => '_',
            }
        })
        .collect()
}

fn print_suggestions(analysis: &Analysis<'_>) {
    if !analysis.suggestions_available {
        if analysis.candidate_count() > 1 {
            println!(
                "\n{}",
                "Too many candidates to score suggestions yet".bright_black()
            );
        }
        return;
    }

    section("Suggestions:");
    println!(
        "  {}",
        "     word   score  elim.   exp.   cover  answer".bright_black()
    );
    for (i, record) in analysis.suggestions.iter().enumerate() {
        let answer = if record.answer_flag { "✓".green() } else { "".normal() };
        println!(
            "  {:>2}. {}  {:>5.3}  {:>6}  {:>5.1}  {:>5}  {}",
            i + 1,
            record.word.text().to_uppercase().bright_white().bold(),
            record.blended_score,
            format_percent(record.elimination_fraction),
            record.expected_remaining,
            record.coverage_score,
            answer
        );
    }
}

fn print_best_guesses(analysis: &Analysis<'_>) {
    if !analysis.best_guesses_available {
        return;
    }

    section("Best guesses among candidates:");
    let worst = analysis
        .best_guesses
        .iter()
        .map(|g| g.expected_remaining)
        .fold(0.0, f64::max);
    for guess in &analysis.best_guesses {
        println!(
            "  {}  [{}] {:.2} left",
            guess.word.text().to_uppercase(),
            create_progress_bar(guess.expected_remaining, worst, 20).green(),
            guess.expected_remaining
        );
    }
}

fn print_info_words(analysis: &Analysis<'_>) {
    if analysis.info_words.is_empty() {
        return;
    }

    section("Information-gathering words:");
    for info in &analysis.info_words {
        let answer = if info.could_be_answer {
            " (could be the answer)".green()
        } else {
            "".normal()
        };
        println!(
            "  {}  tests {}{}",
            info.word.text().to_uppercase(),
            info.matched_letters.to_string().to_uppercase(),
            answer
        );
    }
}

fn print_letter_statistics(analysis: &Analysis<'_>) {
    let statistics = &analysis.statistics;

    section("Letters by position:");
    for (position, table) in statistics.position_frequencies.iter().enumerate() {
        let entries: Vec<String> = table
            .iter()
            .take(LETTERS_PER_POSITION_SHOWN)
            .map(|f| format!("{} {:>3}%", f.letter_char().to_ascii_uppercase(), f.percentage))
            .collect();
        println!("  {}: {}", position + 1, entries.join("  "));
    }

    if statistics.common_letters.is_empty() {
        return;
    }
    section("Most common untested letters:");
    let entries: Vec<String> = statistics
        .common_letters
        .iter()
        .take(COMMON_LETTERS_SHOWN)
        .map(|f| {
            format!(
                "{} {}/{}",
                f.letter_char().to_ascii_uppercase(),
                f.count,
                analysis.candidate_count()
            )
        })
        .collect();
    println!("  {}", entries.join("  "));
}

/// Print the feedback a guess gets against an answer
pub fn print_feedback(guess: &Word, pattern: Pattern) {
    println!(
        "{}  {}  {}",
        colored_tiles(guess, pattern),
        pattern.to_emoji(),
        pattern
    );
}

/// Print the result of analyzing one guess
pub fn print_guess_analysis(result: &GuessAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    println!(
        "\n📊 Against {} candidates ({} dictionary):",
        result.total_candidates, result.source
    );
    println!(
        "   Elimination:  [{}] {}",
        create_progress_bar(metrics.elimination_fraction, 1.0, 30).green(),
        format_percent(metrics.elimination_fraction).bright_yellow()
    );
    println!("   Expected:     {:.2} candidates remain", metrics.expected_remaining);
    println!("   Worst case:   {} candidates", metrics.max_partition);
    println!("   Patterns:     {}", metrics.bucket_count);
    println!("   Entropy:      {:.3} bits", metrics.entropy);
    if result.could_be_answer {
        println!("   {}", "Could be the answer".green());
    }

    if !result.buckets.is_empty() {
        section("Largest feedback groups:");
        for (pattern, size) in result.buckets.iter().take(8) {
            println!("   {}  {size}", pattern.to_emoji());
        }
    }
}

/// Print the result of simulating a game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(expected) = step.expected_remaining {
                println!("  Expected:   {expected:.1} candidates");
            }
            if step.source == DictionarySource::Extended {
                println!("  {}", "(extended dictionary)".yellow());
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_key = result.distribution.keys().copied().max().unwrap_or(0);
    for guess_count in 1..=max_key {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = count as f64 / result.total_words as f64 * 100.0;
            println!(
                "   {guess_count}: {} {count:4} ({pct:5.1}%)",
                create_progress_bar(pct, 100.0, 40).green()
            );
        }
    }

    if !result.failed_words.is_empty() {
        println!("\n❌ {}", "Failed:".red().bold());
        println!("   {}", result.failed_words.join(", ").to_uppercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Advisor;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn skeleton_uses_majority_letter() {
        // botch comes first but has the minority letter in the locked second position
        let primary = words_from_slice(&["botch", "batch", "catch", "hatch", "latch"]);
        let mut advisor = Advisor::new(&primary, &primary);
        let analysis = advisor.analysis();

        assert!(analysis.trap.is_trapped);
        assert_eq!(analysis.candidates[0].text(), "botch");
        assert_eq!(trap_skeleton(analysis), "_ATCH");
    }
}

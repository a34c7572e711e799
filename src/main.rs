//! Wordle Assistant - CLI
//!
//! Interactive decision support for Wordle: candidate filtering, letter
//! statistics, ranked guesses and pattern trap warnings.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use wordle_assistant::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_guess, parse_constraints, run_benchmark, run_play,
        score_feedback, solve_word,
    },
    core::Word,
    output::{
        print_analysis, print_benchmark_result, print_feedback, print_guess_analysis, print_log,
        print_solve_result,
    },
    solver::{Advisor, PhaseOverride, ScoringConfig},
    wordlists::Dictionaries,
};

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Wordle decision support: candidates, letter statistics, ranked guesses and pattern traps",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Primary dictionary file, one word per line (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    primary: Option<PathBuf>,

    /// Extended fallback dictionary file (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    extended: Option<PathBuf>,

    /// Override one phase's weights, e.g. early=1.0,0.3,0.4,0.25 (repeatable)
    #[arg(long = "phase-weights", global = true, value_name = "PHASE=E,A,C,P")]
    phase_weights: Vec<PhaseOverride>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG also works
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Play,

    /// Full analysis for a list of guesses, e.g. crane:--g-g slate:-gggg
    Suggest {
        /// Guesses with feedback as GUESS:PATTERN
        constraints: Vec<String>,
    },

    /// Show the feedback a guess receives against an answer
    Feedback {
        guess: String,
        answer: String,
    },

    /// Partition metrics of one guess against the current candidates
    Analyze {
        /// Guess to analyze
        word: String,

        /// Guesses with feedback as GUESS:PATTERN
        constraints: Vec<String>,
    },

    /// Simulate the assistant solving a known answer
    Solve {
        /// The answer to find
        target: String,

        /// Force the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Guess limit
        #[arg(short = 'm', long, default_value = "6")]
        max_guesses: usize,

        /// Show candidate counts for every step
        #[arg(short, long)]
        steps: bool,
    },

    /// Simulate over a random sample of primary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,

        /// Force the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Guess limit
        #[arg(short = 'm', long, default_value = "6")]
        max_guesses: usize,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionaries = Dictionaries::load(cli.primary.as_deref(), cli.extended.as_deref())
        .context("failed to load dictionaries")?;
    let scoring = ScoringConfig::default().with_overrides(&cli.phase_weights);
    let advisor = || {
        Advisor::new(&dictionaries.primary, &dictionaries.extended).with_config(scoring.clone())
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&mut advisor()).context("interactive session failed"),
        Commands::Suggest { constraints } => {
            let mut advisor = advisor();
            for constraint in parse_constraints(&constraints)? {
                advisor.add(constraint);
            }
            print_log(advisor.log());
            print_analysis(advisor.analysis());
            Ok(())
        }
        Commands::Feedback { guess, answer } => {
            let pattern = score_feedback(&guess, &answer)?;
            print_feedback(&Word::new(&guess)?, pattern);
            Ok(())
        }
        Commands::Analyze { word, constraints } => {
            let mut advisor = advisor();
            for constraint in parse_constraints(&constraints)? {
                advisor.add(constraint);
            }
            let result = analyze_guess(&word, &mut advisor)?;
            print_guess_analysis(&result);
            Ok(())
        }
        Commands::Solve {
            target,
            first_word,
            max_guesses,
            steps,
        } => {
            let config = SolveConfig {
                first_word,
                max_guesses,
                scoring: scoring.clone(),
                ..SolveConfig::new(target)
            };
            let result = solve_word(&config, &dictionaries.primary, &dictionaries.extended)
                .with_context(|| format!("cannot solve '{}'", config.target))?;
            print_solve_result(&result, steps);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            first_word,
            max_guesses,
        } => {
            let config = BenchmarkConfig {
                count,
                seed,
                first_word,
                max_guesses,
                scoring: scoring.clone(),
                show_progress: true,
            };
            let result = run_benchmark(&config, &dictionaries.primary, &dictionaries.extended)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

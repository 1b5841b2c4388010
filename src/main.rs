//! Wordle Partition Solver - CLI
//!
//! Ranks guesses by worst-case bucket size, plays interactively, or
//! simulates a full game against a known answer.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use log::info;
use std::path::{Path, PathBuf};
use wordle_partition::{
    commands::{Played, SolveConfig, analyze_word, rank_guesses, run_play, solve_word},
    core::Word,
    output::{
        print_analysis_result, print_elimination, print_ranking, print_solve_result,
        scoring_progress_bar,
    },
    solver::{DEFAULT_WORKERS, Solver, SolverOptions, Strategy},
    wordlists::{DEFAULT_ANSWERS, DEFAULT_GUESSES, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_partition",
    about = "Wordle solver ranking every guess by how it partitions the remaining answers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File of possible answers, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_ANSWERS)]
    answers: PathBuf,

    /// File of extra allowed guesses, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_GUESSES)]
    guesses: PathBuf,

    /// Strategy: worst-case (default), best-case, mean, square-mean-root
    #[arg(short, long, global = true, default_value_t = Strategy::WorstCase)]
    strategy: Strategy,

    /// Number of parallel scoring workers
    #[arg(short, long, global = true, env = "WORDLE_WORKERS", default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// How many guesses to show
    #[arg(short, long, global = true, default_value = "10")]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Rank guesses, optionally after guesses already played
    Rank {
        /// A played guess and its feedback, e.g. crane=BYBBG (repeatable)
        #[arg(short, long, value_parser = Played::parse)]
        played: Vec<Played>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how one guess splits the answers
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank guesses by the mean number of answers they eliminate
    Eliminate,
}

/// Load (answers, extra guesses)
fn load_wordlists(answers: &Path, guesses: &Path) -> Result<(Vec<Word>, Vec<Word>)> {
    let answer_words = load_from_file(answers)
        .with_context(|| format!("failed to read answers from {}", answers.display()))?;
    let guess_words = load_from_file(guesses)
        .with_context(|| format!("failed to read guesses from {}", guesses.display()))?;

    if answer_words.is_empty() {
        bail!("{} contains no valid words", answers.display());
    }
    info!(
        "loaded {} answers and {} extra guesses",
        answer_words.len(),
        guess_words.len()
    );
    Ok((answer_words, guess_words))
}

/// Drive a progress bar from the solver's progress callback
fn attach_progress(solver: &mut Solver) -> ProgressBar {
    let pb = scoring_progress_bar();
    let bar = pb.clone();
    solver.on_progress(move |total, done| {
        bar.set_length(total as u64);
        bar.set_position(done as u64);
    });
    pb
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (answer_words, guess_words) = load_wordlists(&cli.answers, &cli.guesses)?;

    let options = SolverOptions {
        strategy: cli.strategy,
        workers: cli.workers,
    };
    let mut solver = Solver::new(answer_words, guess_words, options);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play(&mut solver, cli.top)?;
        }
        Commands::Rank { played } => {
            let pb = attach_progress(&mut solver);
            let ranked = rank_guesses(&mut solver, &played);
            pb.finish_and_clear();
            ranked?;
            print_ranking(&solver, cli.top);
        }
        Commands::Solve { word, verbose } => {
            let pb = attach_progress(&mut solver);
            let result = solve_word(SolveConfig::new(word), solver);
            pb.finish_and_clear();
            print_solve_result(&result?, verbose);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, solver.candidates(), cli.strategy)?;
            print_analysis_result(&result);
        }
        Commands::Eliminate => {
            let pb = attach_progress(&mut solver);
            let scores = solver.elimination_ranking();
            pb.finish_and_clear();
            print_elimination(&scores, cli.top);
        }
    }

    Ok(())
}

//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, format_score};
use crate::commands::{AnalysisResult, SolveResult};
use crate::solver::{EliminationScore, RankedGuess, Solver, Status};
use colored::Colorize;

fn print_ranked_list(title: &str, guesses: &[&RankedGuess]) {
    println!("\n{}", title.bright_cyan().bold());
    if guesses.is_empty() {
        println!("   (none)");
        return;
    }
    for (i, guess) in guesses.iter().enumerate() {
        let marker = if guess.is_candidate { "✓".green() } else { " ".normal() };
        println!(
            "   {:>2}. {} {} score {}",
            i + 1,
            guess.word.text().to_uppercase().bright_white().bold(),
            marker,
            format_score(guess.score).bright_yellow()
        );
    }
}

/// Print the top guesses and top possible answers from the last solve
pub fn print_ranking(solver: &Solver, top: usize) {
    let strategy = solver.options().strategy;
    let guesses: Vec<&RankedGuess> = solver.best_guesses(top).iter().collect();

    print_ranked_list(&format!("Best guesses ({strategy}):"), &guesses);
    print_ranked_list("Best possible answers:", &solver.best_wordles(top));

    let candidates = solver.candidates();
    if candidates.len() <= 10 {
        let words: Vec<String> = candidates.iter().map(|w| w.text().to_uppercase()).collect();
        println!("\nRemaining candidates: {}", words.join(", "));
    }
    println!();
}

/// Print where the solver stands
pub fn print_status(status: Status<'_>) {
    match status {
        Status::Unsolved(count) => println!("{count} candidates remain"),
        Status::Solved(answer) => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "   🎉 The answer is {}",
                answer.text().to_uppercase().bright_green().bold()
            );
            println!("{}\n", "═".repeat(60).bright_cyan());
        }
        Status::NoAnswer => println!(
            "\n{}\n",
            "❌ No candidates remain! The feedback may be incorrect.".red().bold()
        ),
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colored_guess(&step.word, &step.outcome),
            step.outcome.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(score) = step.score {
                println!("  Score:      {}", format_score(score));
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

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!("   Buckets:     {}", result.bucket_count);
    println!("   Largest:     {}", result.largest);
    println!(
        "   Score:       {} ({})",
        format_score(result.score).bright_yellow(),
        result.strategy
    );

    println!("\n📈 {}", "Bucket sizes:".bright_cyan().bold());
    for size in result.sizes.iter().take(20) {
        let bar = create_progress_bar(*size as f64, result.largest as f64, 40);
        println!("   {} {size:5}", bar.green());
    }
    if result.sizes.len() > 20 {
        println!("   ... {} more", result.sizes.len() - 20);
    }
}

/// Print the top of an elimination ranking
pub fn print_elimination(scores: &[EliminationScore], top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ELIMINATION RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let best = scores.first().map_or(0.0, |s| s.mean_eliminated);
    for (i, score) in scores.iter().take(top).enumerate() {
        let bar = create_progress_bar(score.mean_eliminated, best, 30);
        println!(
            "   {:>2}. {} [{}] {}",
            i + 1,
            score.word.text().to_uppercase().bright_white().bold(),
            bar.green(),
            format!("{:.2}", score.mean_eliminated).bright_yellow()
        );
    }
}

//! Interactive CLI mode
//!
//! Suggests guesses each round and reads back what was played.

use crate::error::Error;
use crate::output::display::{print_ranking, print_status};
use crate::solver::{Solver, Status};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayEnd {
    Solved(String),
    NoAnswer,
    Quit,
}

/// Run the interactive mode on stdin
///
/// # Errors
///
/// Returns an error if reading input fails or a round cannot be scored.
pub fn run_play(solver: &mut Solver, top: usize) -> Result<PlayEnd> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Wordle Solver - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("After each guess, enter the word you played and its feedback:\n");
    println!("  - Use G/g/!/🟩 for green (correct position)");
    println!("  - Use Y/y/./🟨 for yellow (wrong position)");
    println!("  - Use B/b/-/_/⬜ for gray (not in word)");
    println!("  - Example: crane BYBBG\n");
    println!("Type 'quit' to exit\n");

    play_loop(solver, top, &mut io::stdin().lock())
}

/// Drive a session from any line source
///
/// # Errors
///
/// Returns an error if reading input fails or a round cannot be scored.
pub fn play_loop(solver: &mut Solver, top: usize, input: &mut impl BufRead) -> Result<PlayEnd> {
    let mut turn = 1;

    loop {
        match solver.status() {
            Status::Solved(answer) => {
                let answer = answer.text();
                print_status(solver.status());
                return Ok(PlayEnd::Solved(answer));
            }
            Status::NoAnswer => {
                print_status(Status::NoAnswer);
                return Ok(PlayEnd::NoAnswer);
            }
            Status::Unsolved(count) => {
                println!("────────────────────────────────────────────────────────────");
                println!("Turn {turn}: {count} candidates remaining");
                println!("────────────────────────────────────────────────────────────");
            }
        }

        solver.solve()?;
        print_ranking(solver, top);

        loop {
            let Some(line) = get_user_input("Enter guess and feedback", input)? else {
                return Ok(PlayEnd::Quit);
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(PlayEnd::Quit);
                }
                _ => {}
            }

            let mut parts = line.split_whitespace();
            let (Some(word), Some(outcome), None) = (parts.next(), parts.next(), parts.next())
            else {
                println!("{}", "❌ Expected: <word> <feedback>\n".red());
                continue;
            };

            match solver.apply_guess_text(word, outcome) {
                Ok(_) | Err(Error::EmptyResult) => break,
                Err(e) => println!("{}", format!("❌ {e}\n").red()),
            }
        }

        turn += 1;
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str, input: &mut impl BufRead) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

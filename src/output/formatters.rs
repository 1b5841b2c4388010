//! Formatting utilities for terminal output

use crate::core::{Feedback, Outcome, Word};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a score, dropping the fraction when it is whole
#[must_use]
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.3}")
    }
}

/// Color each letter of a guess by the feedback it received
#[must_use]
pub fn colored_guess(word: &Word, outcome: &Outcome) -> String {
    (0..word.letters().len())
        .map(|i| {
            let letter = word.char_at(i).to_ascii_uppercase().to_string();
            let painted: ColoredString = match outcome.get(i) {
                Feedback::Correct => letter.black().on_green(),
                Feedback::Present => letter.black().on_yellow(),
                Feedback::Absent => letter.white().on_bright_black(),
            };
            painted.to_string()
        })
        .collect()
}

/// Progress bar fed by a solver's progress callback
#[must_use]
pub fn scoring_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

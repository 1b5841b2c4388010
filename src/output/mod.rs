//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_elimination, print_ranking, print_solve_result, print_status,
};
pub use formatters::scoring_progress_bar;

//! Word analysis command
//!
//! Breaks the candidate pool down by the feedback a single guess could get.

use crate::core::Word;
use crate::error::Result;
use crate::solver::{Partition, Strategy};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub total_candidates: usize,
    pub bucket_count: usize,
    pub largest: usize,
    /// Non-empty bucket sizes, largest first
    pub sizes: Vec<usize>,
    pub score: f64,
    pub strategy: Strategy,
}

/// Analyze how a guess would split the candidates
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters a-z)
/// - The strategy is not implemented
pub fn analyze_word(word: &str, candidates: &[Word], strategy: Strategy) -> Result<AnalysisResult> {
    let word = Word::new(word)?;
    strategy.ensure_implemented()?;

    let partition = Partition::compute(&word, candidates);
    let score = partition.score(strategy)?;

    Ok(AnalysisResult {
        word,
        total_candidates: candidates.len(),
        bucket_count: partition.bucket_count(),
        largest: partition.largest(),
        sizes: partition.sizes(),
        score,
        strategy,
    })
}

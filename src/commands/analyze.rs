//! Guess analysis command
//!
//! Shows how one guess would split the current candidates.

use crate::core::{Feedback, Word};
use crate::solver::Partition;
use anyhow::{Result, bail};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Word,
    pub total_candidates: usize,
    pub group_count: usize,
    pub largest_group: usize,
    /// Whether the guess is itself a candidate
    pub in_pool: bool,
    /// Groups, largest first, words sorted
    pub groups: Vec<(Feedback, Vec<Word>)>,
}

/// Partition `candidates` by the feedback `guess` would receive
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not a valid word
/// - The guess is not in the vocabulary
/// - The candidates do not share the guess's length
pub fn analyze_guess(guess: &str, vocabulary: &[Word], candidates: &[Word]) -> Result<AnalysisResult> {
    let guess = Word::new(guess)?;

    if !vocabulary.contains(&guess) {
        bail!("Word '{guess}' not in word list");
    }

    let (group_count, largest_group, groups) = {
        let partition = Partition::of(&guess, candidates)?;
        let groups: Vec<(Feedback, Vec<Word>)> = partition
            .sorted_groups()
            .into_iter()
            .map(|group| {
                let words: Vec<Word> = group.words.into_iter().cloned().collect();
                (group.feedback, words)
            })
            .collect();
        (partition.group_count(), partition.largest_group(), groups)
    };

    Ok(AnalysisResult {
        in_pool: candidates.contains(&guess),
        total_candidates: candidates.len(),
        group_count,
        largest_group,
        groups,
        guess,
    })
}

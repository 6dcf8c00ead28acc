//! Word solving command
//!
//! Plays against a known target, always taking the first recommended guess.

use super::rank_with_progress;
use crate::core::{Feedback, Word};
use crate::solver::{Session, recommend};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Groups the guess split the candidates into
    pub group_count: usize,
}

/// Solve a specific word using the dictionary as answers and `vocabulary` as guesses
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid
/// - The target is not in the dictionary
/// - No guess can be recommended (empty vocabulary)
pub fn solve_word(config: SolveConfig, dictionary: &[Word], vocabulary: &[Word]) -> Result<SolveResult> {
    let target = Word::new(&config.target).context("Invalid target word")?;

    let mut session = Session::new(target.len(), dictionary);
    if !session.pool().contains(&target) {
        bail!("Target '{target}' is not in the dictionary");
    }

    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.pool().len();

        // A single candidate is the answer; no need to rank
        let (guess, group_count) = if let [only] = session.pool() {
            (only.clone(), 1)
        } else {
            let ranking = rank_with_progress(vocabulary, session.pool())?;
            recommend(&ranking)
                .first()
                .map(|ranked| (ranked.guess.clone(), ranked.group_count))
                .context("No valid guesses available")?
        };

        let feedback = Feedback::calculate(&guess, &target)?;
        session = session.apply(&guess, feedback.clone())?;

        let solved = feedback.is_perfect();
        guesses.push(GuessStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after: session.pool().len(),
            group_count,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}

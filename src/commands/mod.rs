//! Command implementations

pub mod analyze;
pub mod query;
pub mod simple;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_guess};
pub use query::{QueryConfig, run_query};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_word};
pub use suggest::{parse_round, run_suggest};

use crate::core::{Word, WordleError};
use crate::solver::{RankedGuess, rank};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Feedback computations above which a spinner is shown while ranking
const SPINNER_THRESHOLD: usize = 2_000_000;

/// Rank guesses, showing a spinner when the search is large
///
/// # Errors
/// Propagates `WordleError::LengthMismatch` from [`rank`].
pub fn rank_with_progress<'a>(
    vocabulary: &'a [Word],
    pool: &[Word],
) -> Result<Vec<RankedGuess<'a>>, WordleError> {
    if vocabulary.len().saturating_mul(pool.len()) < SPINNER_THRESHOLD {
        return rank(vocabulary, pool);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!(
        "Partitioning {} candidates with {} guesses...",
        pool.len(),
        vocabulary.len()
    ));
    pb.enable_steady_tick(Duration::from_millis(100));

    let ranking = rank(vocabulary, pool);
    pb.finish_and_clear();
    ranking
}

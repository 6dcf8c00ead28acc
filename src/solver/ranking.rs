//! Guess ranking by partition count
//!
//! A guess that splits the pool into more feedback groups leaves fewer
//! candidates on average, whatever the answer turns out to be.

use super::partition::{Partition, group_sizes};
use crate::core::{Word, WordleError};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Score of one guess against the current pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedGuess<'a> {
    pub guess: &'a Word,
    /// Number of distinct feedback groups the guess induces
    pub group_count: usize,
    /// Size of the largest group
    pub largest_group: usize,
    /// Whether the guess could itself be the answer
    pub in_pool: bool,
}

impl<'a> RankedGuess<'a> {
    /// Rebuild the full partition for display
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if `pool` holds words of another length.
    pub fn partition(&self, pool: &'a [Word]) -> Result<Partition<'a>, WordleError> {
        Partition::of(self.guess, pool)
    }
}

/// Rank every guess of `vocabulary` against `pool`
///
/// Order: more groups first; among equal counts, pool members first; then
/// lexicographic. Guesses whose length differs from the pool are skipped,
/// and a guess repeated in `vocabulary` is ranked once.
/// An empty pool or vocabulary gives an empty ranking.
///
/// # Errors
/// Returns `WordleError::LengthMismatch` if the pool mixes word lengths.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::rank;
///
/// let vocabulary = vec![Word::new("zzzzz").unwrap(), Word::new("crane").unwrap()];
/// let pool = vec![
///     Word::new("slate").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
///
/// let ranking = rank(&vocabulary, &pool).unwrap();
/// assert_eq!(ranking[0].guess.text(), "crane");
/// assert_eq!(ranking[0].group_count, 2);
/// ```
pub fn rank<'a>(
    vocabulary: &'a [Word],
    pool: &[Word],
) -> Result<Vec<RankedGuess<'a>>, WordleError> {
    let Some(first) = pool.first() else {
        return Ok(Vec::new());
    };
    let length = first.len();
    for word in pool {
        WordleError::check_length(length, word.len())?;
    }

    let members: FxHashSet<&str> = pool.iter().map(Word::text).collect();

    // Each distinct guess is scored once, whatever the vocabulary repeats
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let guesses: Vec<&'a Word> = vocabulary
        .iter()
        .filter(|guess| guess.len() == length && seen.insert(guess.text()))
        .collect();

    let mut ranking = guesses
        .par_iter()
        .map(|&guess| -> Result<RankedGuess<'a>, WordleError> {
            let sizes = group_sizes(guess, pool)?;
            Ok(RankedGuess {
                guess,
                group_count: sizes.len(),
                largest_group: sizes.values().copied().max().unwrap_or(0),
                in_pool: members.contains(guess.text()),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ranking.sort_by(|a, b| {
        b.group_count
            .cmp(&a.group_count)
            .then_with(|| b.in_pool.cmp(&a.in_pool))
            .then_with(|| a.guess.cmp(b.guess))
    });

    debug!(
        "ranked {} guesses against {} candidates",
        ranking.len(),
        pool.len()
    );

    Ok(ranking)
}

/// The recommended guesses from a ranking
///
/// Takes every guess tied for the highest group count. If any of those could
/// be the answer, only they are returned; otherwise the whole tied set is.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::{rank, recommend};
///
/// let vocabulary = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("bbbbb").unwrap(),
/// ];
/// let pool = vec![Word::new("aaaaa").unwrap(), Word::new("bbbbb").unwrap()];
///
/// let ranking = rank(&vocabulary, &pool).unwrap();
/// let best = recommend(&ranking);
/// assert_eq!(best.len(), 2);
/// ```
#[must_use]
pub fn recommend<'r, 'a>(ranking: &'r [RankedGuess<'a>]) -> Vec<&'r RankedGuess<'a>> {
    let Some(top) = ranking.first() else {
        return Vec::new();
    };

    let tied: Vec<&RankedGuess<'a>> = ranking
        .iter()
        .take_while(|ranked| ranked.group_count == top.group_count)
        .collect();

    let members: Vec<&RankedGuess<'a>> = tied.iter().copied().filter(|r| r.in_pool).collect();
    if members.is_empty() { tied } else { members }
}

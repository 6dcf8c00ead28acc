//! Partitioning a candidate pool by feedback
//!
//! For a guess, every candidate lands in exactly one group: the group of the
//! feedback the guess would receive if that candidate were the answer.

use crate::core::{Feedback, Word, WordleError};
use rustc_hash::FxHashMap;

/// One feedback group of a partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub feedback: Feedback,
    pub words: Vec<&'a Word>,
}

/// The partition of a pool induced by one guess
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    guess: &'a Word,
    groups: FxHashMap<Feedback, Vec<&'a Word>>,
}

impl<'a> Partition<'a> {
    /// Group every word of `pool` by the feedback `guess` would receive against it
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if a pool word differs in length from the guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    /// use wordle_assist::solver::Partition;
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let pool = vec![
    ///     Word::new("smile").unwrap(),
    ///     Word::new("stale").unwrap(),
    ///     Word::new("spate").unwrap(),
    /// ];
    ///
    /// let partition = Partition::of(&guess, &pool).unwrap();
    /// assert_eq!(partition.group_count(), 3);
    /// assert_eq!(partition.largest_group(), 1);
    /// ```
    pub fn of(guess: &'a Word, pool: &'a [Word]) -> Result<Self, WordleError> {
        let mut groups: FxHashMap<Feedback, Vec<&'a Word>> = FxHashMap::default();

        for candidate in pool {
            let feedback = Feedback::calculate(guess, candidate)?;
            groups.entry(feedback).or_default().push(candidate);
        }

        Ok(Self { guess, groups })
    }

    #[must_use]
    pub const fn guess(&self) -> &'a Word {
        self.guess
    }

    /// Number of distinct feedback groups
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Size of the largest group (worst-case remaining candidates)
    #[must_use]
    pub fn largest_group(&self) -> usize {
        self.groups.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Total number of partitioned words
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Words that would produce `feedback`, in pool order
    #[must_use]
    pub fn get(&self, feedback: &Feedback) -> Option<&[&'a Word]> {
        self.groups.get(feedback).map(Vec::as_slice)
    }

    /// Groups for display: largest first, words in lexicographic order
    ///
    /// Groups of equal size are ordered by feedback so output is deterministic.
    #[must_use]
    pub fn sorted_groups(&self) -> Vec<Group<'a>> {
        let mut groups: Vec<Group<'a>> = self
            .groups
            .iter()
            .map(|(feedback, words)| {
                let mut words = words.clone();
                words.sort();
                Group {
                    feedback: feedback.clone(),
                    words,
                }
            })
            .collect();

        groups.sort_by(|a, b| {
            b.words
                .len()
                .cmp(&a.words.len())
                .then_with(|| a.feedback.cmp(&b.feedback))
        });
        groups
    }
}

/// Count group sizes without keeping the members
///
/// Ranking only needs the counts, so this avoids holding a word list per guess.
pub(crate) fn group_sizes(
    guess: &Word,
    pool: &[Word],
) -> Result<FxHashMap<Feedback, usize>, WordleError> {
    let mut counts = FxHashMap::default();

    for candidate in pool {
        let feedback = Feedback::calculate(guess, candidate)?;
        *counts.entry(feedback).or_insert(0) += 1;
    }

    Ok(counts)
}

//! Word predicates and pool narrowing

use super::{Feedback, Word, WordleError};

/// A pure predicate over words
pub trait WordFilter {
    /// Check whether `word` is consistent with this filter
    fn matches(&self, word: &Word) -> bool;
}

impl<F: WordFilter + ?Sized> WordFilter for &F {
    fn matches(&self, word: &Word) -> bool {
        (**self).matches(word)
    }
}

/// Accepts exactly the words that would produce `observed` when `guess` is played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackFilter {
    guess: Word,
    observed: Feedback,
}

impl FeedbackFilter {
    /// Create a filter from one real round of play
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if the feedback length differs from the guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{FeedbackFilter, Word, WordFilter};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let filter = FeedbackFilter::new(guess, "bbgbg".parse().unwrap()).unwrap();
    /// assert!(filter.matches(&Word::new("slate").unwrap()));
    /// assert!(!filter.matches(&Word::new("crate").unwrap()));
    /// ```
    pub fn new(guess: Word, observed: Feedback) -> Result<Self, WordleError> {
        WordleError::check_length(guess.len(), observed.len())?;
        Ok(Self { guess, observed })
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn observed(&self) -> &Feedback {
        &self.observed
    }
}

impl WordFilter for FeedbackFilter {
    fn matches(&self, word: &Word) -> bool {
        Feedback::calculate(&self.guess, word).is_ok_and(|feedback| feedback == self.observed)
    }
}

/// Keep the words of `pool` accepted by `filter`, preserving order
///
/// The input is never modified; the result is never larger than the input.
#[must_use]
pub fn narrow<F: WordFilter + ?Sized>(pool: &[Word], filter: &F) -> Vec<Word> {
    pool.iter().filter(|word| filter.matches(word)).cloned().collect()
}

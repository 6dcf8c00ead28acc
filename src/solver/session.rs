//! Session state threaded through rounds of play

use crate::core::{Feedback, FeedbackFilter, Word, WordleError, narrow};
use log::debug;

/// Snapshot of a game in progress
///
/// Every round produces a new snapshot; older snapshots stay valid, so undo
/// is just keeping the previous value around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    word_length: usize,
    history: Vec<(Word, Feedback)>,
    pool: Vec<Word>,
}

impl Session {
    /// Start a session with every dictionary word of `word_length` as a candidate
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    /// use wordle_assist::solver::Session;
    ///
    /// let dictionary = vec![Word::new("crane").unwrap(), Word::new("cranes").unwrap()];
    /// let session = Session::new(5, &dictionary);
    /// assert_eq!(session.pool().len(), 1);
    /// ```
    #[must_use]
    pub fn new(word_length: usize, dictionary: &[Word]) -> Self {
        let pool: Vec<Word> = dictionary
            .iter()
            .filter(|word| word.len() == word_length)
            .cloned()
            .collect();

        debug!(
            "new session: {} of {} dictionary words have {word_length} letters",
            pool.len(),
            dictionary.len()
        );

        Self {
            word_length,
            history: Vec::new(),
            pool,
        }
    }

    /// Apply one round of feedback, returning the narrowed session
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if the guess or feedback does not
    /// have the session's word length.
    pub fn apply(&self, guess: &Word, feedback: Feedback) -> Result<Self, WordleError> {
        WordleError::check_length(self.word_length, guess.len())?;
        let filter = FeedbackFilter::new(guess.clone(), feedback)?;
        let pool = narrow(&self.pool, &filter);

        debug!(
            "round {}: {guess} {} leaves {} of {} candidates",
            self.round(),
            filter.observed(),
            pool.len(),
            self.pool.len()
        );

        let mut history = self.history.clone();
        history.push((guess.clone(), filter.observed().clone()));

        Ok(Self {
            word_length: self.word_length,
            history,
            pool,
        })
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Candidates still consistent with every round so far
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// The 1-based number of the next round
    #[must_use]
    pub fn round(&self) -> usize {
        self.history.len() + 1
    }

    /// True once the last feedback was all matches
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, feedback)| feedback.is_perfect())
    }
}

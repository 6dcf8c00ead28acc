//! Non-interactive suggestion command
//!
//! Replays rounds given as `guess=feedback` pairs and reports what is left.

use crate::core::{Feedback, Word, WordleError};
use crate::solver::Session;
use anyhow::{Context, Result, bail};

/// Parse a round written as `crane=bbgyb`
///
/// # Errors
///
/// Returns an error if the `=` is missing, the guess is not a word, the
/// feedback has a symbol other than b/y/g, or the two lengths differ.
pub fn parse_round(round: &str) -> Result<(Word, Feedback)> {
    let Some((guess, feedback)) = round.split_once('=') else {
        bail!("round {round:?} must look like GUESS=FEEDBACK, e.g. crane=bbgyb");
    };

    let guess = Word::new(guess.trim()).with_context(|| format!("invalid guess in {round:?}"))?;
    let feedback: Feedback = feedback
        .trim()
        .parse()
        .with_context(|| format!("invalid feedback in {round:?}"))?;
    WordleError::check_length(guess.len(), feedback.len())
        .with_context(|| format!("guess and feedback differ in length in {round:?}"))?;

    Ok((guess, feedback))
}

/// Apply every round in order to `session`
///
/// # Errors
///
/// Returns `WordleError::LengthMismatch` if a round does not fit the session's word length.
pub fn run_suggest(session: Session, rounds: &[(Word, Feedback)]) -> Result<Session, WordleError> {
    rounds
        .iter()
        .try_fold(session, |current, (guess, feedback)| {
            current.apply(guess, feedback.clone())
        })
}

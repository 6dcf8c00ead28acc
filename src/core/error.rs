//! Error types shared by the matching engine

use super::word::WordError;
use thiserror::Error;

/// Errors raised by the template compiler, the feedback engine and sessions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordleError {
    /// The template string could not be parsed
    #[error("invalid template at offset {position}: {message}")]
    Parse { position: usize, message: String },

    /// Two sequences that must share a length do not
    #[error("length mismatch: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A feedback string contains something other than `b`, `y` or `g`
    #[error("invalid feedback symbol {symbol:?} at position {position} (use b, y or g)")]
    InvalidFeedbackSymbol { symbol: char, position: usize },

    /// A word failed validation
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

impl WordleError {
    pub(crate) fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }

    /// Fail with `LengthMismatch` unless the two lengths agree
    pub(crate) const fn check_length(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::LengthMismatch { expected, actual })
        }
    }
}

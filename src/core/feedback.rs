//! Wordle feedback calculation and representation
//!
//! Feedback holds one mark per guess position:
//! - `Absent` (b) - letter not in the word, or all its occurrences already credited
//! - `Present` (y) - letter in the word at another position
//! - `Match` (g) - letter in the correct position
//!
//! Unlike a packed base-3 code, this representation works for any word length.

use super::{Word, WordleError};
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    Absent,
    Present,
    Match,
}

impl Mark {
    /// External symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'b',
            Self::Present => 'y',
            Self::Match => 'g',
        }
    }

    /// Parse a single external symbol (case-insensitive)
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'b' | 'B' => Some(Self::Absent),
            'y' | 'Y' => Some(Self::Present),
            'g' | 'G' => Some(Self::Match),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Match => '🟩',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Build feedback from marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// All-`Match` feedback of the given length
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![Mark::Match; len])
    }

    /// Calculate the feedback when `guess` is played and `actual` is the hidden word
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches; count every unmatched letter of `actual`
    /// 2. Second pass, left to right: a non-matching guess letter is `Present`
    ///    while its leftover count is positive (consuming one), else `Absent`
    ///
    /// Earlier positions win `Present` when the guess repeats a letter.
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let actual = Word::new("erase").unwrap();
    /// let feedback = Feedback::calculate(&guess, &actual).unwrap();
    /// assert_eq!(feedback.to_string(), "ybyyb");
    /// ```
    pub fn calculate(guess: &Word, actual: &Word) -> Result<Self, WordleError> {
        WordleError::check_length(guess.len(), actual.len())?;

        let guess = guess.chars();
        let actual = actual.chars();
        let mut marks = vec![Mark::Absent; guess.len()];
        let mut leftover = [0usize; 26];

        for (i, (&g, &a)) in guess.iter().zip(actual).enumerate() {
            if g == a {
                marks[i] = Mark::Match;
            } else {
                leftover[letter_index(a)] += 1;
            }
        }

        for (mark, &g) in marks.iter_mut().zip(guess) {
            if *mark == Mark::Match {
                continue;
            }
            let count = &mut leftover[letter_index(g)];
            if *count > 0 {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Ok(Self(marks))
    }

    /// The per-position marks
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is a match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Match)
    }

    /// Count the number of `Match` positions
    #[must_use]
    pub fn count_matches(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Match).count()
    }

    /// Count the number of `Present` positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

/// Words are validated to lowercase ASCII, so every byte maps into `0..26`
#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = WordleError;

    /// Parse feedback from its external form, e.g. "bygyb"
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Mark};
    ///
    /// let feedback: Feedback = "GyB".parse().unwrap();
    /// assert_eq!(feedback.marks(), &[Mark::Match, Mark::Present, Mark::Absent]);
    /// assert!("gyx".parse::<Feedback>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Mark::from_symbol(symbol)
                    .ok_or(WordleError::InvalidFeedbackSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, actual: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let actual = Word::new(actual).unwrap();
        Feedback::calculate(&guess, &actual).unwrap().to_string()
    }

    #[test]
    fn feedback_all_absent() {
        assert_eq!(feedback("abcde", "fghij"), "bbbbb");
    }

    #[test]
    fn feedback_all_match() {
        let word = Word::new("crane").unwrap();
        let result = Feedback::calculate(&word, &word).unwrap();

        assert_eq!(result, Feedback::perfect(5));
        assert!(result.is_perfect());
        assert_eq!(result.count_matches(), 5);
    }

    #[test]
    fn feedback_self_is_perfect_for_any_length() {
        for word in ["at", "crane", "aaaaa", "zzzzz", "puzzles"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::calculate(&w, &w).unwrap().is_perfect());
        }
    }

    #[test]
    fn feedback_duplicate_letters_both_credited() {
        // ERASE has two e's, neither at positions 2 or 3
        assert_eq!(feedback("speed", "erase"), "ybyyb");
    }

    #[test]
    fn feedback_duplicate_letters_capped_by_target() {
        // SPEED has two e's, so only the first two of EERIE's three are credited
        assert_eq!(feedback("eerie", "speed"), "yybbb");
        // the only e of TEACH is matched, nothing left for the other e's
        assert_eq!(feedback("eerie", "teach"), "bgbbb");
    }

    #[test]
    fn feedback_match_takes_priority_over_present() {
        // ROBOT vs FLOOR: second O is a match, first O takes the other O
        assert_eq!(feedback("robot", "floor"), "yybgb");
        // THOSE's only e is matched at the end
        assert_eq!(feedback("geese", "those"), "bbbgg");
    }

    #[test]
    fn feedback_rotation() {
        assert_eq!(feedback("abcde", "eabcd"), "yyyyy");
    }

    #[test]
    fn feedback_crate_vs_trace() {
        assert_eq!(feedback("crate", "trace"), "yggyg");
    }

    #[test]
    fn feedback_real_wordle_example() {
        let result = feedback("crane", "slate");
        assert_eq!(result, "bbgbg");
    }

    #[test]
    fn feedback_length_mismatch() {
        let guess = Word::new("crane").unwrap();
        let actual = Word::new("cranes").unwrap();
        assert_eq!(
            Feedback::calculate(&guess, &actual),
            Err(WordleError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn feedback_long_words_keep_every_present_mark() {
        // 300 unmatched copies of each letter on both sides
        let guess = Word::new("c".repeat(300) + &"a".repeat(300)).unwrap();
        let actual = Word::new("a".repeat(300) + &"c".repeat(300)).unwrap();

        let result = Feedback::calculate(&guess, &actual).unwrap();
        assert_eq!(result.count_present(), 600);
        assert_eq!(result.count_matches(), 0);

        let guess = Word::new("b".repeat(256)).unwrap();
        let actual = Word::new("a".repeat(256)).unwrap();
        let all_absent = Feedback::calculate(&guess, &actual).unwrap();
        assert!(all_absent.marks().iter().all(|&m| m == Mark::Absent));
    }

    #[test]
    fn feedback_counts() {
        let result: Feedback = "ygbgy".parse().unwrap();
        assert_eq!(result.count_matches(), 2);
        assert_eq!(result.count_present(), 2);
        assert!(!result.is_perfect());
    }

    #[test]
    fn feedback_from_str_valid() {
        let lower: Feedback = "gybbg".parse().unwrap();
        let upper: Feedback = "GYBBG".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_string(), "gybbg");
        assert_eq!(lower.len(), 5);
    }

    #[test]
    fn feedback_from_str_invalid_symbol() {
        assert_eq!(
            "gy-bg".parse::<Feedback>(),
            Err(WordleError::InvalidFeedbackSymbol {
                symbol: '-',
                position: 2
            })
        );
    }

    #[test]
    fn feedback_empty_is_not_perfect() {
        let empty: Feedback = "".parse().unwrap();
        assert!(empty.is_empty());
        assert!(!empty.is_perfect());
    }

    #[test]
    fn feedback_to_emoji() {
        let result: Feedback = "gyb".parse().unwrap();
        assert_eq!(result.to_emoji(), "🟩🟨⬜");
    }
}

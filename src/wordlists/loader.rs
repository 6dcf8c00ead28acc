//! Word list loading utilities
//!
//! Provides functions to load word lists from files and shape them for a session.

use crate::core::Word;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are ignored; lines that are not valid words are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|e| {
                    skipped += 1;
                    debug!("skipping {line:?} in {}: {e}", path.display());
                })
                .ok()
        })
        .collect();

    if skipped > 0 {
        warn!(
            "skipped {skipped} invalid entries while loading {}",
            path.display()
        );
    }

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "n0pe", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Keep only words of the given length, preserving order
#[must_use]
pub fn with_length(words: &[Word], length: usize) -> Vec<Word> {
    words.iter().filter(|w| w.len() == length).cloned().collect()
}

/// Union of answers and extra guesses, answers first, without duplicates
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::{merge_vocabulary, words_from_slice};
///
/// let answers = words_from_slice(&["crane", "slate"]);
/// let extra = words_from_slice(&["salet", "crane"]);
/// let vocabulary = merge_vocabulary(&answers, &extra);
/// assert_eq!(vocabulary.len(), 3);
/// ```
#[must_use]
pub fn merge_vocabulary(answers: &[Word], extra: &[Word]) -> Vec<Word> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    answers
        .iter()
        .chain(extra)
        .filter(|word| seen.insert(word.text()))
        .cloned()
        .collect()
}

//! Word lists for Wordle solving
//!
//! Loading dictionaries and building the guess vocabulary.

pub mod loader;

pub use loader::{load_from_file, merge_vocabulary, with_length, words_from_slice};

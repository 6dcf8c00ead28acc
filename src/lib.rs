//! Wordle Assist
//!
//! Narrows a dictionary from partial knowledge of a Wordle answer and ranks
//! guesses by how many feedback groups they split the remaining candidates into.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Feedback, Word, compile, narrow};
//! use wordle_assist::solver::{rank, recommend};
//! use wordle_assist::wordlists::words_from_slice;
//!
//! let dictionary = words_from_slice(&["crate", "crane", "slate", "plate"]);
//!
//! // Second letter l, fourth letter t
//! let filter = compile("_l_t_", "", "").unwrap();
//! let pool = narrow(&dictionary, &filter);
//! assert_eq!(pool.len(), 2);
//!
//! // Feedback for a guess against a known answer
//! let feedback = Feedback::calculate(&Word::new("crate").unwrap(), &Word::new("trace").unwrap()).unwrap();
//! assert_eq!(feedback.to_string(), "yggyg");
//!
//! // Best next guesses for the pool
//! let ranking = rank(&dictionary, &pool).unwrap();
//! let best = recommend(&ranking);
//! assert_eq!(best[0].group_count, 2);
//! ```

// Core domain types
pub mod core;

// Partitioning and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Guess recommendation
//!
//! Partitions the candidate pool by feedback and ranks guesses by how many
//! groups they split it into.

mod partition;
mod ranking;
mod session;

pub use partition::{Group, Partition};
pub use ranking::{RankedGuess, rank, recommend};
pub use session::Session;

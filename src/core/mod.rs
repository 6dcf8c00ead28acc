//! Core domain types for Wordle
//!
//! Words, feedback, templates and the predicates built from them.
//! Everything here is pure: no I/O, no shared state.

mod error;
mod feedback;
mod filter;
mod template;
mod word;

pub use error::WordleError;
pub use feedback::{Feedback, Mark};
pub use filter::{FeedbackFilter, WordFilter, narrow};
pub use template::{CompiledFilter, GlobalConstraints, PositionSpec, Template, compile};
pub use word::{Word, WordError};

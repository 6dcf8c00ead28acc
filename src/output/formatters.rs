//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Render a guess with each letter colored by its feedback mark
///
/// Letters beyond the end of `feedback` are left uncolored.
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .enumerate()
        .map(|(i, letter)| {
            let cell = format!(" {letter} ");
            match feedback.marks().get(i) {
                Some(Mark::Match) => cell.black().on_green().bold().to_string(),
                Some(Mark::Present) => cell.black().on_yellow().bold().to_string(),
                Some(Mark::Absent) => cell.white().on_bright_black().to_string(),
                None => cell,
            }
        })
        .collect()
}

/// Summarize a feedback as "N green, M yellow"
#[must_use]
pub fn mark_summary(feedback: &Feedback) -> String {
    format!(
        "{} green, {} yellow",
        feedback.count_matches(),
        feedback.count_present()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss)]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing what share of the pool a group holds
#[must_use]
pub fn group_bar(group_size: usize, pool_size: usize, width: usize) -> String {
    create_progress_bar(group_size as f64, pool_size as f64, width)
}

/// Join words into upper-case, space separated text, eliding past `limit`
#[must_use]
pub fn word_list(words: &[&Word], limit: usize) -> String {
    let mut shown: Vec<String> = words
        .iter()
        .take(limit)
        .map(|w| w.text().to_uppercase())
        .collect();

    if words.len() > limit {
        shown.push(format!("… (+{})", words.len() - limit));
    }

    shown.join(" ")
}

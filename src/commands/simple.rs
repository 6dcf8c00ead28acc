//! Simple interactive CLI mode
//!
//! Text-based loop: suggest, read the guess actually played, read its feedback.

use super::rank_with_progress;
use crate::core::{Feedback, Word};
use crate::output::{print_pool, print_recommendations};
use crate::solver::{Session, recommend};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates listed each round before eliding
const POOL_PREVIEW: usize = 30;

/// Run the interactive loop until the user quits or input ends
///
/// Returns the session as it stood when the loop ended.
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: BufRead>(
    input: R,
    dictionary: &[Word],
    vocabulary: &[Word],
    word_length: usize,
    top: usize,
) -> Result<Session> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Assist - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Each round I'll rank guesses by how many groups they split the candidates into.");
    println!("Type the guess you played (Enter takes the first suggestion), then its feedback:\n");
    println!("  - g for green (correct position)");
    println!("  - y for yellow (wrong position)");
    println!("  - b for black/gray (not in word)");
    println!("  - or 'win' if you got it right\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last round\n");

    let initial = Session::new(word_length, dictionary);
    let mut session = initial.clone();
    let mut undo_stack: Vec<Session> = Vec::new();
    let mut lines = input.lines();

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {}: {} candidates remaining",
            session.round(),
            session.pool().len()
        );
        println!("────────────────────────────────────────────────────────────");

        print_pool(session.pool(), POOL_PREVIEW);

        let suggested = if session.pool().is_empty() {
            println!("Type 'undo' to go back, or 'new' to start over.\n");
            None
        } else {
            let ranking = rank_with_progress(vocabulary, session.pool())?;
            print_recommendations(&ranking, session.pool(), top);
            recommend(&ranking).first().map(|ranked| ranked.guess.clone())
        };

        let Some(line) = prompt(&mut lines, "\nGuess")? else {
            return Ok(session);
        };

        let guess = match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(session);
            }
            "new" | "n" => {
                session = initial.clone();
                undo_stack.clear();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "undo" | "u" => {
                if let Some(previous) = undo_stack.pop() {
                    session = previous;
                    println!("✓ Undone! Back to round {}\n", session.round());
                } else {
                    println!("Nothing to undo!\n");
                }
                continue;
            }
            "" => {
                let Some(word) = suggested else {
                    println!("No suggestion available - type a guess.\n");
                    continue;
                };
                println!("Playing {}", word.text().to_uppercase().bright_green());
                word
            }
            text => match Word::new(text) {
                Ok(word) if word.len() == session.word_length() => word,
                Ok(word) => {
                    println!(
                        "❌ {} has {} letters, expected {}\n",
                        word.text().to_uppercase(),
                        word.len(),
                        session.word_length()
                    );
                    continue;
                }
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            },
        };

        let feedback = loop {
            let Some(answer) = prompt(&mut lines, "Feedback (b/y/g or 'win')")? else {
                return Ok(session);
            };
            let answer = answer.to_lowercase();

            if matches!(answer.as_str(), "win" | "correct" | "solved") {
                break Feedback::perfect(guess.len());
            }
            match answer.parse::<Feedback>() {
                Ok(feedback) if feedback.len() == guess.len() => break feedback,
                Ok(feedback) => println!(
                    "❌ Feedback has {} symbols, expected {}\n",
                    feedback.len(),
                    guess.len()
                ),
                Err(e) => println!("❌ {e}\n"),
            }
        };

        let next = session.apply(&guess, feedback)?;
        undo_stack.push(std::mem::replace(&mut session, next));

        if session.is_solved() {
            println!(
                "\n{}",
                format!("🎉 Solved in {} rounds!", session.history().len())
                    .bright_green()
                    .bold()
            );

            let again = prompt(&mut lines, "Play again? (yes/no)")?.unwrap_or_default();
            if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                session = initial.clone();
                undo_stack.clear();
                println!("\n🔄 New game started!\n");
            } else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(session);
            }
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush().context("failed to flush prompt")?;

    lines
        .next()
        .transpose()
        .context("failed to read input")
        .map(|line| line.map(|l| l.trim().to_string()))
}

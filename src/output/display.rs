//! Display functions for command results

use super::formatters::{colored_guess, feedback_to_emoji, group_bar, mark_summary, word_list};
use crate::commands::{AnalysisResult, SolveResult};
use crate::core::Word;
use crate::solver::{RankedGuess, recommend};
use colored::Colorize;

/// Groups listed per recommended guess before eliding
const MAX_GROUPS_SHOWN: usize = 12;
/// Words listed per group before eliding
const MAX_WORDS_PER_GROUP: usize = 8;

/// Print the remaining candidates
pub fn print_pool(pool: &[Word], limit: usize) {
    if pool.is_empty() {
        println!(
            "{}",
            "❌ No candidates remain - the constraints contradict each other."
                .red()
                .bold()
        );
        return;
    }

    println!(
        "\n📋 {} {}",
        pool.len().to_string().bright_yellow().bold(),
        if pool.len() == 1 { "candidate" } else { "candidates" }
    );

    let refs: Vec<&Word> = pool.iter().take(limit).collect();
    for line in refs.chunks(10) {
        println!("   {}", word_list(line, line.len()));
    }
    if pool.len() > limit {
        println!("   {}", format!("… and {} more", pool.len() - limit).bright_black());
    }
}

/// Print the recommended guesses and the top of the ranking
///
/// The partition of each recommended guess is shown when the pool is small.
pub fn print_recommendations(ranking: &[RankedGuess<'_>], pool: &[Word], top: usize) {
    let best = recommend(ranking);
    let Some(first) = best.first() else {
        return;
    };

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "🎯 {} ({} groups{})",
        "Suggested guesses".bright_cyan().bold(),
        first.group_count,
        if first.in_pool {
            ", could be the answer"
        } else {
            ""
        }
    );
    println!("{}", "─".repeat(60).cyan());

    for ranked in best.iter().take(top) {
        println!(
            "   {}  worst case {}",
            ranked.guess.text().to_uppercase().bright_green().bold(),
            ranked.largest_group
        );
    }
    if best.len() > top {
        println!("   {}", format!("… {} more tied", best.len() - top).bright_black());
    }

    if pool.len() <= 50
        && let Ok(partition) = first.partition(pool)
    {
        println!(
            "\n   Groups for {}:",
            first.guess.text().to_uppercase().bright_white().bold()
        );
        for group in partition.sorted_groups().iter().take(MAX_GROUPS_SHOWN) {
            println!(
                "   {} {:3}  {}",
                feedback_to_emoji(&group.feedback),
                group.words.len(),
                word_list(&group.words, MAX_WORDS_PER_GROUP)
            );
        }
    }

    println!("\n📊 {}", "Top guesses:".bright_cyan().bold());
    for (i, ranked) in ranking.iter().take(top).enumerate() {
        let marker = if ranked.in_pool { "●" } else { " " };
        println!(
            "   {:>3}. {} {}  {:4} groups, worst case {}",
            i + 1,
            marker.green(),
            ranked.guess.text().to_uppercase(),
            ranked.group_count,
            ranked.largest_group
        );
    }
}

/// Print the result of analyzing a guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!(
        "   Groups:      {}",
        result.group_count.to_string().bright_yellow()
    );
    println!("   Worst case:  {} candidates", result.largest_group);
    println!(
        "   Candidate:   {}",
        if result.in_pool { "yes" } else { "no" }
    );

    println!();
    for (feedback, words) in &result.groups {
        let refs: Vec<&Word> = words.iter().collect();
        println!(
            "   {} [{}] {:4}  {}",
            colored_guess(&result.guess, feedback),
            group_bar(words.len(), result.total_candidates, 20).green(),
            words.len(),
            word_list(&refs, MAX_WORDS_PER_GROUP)
        );
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colored_guess(&step.word, &step.feedback),
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Groups:     {}", step.group_count);
            println!("  Marks:      {}", mark_summary(&step.feedback));
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

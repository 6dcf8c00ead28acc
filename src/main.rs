//! Wordle Assist - CLI
//!
//! Template queries, feedback replay, partition analysis, self-play and an
//! interactive loop over a dictionary file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use wordle_assist::{
    commands::{
        QueryConfig, SolveConfig, analyze_guess, parse_round, rank_with_progress, run_query,
        run_simple, run_suggest, solve_word,
    },
    core::Word,
    output::{
        formatters::colored_guess, print_analysis_result, print_pool, print_recommendations,
        print_solve_result,
    },
    solver::Session,
    wordlists::{load_from_file, merge_vocabulary, with_length},
};

/// Candidates listed by `suggest` before eliding
const POOL_PREVIEW: usize = 50;

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant: narrow a dictionary by template or feedback and rank the next guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary of possible answers, one word per line
    #[arg(short, long, global = true, env = "WORDLE_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Extra words allowed as guesses but never answers
    #[arg(short, long, global = true, env = "WORDLE_GUESSES")]
    guesses: Option<PathBuf>,

    /// Word length for feedback modes
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Number of recommendations to display
    #[arg(short, long, global = true, default_value = "10")]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple CLI mode (default - interactive guess/feedback loop)
    Simple,

    /// List dictionary words matching a template, then rank guesses for them
    Query {
        /// Template: letter = fixed, _ = any, [abc] = none of a, b, c
        template: String,

        /// Letters absent from the word
        #[arg(short = 'x', long, default_value = "")]
        exclude: String,

        /// Letters present somewhere in the word
        #[arg(short = 'i', long, default_value = "")]
        include: String,
    },

    /// Replay rounds written as GUESS=FEEDBACK (b/y/g) and suggest the next guess
    Suggest {
        /// Rounds in order, e.g. crane=bbgyb slate=bgggg
        rounds: Vec<String>,
    },

    /// Show how one guess partitions the candidates
    Analyze {
        /// Guess to analyze
        guess: String,

        /// Narrow the candidates with a template first
        #[arg(long)]
        template: Option<String>,

        /// Letters absent from the word (with --template)
        #[arg(short = 'x', long, default_value = "")]
        exclude: String,

        /// Letters present somewhere in the word (with --template)
        #[arg(short = 'i', long, default_value = "")]
        include: String,
    },

    /// Solve a known target by always playing the first recommendation
    Solve {
        /// The target word to solve
        word: String,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },
}

fn load_list(path: &Path) -> Result<Vec<Word>> {
    load_from_file(path).with_context(|| format!("failed to read word list {}", path.display()))
}

/// Load the answer dictionary and the guess vocabulary
///
/// Returns (`dictionary`, `vocabulary`); the vocabulary always contains the
/// dictionary and never repeats a word.
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let path = cli
        .dictionary
        .as_deref()
        .context("no dictionary given: pass --dictionary or set WORDLE_DICTIONARY")?;
    let dictionary = load_list(path)?;

    let extra = match &cli.guesses {
        Some(path) => load_list(path)?,
        None => Vec::new(),
    };
    let vocabulary = merge_vocabulary(&dictionary, &extra);

    info!(
        "loaded {} dictionary words, {} guessable words",
        dictionary.len(),
        vocabulary.len()
    );
    Ok((dictionary, vocabulary))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (dictionary, vocabulary) = load_wordlists(&cli)?;

    // Default to Simple mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Simple) {
        Commands::Simple => {
            run_simple(io::stdin().lock(), &dictionary, &vocabulary, cli.length, cli.top)?;
            Ok(())
        }
        Commands::Query {
            template,
            exclude,
            include,
        } => {
            let config = QueryConfig::new(template.as_str())
                .excluding(exclude.as_str())
                .including(include.as_str());
            run_query_command(&config, &dictionary, &vocabulary, cli.top)
        }
        Commands::Suggest { rounds } => {
            run_suggest_command(rounds, &dictionary, &vocabulary, cli.length, cli.top)
        }
        Commands::Analyze {
            guess,
            template,
            exclude,
            include,
        } => {
            let candidates = match template {
                Some(template) => {
                    let config = QueryConfig::new(template.as_str())
                        .excluding(exclude.as_str())
                        .including(include.as_str());
                    run_query(&config, &dictionary)?
                }
                None => with_length(&dictionary, Word::new(guess)?.len()),
            };
            let result = analyze_guess(guess, &vocabulary, &candidates)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Solve {
            word,
            max_guesses,
            verbose,
        } => {
            let config = SolveConfig {
                target: word.clone(),
                max_guesses: *max_guesses,
            };
            let result = solve_word(config, &dictionary, &vocabulary)?;
            print_solve_result(&result, *verbose);
            Ok(())
        }
    }
}

fn run_query_command(
    config: &QueryConfig,
    dictionary: &[Word],
    vocabulary: &[Word],
    top: usize,
) -> Result<()> {
    let matches = run_query(config, dictionary)
        .with_context(|| format!("invalid template {:?}", config.template))?;

    // Every match is listed, as a plain word search would
    print_pool(&matches, matches.len());
    if !matches.is_empty() {
        let ranking = rank_with_progress(vocabulary, &matches)?;
        print_recommendations(&ranking, &matches, top);
    }
    Ok(())
}

fn run_suggest_command(
    rounds: &[String],
    dictionary: &[Word],
    vocabulary: &[Word],
    length: usize,
    top: usize,
) -> Result<()> {
    let rounds = rounds
        .iter()
        .map(|round| parse_round(round))
        .collect::<Result<Vec<_>>>()?;

    let session = run_suggest(Session::new(length, dictionary), &rounds)
        .with_context(|| format!("rounds must use {length}-letter words (see --length)"))?;

    for (guess, feedback) in session.history() {
        println!("   {}", colored_guess(guess, feedback));
    }

    print_pool(session.pool(), POOL_PREVIEW);
    if !session.pool().is_empty() {
        let ranking = rank_with_progress(vocabulary, session.pool())?;
        print_recommendations(&ranking, session.pool(), top);
    }
    Ok(())
}

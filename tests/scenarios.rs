//! End-to-end scenarios across the compiler, feedback, adapter and ranking layers

use rustc_hash::FxHashSet;
use wordle_assist::core::{Feedback, FeedbackFilter, Word, WordFilter, compile, narrow};
use wordle_assist::solver::{Partition, Session, rank, recommend};
use wordle_assist::wordlists::words_from_slice;

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn texts(words: &[Word]) -> Vec<&str> {
    words.iter().map(Word::text).collect()
}

fn feedback(guess: &str, actual: &str) -> String {
    Feedback::calculate(&word(guess), &word(actual))
        .unwrap()
        .to_string()
}

#[test]
fn template_narrows_dictionary() {
    let dictionary = words_from_slice(&["crate", "crane", "slate", "plate"]);
    let filter = compile("_l_t_", "", "").unwrap();

    assert_eq!(texts(&narrow(&dictionary, &filter)), ["slate", "plate"]);
}

#[test]
fn template_with_excludes_and_includes() {
    let dictionary = words_from_slice(&["slate", "plate", "elate", "blate"]);
    let filter = compile("_[e]a_e", "s", "p").unwrap();

    assert_eq!(texts(&narrow(&dictionary, &filter)), ["plate"]);
}

#[test]
fn feedback_scenarios() {
    assert_eq!(feedback("abcde", "eabcd"), "yyyyy");
    assert_eq!(feedback("crate", "trace"), "yggyg");
    assert_eq!(feedback("speed", "erase"), "ybyyb");
    assert_eq!(feedback("crane", "crane"), "ggggg");
}

#[test]
fn feedback_length_mismatch_is_an_error() {
    assert!(Feedback::calculate(&word("crane"), &word("cranes")).is_err());
}

#[test]
fn slate_splits_three_candidates() {
    let pool = words_from_slice(&["smile", "stale", "spate"]);
    let guess = word("slate");
    let partition = Partition::of(&guess, &pool).unwrap();

    assert_eq!(partition.group_count(), 3);
    for (pattern, expected) in [("gybbg", "smile"), ("gygyg", "stale"), ("gbggg", "spate")] {
        let group = partition.get(&pattern.parse().unwrap()).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group[0].text(), expected);
    }

    let vocabulary = words_from_slice(&["slate"]);
    let ranking = rank(&vocabulary, &pool).unwrap();
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].group_count, 3);
}

#[test]
fn partition_groups_cover_pool_exactly_once() {
    let pool = words_from_slice(&[
        "crane", "slate", "plate", "stale", "crate", "grate", "irate", "trace", "react", "eerie",
    ]);

    for guess in &pool {
        let partition = Partition::of(guess, &pool).unwrap();
        let groups = partition.sorted_groups();

        let total: usize = groups.iter().map(|group| group.words.len()).sum();
        assert_eq!(total, pool.len());

        let seen: FxHashSet<&Word> = groups.iter().flat_map(|group| group.words.iter().copied()).collect();
        assert_eq!(seen.len(), pool.len());

        // Each word sits in the group of the feedback it actually produces
        for group in &groups {
            for candidate in &group.words {
                assert_eq!(Feedback::calculate(guess, candidate).unwrap(), group.feedback);
            }
        }
    }
}

#[test]
fn ranking_puts_more_groups_first() {
    let pool = words_from_slice(&["crane", "slate", "plate", "stale", "crate", "grate"]);
    let vocabulary = words_from_slice(&["crane", "slate", "plate", "stale", "crate", "grate", "zzzzz"]);

    let ranking = rank(&vocabulary, &pool).unwrap();

    assert!(ranking.windows(2).all(|pair| pair[0].group_count >= pair[1].group_count));
    assert_eq!(ranking.last().unwrap().guess.text(), "zzzzz");
    assert_eq!(ranking.last().unwrap().group_count, 1);

    let best = recommend(&ranking);
    assert!(best.iter().all(|ranked| ranked.group_count == ranking[0].group_count));
}

#[test]
fn feedback_filter_keeps_the_answer() {
    let dictionary = words_from_slice(&["crane", "slate", "plate", "stale", "crate", "grate", "irate"]);
    let answer = word("grate");

    for guess in &dictionary {
        let observed = Feedback::calculate(guess, &answer).unwrap();
        let filter = FeedbackFilter::new(guess.clone(), observed).unwrap();
        assert!(filter.matches(&answer));

        let narrowed = narrow(&dictionary, &filter);
        assert!(narrowed.contains(&answer));
        assert_eq!(narrow(&narrowed, &filter), narrowed);
    }
}

#[test]
fn session_converges_on_answer() {
    let dictionary = words_from_slice(&["crane", "slate", "plate", "stale", "crate", "grate", "irate"]);
    let answer = word("stale");
    let mut session = Session::new(5, &dictionary);

    while !session.is_solved() {
        let ranking = rank(&dictionary, session.pool()).unwrap();
        let guess = recommend(&ranking)[0].guess.clone();
        let observed = Feedback::calculate(&guess, &answer).unwrap();
        session = session.apply(&guess, observed).unwrap();
        assert!(session.pool().contains(&answer));
        assert!(session.history().len() <= dictionary.len());
    }

    assert_eq!(texts(session.pool()), ["stale"]);
}

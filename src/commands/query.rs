//! Template query command
//!
//! Batch mode: match a dictionary against a template plus letter sets.

use crate::core::{WordFilter, Word, WordleError, compile};

/// A template query as typed on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConfig {
    pub template: String,
    /// Letters absent from the word
    pub excludes: String,
    /// Letters present somewhere in the word
    pub includes: String,
}

impl QueryConfig {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn excluding(mut self, letters: impl Into<String>) -> Self {
        self.excludes = letters.into();
        self
    }

    #[must_use]
    pub fn including(mut self, letters: impl Into<String>) -> Self {
        self.includes = letters.into();
        self
    }
}

/// Return every dictionary word matching the query, in dictionary order
///
/// # Errors
///
/// Returns `WordleError::Parse` if the template is malformed.
pub fn run_query(config: &QueryConfig, dictionary: &[Word]) -> Result<Vec<Word>, WordleError> {
    let filter = compile(&config.template, &config.excludes, &config.includes)?;
    Ok(dictionary
        .iter()
        .filter(|word| filter.matches(word))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn query_wildcards() {
        let dictionary = words_from_slice(&["crate", "crane", "slate", "plate"]);
        let result = run_query(&QueryConfig::new("_l_t_"), &dictionary).unwrap();
        assert_eq!(texts(&result), ["slate", "plate"]);
    }

    #[test]
    fn query_with_letter_sets() {
        let dictionary = words_from_slice(&["crate", "crane", "trace", "react", "slate"]);
        let config = QueryConfig::new("[c]____").excluding("s").including("c");
        let result = run_query(&config, &dictionary).unwrap();
        assert_eq!(texts(&result), ["trace", "react"]);
    }

    #[test]
    fn query_mixed_length_dictionary() {
        let dictionary = words_from_slice(&["cat", "crate", "crates", "cot"]);
        let result = run_query(&QueryConfig::new("c_t"), &dictionary).unwrap();
        assert_eq!(texts(&result), ["cat", "cot"]);
    }

    #[test]
    fn query_contradiction_is_empty_not_error() {
        let dictionary = words_from_slice(&["crate", "slate"]);
        let config = QueryConfig::new("_____").including("z");
        assert!(run_query(&config, &dictionary).unwrap().is_empty());
    }

    #[test]
    fn query_malformed_template() {
        let dictionary = words_from_slice(&["crate"]);
        assert!(matches!(
            run_query(&QueryConfig::new("cr[a"), &dictionary),
            Err(WordleError::Parse { position: 2, .. })
        ));
    }
}

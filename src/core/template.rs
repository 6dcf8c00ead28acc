//! Template compilation
//!
//! A template describes what is known about each position:
//! - `_` - any letter (except globally excluded ones)
//! - `[abc]` - any letter except a, b, c (and globally excluded ones)
//! - any other character - exactly that letter
//!
//! Combined with global exclude/include sets it compiles into a [`CompiledFilter`].

use super::filter::WordFilter;
use super::{Word, WordleError};
use log::debug;
use std::collections::BTreeSet;
use std::fmt;

/// Constraint on a single position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionSpec {
    /// The position must hold this letter
    Exact(char),
    /// No constraint
    Any,
    /// The position must not hold any of these letters
    ExcludeSet(BTreeSet<char>),
}

impl PositionSpec {
    /// Check whether `letter` may occupy a position with this spec
    #[must_use]
    pub fn allows(&self, letter: char) -> bool {
        match self {
            Self::Exact(expected) => letter == *expected,
            Self::Any => true,
            Self::ExcludeSet(excluded) => !excluded.contains(&letter),
        }
    }

    /// Fold the global exclude set into an open position
    ///
    /// Exact positions are left untouched.
    fn with_excludes(self, excludes: &BTreeSet<char>) -> Self {
        match self {
            Self::Exact(_) => self,
            Self::Any if excludes.is_empty() => Self::Any,
            Self::Any => Self::ExcludeSet(excludes.clone()),
            Self::ExcludeSet(mut own) => {
                own.extend(excludes.iter().copied());
                Self::ExcludeSet(own)
            }
        }
    }
}

/// Parsed template: one spec per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    specs: Vec<PositionSpec>,
}

impl Template {
    /// Parse a template string
    ///
    /// # Errors
    /// Returns `WordleError::Parse` if a `[` group is never closed.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{PositionSpec, Template};
    ///
    /// let template = Template::parse("s[ab]_").unwrap();
    /// assert_eq!(template.len(), 3);
    /// assert_eq!(template.specs()[0], PositionSpec::Exact('s'));
    /// assert_eq!(template.specs()[2], PositionSpec::Any);
    ///
    /// assert!(Template::parse("s[ab").is_err());
    /// ```
    pub fn parse(template: &str) -> Result<Self, WordleError> {
        let mut specs = Vec::new();
        let mut chars = template.char_indices();

        while let Some((offset, ch)) = chars.next() {
            let spec = match ch {
                '_' => PositionSpec::Any,
                '[' => {
                    let mut excluded = BTreeSet::new();
                    loop {
                        match chars.next() {
                            Some((_, ']')) => break,
                            Some((_, letter)) => {
                                excluded.insert(letter.to_ascii_lowercase());
                            }
                            None => {
                                return Err(WordleError::parse(offset, "unterminated '['"));
                            }
                        }
                    }
                    PositionSpec::ExcludeSet(excluded)
                }
                letter => PositionSpec::Exact(letter.to_ascii_lowercase()),
            };
            specs.push(spec);
        }

        Ok(Self { specs })
    }

    #[must_use]
    pub fn specs(&self) -> &[PositionSpec] {
        &self.specs
    }

    /// Number of positions, i.e. the word length this template accepts
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl std::str::FromStr for Template {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for spec in &self.specs {
            match spec {
                PositionSpec::Exact(letter) => write!(f, "{letter}")?,
                PositionSpec::Any => write!(f, "_")?,
                PositionSpec::ExcludeSet(excluded) => {
                    write!(f, "[")?;
                    for letter in excluded {
                        write!(f, "{letter}")?;
                    }
                    write!(f, "]")?;
                }
            }
        }
        Ok(())
    }
}

/// Letters known to be absent everywhere and letters known to be present somewhere
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalConstraints {
    excludes: BTreeSet<char>,
    includes: BTreeSet<char>,
}

impl GlobalConstraints {
    /// Build constraints from excluded and required letters (lowercased)
    pub fn new(
        excludes: impl IntoIterator<Item = char>,
        includes: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            excludes: excludes.into_iter().map(|c| c.to_ascii_lowercase()).collect(),
            includes: includes.into_iter().map(|c| c.to_ascii_lowercase()).collect(),
        }
    }

    #[must_use]
    pub const fn excludes(&self) -> &BTreeSet<char> {
        &self.excludes
    }

    #[must_use]
    pub const fn includes(&self) -> &BTreeSet<char> {
        &self.includes
    }
}

/// A template and global constraints compiled into a word predicate
///
/// Required letters are checked against the whole word, so a letter pinned
/// by an exact position also satisfies an include requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFilter {
    positions: Vec<PositionSpec>,
    includes: BTreeSet<char>,
}

impl CompiledFilter {
    /// Combine a parsed template with global constraints
    #[must_use]
    pub fn new(template: Template, constraints: GlobalConstraints) -> Self {
        let GlobalConstraints { excludes, includes } = constraints;
        let positions = template
            .specs
            .into_iter()
            .map(|spec| spec.with_excludes(&excludes))
            .collect();

        Self {
            positions,
            includes,
        }
    }

    /// The effective per-position specs, global excludes already folded in
    #[must_use]
    pub fn positions(&self) -> &[PositionSpec] {
        &self.positions
    }

    /// The word length this filter accepts
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }
}

impl WordFilter for CompiledFilter {
    fn matches(&self, word: &Word) -> bool {
        if word.len() != self.positions.len() {
            return false;
        }

        let letters = word.text();
        self.positions
            .iter()
            .zip(letters.chars())
            .all(|(spec, letter)| spec.allows(letter))
            && self.includes.iter().all(|&letter| letters.contains(letter))
    }
}

/// Compile a template string and letter sets into a word predicate
///
/// # Errors
/// Returns `WordleError::Parse` if the template is malformed.
///
/// # Examples
/// ```
/// use wordle_assist::core::{compile, Word, WordFilter};
///
/// let filter = compile("_l_t_", "", "").unwrap();
/// assert!(filter.matches(&Word::new("slate").unwrap()));
/// assert!(!filter.matches(&Word::new("crane").unwrap()));
/// ```
pub fn compile(template: &str, excludes: &str, includes: &str) -> Result<CompiledFilter, WordleError> {
    let parsed = Template::parse(template)?;
    let constraints = GlobalConstraints::new(excludes.chars(), includes.chars());
    let filter = CompiledFilter::new(parsed, constraints);

    debug!(
        "compiled template {template:?} (exclude {excludes:?}, include {includes:?}) into {} positions",
        filter.word_length()
    );

    Ok(filter)
}

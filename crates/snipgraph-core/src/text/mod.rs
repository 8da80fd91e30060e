//! Text processing utilities for keyword extraction

use std::collections::btree_set;
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

use serde::Serialize;

/// Minimum length of a kept keyword, in characters
pub const MIN_KEYWORD_LEN: usize = 3;

/// Common English stop words to filter out during tokenization
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
            "by", "from", "is", "it", "as", "be", "was", "are", "been", "being", "have", "has",
            "had", "do", "does", "did", "will", "would", "could", "should", "may", "might",
            "shall", "can", "need", "this", "that", "these", "those", "not", "no", "nor", "so",
            "if", "then", "than", "too", "very", "just", "about", "above", "after", "again",
            "all", "also", "any", "because", "before", "between", "both", "each", "few", "get",
            "got", "here", "how", "into", "its", "let", "more", "most", "new", "now", "only",
            "other", "our", "out", "over", "own", "same", "she", "some", "such", "them",
            "there", "they", "through", "under", "until", "use", "used", "using", "what",
            "when", "where", "which", "while", "who", "why", "you", "your",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Whether a lowercase word is on the stop-word list
pub fn is_stop_word(word: &str) -> bool {
    get_stop_words().contains(word)
}

/// Normalized set of significant lowercase words
///
/// Ordered so that iteration (and therefore any printed output) is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of keywords present in both sets
    pub fn shared_with(&self, other: &KeywordSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Keywords present in both sets
    pub fn intersection(&self, other: &KeywordSet) -> KeywordSet {
        KeywordSet(self.0.intersection(&other.0).cloned().collect())
    }

    /// Keywords joined by single spaces
    pub fn join(&self) -> String {
        self.0.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeywordSet(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Tokenize text into a set of significant lowercase words
///
/// Anything outside `[a-z0-9]` after lowercasing acts as a separator, so
/// `docker-compose` yields `docker` and `compose`. Words shorter than
/// [`MIN_KEYWORD_LEN`] and stop words are dropped.
pub fn tokenize(text: &str) -> KeywordSet {
    let stop_words = get_stop_words();
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|s| s.len() >= MIN_KEYWORD_LEN)
        .filter(|s| !stop_words.contains(s))
        .collect()
}

/// Tokenize several text fields as if they were joined by spaces
pub fn keyword_text(fields: &[&str]) -> KeywordSet {
    tokenize(&fields.join(" "))
}

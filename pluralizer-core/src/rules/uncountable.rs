use regex::Regex;
use std::collections::HashSet;

/// Words with no distinct plural form
///
/// Exact words live in a hash set keyed by lowercase text; patterns are
/// evaluated against the word as written.
#[derive(Debug, Clone, Default)]
pub struct Uncountables {
    words: HashSet<String>,
    patterns: Vec<Regex>,
}

impl Uncountables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an exact word
    pub fn insert_word(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Register a pattern predicate
    pub fn insert_pattern(&mut self, pattern: Regex) {
        self.patterns.push(pattern);
    }

    /// Whether `token` (lowercased `word`) is uncountable
    pub fn matches(&self, token: &str, word: &str) -> bool {
        self.words.contains(token) || self.patterns.iter().any(|p| p.is_match(word))
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

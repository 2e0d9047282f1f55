//! Public inflection API

use crate::config::{self, RuleConfig};
use crate::engine::{Inflection, RuleEngine};
use crate::error::{PluralizerError, Result};
use crate::rules::{Rule, RulePattern};
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;

static ENGLISH_ENGINE: OnceLock<Result<RuleEngine>> = OnceLock::new();

fn english_engine() -> Result<&'static RuleEngine> {
    ENGLISH_ENGINE
        .get_or_init(|| Pluralizer::from_config(config::english_config()?).map(|p| p.engine))
        .as_ref()
        .map_err(PluralizerError::clone)
}

/// Size of the rule tables held by a [`Pluralizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleStats {
    pub irregular_pairs: usize,
    pub plural_rules: usize,
    pub singular_rules: usize,
    pub uncountable_words: usize,
    pub uncountable_patterns: usize,
}

/// Converts words between singular and plural forms
///
/// Each instance owns its tables; registering rules on one instance never
/// affects another.
///
/// # Example
///
/// ```rust
/// use pluralizer_core::Pluralizer;
///
/// let mut pluralizer = Pluralizer::new();
///
/// assert_eq!(pluralizer.plural("person"), "people");
/// assert_eq!(pluralizer.singular("Matrices"), "Matrix");
/// assert_eq!(pluralizer.pluralize("apple", Some(2), true), "2 apples");
/// assert!(pluralizer.is_plural("geese"));
///
/// pluralizer.add_irregular_rule("octopus", "octopodes");
/// assert_eq!(pluralizer.plural("octopus"), "octopodes");
/// ```
#[derive(Debug, Clone)]
pub struct Pluralizer {
    engine: RuleEngine,
}

impl Pluralizer {
    /// Create a pluralizer loaded with the built-in English rules
    ///
    /// # Panics
    ///
    /// Panics if the embedded rule table fails to load, which the test suite
    /// rules out. Use [`Pluralizer::try_new`] to handle that case instead.
    pub fn new() -> Self {
        Self::try_new().expect("Failed to load embedded English rules")
    }

    /// Create a pluralizer loaded with the built-in English rules
    pub fn try_new() -> Result<Self> {
        Ok(Self {
            engine: english_engine()?.clone(),
        })
    }

    /// Create a pluralizer with no rules at all
    pub fn empty() -> Self {
        Self {
            engine: RuleEngine::new(),
        }
    }

    /// Create a pluralizer holding only the rules of `config`
    pub fn from_config(config: &RuleConfig) -> Result<Self> {
        let mut pluralizer = Self::empty();
        pluralizer.apply_config(config)?;
        Ok(pluralizer)
    }

    /// Create a pluralizer holding only the rules of a rule file
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_config(&config::loader::read_file(path)?)
    }

    /// Layer a rule file over the current tables
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let config = config::loader::read_file(path)?;
        self.apply_config(&config)
    }

    /// Layer `config` over the current tables
    ///
    /// Irregulars, plural rules, singular rules and uncountables are applied
    /// in that order, so the new rules take priority over existing ones. The
    /// tables are left untouched when the config is invalid.
    pub fn apply_config(&mut self, config: &RuleConfig) -> Result<()> {
        // Patterns are compiled once, by the staged registrations below
        config.validate_structure()?;

        let mut staged = self.clone();

        for [single, plural] in &config.irregular.pairs {
            staged.add_irregular_rule(single, plural);
        }
        for entry in &config.plural.rules {
            staged.add_plural_rule(entry.rule_pattern()?, &entry.replacement)?;
        }
        for entry in &config.singular.rules {
            staged.add_singular_rule(entry.rule_pattern()?, &entry.replacement)?;
        }
        for word in &config.uncountable.words {
            staged.add_uncountable_rule(word.as_str())?;
        }
        for pattern in &config.uncountable.patterns {
            staged.add_uncountable_rule(RulePattern::expression(pattern.as_str()))?;
        }

        log::debug!(
            "Applied rule set '{}': {} irregular, {} plural, {} singular, {} uncountable",
            config.metadata.name,
            config.irregular.pairs.len(),
            config.plural.rules.len(),
            config.singular.rules.len(),
            config.uncountable.words.len() + config.uncountable.patterns.len()
        );

        *self = staged;
        Ok(())
    }

    /// Plural form of `word`
    pub fn plural(&self, word: &str) -> String {
        self.engine.transform(word, Inflection::Plural)
    }

    /// Singular form of `word`
    pub fn singular(&self, word: &str) -> String {
        self.engine.transform(word, Inflection::Singular)
    }

    /// Whether `word` is already plural
    pub fn is_plural(&self, word: &str) -> bool {
        self.engine.check(word, Inflection::Plural)
    }

    /// Whether `word` is already singular
    pub fn is_singular(&self, word: &str) -> bool {
        self.engine.check(word, Inflection::Singular)
    }

    /// Pick the form of `word` that agrees with `count`
    ///
    /// A count of exactly one selects the singular; anything else, including
    /// no count, selects the plural. With `inclusive` the count is prefixed,
    /// e.g. `"3 ducks"`.
    pub fn pluralize(&self, word: &str, count: Option<u64>, inclusive: bool) -> String {
        let inflected = if count == Some(1) {
            self.singular(word)
        } else {
            self.plural(word)
        };

        match count {
            Some(n) if inclusive => format!("{n} {inflected}"),
            _ => inflected,
        }
    }

    /// Register a pluralization rule with priority over existing ones
    pub fn add_plural_rule(
        &mut self,
        pattern: impl Into<RulePattern>,
        replacement: &str,
    ) -> Result<()> {
        let regex = pattern.into().compile()?;
        self.engine.add_plural_rule(Rule::new(regex, replacement));
        Ok(())
    }

    /// Register a singularization rule with priority over existing ones
    pub fn add_singular_rule(
        &mut self,
        pattern: impl Into<RulePattern>,
        replacement: &str,
    ) -> Result<()> {
        let regex = pattern.into().compile()?;
        self.engine.add_singular_rule(Rule::new(regex, replacement));
        Ok(())
    }

    /// Register a word or pattern that has no distinct plural form
    pub fn add_uncountable_rule(&mut self, word: impl Into<RulePattern>) -> Result<()> {
        match word.into() {
            RulePattern::Word(word) => {
                log::trace!("uncountable word: {word}");
                self.engine.uncountables_mut().insert_word(&word);
            }
            pattern => {
                let regex = pattern.compile()?;
                log::trace!("uncountable pattern: {regex}");
                self.engine.uncountables_mut().insert_pattern(regex);
            }
        }
        Ok(())
    }

    /// Register an irregular singular/plural pair
    pub fn add_irregular_rule(&mut self, single: &str, plural: &str) {
        self.engine.add_irregular(single, plural);
    }

    /// Size of the current rule tables
    pub fn stats(&self) -> RuleStats {
        RuleStats {
            irregular_pairs: self.engine.irregulars().len(),
            plural_rules: self.engine.plural_rules().len(),
            singular_rules: self.engine.singular_rules().len(),
            uncountable_words: self.engine.uncountables().word_count(),
            uncountable_patterns: self.engine.uncountables().pattern_count(),
        }
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a count given as text
///
/// Only non-negative whole numbers are accepted.
pub fn parse_count(text: &str) -> Result<u64> {
    let trimmed = text.trim();

    if let Ok(count) = trimmed.parse::<u64>() {
        return Ok(count);
    }

    let reason = if trimmed.parse::<i128>().is_ok() {
        "count must not be negative"
    } else if trimmed.parse::<f64>().is_ok() {
        "count must be a whole number"
    } else {
        "count must be a number"
    };

    Err(PluralizerError::InvalidArgument(format!(
        "{reason}, got '{text}'"
    )))
}

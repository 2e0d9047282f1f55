use crate::error::{PluralizerError, Result};
use regex::{Regex, RegexBuilder};

/// How a caller describes the matcher of a rule
///
/// Plain strings convert into [`RulePattern::Word`], compiled regexes into
/// [`RulePattern::Compiled`]. Use [`RulePattern::expression`] for a pattern
/// source that carries its own anchoring.
#[derive(Debug, Clone)]
pub enum RulePattern {
    /// Whole word, compiled as `^word$`
    ///
    /// The text is spliced into the pattern as-is, so it may still use regex
    /// syntax such as alternation.
    Word(String),
    /// Pattern source with its own anchoring, e.g. `(x|ch)$`
    Expression(String),
    /// Already compiled regex, used without modification
    Compiled(Regex),
}

impl RulePattern {
    /// Create an expression pattern from its source
    pub fn expression(source: impl Into<String>) -> Self {
        RulePattern::Expression(source.into())
    }

    /// Source text of the pattern as it will be compiled
    pub fn source(&self) -> String {
        match self {
            RulePattern::Word(word) => format!("^{word}$"),
            RulePattern::Expression(source) => source.clone(),
            RulePattern::Compiled(regex) => regex.as_str().to_string(),
        }
    }

    /// Compile into a case-insensitive regex
    ///
    /// `Compiled` patterns are returned untouched; their flags are the
    /// caller's choice.
    pub fn compile(self) -> Result<Regex> {
        match self {
            RulePattern::Word(word) => build_case_insensitive(&format!("^{word}$")),
            RulePattern::Expression(source) => build_case_insensitive(&source),
            RulePattern::Compiled(regex) => Ok(regex),
        }
    }
}

fn build_case_insensitive(source: &str) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|e| PluralizerError::Pattern {
            pattern: source.to_string(),
            source: e,
        })
}

impl From<&str> for RulePattern {
    fn from(word: &str) -> Self {
        RulePattern::Word(word.to_string())
    }
}

impl From<String> for RulePattern {
    fn from(word: String) -> Self {
        RulePattern::Word(word)
    }
}

impl From<Regex> for RulePattern {
    fn from(regex: Regex) -> Self {
        RulePattern::Compiled(regex)
    }
}

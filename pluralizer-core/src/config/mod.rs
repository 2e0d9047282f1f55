//! Rule file schema and validation
//!
//! Rule files are TOML documents. Every section but `metadata` may be
//! omitted:
//!
//! ```toml
//! [metadata]
//! name = "Project terms"
//!
//! [irregular]
//! pairs = [["octopus", "octopodes"]]
//!
//! [plural]
//! rules = [
//!     { word = "regex", replacement = "regexes" },
//!     { pattern = "(quiz)$", replacement = "$1zes" },
//! ]
//!
//! [singular]
//! rules = [{ pattern = "(quiz)zes$", replacement = "$1" }]
//!
//! [uncountable]
//! words = ["metadata"]
//! patterns = ["ware$"]
//! ```

pub mod loader;

pub use loader::{english_config, load_file};

use crate::error::{PluralizerError, Result};
use crate::rules::RulePattern;
use serde::{Deserialize, Serialize};

/// Root of a rule file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub irregular: IrregularSection,
    #[serde(default)]
    pub plural: RuleSection,
    #[serde(default)]
    pub singular: RuleSection,
    #[serde(default)]
    pub uncountable: UncountableSection,
}

/// Rule file metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Irregular singular/plural pairs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IrregularSection {
    #[serde(default)]
    pub pairs: Vec<[String; 2]>,
}

/// Ordered pattern rules for one direction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSection {
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// One rule: exactly one of `word` / `pattern`, plus a replacement template
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub replacement: String,
}

/// Uncountable words and patterns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UncountableSection {
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl RuleEntry {
    /// Rule matching a whole word
    pub fn word(word: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            pattern: None,
            replacement: replacement.into(),
        }
    }

    /// Rule matching a pattern
    pub fn pattern(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            word: None,
            pattern: Some(pattern.into()),
            replacement: replacement.into(),
        }
    }

    /// Matcher described by this entry
    pub fn rule_pattern(&self) -> Result<RulePattern> {
        match (&self.word, &self.pattern) {
            (Some(word), None) => Ok(RulePattern::Word(word.clone())),
            (None, Some(pattern)) => Ok(RulePattern::Expression(pattern.clone())),
            (Some(_), Some(_)) => Err(PluralizerError::Configuration(format!(
                "Rule with replacement '{}' sets both `word` and `pattern`",
                self.replacement
            ))),
            (None, None) => Err(PluralizerError::Configuration(format!(
                "Rule with replacement '{}' needs a `word` or a `pattern`",
                self.replacement
            ))),
        }
    }
}

impl RuleConfig {
    /// Parse a rule file from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| PluralizerError::Configuration(format!("Failed to parse TOML: {e}")))
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            PluralizerError::Configuration(format!("Failed to serialize rules: {e}"))
        })
    }

    /// Check structure and compile every pattern
    ///
    /// Reports the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.validate_structure()?;

        for section in [&self.plural, &self.singular] {
            for entry in &section.rules {
                entry.rule_pattern()?.compile()?;
            }
        }

        for pattern in &self.uncountable.patterns {
            RulePattern::expression(pattern.as_str()).compile()?;
        }

        Ok(())
    }

    /// Everything [`RuleConfig::validate`] checks except pattern compilation
    pub(crate) fn validate_structure(&self) -> Result<()> {
        if self.metadata.name.trim().is_empty() {
            return Err(PluralizerError::Configuration(
                "metadata.name must not be empty".to_string(),
            ));
        }

        for [single, plural] in &self.irregular.pairs {
            if single.is_empty() || plural.is_empty() {
                return Err(PluralizerError::Configuration(format!(
                    "Irregular pair [\"{single}\", \"{plural}\"] has an empty form"
                )));
            }
        }

        for (section, entries) in [("plural", &self.plural), ("singular", &self.singular)] {
            for entry in &entries.rules {
                entry.rule_pattern().map_err(|e| match e {
                    PluralizerError::Configuration(msg) => {
                        PluralizerError::Configuration(format!("[{section}] {msg}"))
                    }
                    other => other,
                })?;
            }
        }

        if self.uncountable.words.iter().any(|w| w.is_empty()) {
            return Err(PluralizerError::Configuration(
                "uncountable.words contains an empty word".to_string(),
            ));
        }

        Ok(())
    }
}

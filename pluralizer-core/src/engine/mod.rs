//! Rule engine
//!
//! Evaluates a word against the override layers and the pattern tables in a
//! fixed precedence order:
//!
//! 1. empty input is returned unchanged
//! 2. keep map (the word is already in the target form)
//! 3. replace map (irregular conversion)
//! 4. uncountables
//! 5. pattern rules, newest first
//!
//! Every path that produces new text restores the casing of the input.

pub mod case;
pub mod template;

pub use case::restore_case;
pub use template::interpolate;

use crate::rules::{IrregularMap, Rule, RuleSet, Uncountables};
use std::collections::HashMap;

/// Direction of an inflection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inflection {
    /// singular -> plural
    Plural,
    /// plural -> singular
    Singular,
}

/// Owner of all rule tables plus the transformation algorithm
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    plural_rules: RuleSet,
    singular_rules: RuleSet,
    irregulars: IrregularMap,
    uncountables: Uncountables,
}

/// Tables selected for one direction
struct Tables<'a> {
    replace: &'a HashMap<String, String>,
    keep: &'a HashMap<String, String>,
    rules: &'a RuleSet,
}

impl RuleEngine {
    /// Create an engine with empty tables
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self, inflection: Inflection) -> Tables<'_> {
        match inflection {
            Inflection::Plural => Tables {
                replace: self.irregulars.singles(),
                keep: self.irregulars.plurals(),
                rules: &self.plural_rules,
            },
            Inflection::Singular => Tables {
                replace: self.irregulars.plurals(),
                keep: self.irregulars.singles(),
                rules: &self.singular_rules,
            },
        }
    }

    /// Convert `word` in the given direction
    pub fn transform(&self, word: &str, inflection: Inflection) -> String {
        let token = word.to_lowercase();
        if token.is_empty() {
            return word.to_string();
        }

        let tables = self.tables(inflection);

        if tables.keep.contains_key(&token) {
            return restore_case(word, &token);
        }

        if let Some(replacement) = tables.replace.get(&token) {
            return restore_case(word, replacement);
        }

        self.sanitize(&token, word, tables.rules)
    }

    /// Whether `word` is already in the target form of `inflection`
    ///
    /// Uses the same pass as [`RuleEngine::transform`]: a word is in the
    /// target form when converting its lowercase token changes nothing.
    pub fn check(&self, word: &str, inflection: Inflection) -> bool {
        let token = word.to_lowercase();
        let tables = self.tables(inflection);

        if tables.keep.contains_key(&token) {
            return true;
        }

        if tables.replace.contains_key(&token) {
            return false;
        }

        self.sanitize(&token, &token, tables.rules) == token
    }

    /// Uncountable short-circuit followed by the pattern scan
    fn sanitize(&self, token: &str, word: &str, rules: &RuleSet) -> String {
        if token.is_empty() || self.uncountables.matches(token, word) {
            return word.to_string();
        }

        match rules.find(word) {
            Some(rule) => apply_rule(rule, word),
            None => word.to_string(),
        }
    }

    pub fn add_plural_rule(&mut self, rule: Rule) {
        log::trace!("plural rule #{}: {}", self.plural_rules.len(), rule.pattern());
        self.plural_rules.push(rule);
    }

    pub fn add_singular_rule(&mut self, rule: Rule) {
        log::trace!(
            "singular rule #{}: {}",
            self.singular_rules.len(),
            rule.pattern()
        );
        self.singular_rules.push(rule);
    }

    pub fn add_irregular(&mut self, single: &str, plural: &str) {
        log::trace!("irregular: {single} <-> {plural}");
        self.irregulars.insert(single, plural);
    }

    pub fn uncountables_mut(&mut self) -> &mut Uncountables {
        &mut self.uncountables
    }

    pub fn plural_rules(&self) -> &RuleSet {
        &self.plural_rules
    }

    pub fn singular_rules(&self) -> &RuleSet {
        &self.singular_rules
    }

    pub fn irregulars(&self) -> &IrregularMap {
        &self.irregulars
    }

    pub fn uncountables(&self) -> &Uncountables {
        &self.uncountables
    }
}

/// Replace the leftmost match of `rule` in `word`, restoring case
fn apply_rule(rule: &Rule, word: &str) -> String {
    let Some(captures) = rule.pattern().captures(word) else {
        return word.to_string();
    };
    let Some(matched) = captures.get(0) else {
        return word.to_string();
    };

    let replacement = interpolate(rule.replacement(), &captures);

    let restored = if matched.start() == matched.end() {
        // Nothing was matched to copy case from; use the character before the
        // match point, wrapping to the last character at offset zero.
        let reference = word[..matched.start()]
            .chars()
            .next_back()
            .or_else(|| word.chars().next_back());
        match reference {
            Some(ch) => restore_case(ch.encode_utf8(&mut [0; 4]), &replacement),
            None => replacement,
        }
    } else {
        restore_case(matched.as_str(), &replacement)
    };

    let mut result = String::with_capacity(word.len() + restored.len());
    result.push_str(&word[..matched.start()]);
    result.push_str(&restored);
    result.push_str(&word[matched.end()..]);
    result
}

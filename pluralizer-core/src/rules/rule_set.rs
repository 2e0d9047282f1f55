use regex::Regex;

/// A single transformation rule: matcher plus replacement template
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// Create a rule from a compiled matcher and a `$N` template
    pub fn new(pattern: Regex, replacement: impl Into<String>) -> Self {
        Self {
            pattern,
            replacement: replacement.into(),
        }
    }

    /// The compiled matcher
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The replacement template
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Whether the matcher is found anywhere in `word`
    pub fn is_match(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }
}

/// Ordered rule list where later rules take priority
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule with priority over all existing rules
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Find the most recently added rule matching `word`
    pub fn find(&self, word: &str) -> Option<&Rule> {
        self.rules.iter().rev().find(|rule| rule.is_match(word))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

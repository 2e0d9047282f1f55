use std::collections::HashMap;

/// Bidirectional exact-word overrides
///
/// Keys are stored lowercased. Re-registering a key overwrites the earlier
/// entry in that direction only.
#[derive(Debug, Clone, Default)]
pub struct IrregularMap {
    /// singular -> plural
    singles: HashMap<String, String>,
    /// plural -> singular
    plurals: HashMap<String, String>,
}

impl IrregularMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a singular/plural pair
    pub fn insert(&mut self, single: &str, plural: &str) {
        let single = single.to_lowercase();
        let plural = plural.to_lowercase();

        self.singles.insert(single.clone(), plural.clone());
        self.plurals.insert(plural, single);
    }

    /// Map from singular form to plural form
    pub fn singles(&self) -> &HashMap<String, String> {
        &self.singles
    }

    /// Map from plural form to singular form
    pub fn plurals(&self) -> &HashMap<String, String> {
        &self.plurals
    }

    /// Number of registered singular forms
    pub fn len(&self) -> usize {
        self.singles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.singles.is_empty() && self.plurals.is_empty()
    }
}

//! Rule tables consulted by the engine
//!
//! - [`RuleSet`]: ordered pattern rules, scanned newest first
//! - [`IrregularMap`]: exact singular/plural overrides
//! - [`Uncountables`]: words that never change
//! - [`RulePattern`]: how callers describe a matcher

pub mod irregular;
pub mod pattern;
pub mod rule_set;
pub mod uncountable;

pub use irregular::IrregularMap;
pub use pattern::RulePattern;
pub use rule_set::{Rule, RuleSet};
pub use uncountable::Uncountables;

//! Rule-based English pluralization and singularization
//!
//! Words are converted by an ordered table of pattern rules layered under
//! two override tables: irregular pairs (`person`/`people`) and uncountable
//! words (`sheep`). Later rules win over earlier ones, and the casing of the
//! input (lower, upper or title) is carried over to the result.
//!
//! # Architecture
//!
//! - **rules**: the tables themselves (pattern rules, irregulars, uncountables)
//! - **engine**: precedence, substitution and case restoration
//! - **config**: TOML rule files, including the embedded English table
//! - **pluralizer**: the public API over one engine instance
//!
//! # Example
//!
//! ```rust
//! use pluralizer_core::Pluralizer;
//!
//! let pluralizer = Pluralizer::new();
//!
//! assert_eq!(pluralizer.plural("Apple"), "Apples");
//! assert_eq!(pluralizer.singular("children"), "child");
//! assert_eq!(pluralizer.pluralize("duck", Some(3), true), "3 ducks");
//! assert_eq!(pluralizer.plural("sheep"), "sheep");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod pluralizer;
pub mod rules;

pub use config::{english_config, RuleConfig, RuleEntry};
pub use engine::{Inflection, RuleEngine};
pub use error::{PluralizerError, Result};
pub use pluralizer::{parse_count, Pluralizer, RuleStats};
pub use rules::RulePattern;

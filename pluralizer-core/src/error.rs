//! Error types for rule registration and rule file loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or extending the rule tables
///
/// Inflecting a word never fails; every variant here comes from registering
/// rules, loading rule files, or parsing caller input such as counts.
#[derive(Debug, Error)]
pub enum PluralizerError {
    /// A rule pattern failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        /// Pattern source as handed to the regex compiler
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Caller supplied a value outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Rule file could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rule file could not be read
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        /// Path of the rule file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// `std::io::Error` is not `Clone`; the copy keeps its kind and message.
impl Clone for PluralizerError {
    fn clone(&self) -> Self {
        match self {
            PluralizerError::Pattern { pattern, source } => PluralizerError::Pattern {
                pattern: pattern.clone(),
                source: source.clone(),
            },
            PluralizerError::InvalidArgument(msg) => PluralizerError::InvalidArgument(msg.clone()),
            PluralizerError::Configuration(msg) => PluralizerError::Configuration(msg.clone()),
            PluralizerError::Io { path, source } => PluralizerError::Io {
                path: path.clone(),
                source: std::io::Error::new(source.kind(), source.to_string()),
            },
        }
    }
}

/// Result type for rule registration and loading
pub type Result<T> = std::result::Result<T, PluralizerError>;

//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures that do not come from the library
#[derive(Debug)]
pub enum CliError {
    /// Neither arguments nor stdin supplied a word
    NoWords,
    /// Rule file could not be loaded
    RuleFile(String),
    /// Count argument is not a non-negative whole number
    InvalidCount(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoWords => write!(f, "No words given on the command line or stdin"),
            CliError::RuleFile(msg) => write!(f, "Rule file error: {msg}"),
            CliError::InvalidCount(msg) => write!(f, "Invalid count: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

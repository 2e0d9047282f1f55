//! Output formatting module

use anyhow::Result;
use pluralizer_core::RuleStats;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Output one converted word
    fn format_inflection(&mut self, input: &str, output: &str) -> Result<()>;

    /// Output the plural/singular classification of a word
    fn format_check(&mut self, word: &str, is_plural: bool, is_singular: bool) -> Result<()>;

    /// Output the size of a rule table
    fn format_stats(&mut self, name: &str, stats: &RuleStats) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One result per line
    Text,
    /// JSON array of records
    Json,
}

impl OutputFormat {
    /// Build the formatter for this format
    pub fn formatter<'a, W: Write + 'a>(self, writer: W) -> Box<dyn OutputFormatter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_selection() {
        let mut buffer = Vec::new();
        {
            let mut formatter = OutputFormat::Json.formatter(&mut buffer);
            formatter.format_inflection("ox", "oxen").unwrap();
            formatter.finish().unwrap();
        }
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.trim_start().starts_with('['));

        let mut buffer = Vec::new();
        {
            let mut formatter = OutputFormat::Text.formatter(&mut buffer);
            formatter.format_inflection("ox", "oxen").unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "oxen\n");
    }
}

//! Count command implementation

use crate::cli::GlobalOptions;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use pluralizer_core::parse_count;
use std::io;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Word to inflect
    pub word: String,

    /// Number of items (non-negative whole number)
    #[arg(allow_hyphen_values = true)]
    pub count: String,

    /// Prefix the result with the count, e.g. "3 ducks"
    #[arg(short, long)]
    pub inclusive: bool,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self, options: &GlobalOptions) -> Result<()> {
        let count = parse_count(&self.count).map_err(|e| CliError::InvalidCount(e.to_string()))?;
        let pluralizer = options.pluralizer()?;

        let result = pluralizer.pluralize(&self.word, Some(count), self.inclusive);
        log::debug!("{} x{count} -> {result}", self.word);

        let mut formatter = options.format.formatter(io::stdout().lock());
        formatter.format_inflection(&self.word, &result)?;
        formatter.finish()
    }
}

//! Plural, singular and check commands

use crate::cli::GlobalOptions;
use crate::input::collect_words;
use crate::output::OutputFormatter;
use anyhow::Result;
use clap::Args;
use pluralizer_core::Pluralizer;
use std::io;

/// Arguments shared by the word conversion commands
#[derive(Debug, Args)]
pub struct InflectArgs {
    /// Words to process (default: one word per line from stdin)
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,
}

/// What to do with each word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InflectMode {
    Plural,
    Singular,
    Check,
}

impl InflectArgs {
    /// Execute the command against stdin/stdout
    pub fn execute(&self, mode: InflectMode, options: &GlobalOptions) -> Result<()> {
        let pluralizer = options.pluralizer()?;
        let words = collect_words(&self.words, io::stdin().lock())?;

        log::info!("Processing {} word(s)", words.len());

        let mut formatter = options.format.formatter(io::stdout().lock());
        run(&pluralizer, mode, &words, formatter.as_mut())
    }
}

/// Apply `mode` to every word, writing results through `formatter`
pub fn run(
    pluralizer: &Pluralizer,
    mode: InflectMode,
    words: &[String],
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    for word in words {
        match mode {
            InflectMode::Plural => formatter.format_inflection(word, &pluralizer.plural(word))?,
            InflectMode::Singular => {
                formatter.format_inflection(word, &pluralizer.singular(word))?
            }
            InflectMode::Check => formatter.format_check(
                word,
                pluralizer.is_plural(word),
                pluralizer.is_singular(word),
            )?,
        }
    }

    formatter.finish()
}

//! List command implementation

use crate::cli::GlobalOptions;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use pluralizer_core::english_config;
use std::io;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// Show the size of the active rule tables
    Rules,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self, options: &GlobalOptions) -> Result<()> {
        match self {
            ListCommands::Rules => {
                let pluralizer = options.pluralizer()?;
                let name = match &options.rules {
                    Some(path) => format!("{} + {}", english_config()?.metadata.name, path.display()),
                    None => english_config()?.metadata.name.clone(),
                };

                let mut formatter = options.format.formatter(io::stdout().lock());
                formatter.format_stats(&name, &pluralizer.stats())?;
                formatter.finish()
            }
            ListCommands::Formats => {
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        match value.get_help() {
                            Some(help) => println!("{:<6} {help}", value.get_name()),
                            None => println!("{}", value.get_name()),
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

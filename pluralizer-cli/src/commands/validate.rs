//! Validate command implementation

use crate::cli::GlobalOptions;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use pluralizer_core::{config, Pluralizer};
use std::io;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule file to validate
    #[arg(short = 'c', long = "config", value_name = "FILE", required = true)]
    pub rule_file: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, options: &GlobalOptions) -> Result<()> {
        let text = options.format == OutputFormat::Text;

        if text {
            println!("Validating rule file: {}", self.rule_file.display());
        }

        let loaded = config::load_file(&self.rule_file)
            .and_then(|config| Pluralizer::from_config(&config).map(|p| (config, p)));

        match loaded {
            Ok((config, pluralizer)) => {
                if text {
                    println!("✓ Rule file is valid!");
                    if let Some(description) = &config.metadata.description {
                        println!("  {description}");
                    }
                }
                let mut formatter = options.format.formatter(io::stdout().lock());
                formatter.format_stats(&config.metadata.name, &pluralizer.stats())?;
                formatter.finish()
            }
            Err(e) => {
                if text {
                    println!("✗ Rule file is invalid!");
                    println!("  Error: {e}");
                }
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

//! Command-line interface definitions

use crate::commands::Commands;
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use clap::Parser;
use pluralizer_core::Pluralizer;
use std::path::PathBuf;

/// Rule-based English pluralization and singularization
#[derive(Debug, Parser)]
#[command(name = "pluralizer", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Debug, Clone, clap::Args)]
pub struct GlobalOptions {
    /// Rule file layered over the built-in English rules
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        env = "PLURALIZER_RULES"
    )]
    pub rules: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            rules: None,
            format: OutputFormat::Text,
            quiet: false,
            verbose: 0,
        }
    }
}

impl GlobalOptions {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }

    /// Built-in rules, with the `--rules` file layered on top when given
    pub fn pluralizer(&self) -> CliResult<Pluralizer> {
        let mut pluralizer = Pluralizer::try_new()?;

        if let Some(path) = &self.rules {
            log::info!("Loading rule file {}", path.display());
            pluralizer
                .load_file(path)
                .map_err(|e| CliError::RuleFile(e.to_string()))?;
        }

        Ok(pluralizer)
    }
}

impl Cli {
    /// Run the selected command
    pub fn run(&self) -> CliResult<()> {
        self.global.init_logging();
        log::debug!("Arguments: {self:?}");
        self.command.execute(&self.global)
    }
}

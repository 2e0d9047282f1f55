//! Command-line entry point for pluralizer

use clap::Parser;
use pluralizer_cli::{Cli, CliResult};

fn main() -> CliResult<()> {
    Cli::parse().run()
}

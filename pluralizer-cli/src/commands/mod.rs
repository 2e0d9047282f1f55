//! CLI command implementations

use crate::cli::GlobalOptions;
use crate::error::CliResult;
use clap::Subcommand;

pub mod count;
pub mod generate_config;
pub mod inflect;
pub mod list;
pub mod validate;

use inflect::{InflectArgs, InflectMode};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the plural form of each word
    Plural(InflectArgs),

    /// Print the singular form of each word
    Singular(InflectArgs),

    /// Report whether each word is plural and/or singular
    Check(InflectArgs),

    /// Print the form of a word that agrees with a count
    Count(count::CountArgs),

    /// Validate a rule file
    Validate(validate::ValidateArgs),

    /// Write a rule file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(&self, options: &GlobalOptions) -> CliResult<()> {
        match self {
            Commands::Plural(args) => args.execute(InflectMode::Plural, options),
            Commands::Singular(args) => args.execute(InflectMode::Singular, options),
            Commands::Check(args) => args.execute(InflectMode::Check, options),
            Commands::Count(args) => args.execute(options),
            Commands::Validate(args) => args.execute(options),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["pluralizer"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_inflection_commands() {
        match parse(&["plural", "city", "box"]) {
            Commands::Plural(args) => assert_eq!(args.words, vec!["city", "box"]),
            other => panic!("Expected Plural, got {other:?}"),
        }
        assert!(matches!(parse(&["singular"]), Commands::Singular(_)));
        assert!(matches!(parse(&["check", "sheep"]), Commands::Check(_)));
    }

    #[test]
    fn test_count_command() {
        match parse(&["count", "apple", "3", "--inclusive"]) {
            Commands::Count(args) => {
                assert_eq!(args.word, "apple");
                assert_eq!(args.count, "3");
                assert!(args.inclusive);
            }
            other => panic!("Expected Count, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_count_reaches_the_command() {
        match parse(&["count", "apple", "-1"]) {
            Commands::Count(args) => assert_eq!(args.count, "-1"),
            other => panic!("Expected Count, got {other:?}"),
        }
    }

    #[test]
    fn test_list_and_config_commands() {
        assert!(matches!(
            parse(&["list", "rules"]),
            Commands::List {
                subcommand: list::ListCommands::Rules
            }
        ));
        assert!(matches!(
            parse(&["list", "formats"]),
            Commands::List {
                subcommand: list::ListCommands::Formats
            }
        ));
        assert!(matches!(
            parse(&["validate", "-c", "rules.toml"]),
            Commands::Validate(_)
        ));
        assert!(matches!(
            parse(&["generate-config", "-o", "rules.toml"]),
            Commands::GenerateConfig(_)
        ));
    }
}

//! Pluralizer CLI library
//!
//! This library provides the command-line interface over the
//! `pluralizer-core` inflection engine.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, GlobalOptions};
pub use error::{CliError, CliResult};

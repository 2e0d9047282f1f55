//! Word input handling

use crate::error::CliError;
use anyhow::{Context, Result};
use std::io::BufRead;

/// Words to process: the arguments when present, otherwise one word per
/// line of `reader`
///
/// Lines are trimmed and blank lines are skipped.
pub fn collect_words<R: BufRead>(args: &[String], reader: R) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    log::debug!("No words on the command line, reading stdin");

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read from stdin")?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    if words.is_empty() {
        return Err(CliError::NoWords.into());
    }

    Ok(words)
}

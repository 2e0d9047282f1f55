//! Rule file loader
//!
//! Manages the embedded English rule table and user supplied rule files.

use super::RuleConfig;
use crate::error::{PluralizerError, Result};
use std::path::Path;
use std::sync::OnceLock;

static ENGLISH: OnceLock<Result<RuleConfig>> = OnceLock::new();

const ENGLISH_TOML: &str = include_str!("../../configs/english.toml");

/// Built-in English rule table, parsed on first access
///
/// A load failure is cached too; every call returns a copy of the same error.
pub fn english_config() -> Result<&'static RuleConfig> {
    ENGLISH
        .get_or_init(|| {
            log::debug!("Parsing embedded English rule table");
            let config = RuleConfig::from_toml_str(ENGLISH_TOML)?;
            config.validate()?;
            Ok(config)
        })
        .as_ref()
        .map_err(PluralizerError::clone)
}

/// Read, parse and validate a rule file
pub fn load_file(path: &Path) -> Result<RuleConfig> {
    let config = read_file(path)?;
    config.validate()?;
    Ok(config)
}

/// Read and parse a rule file without compiling its patterns
pub(crate) fn read_file(path: &Path) -> Result<RuleConfig> {
    log::debug!("Loading rule file {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| PluralizerError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    RuleConfig::from_toml_str(&content).map_err(|e| match e {
        PluralizerError::Configuration(msg) => {
            PluralizerError::Configuration(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

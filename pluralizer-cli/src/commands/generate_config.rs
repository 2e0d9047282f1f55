//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use pluralizer_core::english_config;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Name recorded in the template's metadata
    #[arg(short, long, default_value = "Custom rules")]
    pub name: String,

    /// Write the complete built-in English table instead of a template
    #[arg(long)]
    pub builtin: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating rule file...");
        println!("  Output file: {}", self.output.display());

        let content = if self.builtin {
            english_config()?.to_toml_string()?
        } else {
            self.generate_template()
        };

        fs::write(&self.output, content)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule file generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the rule file to add your own words");
        println!("2. Validate your rules:");
        println!("   pluralizer validate --config {}", self.output.display());
        println!("3. Use them:");
        println!(
            "   pluralizer --rules {} plural <WORD>...",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template rule file content
    fn generate_template(&self) -> String {
        format!(
            r#"# Pluralization rules: {name}
#
# Rules in this file are layered over the built-in English rules when passed
# with --rules. Later rules take priority over earlier ones, and rules from
# this file take priority over the built-ins.
#
# Patterns use regex crate syntax and always match case-insensitively.
# Replacements may refer to capture groups as $1, $2, ...

[metadata]
name = "{name}"
description = "Project specific inflections"

# Word pairs that follow no pattern. Matched on the whole word, both ways.
[irregular]
pairs = [
    # ["octopus", "octopodes"],
]

# Singular -> plural rules. Each rule has either `word` (whole word match)
# or `pattern` (regular expression), plus a `replacement`.
[plural]
rules = [
    # {{ word = "regex", replacement = "regexes" }},
    # {{ pattern = "(matr)ix$", replacement = "$1ices" }},
]

# Plural -> singular rules.
[singular]
rules = [
    # {{ pattern = "(matr)ices$", replacement = "$1ix" }},
]

# Words that have no distinct plural form.
[uncountable]
words = [
    # "metadata",
]
patterns = [
    # "ware$",
]
"#,
            name = self.name
        )
    }
}

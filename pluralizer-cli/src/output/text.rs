//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use pluralizer_core::RuleStats;
use std::io::Write;

/// Plain text formatter - outputs one result per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_inflection(&mut self, _input: &str, output: &str) -> Result<()> {
        writeln!(self.writer, "{output}")?;
        Ok(())
    }

    fn format_check(&mut self, word: &str, is_plural: bool, is_singular: bool) -> Result<()> {
        writeln!(
            self.writer,
            "{word}: plural={}, singular={}",
            yes_no(is_plural),
            yes_no(is_singular)
        )?;
        Ok(())
    }

    fn format_stats(&mut self, name: &str, stats: &RuleStats) -> Result<()> {
        writeln!(self.writer, "{name}")?;
        writeln!(self.writer, "  Irregular pairs:      {}", stats.irregular_pairs)?;
        writeln!(self.writer, "  Plural rules:         {}", stats.plural_rules)?;
        writeln!(self.writer, "  Singular rules:       {}", stats.singular_rules)?;
        writeln!(self.writer, "  Uncountable words:    {}", stats.uncountable_words)?;
        writeln!(
            self.writer,
            "  Uncountable patterns: {}",
            stats.uncountable_patterns
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use pluralizer_core::RuleStats;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects records and writes them as one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<Record>,
}

/// One JSON output record
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Record {
    Inflection {
        input: String,
        output: String,
    },
    Check {
        word: String,
        is_plural: bool,
        is_singular: bool,
    },
    Stats {
        name: String,
        #[serde(flatten)]
        stats: RuleStats,
    },
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_inflection(&mut self, input: &str, output: &str) -> Result<()> {
        self.records.push(Record::Inflection {
            input: input.to_string(),
            output: output.to_string(),
        });
        Ok(())
    }

    fn format_check(&mut self, word: &str, is_plural: bool, is_singular: bool) -> Result<()> {
        self.records.push(Record::Check {
            word: word.to_string(),
            is_plural,
            is_singular,
        });
        Ok(())
    }

    fn format_stats(&mut self, name: &str, stats: &RuleStats) -> Result<()> {
        self.records.push(Record::Stats {
            name: name.to_string(),
            stats: *stats,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

//! Plain text output formatter

use super::{CheckRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one line per sentence and a summary
pub struct TextFormatter<W: Write> {
    writer: W,
    checked: usize,
    invalid: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            checked: 0,
            invalid: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &CheckRecord) -> Result<()> {
        self.checked += 1;
        match &record.reason {
            None => writeln!(self.writer, "✓ {}: {}", record.source, record.sentence)?,
            Some(reason) => {
                self.invalid += 1;
                writeln!(
                    self.writer,
                    "✗ {}: {} [{}]",
                    record.source, record.sentence, reason
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} checked, {} valid, {} invalid",
            self.checked,
            self.checked - self.invalid,
            self.invalid
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

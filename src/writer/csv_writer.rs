use crate::error::{HarvestError, Result};
use crate::extractor::NodeRecord;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Appends one CSV row per page to the run's output file.
///
/// Creating a writer removes any output left by a previous run, so repeated
/// runs over the same pages produce the same file.
pub struct NodeWriter {
    output_file: PathBuf,
    rows_written: usize,
}

impl NodeWriter {
    pub fn new<P: Into<PathBuf>>(output_file: P) -> Result<Self> {
        let writer = Self {
            output_file: output_file.into(),
            rows_written: 0,
        };

        writer.reset()?;
        Ok(writer)
    }

    /// Removes the output file if it exists. Returns whether anything was removed.
    pub fn reset(&self) -> Result<bool> {
        if self.output_file.is_file() {
            fs::remove_file(&self.output_file).map_err(HarvestError::Io)?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn write_record(&mut self, record: &mut NodeRecord) -> Result<()> {
        record.normalize_empty();

        let output_dir = self.output_dir();
        if !output_dir.is_dir() {
            return Err(HarvestError::MissingOutputPath {
                path: output_dir.display().to_string(),
            });
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output_file)
            .map_err(HarvestError::Io)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(file);

        writer.write_record(record.columns().into_iter().map(|value| value.unwrap_or("")))?;
        writer.flush().map_err(HarvestError::Io)?;

        self.rows_written += 1;
        Ok(())
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn output_dir(&self) -> &Path {
        match self.output_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }
}

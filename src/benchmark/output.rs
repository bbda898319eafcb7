//! Line-oriented CSV sink for benchmark rows

use super::error::{BenchmarkError, Result};
use super::types::{BenchmarkRow, CSV_HEADER};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV writer over any byte sink
///
/// Every line is flushed as it is written, so rows emitted before a failure
/// stay on disk.
pub struct CsvOutput<W: Write> {
    writer: W,
    rows_written: usize,
}

impl CsvOutput<BufWriter<File>> {
    /// Create (truncate) the report file at `path`
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| BenchmarkError::OutputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CsvOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows_written: 0,
        }
    }

    pub fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "{}", CSV_HEADER)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &BenchmarkRow) -> Result<()> {
        writeln!(self.writer, "{}", row)?;
        self.writer.flush()?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

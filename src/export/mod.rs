//! Flat file export of generated tables
//!
//! Datasets convert themselves to a single Arrow [`RecordBatch`]; this module
//! writes that batch as CSV or Parquet. Output is written to a `.partial`
//! sibling first and renamed once complete, so a failed write never leaves a
//! truncated table under the final name.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;
use arrow_schema::SchemaRef;
use parquet::arrow::ArrowWriter;

use crate::error::util::ensure_directory;
use crate::error::{Result, SynthError};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// A generated table that can be written to disk
pub trait TabularDataset {
    /// Output file name without extension
    fn file_stem(&self) -> &str;

    /// Arrow schema with the output columns in order
    fn schema(&self) -> SchemaRef;

    /// The whole table as one record batch
    fn to_record_batch(&self) -> Result<RecordBatch>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Parquet,
}

impl OutputFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Parquet => "parquet",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write a record batch as CSV with a header row
pub fn write_csv<W: Write>(batch: &RecordBatch, writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new().with_header(true).build(writer);
    csv.write(batch)?;
    Ok(())
}

/// Write a record batch as a single-row-group Parquet file
pub fn write_parquet<W: Write + Send>(batch: &RecordBatch, writer: W) -> Result<()> {
    let mut parquet = ArrowWriter::try_new(writer, batch.schema(), None)?;
    parquet.write(batch)?;
    parquet.close()?;
    Ok(())
}

/// Path a dataset is written to inside `dir`
#[must_use]
pub fn output_path(dir: &Path, stem: &str, format: OutputFormat) -> PathBuf {
    dir.join(format!("{stem}.{}", format.extension()))
}

/// Write a dataset into `dir` and return the final path
pub fn export<D: TabularDataset + ?Sized>(
    dataset: &D,
    dir: &Path,
    format: OutputFormat,
) -> Result<PathBuf> {
    let start = Instant::now();
    ensure_directory(dir)?;

    let path = output_path(dir, dataset.file_stem(), format);
    log_operation_start("Writing", &path);

    let batch = dataset.to_record_batch()?;
    let partial = path.with_extension(format!("{}.partial", format.extension()));

    let result = File::create(&partial)
        .map_err(SynthError::from)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            match format {
                OutputFormat::Csv => write_csv(&batch, &mut writer)?,
                OutputFormat::Parquet => write_parquet(&batch, &mut writer)?,
            }
            writer.flush()?;
            Ok(())
        });

    if let Err(e) = result {
        // Best effort; the write error is the one worth reporting
        let _ = fs::remove_file(&partial);
        return Err(e);
    }

    fs::rename(&partial, &path)?;
    log_operation_complete("wrote", &path, batch.num_rows(), Some(start.elapsed()));
    Ok(path)
}

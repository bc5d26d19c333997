//! CSV populator for generated product records.

use crate::error::CsvPopulatorError;
use catalog_generator::{ProductRecord, COLUMNS};
use csv::Writer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes product records to a CSV file in `COLUMNS` order.
#[derive(Debug, Clone)]
pub struct CsvPopulator {
    include_header: bool,
}

impl Default for CsvPopulator {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvPopulator {
    /// Create a new CSV populator that writes a header row.
    pub fn new() -> Self {
        Self {
            include_header: true,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Write records to `output_path`, replacing any existing file.
    ///
    /// Values containing commas, quotes or line breaks are quoted; the
    /// comma-joined list fields (tags, features, ...) therefore land in a
    /// single cell each.
    pub fn write<P: AsRef<Path>>(
        &self,
        records: &[ProductRecord],
        output_path: P,
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Writing {} product records to CSV file '{}'",
            records.len(),
            output_path.display()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        if self.include_header {
            writer.write_record(COLUMNS)?;
        }

        for record in records {
            writer.write_record(record.to_csv_record())?;
            metrics.rows_written += 1;

            if metrics.rows_written % 100 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        // Flush and get file size
        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| CsvPopulatorError::Io(std::io::Error::other(e.to_string())))?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV write complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_generator::{Catalog, ProductGenerator};
    use tempfile::TempDir;

    fn records(count: u64) -> Vec<ProductRecord> {
        ProductGenerator::new(Catalog::default(), Some(42))
            .unwrap()
            .products(count)
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            total_duration: Duration::from_secs(10),
            file_size_bytes: 100000,
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(PopulateMetrics::default().rows_per_second(), 0.0);
    }

    #[test]
    fn test_write_csv() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("products.csv");

        let metrics = CsvPopulator::new()
            .write(&records(10), &output_path)
            .unwrap();

        assert_eq!(metrics.rows_written, 10);
        assert!(metrics.file_size_bytes > 0);

        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), COLUMNS.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 10);
        for row in &rows {
            assert_eq!(row.len(), COLUMNS.len());
        }
    }

    #[test]
    fn test_list_fields_stay_in_one_cell() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("products.csv");
        let records = records(3);

        CsvPopulator::new().write(&records, &output_path).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("\"Protein,supplement,gym,fitness,muscle\""));

        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        let tags_index = COLUMNS.iter().position(|c| *c == "tags").unwrap();
        let first = reader.records().next().unwrap().unwrap();
        assert_eq!(&first[tags_index], "Protein,supplement,gym,fitness,muscle");
        assert_eq!(first[0], records[0].name);
    }

    #[test]
    fn test_write_without_header() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("products.csv");

        let metrics = CsvPopulator::new()
            .with_header(false)
            .write(&records(10), &output_path)
            .unwrap();

        assert_eq!(metrics.rows_written, 10);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("Protein Supplement 1,"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("products.csv");
        std::fs::write(&output_path, "stale\n".repeat(1000)).unwrap();

        CsvPopulator::new().write(&records(2), &output_path).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_unwritable_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("missing").join("products.csv");

        let result = CsvPopulator::new().write(&records(1), &output_path);
        assert!(matches!(result, Err(CsvPopulatorError::Io(_))));
    }

    #[test]
    fn test_empty_records_writes_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("products.csv");

        let metrics = CsvPopulator::new().write(&[], &output_path).unwrap();

        assert_eq!(metrics.rows_written, 0);
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content, format!("{}\n", COLUMNS.join(",")));
    }
}

//! Human-readable summary printed after the CSV file is written.

use catalog_generator::{ProductRecord, PREVIEW_COLUMNS};
use std::fmt;
use std::path::Path;

/// Number of records shown in the preview table.
pub const PREVIEW_ROWS: usize = 3;

/// Post-write summary: record count, column count and a short preview.
///
/// Rendering is purely observational; the file is already on disk by the
/// time a `Report` exists.
pub struct Report<'a> {
    output: &'a Path,
    records: &'a [ProductRecord],
    column_count: usize,
}

impl<'a> Report<'a> {
    pub fn new(output: &'a Path, records: &'a [ProductRecord], column_count: usize) -> Self {
        Self {
            output,
            records,
            column_count,
        }
    }

    /// Preview cells: one header row followed by up to `PREVIEW_ROWS` rows.
    fn preview_cells(&self) -> Vec<Vec<String>> {
        let header = PREVIEW_COLUMNS.iter().map(|c| c.to_string()).collect();
        let mut rows: Vec<Vec<String>> = vec![header];
        rows.extend(self.records.iter().take(PREVIEW_ROWS).map(|record| {
            PREVIEW_COLUMNS
                .iter()
                .map(|column| record.get(column).unwrap_or_default())
                .collect()
        }));
        rows
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ {} generated successfully!", self.output.display())?;
        writeln!(f, "📊 Total products: {}", self.records.len())?;
        writeln!(f, "🔧 All {} CSV columns included", self.column_count)?;
        writeln!(f, "🎯 Notes:")?;
        writeln!(f, "   - Category: 'Proteins'")?;
        writeln!(f, "   - Using existing image paths (protien1.jpg to protien9.jpg)")?;
        writeln!(f, "   - Booleans written as TRUE/FALSE, list fields comma-joined")?;
        writeln!(f)?;
        writeln!(f, "📋 Sample data preview:")?;

        let cells = self.preview_cells();
        let widths: Vec<usize> = (0..PREVIEW_COLUMNS.len())
            .map(|col| {
                cells
                    .iter()
                    .map(|row| row[col].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for row in &cells {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_generator::{Catalog, ProductGenerator, COLUMNS};

    fn render(count: u64) -> String {
        let records = ProductGenerator::new(Catalog::default(), Some(42))
            .unwrap()
            .products(count);
        Report::new(Path::new("out.csv"), &records, COLUMNS.len()).to_string()
    }

    #[test]
    fn test_summary_lines() {
        let text = render(400);

        assert!(text.contains("out.csv generated successfully!"));
        assert!(text.contains("Total products: 400"));
        assert!(text.contains(&format!("All {} CSV columns included", COLUMNS.len())));
    }

    #[test]
    fn test_preview_limited_to_three_rows() {
        let text = render(400);
        let preview: Vec<&str> = text
            .lines()
            .skip_while(|line| !line.contains("Sample data preview"))
            .skip(1)
            .collect();

        assert_eq!(preview.len(), 1 + PREVIEW_ROWS);
        for column in PREVIEW_COLUMNS {
            assert!(preview[0].contains(column));
        }
        assert!(preview[1].contains("Protein Supplement 1"));
        assert!(preview[3].contains("Protein Supplement 3"));
        assert!(!text.contains("Protein Supplement 4 "));
    }

    #[test]
    fn test_preview_rows_are_aligned() {
        let text = render(3);
        let preview: Vec<&str> = text
            .lines()
            .skip_while(|line| !line.contains("Sample data preview"))
            .skip(1)
            .collect();

        let width = preview[0].chars().count();
        assert!(preview.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_fewer_records_than_preview() {
        let text = render(1);
        let preview_rows = text
            .lines()
            .skip_while(|line| !line.contains("Sample data preview"))
            .count();

        assert_eq!(preview_rows, 1 + 1 + 1);
    }
}

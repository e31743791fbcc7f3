use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

use super::{Cell, RawGrid};

/// Read a CSV export from disk into a raw grid.
pub fn load_csv_grid<P: AsRef<Path>>(path: P) -> Result<RawGrid> {
    let file = File::open(&path)
        .with_context(|| format!("failed to open CSV file: {}", path.as_ref().display()))?;
    read_csv_grid(file)
}

/// Parse CSV bytes into a raw grid. Every field arrives as text; quoting is
/// handled by the reader and ragged rows are accepted as-is.
pub fn read_csv_grid<R: Read>(reader: R) -> Result<RawGrid> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("failed to read CSV record")?;
        let row: Vec<Cell> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), "loaded CSV grid");
    Ok(RawGrid { rows })
}

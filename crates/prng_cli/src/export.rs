//! CSV export of numeric tables.
//!
//! Files carry no header: one table row per line, cells comma separated.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use prng_quality::NumericTable;
use tracing::info;

use crate::Result;

/// Formats one cell.
///
/// Integral values print without a fractional part (`0`, `1`); everything
/// else uses the shortest representation that parses back to the same `f64`.
pub fn format_cell(value: f64) -> String {
    if value == 0.0 {
        // also folds -0.0
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Writes `table` to `writer`.
pub fn write_table<W: Write>(table: &NumericTable, writer: W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let mut record: Vec<String> = Vec::with_capacity(table.n_cols());
    for row in table.rows() {
        record.clear();
        record.extend(row.iter().map(|&v| format_cell(v)));
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes `table` to `path`, creating parent directories as needed.
pub fn write_table_to_path(table: &NumericTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_table(table, BufWriter::new(file))?;

    info!(
        path = %path.display(),
        rows = table.n_rows(),
        cols = table.n_cols(),
        "Table written"
    );
    Ok(())
}

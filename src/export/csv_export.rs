//! CSV export of per-layer parameter tables.
//!
//! The column set and 4-decimal fixed formatting match what downstream
//! spreadsheet tooling was built against; the header is written verbatim
//! (`Energy Barrier` contains a space, so rows are formatted by hand rather
//! than through serde field names).

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;

use crate::stack::LayerRecord;

/// Column headers of the layer table, in order.
const LAYER_TABLE_HEADER: [&str; 8] = [
    "Layer",
    "b1",
    "b2",
    "c",
    "beta",
    "h1",
    "h2",
    "Energy Barrier",
];

/// Write the layer table to any writer.
pub fn write_layer_table<W: Write>(records: &[LayerRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(LAYER_TABLE_HEADER)?;
    for record in records {
        csv_writer.write_record([
            record.layer.to_string(),
            format!("{:.4}", record.b1),
            format!("{:.4}", record.b2),
            format!("{:.4}", record.c),
            format!("{:.4}", record.beta),
            format!("{:.4}", record.h1),
            format!("{:.4}", record.h2),
            format!("{:.4}", record.energy_barrier),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export the layer table to a specific file.
pub fn export_layer_table<P: AsRef<Path>>(records: &[LayerRecord], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_layer_table(records, file)?;

    log::info!("Layer table exported: {}", path.as_ref().display());
    Ok(())
}

/// Export the layer table to a timestamped file under `exports/`.
///
/// Creates the directory if it doesn't exist; the filename is
/// `layers_YYYYMMDD_HHMMSS.csv`. Returns the path written.
pub fn export_layer_table_timestamped(records: &[LayerRecord]) -> Result<PathBuf> {
    let dir = PathBuf::from("exports");
    std::fs::create_dir_all(&dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("layers_{}.csv", timestamp));

    export_layer_table(records, &path)?;
    Ok(path)
}

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::CSV_HEADER;
use crate::error::Result;
use crate::types::PatchRow;

/// Orders rows by release date, undated rows first, then by patch id.
///
/// The patch id comparison is plain string order, so `"10.0.0.1"` sorts
/// before `"4.1.3"` when both share a date.
pub fn sort_rows(mut rows: Vec<PatchRow>) -> Vec<PatchRow> {
    rows.sort_by(|a, b| {
        a.release_date_na()
            .cmp(&b.release_date_na())
            .then_with(|| a.patch_id().cmp(b.patch_id()))
    });
    rows
}

/// The three CSV fields for a row: id, build (or empty), ISO date (or empty).
pub fn csv_fields(row: &PatchRow) -> [String; 3] {
    [
        row.patch_id().to_string(),
        row.build().unwrap_or_default().to_string(),
        row.release_date_na()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    ]
}

/// Writes the header and the sorted rows as CSV.
pub fn write_csv<W: Write>(rows: Vec<PatchRow>, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for row in sort_rows(rows) {
        csv_writer.write_record(csv_fields(&row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the timeline to `path`, creating its parent directory if needed.
pub fn write_csv_file(rows: Vec<PatchRow>, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Ensuring output directory {}", parent.display());
        fs::create_dir_all(parent)?;
    }

    let count = rows.len();
    let file = fs::File::create(path)?;
    write_csv(rows, file)?;

    info!("Wrote {} rows to {}", count, path.display());
    Ok(path.to_path_buf())
}

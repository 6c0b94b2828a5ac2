//! CSV roster reading.

use std::path::Path;

use csv::ReaderBuilder;

use roster_model::CsvTable;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Reads a roster CSV into a [`CsvTable`].
///
/// The first non-blank record is the header row; headers are trimmed and
/// whitespace-collapsed. Data records are padded (or truncated) to header
/// width so positional fallbacks stay aligned, and all-blank records are
/// dropped.
pub fn read_roster_table(path: &Path) -> Result<CsvTable> {
    if !path.is_file() {
        return Err(IngestError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::LoadFailure {
            path: path.to_path_buf(),
            source,
        })?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::LoadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.iter().map(normalize_header).collect());
            }
            Some(header_row) => {
                let mut row = Vec::with_capacity(header_row.len());
                for index in 0..header_row.len() {
                    let value = record.get(index).unwrap_or("");
                    row.push(normalize_cell(value));
                }
                rows.push(row);
            }
        }
    }

    Ok(CsvTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}

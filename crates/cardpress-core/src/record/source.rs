//! CSV row source
//!
//! The header row names the fields. Short rows are padded with empty values
//! and cells beyond the header are dropped.

use super::DataRecord;
use crate::error::{CardpressError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Read every data row of the CSV file at `path`
///
/// # Errors
///
/// Returns `DataNotFound` if the file does not exist and `DataInvalid` if
/// the CSV cannot be parsed.
pub fn read_records(path: &Path) -> Result<Vec<DataRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CardpressError::DataNotFound {
            path: path.to_path_buf(),
        },
        _ => CardpressError::IoError(e),
    })?;

    let records = read_records_from_reader(file).map_err(|e| match e {
        CardpressError::DataInvalid(reason) => {
            CardpressError::DataInvalid(format!("{}: {}", path.display(), reason))
        }
        other => other,
    })?;

    debug!(path = %path.display(), rows = records.len(), "read card data");
    Ok(records)
}

/// Read every data row from an in-memory or streamed CSV source
pub fn read_records_from_reader<R: Read>(reader: R) -> Result<Vec<DataRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| CardpressError::DataInvalid(format!("failed to read header: {}", e)))?
        .clone();

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = result
            .map_err(|e| CardpressError::DataInvalid(format!("row {}: {}", idx + 1, e)))?;

        let record: DataRecord = headers
            .iter()
            .enumerate()
            .map(|(column, name)| (name, row.get(column).unwrap_or("")))
            .collect();
        records.push(record);
    }

    Ok(records)
}

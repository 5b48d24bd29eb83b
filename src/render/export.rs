//! Machine-readable output for the `--format json|csv` flags.

use serde::Serialize;

/// Serialize records as pretty JSON
pub fn to_json<T: Serialize + ?Sized>(records: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Serialize records as CSV with a header row taken from the field names
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Flush(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to finish export: {0}")]
    Flush(String),
}

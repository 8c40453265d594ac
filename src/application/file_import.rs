// Best-effort parsing of uploaded JSON/CSV files
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// One CSV data row keyed by header name. Values stay strings.
pub type CsvRecord = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV file has no header row")]
    MissingHeader,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportedData {
    Json(serde_json::Value),
    Csv(Vec<CsvRecord>),
}

impl ImportedData {
    pub fn record_count(&self) -> usize {
        match self {
            ImportedData::Json(serde_json::Value::Array(items)) => items.len(),
            ImportedData::Json(_) => 1,
            ImportedData::Csv(records) => records.len(),
        }
    }
}

/// Parse an uploaded file, picking the format from its extension
pub fn parse_upload(file_name: &str, content: &str) -> Result<ImportedData, ImportError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => Ok(ImportedData::Json(serde_json::from_str(content)?)),
        Some("csv") => parse_csv(content).map(ImportedData::Csv),
        _ => Err(ImportError::UnsupportedFormat(file_name.to_string())),
    }
}

/// First line is the header; later lines map onto it by position.
/// Blank lines are skipped and short rows simply lack the trailing keys.
fn parse_csv(content: &str) -> Result<Vec<CsvRecord>, ImportError> {
    let mut lines = content.split('\n');

    let header_line = lines
        .next()
        .filter(|l| !l.trim().is_empty())
        .ok_or(ImportError::MissingHeader)?;
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let records = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            headers
                .iter()
                .zip(line.split(','))
                .map(|(header, value)| (header.to_string(), value.trim().to_string()))
                .collect()
        })
        .collect();

    Ok(records)
}

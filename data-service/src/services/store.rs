//! In-memory record store loaded once at startup from a delimited file.
//!
//! The store is immutable after load and shared read-only between request
//! handlers, so no locking is needed on the data path. A missing source file
//! leaves the store empty and the service running in degraded mode.

use service_core::error::AppError;
use std::collections::BTreeMap;
use std::path::Path;

/// Column holding the product category of a row.
pub const CATEGORY_FIELD: &str = "Product_Category";
/// Column holding the 1-5 feedback rating of a row.
pub const RATING_FIELD: &str = "Feedback_Rating_1_5";
/// Column holding the transaction value in USD.
pub const VALUE_FIELD: &str = "Total_Value_USD";

/// One row of the loaded dataset: field name -> string value.
pub type Record = BTreeMap<String, String>;

#[derive(Debug, Default)]
pub struct RecordStore {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl RecordStore {
    /// Load all rows from a CSV file, keyed by header column names.
    ///
    /// A missing file is not an error: the store comes up empty and
    /// data-dependent endpoints report unavailability instead. A file that
    /// exists but cannot be parsed does fail, since serving a partial table
    /// would be indistinguishable from a complete one.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let mut reader = match csv::Reader::from_path(path) {
            Ok(reader) => reader,
            Err(err) if is_not_found(&err) => {
                tracing::warn!(
                    path = %path.display(),
                    "Data file not found, starting with an empty store"
                );
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(AppError::InternalError(anyhow::anyhow!(
                    "Failed to open {}: {}",
                    path.display(),
                    err
                )));
            }
        };

        let headers: Vec<String> = reader
            .headers()
            .map_err(|err| {
                AppError::InternalError(anyhow::anyhow!(
                    "Failed to read header row of {}: {}",
                    path.display(),
                    err
                ))
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|err| {
                AppError::InternalError(anyhow::anyhow!(
                    "Malformed row in {}: {}",
                    path.display(),
                    err
                ))
            })?;
            let record: Record = headers
                .iter()
                .cloned()
                .zip(row.iter().map(str::to_string))
                .collect();
            records.push(record);
        }

        tracing::info!(path = %path.display(), records = records.len(), "Loaded data file");

        Ok(Self { headers, records })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn is_not_found(err: &csv::Error) -> bool {
    match err.kind() {
        csv::ErrorKind::Io(io) => io.kind() == std::io::ErrorKind::NotFound,
        _ => false,
    }
}

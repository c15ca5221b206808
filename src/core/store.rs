//! Spreadsheet store - flat tabular file reading and writing
//!
//! The generators treat the spreadsheet layer as an external collaborator
//! with a `read(path) -> rows` / `write(path, rows)` contract. The backing
//! format is CSV with a header row; column names come from the serde
//! renames on the row types in [`crate::entities`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// CSV-backed implementation of the spreadsheet store contract
pub struct CsvStore;

impl CsvStore {
    /// Read all rows of a spreadsheet file into typed records
    pub fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| StoreError::Open {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut rows = Vec::new();
        for result in rdr.deserialize() {
            rows.push(result.map_err(|e| StoreError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?);
        }
        Ok(rows)
    }

    /// Write typed records to a spreadsheet file, overwriting any prior
    /// content at the path. A header row is emitted first.
    pub fn write<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), StoreError> {
        let mut wtr = csv::Writer::from_path(path).map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

        for row in rows {
            wtr.serialize(row).map_err(|e| StoreError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        wtr.flush().map_err(|e| StoreError::Flush {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}

/// Errors that can occur in the spreadsheet store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open {path:?}: {source}")]
    Open { path: PathBuf, source: csv::Error },

    #[error("failed to parse {path:?}: {source}")]
    Parse { path: PathBuf, source: csv::Error },

    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: csv::Error },

    #[error("failed to flush {path:?}: {source}")]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },
}

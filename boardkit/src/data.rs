//! Loading of the pre-generated JSON data files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::row::Row;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and deserialize one JSON data file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a data file containing an array of row objects.
pub fn load_rows(path: &Path) -> Result<Vec<Row>, DataError> {
    let rows: Vec<Row> = load_json(path)?;
    log::debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

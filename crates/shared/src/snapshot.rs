//! Reading record snapshots exported by the back-office API.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Reads and decodes a JSON snapshot file.
///
/// # Errors
///
/// Returns [`AppError::Io`] when the file cannot be read and
/// [`AppError::Snapshot`] when its contents do not decode into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_json(&raw, path)
}

/// Decodes a JSON snapshot already held in memory.
///
/// `origin` only labels errors.
///
/// # Errors
///
/// Returns [`AppError::Snapshot`] when `raw` does not decode into `T`.
pub fn parse_json<T: DeserializeOwned>(raw: &str, origin: &Path) -> AppResult<T> {
    serde_json::from_str(raw).map_err(|source| AppError::Snapshot {
        path: origin.display().to_string(),
        source,
    })
}

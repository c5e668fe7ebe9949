// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Hard failures of a generation run. Marker problems are not in here;
/// see [`crate::splice::MarkerError`].
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("catalog serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = GenError> = std::result::Result<T, E>;

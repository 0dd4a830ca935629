//! Error types for hpograph

use std::path::PathBuf;

use thiserror::Error;

use crate::TermID;

#[derive(Error, Debug)]
pub enum HpoError {
    #[error("Term not found: {0}")]
    NotFound(TermID),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed source at line {line}: {content:?}")]
    MalformedSource { line: usize, content: String },

    #[error("Cycle detected at term: {0}")]
    CycleDetected(TermID),

    #[error("Database file does not exist: {}", .0.display())]
    MissingDatabase(PathBuf),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HpoError>;

#[cfg(feature = "python")]
impl From<HpoError> for pyo3::PyErr {
    fn from(err: HpoError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
        match err {
            HpoError::NotFound(_) => PyKeyError::new_err(err.to_string()),
            HpoError::InvalidArgument(_) | HpoError::MalformedSource { .. } => {
                PyValueError::new_err(err.to_string())
            }
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

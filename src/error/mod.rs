//! Error handling for cohort generation.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for cohort generation
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding the boundary dataset
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error building or writing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error writing Parquet output
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// The region dataset is missing, unreadable or lacks a required column
    #[error("Could not load regions from '{}': {reason}", path.display())]
    RegionLoad {
        /// Path of the boundary dataset
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Sampling needs at least one region to draw from
    #[error("Region set is empty")]
    EmptyRegionSet,

    /// A distribution parameter is out of range
    #[error("Invalid parameter for {name}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: String,
        /// Why it was rejected
        reason: String,
    },
}

impl SynthError {
    /// Create a region load error for the given path
    pub fn region_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::RegionLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for cohort generation
pub type Result<T> = std::result::Result<T, SynthError>;

//! Load error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the dataset.
///
/// Only unreadable input files are fatal; malformed rows are skipped by the
/// loader and never surface here.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An input file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

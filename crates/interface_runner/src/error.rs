//! Runner error handling

use std::path::PathBuf;
use thiserror::Error;

use domain_export::ExportError;

/// Errors raised while executing an export run
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Failed to read transactions from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed transaction file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write batch file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

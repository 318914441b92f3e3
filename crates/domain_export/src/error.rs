//! Export domain errors

use thiserror::Error;

use core_kernel::TemporalError;
use crate::destination::Destination;

/// Errors that can occur while configuring or building a batch
///
/// Rendering itself never fails; every variant here is raised either while
/// constructing a batch or while appending to one.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Destination identifier does not name a known format
    #[error("Unsupported export destination: {0:?}")]
    UnsupportedDestination(String),

    /// Export configuration failed validation
    #[error("Invalid export configuration: {0}")]
    InvalidConfiguration(String),

    /// Calendar or date-format configuration is unusable
    #[error("Calendar configuration error: {0}")]
    Calendar(#[from] TemporalError),

    /// Sequenced ledger batch cannot number another row
    #[error("Row sequence exhausted: a sequenced batch holds at most {max_rows} rows")]
    SequenceExhausted {
        max_rows: usize,
    },

    /// Destination has no archive rendering
    #[error("Archive rendering is not supported for {0}")]
    ArchiveUnsupported(Destination),
}

impl From<validator::ValidationErrors> for ExportError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ExportError::InvalidConfiguration(errors.to_string())
    }
}

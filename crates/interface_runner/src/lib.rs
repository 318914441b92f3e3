//! Export Runner
//!
//! This crate drives one export run on behalf of the scheduler or an operator:
//!
//! - **Config**: engine and output settings from `EXPORT_*` environment variables
//! - **Input**: a JSON array of finalized transactions from the persistence layer
//! - **Output**: the rendered batch file written to disk
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_runner::{run_export, config::RunnerConfig, ExportRequest};
//!
//! let config = RunnerConfig::from_env()?;
//! let request = ExportRequest::new("general_ledger", run_date, "transactions.json");
//! let report = run_export(&config, &request)?;
//! ```

pub mod config;
pub mod error;

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use domain_export::{BatchFactory, Destination, ExportSummary, Transaction};

use crate::config::RunnerConfig;
use crate::error::RunnerError;

/// Parameters of a single export run
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Destination identifier
    pub destination: String,
    /// Reference date fixing fiscal period, year and journal description
    pub run_date: NaiveDate,
    /// JSON file holding the transactions to export
    pub input: PathBuf,
    /// Explicit output path; defaults to the batch file name in the output directory
    pub output: Option<PathBuf>,
}

impl ExportRequest {
    pub fn new(destination: impl Into<String>, run_date: NaiveDate, input: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            run_date,
            input: input.into(),
            output: None,
        }
    }

    /// Writes to an explicit path instead of the output directory
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// Outcome of a completed export run
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub destination: Destination,
    pub output: PathBuf,
    pub summary: ExportSummary,
    /// Transactions read from the input, including dropped zero amounts
    pub read: usize,
}

/// Reads a JSON array of transactions
///
/// # Errors
///
/// Returns `RunnerError::Read` or `RunnerError::Parse` naming the file
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, RunnerError> {
    let raw = fs::read_to_string(path).map_err(|source| RunnerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| RunnerError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Executes one export run end to end
///
/// Builds the batch, appends every transaction in input order, renders it
/// and writes the payload. Configuration problems abort before any input
/// is read.
///
/// # Errors
///
/// Returns an error on invalid configuration, an unsupported destination,
/// unreadable input, or a failed write
pub fn run_export(config: &RunnerConfig, request: &ExportRequest) -> Result<ExportReport, RunnerError> {
    let factory = BatchFactory::new(&config.export_config())?;
    let mut batch = factory.new_batch(&request.destination, request.run_date)?;

    let transactions = load_transactions(&request.input)?;
    let read = transactions.len();
    tracing::debug!(path = %request.input.display(), read, "loaded transactions");

    batch.extend(transactions)?;
    let rendered = batch.render();

    let output = request
        .output
        .clone()
        .unwrap_or_else(|| config.output_dir.join(batch.file_name()));
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RunnerError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&output, &rendered.bytes).map_err(|source| RunnerError::Write {
        path: output.clone(),
        source,
    })?;

    let summary = batch.summary();
    tracing::info!(
        destination = %batch.destination(),
        output = %output.display(),
        read,
        rows = summary.rows,
        total = %summary.total,
        "export run complete"
    );

    Ok(ExportReport {
        destination: batch.destination(),
        output,
        summary,
        read,
    })
}

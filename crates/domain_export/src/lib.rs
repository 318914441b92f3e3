//! Export Domain - Financial Batch Export Engine
//!
//! This crate renders finalized policy transactions into the fixed-format
//! batch files consumed by external general-ledger systems and by the
//! policyholder statement mailing.
//!
//! # Destinations
//!
//! - **General ledger**: two header lines, a fiscal summary row, one row per transaction
//! - **Sequenced ledger**: as above, with a running row number on each transaction row
//! - **Policyholder statement**: one header line and one row per transaction
//!
//! Every format reverses the stored sign of each amount and never writes
//! zero-amount transactions.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_export::{BatchFactory, ExportConfig, Transaction};
//!
//! let factory = BatchFactory::new(&ExportConfig::default())?;
//! let mut batch = factory.new_batch("general_ledger", run_date)?;
//!
//! for transaction in transactions {
//!     batch.append(transaction)?;
//! }
//!
//! let rendered = batch.render();
//! std::fs::write(batch.file_name(), &rendered.bytes)?;
//! ```

pub mod batch;
pub mod config;
pub mod destination;
pub mod factory;
pub mod ledger;
pub mod statement;
pub mod transaction;
pub mod error;

pub use batch::{Batch, ContentType, ExportSummary, Rendered};
pub use config::ExportConfig;
pub use destination::Destination;
pub use factory::BatchFactory;
pub use ledger::{GeneralLedgerBatch, JournalHeader, SequencedLedgerBatch};
pub use statement::StatementBatch;
pub use transaction::{PolicyType, Transaction};
pub use error::ExportError;

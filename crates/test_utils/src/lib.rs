//! Shared helpers for the ledger export tests
//!
//! Batch files are checked line by line, so most helpers here deal in
//! transactions going in and rendered rows coming out:
//!
//! - `fixtures`: the reference run date, export configs and the household /
//!   commercial / zero-amount transactions used across crates
//! - `builders`: `TestTransactionBuilder` and JSON input files for the runner
//! - `assertions`: splitting a `Rendered` payload into preamble, rows and fields
//! - `generators`: proptest strategies for transactions and destinations

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;

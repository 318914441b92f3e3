//! Core Kernel - Foundational types for the ledger export engine
//!
//! This crate provides the building blocks shared by every export format:
//! - Signed minor-unit amounts with exact two-decimal rendering
//! - Fiscal calendar arithmetic for any fiscal-year start month
//! - The compact and display date encodings used in batch files

pub mod money;
pub mod temporal;

pub use money::Amount;
pub use temporal::{compact_date, fiscal_period, month_year, DateFormat, FiscalCalendar, TemporalError};

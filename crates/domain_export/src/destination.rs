//! Export destinations
//!
//! The set of destination formats is closed: each identifier selects one
//! fixed-column layout understood by a downstream system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExportError;

/// A downstream system that consumes batch files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// General-ledger journal import (two headers, summary, transaction rows)
    GeneralLedger,
    /// General-ledger journal import with running row numbers
    SequencedLedger,
    /// Per-policy statement sent to the policyholder
    PolicyholderStatement,
}

impl Destination {
    /// All supported destinations
    pub const ALL: [Destination; 3] = [
        Destination::GeneralLedger,
        Destination::SequencedLedger,
        Destination::PolicyholderStatement,
    ];

    /// Canonical identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::GeneralLedger => "general_ledger",
            Destination::SequencedLedger => "sequenced_ledger",
            Destination::PolicyholderStatement => "policyholder_statement",
        }
    }

    /// Returns true for the two journal-entry formats
    pub fn is_general_ledger(&self) -> bool {
        matches!(self, Destination::GeneralLedger | Destination::SequencedLedger)
    }

    /// Suggested output file name for a batch of this destination
    ///
    /// # Arguments
    ///
    /// * `year` - Batch year
    /// * `period` - Fiscal period 1-12
    pub fn file_name(&self, year: i32, period: u32) -> String {
        format!("{}_{}_{:02}.csv", self.as_str(), year, period)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general_ledger" | "gl" => Ok(Destination::GeneralLedger),
            "sequenced_ledger" | "gl_sequenced" => Ok(Destination::SequencedLedger),
            "policyholder_statement" | "statement" => Ok(Destination::PolicyholderStatement),
            _ => Err(ExportError::UnsupportedDestination(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("gl".parse::<Destination>().unwrap(), Destination::GeneralLedger);
        assert_eq!("GL_SEQUENCED".parse::<Destination>().unwrap(), Destination::SequencedLedger);
        assert_eq!(" statement ".parse::<Destination>().unwrap(), Destination::PolicyholderStatement);
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for destination in Destination::ALL {
            assert_eq!(destination.as_str().parse::<Destination>().unwrap(), destination);
        }
    }

    #[test]
    fn test_unknown_destination() {
        let err = "quickbooks".parse::<Destination>().unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedDestination(ref s) if s == "quickbooks"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            Destination::GeneralLedger.file_name(2020, 9),
            "general_ledger_2020_09.csv"
        );
    }
}

//! Policyholder statements
//!
//! A statement lists a policy's activity for the policyholder: one header
//! line, no summary row, untruncated descriptions and display-format dates.

use core_kernel::DateFormat;

use crate::batch::{push_exportable, Rendered};
use crate::destination::Destination;
use crate::ledger::JournalHeader;
use crate::transaction::{with_suffix, Transaction};

pub const STATEMENT_HEADER: &str = "\"Amount\",\"Description\",\"Reference\",\"Date Entered\"\n";

/// Statement batch for a single policy
///
/// The journal header is kept for file naming and logging only; it is never
/// written to the statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementBatch {
    header: JournalHeader,
    date_format: DateFormat,
    transactions: Vec<Transaction>,
}

impl StatementBatch {
    pub fn new(header: JournalHeader, date_format: DateFormat) -> Self {
        Self {
            header,
            date_format,
            transactions: Vec::new(),
        }
    }

    pub fn header(&self) -> &JournalHeader {
        &self.header
    }

    /// Adds a transaction unless its amount is zero
    pub fn append(&mut self, transaction: Transaction) {
        push_exportable(&mut self.transactions, transaction, Destination::PolicyholderStatement);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    /// Explicit reference, else `MC <household>[ / name]` for household
    /// policies, else `<entity> <account number><cost center>[ / policy name]`
    pub fn reference_for(transaction: &Transaction) -> String {
        if let Some(reference) = &transaction.reference {
            return reference.clone();
        }
        if transaction.is_household() {
            with_suffix(format!("MC {}", transaction.household_id), &transaction.name)
        } else {
            with_suffix(
                format!("{} {}", transaction.entity_code, transaction.account_key()),
                &transaction.policy_name,
            )
        }
    }

    pub fn transaction_row(&self, transaction: &Transaction) -> String {
        format!(
            "{},\"{}\",\"{}\",\"{}\"\n",
            transaction.amount.to_export_string(),
            transaction.description,
            Self::reference_for(transaction),
            self.date_format.format(transaction.date),
        )
    }

    pub fn render(&self) -> Rendered {
        let mut out = String::from(STATEMENT_HEADER);
        for transaction in &self.transactions {
            out.push_str(&self.transaction_row(transaction));
        }
        Rendered::csv(out)
    }

    /// Bundles statements into a single archive
    ///
    /// Bundling has no agreed container format yet, so this returns an empty
    /// payload.
    // TODO: bundle per-policy statements once the archive container format is agreed
    pub fn render_archive(&self) -> Rendered {
        tracing::warn!(
            rows = self.transactions.len(),
            "statement archive bundling is not implemented; returning empty payload"
        );
        Rendered::empty()
    }
}

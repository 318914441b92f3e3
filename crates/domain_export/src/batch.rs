//! Batches bound to a destination format
//!
//! A `Batch` is created once per export run, grows only through `append`,
//! and renders its accumulated transactions on demand. Rendering reads the
//! batch without mutating it, so repeated calls produce identical bytes.

use rust_decimal::Decimal;
use std::fmt;

use core_kernel::DateFormat;

use crate::destination::Destination;
use crate::error::ExportError;
use crate::ledger::{GeneralLedgerBatch, JournalHeader, SequencedLedgerBatch};
use crate::statement::StatementBatch;
use crate::transaction::Transaction;

/// Content type tag attached to a rendered payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Csv,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered batch file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub bytes: Vec<u8>,
    pub content_type: ContentType,
}

impl Rendered {
    pub fn csv(text: String) -> Self {
        Self {
            bytes: text.into_bytes(),
            content_type: ContentType::Csv,
        }
    }

    pub fn empty() -> Self {
        Self {
            bytes: Vec::new(),
            content_type: ContentType::Csv,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Views the payload as text
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// Row count and exported total of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Transaction rows that will be rendered
    pub rows: usize,
    /// Sum of the exported (sign-reversed) amounts
    pub total: Decimal,
}

/// Pushes a transaction unless its amount is zero
pub(crate) fn push_exportable(
    transactions: &mut Vec<Transaction>,
    transaction: Transaction,
    destination: Destination,
) {
    if !transaction.is_exportable() {
        tracing::debug!(
            %destination,
            description = %transaction.description,
            "dropping zero-amount transaction"
        );
        return;
    }
    transactions.push(transaction);
}

/// One export run bound to exactly one destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Batch {
    GeneralLedger(GeneralLedgerBatch),
    SequencedLedger(SequencedLedgerBatch),
    PolicyholderStatement(StatementBatch),
}

impl Batch {
    /// Creates an empty batch for `destination` stamped with `header`
    ///
    /// `date_format` is used only by statement batches.
    pub fn new(destination: Destination, header: JournalHeader, date_format: DateFormat) -> Self {
        match destination {
            Destination::GeneralLedger => Batch::GeneralLedger(GeneralLedgerBatch::new(header)),
            Destination::SequencedLedger => Batch::SequencedLedger(SequencedLedgerBatch::new(header)),
            Destination::PolicyholderStatement => {
                Batch::PolicyholderStatement(StatementBatch::new(header, date_format))
            }
        }
    }

    pub fn destination(&self) -> Destination {
        match self {
            Batch::GeneralLedger(_) => Destination::GeneralLedger,
            Batch::SequencedLedger(_) => Destination::SequencedLedger,
            Batch::PolicyholderStatement(_) => Destination::PolicyholderStatement,
        }
    }

    pub fn header(&self) -> &JournalHeader {
        match self {
            Batch::GeneralLedger(batch) => batch.header(),
            Batch::SequencedLedger(batch) => batch.header(),
            Batch::PolicyholderStatement(statement) => statement.header(),
        }
    }

    /// Fiscal period 1-12
    pub fn period(&self) -> u32 {
        self.header().period
    }

    pub fn year(&self) -> i32 {
        self.header().year
    }

    pub fn journal_description(&self) -> &str {
        &self.header().journal_description
    }

    /// Retained transactions in append order
    pub fn transactions(&self) -> &[Transaction] {
        match self {
            Batch::GeneralLedger(batch) => batch.transactions(),
            Batch::SequencedLedger(batch) => batch.transactions(),
            Batch::PolicyholderStatement(statement) => statement.transactions(),
        }
    }

    pub fn len(&self) -> usize {
        self.transactions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions().is_empty()
    }

    /// Adds a transaction to the batch
    ///
    /// Zero-amount transactions are silently dropped.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::SequenceExhausted` when a sequenced ledger batch
    /// cannot number another row.
    pub fn append(&mut self, transaction: Transaction) -> Result<(), ExportError> {
        match self {
            Batch::GeneralLedger(batch) => batch.append(transaction),
            Batch::SequencedLedger(batch) => batch.append(transaction)?,
            Batch::PolicyholderStatement(statement) => statement.append(transaction),
        }
        Ok(())
    }

    /// Appends every transaction from an iterator, stopping at the first error
    pub fn extend<I>(&mut self, transactions: I) -> Result<(), ExportError>
    where
        I: IntoIterator<Item = Transaction>,
    {
        for transaction in transactions {
            self.append(transaction)?;
        }
        Ok(())
    }

    /// Renders the destination file
    pub fn render(&self) -> Rendered {
        let rendered = match self {
            Batch::GeneralLedger(batch) => batch.render(),
            Batch::SequencedLedger(batch) => batch.render(),
            Batch::PolicyholderStatement(statement) => statement.render(),
        };
        tracing::info!(
            destination = %self.destination(),
            period = self.period(),
            year = self.year(),
            rows = self.len(),
            bytes = rendered.bytes.len(),
            "rendered export batch"
        );
        rendered
    }

    /// Renders the statement archive bundle
    ///
    /// # Errors
    ///
    /// Returns `ExportError::ArchiveUnsupported` for ledger destinations
    pub fn render_archive(&self) -> Result<Rendered, ExportError> {
        match self {
            Batch::PolicyholderStatement(statement) => Ok(statement.render_archive()),
            _ => Err(ExportError::ArchiveUnsupported(self.destination())),
        }
    }

    /// Row count and exported total
    pub fn summary(&self) -> ExportSummary {
        let transactions = self.transactions();
        ExportSummary {
            rows: transactions.len(),
            total: transactions
                .iter()
                .map(|t| t.amount.negated_decimal())
                .sum(),
        }
    }

    /// Suggested output file name for this batch
    pub fn file_name(&self) -> String {
        self.destination().file_name(self.year(), self.period())
    }
}

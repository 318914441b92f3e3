//! General-ledger journal batches
//!
//! Both ledger formats share the same file skeleton:
//!
//! 1. batch-control header line
//! 2. transaction-control header line
//! 3. one summary row carrying fiscal year, period and journal description
//! 4. one row per retained transaction, in append order
//!
//! Every field is quoted except the numeric counters and amounts. Rows end
//! with `\n` and no generic CSV escaping is applied.

use core_kernel::temporal::compact_date;

use crate::batch::{push_exportable, Rendered};
use crate::destination::Destination;
use crate::error::ExportError;
use crate::transaction::{with_suffix, Transaction};

/// Maximum description width accepted by the ledger import
pub const MAX_DESCRIPTION_CHARS: usize = 60;

/// Row number increment in sequenced batches
pub const SEQUENCE_STEP: u64 = 20;

/// Width of the zero-padded row number in sequenced batches
pub const SEQUENCE_WIDTH: usize = 10;

/// Largest number of rows whose sequence still fits in `SEQUENCE_WIDTH` digits
pub const MAX_SEQUENCED_ROWS: usize = (9_999_999_999 / SEQUENCE_STEP) as usize;

pub const BATCH_HEADER: &str = "\"RECTYPE\",\"BATCHID\",\"BTCHENTRY\",\"ORIGCOMP\",\"SRCELEDGER\",\"SRCETYPE\",\"FSCSYR\",\"FSCSPERD\",\"SWEDIT\",\"JRNLDESC\",\"REVPERD\",\"JRNLDR\",\"JRNLCR\",\"JRNLQTY\",\"SWBALANCE\"\n";

pub const TRANSACTION_HEADER: &str = "\"RECTYPE\",\"BATCHNBR\",\"JOURNALID\",\"ACCTID\",\"TRANSAMT\",\"TRANSDESC\",\"TRANSREF\",\"TRANSDATE\"\n";

pub const SEQUENCED_TRANSACTION_HEADER: &str = "\"RECTYPE\",\"BATCHNBR\",\"JOURNALID\",\"TRANSNBR\",\"ACCTID\",\"TRANSAMT\",\"TRANSDESC\",\"TRANSREF\",\"TRANSDATE\"\n";

/// Fiscal metadata stamped on a journal batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalHeader {
    /// Fiscal period 1-12
    pub period: u32,
    pub year: i32,
    pub journal_description: String,
}

impl JournalHeader {
    pub fn new(period: u32, year: i32, journal_description: impl Into<String>) -> Self {
        Self {
            period,
            year,
            journal_description: journal_description.into(),
        }
    }

    /// The single summary row written after the two header lines
    pub fn summary_row(&self) -> String {
        format!(
            "\"1\",\"000000\",\"00001\",\"\",\"GL\",\"JE\",\"{}\",\"{:02}\",0,\"{}\",\"00\",0,0,0,2\n",
            self.year, self.period, self.journal_description
        )
    }
}

/// Truncates to at most `max` characters without splitting a code point
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Journal batch for the general-ledger import (Format A)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralLedgerBatch {
    header: JournalHeader,
    transactions: Vec<Transaction>,
}

impl GeneralLedgerBatch {
    pub fn new(header: JournalHeader) -> Self {
        Self {
            header,
            transactions: Vec::new(),
        }
    }

    /// Adds a transaction unless its amount is zero
    pub fn append(&mut self, transaction: Transaction) {
        push_exportable(&mut self.transactions, transaction, Destination::GeneralLedger);
    }

    pub fn header(&self) -> &JournalHeader {
        &self.header
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Explicit account, else household id for household policies, else entity code
    pub fn account_for(transaction: &Transaction) -> String {
        match &transaction.account {
            Some(account) => account.clone(),
            None if transaction.is_household() => transaction.household_id.clone(),
            None => transaction.entity_code.clone(),
        }
    }

    /// Explicit reference, else `MC[ / name]` for household policies,
    /// else `<account number><cost center>[ / policy name]`
    pub fn reference_for(transaction: &Transaction) -> String {
        if let Some(reference) = &transaction.reference {
            return reference.clone();
        }
        if transaction.is_household() {
            with_suffix("MC".to_string(), &transaction.name)
        } else {
            with_suffix(transaction.account_key(), &transaction.policy_name)
        }
    }

    pub fn transaction_row(transaction: &Transaction) -> String {
        format!(
            "\"2\",\"000000\",\"00001\",\"{}\",{},\"{}\",\"{}\",\"{}\"\n",
            Self::account_for(transaction),
            transaction.amount.to_export_string(),
            truncate_chars(&transaction.description, MAX_DESCRIPTION_CHARS),
            Self::reference_for(transaction),
            compact_date(transaction.date),
        )
    }

    pub fn render(&self) -> Rendered {
        let mut out = String::new();
        out.push_str(BATCH_HEADER);
        out.push_str(TRANSACTION_HEADER);
        out.push_str(&self.header.summary_row());
        for transaction in &self.transactions {
            out.push_str(&Self::transaction_row(transaction));
        }
        Rendered::csv(out)
    }
}

/// Journal batch whose rows carry a running row number (Format B)
///
/// The caller resolves accounts before appending; account and reference
/// are written as carried by the transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedLedgerBatch {
    header: JournalHeader,
    transactions: Vec<Transaction>,
    max_rows: usize,
}

impl SequencedLedgerBatch {
    pub fn new(header: JournalHeader) -> Self {
        Self::with_max_rows(header, MAX_SEQUENCED_ROWS)
    }

    /// Batch that stops numbering after `max_rows` rows
    pub(crate) fn with_max_rows(header: JournalHeader, max_rows: usize) -> Self {
        Self {
            header,
            transactions: Vec::new(),
            max_rows: max_rows.min(MAX_SEQUENCED_ROWS),
        }
    }

    /// Adds a transaction unless its amount is zero
    ///
    /// # Errors
    ///
    /// Returns `ExportError::SequenceExhausted` once `MAX_SEQUENCED_ROWS` rows
    /// are held; the batch is left unchanged.
    pub fn append(&mut self, transaction: Transaction) -> Result<(), ExportError> {
        if transaction.is_exportable() && self.transactions.len() >= self.max_rows {
            tracing::warn!(max_rows = self.max_rows, "sequenced ledger batch is full");
            return Err(ExportError::SequenceExhausted {
                max_rows: self.max_rows,
            });
        }
        push_exportable(&mut self.transactions, transaction, Destination::SequencedLedger);
        Ok(())
    }

    pub fn header(&self) -> &JournalHeader {
        &self.header
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Row number for the 1-based row `index`, zero-padded
    pub fn sequence_number(index: usize) -> String {
        format!("{:0width$}", index as u64 * SEQUENCE_STEP, width = SEQUENCE_WIDTH)
    }

    pub fn transaction_row(index: usize, transaction: &Transaction) -> String {
        format!(
            "\"2\",\"000000\",\"00001\",\"{}\",\"{}\",{},\"{}\",\"{}\",\"{}\"\n",
            Self::sequence_number(index),
            transaction.account.as_deref().unwrap_or_default(),
            transaction.amount.to_export_string(),
            truncate_chars(&transaction.description, MAX_DESCRIPTION_CHARS),
            transaction.reference.as_deref().unwrap_or_default(),
            compact_date(transaction.date),
        )
    }

    pub fn render(&self) -> Rendered {
        let mut out = String::new();
        out.push_str(BATCH_HEADER);
        out.push_str(SEQUENCED_TRANSACTION_HEADER);
        out.push_str(&self.header.summary_row());
        for (i, transaction) in self.transactions.iter().enumerate() {
            out.push_str(&Self::transaction_row(i + 1, transaction));
        }
        Rendered::csv(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::PolicyType;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 9, 15).unwrap()
    }

    fn header() -> JournalHeader {
        JournalHeader::new(9, 2020, "journal description")
    }

    #[test]
    fn test_summary_row() {
        assert_eq!(
            header().summary_row(),
            "\"1\",\"000000\",\"00001\",\"\",\"GL\",\"JE\",\"2020\",\"09\",0,\"journal description\",\"00\",0,0,0,2\n"
        );
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abc", 2), "ab");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("ééé", 2), "éé");
    }

    #[test]
    fn test_account_fallbacks() {
        let household = Transaction::new(1, "x", date())
            .policy_type(PolicyType::Household)
            .household("mno5")
            .entity("ent1");
        assert_eq!(GeneralLedgerBatch::account_for(&household), "mno5");

        let other = household.clone().policy_type(PolicyType::Other);
        assert_eq!(GeneralLedgerBatch::account_for(&other), "ent1");

        let explicit = other.with_account("4000");
        assert_eq!(GeneralLedgerBatch::account_for(&explicit), "4000");
    }

    #[test]
    fn test_reference_fallbacks() {
        let household = Transaction::new(1, "x", date()).policy_type(PolicyType::Household);
        assert_eq!(GeneralLedgerBatch::reference_for(&household), "MC");
        assert_eq!(
            GeneralLedgerBatch::reference_for(&household.clone().insured("stu7")),
            "MC / stu7"
        );

        let other = Transaction::new(1, "x", date()).account_number("abc1", "def2");
        assert_eq!(GeneralLedgerBatch::reference_for(&other), "abc1def2");
        assert_eq!(
            GeneralLedgerBatch::reference_for(&other.clone().policy_name("ghi3")),
            "abc1def2 / ghi3"
        );
    }

    #[test]
    fn test_general_ledger_row() {
        let txn = Transaction::new(150, "Premium", date())
            .entity("ent1")
            .account_number("abc1", "def2");
        assert_eq!(
            GeneralLedgerBatch::transaction_row(&txn),
            "\"2\",\"000000\",\"00001\",\"ent1\",-1.50,\"Premium\",\"abc1def2\",\"20200915\"\n"
        );
    }

    #[test]
    fn test_sequence_number() {
        assert_eq!(SequencedLedgerBatch::sequence_number(1), "0000000020");
        assert_eq!(SequencedLedgerBatch::sequence_number(3), "0000000060");
        assert_eq!(
            SequencedLedgerBatch::sequence_number(MAX_SEQUENCED_ROWS),
            "9999999980"
        );
    }

    #[test]
    fn test_sequenced_row_uses_raw_fields() {
        let txn = Transaction::new(-250, "Claim", date())
            .policy_type(PolicyType::Household)
            .household("mno5")
            .insured("stu7");
        assert_eq!(
            SequencedLedgerBatch::transaction_row(2, &txn),
            "\"2\",\"000000\",\"00001\",\"0000000040\",\"\",2.50,\"Claim\",\"\",\"20200915\"\n"
        );
    }

    #[test]
    fn test_full_sequenced_batch_rejects_append_unchanged() {
        let mut batch = SequencedLedgerBatch::with_max_rows(header(), 2);
        batch.append(Transaction::new(100, "first", date())).unwrap();
        batch.append(Transaction::new(200, "second", date())).unwrap();
        let before = batch.render();

        let result = batch.append(Transaction::new(300, "third", date()));

        assert!(matches!(result, Err(ExportError::SequenceExhausted { max_rows: 2 })));
        assert_eq!(batch.transactions().len(), 2);
        assert_eq!(batch.render(), before);
    }

    #[test]
    fn test_full_sequenced_batch_still_drops_zero_amounts() {
        let mut batch = SequencedLedgerBatch::with_max_rows(header(), 1);
        batch.append(Transaction::new(100, "first", date())).unwrap();
        assert!(batch.append(Transaction::new(0, "zero", date())).is_ok());
        assert_eq!(batch.transactions().len(), 1);
    }

    #[test]
    fn test_render_skips_zero_amounts() {
        let mut batch = GeneralLedgerBatch::new(header());
        batch.append(Transaction::new(0, "zero", date()));
        let rendered = batch.render();
        assert_eq!(rendered.as_str().unwrap().lines().count(), 3);
    }
}

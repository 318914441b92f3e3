//! Pre-built Test Fixtures
//!
//! Provides ready-to-use transactions and dates. Identifying strings follow
//! a short letter-digit pattern so derived references are easy to read in
//! assertion failures.

use chrono::NaiveDate;
use domain_export::{ExportConfig, PolicyType, Transaction};

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// Standard run date (Sep 30, 2020)
    pub fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 9, 30).unwrap()
    }

    /// Standard transaction date (Sep 15, 2020)
    pub fn transaction_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 9, 15).unwrap()
    }
}

/// Fixture for export configuration
pub struct ConfigFixtures;

impl ConfigFixtures {
    /// Calendar-year configuration with the default display pattern
    pub fn standard() -> ExportConfig {
        ExportConfig::default()
    }

    /// Fiscal year starting in July
    pub fn july_fiscal_year() -> ExportConfig {
        ExportConfig::new("CoverApp", 7, "%m/%d/%Y")
    }
}

/// Fixture for transactions
pub struct TransactionFixtures;

impl TransactionFixtures {
    /// Household premium of 1.50 with household id and insured name
    pub fn household_premium() -> Transaction {
        Transaction::new(150, "Household premium", DateFixtures::transaction_date())
            .policy_type(PolicyType::Household)
            .household("mno5")
            .insured("stu7")
    }

    /// Commercial claim refund of -25.00 with account key and policy name
    pub fn commercial_claim() -> Transaction {
        Transaction::new(-2500, "Commercial claim", DateFixtures::transaction_date())
            .entity("jkl4")
            .account_number("abc1", "def2")
            .policy_name("ghi3")
    }

    /// Zero-amount adjustment that every format drops
    pub fn zero_adjustment() -> Transaction {
        Transaction::new(0, "Zero adjustment", DateFixtures::transaction_date())
            .entity("jkl4")
    }

    /// A mixed set in append order: household, zero, commercial
    pub fn mixed_set() -> Vec<Transaction> {
        vec![
            Self::household_premium(),
            Self::zero_adjustment(),
            Self::commercial_claim(),
        ]
    }
}

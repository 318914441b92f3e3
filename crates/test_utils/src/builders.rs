//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use domain_export::{PolicyType, Transaction};

use crate::fixtures::DateFixtures;

/// Builder for constructing test transactions
pub struct TestTransactionBuilder {
    transaction: Transaction,
}

impl Default for TestTransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTransactionBuilder {
    /// Creates a new builder with a 1.00 non-household transaction
    pub fn new() -> Self {
        Self {
            transaction: Transaction::new(100, "Test transaction", DateFixtures::transaction_date())
                .entity("ent1")
                .account_number("acct1", "cc1"),
        }
    }

    /// Sets the amount in minor units
    pub fn amount(mut self, minor_units: i64) -> Self {
        self.transaction.amount = minor_units.into();
        self
    }

    /// Sets the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.transaction.description = description.into();
        self
    }

    /// Sets the transaction date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.transaction.date = date;
        self
    }

    /// Makes this a household transaction
    pub fn household(mut self, household_id: impl Into<String>) -> Self {
        self.transaction.policy_type = PolicyType::Household;
        self.transaction.household_id = household_id.into();
        self
    }

    /// Sets the explicit account
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.transaction.account = Some(account.into());
        self
    }

    /// Sets the explicit reference
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.transaction.reference = Some(reference.into());
        self
    }

    /// Sets the insured name
    pub fn insured(mut self, name: impl Into<String>) -> Self {
        self.transaction.name = name.into();
        self
    }

    /// Sets the policy name
    pub fn policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.transaction.policy_name = policy_name.into();
        self
    }

    /// Builds the transaction
    pub fn build(self) -> Transaction {
        self.transaction
    }
}

/// Serializes transactions the way the persistence layer hands them over
pub fn transactions_json(transactions: &[Transaction]) -> String {
    serde_json::to_string_pretty(transactions).unwrap()
}

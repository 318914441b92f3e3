//! Transaction records pending export
//!
//! A `Transaction` is one finalized ledger line. Formatters never mutate it;
//! they derive account and reference fields from its identifying strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::Amount;

/// Kind of policy a transaction belongs to
///
/// Household policies derive references from the household and insured name;
/// every other policy derives them from its account number and cost center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    Household,
    #[default]
    Other,
}

/// One ledger entry to be written to a batch file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// Explicit account code, overriding any derived account
    pub account: Option<String>,
    /// Signed amount in minor units, from the policy's perspective
    pub amount: Amount,
    /// Free-text line description
    pub description: String,
    /// Explicit reference, overriding any derived reference
    pub reference: Option<String>,
    /// Transaction date
    pub date: NaiveDate,
    pub policy_type: PolicyType,
    pub household_id: String,
    pub entity_code: String,
    pub account_number: String,
    pub cost_center: String,
    pub policy_name: String,
    /// Insured name
    pub name: String,
    /// Alternate income account code (not rendered by any current format)
    pub income_account: Option<String>,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            account: None,
            amount: Amount::zero(),
            description: String::new(),
            reference: None,
            date: NaiveDate::default(),
            policy_type: PolicyType::default(),
            household_id: String::new(),
            entity_code: String::new(),
            account_number: String::new(),
            cost_center: String::new(),
            policy_name: String::new(),
            name: String::new(),
            income_account: None,
        }
    }
}

impl Transaction {
    /// Creates a new transaction
    ///
    /// # Arguments
    ///
    /// * `minor_units` - Amount in minor units
    /// * `description` - Line description
    /// * `date` - Transaction date
    pub fn new(minor_units: i64, description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount: Amount::from_minor(minor_units),
            description: description.into(),
            date,
            ..Self::default()
        }
    }

    /// Sets the policy type
    pub fn policy_type(mut self, policy_type: PolicyType) -> Self {
        self.policy_type = policy_type;
        self
    }

    /// Sets an explicit account override
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Sets an explicit reference override
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Sets the household identifier
    pub fn household(mut self, household_id: impl Into<String>) -> Self {
        self.household_id = household_id.into();
        self
    }

    /// Sets the entity code
    pub fn entity(mut self, entity_code: impl Into<String>) -> Self {
        self.entity_code = entity_code.into();
        self
    }

    /// Sets the account number and cost center
    pub fn account_number(
        mut self,
        account_number: impl Into<String>,
        cost_center: impl Into<String>,
    ) -> Self {
        self.account_number = account_number.into();
        self.cost_center = cost_center.into();
        self
    }

    /// Sets the policy name
    pub fn policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = policy_name.into();
        self
    }

    /// Sets the insured name
    pub fn insured(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the alternate income account
    pub fn with_income_account(mut self, account: impl Into<String>) -> Self {
        self.income_account = Some(account.into());
        self
    }

    /// Returns true if this transaction would be written to a batch file
    pub fn is_exportable(&self) -> bool {
        !self.amount.is_zero()
    }

    pub fn is_household(&self) -> bool {
        self.policy_type == PolicyType::Household
    }

    /// Account number immediately followed by cost center
    pub(crate) fn account_key(&self) -> String {
        format!("{}{}", self.account_number, self.cost_center)
    }
}

/// Appends `" / <suffix>"` when the suffix is non-empty
pub(crate) fn with_suffix(base: String, suffix: &str) -> String {
    if suffix.is_empty() {
        base
    } else {
        format!("{} / {}", base, suffix)
    }
}

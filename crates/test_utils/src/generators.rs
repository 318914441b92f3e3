//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random transactions
//! that respect the shape the persistence layer produces.

use chrono::NaiveDate;
use domain_export::{Destination, PolicyType, Transaction};
use proptest::prelude::*;

/// Strategy for amounts in minor units, including zero
pub fn amount_minor_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        1 => Just(0i64),
        4 => -1_000_000_000i64..1_000_000_000i64,
    ]
}

/// Strategy for short identifying strings (may be empty)
pub fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{0,6}"
}

/// Strategy for descriptions up to twice the ledger width
pub fn description_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{0,120}"
}

pub fn policy_type_strategy() -> impl Strategy<Value = PolicyType> {
    prop_oneof![Just(PolicyType::Household), Just(PolicyType::Other)]
}

pub fn destination_strategy() -> impl Strategy<Value = Destination> {
    prop_oneof![
        Just(Destination::GeneralLedger),
        Just(Destination::SequencedLedger),
        Just(Destination::PolicyholderStatement),
    ]
}

/// Strategy for dates within 2000-2099
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for complete transactions without explicit overrides
pub fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        amount_minor_strategy(),
        description_strategy(),
        date_strategy(),
        policy_type_strategy(),
        identifier_strategy(),
        identifier_strategy(),
        (identifier_strategy(), identifier_strategy()),
        identifier_strategy(),
        identifier_strategy(),
    )
        .prop_map(
            |(amount, description, date, policy_type, household, entity, (number, center), policy_name, name)| {
                Transaction::new(amount, description, date)
                    .policy_type(policy_type)
                    .household(household)
                    .entity(entity)
                    .account_number(number, center)
                    .policy_name(policy_name)
                    .insured(name)
            },
        )
}

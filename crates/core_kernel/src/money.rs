//! Minor-unit amounts with exact decimal rendering
//!
//! Ledger amounts arrive as signed integers in minor currency units (cents).
//! Rendering goes through rust_decimal so the two-decimal text is exact and
//! negation never overflows the integer range.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// Number of decimal places in every exported amount
pub const EXPORT_DECIMAL_PLACES: u32 = 2;

/// A signed amount in minor currency units
///
/// The amount is stored from the policy's perspective. Batch files expect the
/// general ledger's perspective, which is the negation (see [`Amount::to_export_string`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Creates an amount from minor units (e.g., cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the raw minor units
    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero
    ///
    /// Zero amounts are never written to a batch file.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the amount in major units with two decimal places
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), EXPORT_DECIMAL_PLACES)
    }

    /// Returns the sign-reversed amount in major units
    pub fn negated_decimal(&self) -> Decimal {
        -self.to_decimal()
    }

    /// Renders the amount as it appears in a batch row
    ///
    /// The stored sign is reversed and the result has exactly two decimal
    /// places, no thousands separators, and a leading `-` only when negative.
    ///
    /// ```
    /// use core_kernel::Amount;
    ///
    /// assert_eq!(Amount::from_minor(150).to_export_string(), "-1.50");
    /// assert_eq!(Amount::from_minor(-150).to_export_string(), "1.50");
    /// ```
    pub fn to_export_string(&self) -> String {
        format_decimal(self.negated_decimal())
    }
}

/// Formats a decimal with exactly two places and no grouping
pub fn format_decimal(value: Decimal) -> String {
    // Decimal keeps a sign bit on zero; never print "-0.00"
    if value.is_zero() {
        return "0.00".to_string();
    }
    let mut value = value.round_dp(EXPORT_DECIMAL_PLACES);
    value.rescale(EXPORT_DECIMAL_PLACES);
    value.to_string()
}

impl From<i64> for Amount {
    fn from(minor_units: i64) -> Self {
        Self(minor_units)
    }
}

impl Neg for Amount {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.negated_decimal()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_decimal(self.to_decimal()))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn export_string_always_has_two_decimals(minor in any::<i64>()) {
            let rendered = Amount::from_minor(minor).to_export_string();
            let (_, fraction) = rendered.split_once('.').unwrap();
            prop_assert_eq!(fraction.len(), 2);
            prop_assert!(!rendered.contains(','));
        }

        #[test]
        fn export_string_sign_is_reversed(minor in 1i64..i64::MAX) {
            prop_assert!(Amount::from_minor(minor).to_export_string().starts_with('-'));
            prop_assert!(!Amount::from_minor(-minor).to_export_string().starts_with('-'));
        }
    }
}

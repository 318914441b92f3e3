//! Unit tests for minor-unit amounts
//!
//! Tests cover construction, predicates, decimal conversion, and the
//! sign-reversed export rendering shared by every batch format.

use core_kernel::Amount;
use core_kernel::money::format_decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_from_minor_keeps_units() {
        let amount = Amount::from_minor(10050);
        assert_eq!(amount.minor_units(), 10050);
    }

    #[test]
    fn test_from_i64() {
        let amount: Amount = (-42).into();
        assert_eq!(amount, Amount::from_minor(-42));
    }

    #[test]
    fn test_zero_and_default_agree() {
        assert_eq!(Amount::zero(), Amount::default());
        assert!(Amount::zero().is_zero());
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_zero_false_for_one_cent() {
        assert!(!Amount::from_minor(1).is_zero());
        assert!(!Amount::from_minor(-1).is_zero());
    }

    #[test]
    fn test_is_negative() {
        assert!(Amount::from_minor(-1).is_negative());
        assert!(!Amount::from_minor(0).is_negative());
        assert!(!Amount::from_minor(1).is_negative());
    }
}

mod rendering {
    use super::*;

    #[test]
    fn test_to_decimal_has_two_places() {
        assert_eq!(Amount::from_minor(150).to_decimal(), dec!(1.50));
        assert_eq!(Amount::from_minor(-7).to_decimal(), dec!(-0.07));
    }

    #[test]
    fn test_negation_operator() {
        assert_eq!(-Amount::from_minor(150), dec!(-1.50));
    }

    #[test]
    fn test_export_string_examples() {
        assert_eq!(Amount::from_minor(-150).to_export_string(), "1.50");
        assert_eq!(Amount::from_minor(150).to_export_string(), "-1.50");
        assert_eq!(Amount::from_minor(100).to_export_string(), "-1.00");
        assert_eq!(Amount::from_minor(-123456789).to_export_string(), "1234567.89");
    }

    #[test]
    fn test_export_string_of_zero_is_unsigned() {
        assert_eq!(Amount::zero().to_export_string(), "0.00");
    }

    #[test]
    fn test_format_decimal_pads_and_rounds() {
        assert_eq!(format_decimal(dec!(3)), "3.00");
        assert_eq!(format_decimal(dec!(3.1)), "3.10");
        assert_eq!(format_decimal(dec!(-0.00)), "0.00");
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&Amount::from_minor(-150)).unwrap();
        assert_eq!(json, "-150");

        let back: Amount = serde_json::from_str("2500").unwrap();
        assert_eq!(back, Amount::from_minor(2500));
    }
}

//! Comprehensive unit tests for the Money module
//!
//! Tests cover construction, the half-up scale invariant, arithmetic,
//! comparison, and rendering edge cases.

use core_kernel::{Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_new_rounds_to_two_decimal_places() {
        let m = Money::new(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.12));
    }

    #[test]
    fn test_rounding_table_half_up() {
        let cases = [
            (dec!(0.005), dec!(0.01)),
            (dec!(0.014), dec!(0.01)),
            (dec!(0.015), dec!(0.02)),
            (dec!(1.995), dec!(2.00)),
            (dec!(-0.005), dec!(-0.01)),
            (dec!(-1.995), dec!(-2.00)),
        ];
        for (input, expected) in cases {
            assert_eq!(Money::new(input).amount(), expected, "input {input}");
        }
    }

    #[test]
    fn test_from_minor_converts_cents() {
        assert_eq!(Money::from_minor(10050).amount(), dec!(100.50));
        assert_eq!(Money::from_minor(-1).amount(), dec!(-0.01));
        assert_eq!(Money::from_minor(0), Money::zero());
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Money::default(), Money::zero());
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_zero_is_neither_positive_nor_negative() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_tiny_negative_input_rounds_to_plain_zero() {
        let m = Money::new(dec!(-0.001));
        assert!(m.is_zero());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_abs() {
        assert_eq!(Money::new(dec!(-12.34)).abs(), Money::new(dec!(12.34)));
        assert_eq!(Money::new(dec!(12.34)).abs(), Money::new(dec!(12.34)));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_and_sub() {
        let a = Money::new(dec!(10.10));
        let b = Money::new(dec!(0.90));

        assert_eq!(a.checked_add(&b).unwrap(), Money::new(dec!(11.00)));
        assert_eq!(a.checked_sub(&b).unwrap(), Money::new(dec!(9.20)));
    }

    #[test]
    fn test_checked_add_reports_overflow() {
        let huge = Money::new(Decimal::MAX);
        assert_eq!(huge.checked_add(&huge), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_operator_chain_keeps_scale() {
        let result = Money::new(dec!(1.11)) + Money::new(dec!(2.22)) - Money::new(dec!(0.33));
        assert_eq!(result.amount(), dec!(3.00));
        assert!(result.amount().scale() <= 2);
    }

    #[test]
    fn test_negation_is_involutive() {
        let m = Money::new(dec!(7.77));
        assert_eq!(-(-m), m);
    }
}

mod comparison_and_display {
    use super::*;

    #[test]
    fn test_equal_amounts_with_different_input_scales() {
        assert_eq!(Money::new(dec!(5)), Money::new(dec!(5.00)));
        assert_eq!(Money::new(dec!(5.1)), Money::new(dec!(5.10)));
    }

    #[test]
    fn test_display_always_shows_two_fraction_digits() {
        assert_eq!(Money::new(dec!(0)).to_string(), "0.00");
        assert_eq!(Money::new(dec!(7)).to_string(), "7.00");
        assert_eq!(Money::new(dec!(7.5)).to_string(), "7.50");
        assert_eq!(Money::new(dec!(-7.5)).to_string(), "-7.50");
    }
}

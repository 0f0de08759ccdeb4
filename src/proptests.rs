//! Property-based tests for the arithmetic engine.
use std::str::FromStr;

use num_traits::Zero;
use proptest::prelude::*;

use crate::{BigInt, Ratio};
use crate::integer::mul::mul_forced;

/// Decimal digit strings of up to a few thousand digits, without redundant leading zeros.
fn digit_string() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,2500}"
}

/// Arbitrary signed values spanning many limbs.
fn big_int() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), digit_string()).prop_map(|(negative, digits)| {
        let value = BigInt::from_str(&digits).unwrap();
        if negative { -value } else { value }
    })
}

/// Smaller values for the quadratic-cost properties.
fn small_big_int() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), "[1-9][0-9]{0,200}").prop_map(|(negative, digits)| {
        let value = BigInt::from_str(&digits).unwrap();
        if negative { -value } else { value }
    })
}

/// Mid-sized dividends; long division is quadratic, so full-size operands would dominate the run.
fn medium_big_int() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), "[1-9][0-9]{0,800}").prop_map(|(negative, digits)| {
        let value = BigInt::from_str(&digits).unwrap();
        if negative { -value } else { value }
    })
}

fn non_zero_i64() -> impl Strategy<Value = i64> {
    prop_oneof![(i64::MIN..=-1), (1..=i64::MAX)]
}

proptest! {
    #[test]
    fn string_round_trip(digits in digit_string()) {
        let value = BigInt::from_str(&digits).unwrap();
        prop_assert_eq!(value.to_string(), digits);
    }

    #[test]
    fn additive_identity_and_inverse(a in big_int()) {
        prop_assert_eq!(a.clone() + BigInt::zero(), a.clone());
        prop_assert_eq!(a.clone() + -a, BigInt::zero());
    }

    #[test]
    fn add_commutative(a in big_int(), b in big_int()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn sub_is_add_of_negation(a in big_int(), b in big_int()) {
        prop_assert_eq!(&a - &b, &a + &-b.clone());
    }

    #[test]
    fn multiplication_paths_agree(a in big_int(), b in big_int()) {
        let schoolbook = mul_forced(&a, &b, false);
        let transform = mul_forced(&a, &b, true);
        prop_assert_eq!(schoolbook, transform);
    }

    #[test]
    fn mul_commutative(a in small_big_int(), b in small_big_int()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn mul_distributes_over_add(a in small_big_int(), b in small_big_int(), c in small_big_int()) {
        prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn division_identity(a in medium_big_int(), b in small_big_int()) {
        let (quotient, remainder) = a.div_rem(&b);
        prop_assert_eq!(&quotient * &b + &remainder, a.clone());
        prop_assert!(remainder.abs() < b.abs());
        // The remainder follows the dividend's sign.
        prop_assert!(remainder.is_zero() || (remainder.signum() == a.signum()));
    }

    #[test]
    fn ordering_matches_subtraction(a in big_int(), b in big_int()) {
        let difference = &a - &b;
        prop_assert_eq!(a.cmp(&b), difference.cmp(&BigInt::zero()));
    }

    #[test]
    fn machine_arithmetic_agrees(a in -1_000_000_i64..1_000_000, b in -1_000_000_i64..1_000_000) {
        prop_assert_eq!(BigInt::from(a) + BigInt::from(b), BigInt::from(a + b));
        prop_assert_eq!(BigInt::from(a) - BigInt::from(b), BigInt::from(a - b));
        prop_assert_eq!(BigInt::from(a) * BigInt::from(b), BigInt::from(a * b));
        if b != 0 {
            prop_assert_eq!(BigInt::from(a) / BigInt::from(b), BigInt::from(a / b));
            prop_assert_eq!(BigInt::from(a) % BigInt::from(b), BigInt::from(a % b));
        }
    }

    #[test]
    fn rational_field_properties(
        a in non_zero_i64(), b in non_zero_i64(),
        c in non_zero_i64(), d in non_zero_i64(),
    ) {
        let x = Ratio::new(a, b);
        let y = Ratio::new(c, d);
        prop_assert_eq!(&x + &y, &y + &x);
        prop_assert_eq!(&x * &y, &y * &x);
        prop_assert_eq!(&x - &x, Ratio::zero());
        if !y.is_zero() {
            prop_assert_eq!((&x / &y) * &y, x);
        }
    }

    #[test]
    fn rational_normalization_invariants(a in any::<i64>(), b in non_zero_i64()) {
        let value = Ratio::new(a, b);
        prop_assert!(!value.denom().is_negative());
        prop_assert!(!value.denom().is_zero());
        // In lowest terms: rebuilding from the reduced pair changes nothing.
        let rebuilt = Ratio::new(value.numer().clone(), value.denom().clone());
        prop_assert_eq!(value.numer(), rebuilt.numer());
        prop_assert_eq!(value.denom(), rebuilt.denom());
    }

    #[test]
    fn rational_display_round_trip(a in any::<i64>(), b in non_zero_i64()) {
        let value = Ratio::new(a, b);
        let parsed = Ratio::from_str(&value.to_string()).unwrap();
        prop_assert_eq!(value, parsed);
    }

    #[test]
    fn decimal_rendering_truncates(a in any::<i32>(), b in 1_i32..1000, precision in 0_usize..12) {
        let value = Ratio::new(a, b);
        let rendered = value.to_decimal(precision);
        if precision > 0 {
            let fraction_length = rendered.split('.').nth(1).map(str::len);
            prop_assert_eq!(fraction_length, Some(precision));
        } else {
            prop_assert!(!rendered.contains('.'));
        }
    }
}

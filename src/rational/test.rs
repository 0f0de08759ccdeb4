use std::str::FromStr;

use num_traits::{One, Zero};

use crate::{BI, RB};
use crate::integer::BigInt;
use crate::rational::Ratio;

#[test]
fn construction_reduces() {
    assert_eq!(RB!(4, 8).to_string(), "1/2");
    assert_eq!(RB!(6, 3).to_string(), "2");
    assert_eq!(RB!(-4, 8).to_string(), "-1/2");
    assert_eq!(RB!(4, -8).to_string(), "-1/2");
    assert_eq!(RB!(-4, -8).to_string(), "1/2");
    assert_eq!(RB!(0, 7).to_string(), "0");
    assert_eq!(RB!(0, -7), Ratio::zero());
}

#[test]
fn construction_from_integers() {
    assert_eq!(Ratio::from(BI!(3)), RB!(3));
    assert_eq!(Ratio::from(-5_i64), RB!(-5, 1));
    assert_eq!(Ratio::from(7_u32).to_string(), "7");
    assert_eq!(Ratio::default(), Ratio::zero());
    assert_eq!(Ratio::new(BI!(10), BI!(4)).to_string(), "5/2");
}

#[test]
fn accessors_are_normalized() {
    let value = RB!(-4, 8);
    assert_eq!(value.numer(), &BI!(-1));
    assert_eq!(value.denom(), &BI!(2));

    let value = RB!(3, -9);
    assert_eq!(value.numer(), &BI!(-1));
    assert_eq!(value.denom(), &BI!(3));
}

#[test]
#[should_panic(expected = "denominator is zero")]
fn zero_denominator_panics() {
    let _result = RB!(3, 0);
}

#[test]
#[should_panic(expected = "denominator is zero")]
fn zero_by_zero_panics() {
    let _result = RB!(0, 0);
}

#[test]
fn eq() {
    assert_eq!(RB!(3, 2), RB!(6, 4));
    assert_eq!(RB!(0, 2), RB!(0, 5));
    assert_eq!(RB!(-1, 2), RB!(1, -2));
    assert_ne!(RB!(1, 2), RB!(1, 3));
    assert_ne!(RB!(1, 2), RB!(-1, 2));
}

#[test]
fn ord() {
    assert!(RB!(1, 3) < RB!(1, 2));
    assert!(RB!(-1, 2) < RB!(-1, 3));
    assert!(RB!(-1, 2) < RB!(1, 3));
    assert!(RB!(2, 3) <= RB!(4, 6));
    assert!(RB!(5) > RB!(9, 2));

    let mut values = vec![RB!(1, 2), RB!(-3, 2), Ratio::zero(), RB!(5, 3)];
    values.sort();
    assert_eq!(values, vec![RB!(-3, 2), Ratio::zero(), RB!(1, 2), RB!(5, 3)]);
}

#[test]
fn add() {
    assert_eq!(RB!(3, 2) + RB!(6, 4), RB!(3));
    assert_eq!(RB!(1, 2) + RB!(1, 3), RB!(5, 6));
    assert_eq!(RB!(1, 2) + RB!(-1, 2), Ratio::zero());

    let mut value = Ratio::zero();
    for _ in 0..1000 {
        value += Ratio::one();
    }
    assert_eq!(value, RB!(1000));

    let mut value = RB!(1, 6);
    value += &RB!(1, 3);
    assert_eq!(value, RB!(1, 2));
    assert_eq!(&RB!(1, 4) + &RB!(1, 4), RB!(1, 2));
}

#[test]
fn sub() {
    assert_eq!(RB!(3, 2) - RB!(6, 4), Ratio::zero());
    assert_eq!(RB!(1, 2) - RB!(1, 3), RB!(1, 6));
    assert_eq!(RB!(1, 3) - RB!(1, 2), RB!(-1, 6));

    let mut value = RB!(1, 2);
    value -= &RB!(1, 3);
    assert_eq!(value, RB!(1, 6));
}

#[test]
fn mul() {
    assert_eq!(RB!(3, 2) * RB!(6, 4), RB!(9, 4));
    assert_eq!(RB!(-1, 2) * RB!(2, 3), RB!(-1, 3));
    assert_eq!(RB!(-1, 2) * RB!(-2, 3), RB!(1, 3));
    assert_eq!(RB!(1, 2) * Ratio::zero(), Ratio::zero());

    let mut value = RB!(2, 3);
    value *= RB!(3, 2);
    assert_eq!(value, Ratio::one());
}

#[test]
fn div() {
    assert_eq!(RB!(3, 2) / RB!(6, 4), Ratio::one());
    assert_eq!(RB!(1, 2) / RB!(1, 4), RB!(2));
    assert_eq!(RB!(-1, 2) / RB!(1, 4), RB!(-2));
    assert_eq!(Ratio::zero() / RB!(2, 5), Ratio::zero());

    let mut value = RB!(5, 6);
    value /= &RB!(5, 2);
    assert_eq!(value, RB!(1, 3));
}

#[test]
#[should_panic(expected = "division by zero")]
fn div_by_zero_panics() {
    let _result = RB!(4564, 65468) / RB!(0, 654654);
}

#[test]
fn checked_div() {
    assert_eq!(RB!(1, 2).checked_div(&RB!(1, 4)), Some(RB!(2)));
    assert_eq!(RB!(1, 2).checked_div(&Ratio::zero()), None);
    assert_eq!(RB!(2, 3).checked_recip(), Some(RB!(3, 2)));
    assert_eq!(RB!(-2, 3).checked_recip(), Some(RB!(-3, 2)));
    assert_eq!(Ratio::zero().checked_recip(), None);
}

#[test]
fn neg() {
    assert_eq!(-RB!(1, 2), RB!(-1, 2));
    assert_eq!(-RB!(-1, 2), RB!(1, 2));
    assert_eq!(-Ratio::zero(), Ratio::zero());
    assert_eq!(-&RB!(3, 4), RB!(-3, 4));
}

#[test]
fn normalization_is_idempotent() {
    // Equal inputs in different written forms collapse to the same representation.
    let value = RB!(-4, 8);
    assert_eq!(value.numer(), RB!(4, -8).numer());
    assert_eq!(value.denom(), RB!(4, -8).denom());
    assert_eq!(value, Ratio::new(value.numer().clone(), value.denom().clone()));
}

#[test]
fn display_and_from_str() {
    for s in ["0", "1/2", "-1/2", "7", "-7", "123456789123456789/2"] {
        assert_eq!(Ratio::from_str(s).unwrap().to_string(), s);
    }
    assert_eq!(Ratio::from_str("4/8").unwrap().to_string(), "1/2");
    assert_eq!(Ratio::from_str("4/-8").unwrap().to_string(), "-1/2");
    assert_eq!(Ratio::from_str("6/3").unwrap().to_string(), "2");

    assert!(Ratio::from_str("1/0").is_err());
    assert!(Ratio::from_str("1/").is_err());
    assert!(Ratio::from_str("/2").is_err());
    assert!(Ratio::from_str("a/2").is_err());
    assert!(Ratio::from_str("1/2/3").is_err());
    assert!(Ratio::from_str("").is_err());
}

#[test]
fn parse_token() {
    let (value, rest) = Ratio::parse_token(" -42 rest").unwrap();
    assert_eq!(value, RB!(-42));
    assert_eq!(rest, " rest");

    // Token parsing stops at the first non-digit, so a slash is left unconsumed.
    let (value, rest) = Ratio::parse_token("3/4").unwrap();
    assert_eq!(value, RB!(3));
    assert_eq!(rest, "/4");

    assert!(Ratio::parse_token("x").is_none());
}

#[test]
fn sum_product() {
    let total: Ratio = (1..=4).map(|denom| Ratio::new(1, denom)).sum();
    assert_eq!(total, RB!(25, 12));
    let product: Ratio = (2..=4).map(|denom| Ratio::new(1, denom)).product();
    assert_eq!(product, RB!(1, 24));
}

#[test]
fn large_operands_stay_exact() {
    // (10^40 / 3) * 3 == 10^40 exactly.
    let large = BigInt::from_str(&format!("1{}", "0".repeat(40))).unwrap();
    let third = Ratio::new(large.clone(), BI!(3));
    let recovered = third * RB!(3);
    assert_eq!(recovered, Ratio::from(large));
}

//! # Division and remainder
//!
//! Long division over magnitudes. The divisor is aligned with the dividend by whole-limb shifts;
//! at each shift level a binary search finds the largest single-limb multiplier whose multiplied-
//! back product still fits under the running remainder. The search makes each quotient limb cost
//! O(log BASE) magnitude comparisons, so the whole division is O(limbs² · log BASE).
//!
//! The quotient takes the product of the operand signs; the remainder keeps the dividend's sign,
//! so `(a / b) * b + (a % b) == a` holds for every nonzero divisor. Dividing by zero panics;
//! the checked variants return `None` instead.
use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

use num_traits::Zero;

use super::{BASE, BigInt};
use super::mul::mul_limb;

impl BigInt {
    /// Compute the quotient and remainder of `self` and `rhs` at once.
    ///
    /// # Arguments
    ///
    /// * `rhs`: The divisor.
    ///
    /// # Return value
    ///
    /// The pair `(quotient, remainder)`. The quotient is truncated towards zero and the
    /// remainder has the sign of the dividend.
    ///
    /// # Panics
    ///
    /// When `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        assert!(!rhs.is_zero(), "division by zero");

        if self.is_zero() {
            return (Self::zero(), Self::zero());
        }

        let mut remainder = self.limbs.clone();
        let mut shift = self.limbs.len().saturating_sub(rhs.limbs.len());
        let mut quotient = vec![0; shift + 1];
        loop {
            // Largest multiplier in [0, BASE) with divisor · multiplier · BASE^shift <= remainder.
            let mut lower_bound = 0;
            let mut upper_bound = BASE;
            while upper_bound - lower_bound > 1 {
                let middle = (lower_bound + upper_bound) >> 1;
                let candidate = mul_limb(&rhs.limbs, middle);
                if cmp_shifted(&remainder, &candidate, shift) != Ordering::Less {
                    lower_bound = middle;
                } else {
                    upper_bound = middle;
                }
            }
            quotient[shift] = lower_bound;
            if lower_bound > 0 {
                sub_shifted(&mut remainder, &mul_limb(&rhs.limbs, lower_bound), shift);
            }
            if shift == 0 {
                break;
            }
            shift -= 1;
        }

        let mut quotient = Self {
            negative: self.negative != rhs.negative,
            limbs: quotient,
        };
        quotient.canonicalize();
        let mut remainder = Self {
            negative: self.negative,
            limbs: remainder,
        };
        remainder.canonicalize();
        (quotient, remainder)
    }

    /// The quotient of `self` and `rhs`, or `None` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self.div_rem(rhs).0)
        }
    }

    /// The remainder of `self` and `rhs`, or `None` when `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self.div_rem(rhs).1)
        }
    }
}

/// Compare a magnitude against another magnitude shifted left by `shift` limbs.
///
/// Both magnitudes must be free of leading zero limbs, so a length difference decides directly.
fn cmp_shifted(lhs: &[i64], rhs: &[i64], shift: usize) -> Ordering {
    let rhs_length = rhs.len() + shift;
    if lhs.len() != rhs_length {
        return lhs.len().cmp(&rhs_length);
    }
    for i in (0..lhs.len()).rev() {
        let rhs_limb = if i >= shift { rhs[i - shift] } else { 0 };
        match lhs[i].cmp(&rhs_limb) {
            Ordering::Equal => {},
            decided => return decided,
        }
    }
    Ordering::Equal
}

/// Subtract a magnitude shifted left by `shift` limbs, in place.
///
/// The left magnitude must be at least as large as the shifted right magnitude; the result is
/// trimmed of leading zero limbs afterwards.
fn sub_shifted(lhs: &mut Vec<i64>, rhs: &[i64], shift: usize) {
    debug_assert!(cmp_shifted(lhs, rhs, shift) != Ordering::Less);

    let mut borrow = 0;
    for i in shift..lhs.len() {
        let subtrahend = rhs.get(i - shift).copied().unwrap_or(0);
        let mut digit = lhs[i] - subtrahend + borrow;
        borrow = 0;
        if digit < 0 {
            digit += BASE;
            borrow = -1;
        }
        lhs[i] = digit;
    }
    debug_assert_eq!(borrow, 0);
    while lhs.len() > 1 && lhs.last() == Some(&0) {
        lhs.pop();
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &Self) {
        *self = self.div_rem(rhs).0;
    }
}

impl DivAssign<BigInt> for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.div_rem(&rhs).0;
    }
}

impl Div<BigInt> for BigInt {
    type Output = BigInt;

    fn div(self, rhs: BigInt) -> Self::Output {
        self.div_rem(&rhs).0
    }
}

impl Div<&BigInt> for BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> Self::Output {
        self.div_rem(rhs).0
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> Self::Output {
        self.div_rem(rhs).0
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &Self) {
        *self = self.div_rem(rhs).1;
    }
}

impl RemAssign<BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.div_rem(&rhs).1;
    }
}

impl Rem<BigInt> for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: BigInt) -> Self::Output {
        self.div_rem(&rhs).1
    }
}

impl Rem<&BigInt> for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        self.div_rem(rhs).1
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        self.div_rem(rhs).1
    }
}

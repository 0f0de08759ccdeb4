//! # Addition and subtraction
//!
//! Both operations run through a single consolidated-carry pass. Instead of dispatching on the
//! sign combination and writing separate magnitude add/subtract routines, every limb position
//! accumulates a signed value and the carry absorbs both overflow above the radix and borrowing
//! below zero. When the final carry ends up negative the whole limb sequence is complemented
//! back into a plain magnitude with a single resulting sign flag.
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

use super::{BASE, BigInt};

impl BigInt {
    /// Add `rhs` to `self`, or subtract it when `subtract` is set.
    ///
    /// Subtraction is addition with the right operand's effective sign negated. Each limb
    /// position accumulates its own (signed) limb, the incoming remainder and the right
    /// operand's (effectively signed) limb; the remainder carries surplus above `BASE` forward
    /// and resolves deficits below zero by borrowing whole radix units.
    fn add_signed(&mut self, rhs: &Self, subtract: bool) {
        let result_length = self.limbs.len().max(rhs.limbs.len());
        self.limbs.resize(result_length + 1, 0);

        let mut remainder = 0;
        for i in 0..result_length {
            let mut digit = self.limbs[i];
            if self.negative {
                digit = -digit;
            }
            digit += remainder;
            remainder = 0;
            if i < rhs.limbs.len() {
                digit += if rhs.negative != subtract {
                    -rhs.limbs[i]
                } else {
                    rhs.limbs[i]
                };
            }

            if digit >= BASE {
                let surplus = digit / BASE;
                digit -= surplus * BASE;
                remainder += surplus;
            } else if digit < 0 {
                let borrowed = (-digit + BASE - 1) / BASE;
                digit += borrowed * BASE;
                remainder -= borrowed;
            }
            self.limbs[i] = digit;
        }
        self.limbs[result_length] = remainder;
        self.negative = remainder < 0;

        // A negative final remainder means the limbs hold the complement of the magnitude.
        if self.negative {
            let mut borrow = 0;
            for limb in &mut self.limbs {
                *limb = -*limb + borrow;
                borrow = 0;
                if *limb < 0 {
                    borrow = -1;
                    *limb += BASE;
                }
            }
        }
        self.canonicalize();
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &Self) {
        self.add_signed(rhs, false);
    }
}

impl AddAssign<BigInt> for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        self.add_signed(&rhs, false);
    }
}

impl AddAssign<i64> for BigInt {
    fn add_assign(&mut self, rhs: i64) {
        self.add_signed(&Self::from(rhs), false);
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &Self) {
        self.add_signed(rhs, true);
    }
}

impl SubAssign<BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        self.add_signed(&rhs, true);
    }
}

impl SubAssign<i64> for BigInt {
    fn sub_assign(&mut self, rhs: i64) {
        self.add_signed(&Self::from(rhs), true);
    }
}

impl Add<BigInt> for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: BigInt) -> Self::Output {
        self += &rhs;
        self
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: &BigInt) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl Add<i64> for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: i64) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sub<BigInt> for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: BigInt) -> Self::Output {
        self -= &rhs;
        self
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: &BigInt) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        let mut result = self.clone();
        result -= rhs;
        result
    }
}

impl Sub<i64> for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: i64) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        let negated = !self.negative;
        self.set_negative(negated);
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

//! # Exact rational numbers
//!
//! A `Ratio` is a numerator and denominator pair of `BigInt`s, always kept in lowest terms with
//! a positive denominator and the sign on the numerator. Normalization is eager: every operator
//! normalizes its result before returning, so the invariants hold at every function boundary and
//! equal values always have identical representations.
//!
//! Every numeric step delegates to the integer engine; nothing here ever calls back up.
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::mem;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::ParseNumberError;
use crate::integer::BigInt;

mod decimal;

#[cfg(test)]
mod test;

/// An exact fraction of two `BigInt`s.
///
/// # Invariants
///
/// * The denominator is strictly positive.
/// * Numerator and denominator share no common divisor larger than one.
/// * The sign lives on the numerator; zero is represented as `0/1`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ratio {
    numer: BigInt,
    denom: BigInt,
}

impl Ratio {
    /// Create a new instance from a numerator and denominator, reducing to lowest terms.
    ///
    /// # Arguments
    ///
    /// * `numer`: The numerator.
    /// * `denom`: The denominator.
    ///
    /// # Panics
    ///
    /// When the denominator is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Self {
        let (numer, denom) = (numer.into(), denom.into());
        assert!(!denom.is_zero(), "denominator is zero");

        let mut value = Self { numer, denom, };
        value.normalize();
        value
    }

    /// The numerator, in lowest terms, carrying the sign.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// The denominator, in lowest terms, always positive.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// The multiplicative inverse, or `None` when this value is zero.
    pub fn checked_recip(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let mut value = Self {
            numer: self.denom.clone(),
            denom: self.numer.clone(),
        };
        value.normalize();
        Some(value)
    }

    /// The quotient of `self` and `rhs`, or `None` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        let mut result = self.clone();
        result /= rhs;
        Some(result)
    }

    /// Parse the next rational token from the front of `input`.
    ///
    /// Same semantics as [`BigInt::parse_token`]; an integer token yields denominator one. The
    /// unconsumed rest of the input is returned alongside the value.
    pub fn parse_token(input: &str) -> Option<(Self, &str)> {
        BigInt::parse_token(input).map(|(value, rest)| (Self::from(value), rest))
    }

    /// Reduce to lowest terms and move the sign onto the numerator.
    ///
    /// Idempotent: normalizing an already normalized value changes nothing.
    fn normalize(&mut self) {
        let sign = self.numer.signum() * self.denom.signum();
        self.numer.set_negative(false);
        self.denom.set_negative(false);
        let divisor = gcd(self.numer.clone(), self.denom.clone());
        self.numer /= &divisor;
        self.denom /= &divisor;
        self.numer.set_negative(sign == -1);
    }
}

/// The greatest common divisor of two non-negative values.
///
/// Iterative Euclidean remainders: `gcd(a, b) = gcd(b mod a, a)` with `gcd(0, b) = b`.
fn gcd(mut a: BigInt, mut b: BigInt) -> BigInt {
    debug_assert!(!a.is_negative() && !b.is_negative());

    while !a.is_zero() {
        b %= &a;
        mem::swap(&mut a, &mut b);
    }
    b
}

impl Default for Ratio {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Ratio {
    fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Ratio {
    fn one() -> Self {
        Self {
            numer: BigInt::one(),
            denom: BigInt::one(),
        }
    }
}

impl From<BigInt> for Ratio {
    fn from(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::one(),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Ratio {
                fn from(value: $t) -> Self {
                    Self::from(BigInt::from(value))
                }
            }
        )*
    };
}
impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl AddAssign<&Ratio> for Ratio {
    fn add_assign(&mut self, rhs: &Self) {
        self.numer *= &rhs.denom;
        self.numer += &rhs.numer * &self.denom;
        self.denom *= &rhs.denom;
        self.normalize();
    }
}

impl AddAssign<Ratio> for Ratio {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl SubAssign<&Ratio> for Ratio {
    fn sub_assign(&mut self, rhs: &Self) {
        self.numer *= &rhs.denom;
        self.numer -= &rhs.numer * &self.denom;
        self.denom *= &rhs.denom;
        self.normalize();
    }
}

impl SubAssign<Ratio> for Ratio {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl MulAssign<&Ratio> for Ratio {
    fn mul_assign(&mut self, rhs: &Self) {
        self.numer *= &rhs.numer;
        self.denom *= &rhs.denom;
        self.normalize();
    }
}

impl MulAssign<Ratio> for Ratio {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

impl DivAssign<&Ratio> for Ratio {
    /// # Panics
    ///
    /// When `rhs` is zero.
    fn div_assign(&mut self, rhs: &Self) {
        assert!(!rhs.is_zero(), "division by zero");

        self.numer *= &rhs.denom;
        self.denom *= &rhs.numer;
        self.normalize();
    }
}

impl DivAssign<Ratio> for Ratio {
    fn div_assign(&mut self, rhs: Self) {
        *self /= &rhs;
    }
}

macro_rules! impl_binop {
    ($op:ident, $method:ident, $assign_op:tt) => {
        impl $op<Ratio> for Ratio {
            type Output = Ratio;

            fn $method(mut self, rhs: Ratio) -> Self::Output {
                self $assign_op &rhs;
                self
            }
        }

        impl $op<&Ratio> for Ratio {
            type Output = Ratio;

            fn $method(mut self, rhs: &Ratio) -> Self::Output {
                self $assign_op rhs;
                self
            }
        }

        impl $op<&Ratio> for &Ratio {
            type Output = Ratio;

            fn $method(self, rhs: &Ratio) -> Self::Output {
                let mut result = self.clone();
                result $assign_op rhs;
                result
            }
        }
    };
}
impl_binop!(Add, add, +=);
impl_binop!(Sub, sub, -=);
impl_binop!(Mul, mul, *=);
impl_binop!(Div, div, /=);

impl Neg for Ratio {
    type Output = Ratio;

    fn neg(mut self) -> Self::Output {
        let negated = !self.numer.is_negative();
        self.numer.set_negative(negated);
        self
    }
}

impl Neg for &Ratio {
    type Output = Ratio;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Sum for Ratio {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl Product for Ratio {
    fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |total, value| total * value)
    }
}

impl Ord for Ratio {
    /// Compare by cross-multiplication.
    ///
    /// `a/b` against `c/d` is `a·d` against `c·b`, which is valid because denominators are
    /// positive by construction.
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ratio {
    /// Render as `[-]numerator` when the denominator is one, `[-]numerator/denominator`
    /// otherwise.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Ratio {
    type Err = ParseNumberError;

    /// Parse either an integer `[+|-]d+` or a fraction `[+|-]d+/[+|-]d+`.
    ///
    /// The result is reduced to lowest terms; a zero denominator is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((numer, denom)) => {
                let numer = BigInt::from_str(numer)?;
                let denom = BigInt::from_str(denom)?;
                if denom.is_zero() {
                    return Err(ParseNumberError::new(s));
                }
                Ok(Self::new(numer, denom))
            },
            None => Ok(Self::from(BigInt::from_str(s)?)),
        }
    }
}

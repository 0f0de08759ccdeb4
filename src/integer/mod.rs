//! # Arbitrary precision signed integers
//!
//! A `BigInt` is a sign flag and a sequence of fixed-radix digit groups, least significant first.
//! Sign and magnitude are kept separate; there is no two's complement anywhere, which keeps
//! subtraction free of modular carry logic.
//!
//! The submodules hold the three nontrivial algorithms: consolidated-carry addition, dual-path
//! multiplication and long division by per-limb binary search.
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::ParseNumberError;

mod add;
mod div;
pub mod mul;


/// The radix of a single limb.
///
/// Chosen such that the product of two limbs, plus carries, fits a 64-bit accumulator during
/// schoolbook multiplication.
pub const BASE: i64 = 100_000;
/// Number of decimal digits per limb; `BASE == 10^BASE_DIGITS`.
pub const BASE_DIGITS: usize = 5;

/// A signed integer of unbounded magnitude.
///
/// # Invariants
///
/// * Every limb is in `[0, BASE)`.
/// * No trailing zero limbs, except the single limb `[0]` representing zero.
/// * Zero is never negative.
///
/// These hold after every operation, so structural equality is value equality.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BigInt {
    /// Whether the value is strictly negative.
    negative: bool,
    /// Digit groups of `BASE_DIGITS` decimal digits each, least significant first.
    limbs: Vec<i64>,
}

impl BigInt {
    /// The sign of this number: `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Whether this number is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The absolute value of this number.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// Overwrite the sign flag without touching the magnitude.
    ///
    /// Narrow contract for the rational layer, which moves signs between numerator and
    /// denominator during normalization. Zero stays non-negative.
    pub(crate) fn set_negative(&mut self, negative: bool) {
        self.negative = negative && !self.is_zero();
    }

    /// Multiply by `BASE^count` by inserting zero limbs at the least significant end.
    pub(crate) fn shift_limbs(&mut self, count: usize) {
        if count == 0 || self.is_zero() {
            return;
        }
        self.limbs.splice(0..0, std::iter::repeat(0).take(count));
    }

    /// Restore the representation invariants after a mutation.
    ///
    /// Strips trailing zero limbs, collapses an empty sequence to `[0]` and clears the sign of
    /// zero.
    fn canonicalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
        if self.is_zero() {
            self.negative = false;
        }
    }

    /// Parse the next integer token from the front of `input`.
    ///
    /// Skips leading whitespace, accepts at most one `+` or `-`, then consumes decimal digits up
    /// to the first non-digit. The remaining input is not an error; parsing simply stops there.
    ///
    /// # Arguments
    ///
    /// * `input`: Text to read from.
    ///
    /// # Return value
    ///
    /// The parsed value and the unconsumed rest of the input, or `None` if no digits were found.
    pub fn parse_token(input: &str) -> Option<(Self, &str)> {
        let mut rest = input.trim_start();
        let negative = match rest.as_bytes().first() {
            Some(&b'-') => {
                rest = &rest[1..];
                true
            },
            Some(&b'+') => {
                rest = &rest[1..];
                false
            },
            _ => false,
        };
        let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digit_count == 0 {
            return None;
        }
        let (digits, tail) = rest.split_at(digit_count);
        let mut value = Self::from_decimal_digits(digits);
        value.set_negative(negative);
        Some((value, tail))
    }

    /// Build a value from a run of decimal digits, least significant `BASE_DIGITS` at a time.
    ///
    /// The input must consist of ASCII digits only.
    fn from_decimal_digits(digits: &str) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));

        let limbs = digits.as_bytes()
            .rchunks(BASE_DIGITS)
            .map(|group| group.iter().fold(0, |limb, &b| limb * 10 + i64::from(b - b'0')))
            .collect();
        let mut value = Self { negative: false, limbs, };
        value.canonicalize();
        value
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self {
            negative: false,
            limbs: vec![0],
        }
    }

    fn is_zero(&self) -> bool {
        self.limbs == [0]
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self {
            negative: false,
            limbs: vec![1],
        }
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let negative = value < 0;
        let mut value = Self {
            negative,
            limbs: decompose(value.unsigned_abs()),
        };
        value.canonicalize();
        value
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        let mut value = Self {
            negative: false,
            limbs: decompose(value),
        };
        value.canonicalize();
        value
    }
}

impl From<usize> for BigInt {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

macro_rules! impl_from_small {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    Self::from(i64::from(value))
                }
            }
        )*
    };
}
impl_from_small!(i8, i16, i32, u8, u16, u32);

/// Split a magnitude into base `BASE` limbs, least significant first.
fn decompose(mut magnitude: u64) -> Vec<i64> {
    let mut limbs = Vec::new();
    while magnitude > 0 {
        limbs.push((magnitude % BASE as u64) as i64);
        magnitude /= BASE as u64;
    }
    limbs
}

impl FromStr for BigInt {
    type Err = ParseNumberError;

    /// Parse a decimal string of the form `[+|-]d+`.
    ///
    /// Redundant leading zeros are accepted and canonicalized away. Anything else, including the
    /// empty digit run, is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(&b'+') => (false, &s[1..]),
            Some(&b'-') => (true, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseNumberError::new(s));
        }
        let mut value = Self::from_decimal_digits(digits);
        value.set_negative(negative);
        Ok(value)
    }
}

impl fmt::Display for BigInt {
    /// Render as `[-]d+` without redundant leading zeros.
    ///
    /// Interior limbs are zero-padded back to their full `BASE_DIGITS` width; the most
    /// significant limb is not.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        let mut limbs = self.limbs.iter().rev();
        if let Some(&leading) = limbs.next() {
            write!(f, "{}", leading)?;
        }
        for limb in limbs {
            write!(f, "{:05}", limb)?;
        }
        Ok(())
    }
}

impl Ord for BigInt {
    /// A total order consistent with numeric value.
    ///
    /// Signs are compared first; zero has no sign. For equal nonzero signs the limb counts decide
    /// (canonical representations have no leading zeros), then the limbs themselves from most
    /// significant down. A longer magnitude means a smaller value when both are negative.
    fn cmp(&self, other: &Self) -> Ordering {
        let (left_sign, right_sign) = (self.signum(), other.signum());
        if left_sign != right_sign {
            return left_sign.cmp(&right_sign);
        }
        if left_sign == 0 {
            return Ordering::Equal;
        }
        let magnitude = self.limbs.len().cmp(&other.limbs.len())
            .then_with(|| {
                self.limbs.iter()
                    .rev()
                    .cmp(other.limbs.iter().rev())
            });
        if left_sign == -1 {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

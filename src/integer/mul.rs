//! # Multiplication
//!
//! Two convolution strategies behind a single operator. Small operands take the classic
//! schoolbook convolution; large ones go through a floating-point discrete Fourier transform,
//! which turns the O(n·m) convolution into O(n log n) pointwise products. The result sign is the
//! product of the operand signs and zero short-circuits before either path runs.
use std::iter::Product;
use std::ops::{Mul, MulAssign};

use num_complex::Complex64;
use num_traits::{One, Zero};

use super::{BASE, BigInt};

/// Limb count below which both operands use the schoolbook path.
///
/// The transform only pays off once operands are large; below this bound the cache-friendly
/// direct convolution wins.
pub const SCHOOLBOOK_CUTOFF: usize = 10_000;

/// Largest combined limb count the transform path accepts.
///
/// The transform works on `f64` coefficients. Pointwise products grow up to
/// `n · (BASE - 1)^2`, and the accumulated rounding error must stay below one half for the
/// final round-to-integer to be exact. With `BASE = 10^5` that holds comfortably up to `2^16`
/// combined limbs (about 3·10^5 decimal digits per operand). Larger products fall back to the
/// schoolbook path instead of risking silently wrong digits.
pub const TRANSFORM_LIMB_CEILING: usize = 1 << 16;

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &Self) {
        let sign = self.signum() * rhs.signum();
        if sign == 0 {
            *self = Self::zero();
            return;
        }
        let result_length = self.limbs.len() + rhs.limbs.len();
        let small = self.limbs.len().max(rhs.limbs.len()) < SCHOOLBOOK_CUTOFF;
        self.limbs = if small || result_length > TRANSFORM_LIMB_CEILING {
            mul_schoolbook(&self.limbs, &rhs.limbs, result_length)
        } else {
            mul_transform(&self.limbs, &rhs.limbs, result_length)
        };
        self.negative = sign == -1;
        self.canonicalize();
    }
}

impl MulAssign<BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

impl Mul<BigInt> for BigInt {
    type Output = BigInt;

    fn mul(mut self, rhs: BigInt) -> Self::Output {
        self *= &rhs;
        self
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    fn mul(mut self, rhs: &BigInt) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        let mut result = self.clone();
        result *= rhs;
        result
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |total, value| total * value)
    }
}

/// Multiply a magnitude by a single limb value.
///
/// Used by division to multiply back binary search candidates.
///
/// # Arguments
///
/// * `limbs`: Magnitude, least significant limb first.
/// * `factor`: Value in `[0, BASE)`.
///
/// # Return value
///
/// The product magnitude, trimmed of leading zero limbs.
pub(crate) fn mul_limb(limbs: &[i64], factor: i64) -> Vec<i64> {
    debug_assert!((0..BASE).contains(&factor));

    let mut result = vec![0; limbs.len() + 1];
    for (i, &limb) in limbs.iter().enumerate() {
        let product = limb * factor + result[i];
        result[i] = product % BASE;
        result[i + 1] = product / BASE;
    }
    while result.len() > 1 && result.last() == Some(&0) {
        result.pop();
    }
    result
}

/// Direct O(n·m) convolution of two magnitudes.
///
/// Carries are propagated after each row of partial products, which keeps every accumulator
/// comfortably within `i64` range.
pub(crate) fn mul_schoolbook(lhs: &[i64], rhs: &[i64], result_length: usize) -> Vec<i64> {
    let mut result = vec![0; result_length];
    for (offset, &digit) in rhs.iter().enumerate() {
        for (i, &own) in lhs.iter().enumerate() {
            let product = digit * own;
            result[offset + i] += product % BASE;
            result[offset + i + 1] += product / BASE;
        }
        for i in 0..result_length - 1 {
            result[i + 1] += result[i] / BASE;
            result[i] %= BASE;
        }
    }
    result
}

/// Convolution through a radix-2 discrete Fourier transform over `f64` coefficients.
///
/// Both magnitudes are padded to the next power of two, transformed, multiplied pointwise and
/// transformed back. The inverse transform is scaled by the padded length, the real parts are
/// rounded half away from zero to recover integer coefficients, and a final carry pass restores
/// radix-`BASE` limbs. All working buffers are allocated once per call.
pub(crate) fn mul_transform(lhs: &[i64], rhs: &[i64], result_length: usize) -> Vec<i64> {
    let padded_length = result_length.next_power_of_two();

    let mut left = to_coefficients(lhs, padded_length);
    let mut right = to_coefficients(rhs, padded_length);

    let angle = 2.0 * std::f64::consts::PI / padded_length as f64;
    let roots = root_table(padded_length / 2, angle);
    transform(&mut left, &roots);
    transform(&mut right, &roots);
    for (left_value, right_value) in left.iter_mut().zip(&right) {
        *left_value *= *right_value;
    }
    let inverse_roots = root_table(padded_length / 2, -angle);
    transform(&mut left, &inverse_roots);

    let scale = 1.0 / padded_length as f64;
    let mut result = vec![0; result_length];
    let mut carry = 0;
    for (i, coefficient) in left.iter().take(result_length).enumerate() {
        carry += (coefficient.re * scale).round() as i64;
        result[i] = carry % BASE;
        carry /= BASE;
    }
    debug_assert_eq!(carry, 0);
    result
}

/// Load a magnitude into a zero-padded complex coefficient vector.
fn to_coefficients(limbs: &[i64], padded_length: usize) -> Vec<Complex64> {
    let mut coefficients = Vec::with_capacity(padded_length);
    coefficients.extend(limbs.iter().map(|&limb| Complex64::new(limb as f64, 0.0)));
    coefficients.resize(padded_length, Complex64::new(0.0, 0.0));
    coefficients
}

/// Precompute the roots of unity `e^(i·angle·k)` for `k` in `[0, count)`.
fn root_table(count: usize, angle: f64) -> Vec<Complex64> {
    (0..count)
        .map(|k| Complex64::from_polar(1.0, angle * k as f64))
        .collect()
}

/// In-place iterative radix-2 discrete Fourier transform.
///
/// Bit-reversal permutation first, then butterfly passes over doubling block sizes. The
/// direction is determined by the sign of the angle the `roots` table was built with; the
/// inverse direction additionally requires scaling by the length, which the caller does.
fn transform(values: &mut [Complex64], roots: &[Complex64]) {
    let length = values.len();
    debug_assert!(length.is_power_of_two());
    debug_assert_eq!(roots.len(), length / 2);

    bit_reverse(values);

    let mut block = 2;
    while block <= length {
        let half = block / 2;
        let stride = length / block;
        for chunk in values.chunks_mut(block) {
            for i in 0..half {
                let even = chunk[i];
                let odd = chunk[i + half] * roots[i * stride];
                chunk[i] = even + odd;
                chunk[i + half] = even - odd;
            }
        }
        block <<= 1;
    }
}

/// Swap every element with the one at its bit-reversed index.
fn bit_reverse(values: &mut [Complex64]) {
    let length = values.len();
    let mut reversed = 0;
    for i in 1..length {
        let mut bit = length >> 1;
        while reversed & bit != 0 {
            reversed ^= bit;
            bit >>= 1;
        }
        reversed |= bit;
        if i < reversed {
            values.swap(i, reversed);
        }
    }
}

/// Multiply through a forced path so tests can cross-check both strategies.
#[cfg(test)]
pub(crate) fn mul_forced(lhs: &BigInt, rhs: &BigInt, use_transform: bool) -> BigInt {
    if lhs.is_zero() || rhs.is_zero() {
        return BigInt::zero();
    }
    let result_length = lhs.limbs.len() + rhs.limbs.len();
    let limbs = if use_transform {
        mul_transform(&lhs.limbs, &rhs.limbs, result_length)
    } else {
        mul_schoolbook(&lhs.limbs, &rhs.limbs, result_length)
    };
    let mut result = BigInt {
        negative: lhs.negative != rhs.negative,
        limbs,
    };
    result.canonicalize();
    result
}

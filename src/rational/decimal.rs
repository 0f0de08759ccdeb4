//! # Exact decimal rendering
//!
//! A fraction in lowest terms rarely has a finite decimal expansion, so rendering takes a caller
//! chosen number of fractional digits and truncates exactly there. The numerator is scaled up by
//! whole limbs, divided once by the denominator and the surplus digits are cut off; no rounding
//! ever happens, matching truncating integer division.
use crate::integer::BASE_DIGITS;

use super::Ratio;

/// Number of fractional digits used for the floating point approximation.
const APPROXIMATION_PRECISION: usize = 6;

impl Ratio {
    /// Render as a decimal string with exactly `precision` fractional digits.
    ///
    /// The expansion is truncated, not rounded. With `precision` zero the result is just the
    /// truncated integer part; otherwise the format is `[-]intpart.fracpart` with the fractional
    /// part zero-padded to the full width.
    ///
    /// # Arguments
    ///
    /// * `precision`: The number of digits to produce after the decimal point.
    ///
    /// # Return value
    ///
    /// The decimal representation as a `String`.
    pub fn to_decimal(&self, precision: usize) -> String {
        let scale_limbs = precision.div_ceil(BASE_DIGITS);
        let excess_digits = scale_limbs * BASE_DIGITS - precision;

        let mut scaled = self.numer.clone();
        scaled.shift_limbs(scale_limbs);
        scaled /= &self.denom;

        let negative = scaled.is_negative();
        let mut digits = scaled.abs().to_string();
        digits.truncate(digits.len().saturating_sub(excess_digits));
        if digits.is_empty() {
            digits.push('0');
        }

        if precision > 0 {
            // Guarantee at least one integer digit left of the point.
            if digits.len() <= precision {
                let padding = "0".repeat(precision - digits.len() + 1);
                digits.insert_str(0, &padding);
            }
            digits.insert(digits.len() - precision, '.');
        }
        if negative {
            digits.insert(0, '-');
        }
        digits
    }

    /// A floating point approximation of this value.
    ///
    /// Routes through [`Self::to_decimal`] at six fractional digits and parses the result, so
    /// the precision loss is bounded by that internal precision. Values outside `f64` range
    /// become infinite.
    pub fn to_f64(&self) -> f64 {
        self.to_decimal(APPROXIMATION_PRECISION).parse().unwrap_or(f64::NAN)
    }
}

//! # Exact arbitrary precision arithmetic
//!
//! Signed integers of unbounded magnitude and exact rational numbers built on top of them.
//! Computations never lose precision: every operation produces the mathematically exact result,
//! however many digits that takes.
//!
//! All types have value semantics. Instances own their digit storage, copies are deep and
//! independent, and no operation shares state between values. The integer type stores its digits
//! in groups of five decimal digits, so all text conversion is in base ten.
#![warn(missing_docs)]

pub mod error;
pub mod integer;
pub mod rational;

mod macros;

#[cfg(test)]
mod proptests;

pub use integer::BigInt;
pub use rational::Ratio;

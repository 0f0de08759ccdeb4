//! # Error reporting for parsing numeric text
//!
//! The only fallible surface of this crate is conversion from text; everything else is pure
//! computation over values that are valid by construction.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `ParseNumberError` is created when a string could not be interpreted as a number.
///
/// The offending input is carried along for the end user.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseNumberError {
    input: String,
}

impl ParseNumberError {
    /// Create a new `ParseNumberError` from the rejected input.
    ///
    /// # Arguments
    ///
    /// * `input`: The text that could not be parsed.
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self { input: input.into(), }
    }
}

impl Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid decimal number: {:?}", self.input)
    }
}

impl Error for ParseNumberError {
}

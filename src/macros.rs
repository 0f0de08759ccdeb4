/// Shorthand for creating a big integer in tests.
#[macro_export]
macro_rules! BI {
    ($value:expr) => {
        $crate::BigInt::from($value as i64)
    };
}

/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::Ratio::from($value as i64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Ratio::new($numer as i64, $denom as i64)
    };
}

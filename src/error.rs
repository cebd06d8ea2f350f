//! Errors raised while sampling, writing or reading a sampling.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A bound of the interval is NaN or infinite.
    #[error("curve_data: {name} = {value} must be finite")]
    NonFiniteBound { name: &'static str, value: f64 },

    /// The lower bound is larger than the upper bound.
    #[error("curve_data: empty interval [{a}, {b}] (need a <= b)")]
    InvalidInterval { a: f64, b: f64 },

    /// `b - a` is not representable as a finite `f64`.
    #[error("curve_data: width of [{a}, {b}] overflows")]
    RangeOverflow { a: f64, b: f64 },

    #[error("curve_data: n must be at least 1")]
    ZeroCount,

    #[error("curve_data: max_attempts must be at least 1")]
    ZeroAttempts,

    /// More than one distinct value requested from `[a, a]`.
    #[error("curve_data: cannot draw {n} distinct values from [{a}, {a}]")]
    DegenerateInterval { a: f64, n: usize },

    /// The attempt cap was reached before `n` distinct values were
    /// accepted.
    #[error("curve_data: only {accepted} of {n} distinct values \
             accepted after {attempts} attempts")]
    AttemptsExhausted { accepted: usize, n: usize, attempts: usize },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A field of line `line` (1-based) is not a real number.
    #[error("curve_data: line {line}: cannot parse {field:?} as a number")]
    Parse { line: u64, field: String },

    /// Line `line` (1-based) does not have exactly two fields.
    #[error("curve_data: line {line}: expected 2 fields, found {found}")]
    FieldCount { line: u64, found: usize },
}

impl Error {
    /// Return `true` if the error comes from an invalid sampling
    /// configuration (as opposed to I/O or parsing).
    pub fn is_config(&self) -> bool {
        matches!(self,
                 Error::NonFiniteBound { .. } | Error::InvalidInterval { .. }
                 | Error::RangeOverflow { .. } | Error::ZeroCount
                 | Error::ZeroAttempts | Error::DegenerateInterval { .. }
                 | Error::AttemptsExhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_names_the_problem() {
        let e = Error::DegenerateInterval { a: 3., n: 2 };
        assert_eq!(e.to_string(),
                   "curve_data: cannot draw 2 distinct values from [3, 3]");
        let e = Error::AttemptsExhausted { accepted: 2, n: 3, attempts: 10 };
        assert!(e.to_string().contains("only 2 of 3"));
        assert!(e.is_config());
    }

    #[test]
    fn io_is_not_config() {
        let e = Error::from(std::io::Error::other("disk full"));
        assert!(!e.is_config());
        assert_eq!(e.to_string(), "disk full");
    }
}

//! Error type for rational construction and parsing.

use thiserror::Error;

/// Errors produced when building a `Rational` from raw input.
///
/// Arithmetic on already-constructed rationals never fails: the solver
/// engines guard every division with a zero test, so this error is only
/// reachable at the parsing/construction boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator was supplied.
    #[error("division by zero")]
    DivisionByZero,

    /// The input string is not an integer, decimal or `p/q` literal.
    #[error("invalid rational literal: `{0}`")]
    Parse(String),

    /// A float input was NaN or infinite.
    #[error("value is not finite")]
    NotFinite,
}

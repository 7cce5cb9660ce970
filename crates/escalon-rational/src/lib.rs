//! # escalon-rational
//!
//! Exact rational arithmetic for the escalon linear-system solver.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//! - Parsing from `"p/q"`, integer and decimal literals
//! - Fraction / fixed-precision-decimal rendering (`NumberFormatter`)
//!
//! All solver engines operate on `Rational` exclusively; parsing and
//! formatting happen at this crate's boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod format;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use format::{NumberFormatter, PrecisionMode};
pub use integer::Integer;
pub use rational::{Rational, DEFAULT_TOLERANCE};

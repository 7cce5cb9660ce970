//! # escalon-linalg
//!
//! Exact-arithmetic linear algebra with human-inspectable step trails.
//!
//! This crate provides:
//! - Dense matrices over exact rationals (`Matrix`, `AugmentedMatrix`)
//! - Gaussian elimination to REF/RREF with one recorded [`Step`] per
//!   elementary row operation
//! - Classification of the reduced system (unique / infinite / inconsistent)
//!   and parametric solutions in terms of free variables
//! - Determinants via triangularization with sign bookkeeping
//! - Matrix inversion by Gauss-Jordan on `[A | I]`
//! - Cramer's rule and linear-independence testing as thin compositions
//!
//! Every operation is a pure function of its inputs: engines work on a
//! private copy of the matrix and hold no state between calls. Algebraic
//! outcomes (inconsistent, singular, no unique solution) are returned as
//! data, never as errors.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod cramer;
pub mod determinant;
pub mod eliminate;
pub mod error;
pub mod independence;
pub mod inverse;
pub mod matrix;
pub mod solve;
pub mod step;

pub use classify::{classify, general_solution, Classification, LinearExpr, SolutionSet};
pub use cramer::{cramer, CramerResult, CramerVariable};
pub use determinant::{determinant, DeterminantResult};
pub use eliminate::{reduce, EliminationOptions, EliminationResult, Mode};
pub use error::LinalgError;
pub use independence::{independent, IndependenceReport};
pub use inverse::{invert, InverseResult};
pub use matrix::{AugmentedMatrix, Matrix};
pub use solve::{solve_system, SolveOptions, SolveReport};
pub use step::Step;

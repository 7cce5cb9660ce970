//! # Escalon
//!
//! Exact linear-system solving over arbitrary-precision rationals, with a
//! human-inspectable trail of elementary row operations.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: Every value is a reduced big-rational; no
//!   floating-point drift anywhere in a result
//! - **Recorded Elimination**: REF/RREF reduction emits one step per row
//!   swap, scale or combination, snapshots included
//! - **Full Classification**: Unique, infinite (with parametric general
//!   solutions) and inconsistent systems are all first-class outcomes
//! - **Companion Engines**: Determinants, Gauss-Jordan inversion,
//!   Cramer's rule and linear-independence testing share the same kernel
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use escalon::prelude::*;
//!
//! let system = AugmentedMatrix::from_rows(rows)?;
//! let report = solve_system(&system, &SolveOptions::default());
//! for line in &report.lines {
//!     println!("{line}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use escalon_linalg as linalg;
pub use escalon_rational as rational;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use escalon_linalg::{
        classify, cramer, determinant, general_solution, independent, invert, reduce,
        solve_system, AugmentedMatrix, Classification, CramerResult, DeterminantResult,
        EliminationOptions, IndependenceReport, InverseResult, Matrix, Mode, SolutionSet,
        SolveOptions, SolveReport, Step,
    };
    pub use escalon_rational::{Integer, NumberFormatter, PrecisionMode, Rational};
}

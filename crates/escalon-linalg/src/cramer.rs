//! Cramer's rule for square systems.
//!
//! Each variable is the ratio of two independent determinants, so this
//! engine is quadratic in determinant evaluations and exists for
//! cross-checking and presentation, not performance. A zero `det(A)` is a
//! reportable outcome, not an error.

use escalon_rational::{NumberFormatter, Rational};
use num_traits::Zero;
use tracing::debug;

use crate::determinant::determinant;
use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::step::Step;

/// One variable solved by Cramer's rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CramerVariable {
    /// 0-based variable index.
    pub index: usize,
    /// `det(A_i)`, with column `index` replaced by the right-hand side.
    pub determinant: Rational,
    /// The trail of the `det(A_i)` computation.
    pub steps: Vec<Step>,
    /// `det(A_i) / det(A)`.
    pub value: Rational,
}

/// Outcome of a Cramer's-rule run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CramerResult {
    /// `det(A) ≠ 0`: exactly one solution.
    Unique {
        /// Determinant of the coefficient matrix.
        det_a: Rational,
        /// The trail of the `det(A)` computation.
        det_steps: Vec<Step>,
        /// Per-variable determinants and values, in variable order.
        variables: Vec<CramerVariable>,
    },
    /// `det(A) = 0`: the rule does not apply.
    NoUniqueSolution {
        /// Determinant of the coefficient matrix (exactly zero).
        det_a: Rational,
        /// The trail of the `det(A)` computation.
        det_steps: Vec<Step>,
    },
}

impl CramerResult {
    /// The solution vector, when one exists.
    #[must_use]
    pub fn solution(&self) -> Option<Vec<Rational>> {
        match self {
            Self::Unique { variables, .. } => {
                Some(variables.iter().map(|v| v.value.clone()).collect())
            }
            Self::NoUniqueSolution { .. } => None,
        }
    }
}

/// Solves `A·x = b` by Cramer's rule.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if `a` is not square or `b`
/// does not have one entry per row.
pub fn cramer(
    a: &Matrix,
    b: &[Rational],
    formatter: &NumberFormatter,
) -> Result<CramerResult, LinalgError> {
    if !a.is_square() {
        return Err(LinalgError::DimensionMismatch(format!(
            "Cramer's rule requires a square matrix, got {}x{}",
            a.rows(),
            a.cols()
        )));
    }
    if b.len() != a.rows() {
        return Err(LinalgError::DimensionMismatch(format!(
            "matrix has {} rows but right-hand side has {} entries",
            a.rows(),
            b.len()
        )));
    }

    let n = a.rows();
    let det_result = determinant(a, formatter)?;
    let det_a = det_result.value;
    debug!(n, det_a = %det_a, "applying Cramer's rule");
    if det_a.is_zero() {
        return Ok(CramerResult::NoUniqueSolution {
            det_a,
            det_steps: det_result.steps,
        });
    }

    let mut variables = Vec::with_capacity(n);
    for index in 0..n {
        let mut replaced = a.clone();
        for row in 0..n {
            replaced[(row, index)] = b[row].clone();
        }
        let det_i = determinant(&replaced, formatter)?;
        let value = &det_i.value / &det_a;
        variables.push(CramerVariable {
            index,
            determinant: det_i.value,
            steps: det_i.steps,
            value,
        });
    }

    Ok(CramerResult::Unique {
        det_a,
        det_steps: det_result.steps,
        variables,
    })
}

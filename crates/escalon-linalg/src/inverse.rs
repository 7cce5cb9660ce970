//! Matrix inversion via Gauss-Jordan on `[A | I]`.
//!
//! The elimination kernel reduces the left block; whatever lands in the
//! right block is `A⁻¹`. Singularity is not an error: it is a reportable
//! outcome carrying the trail that exposed it.

use escalon_rational::{NumberFormatter, Rational};
use num_traits::Zero;
use tracing::debug;

use crate::eliminate::{eliminate_in_place, Mode};
use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::step::{Step, StepRecorder};

/// Outcome of an inversion attempt.
#[derive(Clone, Debug)]
pub enum InverseResult {
    /// The matrix is invertible.
    Invertible {
        /// The exact inverse.
        inverse: Matrix,
        /// The Gauss-Jordan trail over `[A | I]`.
        steps: Vec<Step>,
    },
    /// The matrix is singular.
    Singular {
        /// Why inversion failed, e.g. which column never got a pivot.
        reason: String,
        /// The trail up to the point singularity became evident.
        steps: Vec<Step>,
    },
}

/// Inverts a square matrix.
///
/// `2×2` matrices use the adjugate formula directly; larger matrices run
/// full Gauss-Jordan on `[A | I]` with the usual pivoting policy.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if the matrix is not square.
pub fn invert(
    matrix: &Matrix,
    formatter: &NumberFormatter,
) -> Result<InverseResult, LinalgError> {
    if !matrix.is_square() {
        return Err(LinalgError::DimensionMismatch(format!(
            "inverse requires a square matrix, got {}x{}",
            matrix.rows(),
            matrix.cols()
        )));
    }
    let n = matrix.rows();
    debug!(n, "inverting matrix");
    let mut recorder = StepRecorder::new(formatter);

    if n == 2 {
        let det =
            &(&matrix[(0, 0)] * &matrix[(1, 1)]) - &(&matrix[(0, 1)] * &matrix[(1, 0)]);
        if det.is_zero() {
            recorder.annotate("det(A) = 0".to_string(), matrix.snapshot(formatter));
            return Ok(InverseResult::Singular {
                reason: "determinant is 0".to_string(),
                steps: recorder.into_steps(),
            });
        }
        let mut inverse = Matrix::zeros(2, 2);
        inverse[(0, 0)] = &matrix[(1, 1)] / &det;
        inverse[(0, 1)] = &(-matrix[(0, 1)].clone()) / &det;
        inverse[(1, 0)] = &(-matrix[(1, 0)].clone()) / &det;
        inverse[(1, 1)] = &matrix[(0, 0)] / &det;
        recorder.annotate(
            format!("A⁻¹ = adj(A) / det(A), det(A) = {}", formatter.format(&det)),
            inverse.snapshot(formatter),
        );
        return Ok(InverseResult::Invertible {
            inverse,
            steps: recorder.into_steps(),
        });
    }

    // [A | I], reduced over the leading n columns.
    let mut work = Matrix::zeros(n, 2 * n);
    for i in 0..n {
        for j in 0..n {
            work[(i, j)] = matrix[(i, j)].clone();
        }
        work[(i, n + i)] = Rational::from(1);
    }

    let pivot_columns = eliminate_in_place(&mut work, n, Mode::Rref, false, &mut recorder);

    if pivot_columns.len() < n {
        let missing = (0..n)
            .find(|c| !pivot_columns.contains(c))
            .unwrap_or(n - 1);
        return Ok(InverseResult::Singular {
            reason: format!("no pivot in column {}", missing + 1),
            steps: recorder.into_steps(),
        });
    }

    let mut inverse = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            inverse[(i, j)] = work[(i, n + j)].clone();
        }
    }

    Ok(InverseResult::Invertible {
        inverse,
        steps: recorder.into_steps(),
    })
}

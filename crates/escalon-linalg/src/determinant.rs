//! Determinants by forward elimination, with a recorded trail.
//!
//! Unlike [`crate::eliminate`], rows are never normalized here: the
//! determinant is read off the diagonal of the triangular form, with one
//! sign flip per row swap. Swaps happen only when a diagonal entry is
//! near-zero, so the trail stays short on well-behaved input.

use escalon_rational::{NumberFormatter, Rational, DEFAULT_TOLERANCE};
use num_traits::{One, Zero};
use tracing::debug;

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::step::{Step, StepRecorder};

/// A determinant together with the row operations that produced it.
#[derive(Clone, Debug)]
pub struct DeterminantResult {
    /// The exact determinant.
    pub value: Rational,
    /// Elimination steps plus a closing annotation with the diagonal
    /// product.
    pub steps: Vec<Step>,
}

/// Computes the determinant of a square matrix.
///
/// `1×1` and `2×2` matrices are evaluated directly; larger matrices go
/// through forward elimination without row normalization.
///
/// A column with no usable entry at or below the diagonal forces a zero
/// on the diagonal, so the run short-circuits to `det = 0` there: the
/// trail ends with the `"det(A) = 0"` annotation instead of continuing
/// to a full triangular form.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if the matrix is not square.
pub fn determinant(
    matrix: &Matrix,
    formatter: &NumberFormatter,
) -> Result<DeterminantResult, LinalgError> {
    if !matrix.is_square() {
        return Err(LinalgError::DimensionMismatch(format!(
            "determinant requires a square matrix, got {}x{}",
            matrix.rows(),
            matrix.cols()
        )));
    }
    let n = matrix.rows();
    debug!(n, "computing determinant");
    let mut recorder = StepRecorder::new(formatter);

    if n == 1 {
        let value = matrix[(0, 0)].clone();
        recorder.annotate(
            format!("det(A) = {}", formatter.format(&value)),
            matrix.snapshot(formatter),
        );
        return Ok(DeterminantResult {
            value,
            steps: recorder.into_steps(),
        });
    }

    if n == 2 {
        let value = &(&matrix[(0, 0)] * &matrix[(1, 1)]) - &(&matrix[(0, 1)] * &matrix[(1, 0)]);
        recorder.annotate(
            format!(
                "det(A) = ({})·({}) − ({})·({}) = {}",
                formatter.format(&matrix[(0, 0)]),
                formatter.format(&matrix[(1, 1)]),
                formatter.format(&matrix[(0, 1)]),
                formatter.format(&matrix[(1, 0)]),
                formatter.format(&value)
            ),
            matrix.snapshot(formatter),
        );
        return Ok(DeterminantResult {
            value,
            steps: recorder.into_steps(),
        });
    }

    let mut work = matrix.clone();
    let mut sign_negative = false;

    for col in 0..n {
        if work[(col, col)].is_near_zero(DEFAULT_TOLERANCE) {
            let replacement =
                (col + 1..n).find(|&r| !work[(r, col)].is_near_zero(DEFAULT_TOLERANCE));
            match replacement {
                Some(r) => {
                    work.swap_rows(col, r);
                    sign_negative = !sign_negative;
                    recorder.record(
                        format!("F{} ⇄ F{} (det → −det)", col + 1, r + 1),
                        &work,
                        Some(col),
                    );
                }
                None => {
                    // Column has no usable pivot at or below the diagonal.
                    recorder.annotate("det(A) = 0".to_string(), work.snapshot(formatter));
                    return Ok(DeterminantResult {
                        value: Rational::zero(),
                        steps: recorder.into_steps(),
                    });
                }
            }
        }

        let pivot = work[(col, col)].clone();
        for target in col + 1..n {
            let entry = work[(target, col)].clone();
            if entry.is_zero() {
                continue;
            }
            let factor = &entry / &pivot;
            let neg_factor = -factor.clone();
            work.add_scaled_row(target, col, &neg_factor);
            let description = format!(
                "F{} ← F{} − ({})·F{}",
                target + 1,
                target + 1,
                recorder.format_value(&factor),
                col + 1
            );
            recorder.record(description, &work, Some(col));
        }
    }

    let mut value = Rational::one();
    let mut diagonal = Vec::with_capacity(n);
    for i in 0..n {
        let d = work[(i, i)].clone();
        diagonal.push(formatter.format(&d));
        value = &value * &d;
    }
    if sign_negative {
        value = -value;
    }

    let product = diagonal.join(" · ");
    let summary = if sign_negative {
        format!("det(A) = −({product}) = {}", formatter.format(&value))
    } else {
        format!("det(A) = {product} = {}", formatter.format(&value))
    };
    recorder.annotate(summary, work.snapshot(formatter));

    Ok(DeterminantResult {
        value,
        steps: recorder.into_steps(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(values: &[&[i64]]) -> Matrix {
        Matrix::from_rows(
            values
                .iter()
                .map(|r| r.iter().map(|&v| Rational::from(v)).collect())
                .collect(),
        )
        .unwrap()
    }

    fn det(values: &[&[i64]]) -> DeterminantResult {
        determinant(&mat(values), &NumberFormatter::default()).unwrap()
    }

    #[test]
    fn test_1x1() {
        assert_eq!(det(&[&[7]]).value, Rational::from(7));
    }

    #[test]
    fn test_2x2_direct() {
        let result = det(&[&[3, 1], &[-1, 2]]);
        assert_eq!(result.value, Rational::from(7));
        assert_eq!(result.steps.len(), 1);
        assert!(result.steps[0].description.starts_with("det(A) = "));
    }

    #[test]
    fn test_3x3_by_elimination() {
        let result = det(&[&[2, -1, 0], &[1, 2, 1], &[0, 1, 3]]);
        assert_eq!(result.value, Rational::from(13));
    }

    #[test]
    fn test_singular_is_zero() {
        let result = det(&[&[1, 2, 3], &[2, 4, 6], &[1, 1, 1]]);
        assert_eq!(result.value, Rational::zero());
        // The trail stops at the dead column.
        assert_eq!(result.steps.last().unwrap().description, "det(A) = 0");
    }

    #[test]
    fn test_swap_flips_sign() {
        // Permutation matrix with a single transposition.
        let result = det(&[&[0, 0, 1], &[0, 1, 0], &[1, 0, 0]]);
        assert_eq!(result.value, Rational::from(-1));
        assert!(result
            .steps
            .iter()
            .any(|s| s.description.contains("det → −det")));
    }

    #[test]
    fn test_rows_never_normalized() {
        // Triangular already: the only step is the closing annotation and
        // the diagonal survives untouched.
        let result = det(&[&[2, 1, 1], &[0, 3, 1], &[0, 0, 5]]);
        assert_eq!(result.value, Rational::from(30));
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].snapshot[0][0], "2");
    }

    #[test]
    fn test_rejects_non_square() {
        let m = mat(&[&[1, 2, 3], &[4, 5, 6]]);
        assert!(matches!(
            determinant(&m, &NumberFormatter::default()),
            Err(LinalgError::DimensionMismatch(_))
        ));
    }
}

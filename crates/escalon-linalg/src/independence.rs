//! Linear-independence testing for vector families.
//!
//! The vectors become the columns of a homogeneous system `[v₁ … vₙ | 0]`;
//! forward elimination then counts pivots. The family is independent
//! exactly when every column earns a pivot.

use escalon_rational::{NumberFormatter, Rational};
use tracing::debug;

use crate::eliminate::{eliminate_in_place, Mode};
use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::step::{Step, StepRecorder};

/// Result of an independence test.
#[derive(Clone, Debug)]
pub struct IndependenceReport {
    /// Whether the family is linearly independent.
    pub independent: bool,
    /// Pivots found by forward elimination.
    pub pivot_count: usize,
    /// Number of vectors tested.
    pub vector_count: usize,
    /// The elimination trail over the homogeneous system.
    pub steps: Vec<Step>,
}

/// Tests whether a family of vectors is linearly independent.
///
/// # Errors
///
/// Returns [`LinalgError::MalformedMatrix`] if the family is empty or a
/// vector is zero-dimensional, and [`LinalgError::DimensionMismatch`] if
/// the vectors do not all share one dimension.
pub fn independent(
    vectors: &[Vec<Rational>],
    formatter: &NumberFormatter,
) -> Result<IndependenceReport, LinalgError> {
    if vectors.is_empty() || vectors[0].is_empty() {
        return Err(LinalgError::MalformedMatrix);
    }
    let dimension = vectors[0].len();
    if let Some(odd) = vectors.iter().find(|v| v.len() != dimension) {
        return Err(LinalgError::DimensionMismatch(format!(
            "expected vectors of dimension {dimension}, found one of dimension {}",
            odd.len()
        )));
    }

    let vector_count = vectors.len();
    debug!(vector_count, dimension, "testing linear independence");

    // Vectors as columns, zero right-hand side.
    let mut matrix = Matrix::zeros(dimension, vector_count + 1);
    for (j, vector) in vectors.iter().enumerate() {
        for (i, value) in vector.iter().enumerate() {
            matrix[(i, j)] = value.clone();
        }
    }

    let mut recorder = StepRecorder::new(formatter);
    let pivot_columns =
        eliminate_in_place(&mut matrix, vector_count, Mode::Ref, false, &mut recorder);
    let pivot_count = pivot_columns.len();

    Ok(IndependenceReport {
        independent: pivot_count == vector_count,
        pivot_count,
        vector_count,
        steps: recorder.into_steps(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vecs(values: &[&[i64]]) -> Vec<Vec<Rational>> {
        values
            .iter()
            .map(|v| v.iter().map(|&x| Rational::from(x)).collect())
            .collect()
    }

    #[test]
    fn test_standard_basis_is_independent() {
        let report = independent(
            &vecs(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]),
            &NumberFormatter::default(),
        )
        .unwrap();
        assert!(report.independent);
        assert_eq!(report.pivot_count, 3);
        assert_eq!(report.vector_count, 3);
    }

    #[test]
    fn test_collinear_pair_is_dependent() {
        let report = independent(
            &vecs(&[&[1, 2], &[2, 4]]),
            &NumberFormatter::default(),
        )
        .unwrap();
        assert!(!report.independent);
        assert_eq!(report.pivot_count, 1);
    }

    #[test]
    fn test_more_vectors_than_dimensions() {
        // Three vectors in R² can never be independent.
        let report = independent(
            &vecs(&[&[1, 0], &[0, 1], &[1, 1]]),
            &NumberFormatter::default(),
        )
        .unwrap();
        assert!(!report.independent);
        assert_eq!(report.pivot_count, 2);
    }

    #[test]
    fn test_single_zero_vector_is_dependent() {
        let report = independent(&vecs(&[&[0, 0]]), &NumberFormatter::default()).unwrap();
        assert!(!report.independent);
        assert_eq!(report.pivot_count, 0);
    }

    #[test]
    fn test_rejects_mismatched_dimensions() {
        let family = vec![
            vec![Rational::from(1), Rational::from(2)],
            vec![Rational::from(3)],
        ];
        assert!(matches!(
            independent(&family, &NumberFormatter::default()),
            Err(LinalgError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_rejects_empty_family() {
        assert_eq!(
            independent(&[], &NumberFormatter::default()).unwrap_err(),
            LinalgError::MalformedMatrix
        );
    }
}

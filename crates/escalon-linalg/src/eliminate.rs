//! Gaussian elimination with partial pivoting and step recording.
//!
//! One kernel serves every consumer: REF for forward elimination, RREF for
//! full Gauss-Jordan, and the inverse engine drives the same kernel over
//! the `n` leading columns of `[A | I]`. The historical REF-only,
//! RREF-only and short-circuiting variants are configuration, not separate
//! code paths.

use escalon_rational::{NumberFormatter, Rational, DEFAULT_TOLERANCE};
use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::matrix::{AugmentedMatrix, Matrix};
use crate::step::{Step, StepRecorder};

/// Target form of the elimination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Row-echelon form: eliminate below pivots only.
    Ref,
    /// Reduced row-echelon form: eliminate above and below pivots.
    #[default]
    Rref,
}

/// Configuration for a [`reduce`] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EliminationOptions {
    /// Target form.
    pub mode: Mode,
    /// Stop as soon as a row combination produces `0 … 0 | b ≠ 0`.
    ///
    /// The returned step list is then the minimal prefix proving
    /// inconsistency.
    pub early_exit_on_inconsistency: bool,
}

impl Default for EliminationOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Rref,
            early_exit_on_inconsistency: true,
        }
    }
}

/// Outcome of a [`reduce`] run.
#[derive(Clone, Debug)]
pub struct EliminationResult {
    /// One step per elementary row operation, in execution order.
    pub steps: Vec<Step>,
    /// Columns in which a pivot was established, in ascending order.
    pub pivot_columns: Vec<usize>,
    /// The reduced matrix (RHS column included).
    pub final_matrix: Matrix,
    /// The form the run targeted; the classifier needs it to decide
    /// whether back-substitution is required.
    pub mode: Mode,
}

/// Reduces an augmented matrix to REF or RREF.
///
/// Pivot policy: within the active row range, the candidate with the
/// largest absolute value wins (exact comparison); near-zero entries are
/// never candidates; ties go to the lowest row index. A column with no
/// candidate is skipped without advancing the pivot row. Pivot rows are
/// normalized so every pivot is exactly 1 in both modes.
#[must_use]
pub fn reduce(
    system: &AugmentedMatrix,
    options: &EliminationOptions,
    formatter: &NumberFormatter,
) -> EliminationResult {
    debug!(
        equations = system.equations(),
        unknowns = system.unknowns(),
        mode = ?options.mode,
        "reducing augmented matrix"
    );

    let mut matrix = system.grid().clone();
    let mut recorder = StepRecorder::new(formatter);
    let pivot_columns = eliminate_in_place(
        &mut matrix,
        system.unknowns(),
        options.mode,
        options.early_exit_on_inconsistency,
        &mut recorder,
    );

    EliminationResult {
        steps: recorder.into_steps(),
        pivot_columns,
        final_matrix: matrix,
        mode: options.mode,
    }
}

/// The elimination kernel.
///
/// Operates on the first `coeff_cols` columns of `matrix`; row operations
/// always span the full row width, so trailing columns (the RHS, or the
/// identity block of `[A | I]`) are carried along. Returns the pivot
/// columns established before completion or early exit.
pub(crate) fn eliminate_in_place(
    matrix: &mut Matrix,
    coeff_cols: usize,
    mode: Mode,
    early_exit_on_inconsistency: bool,
    recorder: &mut StepRecorder<'_>,
) -> Vec<usize> {
    let rows = matrix.rows();
    let mut pivot_columns = Vec::new();
    let mut row = 0;

    for col in 0..coeff_cols {
        if row == rows {
            break;
        }

        let Some(pivot_row) = select_pivot(matrix, col, row) else {
            // Rank-deficient in this column; move on without using a row.
            continue;
        };
        trace!(col, pivot_row, "selected pivot");

        if pivot_row != row {
            matrix.swap_rows(row, pivot_row);
            recorder.record(
                format!("F{} ⇄ F{}", row + 1, pivot_row + 1),
                matrix,
                Some(col),
            );
        }

        let pivot = matrix[(row, col)].clone();
        if !pivot.is_one() {
            if let Some(inv) = pivot.recip() {
                matrix.scale_row(row, &inv);
                let description =
                    format!("F{} ← F{} / {}", row + 1, row + 1, recorder.format_value(&pivot));
                recorder.record(description, matrix, Some(col));
            }
        }

        for target in 0..rows {
            if target == row {
                continue;
            }
            if mode == Mode::Ref && target < row {
                continue;
            }
            let factor = matrix[(target, col)].clone();
            if factor.is_zero() {
                continue;
            }
            let neg_factor = -factor.clone();
            matrix.add_scaled_row(target, row, &neg_factor);
            let description = format!(
                "F{} ← F{} − ({})·F{}",
                target + 1,
                target + 1,
                recorder.format_value(&factor),
                row + 1
            );
            recorder.record(description, matrix, Some(col));

            if early_exit_on_inconsistency && row_proves_inconsistency(matrix, target, coeff_cols)
            {
                trace!(row = target, "inconsistency row found, stopping early");
                pivot_columns.push(col);
                return pivot_columns;
            }
        }

        pivot_columns.push(col);
        row += 1;
    }

    pivot_columns
}

/// Largest-magnitude candidate in `col` among rows `>= from`, first
/// occurrence winning ties; `None` if every candidate is near-zero.
fn select_pivot(matrix: &Matrix, col: usize, from: usize) -> Option<usize> {
    let mut best: Option<(usize, Rational)> = None;
    for r in from..matrix.rows() {
        let value = &matrix[(r, col)];
        if value.is_near_zero(DEFAULT_TOLERANCE) {
            continue;
        }
        let magnitude = value.abs();
        match &best {
            Some((_, current)) if magnitude <= *current => {}
            _ => best = Some((r, magnitude)),
        }
    }
    best.map(|(r, _)| r)
}

/// True if the row reads `0 … 0 | b` with some non-zero `b` past the
/// coefficient block.
fn row_proves_inconsistency(matrix: &Matrix, row: usize, coeff_cols: usize) -> bool {
    let entries = matrix.row(row);
    entries[..coeff_cols].iter().all(Zero::is_zero)
        && entries[coeff_cols..].iter().any(|v| !v.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use escalon_rational::Rational;

    fn aug(values: &[&[i64]]) -> AugmentedMatrix {
        AugmentedMatrix::from_rows(
            values
                .iter()
                .map(|r| r.iter().map(|&v| Rational::from(v)).collect())
                .collect(),
        )
        .unwrap()
    }

    fn rat(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d).unwrap()
    }

    #[test]
    fn test_rref_unique_system() {
        // 2x - y = 1, x + 2y = 4  =>  x = 6/5, y = 7/5
        let system = aug(&[&[2, -1, 1], &[1, 2, 4]]);
        let result = reduce(&system, &EliminationOptions::default(), &NumberFormatter::default());

        assert_eq!(result.pivot_columns, vec![0, 1]);
        assert_eq!(result.final_matrix[(0, 2)], rat(6, 5));
        assert_eq!(result.final_matrix[(1, 2)], rat(7, 5));
    }

    #[test]
    fn test_partial_pivoting_prefers_largest_magnitude() {
        let system = aug(&[&[1, 1, 3], &[4, 1, 6]]);
        let result = reduce(&system, &EliminationOptions::default(), &NumberFormatter::default());

        // Row 2 holds the 4, so the first recorded step is the swap.
        assert_eq!(result.steps[0].description, "F1 ⇄ F2");
    }

    #[test]
    fn test_ref_leaves_upper_triangle() {
        let system = aug(&[&[2, 1, 5], &[4, 1, 9]]);
        let options = EliminationOptions {
            mode: Mode::Ref,
            early_exit_on_inconsistency: false,
        };
        let result = reduce(&system, &options, &NumberFormatter::default());

        // Pivot normalization happens in REF too, but nothing above the
        // second pivot is cleared.
        assert_eq!(result.final_matrix[(0, 0)], Rational::one());
        assert!(!result.final_matrix[(0, 1)].is_zero());
        assert_eq!(result.final_matrix[(1, 0)], Rational::zero());
        assert_eq!(result.final_matrix[(1, 1)], Rational::one());
    }

    #[test]
    fn test_skipped_column_keeps_row() {
        // Second column is all zeros; pivot lands on the third.
        let system = aug(&[&[1, 0, 2, 3], &[2, 0, 5, 7]]);
        let result = reduce(&system, &EliminationOptions::default(), &NumberFormatter::default());
        assert_eq!(result.pivot_columns, vec![0, 2]);
    }

    #[test]
    fn test_early_exit_truncates_steps() {
        // x + y = 1, x + y = 2 is inconsistent after a single combination.
        let system = aug(&[&[1, 1, 1], &[1, 1, 2]]);
        let eager = reduce(&system, &EliminationOptions::default(), &NumberFormatter::default());
        let lazy = reduce(
            &system,
            &EliminationOptions {
                mode: Mode::Rref,
                early_exit_on_inconsistency: false,
            },
            &NumberFormatter::default(),
        );

        assert!(eager.steps.len() <= lazy.steps.len());
        let last = eager.steps.last().unwrap();
        assert_eq!(last.snapshot[1], vec!["0", "0", "1"]);
    }

    #[test]
    fn test_idempotent_on_reduced_matrix() {
        let system = aug(&[&[1, 0, 2], &[0, 1, 3]]);
        let result = reduce(&system, &EliminationOptions::default(), &NumberFormatter::default());
        assert!(result.steps.is_empty());
        assert_eq!(result.final_matrix, *system.grid());
    }

    #[test]
    fn test_step_descriptions() {
        let system = aug(&[&[2, 0, 4], &[1, 1, 3]]);
        let result = reduce(&system, &EliminationOptions::default(), &NumberFormatter::default());
        let descriptions: Vec<&str> =
            result.steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(descriptions, vec!["F1 ← F1 / 2", "F2 ← F2 − (1)·F1"]);
    }
}

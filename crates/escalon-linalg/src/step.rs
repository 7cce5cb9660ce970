//! Step records for elementary row operations.
//!
//! Each engine run produces an append-only sequence of steps; a step holds
//! the matrix state *after* one row swap, row scale or row combination,
//! already formatted for rendering. Snapshots are fully resolved so every
//! step can be displayed on its own.

use escalon_rational::{NumberFormatter, Rational};

use crate::matrix::Matrix;

/// An immutable record of one elementary row operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Human-readable description, e.g. `"F2 ← F2 − (3)·F1"`.
    pub description: String,
    /// The full matrix after the operation, formatted row by row.
    pub snapshot: Vec<Vec<String>>,
    /// The column whose pivot this operation serves, when applicable.
    pub pivot_column: Option<usize>,
}

/// Collects steps during a single engine run.
pub(crate) struct StepRecorder<'a> {
    formatter: &'a NumberFormatter,
    steps: Vec<Step>,
}

impl<'a> StepRecorder<'a> {
    pub(crate) fn new(formatter: &'a NumberFormatter) -> Self {
        Self {
            formatter,
            steps: Vec::new(),
        }
    }

    /// Formats a single value with the run's formatter, for descriptions.
    pub(crate) fn format_value(&self, value: &Rational) -> String {
        self.formatter.format(value)
    }

    /// Appends a step snapshotting the current matrix state.
    pub(crate) fn record(&mut self, description: String, matrix: &Matrix, pivot_column: Option<usize>) {
        self.steps.push(Step {
            description,
            snapshot: matrix.snapshot(self.formatter),
            pivot_column,
        });
    }

    /// Appends an annotation step with a custom snapshot.
    pub(crate) fn annotate(&mut self, description: String, snapshot: Vec<Vec<String>>) {
        self.steps.push(Step {
            description,
            snapshot,
            pivot_column: None,
        });
    }

    pub(crate) fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escalon_rational::Rational;

    #[test]
    fn test_recorder_snapshots_current_state() {
        let formatter = NumberFormatter::default();
        let mut recorder = StepRecorder::new(&formatter);
        let mut m = Matrix::from_rows(vec![
            vec![Rational::from(1), Rational::from(2)],
            vec![Rational::from(3), Rational::from(4)],
        ])
        .unwrap();

        m.swap_rows(0, 1);
        recorder.record("F1 ⇄ F2".to_string(), &m, Some(0));

        let steps = recorder.into_steps();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].snapshot[0], vec!["3", "4"]);
        assert_eq!(steps[0].pivot_column, Some(0));
    }
}

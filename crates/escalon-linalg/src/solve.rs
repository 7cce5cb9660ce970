//! End-to-end solving: reduce, classify, render.
//!
//! [`solve_system`] is the one-call surface over the elimination kernel
//! and the classifier, returning everything a presentation layer needs:
//! the step trail, the pivot columns, the reduced grid already formatted,
//! and the canonical solution lines.

use escalon_rational::NumberFormatter;
use tracing::info;

use crate::classify::{general_solution, Classification, SolutionSet};
use crate::eliminate::{reduce, EliminationOptions};
use crate::matrix::AugmentedMatrix;
use crate::step::Step;

/// Configuration for a [`solve_system`] run.
#[derive(Clone, Debug, Default)]
pub struct SolveOptions {
    /// Elimination mode and early-exit policy.
    pub elimination: EliminationOptions,
    /// Formatter applied to snapshots, descriptions and solution lines.
    pub formatter: NumberFormatter,
}

/// Everything produced by one solving run.
#[derive(Clone, Debug)]
pub struct SolveReport {
    /// The algebraic outcome.
    pub classification: Classification,
    /// The full general solution, expressions included.
    pub solution: SolutionSet,
    /// Canonical display lines, one per variable (or the single
    /// inconsistency line).
    pub lines: Vec<String>,
    /// The elimination trail.
    pub steps: Vec<Step>,
    /// Columns that received pivots, ascending.
    pub pivot_columns: Vec<usize>,
    /// The reduced grid, formatted row by row.
    pub final_matrix: Vec<Vec<String>>,
}

/// Solves an augmented system end to end.
#[must_use]
pub fn solve_system(system: &AugmentedMatrix, options: &SolveOptions) -> SolveReport {
    let result = reduce(system, &options.elimination, &options.formatter);
    let solution = general_solution(&result);
    let lines = solution.lines(&options.formatter);
    info!(
        pivots = result.pivot_columns.len(),
        unknowns = system.unknowns(),
        outcome = ?discriminant_name(&solution.classification),
        "system solved"
    );

    SolveReport {
        classification: solution.classification.clone(),
        lines,
        steps: result.steps,
        pivot_columns: result.pivot_columns,
        final_matrix: result.final_matrix.snapshot(&options.formatter),
        solution,
    }
}

fn discriminant_name(classification: &Classification) -> &'static str {
    match classification {
        Classification::Unique(_) => "unique",
        Classification::Infinite { .. } => "infinite",
        Classification::Inconsistent => "inconsistent",
    }
}

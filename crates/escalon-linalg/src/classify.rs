//! Classification of reduced systems and parametric solutions.
//!
//! Works off an [`EliminationResult`]: inconsistency is detected first,
//! then the pivot count decides between a unique solution and a family
//! parameterized by the free variables. REF results are back-substituted
//! explicitly; RREF results are read off directly.
//!
//! Which free variable a caller treats as "primary" is caller policy; the
//! engine only reports the ordered free-column list.

use escalon_rational::{NumberFormatter, Rational};
use num_traits::{One, Zero};

use crate::eliminate::{EliminationResult, Mode};
use crate::matrix::Matrix;

/// The algebraic outcome of a reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Every variable has a pivot; the solution vector is exact.
    Unique(Vec<Rational>),
    /// Consistent but rank-deficient; the listed columns are free.
    Infinite {
        /// 0-based indices of the variables without a pivot, ascending.
        free_variables: Vec<usize>,
    },
    /// Some row reduced to `0 … 0 | b ≠ 0`.
    Inconsistent,
}

/// A linear expression `constant + Σ coeff·x_j` over free variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearExpr {
    /// Constant term.
    pub constant: Rational,
    /// `(variable index, coefficient)` pairs, ascending, zeros pruned.
    pub terms: Vec<(usize, Rational)>,
}

impl LinearExpr {
    /// Renders the expression, e.g. `"8 - 2*x2 + 2*x4"`.
    #[must_use]
    pub fn format_with(&self, formatter: &NumberFormatter) -> String {
        let mut parts = Vec::new();
        if !self.constant.is_zero() {
            parts.push(formatter.format(&self.constant));
        }
        for (index, coeff) in &self.terms {
            let name = format!("x{}", index + 1);
            if coeff.is_one() {
                parts.push(name);
            } else if (-coeff).is_one() {
                parts.push(format!("-{name}"));
            } else {
                parts.push(format!("{}*{}", formatter.format(coeff), name));
            }
        }
        if parts.is_empty() {
            return "0".to_string();
        }
        parts.join(" + ").replace("+ -", "- ")
    }
}

impl std::fmt::Display for LinearExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_with(&NumberFormatter::default()))
    }
}

/// The general solution of a consistent system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionSet {
    /// The classification this solution was derived from.
    pub classification: Classification,
    /// One expression per variable (a free variable maps to itself).
    /// Empty when the system is inconsistent.
    pub expressions: Vec<LinearExpr>,
    /// 0-based indices of the free variables, ascending.
    pub free_variables: Vec<usize>,
}

impl SolutionSet {
    /// Canonical display lines: `"x{i} = {expr}"` for pivot variables and
    /// `"Free variable: x{i}"` for free ones, 1-based.
    #[must_use]
    pub fn lines(&self, formatter: &NumberFormatter) -> Vec<String> {
        if self.classification == Classification::Inconsistent {
            return vec!["No solution: the system is inconsistent.".to_string()];
        }
        (0..self.expressions.len())
            .map(|j| {
                if self.free_variables.contains(&j) {
                    format!("Free variable: x{}", j + 1)
                } else {
                    format!("x{} = {}", j + 1, self.expressions[j].format_with(formatter))
                }
            })
            .collect()
    }
}

/// Classifies a reduced system.
#[must_use]
pub fn classify(result: &EliminationResult) -> Classification {
    general_solution(result).classification
}

/// Builds the general solution of a reduced system.
#[must_use]
pub fn general_solution(result: &EliminationResult) -> SolutionSet {
    let matrix = &result.final_matrix;
    let unknowns = matrix.cols() - 1;

    if has_inconsistent_row(matrix, unknowns) {
        return SolutionSet {
            classification: Classification::Inconsistent,
            expressions: Vec::new(),
            free_variables: Vec::new(),
        };
    }

    let free_variables: Vec<usize> = (0..unknowns)
        .filter(|c| !result.pivot_columns.contains(c))
        .collect();

    // Dense working form; free variables start as themselves.
    let mut expressions: Vec<DenseExpr> = (0..unknowns)
        .map(|j| {
            let mut e = DenseExpr::zero(unknowns);
            if free_variables.contains(&j) {
                e.coeffs[j] = Rational::one();
            }
            e
        })
        .collect();

    match result.mode {
        Mode::Rref => {
            // Pivot row i owns pivot_columns[i]; coefficients of free
            // columns in that row are the negated multipliers.
            for (i, &col) in result.pivot_columns.iter().enumerate() {
                let mut expr = DenseExpr::zero(unknowns);
                expr.constant = matrix[(i, unknowns)].clone();
                for &j in &free_variables {
                    let coeff = &matrix[(i, j)];
                    if !coeff.is_zero() {
                        expr.coeffs[j] = -coeff.clone();
                    }
                }
                expressions[col] = expr;
            }
        }
        Mode::Ref => {
            // Back-substitution from the last pivot row upward.
            for i in (0..result.pivot_columns.len()).rev() {
                let col = result.pivot_columns[i];
                let mut rhs = DenseExpr::zero(unknowns);
                rhs.constant = matrix[(i, unknowns)].clone();
                for j in col + 1..unknowns {
                    let coeff = &matrix[(i, j)];
                    if !coeff.is_zero() {
                        rhs.sub_scaled(coeff, &expressions[j].clone());
                    }
                }
                let pivot = &matrix[(i, col)];
                if !pivot.is_one() {
                    if let Some(inv) = pivot.recip() {
                        rhs.scale(&inv);
                    }
                }
                expressions[col] = rhs;
            }
        }
    }

    let classification = if free_variables.is_empty() {
        Classification::Unique(expressions.iter().map(|e| e.constant.clone()).collect())
    } else {
        Classification::Infinite {
            free_variables: free_variables.clone(),
        }
    };

    SolutionSet {
        classification,
        expressions: expressions.into_iter().map(DenseExpr::into_sparse).collect(),
        free_variables,
    }
}

/// Any row with all-zero coefficients but a non-zero right-hand side?
fn has_inconsistent_row(matrix: &Matrix, unknowns: usize) -> bool {
    (0..matrix.rows()).any(|r| {
        let row = matrix.row(r);
        row[..unknowns].iter().all(Zero::is_zero) && !row[unknowns].is_zero()
    })
}

/// Dense scratch representation used while building expressions.
#[derive(Clone)]
struct DenseExpr {
    constant: Rational,
    coeffs: Vec<Rational>,
}

impl DenseExpr {
    fn zero(n: usize) -> Self {
        Self {
            constant: Rational::zero(),
            coeffs: vec![Rational::zero(); n],
        }
    }

    /// `self -= factor * other`
    fn sub_scaled(&mut self, factor: &Rational, other: &Self) {
        self.constant = &self.constant - &(factor * &other.constant);
        for (c, o) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *c = &*c - &(factor * o);
        }
    }

    fn scale(&mut self, factor: &Rational) {
        self.constant = &self.constant * factor;
        for c in &mut self.coeffs {
            *c = &*c * factor;
        }
    }

    fn into_sparse(self) -> LinearExpr {
        LinearExpr {
            constant: self.constant,
            terms: self
                .coeffs
                .into_iter()
                .enumerate()
                .filter(|(_, c)| !c.is_zero())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eliminate::{reduce, EliminationOptions};
    use crate::matrix::AugmentedMatrix;

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

    fn rref(system: &AugmentedMatrix) -> EliminationResult {
        reduce(system, &EliminationOptions::default(), &NumberFormatter::default())
    }

    #[test]
    fn test_unique_from_rref() {
        let system = aug(&[&[2, -1, 1], &[1, 2, 4]]);
        let classification = classify(&rref(&system));
        assert_eq!(
            classification,
            Classification::Unique(vec![rat(6, 5), rat(7, 5)])
        );
    }

    #[test]
    fn test_unique_from_ref_back_substitution() {
        let system = aug(&[&[2, -1, 1], &[1, 2, 4]]);
        let options = EliminationOptions {
            mode: Mode::Ref,
            early_exit_on_inconsistency: false,
        };
        let result = reduce(&system, &options, &NumberFormatter::default());
        let classification = classify(&result);
        assert_eq!(
            classification,
            Classification::Unique(vec![rat(6, 5), rat(7, 5)])
        );
    }

    #[test]
    fn test_inconsistent() {
        let system = aug(&[&[1, 1, 1], &[1, 1, 2]]);
        assert_eq!(classify(&rref(&system)), Classification::Inconsistent);
    }

    #[test]
    fn test_infinite_free_variables() {
        // x + 2y = 3 alone: y is free.
        let system = aug(&[&[1, 2, 3]]);
        assert_eq!(
            classify(&rref(&system)),
            Classification::Infinite {
                free_variables: vec![1]
            }
        );
    }

    #[test]
    fn test_parametric_expressions_read_off_rref() {
        let system = aug(&[&[1, 2, 3]]);
        let solution = general_solution(&rref(&system));
        let formatter = NumberFormatter::default();

        // x1 = 3 - 2*x2
        assert_eq!(solution.expressions[0].format_with(&formatter), "3 - 2*x2");
        assert_eq!(
            solution.lines(&formatter),
            vec!["x1 = 3 - 2*x2", "Free variable: x2"]
        );
    }

    #[test]
    fn test_parametric_expressions_from_ref_agree_with_rref() {
        let system = aug(&[&[1, 2, -1, 3], &[0, 0, 1, 5]]);
        let formatter = NumberFormatter::default();

        let via_rref = general_solution(&rref(&system));
        let via_ref = general_solution(&reduce(
            &system,
            &EliminationOptions {
                mode: Mode::Ref,
                early_exit_on_inconsistency: false,
            },
            &formatter,
        ));

        assert_eq!(via_rref.expressions, via_ref.expressions);
        assert_eq!(via_rref.free_variables, via_ref.free_variables);
    }

    #[test]
    fn test_inconsistent_line() {
        let system = aug(&[&[1, 1, 1], &[1, 1, 2]]);
        let solution = general_solution(&rref(&system));
        assert_eq!(
            solution.lines(&NumberFormatter::default()),
            vec!["No solution: the system is inconsistent."]
        );
    }
}

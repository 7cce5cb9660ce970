//! Dense matrices over exact rationals.
//!
//! Row-major storage; all elementary row operations mutate in place.
//! Engines never mutate caller-owned matrices: they clone first, and a
//! clone is a full deep copy.

use std::ops::{Index, IndexMut};

use escalon_rational::{NumberFormatter, Rational};
use num_traits::{One, Zero};

use crate::error::LinalgError;

/// Dense matrix of rationals stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<Rational>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![Rational::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = Rational::one();
        }
        m
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::MalformedMatrix`] if the grid is empty or
    /// not rectangular.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self, LinalgError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(LinalgError::MalformedMatrix);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        if rows.iter().any(|r| r.len() != num_cols) {
            return Err(LinalgError::MalformedMatrix);
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            rows: num_rows,
            cols: num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Rational] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != self.cols()`.
    #[must_use]
    pub fn mv(&self, x: &[Rational]) -> Vec<Rational> {
        assert_eq!(x.len(), self.cols);
        (0..self.rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x.iter())
                    .fold(Rational::zero(), |acc, (a, b)| acc + a * b)
            })
            .collect()
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions disagree.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.cols, other.rows);

        let mut result = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = Rational::zero();
                for k in 0..self.cols {
                    sum = sum + &self[(i, k)] * &other[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }
        result
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.cols;
        let j_start = j * self.cols;
        for k in 0..self.cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &Rational) {
        for k in 0..self.cols {
            self[(row, k)] = &self[(row, k)] * scale;
        }
    }

    /// Adds a scaled row to another: `row[target] += scale * row[source]`.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &Rational) {
        for k in 0..self.cols {
            let val = &self[(source, k)] * scale;
            self[(target, k)] = &self[(target, k)] + &val;
        }
    }

    /// Renders the whole grid through the formatter, row by row.
    #[must_use]
    pub fn snapshot(&self, formatter: &NumberFormatter) -> Vec<Vec<String>> {
        (0..self.rows)
            .map(|r| self.row(r).iter().map(|v| formatter.format(v)).collect())
            .collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.cols + col]
    }
}

/// An m×(n+1) augmented matrix `[A | b]`.
///
/// The last column is the right-hand side; `unknowns()` is `n`.
/// Construction validates rectangularity and `m >= 1`, `n >= 1`; engines
/// receive it immutably and reduce a private copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedMatrix {
    matrix: Matrix,
}

impl AugmentedMatrix {
    /// Creates an augmented matrix from full rows (coefficients plus RHS).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::MalformedMatrix`] if the grid is empty, not
    /// rectangular, or has no coefficient columns.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self, LinalgError> {
        let matrix = Matrix::from_rows(rows)?;
        if matrix.cols() < 2 {
            return Err(LinalgError::MalformedMatrix);
        }
        Ok(Self { matrix })
    }

    /// Builds `[A | b]` from a coefficient matrix and a right-hand side.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::MalformedMatrix`] if `a` has no rows or no
    /// columns, and [`LinalgError::DimensionMismatch`] if `b` does not
    /// have one entry per row of `a`.
    pub fn from_parts(a: &Matrix, b: &[Rational]) -> Result<Self, LinalgError> {
        if a.rows() == 0 || a.cols() == 0 {
            return Err(LinalgError::MalformedMatrix);
        }
        if b.len() != a.rows() {
            return Err(LinalgError::DimensionMismatch(format!(
                "matrix has {} rows but right-hand side has {} entries",
                a.rows(),
                b.len()
            )));
        }
        let mut matrix = Matrix::zeros(a.rows(), a.cols() + 1);
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                matrix[(i, j)] = a[(i, j)].clone();
            }
            matrix[(i, a.cols())] = b[i].clone();
        }
        Ok(Self { matrix })
    }

    /// Returns the number of equations (rows).
    #[must_use]
    pub fn equations(&self) -> usize {
        self.matrix.rows()
    }

    /// Returns the number of unknowns (coefficient columns).
    #[must_use]
    pub fn unknowns(&self) -> usize {
        self.matrix.cols() - 1
    }

    /// Returns the underlying grid, RHS column included.
    #[must_use]
    pub fn grid(&self) -> &Matrix {
        &self.matrix
    }
}

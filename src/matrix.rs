//! Fixed-size two-dimensional array with checked arithmetic.
//!
//! The simulator stores its generator matrix, codewords, and the precomputed
//! codeword table in `Matrix<T>`, a dense row-major container backed by a
//! single flat buffer. Keeping the buffer contiguous matters for the decode
//! hot loop, which walks every row of a `2^k x n` table per call: row-stride
//! indexing avoids the pointer chasing a `Vec<Vec<T>>` layout would incur.
//!
//! All shape-sensitive operations are checked and return `Result`. An
//! out-of-range index or a dimension mismatch is a programming defect, not a
//! condition to recover from, so the errors carry the offending coordinates
//! in their messages.

use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

use crate::error::{Error, Result};

/// Dense row-major matrix with value semantics.
///
/// Cloning produces an independent deep copy; moving transfers ownership of
/// the backing buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Matrix<T> {
    /// Creates a `rows x cols` matrix with every element set to `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Builds a matrix from nested rows.
    ///
    /// # Arguments
    ///
    /// * `rows` - Row vectors; all rows must have the same length
    ///
    /// # Returns
    ///
    /// The matrix, or an error if the input is not rectangular
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::InvalidInput(format!(
                    "Rows must be rectangular: row 0 has {} columns, row {} has {}",
                    n_cols,
                    i,
                    row.len()
                )));
            }
        }

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            data.extend(row);
        }

        Ok(Matrix {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat row-major view of the elements; row `i` occupies
    /// `[i * cols, (i + 1) * cols)`.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn check_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfRange(format!(
                "row={}, col={}, max_row={}, max_col={}",
                row, col, self.rows, self.cols
            )));
        }
        Ok(row * self.cols + col)
    }

    /// Reads the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let idx = self.check_index(row, col)?;
        Ok(&self.data[idx])
    }

    /// Writes the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.check_index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }
}

impl<T: Copy> Matrix<T> {
    /// Returns a new matrix with rows and columns swapped.
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[row * self.cols + col]);
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

impl<T: Copy + Add<Output = T>> Matrix<T> {
    /// Element-wise sum. Both operands must have identical shape.
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape(other, "addition")?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl<T: Copy + Sub<Output = T>> Matrix<T> {
    /// Element-wise difference. Both operands must have identical shape.
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape(other, "subtraction")?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Matrix<T> {
    /// Matrix product `self * other`. The column count of `self` must equal
    /// the row count of `other`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            return Err(Error::InvalidInput(format!(
                "Inner dimensions must match for multiplication: cols1={}, rows2={}",
                self.cols, other.rows
            )));
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data.push(sum);
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }
}

impl<T> Matrix<T> {
    fn check_same_shape(&self, other: &Matrix<T>, op: &str) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::InvalidInput(format!(
                "Matrices must have the same dimensions for {}: rows1={}, cols1={}, rows2={}, cols2={}",
                op, self.rows, self.cols, other.rows, other.cols
            )));
        }
        Ok(())
    }
}

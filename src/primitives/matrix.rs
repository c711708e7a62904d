//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{AjustarError, Result};
use serde::{Deserialize, Serialize};

/// A 2D matrix of numeric values (row-major storage).
///
/// The shape is fixed at construction; every row has exactly `n_cols`
/// elements.
///
/// # Examples
///
/// ```
/// use ajustar::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(AjustarError::DimensionMismatch {
                expected: format!("{rows}x{cols} = {} elements", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a slice of equally sized rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have differing widths.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(AjustarError::dimension_mismatch(
                    "row width",
                    n_cols,
                    row.len(),
                ));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(n_rows, n_cols, data)
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a Vector.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns a column as a Vector.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f32> {
    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(AjustarError::dimension_mismatch(
                "inner dimension",
                self.cols,
                other.rows,
            ));
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Matrix-vector multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn matvec(&self, vec: &Vector<f32>) -> Result<Vector<f32>> {
        if self.cols != vec.len() {
            return Err(AjustarError::dimension_mismatch(
                "n_cols",
                self.cols,
                vec.len(),
            ));
        }

        let result: Vec<f32> = (0..self.rows).map(|i| self.row(i).dot(vec)).collect();

        Ok(Vector::from_vec(result))
    }

    /// Solves the linear system Ax = b using Cholesky decomposition.
    ///
    /// The matrix must be symmetric positive definite. Accumulation runs in
    /// f64, and a pivot below `1e-12` of the largest diagonal entry is
    /// treated as singular rather than dividing by near-zero noise.
    ///
    /// # Errors
    ///
    /// Returns [`AjustarError::DimensionMismatch`] if the matrix is not
    /// square or `b` has the wrong length, and
    /// [`AjustarError::SingularMatrix`] if the matrix is not positive
    /// definite.
    pub fn cholesky_solve(&self, b: &Vector<f32>) -> Result<Vector<f32>> {
        if self.rows != self.cols {
            return Err(AjustarError::DimensionMismatch {
                expected: "square matrix".to_string(),
                actual: format!("{}x{}", self.rows, self.cols),
            });
        }
        if self.rows != b.len() {
            return Err(AjustarError::dimension_mismatch("n_rows", self.rows, b.len()));
        }

        let n = self.rows;

        let a: Vec<f64> = self.data.iter().map(|&v| f64::from(v)).collect();
        let max_diag = (0..n).map(|i| a[i * n + i]).fold(0.0_f64, f64::max);
        let tolerance = max_diag.max(1.0) * 1e-12;

        // Cholesky decomposition: A = L * L^T
        let mut l = vec![0.0_f64; n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = 0.0;

                if i == j {
                    for k in 0..j {
                        sum += l[j * n + k] * l[j * n + k];
                    }
                    let pivot = a[j * n + j] - sum;
                    if pivot <= tolerance {
                        return Err(AjustarError::SingularMatrix { pivot });
                    }
                    l[j * n + j] = pivot.sqrt();
                } else {
                    for k in 0..j {
                        sum += l[i * n + k] * l[j * n + k];
                    }
                    l[i * n + j] = (a[i * n + j] - sum) / l[j * n + j];
                }
            }
        }

        // Forward substitution: L * y = b
        let mut y = vec![0.0_f64; n];
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..i {
                sum += l[i * n + j] * y[j];
            }
            y[i] = (f64::from(b[i]) - sum) / l[i * n + i];
        }

        // Backward substitution: L^T * x = y
        let mut x = vec![0.0_f64; n];
        for i in (0..n).rev() {
            let mut sum = 0.0;
            for j in (i + 1)..n {
                sum += l[j * n + i] * x[j];
            }
            x[i] = (y[i] - sum) / l[i * n + i];
        }

        Ok(Vector::from_vec(x.into_iter().map(|v| v as f32).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_shape() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.n_rows(), 2);
        assert_eq!(m.n_cols(), 3);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let result = Matrix::from_vec(2, 3, vec![1.0, 2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.get(1, 0), 3.0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_set() {
        let mut m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        m.set(0, 1, 9.0);
        assert_eq!(m.get(0, 1), 9.0);
    }

    #[test]
    fn test_row_and_column() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.row(1).as_slice(), &[4.0, 5.0, 6.0]);
        assert_eq!(m.column(2).as_slice(), &[3.0, 6.0]);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 1), 6.0);
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.get(0, 0), 19.0);
        assert_eq!(c.get(1, 1), 50.0);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = Matrix::from_vec(2, 3, vec![0.0; 6]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![0.0; 4]).unwrap();
        assert!(a.matmul(&b).is_err());
    }

    #[test]
    fn test_matvec() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let v = Vector::from_slice(&[1.0, 1.0]);
        let r = m.matvec(&v).unwrap();
        assert_eq!(r.as_slice(), &[3.0, 7.0]);
    }

    #[test]
    fn test_cholesky_solve_identity() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).unwrap();
        let b = Vector::from_slice(&[3.0, 4.0]);
        let x = m.cholesky_solve(&b).unwrap();
        assert!((x[0] - 3.0).abs() < 1e-6);
        assert!((x[1] - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_cholesky_solve_spd() {
        // A = [[4, 2], [2, 3]], b = [10, 8] -> x = [1.75, 1.5]
        let m = Matrix::from_vec(2, 2, vec![4.0, 2.0, 2.0, 3.0]).unwrap();
        let b = Vector::from_slice(&[10.0, 8.0]);
        let x = m.cholesky_solve(&b).unwrap();
        assert!((x[0] - 1.75).abs() < 1e-5);
        assert!((x[1] - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_cholesky_solve_singular() {
        // Rank-1 matrix is not positive definite.
        let m = Matrix::from_vec(2, 2, vec![1.0, 1.0, 1.0, 1.0]).unwrap();
        let b = Vector::from_slice(&[1.0, 1.0]);
        let result = m.cholesky_solve(&b);
        assert!(matches!(
            result,
            Err(crate::error::AjustarError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_cholesky_solve_not_square() {
        let m = Matrix::from_vec(2, 3, vec![0.0; 6]).unwrap();
        let b = Vector::from_slice(&[1.0, 1.0]);
        assert!(m.cholesky_solve(&b).is_err());
    }
}

mod ops;
mod square;
mod util;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::{Complex, Error};

/// Selects rows or columns in the structural operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// Dense heap-allocated matrix of [`Complex`] entries.
///
/// Row-major `Vec<Complex>` storage with dimensions fixed at construction
/// (at least 1×1). Elements are addressed 0-based through `m[(row, col)]`;
/// the row/column operations ([`swap`](Self::swap),
/// [`add_scaled`](Self::add_scaled), [`remove`](Self::remove),
/// [`remove_row_column`](Self::remove_row_column)) take 1-based line
/// numbers.
///
/// # Examples
///
/// ```
/// use cmatrix::{Complex, Matrix};
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], Complex::new(2.0, 0.0));
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.determinant(), Ok(Complex::new(-2.0, 0.0)));
///
/// let z = Matrix::zeros(2, 3);
/// assert_eq!(z[(1, 2)], Complex::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<Complex>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl Matrix {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// Panics if either dimension is 0.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        assert!(
            nrows >= 1 && ncols >= 1,
            "matrix dimensions must be at least 1x1, got {}x{}",
            nrows,
            ncols,
        );
        Self {
            data: vec![Complex::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use cmatrix::{Complex, Matrix};
    /// let id = Matrix::identity(3);
    /// assert_eq!(id[(1, 1)], Complex::new(1.0, 0.0));
    /// assert_eq!(id[(1, 2)], Complex::new(0.0, 0.0));
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = Complex::one();
        }
        m
    }

    /// Create a matrix from a row-major 2D array of anything convertible to
    /// [`Complex`].
    ///
    /// ```
    /// use cmatrix::{Complex, Matrix};
    ///
    /// let m = Matrix::new([[Complex::new(1.0, 1.0), Complex::i()]]);
    /// assert_eq!(m.nrows(), 1);
    /// assert_eq!(m.ncols(), 2);
    /// ```
    pub fn new<T, const M: usize, const N: usize>(rows: [[T; N]; M]) -> Self
    where
        T: Into<Complex> + Copy,
    {
        Self::from_fn(M, N, |i, j| rows[i][j])
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use cmatrix::{Complex, Matrix};
    /// let m = Matrix::from_fn(2, 2, |i, j| Complex::new(i as f64, j as f64));
    /// assert_eq!(m[(1, 0)], Complex::new(1.0, 0.0));
    /// ```
    pub fn from_fn<T: Into<Complex>>(
        nrows: usize,
        ncols: usize,
        f: impl Fn(usize, usize) -> T,
    ) -> Self {
        let mut m = Self::zeros(nrows, ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                m[(i, j)] = f(i, j).into();
            }
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use cmatrix::{Complex, Matrix};
    /// let vals = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0].map(|x| Complex::new(x, 0.0));
    /// let m = Matrix::from_rows(2, 3, &vals);
    /// assert_eq!(m[(1, 0)], Complex::new(4.0, 0.0));
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[Complex]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        let mut m = Self::zeros(nrows, ncols);
        m.data.copy_from_slice(row_major);
        m
    }

    /// A 1×1 matrix holding `value`.
    #[inline]
    pub fn from_scalar(value: impl Into<Complex>) -> Self {
        Self {
            data: vec![value.into()],
            nrows: 1,
            ncols: 1,
        }
    }
}

impl Default for Matrix {
    /// The 1×1 matrix `[[1]]`.
    fn default() -> Self {
        Self::from_scalar(Complex::one())
    }
}

// ── Shape ───────────────────────────────────────────────────────────

impl Matrix {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether the matrix is a single row or a single column.
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.nrows == 1 || self.ncols == 1
    }

    /// Copy the entries out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<Complex>> {
        self.data.chunks(self.ncols).map(|row| row.to_vec()).collect()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        row * self.ncols + col
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Complex;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Complex {
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Complex {
        let k = self.offset(row, col);
        &mut self.data[k]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl From<Complex> for Matrix {
    #[inline]
    fn from(value: Complex) -> Self {
        Self::from_scalar(value)
    }
}

impl From<f64> for Matrix {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_scalar(value)
    }
}

impl TryFrom<Vec<Vec<Complex>>> for Matrix {
    type Error = Error;

    /// Build from rows that must all have the same non-zero length.
    ///
    /// ```
    /// use cmatrix::{Complex, Error, Matrix};
    ///
    /// let ragged = vec![vec![Complex::i(); 2], vec![Complex::i(); 3]];
    /// assert_eq!(
    ///     Matrix::try_from(ragged),
    ///     Err(Error::ShapeMismatch { left: (2, 2), right: (2, 3) }),
    /// );
    /// ```
    fn try_from(rows: Vec<Vec<Complex>>) -> Result<Self, Self::Error> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows == 0 || ncols == 0 {
            return Err(Error::ShapeMismatch {
                left: (nrows, ncols),
                right: (1, 1),
            });
        }
        if let Some(bad) = rows.iter().find(|row| row.len() != ncols) {
            return Err(Error::ShapeMismatch {
                left: (nrows, ncols),
                right: (nrows, bad.len()),
            });
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            nrows,
            ncols,
        })
    }
}

impl From<Matrix> for Vec<Vec<Complex>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}

impl TryFrom<Matrix> for Complex {
    type Error = Error;

    /// Narrow to a scalar through the determinant.
    ///
    /// ```
    /// use cmatrix::{Complex, Matrix};
    /// let m = Matrix::new([[2.0, 0.0], [0.0, 3.0]]);
    /// assert_eq!(Complex::try_from(m), Ok(Complex::new(6.0, 0.0)));
    /// ```
    fn try_from(mut m: Matrix) -> Result<Self, Self::Error> {
        m.determinant_in_place()
    }
}

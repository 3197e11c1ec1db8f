use num_traits::{One, Zero};

use super::Matrix;
use crate::{Complex, Error};

impl Matrix {
    fn ensure_square(&self) -> Result<(), Error> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            })
        }
    }

    /// Integer matrix power by repeated multiplication.
    ///
    /// `pow(1)` is a copy of `self`. Exponents below 1 are rejected.
    ///
    /// ```
    /// use cmatrix::{Error, Matrix};
    ///
    /// let m = Matrix::new([[1.0, 1.0], [0.0, 1.0]]);
    /// assert_eq!(m.pow(3).unwrap(), Matrix::new([[1.0, 3.0], [0.0, 1.0]]));
    /// assert_eq!(m.pow(0), Err(Error::InvalidExponent(0)));
    /// ```
    pub fn pow(&self, n: i32) -> Result<Matrix, Error> {
        self.ensure_square()?;
        if n < 1 {
            return Err(Error::InvalidExponent(n));
        }
        trace!(exponent = n, size = self.nrows, "matrix power");
        let mut acc = self.clone();
        for _ in 1..n {
            acc = self.checked_mul(&acc)?;
        }
        Ok(acc)
    }

    /// Reduce to upper-triangular form in place and return `self`.
    ///
    /// Gaussian elimination without pivoting. For each diagonal position `k`
    /// the entries below `a[k][k]` are cleared by adding a multiple of row
    /// `k` to the rows beneath it, working on the trailing submatrix only;
    /// the cleared entries are then set to exactly zero. No extra storage is
    /// allocated. A zero pivot is not detected; the division yields
    /// infinities or NaNs that propagate into the result.
    ///
    /// ```
    /// use cmatrix::Matrix;
    ///
    /// let mut m = Matrix::new([[2.0, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]]);
    /// m.to_upper_triangular().unwrap();
    /// assert!(m.is_upper_triangular());
    /// assert_eq!(m, Matrix::new([[2.0, 1.0, 1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 2.0]]));
    /// ```
    pub fn to_upper_triangular(&mut self) -> Result<&mut Self, Error> {
        self.ensure_square()?;
        let n = self.nrows;
        for k in 0..n.saturating_sub(1) {
            let pivot = self[(k, k)];
            trace!(step = k, size = n - k, pivot = %pivot, "eliminating column");
            for i in k + 1..n {
                let factor = -self[(i, k)] / pivot;
                for j in k + 1..n {
                    let v = factor * self[(k, j)];
                    self[(i, j)] += v;
                }
                self[(i, k)] = Complex::zero();
            }
        }
        Ok(self)
    }

    /// Determinant, computed on a copy.
    ///
    /// Product of the diagonal of [`to_upper_triangular`](Self::to_upper_triangular).
    ///
    /// ```
    /// use cmatrix::{Complex, Matrix};
    /// let m = Matrix::new([[Complex::new(1.0, 1.0), Complex::from(2.0)],
    ///                      [Complex::i(), Complex::new(1.0, -1.0)]]);
    /// // (1+i)(1-i) - 2i = 2 - 2i
    /// assert_eq!(m.determinant(), Ok(Complex::new(2.0, -2.0)));
    /// ```
    pub fn determinant(&self) -> Result<Complex, Error> {
        self.clone().determinant_in_place()
    }

    /// Determinant, triangularizing `self` on the way.
    ///
    /// After a successful call the receiver holds its upper-triangular form.
    /// Use [`determinant`](Self::determinant) to leave the matrix untouched.
    pub fn determinant_in_place(&mut self) -> Result<Complex, Error> {
        self.to_upper_triangular()?;
        let mut det = Complex::one();
        for i in 0..self.nrows {
            det *= self[(i, i)];
        }
        Ok(det)
    }

    /// Square with every entry below the diagonal equal to zero.
    pub fn is_upper_triangular(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 1..self.nrows {
            for j in 0..i {
                if !self[(i, j)].is_zero() {
                    return false;
                }
            }
        }
        true
    }
}

use core::ops::{Add, Div, DivAssign, Mul, MulAssign, Sub};

use num_traits::Zero;

use super::Matrix;
use crate::{Complex, Error};

// ── Fallible element-wise and matrix products ───────────────────────

impl Matrix {
    /// Shape check shared by addition and subtraction.
    ///
    /// Operands must be transpose-compatible (`left` is M×N and `right` is
    /// N×M). Entries are paired index by index, so the shapes must also be
    /// equal, which together leaves same-size square operands.
    fn check_elementwise(&self, rhs: &Matrix) -> Result<(), Error> {
        let mismatch = Error::ShapeMismatch {
            left: self.shape(),
            right: rhs.shape(),
        };
        if self.nrows != rhs.ncols || self.ncols != rhs.nrows {
            return Err(mismatch);
        }
        if self.shape() != rhs.shape() {
            return Err(mismatch);
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Matrix, f: impl Fn(Complex, Complex) -> Complex) -> Matrix {
        Matrix {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise sum.
    ///
    /// ```
    /// use cmatrix::{Complex, Error, Matrix};
    ///
    /// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::identity(2);
    /// assert_eq!(a.checked_add(&b).unwrap()[(1, 1)], Complex::new(5.0, 0.0));
    ///
    /// let r = Matrix::zeros(2, 3);
    /// assert!(matches!(r.checked_add(&r), Err(Error::ShapeMismatch { .. })));
    /// ```
    pub fn checked_add(&self, rhs: &Matrix) -> Result<Matrix, Error> {
        self.check_elementwise(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Element-wise difference. Same shape rules as [`checked_add`](Self::checked_add).
    pub fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix, Error> {
        self.check_elementwise(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Matrix product: (M×N) · (N×P) → (M×P).
    ///
    /// ```
    /// use cmatrix::{Error, Matrix};
    ///
    /// let a = Matrix::zeros(2, 3);
    /// assert_eq!(a.checked_mul(&Matrix::zeros(3, 2)).unwrap().shape(), (2, 2));
    /// assert_eq!(
    ///     a.checked_mul(&Matrix::zeros(2, 2)),
    ///     Err(Error::ShapeMismatch { left: (2, 3), right: (2, 2) }),
    /// );
    /// ```
    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix, Error> {
        if self.ncols != rhs.nrows {
            return Err(Error::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let mut out = Matrix::zeros(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let mut sum = Complex::zero();
                for e in 0..self.ncols {
                    sum += self[(i, e)] * rhs[(e, j)];
                }
                out[(i, j)] = sum;
            }
        }
        Ok(out)
    }
}

// ── Operator forms (panic on shape mismatch) ────────────────────────

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<&Matrix> for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: &Matrix) -> Matrix {
                match self.$checked(rhs) {
                    Ok(m) => m,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl $trait for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Matrix> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: &Matrix) -> Matrix {
                (&self).$method(rhs)
            }
        }

        impl $trait<Matrix> for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                self.$method(&rhs)
            }
        }
    };
}

impl_matrix_binop!(Add, add, checked_add);
impl_matrix_binop!(Sub, sub, checked_sub);
impl_matrix_binop!(Mul, mul, checked_mul);

// ── Scalar multiplication / division ────────────────────────────────

impl Mul<Complex> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Complex) -> Matrix {
        self.map(|z| z * rhs)
    }
}

impl Mul<Complex> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Complex) -> Matrix {
        &self * rhs
    }
}

impl Mul<&Matrix> for Complex {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.map(|z| self * z)
    }
}

impl Mul<Matrix> for Complex {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        self * &rhs
    }
}

impl Div<Complex> for &Matrix {
    type Output = Matrix;

    fn div(self, rhs: Complex) -> Matrix {
        self.map(|z| z / rhs)
    }
}

impl Div<Complex> for Matrix {
    type Output = Matrix;

    fn div(self, rhs: Complex) -> Matrix {
        &self / rhs
    }
}

impl MulAssign<Complex> for Matrix {
    fn mul_assign(&mut self, rhs: Complex) {
        for z in self.data.iter_mut() {
            *z *= rhs;
        }
    }
}

impl DivAssign<Complex> for Matrix {
    fn div_assign(&mut self, rhs: Complex) {
        for z in self.data.iter_mut() {
            *z /= rhs;
        }
    }
}

// Real scalars lift to `Complex` first.

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self * Complex::from(rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        &self * Complex::from(rhs)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        Complex::from(self) * rhs
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        Complex::from(self) * &rhs
    }
}

impl Div<f64> for &Matrix {
    type Output = Matrix;

    fn div(self, rhs: f64) -> Matrix {
        self / Complex::from(rhs)
    }
}

impl Div<f64> for Matrix {
    type Output = Matrix;

    fn div(self, rhs: f64) -> Matrix {
        &self / Complex::from(rhs)
    }
}

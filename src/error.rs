/// Errors from matrix and complex-number operations.
///
/// Returned by the fallible constructors, the `checked_*` arithmetic methods,
/// triangularization, determinant and power.
///
/// ```
/// use cmatrix::{Error, Matrix};
///
/// let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// assert_eq!(
///     a.determinant().unwrap_err(),
///     Error::NotSquare { nrows: 2, ncols: 3 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Operand shapes are incompatible, given as `(rows, cols)`.
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Operation requires a square matrix.
    NotSquare { nrows: usize, ncols: usize },
    /// Display-form tag does not name a known form.
    InvalidForm,
    /// Matrix power requires an exponent of at least 1.
    InvalidExponent(i32),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ShapeMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Error::NotSquare { nrows, ncols } => {
                write!(f, "matrix is not square: {}x{}", nrows, ncols)
            }
            Error::InvalidForm => write!(f, "unknown complex number form"),
            Error::InvalidExponent(n) => write!(f, "power must be >= 1, got {}", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display() {
        let e = Error::ShapeMismatch {
            left: (2, 3),
            right: (2, 2),
        };
        assert_eq!(format!("{}", e), "dimension mismatch: 2x3 and 2x2");
        assert_eq!(
            format!("{}", Error::NotSquare { nrows: 1, ncols: 4 }),
            "matrix is not square: 1x4"
        );
        assert_eq!(format!("{}", Error::InvalidExponent(0)), "power must be >= 1, got 0");
    }
}

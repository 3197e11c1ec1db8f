use alloc::vec::Vec;
use core::fmt;

use super::{Axis, Matrix};
use crate::Complex;

// ── Map / transpose ─────────────────────────────────────────────────

impl Matrix {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use cmatrix::{Complex, Matrix};
    /// let m = Matrix::new([[1.0, -2.0]]);
    /// let c = m.map(|z| z.conjugate() + Complex::i());
    /// assert_eq!(c[(0, 1)], Complex::new(-2.0, 1.0));
    /// ```
    pub fn map(&self, f: impl Fn(Complex) -> Complex) -> Matrix {
        let data: Vec<Complex> = self.data.iter().map(|&z| f(z)).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use cmatrix::Matrix;
    /// let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 0)], a[(0, 2)]);
    /// ```
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}

// ── Row / column manipulation (1-based) ─────────────────────────────

impl Matrix {
    fn line_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.nrows,
            Axis::Column => self.ncols,
        }
    }

    /// Panics unless `line` is a valid 1-based row/column number.
    fn check_line(&self, axis: Axis, line: usize) {
        let count = self.line_count(axis);
        assert!(
            line >= 1 && line <= count,
            "{:?} {} out of range 1..={}",
            axis,
            line,
            count,
        );
    }

    /// Swap two rows or columns in place (1-based) and return `self`.
    ///
    /// ```
    /// use cmatrix::{Axis, Complex, Matrix};
    /// let mut m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// m.swap(Axis::Row, 1, 2).swap(Axis::Column, 1, 2);
    /// assert_eq!(m, Matrix::new([[4.0, 3.0], [2.0, 1.0]]));
    /// ```
    pub fn swap(&mut self, axis: Axis, a: usize, b: usize) -> &mut Self {
        self.check_line(axis, a);
        self.check_line(axis, b);
        if a != b {
            match axis {
                Axis::Row => {
                    for j in 0..self.ncols {
                        let (x, y) = (self.offset(a - 1, j), self.offset(b - 1, j));
                        self.data.swap(x, y);
                    }
                }
                Axis::Column => {
                    for i in 0..self.nrows {
                        let (x, y) = (self.offset(i, a - 1), self.offset(i, b - 1));
                        self.data.swap(x, y);
                    }
                }
            }
        }
        self
    }

    /// `target += scale * source` for two rows or columns (1-based), in
    /// place. A row operation of this kind leaves the determinant unchanged.
    ///
    /// ```
    /// use cmatrix::{Axis, Complex, Matrix};
    /// let mut m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// m.add_scaled(Axis::Row, 2, Complex::from(-3.0), 1);
    /// assert_eq!(m, Matrix::new([[1.0, 2.0], [0.0, -2.0]]));
    /// ```
    pub fn add_scaled(
        &mut self,
        axis: Axis,
        target: usize,
        scale: Complex,
        source: usize,
    ) -> &mut Self {
        self.check_line(axis, target);
        self.check_line(axis, source);
        match axis {
            Axis::Row => {
                for j in 0..self.ncols {
                    let v = scale * self[(source - 1, j)];
                    self[(target - 1, j)] += v;
                }
            }
            Axis::Column => {
                for i in 0..self.nrows {
                    let v = scale * self[(i, source - 1)];
                    self[(i, target - 1)] += v;
                }
            }
        }
        self
    }

    /// Copy of the matrix without one row or column (1-based).
    ///
    /// Panics if the line is out of range or is the only one left.
    ///
    /// ```
    /// use cmatrix::{Axis, Matrix};
    /// let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.remove(Axis::Column, 2), Matrix::new([[1.0, 3.0], [4.0, 6.0]]));
    /// assert_eq!(m.remove(Axis::Row, 1), Matrix::new([[4.0, 5.0, 6.0]]));
    /// ```
    pub fn remove(&self, axis: Axis, line: usize) -> Matrix {
        self.check_line(axis, line);
        assert!(
            self.line_count(axis) > 1,
            "cannot remove the only {:?} of a matrix",
            axis,
        );
        let skip = line - 1;
        match axis {
            Axis::Row => Matrix::from_fn(self.nrows - 1, self.ncols, |i, j| {
                self[(if i < skip { i } else { i + 1 }, j)]
            }),
            Axis::Column => Matrix::from_fn(self.nrows, self.ncols - 1, |i, j| {
                self[(i, if j < skip { j } else { j + 1 })]
            }),
        }
    }

    /// Minor: copy without row `row` and column `col` (both 1-based).
    pub fn remove_row_column(&self, row: usize, col: usize) -> Matrix {
        self.remove(Axis::Row, row).remove(Axis::Column, col)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for Matrix {
    /// Entries separated by tabs, rows by newlines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.ncols {
                if j > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", self[(i, j)])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    fn sample() -> Matrix {
        Matrix::from_fn(3, 3, |i, j| c((i * 3 + j) as f64, i as f64))
    }

    #[test]
    fn map() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let neg = m.map(|z| -z);
        assert_eq!(neg[(1, 1)], c(-4.0, 0.0));
    }

    #[test]
    fn transpose() {
        let a = Matrix::new([[c(1.0, 1.0), c(2.0, 0.0), c(3.0, -1.0)]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 1));
        assert_eq!(t[(0, 0)], c(1.0, 1.0));
        assert_eq!(t[(2, 0)], c(3.0, -1.0));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn swap_rows_and_columns() {
        let mut m = sample();
        m.swap(Axis::Row, 1, 3);
        assert_eq!(m[(0, 0)], c(6.0, 2.0));
        assert_eq!(m[(2, 0)], c(0.0, 0.0));

        m.swap(Axis::Column, 1, 2);
        assert_eq!(m[(0, 0)], c(7.0, 2.0));
        assert_eq!(m[(0, 1)], c(6.0, 2.0));
    }

    #[test]
    fn swap_same_line_is_noop() {
        let mut m = sample();
        m.swap(Axis::Row, 2, 2);
        assert_eq!(m, sample());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn swap_zero_index() {
        let mut m = sample();
        m.swap(Axis::Row, 0, 1);
    }

    #[test]
    fn add_scaled_column() {
        let mut m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        m.add_scaled(Axis::Column, 1, Complex::i(), 2);
        assert_eq!(m[(0, 0)], c(1.0, 2.0));
        assert_eq!(m[(1, 0)], c(3.0, 4.0));
        assert_eq!(m[(0, 1)], c(2.0, 0.0));
    }

    #[test]
    fn add_scaled_chains() {
        let mut m = Matrix::new([[2.0, 1.0], [4.0, 3.0], [6.0, 5.0]]);
        m.add_scaled(Axis::Row, 2, c(-2.0, 0.0), 1)
            .add_scaled(Axis::Row, 3, c(-3.0, 0.0), 1);
        assert_eq!(m, Matrix::new([[2.0, 1.0], [0.0, 1.0], [0.0, 2.0]]));
    }

    #[test]
    fn remove_lines() {
        let m = sample();
        let r = m.remove(Axis::Row, 2);
        assert_eq!(r.shape(), (2, 3));
        assert_eq!(r[(1, 0)], c(6.0, 2.0));

        let k = m.remove(Axis::Column, 3);
        assert_eq!(k.shape(), (3, 2));
        assert_eq!(k[(2, 1)], c(7.0, 2.0));
        // Original untouched
        assert_eq!(m, sample());
    }

    #[test]
    #[should_panic(expected = "only Row")]
    fn remove_last_row() {
        let m = Matrix::new([[1.0, 2.0]]);
        let _ = m.remove(Axis::Row, 1);
    }

    #[test]
    fn minor_of_identity() {
        let minor = Matrix::identity(3).remove_row_column(1, 1);
        assert_eq!(minor, Matrix::identity(2));

        let m = sample().remove_row_column(2, 3);
        assert_eq!(m, Matrix::new([[c(0.0, 0.0), c(1.0, 0.0)], [c(6.0, 2.0), c(7.0, 2.0)]]));
    }

    #[test]
    fn display() {
        let m = Matrix::new([[c(1.0, 0.0), c(0.0, -1.0)], [c(2.5, 2.0), c(0.0, 0.0)]]);
        assert_eq!(m.to_string(), "1\t-i\n2.5+2i\t0");
    }
}

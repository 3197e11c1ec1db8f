use core::f64::consts::PI;
use core::fmt;

use super::{Complex, ComplexForm};
use crate::Matrix;

impl fmt::Display for Complex {
    /// Render in the number's current form.
    ///
    /// ```
    /// use cmatrix::{Complex, ComplexForm};
    ///
    /// assert_eq!(Complex::new(3.0, -4.0).to_string(), "3-4i");
    /// assert_eq!(Complex::new(0.0, 1.0).to_string(), "i");
    /// assert_eq!(
    ///     Complex::new(3.0, 4.0).as_form(ComplexForm::Matrix).to_string(),
    ///     "3\t4\n-4\t3",
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form {
            ComplexForm::Algebraic => self.fmt_algebraic(f),
            ComplexForm::Exponential => self.fmt_exponential(f),
            ComplexForm::Trigonometric => write!(
                f,
                "{}(cos({})+i*sin({}))",
                self.magnitude, self.angle, self.angle
            ),
            ComplexForm::Matrix => {
                let (re, im) = (self.re(), self.im());
                let m = Matrix::new([[re, im], [-im, re]]);
                write!(f, "{}", m)
            }
        }
    }
}

impl Complex {
    fn fmt_algebraic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (self.re(), self.im());
        if re != 0.0 {
            write!(f, "{}", re)?;
        } else if self.is_real() {
            f.write_str("0")?;
        }

        if im == 0.0 {
            Ok(())
        } else if im == 1.0 {
            f.write_str(if re != 0.0 { "+i" } else { "i" })
        } else if im == -1.0 {
            f.write_str("-i")
        } else if im > 0.0 && re != 0.0 {
            write!(f, "+{}i", im)
        } else {
            write!(f, "{}i", im)
        }
    }

    fn fmt_exponential(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, a) = (self.magnitude, self.angle);
        if a == 0.0 {
            write!(f, "{}", r)
        } else if a == PI {
            write!(f, "-{}", r)
        } else if a < 0.0 {
            write!(f, "{}e^(-i{})", r, -a)
        } else {
            write!(f, "{}e^(i{})", r, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn algebraic() {
        assert_eq!(Complex::new(3.0, 4.0).to_string(), "3+4i");
        assert_eq!(Complex::new(3.0, -4.5).to_string(), "3-4.5i");
        assert_eq!(Complex::new(2.0, 0.0).to_string(), "2");
        assert_eq!(Complex::new(0.0, 0.0).to_string(), "0");
        assert_eq!(Complex::new(0.0, 2.0).to_string(), "2i");
        assert_eq!(Complex::new(0.0, -2.0).to_string(), "-2i");
    }

    #[test]
    fn algebraic_unit_imaginary() {
        assert_eq!(Complex::new(1.5, 1.0).to_string(), "1.5+i");
        assert_eq!(Complex::new(1.5, -1.0).to_string(), "1.5-i");
        assert_eq!(Complex::new(0.0, 1.0).to_string(), "i");
        assert_eq!(Complex::new(0.0, -1.0).to_string(), "-i");
        assert_eq!(Complex::default().to_string(), "i");
    }

    #[test]
    fn exponential() {
        let z = Complex::from_polar(2.0, 0.5, ComplexForm::Exponential);
        assert_eq!(z.to_string(), "2e^(i0.5)");
        let z = Complex::from_polar(2.0, -0.5, ComplexForm::Exponential);
        assert_eq!(z.to_string(), "2e^(-i0.5)");
        let z = Complex::new(3.0, 0.0).as_form(ComplexForm::Exponential);
        assert_eq!(z.to_string(), "3");
        let z = Complex::new(-3.0, 0.0).as_form(ComplexForm::Exponential);
        assert_eq!(z.to_string(), "-3");
    }

    #[test]
    fn negative_zero() {
        let z = -Complex::new(0.0, 0.0);
        assert_eq!(z.as_form(ComplexForm::Exponential).to_string(), "0");
        assert_eq!(z.to_string(), "0");
        let p = Complex::from_polar(0.0, PI, ComplexForm::Exponential);
        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn trigonometric() {
        let z = Complex::from_polar(2.0, 0.5, ComplexForm::Trigonometric);
        assert_eq!(z.to_string(), "2(cos(0.5)+i*sin(0.5))");
    }

    #[test]
    fn matrix_form() {
        let z = Complex::new(1.0, -2.0).as_form(ComplexForm::Matrix);
        assert_eq!(z.to_string(), "1\t-2\n2\t1");
    }
}

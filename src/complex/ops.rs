use core::f64::consts::TAU;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use super::{round_half_even, Complex};

// Sums and differences are taken on the (rounded) algebraic parts, products
// and quotients on the polar pair. The result is always tagged with the form
// of the left operand, or of the complex operand when the left one is real.

// ── Negation ────────────────────────────────────────────────────────

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Complex::from_algebraic(-self.re(), -self.im(), self.form)
    }
}

// ── Addition / subtraction ──────────────────────────────────────────

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Complex::from_algebraic(self.re() + rhs.re(), self.im() + rhs.im(), self.form)
    }
}

impl Add<f64> for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        Complex::from_algebraic(self.re() + rhs, self.im(), self.form)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::from_algebraic(self + rhs.re(), rhs.im(), rhs.form)
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Complex::from_algebraic(self.re() - rhs.re(), self.im() - rhs.im(), self.form)
    }
}

impl Sub<f64> for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Complex::from_algebraic(self.re() - rhs, self.im(), self.form)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::from_algebraic(self - rhs.re(), -rhs.im(), rhs.form)
    }
}

// ── Multiplication / division (polar) ───────────────────────────────

impl Mul for Complex {
    type Output = Self;

    /// Multiply magnitudes and add angles. The summed angle is reduced
    /// modulo 2π but not brought back into `(-π, π]`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Complex::from_polar(
            self.magnitude * rhs.magnitude,
            (self.angle + rhs.angle) % TAU,
            self.form,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Complex::from_polar(self.magnitude * rhs, self.angle, self.form)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::from_polar(self * rhs.magnitude, rhs.angle, rhs.form)
    }
}

impl Div for Complex {
    type Output = Self;

    /// Divide magnitudes and subtract angles, reduced like [`Mul`].
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Complex::from_polar(
            self.magnitude / rhs.magnitude,
            (self.angle - rhs.angle) % TAU,
            self.form,
        )
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Complex::from_polar(self.magnitude / rhs, self.angle, self.form)
    }
}

impl Div<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        Complex::from_polar(self / rhs.magnitude, -rhs.angle, rhs.form)
    }
}

// ── Remainder ───────────────────────────────────────────────────────

impl Rem for Complex {
    type Output = Self;

    /// Gaussian-integer remainder: `self - q * rhs`, where `q` is `self / rhs`
    /// with both parts rounded to the nearest integer (ties to even).
    ///
    /// ```
    /// use cmatrix::Complex;
    ///
    /// let r = Complex::new(7.0, 5.0) % Complex::new(3.0, 0.0);
    /// assert_eq!(r, Complex::new(1.0, -1.0));
    /// ```
    fn rem(self, rhs: Self) -> Self {
        let q = self / rhs;
        let lattice = Complex::from_algebraic(
            round_half_even(q.re()),
            round_half_even(q.im()),
            self.form,
        );
        self - lattice * rhs
    }
}

impl Rem<f64> for Complex {
    type Output = Self;

    /// Component-wise floating remainder.
    #[inline]
    fn rem(self, rhs: f64) -> Self {
        Complex::from_algebraic(self.re() % rhs, self.im() % rhs, self.form)
    }
}

impl Rem<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn rem(self, rhs: Complex) -> Complex {
        Complex::from_algebraic(self, 0.0, rhs.form) % rhs
    }
}

// ── Compound assignment ─────────────────────────────────────────────

macro_rules! impl_assign_op {
    ($($trait:ident, $method:ident, $op:tt, $rhs:ty;)*) => {
        $(
            impl $trait<$rhs> for Complex {
                #[inline]
                fn $method(&mut self, rhs: $rhs) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

impl_assign_op! {
    AddAssign, add_assign, +, Complex;
    AddAssign, add_assign, +, f64;
    SubAssign, sub_assign, -, Complex;
    SubAssign, sub_assign, -, f64;
    MulAssign, mul_assign, *, Complex;
    MulAssign, mul_assign, *, f64;
    DivAssign, div_assign, /, Complex;
    DivAssign, div_assign, /, f64;
    RemAssign, rem_assign, %, Complex;
    RemAssign, rem_assign, %, f64;
}

mod display;
mod ops;

use core::f64::consts::{FRAC_PI_2, PI, TAU};
use core::str::FromStr;

use num_traits::{Float, One, Zero};

use crate::Error;

/// Representation a [`Complex`] is rendered in.
///
/// The tag never changes the numeric value. Arithmetic results inherit the
/// form of their left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComplexForm {
    /// `a+bi`
    #[default]
    Algebraic,
    /// `Re^(iA)`
    Exponential,
    /// The 2×2 real matrix `[[a, b], [-b, a]]`.
    Matrix,
    /// `R(cos(A)+i*sin(A))`
    Trigonometric,
}

impl ComplexForm {
    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ComplexForm::Algebraic => "algebraic",
            ComplexForm::Exponential => "exponential",
            ComplexForm::Matrix => "matrix",
            ComplexForm::Trigonometric => "trigonometric",
        }
    }

    /// Whether constructor arguments in this form are read as `(R, A)`
    /// rather than `(re, im)`.
    #[inline]
    pub const fn is_polar(self) -> bool {
        matches!(self, ComplexForm::Exponential | ComplexForm::Trigonometric)
    }
}

impl core::fmt::Display for ComplexForm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComplexForm {
    type Err = Error;

    /// Parse a form name, ignoring ASCII case.
    ///
    /// ```
    /// use cmatrix::{ComplexForm, Error};
    ///
    /// assert_eq!("Exponential".parse::<ComplexForm>(), Ok(ComplexForm::Exponential));
    /// assert_eq!("polar".parse::<ComplexForm>(), Err(Error::InvalidForm));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            ComplexForm::Algebraic,
            ComplexForm::Exponential,
            ComplexForm::Matrix,
            ComplexForm::Trigonometric,
        ]
        .into_iter()
        .find(|form| form.name().eq_ignore_ascii_case(s.trim()))
        .ok_or(Error::InvalidForm)
    }
}

impl TryFrom<u8> for ComplexForm {
    type Error = Error;

    /// Map a stored discriminant (declaration order) back to a form.
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(ComplexForm::Algebraic),
            1 => Ok(ComplexForm::Exponential),
            2 => Ok(ComplexForm::Matrix),
            3 => Ok(ComplexForm::Trigonometric),
            _ => Err(Error::InvalidForm),
        }
    }
}

/// Complex number carrying both its algebraic and polar coordinates.
///
/// All four coordinates are computed once at construction from whichever
/// pair was supplied and are never changed independently. [`re`](Self::re)
/// and [`im`](Self::im) round to 13 decimal digits, which hides the noise a
/// polar round trip leaves in the last bits.
///
/// Equality compares the rounded algebraic parts and ignores the form tag.
/// Ordering compares magnitudes only, so two distinct numbers on the same
/// circle are neither less nor greater than each other.
///
/// The default value is the imaginary unit.
///
/// # Examples
///
/// ```
/// use cmatrix::{Complex, ComplexForm};
///
/// let z = Complex::new(3.0, 4.0);
/// assert_eq!(z.magnitude(), 5.0);
///
/// let w = Complex::from_polar(2.0, std::f64::consts::FRAC_PI_2, ComplexForm::Exponential);
/// assert_eq!(w.re(), 0.0);
/// assert_eq!(w.im(), 2.0);
///
/// assert_eq!(Complex::default(), Complex::new(0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Complex {
    re: f64,
    im: f64,
    magnitude: f64,
    angle: f64,
    form: ComplexForm,
}

// ── Constructors ────────────────────────────────────────────────────

impl Complex {
    /// `re + im·i` in algebraic form.
    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self::from_algebraic(re, im, ComplexForm::Algebraic)
    }

    /// The imaginary unit `i`.
    #[inline]
    pub const fn i() -> Self {
        Self {
            re: 0.0,
            im: 1.0,
            magnitude: 1.0,
            angle: FRAC_PI_2,
            form: ComplexForm::Algebraic,
        }
    }

    /// Build from real and imaginary parts, tagged with `form`.
    ///
    /// The angle is `atan2(im, re)` mapped into `(-π, π]`. Zero, including
    /// `-0.0` parts, always gets angle `0`.
    pub fn from_algebraic(re: f64, im: f64, form: ComplexForm) -> Self {
        let magnitude = Float::hypot(re, im);
        let mut angle = Float::atan2(im, re);
        if magnitude == 0.0 {
            angle = 0.0;
        } else if angle == -PI {
            angle = PI;
        }
        Self {
            re,
            im,
            magnitude,
            angle,
            form,
        }
    }

    /// Build from magnitude and angle (radians), tagged with `form`.
    ///
    /// The angle is reduced modulo 2π, keeping its sign. A negative
    /// magnitude is folded into the angle so that the stored magnitude
    /// stays the modulus of the value. A zero magnitude gives angle `0`.
    ///
    /// ```
    /// use cmatrix::{Complex, ComplexForm};
    /// use std::f64::consts::PI;
    ///
    /// let z = Complex::from_polar(1.0, 5.0 * PI, ComplexForm::Exponential);
    /// assert_eq!(z.re(), -1.0);
    /// assert_eq!(z.im(), 0.0);
    /// ```
    pub fn from_polar(magnitude: f64, angle: f64, form: ComplexForm) -> Self {
        let angle = angle % TAU;
        let (sin, cos) = Float::sin_cos(angle);
        if magnitude <= 0.0 {
            return Self::from_algebraic(magnitude * cos, magnitude * sin, form);
        }
        Self {
            re: magnitude * cos,
            im: magnitude * sin,
            magnitude,
            angle,
            form,
        }
    }

    /// Build from a pair whose meaning depends on `form`.
    ///
    /// `Algebraic` and `Matrix` read `(re, im)`; `Exponential` and
    /// `Trigonometric` read `(magnitude, angle)`.
    ///
    /// ```
    /// use cmatrix::{Complex, ComplexForm};
    ///
    /// let a = Complex::with_form(0.0, 2.0, ComplexForm::Matrix);
    /// let b = Complex::with_form(2.0, std::f64::consts::FRAC_PI_2, ComplexForm::Trigonometric);
    /// assert_eq!(a, b);
    /// ```
    pub fn with_form(a: f64, b: f64, form: ComplexForm) -> Self {
        if form.is_polar() {
            Self::from_polar(a, b, form)
        } else {
            Self::from_algebraic(a, b, form)
        }
    }
}

impl Default for Complex {
    fn default() -> Self {
        Self::i()
    }
}

// ── Accessors and predicates ────────────────────────────────────────

impl Complex {
    /// Real part, rounded to 13 decimal digits.
    #[inline]
    pub fn re(&self) -> f64 {
        round_digits(self.re)
    }

    /// Imaginary part, rounded to 13 decimal digits.
    #[inline]
    pub fn im(&self) -> f64 {
        round_digits(self.im)
    }

    /// Modulus `|z|`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Argument in radians.
    ///
    /// In `(-π, π]` for algebraically built values. Products and quotients
    /// carry the sum or difference of their operands' angles reduced modulo
    /// 2π, which can lie anywhere in `(-2π, 2π)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Current display form.
    #[inline]
    pub fn form(&self) -> ComplexForm {
        self.form
    }

    /// `im == 0` after rounding. No tolerance beyond the rounding.
    #[inline]
    pub fn is_real(&self) -> bool {
        self.im() == 0.0
    }

    /// `re == 0` and `im != 0` after rounding.
    #[inline]
    pub fn is_imaginary(&self) -> bool {
        self.re() == 0.0 && self.im() != 0.0
    }

    /// Both parts are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Either part is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Complex conjugate, keeping the form.
    ///
    /// ```
    /// use cmatrix::Complex;
    /// assert_eq!(Complex::new(1.0, 2.0).conjugate(), Complex::new(1.0, -2.0));
    /// ```
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_algebraic(self.re(), -self.im(), self.form)
    }
}

// ── Form conversion and in-place stepping ───────────────────────────

impl Complex {
    /// Retag in place. The numeric value is unchanged.
    ///
    /// ```
    /// use cmatrix::{Complex, ComplexForm};
    ///
    /// let mut z = Complex::new(1.0, 1.0);
    /// z.to_form(ComplexForm::Trigonometric);
    /// assert_eq!(z.form(), ComplexForm::Trigonometric);
    /// assert_eq!(z, Complex::new(1.0, 1.0));
    /// ```
    #[inline]
    pub fn to_form(&mut self, form: ComplexForm) -> &mut Self {
        self.form = form;
        self
    }

    /// Copy of the same value tagged with `form`. The receiver keeps its tag.
    ///
    /// The copy is rebuilt from the rounded algebraic parts, so its angle is
    /// back in `(-π, π]`.
    #[inline]
    pub fn as_form(&self, form: ComplexForm) -> Self {
        Self::from_algebraic(self.re(), self.im(), form)
    }

    /// Add 1 to the real part in place.
    ///
    /// ```
    /// use cmatrix::Complex;
    ///
    /// let mut z = Complex::new(1.0, 2.0);
    /// z.increment().increment();
    /// assert_eq!(z, Complex::new(3.0, 2.0));
    /// ```
    pub fn increment(&mut self) -> &mut Self {
        *self = Self::from_algebraic(self.re() + 1.0, self.im(), self.form);
        self
    }

    /// Subtract 1 from the real part in place.
    pub fn decrement(&mut self) -> &mut Self {
        *self = Self::from_algebraic(self.re() - 1.0, self.im(), self.form);
        self
    }
}

// ── Equality and ordering ───────────────────────────────────────────

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.re() == other.re() && self.im() == other.im()
    }
}

impl PartialOrd for Complex {
    /// Orders by magnitude. Unequal values with equal magnitude are
    /// incomparable.
    ///
    /// Values that are equal after rounding to 13 decimal digits compare
    /// `Equal` before magnitudes are looked at, matching [`PartialEq`]. So
    /// two numbers that differ only below that precision are neither less
    /// nor greater than each other, whatever their raw magnitudes.
    ///
    /// ```
    /// use cmatrix::Complex;
    ///
    /// let a = Complex::new(3.0, 4.0);
    /// let b = Complex::new(5.0, 0.0);
    /// assert!(Complex::new(1.0, 0.0) < a);
    /// assert!(!(a < b) && !(a > b));
    /// assert_eq!(a.partial_cmp(&b), None);
    /// ```
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        if self == other {
            return Some(core::cmp::Ordering::Equal);
        }
        match self.magnitude.partial_cmp(&other.magnitude) {
            Some(core::cmp::Ordering::Equal) => None,
            ord => ord,
        }
    }
}

// ── num-traits ──────────────────────────────────────────────────────

impl Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re() == 0.0 && self.im() == 0.0
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Self {
        Self::new(1.0, 0.0)
    }
}

// ── Conversions ─────────────────────────────────────────────────────

macro_rules! impl_from_real {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Complex {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(value as f64, 0.0)
                }
            }
        )*
    };
}

impl_from_real!(f32, f64, i8, i16, i32, u8, u16, u32);

impl From<Complex> for f64 {
    /// Narrow to the **magnitude**, not the real part.
    ///
    /// ```
    /// use cmatrix::Complex;
    /// assert_eq!(f64::from(Complex::new(-3.0, 4.0)), 5.0);
    /// ```
    #[inline]
    fn from(value: Complex) -> f64 {
        value.magnitude
    }
}

#[cfg(feature = "complex")]
impl From<num_complex::Complex<f64>> for Complex {
    #[inline]
    fn from(value: num_complex::Complex<f64>) -> Self {
        Self::new(value.re, value.im)
    }
}

#[cfg(feature = "complex")]
impl From<Complex> for num_complex::Complex<f64> {
    #[inline]
    fn from(value: Complex) -> Self {
        num_complex::Complex::new(value.re(), value.im())
    }
}

// ── Rounding ────────────────────────────────────────────────────────

const ROUND_SCALE: f64 = 1e13;
// Beyond this every f64 has fewer than 13 fractional digits left.
const ROUND_LIMIT: f64 = 1e16;

/// Round to 13 decimal digits, ties to even.
pub(crate) fn round_digits(x: f64) -> f64 {
    if !x.is_finite() || Float::abs(x) >= ROUND_LIMIT {
        return x;
    }
    round_half_even(x * ROUND_SCALE) / ROUND_SCALE
}

/// Nearest integer, ties to even.
pub(crate) fn round_half_even(x: f64) -> f64 {
    if Float::abs(x - Float::trunc(x)) == 0.5 {
        2.0 * Float::round(x / 2.0)
    } else {
        Float::round(x)
    }
}

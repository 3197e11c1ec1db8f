//! # cmatrix
//!
//! Complex numbers with selectable display forms, and heap-allocated matrices
//! of complex entries with a Gaussian-elimination determinant. No-std
//! compatible (needs `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use cmatrix::{Complex, ComplexForm, Matrix};
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.magnitude(), 5.0);
//! assert_eq!(z.to_string(), "3+4i");
//! assert!(z.as_form(ComplexForm::Trigonometric).to_string().starts_with("5(cos("));
//!
//! let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
//! assert_eq!(m.determinant(), Ok(Complex::from(-2.0)));
//! ```
//!
//! ## Modules
//!
//! - [`complex`]: [`Complex`] value carrying both the algebraic `(re, im)`
//!   and polar `(magnitude, angle)` views, plus a [`ComplexForm`] tag that
//!   picks how it is rendered. Addition and subtraction work on the algebraic
//!   parts, multiplication and division on the polar parts. Real and
//!   imaginary parts are read back rounded to 13 decimal places, and
//!   equality compares those rounded parts.
//!
//! - [`matrix`]: [`Matrix`], a row-major `Vec<Complex>` with runtime
//!   dimensions (at least 1×1). Element access is 0-based through
//!   `m[(i, j)]`; the structural operations ([`Matrix::swap`],
//!   [`Matrix::add_scaled`], [`Matrix::remove`]) take 1-based line numbers.
//!   Square matrices add [`Matrix::pow`], [`Matrix::to_upper_triangular`]
//!   and [`Matrix::determinant`].
//!
//! Fallible operations return [`Error`]. The arithmetic operators panic on
//! shape mismatch; use the `checked_*` methods to get an `Err` instead.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | `std::error::Error` for [`Error`]. Hardware float routines instead of `libm` |
//! | `complex` | no       | Conversions to and from `num_complex::Complex<f64>` |
//! | `tracing` | no       | `trace`-level events from the elimination and power routines |
//! | `all`     | no       | All features: `std` + `complex` + `tracing` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Emit a `tracing::trace!` event when the `tracing` feature is on.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub mod complex;
mod error;
pub mod matrix;

pub use complex::{Complex, ComplexForm};
pub use error::Error;
pub use matrix::{Axis, Matrix};

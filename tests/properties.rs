use cmatrix::{Axis, Complex, ComplexForm, Error, Matrix};

const TOL: f64 = 1e-10;

fn c(re: f64, im: f64) -> Complex {
    Complex::new(re, im)
}

fn assert_complex_near(a: Complex, b: Complex, msg: &str) {
    assert!(
        (a.re() - b.re()).abs() < TOL && (a.im() - b.im()).abs() < TOL,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

fn samples() -> Vec<Complex> {
    vec![
        c(3.0, 4.0),
        c(-1.5, 0.25),
        c(0.0, -2.0),
        c(7.0, 0.0),
        c(-0.125, -9.5),
        Complex::from_polar(2.0, 2.5, ComplexForm::Exponential),
    ]
}

// ── Complex ──────────────────────────────────────────────────────────

#[test]
fn reals_are_real_with_abs_magnitude() {
    for x in [0.0, 1.0, -1.0, 2.5, -1e6, 123.456] {
        let z = Complex::new(x, 0.0);
        assert!(z.is_real(), "{}", x);
        assert_eq!(z.magnitude(), x.abs());
    }
}

#[test]
fn three_four_five() {
    let z = Complex::from_algebraic(3.0, 4.0, ComplexForm::Algebraic);
    assert_eq!(z.magnitude(), 5.0);
}

#[test]
fn conjugate_is_involution() {
    for z in samples() {
        assert_eq!(z.conjugate().conjugate(), z);
    }
}

#[test]
fn mul_then_div_round_trips() {
    for a in samples() {
        for b in samples() {
            assert_complex_near((a * b) / b, a, "(a*b)/b");
        }
    }
}

#[test]
fn add_then_sub_round_trips() {
    for a in samples() {
        for b in samples() {
            assert_complex_near((a + b) - b, a, "(a+b)-b");
        }
    }
}

#[test]
fn form_never_changes_value() {
    for z in samples() {
        for form in [
            ComplexForm::Algebraic,
            ComplexForm::Exponential,
            ComplexForm::Matrix,
            ComplexForm::Trigonometric,
        ] {
            let w = z.as_form(form);
            assert_eq!(w.form(), form);
            assert_eq!(w, z);
        }
    }
}

#[test]
fn result_takes_left_form() {
    let a = c(1.0, 1.0).as_form(ComplexForm::Trigonometric);
    let b = c(2.0, -1.0).as_form(ComplexForm::Exponential);
    assert_eq!((a + b).form(), ComplexForm::Trigonometric);
    assert_eq!((a * b).form(), ComplexForm::Trigonometric);
    assert_eq!((b / a).form(), ComplexForm::Exponential);
}

#[test]
fn equal_magnitude_is_unordered() {
    let a = c(3.0, 4.0);
    let b = c(5.0, 0.0);
    assert!(!(a < b) && !(a > b));
    assert!(c(1.0, 1.0) < a);
}

// ── Matrix ───────────────────────────────────────────────────────────

#[test]
fn determinants() {
    assert_eq!(Matrix::new([[1.0, 0.0], [0.0, 1.0]]).determinant(), Ok(c(1.0, 0.0)));
    assert_eq!(Matrix::new([[1.0, 2.0], [3.0, 4.0]]).determinant(), Ok(c(-2.0, 0.0)));
}

#[test]
fn determinant_matches_cofactor_expansion() {
    let m = Matrix::from_fn(3, 3, |i, j| {
        c((i + 2 * j + 1) as f64, if i == j { 1.0 } else { (i as f64) - (j as f64) })
    });
    // Expansion along the first row, using the 1-based minor helper.
    let mut expected = Complex::new(0.0, 0.0);
    for j in 0..3 {
        let minor = m.remove_row_column(1, j + 1);
        let d = minor[(0, 0)] * minor[(1, 1)] - minor[(0, 1)] * minor[(1, 0)];
        let term = m[(0, j)] * d;
        expected = if j % 2 == 0 { expected + term } else { expected - term };
    }
    assert_complex_near(m.determinant().unwrap(), expected, "3x3 det");
}

#[test]
fn transpose_twice_is_identity() {
    let m = Matrix::from_fn(2, 4, |i, j| c(i as f64 - j as f64, (i * j) as f64));
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn product_shapes() {
    let a = Matrix::zeros(2, 3);
    assert_eq!((&a * &Matrix::zeros(3, 2)).shape(), (2, 2));
    assert_eq!(
        a.checked_mul(&Matrix::zeros(2, 2)),
        Err(Error::ShapeMismatch { left: (2, 3), right: (2, 2) })
    );
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn product_operator_panics_on_mismatch() {
    let _ = Matrix::zeros(2, 3) * Matrix::zeros(2, 2);
}

#[test]
fn minor_of_identity_is_identity() {
    assert_eq!(Matrix::identity(3).remove_row_column(1, 1), Matrix::identity(2));
}

#[test]
fn zero_pivot_gives_non_finite_determinant() {
    let m = Matrix::new([[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [0.0, 3.0, 1.0]]);
    assert!(!m.determinant().unwrap().is_finite());
}

#[test]
fn powers() {
    let m = Matrix::new([[1.0, 1.0], [0.0, 1.0]]);
    assert_eq!(m.pow(1).unwrap(), m);
    assert_eq!(m.pow(2).unwrap(), Matrix::new([[1.0, 2.0], [0.0, 1.0]]));
    assert_eq!(m.pow(0), Err(Error::InvalidExponent(0)));
}

#[test]
fn triangularize_then_multiply_diagonal() {
    let mut m = Matrix::new([[c(2.0, 0.0), c(1.0, 1.0)], [c(0.0, 4.0), c(3.0, 0.0)]]);
    let det = m.determinant();
    let d = m.determinant_in_place().unwrap();
    assert_eq!(det, Ok(d));
    assert!(m.is_upper_triangular());
    assert_complex_near(m[(0, 0)] * m[(1, 1)], d, "diagonal product");
}

#[test]
fn row_operations_preserve_determinant() {
    let m = Matrix::new([[4.0, 3.0, 2.0], [1.0, 3.0, 1.0], [2.0, 1.0, 5.0]]);
    let det = m.determinant().unwrap();

    let mut shear = m.clone();
    shear.add_scaled(Axis::Row, 3, c(0.5, -1.0), 1);
    assert_complex_near(shear.determinant().unwrap(), det, "shear");

    let mut swapped = m.clone();
    swapped.swap(Axis::Column, 1, 3);
    assert_complex_near(swapped.determinant().unwrap(), -det, "swap");
}

#[test]
fn scalar_scales_determinant() {
    let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    let k = Complex::i();
    // det(kA) = k^2 det(A) for 2x2
    assert_complex_near((&m * k).determinant().unwrap(), k * k * c(-2.0, 0.0), "scaled");
}

#[test]
fn matrix_display_renders_complex_entries() {
    let m = Matrix::new([[c(1.0, 1.0), c(0.0, 0.0)], [c(0.0, -3.0), c(2.0, 0.0)]]);
    assert_eq!(m.to_string(), "1+i\t0\n-3i\t2");
}

#[test]
fn nested_vec_round_trip() {
    let rows = vec![vec![c(1.0, 0.0), c(0.0, 1.0)], vec![c(2.0, 2.0), c(-1.0, 0.0)]];
    let m = Matrix::try_from(rows.clone()).unwrap();
    assert_eq!(Vec::<Vec<Complex>>::from(m), rows);
}

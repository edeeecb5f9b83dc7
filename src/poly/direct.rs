/// Evaluate a polynomial at `x` by direct power summation.
///
/// Computes `Σ coeffs[j] * x^j` term by term with a general power function.
/// Every term pays for its own exponentiation, which is what Horner's method
/// eliminates. An empty coefficient slice evaluates to 0.
pub fn eval_direct(coeffs: &[f64], x: f64) -> f64 {
    let mut y = 0.0;
    for (j, &a) in coeffs.iter().enumerate() {
        y += a * x.powi(j as i32);
    }
    y
}

/// Evaluate a polynomial at every point of `xs`, writing into `out`.
///
/// # Panics
///
/// Panics if `xs` and `out` have different lengths.
pub fn eval_direct_into(coeffs: &[f64], xs: &[f64], out: &mut [f64]) {
    assert_eq!(
        xs.len(),
        out.len(),
        "samples: {} points but {} result slots",
        xs.len(),
        out.len()
    );
    for (y, &x) in out.iter_mut().zip(xs.iter()) {
        *y = eval_direct(coeffs, x);
    }
}

/// Evaluate a polynomial at `x` with Horner's method.
///
/// Nested multiplication: seed with the highest coefficient, then
/// `y = y * x + coeffs[j]` for j descending. `deg` multiplications and
/// additions total, no transcendental calls. An empty coefficient slice
/// evaluates to 0.
pub fn eval_horner(coeffs: &[f64], x: f64) -> f64 {
    let Some((&highest, lower)) = coeffs.split_last() else {
        return 0.0;
    };
    let mut y = highest;
    for &a in lower.iter().rev() {
        y = y * x + a;
    }
    y
}

/// Evaluate a polynomial at every point of `xs`, writing into `out`.
///
/// # Panics
///
/// Panics if `xs` and `out` have different lengths.
pub fn eval_horner_into(coeffs: &[f64], xs: &[f64], out: &mut [f64]) {
    assert_eq!(
        xs.len(),
        out.len(),
        "samples: {} points but {} result slots",
        xs.len(),
        out.len()
    );
    for (y, &x) in out.iter_mut().zip(xs.iter()) {
        *y = eval_horner(coeffs, x);
    }
}

//! Exponential approximation via truncated Taylor series.

/// Approximate e^x with the first `terms` terms of the Taylor expansion.
///
/// Evaluated backward, Horner style: seed `sum = 1` and iterate
/// `sum = 1 + x * sum / i` for i from `terms - 1` down to 1, which equals
/// `Σ_{k=0}^{terms-1} x^k / k!` without computing any factorial.
///
/// Total over finite doubles; large `|x|` overflows to infinity, which is
/// the expected IEEE-754 behavior. `terms` of 0 or 1 leaves the recurrence
/// empty and returns 1.0.
///
/// For negative x the alternating-sign terms cancel catastrophically; use
/// [`exp_taylor_stable`] there.
pub fn exp_taylor(x: f64, terms: usize) -> f64 {
    let mut sum = 1.0;
    for i in (1..terms).rev() {
        sum = 1.0 + x * sum / i as f64;
    }
    sum
}

/// Like [`exp_taylor`], but cancellation-free for negative arguments.
///
/// For x < 0 the series is evaluated at |x| - all terms positive, no
/// subtraction of nearly-equal magnitudes - and the reciprocal is returned,
/// using e^-x = 1 / e^x.
pub fn exp_taylor_stable(x: f64, terms: usize) -> f64 {
    if x < 0.0 {
        1.0 / exp_taylor(-x, terms)
    } else {
        exp_taylor(x, terms)
    }
}

//! Single-precision comparison of two evaluation result sets.
//!
//! Two f64 results computed by different summation orders rarely agree bit
//! for bit; rounding both to f32 discards the low 29 mantissa bits, so any
//! surviving difference is a real divergence, not summation noise.

/// A point where two result buffers disagree after rounding to f32.
///
/// Carries both full-precision values so a report can show exactly how far
/// apart they are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub lhs: f64,
    pub rhs: f64,
}

/// First index where `lhs` and `rhs` differ at single precision.
///
/// Returns `None` when every pair rounds to the same f32. This is the
/// human-readable sample; use [`count_mismatches`] when the total matters.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn first_mismatch(lhs: &[f64], rhs: &[f64]) -> Option<Mismatch> {
    assert_eq!(lhs.len(), rhs.len(), "result sets must have the same length");
    for i in 0..lhs.len() {
        if lhs[i] as f32 != rhs[i] as f32 {
            return Some(Mismatch {
                index: i,
                lhs: lhs[i],
                rhs: rhs[i],
            });
        }
    }
    None
}

/// Full scan: how many pairs differ at single precision.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn count_mismatches(lhs: &[f64], rhs: &[f64]) -> usize {
    assert_eq!(lhs.len(), rhs.len(), "result sets must have the same length");
    lhs.iter()
        .zip(rhs.iter())
        .filter(|&(&a, &b)| a as f32 != b as f32)
        .count()
}

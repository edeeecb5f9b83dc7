//! Numeric micro-benchmarks: naive vs. optimized kernels, measured honestly.
//!
//! I wrote this to measure what the classic scalar optimizations are
//! actually worth on current hardware. Three unrelated techniques, each
//! with a slow textbook version and one or more rewrites:
//!
//! - **Matrix multiplication** - loop reordering, a transpose pre-pass for
//!   row-major locality, and manual 8-way/32-way loop unrolling (including
//!   the point where bigger unrolls stop paying).
//! - **Polynomial evaluation** - direct power summation vs. Horner's
//!   method.
//! - **Exponentials** - truncated Taylor series with a cancellation-free
//!   variant for negative arguments.
//!
//! Every optimized kernel is checked against its naive baseline; the
//! binary (`cargo run --release`) times each variant and prints a speedup
//! summary.
//!
//! ## Usage
//!
//! ```
//! use numbench::multiply;
//!
//! let n = 64;
//! let a = vec![1.0f64; n * n];
//! let b = vec![1.0f64; n * n];
//! let mut c = vec![0.0f64; n * n];
//!
//! multiply(&a, &b, &mut c, n);
//!
//! assert_eq!(c[0], n as f64);
//! ```

pub mod matrix;
pub mod poly;
pub mod taylor;
pub mod timing;

pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_ikj::matmul_naive_ikj;
pub use matrix::transpose::transpose;
pub use matrix::transposed::matmul_transposed;
pub use matrix::unrolled::{matmul_unrolled, matmul_unrolled_8, matmul_unrolled_32};
pub use poly::{
    Mismatch, count_mismatches, eval_direct, eval_direct_into, eval_horner, eval_horner_into,
    first_mismatch,
};
pub use taylor::{exp_taylor, exp_taylor_stable};

/// Matrix multiply: C += A * B
///
/// Runs the recommended scalar path: transpose B into a scratch buffer,
/// then the 8-way unrolled row-row kernel. Matrices are square (n × n),
/// row-major.
///
/// # Panics
///
/// Panics if the slice sizes don't match n.
pub fn multiply(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);

    let mut bt = vec![0.0; n * n];
    transpose(b, &mut bt, n);
    matmul_unrolled_8(a, &bt, c, n);
}

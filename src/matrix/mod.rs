//! Square matrix kernels: the multiplication variants under test.
//!
//! One file per variant. All kernels accumulate (C += A * B) over row-major
//! square slices; benchmark drivers re-zero the destination between timed
//! runs.
//!
//! Available variants:
//! - `naive_ijk`: textbook triple loop, correctness baseline
//! - `naive_ikj`: loop-reorder variant, streams B and C without a transpose
//! - `transposed`: row-row product over a pre-transposed B
//! - `unrolled`: hand-unrolled 8-way/32-way reductions plus a configurable
//!   unroll factor
//! - `transpose`: the out-of-place transpose pre-pass

pub mod naive_ijk;
pub mod naive_ikj;
pub mod transpose;
pub mod transposed;
pub mod unrolled;

//! Polynomial evaluation: direct power summation vs. Horner's method.
//!
//! Coefficients are ordered lowest degree first, so `coeffs[j]` multiplies
//! `x^j`. Both methods are mathematically identical; Horner's rewrites the
//! sum as nested multiplication, needing `deg` multiply-adds and no `pow`
//! calls at all. `validate` checks the two result sets against each other at
//! single precision.

pub mod direct;
pub mod horner;
pub mod validate;

pub use direct::{eval_direct, eval_direct_into};
pub use horner::{eval_horner, eval_horner_into};
pub use validate::{Mismatch, count_mismatches, first_mismatch};

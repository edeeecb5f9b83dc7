//! Benchmark runner for the numeric kernels.

use numbench::matrix::naive_ijk::matmul_naive_ijk;
use numbench::matrix::naive_ikj::matmul_naive_ikj;
use numbench::matrix::transpose::transpose;
use numbench::matrix::transposed::matmul_transposed;
use numbench::matrix::unrolled::{matmul_unrolled, matmul_unrolled_8, matmul_unrolled_32};
use numbench::poly::{count_mismatches, eval_direct_into, eval_horner_into, first_mismatch};
use numbench::taylor::{exp_taylor, exp_taylor_stable};
use numbench::timing::{ScopedTimer, report};
use rand::Rng;
use std::thread;
use std::time::Duration;

const MAT_DIM: usize = 1024;
const DEGREE: usize = 10;
const N_SAMPLES: usize = 1 << 20;
const TAYLOR_TERMS: usize = 25;

/// A multiplication variant under test: (a, b, c, n), b untransposed.
/// Variants that want B^T do the transpose themselves so its cost is
/// charged to them.
type MatmulFn = Box<dyn Fn(&[f64], &[f64], &mut [f64], usize)>;

fn main() {
    println!("=== Numeric Micro-benchmarks ===\n");

    calibrate_timer();
    run_taylor();
    run_matmul();
    run_poly();
}

/// Time a deliberate one-second sleep to sanity-check the timer itself.
fn calibrate_timer() {
    let _timer = ScopedTimer::new("timer calibration (1s sleep)");
    thread::sleep(Duration::from_secs(1));
}

fn run_taylor() {
    println!("\nExponential via Taylor series ({} terms)", TAYLOR_TERMS);
    println!("{}", "-".repeat(50));

    let x = -8.3;
    println!(
        "direct series     e^{} = {:e}",
        x,
        exp_taylor(x, TAYLOR_TERMS)
    );
    println!(
        "reciprocal series e^{} = {:e}",
        x,
        exp_taylor_stable(x, TAYLOR_TERMS)
    );
    println!("std library       e^{} = {:e}", x, x.exp());
}

fn run_matmul() {
    let n = MAT_DIM;
    println!("\nMatrix multiplication ({}×{})", n, n);
    println!("{}", "-".repeat(50));

    let mut rng = rand::thread_rng();
    let a: Vec<f64> = (0..n * n).map(|_| rng.gen_range(0.0..1.0)).collect();
    let b: Vec<f64> = (0..n * n).map(|_| rng.gen_range(0.0..1.0)).collect();
    let mut c = vec![0.0; n * n];

    let (_, baseline_secs) = report("naive i-j-k", || matmul_naive_ijk(&a, &b, &mut c, n));
    let reference = c.clone();

    let variants: Vec<(&str, MatmulFn)> = vec![
        ("reordered i-k-j", Box::new(matmul_naive_ikj)),
        (
            "transpose + row-row",
            Box::new(|a: &[f64], b: &[f64], c: &mut [f64], n: usize| {
                let mut bt = vec![0.0; n * n];
                transpose(b, &mut bt, n);
                matmul_transposed(a, &bt, c, n);
            }),
        ),
        (
            "transpose + 8-way unroll",
            Box::new(|a: &[f64], b: &[f64], c: &mut [f64], n: usize| {
                let mut bt = vec![0.0; n * n];
                transpose(b, &mut bt, n);
                matmul_unrolled_8(a, &bt, c, n);
            }),
        ),
        (
            "transpose + 32-way unroll",
            Box::new(|a: &[f64], b: &[f64], c: &mut [f64], n: usize| {
                let mut bt = vec![0.0; n * n];
                transpose(b, &mut bt, n);
                matmul_unrolled_32(a, &bt, c, n);
            }),
        ),
        (
            "transpose + generic unroll(8)",
            Box::new(|a: &[f64], b: &[f64], c: &mut [f64], n: usize| {
                let mut bt = vec![0.0; n * n];
                transpose(b, &mut bt, n);
                matmul_unrolled(a, &bt, c, n, 8);
            }),
        ),
    ];

    // Each variant gets a freshly zeroed destination, same as the baseline.
    let mut results = vec![("naive i-j-k", baseline_secs, 0.0)];
    for (label, f) in &variants {
        c.fill(0.0);
        let (_, secs) = report(label, || f(&a, &b, &mut c, n));
        results.push((*label, secs, max_abs_diff(&reference, &c)));
    }

    let flops = 2.0 * (n * n * n) as f64;
    println!(
        "\n{:<30} {:>9} {:>8} {:>9} {:>11}",
        "variant", "time", "GFLOPS", "speedup", "max |diff|"
    );
    println!("{}", "-".repeat(72));
    for (label, secs, diff) in &results {
        println!(
            "{:<30} {:>7.2} s {:>8.2} {:>8.1}× {:>11.2e}",
            label,
            secs,
            flops / secs / 1e9,
            baseline_secs / secs,
            diff
        );
    }
}

fn run_poly() {
    println!(
        "\nPolynomial evaluation (degree {}, {} points)",
        DEGREE, N_SAMPLES
    );
    println!("{}", "-".repeat(50));

    let mut rng = rand::thread_rng();
    let coeffs: Vec<f64> = (0..=DEGREE).map(|_| rng.gen_range(0.0..1.0)).collect();
    let xs: Vec<f64> = (0..N_SAMPLES).map(|_| rng.gen_range(0.0..1.0)).collect();
    let mut y_direct = vec![0.0; N_SAMPLES];
    let mut y_horner = vec![0.0; N_SAMPLES];

    report("direct power summation", || {
        eval_direct_into(&coeffs, &xs, &mut y_direct)
    });
    report("Horner's method", || {
        eval_horner_into(&coeffs, &xs, &mut y_horner)
    });

    match first_mismatch(&y_direct, &y_horner) {
        Some(m) => {
            println!(
                "y_direct[{}] ({:.15}) differs from y_horner[{}] ({:.15}) at single precision",
                m.index, m.lhs, m.index, m.rhs
            );
            println!(
                "{} of {} points differ at single precision",
                count_mismatches(&y_direct, &y_horner),
                N_SAMPLES
            );
        }
        None => println!("all values are equal"),
    }
}

fn max_abs_diff(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y.iter())
        .map(|(&p, &q)| (p - q).abs())
        .fold(0.0, f64::max)
}

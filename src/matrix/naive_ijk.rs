/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation. It's slow because
/// the innermost loop accesses B with stride `n` (column-wise), causing
/// cache misses on every iteration.
///
/// Use this as a correctness baseline, not for performance.
///
/// # Arguments
///
/// * `a` - Left matrix (n × n), row-major
/// * `b` - Right matrix (n × n), row-major
/// * `c` - Destination (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Matrix dimension
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    for i in 0..n {
        for j in 0..n {
            for p in 0..n {
                c[i * n + j] += a[i * n + p] * b[p * n + j];
            }
        }
    }
}

/// Cache-friendly matrix multiplication using i-k-j loop order.
///
/// By swapping the j and k loops, the innermost loop accesses both B and C
/// sequentially (stride 1). No transpose pre-pass is needed; the loop
/// reordering alone buys most of the locality win on large matrices.
///
/// # Arguments
///
/// * `a` - Left matrix (n × n), row-major
/// * `b` - Right matrix (n × n), row-major
/// * `c` - Destination (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Matrix dimension
pub fn matmul_naive_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    for i in 0..n {
        for p in 0..n {
            for j in 0..n {
                c[i * n + j] += a[i * n + p] * b[p * n + j];
            }
        }
    }
}

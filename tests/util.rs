#![allow(unused)]

/// Absolute-tolerance comparison that treats NaN and signed infinities as exact.
pub fn assert_close(a: f64, e: f64, tol: f64) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert_eq!(a, e, "expected {e}, got {a}");
        return;
    }
    assert!((a - e).abs() <= tol, "mismatch: got {a}, expect {e} (tol={tol})");
}

pub fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if ei.is_nan() {
            assert!(ai.is_nan(), "idx {i}: expected NaN, got {ai}");
            continue;
        }
        if ei.is_infinite() {
            assert_eq!(ai, ei, "idx {i}: expected {ei}, got {ai}");
            continue;
        }
        assert!(
            (ai - ei).abs() <= tol,
            "idx {i}: got {ai}, expect {ei} (tol={tol})"
        );
    }
}

/// Relative error of `a` against a non-zero `e`.
pub fn rel_err(a: f64, e: f64) -> f64 {
    ((a - e) / e).abs()
}

/// `n` points spread logarithmically over `[lo, hi]`, both positive.
pub fn logspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let (a, b) = (lo.log10(), hi.log10());
    (0..n)
        .map(|i| 10f64.powf(a + (b - a) * i as f64 / (n - 1) as f64))
        .collect()
}

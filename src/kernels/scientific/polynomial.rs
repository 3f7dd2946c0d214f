// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Polynomial Module** - *Horner Evaluation and Rational Approximations*
//!
//! Building blocks for the piecewise rational approximations used by
//! [`erfcinv`](super::erfcinv). Coefficient tables are ordered from the
//! highest-degree term down to the constant term.

/// Evaluates the polynomial with coefficients `coeffs` at `s` using Horner's method.
///
/// `coeffs[0]` is the highest-degree coefficient and the last entry is the
/// constant term. Each step is a plain `acc * s + c`; no fused multiply-add is
/// used, so rounding is identical on every target. An empty table evaluates to `0.0`.
#[inline(always)]
pub fn evalpoly(coeffs: &[f64], s: f64) -> f64 {
    let mut acc = 0.0;
    for &c in coeffs {
        acc = acc * s + c;
    }
    acc
}

/// Rational approximation `x * (y + P(x - v) / Q(x - v))`.
///
/// Computed as `y*x + r*x` rather than `(y + r) * x`, keeping the dominant
/// linear term separate from the correction.
///
/// `q` must be bounded away from zero for every `x` the caller passes; the
/// division is deliberately unguarded.
#[inline(always)]
pub fn rational(x: f64, v: f64, p: &[f64], q: &[f64], y: f64) -> f64 {
    let s = x - v;
    let r = evalpoly(p, s) / evalpoly(q, s);
    y * x + r * x
}

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Inverse Complementary Error Function** - *Piecewise Rational Approximation*
//!
//! Scalar evaluation of `erfc⁻¹(x)` for `x ∈ [0, 2]`.
//!
//! ## Mathematical Definition
//! ```text
//! erfc⁻¹(x) = z  such that  erfc(z) = x
//! erfc(-z)  = 2 - erfc(z)                 (reflection)
//! ```
//!
//! ## Method
//! Inputs above 1 are reflected onto `(0, 1]` and the result negated. With
//! `q` the reflected input and `r = 1 - q`, one of five rational
//! approximations is chosen:
//!
//! | Band                  | Approximation                           | Max abs error   |
//! |-----------------------|-----------------------------------------|-----------------|
//! | `r <= 0.5`            | `r(r+10)(Y + R(r))`                     | ~2e-18          |
//! | `q >= 0.25`           | `sqrt(-2 ln q) / (Y + R(q - 0.25))`     | ~7e-17          |
//! | `p = sqrt(-ln q) < 3` | `p(Y + R(p - 1.125))`                   | ~1e-20          |
//! | `3 <= p < 6`          | `p(Y + R(p - 3))`                       | ~8e-21          |
//! | `p >= 6`              | `p(Y + R(p - 6))`                       | ~1e-19 / 6e-20  |
//!
//! Almost every input goes through the first two bands. The last band covers
//! `q` down to the smallest positive subnormal (`5e-324`, `p ≈ 27.28`); there
//! is no band beyond it since `f64` has nothing smaller to represent.
//!
//! ## Usage Examples
//!
//! ```rust
//! use erfcinv_kernels::kernels::scientific::erfcinv::erfcinv;
//!
//! let z = erfcinv(0.5).unwrap();
//! assert!((z - 0.4769362762044699).abs() < 1e-15);
//! assert!(erfcinv(3.0).is_err());
//! ```

use crate::config::{ERFCINV_DOMAIN_MAX, ERFCINV_DOMAIN_MIN};
use crate::errors::{log_domain, KernelError};
use crate::kernels::scientific::polynomial::{evalpoly, rational};

// Coefficient tables, highest-degree term first.
// The band boundaries (0.5, 0.25, 3, 6) are where each table was fitted.

// r on [0, 0.5]
const Y1: f64 = 8.91314744949340820313e-2;
const P1: [f64; 8] = [
    -5.38772965071242932965e-3,
    8.22687874676915743155e-3,
    2.19878681111168899165e-2,
    -3.65637971411762664006e-2,
    -1.26926147662974029034e-2,
    3.34806625409744615033e-2,
    -8.36874819741736770379e-3,
    -5.08781949658280665617e-4,
];
const Q1: [f64; 10] = [
    8.86216390456424707504e-4,
    -2.33393759374190016776e-3,
    7.95283687341571680018e-2,
    -5.27396382340099713954e-2,
    -7.1228902341542847553e-1,
    6.62328840472002992063e-1,
    1.56221558398423026363,
    -1.56574558234175846809,
    -9.70005043303290640362e-1,
    1.0,
];

// q on [0.25, 0.5)
const Y2: f64 = 2.249481201171875;
const P2: [f64; 9] = [
    -3.67192254707729348546,
    2.11294655448340526258e1,
    1.7445385985570866523e1,
    -4.46382324441786960818e1,
    -1.88510648058714251895e1,
    1.76447298408374015486e1,
    8.37050328343119927838,
    1.05264680699391713268e-1,
    -2.02433508355938759655e-1,
];
const Q2: [f64; 9] = [
    1.72114765761200282724,
    -2.26436933413139721736e1,
    1.08268667355460159008e1,
    4.85609213108739935468e1,
    -2.01432634680485188801e1,
    -2.86608180499800029974e1,
    3.9713437953343869095,
    6.24264124854247537712,
    1.0,
];

// p on [sqrt(ln 4), 3)
const Y3: f64 = 8.07220458984375e-1;
const P3: [f64; 11] = [
    -6.81149956853776992068e-10,
    2.85225331782217055858e-8,
    -6.79465575181126350155e-7,
    2.14558995388805277169e-3,
    2.90157910005329060432e-2,
    1.42869534408157156766e-1,
    3.37785538912035898924e-1,
    3.87079738972604337464e-1,
    1.17030156341995252019e-1,
    -1.63794047193317060787e-1,
    -1.31102781679951906451e-1,
];
const Q3: [f64; 8] = [
    1.105924229346489121e-2,
    1.52264338295331783612e-1,
    8.48854343457902036425e-1,
    2.59301921623620271374,
    4.77846592945843778382,
    5.38168345707006855425,
    3.46625407242567245975,
    1.0,
];

// p on [3, 6)
const Y4: f64 = 9.3995571136474609375e-1;
const P4: [f64; 9] = [
    2.66339227425782031962e-12,
    -2.30404776911882601748e-10,
    4.60469890584317994083e-6,
    1.57544617424960554631e-4,
    1.87123492819559223345e-3,
    9.50804701325919603619e-3,
    1.85573306514231072324e-2,
    -2.22426529213447927281e-3,
    -3.50353787183177984712e-2,
];
const Q4: [f64; 7] = [
    7.64675292302794483503e-5,
    2.63861676657015992959e-3,
    3.41589143670947727934e-2,
    2.20091105764131249824e-1,
    7.62059164553623404043e-1,
    1.3653349817554063097,
    1.0,
];

// p on [6, 27.3]
const Y5: f64 = 9.8362827301025390625e-1;
const P5: [f64; 9] = [
    9.9055709973310326855e-17,
    -2.81128735628831791805e-14,
    4.62596163522878599135e-9,
    4.49696789927706453732e-7,
    1.49624783758342370182e-5,
    2.09386317487588078668e-4,
    1.05628862152492910091e-3,
    -1.12951438745580278863e-3,
    -1.67431005076633737133e-2,
];
const Q5: [f64; 7] = [
    2.82243172016108031869e-7,
    2.75335474764726041141e-5,
    9.64011807005165528527e-4,
    1.60746087093676504695e-2,
    1.38151865749083321638e-1,
    5.91429344886417493481e-1,
    1.0,
];

/// The five input bands of [`erfcinv`], each with its own rational approximation.
///
/// Bands are defined on the reflected input `q ∈ (0, 1)` and `r = 1 - q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// `r <= 0.5`, i.e. `q ∈ [0.5, 1)`.
    Central,
    /// `q ∈ [0.25, 0.5)`.
    Shoulder,
    /// `q < 0.25` and `sqrt(-ln q) < 3`.
    Tail,
    /// `3 <= sqrt(-ln q) < 6`.
    DeepTail,
    /// `sqrt(-ln q) >= 6`, down to the smallest subnormal.
    ExtremeTail,
}

impl Regime {
    /// Picks the band for the reflected pair and returns the argument its
    /// approximation is evaluated at (`r`, `q` or `p` respectively).
    #[inline(always)]
    fn select(r: f64, q: f64) -> (Regime, f64) {
        if r <= 0.5 {
            return (Regime::Central, r);
        }
        if q >= 0.25 {
            return (Regime::Shoulder, q);
        }
        let p = (-q.ln()).sqrt();
        if p < 3.0 {
            (Regime::Tail, p)
        } else if p < 6.0 {
            (Regime::DeepTail, p)
        } else {
            (Regime::ExtremeTail, p)
        }
    }

    /// Unsigned magnitude of `erfc⁻¹` for the argument returned by [`Regime::select`].
    #[inline(always)]
    fn evaluate(self, t: f64) -> f64 {
        match self {
            Regime::Central => {
                let g = t * (t + 10.0);
                let r = evalpoly(&P1, t) / evalpoly(&Q1, t);
                g * Y1 + g * r
            }
            Regime::Shoulder => {
                let g = (-2.0 * t.ln()).sqrt();
                let s = t - 0.25;
                let r = evalpoly(&P2, s) / evalpoly(&Q2, s);
                g / (Y2 + r)
            }
            Regime::Tail => rational(t, 1.125, &P3, &Q3, Y3),
            Regime::DeepTail => rational(t, 3.0, &P4, &Q4, Y4),
            Regime::ExtremeTail => rational(t, 6.0, &P5, &Q5, Y5),
        }
    }
}

/// Reflection `erfc(-z) = 2 - erfc(z)`: returns `(q, 1 - q, negate)` with `q ∈ (0, 1]`.
#[inline(always)]
fn reflect(x: f64) -> (f64, f64, bool) {
    if x > 1.0 {
        let q = 2.0 - x;
        (q, 1.0 - q, true)
    } else {
        (x, 1.0 - x, false)
    }
}

#[inline(always)]
fn in_domain(x: f64) -> bool {
    (ERFCINV_DOMAIN_MIN..=ERFCINV_DOMAIN_MAX).contains(&x)
}

/// Inverse complementary error function `erfc⁻¹(x)`.
///
/// * NaN propagates as NaN.
/// * `erfc⁻¹(0) = +∞`, `erfc⁻¹(2) = −∞`, `erfc⁻¹(1) = 0`.
/// * Any other input outside `[0, 2]` is a [`KernelError::Domain`].
#[inline]
pub fn erfcinv(x: f64) -> Result<f64, KernelError> {
    if x.is_nan() {
        return Ok(f64::NAN);
    }
    if !in_domain(x) {
        return Err(KernelError::Domain(log_domain("erfcinv", None, x)));
    }
    Ok(erfcinv_unchecked(x))
}

/// [`erfcinv`] without the error path: inputs outside `[0, 2]` return NaN.
///
/// For callers that have already validated their input, or that map
/// invalid elements to NaN anyway.
#[inline]
pub fn erfcinv_unchecked(x: f64) -> f64 {
    // also rejects NaN
    if !in_domain(x) {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }
    if x == 2.0 {
        return f64::NEG_INFINITY;
    }
    if x == 1.0 {
        return 0.0;
    }
    let (q, r, negate) = reflect(x);
    let (regime, t) = Regime::select(r, q);
    let val = regime.evaluate(t);
    if negate {
        -val
    } else {
        val
    }
}

/// The band `x` is evaluated in.
///
/// `None` for NaN, inputs outside `[0, 2]` and the exact values 0, 1 and 2,
/// which are answered before any approximation runs.
pub fn regime_of(x: f64) -> Option<Regime> {
    if !in_domain(x) || x == 0.0 || x == 1.0 || x == 2.0 {
        return None;
    }
    let (q, r, _) = reflect(x);
    Some(Regime::select(r, q).0)
}

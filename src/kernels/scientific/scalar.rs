// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Universal Scalar Function Module** - *Element-Wise erfc⁻¹ Kernels*
//!
//! Element-wise application of [`erfcinv`] over slices, typed numeric
//! slices, accessor-projected records, null-masked columns and pre-allocated
//! output buffers (matrices). These are the semantic equivalent of a *numpy
//! ufunc* for `scipy.special.erfcinv`.
//!
//! ## Behaviour
//! - Every element is handed to the scalar kernel exactly once.
//! - Missing values (an accessor returning `None`, a null in the validity
//!   mask) become NaN without calling the kernel.
//! - An element outside `[0, 2]` aborts the kernel with
//!   [`KernelError::Domain`] naming the element index. With the `parallel`
//!   feature the reported index is one of the failing elements, not
//!   necessarily the first.
//! - Empty input yields empty output.

use num_traits::ToPrimitive;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use crate::config::PARALLEL_CHUNK_LEN;
use crate::errors::{log_domain, log_length_mismatch, KernelError};
use crate::kernels::scientific::erfcinv::erfcinv;

/// Evaluates element `idx`, re-labelling a domain error with the kernel and index.
#[inline(always)]
fn eval_at(fname: &str, idx: usize, x: f64) -> Result<f64, KernelError> {
    erfcinv(x).map_err(|_| {
        debug!(kernel = fname, index = idx, value = x, "erfcinv domain error");
        KernelError::Domain(log_domain(fname, Some(idx), x))
    })
}

/// `erfc⁻¹` of every element, into a new vector.
pub fn erfcinv_slice(input: &[f64]) -> Result<Vec<f64>, KernelError> {
    trace!(len = input.len(), "erfcinv_slice");
    #[cfg(feature = "parallel")]
    {
        if input.len() >= PARALLEL_CHUNK_LEN {
            return input
                .par_iter()
                .enumerate()
                .map(|(i, &x)| eval_at("erfcinv_slice", i, x))
                .collect();
        }
    }
    input
        .iter()
        .enumerate()
        .map(|(i, &x)| eval_at("erfcinv_slice", i, x))
        .collect()
}

/// `erfc⁻¹` of every element, overwriting the input.
///
/// On error, elements before the failing one have already been replaced.
pub fn erfcinv_inplace(data: &mut [f64]) -> Result<(), KernelError> {
    trace!(len = data.len(), "erfcinv_inplace");
    #[cfg(feature = "parallel")]
    {
        if data.len() >= PARALLEL_CHUNK_LEN {
            return data.par_iter_mut().enumerate().try_for_each(|(i, v)| {
                *v = eval_at("erfcinv_inplace", i, *v)?;
                Ok(())
            });
        }
    }
    for (i, v) in data.iter_mut().enumerate() {
        *v = eval_at("erfcinv_inplace", i, *v)?;
    }
    Ok(())
}

/// `erfc⁻¹` into a caller-supplied buffer of the same length, e.g. the data
/// of an output matrix with the input's shape.
pub fn erfcinv_into(out: &mut [f64], input: &[f64]) -> Result<(), KernelError> {
    if out.len() != input.len() {
        return Err(KernelError::LengthMismatch(log_length_mismatch(
            "erfcinv_into".to_string(),
            out.len(),
            input.len(),
        )));
    }
    trace!(len = input.len(), "erfcinv_into");
    for (i, (o, &x)) in out.iter_mut().zip(input).enumerate() {
        *o = eval_at("erfcinv_into", i, x)?;
    }
    Ok(())
}

/// `erfc⁻¹` over any primitive numeric slice (`i8`..`u64`, `f32`, ...), widened to `f64`.
///
/// A value with no `f64` representation maps to NaN.
pub fn erfcinv_typed<T>(input: &[T]) -> Result<Vec<f64>, KernelError>
where
    T: ToPrimitive + Copy,
{
    trace!(len = input.len(), "erfcinv_typed");
    input
        .iter()
        .enumerate()
        .map(|(i, v)| eval_at("erfcinv_typed", i, v.to_f64().unwrap_or(f64::NAN)))
        .collect()
}

/// `erfc⁻¹` of the value `accessor` projects out of each record.
///
/// The accessor receives the record and its index. `None` marks a
/// non-numeric record and yields NaN.
pub fn erfcinv_by<T, F>(input: &[T], mut accessor: F) -> Result<Vec<f64>, KernelError>
where
    F: FnMut(&T, usize) -> Option<f64>,
{
    trace!(len = input.len(), "erfcinv_by");
    input
        .iter()
        .enumerate()
        .map(|(i, rec)| match accessor(rec, i) {
            Some(x) => eval_at("erfcinv_by", i, x),
            None => Ok(f64::NAN),
        })
        .collect()
}

/// `erfc⁻¹` of a column with an optional validity mask (`true` = valid).
///
/// Null lanes are written as NaN and never evaluated, so an out-of-domain
/// value behind a null is not an error.
pub fn erfcinv_masked(input: &[f64], valid: Option<&[bool]>) -> Result<Vec<f64>, KernelError> {
    let Some(mask) = valid else {
        return erfcinv_slice(input);
    };
    if mask.len() != input.len() {
        return Err(KernelError::LengthMismatch(log_length_mismatch(
            "erfcinv_masked".to_string(),
            input.len(),
            mask.len(),
        )));
    }
    trace!(len = input.len(), "erfcinv_masked");
    input
        .iter()
        .zip(mask)
        .enumerate()
        .map(|(i, (&x, &ok))| {
            if ok {
                eval_at("erfcinv_masked", i, x)
            } else {
                Ok(f64::NAN)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_matches_scalar() {
        let x = [0.0, 0.25, 0.5, 1.0, 1.5, 2.0];
        let got = erfcinv_slice(&x).unwrap();
        for (g, &xi) in got.iter().zip(&x) {
            assert_eq!(*g, erfcinv(xi).unwrap());
        }
    }

    #[test]
    fn slice_empty() {
        assert!(erfcinv_slice(&[]).unwrap().is_empty());
    }

    #[test]
    fn slice_reports_failing_index() {
        let err = erfcinv_slice(&[0.5, 1.0, 2.5, 1.5]).unwrap_err();
        match err {
            KernelError::Domain(msg) => {
                assert!(msg.contains("erfcinv_slice"));
                assert!(msg.contains("element 2"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn inplace_overwrites() {
        let mut d = [1.0, 0.0, 2.0];
        erfcinv_inplace(&mut d).unwrap();
        assert_eq!(d, [0.0, f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn into_rejects_shape_mismatch() {
        let mut out = [0.0; 3];
        let err = erfcinv_into(&mut out, &[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, KernelError::LengthMismatch(_)));
    }

    #[test]
    fn typed_widens_integers() {
        let got = erfcinv_typed(&[0u8, 1, 2]).unwrap();
        assert_eq!(got, vec![f64::INFINITY, 0.0, f64::NEG_INFINITY]);
        assert!(erfcinv_typed(&[3i32]).is_err());
    }

    #[test]
    fn accessor_none_is_nan() {
        let recs = [Some(1.0), None, Some(0.0)];
        let got = erfcinv_by(&recs, |r, _| *r).unwrap();
        assert_eq!(got[0], 0.0);
        assert!(got[1].is_nan());
        assert_eq!(got[2], f64::INFINITY);
    }

    #[test]
    fn masked_skips_nulls() {
        let got = erfcinv_masked(&[1.0, 9.0], Some(&[true, false][..])).unwrap();
        assert_eq!(got[0], 0.0);
        assert!(got[1].is_nan());
    }
}

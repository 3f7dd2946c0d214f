// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Global configuration constants controlling kernel behaviour and performance thresholds.
//! These values are compile-time constants.

/// Lower bound of the `erfcinv` domain. `erfcinv(0) = +inf`.
pub const ERFCINV_DOMAIN_MIN: f64 = 0.0;

/// Upper bound of the `erfcinv` domain. `erfcinv(2) = -inf`.
pub const ERFCINV_DOMAIN_MAX: f64 = 2.0;

/// Key separator used by the nested-path kernels when the caller passes none.
pub const DEFAULT_PATH_SEPARATOR: char = '.';

/// Minimum slice length before the element-wise kernels hand work to rayon.
///
/// Below this, thread hand-off costs more than a few hundred rational evaluations.
pub const PARALLEL_CHUNK_LEN: usize = 4096;

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for the inverse complementary error function and the
//! element-wise kernels that dispatch to it.
//!
//! ## Error Categories
//! - **Domain Errors**: Inputs outside `[0, 2]`, the range of `erfc`
//! - **Dimension Errors**: Output buffer, mask and input length mismatches
//! - **Argument Errors**: Malformed nested paths and record shapes
//!
//! All errors include contextual message space for debugging.

use core::fmt;
use std::error::Error;

/// Error type for all kernel operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Input lies outside the domain `[0, 2]` of `erfcinv`.
    ///
    /// NaN is never a domain error; it propagates as a NaN result.
    Domain(String),

    /// Array length mismatch between input and output, or input and mask.
    LengthMismatch(String),

    /// Invalid arguments provided to kernel function.
    InvalidArguments(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::Domain(msg) => write!(f, "Domain error: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) arrays.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side array
/// * `rhs` - Length of the right-hand side array
pub fn log_length_mismatch(fname: String, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}

/// Creates a formatted error message for an element outside `[0, 2]`.
///
/// `index` is `None` for a bare scalar call.
pub fn log_domain(fname: &str, index: Option<usize>, value: f64) -> String {
    match index {
        Some(i) => format!(
            "{} => value must be on the interval [0,2]; element {} is {}",
            fname, i, value
        ),
        None => format!(
            "{} => value must be on the interval [0,2]; got {}",
            fname, value
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_category() {
        let e = KernelError::Domain(log_domain("erfcinv", None, 3.0));
        assert_eq!(
            e.to_string(),
            "Domain error: erfcinv => value must be on the interval [0,2]; got 3"
        );
        let e = KernelError::LengthMismatch(log_length_mismatch("erfcinv_into".into(), 4, 3));
        assert_eq!(
            e.to_string(),
            "Length mismatch: erfcinv_into => Length mismatch: LHS 4 RHS 3"
        );
    }

    #[test]
    fn domain_message_carries_index() {
        let msg = log_domain("erfcinv_slice", Some(7), -0.5);
        assert!(msg.contains("element 7"));
        assert!(msg.contains("-0.5"));
    }
}

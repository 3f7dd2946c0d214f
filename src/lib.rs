// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.

//! # erfcinv-kernels
//!
//! The inverse complementary error function `erfc⁻¹(x)` on `[0, 2]`,
//! evaluated with five piecewise rational approximations, plus element-wise
//! kernels that apply it over slices, typed slices, masked columns and
//! nested JSON records.
//!
//! ```rust
//! use erfcinv_kernels::erfcinv;
//!
//! assert_eq!(erfcinv(1.0).unwrap(), 0.0);
//! assert_eq!(erfcinv(0.0).unwrap(), f64::INFINITY);
//! assert!(erfcinv(-1.0).is_err());
//! ```

pub mod kernels {
    pub mod scientific {
        #[cfg(feature = "deep_path")]
        pub mod deep_path;
        pub mod erfcinv;
        pub mod polynomial;
        #[cfg(feature = "universal_functions")]
        pub mod scalar;
    }
}

pub mod config;

pub mod errors;

pub use errors::KernelError;
pub use kernels::scientific::erfcinv::{erfcinv, erfcinv_unchecked, regime_of, Regime};

//! Numerical core for pole-zero analysis of continuous LTI systems.
//!
//! A system is described by its zeros, poles and a real gain, i.e. the
//! factored transfer function `H(s) = K · Π(s − zᵢ) / Π(s − pⱼ)`. This crate
//! computes:
//!
//! - all complex roots of a real-coefficient polynomial, so a system can be
//!   built from numerator/denominator coefficients ([`Poly::roots`]);
//! - the magnitude and phase of `H(jω)` over swept frequency ranges, ready
//!   for Bode-style plotting ([`log_sweep`], [`linear_sweep`]).
//!
//! Everything is a pure function of its inputs; nothing is cached between
//! calls. The only nondeterminism is the root finder's randomized starting
//! circle, which can be pinned with [`Poly::roots_with_rng`].
//!
//! ```
//! use bode_core::{Poly, System, log_sweep};
//!
//! // H(s) = 1 / (s^2 + 2s + 101), poles at -1 ± 10i
//! let num = Poly::parse("1").unwrap();
//! let den = Poly::parse("1 2 101").unwrap();
//! let system = System::from_transfer_function(&num, &den);
//!
//! let samples = log_sweep(&system);
//! assert_eq!(samples.len(), 201);
//! assert!(samples.windows(2).all(|w| w[0].frequency < w[1].frequency));
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
pub use error::Error;

mod poly;
pub use poly::{
    roots::{Root, RootId},
    Poly,
};

mod system;
pub use system::System;

mod sweep;
pub use sweep::{
    linear_sweep, linear_sweep_with_points, log_sweep, log_sweep_with_points, FrequencySample,
};

pub(crate) mod util;

// re-exported by crate root
#[doc(hidden)]
pub use util::__testing;

/// Complex values produced and consumed by this crate.
pub type Complex64 = num::Complex<f64>;

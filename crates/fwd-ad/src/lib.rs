//! # fwd-ad
//!
//! Forward-mode automatic differentiation with a vector of directional
//! derivatives per variable.
//!
//! Provides:
//! - [`Dual`] with two storage policies: [`DualN`] (width fixed at compile
//!   time, derivatives inline) and [`DualDyn`] (width fixed by the first
//!   seeding, derivatives on the heap)
//! - Arithmetic, power and elementary functions with the usual operators,
//!   including mixed dual/plain-value operands
//! - Nesting: `Dual` implements [`ElementaryOps`], so `Dual<Dual<f64, _>, _>`
//!   computes second derivatives
//! - [`gradient`] / [`gradient_dyn`] one-pass gradient helpers
//!
//! ```
//! use fwd_ad::DualDyn;
//!
//! let mut x = DualDyn::<f64>::constant(0.512);
//! let mut y = DualDyn::<f64>::constant(2.141);
//! x.seed(0, 2);
//! y.seed(1, 2);
//!
//! let f = x.atan() * &y;
//! assert!((f.derivative(0) - 2.141 / (1.0 + 0.512 * 0.512)).abs() < 1e-12);
//! assert!((f.derivative(1) - 0.512_f64.atan()).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arith;
pub mod dual;
pub mod gradient;
pub mod nested;
pub mod rules;
pub mod storage;

pub use dual::{Dual, DualDyn, DualN};
pub use fwd_core::{ElementaryOps, Error, Result};
pub use gradient::{gradient, gradient_dyn};
pub use storage::Storage;

#[cfg(feature = "mpfr")]
pub use fwd_core::BigFloat;

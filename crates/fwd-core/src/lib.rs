//! # fwd-core
//!
//! Core pieces shared by the forward-mode AD engine:
//! - [`ElementaryOps`]: the base-arithmetic seam (constants, comparisons,
//!   elementary functions, in-place forms) with implementations for `f64`
//!   and `f32`
//! - [`BigFloat`] (feature `mpfr`): an arbitrary-precision base type
//! - [`Error`] / [`Result`] and the checked-assertion helpers in [`check`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod check;
pub mod error;
pub mod ops;

#[cfg(feature = "mpfr")]
pub mod bigfloat;

#[cfg(feature = "mpfr")]
pub use bigfloat::BigFloat;
pub use error::{Error, Result};
pub use ops::ElementaryOps;

//! Derivative-vector storage policies.
//!
//! A [`Dual`](crate::dual::Dual) is generic over where its derivative vector
//! lives: inline in a fixed-size array whose width is a compile-time constant,
//! or in a heap slice whose width is fixed on first seeding. Both expose the
//! vector as a plain slice so the derivative rules are written once.

use std::fmt::Debug;

/// Backing store for a derivative vector.
pub trait Storage<T>: Clone + Debug + AsRef<[T]> + AsMut<[T]> {
    /// Compile-time width, or `None` when the width is chosen at runtime.
    const FIXED_WIDTH: Option<usize>;

    /// Build a vector of `width` entries, entry `i` produced by `f(i)`.
    ///
    /// Fixed-width stores ignore `width` beyond checking it; callers are
    /// expected to pass `FIXED_WIDTH` for them.
    fn build<F: FnMut(usize) -> T>(width: usize, f: F) -> Self;

    /// Number of entries.
    #[inline]
    fn width(&self) -> usize {
        self.as_ref().len()
    }
}

impl<T: Clone + Debug, const N: usize> Storage<T> for [T; N] {
    const FIXED_WIDTH: Option<usize> = Some(N);

    #[inline]
    fn build<F: FnMut(usize) -> T>(width: usize, f: F) -> Self {
        fwd_core::check::internal_assert(width == N, || {
            format!("fixed derivative storage of width {N} built with width {width}")
        });
        std::array::from_fn(f)
    }
}

impl<T: Clone + Debug> Storage<T> for Box<[T]> {
    const FIXED_WIDTH: Option<usize> = None;

    fn build<F: FnMut(usize) -> T>(width: usize, f: F) -> Self {
        tracing::trace!(width, "allocating derivative vector");
        (0..width).map(f).collect()
    }
}

//! Forward-mode AD variable with a vector of directional derivatives.
//!
//! A [`Dual`] carries a value and, once it depends on a seeded independent
//! variable, one derivative per independent variable. Until then it is a
//! constant: no derivative vector exists and every rule touching it takes the
//! cheap path.
//!
//! Two storage variants share all logic:
//! - [`DualN`]: width `N` fixed at compile time, derivatives inline
//! - [`DualDyn`]: width chosen by the first seeding, derivatives on the heap

use crate::storage::Storage;
use fwd_core::check::{internal_assert, user_assert, user_failure};
use fwd_core::{ElementaryOps, Error, Result};
use std::ops::{Index, IndexMut};

/// Dependency state of a [`Dual`].
#[derive(Debug, Clone)]
pub(crate) enum Tangent<S> {
    /// No derivative vector: the value depends on no seeded variable.
    Constant,
    /// Derivative vector with one entry per independent variable.
    Dependent(S),
}

/// Value plus directional derivatives over base type `T`, stored in `S`.
#[derive(Debug, Clone)]
pub struct Dual<T, S> {
    pub(crate) val: T,
    pub(crate) tangent: Tangent<S>,
}

/// Dual with `N` derivatives stored inline.
pub type DualN<T, const N: usize> = Dual<T, [T; N]>;

/// Dual whose derivative width is fixed at runtime by the first seeding.
pub type DualDyn<T> = Dual<T, Box<[T]>>;

impl<T: ElementaryOps, S: Storage<T>> Dual<T, S> {
    /// Create a constant (no derivative vector).
    #[inline]
    pub fn constant(val: T) -> Self {
        Self { val, tangent: Tangent::Constant }
    }

    /// Create a dependent variable with an explicit derivative vector.
    pub fn new(val: T, derivatives: S) -> Self {
        internal_assert(derivatives.width() > 0, || {
            "dependent variable with empty derivative vector".to_string()
        });
        Self { val, tangent: Tangent::Dependent(derivatives) }
    }

    // --- Accessors ---

    /// Function value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.val
    }

    /// Mutable function value. Derivatives are left untouched.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.val
    }

    /// Consume the variable, keeping only its value.
    #[inline]
    pub fn into_value(self) -> T {
        self.val
    }

    /// Whether a derivative vector exists.
    #[inline]
    pub fn is_dependent(&self) -> bool {
        matches!(self.tangent, Tangent::Dependent(_))
    }

    /// Number of derivatives stored: 0 for constants.
    #[inline]
    pub fn size(&self) -> usize {
        match &self.tangent {
            Tangent::Constant => 0,
            Tangent::Dependent(d) => d.width(),
        }
    }

    /// Derivative vector, if any.
    #[inline]
    pub fn derivatives(&self) -> Option<&[T]> {
        match &self.tangent {
            Tangent::Constant => None,
            Tangent::Dependent(d) => Some(d.as_ref()),
        }
    }

    /// Derivative with respect to independent variable `index`.
    ///
    /// Constants report zero. Fixed-width variables reject `index >= N` even
    /// when constant; dynamic constants accept any index because their width
    /// is not yet known.
    pub fn try_derivative(&self, index: usize) -> Result<T> {
        match &self.tangent {
            Tangent::Dependent(d) => {
                let d = d.as_ref();
                d.get(index)
                    .cloned()
                    .ok_or(Error::IndexOutOfBounds { index, width: d.len() })
            }
            Tangent::Constant => match S::FIXED_WIDTH {
                Some(width) if index >= width => Err(Error::IndexOutOfBounds { index, width }),
                _ => Ok(T::zero()),
            },
        }
    }

    /// Panicking form of [`try_derivative`](Self::try_derivative).
    #[track_caller]
    pub fn derivative(&self, index: usize) -> T {
        match self.try_derivative(index) {
            Ok(d) => d,
            Err(e) => user_failure(e),
        }
    }

    /// Reference to stored derivative `index`.
    pub fn try_deriv(&self, index: usize) -> Result<&T> {
        match &self.tangent {
            Tangent::Constant => Err(Error::NotDependent { index }),
            Tangent::Dependent(d) => {
                let d = d.as_ref();
                d.get(index).ok_or(Error::IndexOutOfBounds { index, width: d.len() })
            }
        }
    }

    /// Mutable reference to stored derivative `index`.
    ///
    /// Fails on constants: writing a derivative never creates a vector.
    pub fn try_deriv_mut(&mut self, index: usize) -> Result<&mut T> {
        match &mut self.tangent {
            Tangent::Constant => Err(Error::NotDependent { index }),
            Tangent::Dependent(d) => {
                let d = d.as_mut();
                let width = d.len();
                d.get_mut(index).ok_or(Error::IndexOutOfBounds { index, width })
            }
        }
    }

    // --- Transitions ---

    /// Replace the value and drop any derivative vector.
    #[inline]
    pub fn assign_value(&mut self, val: T) {
        self.val = val;
        self.tangent = Tangent::Constant;
    }

    /// Make `self` dependent with the same width as `other`.
    ///
    /// A constant `self` gets a zero vector; a dependent `self` must already
    /// have the matching width.
    pub fn depend_like(&mut self, other: &Self) {
        let width = other.size();
        internal_assert(width > 0, || "input is not a dependent variable".to_string());
        match &self.tangent {
            Tangent::Constant => {
                self.tangent = Tangent::Dependent(S::build(width, |_| T::zero()));
            }
            Tangent::Dependent(d) => {
                let left = d.width();
                user_assert(left == width, || Error::WidthMismatch { left, right: width });
            }
        }
    }

    /// Like [`depend_like`](Self::depend_like) for two inputs that must agree
    /// on their width.
    pub fn depend_like_pair(&mut self, a: &Self, b: &Self) {
        let (left, right) = (a.size(), b.size());
        internal_assert(left > 0, || "lhs-input is not a dependent variable".to_string());
        internal_assert(right > 0, || "rhs-input is not a dependent variable".to_string());
        user_assert(left == right, || Error::WidthMismatch { left, right });
        self.depend_like(a);
    }

    /// Shared seeding path: make `self` the independent variable `index` out
    /// of `width`.
    pub(crate) fn seed_with_width(&mut self, index: usize, width: usize) -> Result<()> {
        if let Some(fixed) = S::FIXED_WIDTH {
            if width != fixed {
                return Err(Error::WidthMismatch { left: fixed, right: width });
            }
        }
        if index >= width {
            return Err(Error::IndexOutOfBounds { index, width });
        }
        match &mut self.tangent {
            Tangent::Dependent(d) => {
                let d = d.as_mut();
                if d.len() != width {
                    return Err(Error::WidthMismatch { left: d.len(), right: width });
                }
                for (k, x) in d.iter_mut().enumerate() {
                    *x = if k == index { T::one() } else { T::zero() };
                }
            }
            Tangent::Constant => {
                tracing::trace!(index, width, "seeding independent variable");
                self.tangent = Tangent::Dependent(S::build(width, |k| {
                    if k == index { T::one() } else { T::zero() }
                }));
            }
        }
        Ok(())
    }
}

// --- Seeding: fixed width ---

impl<T: ElementaryOps, const N: usize> DualN<T, N> {
    /// Independent variable `index` out of `N`.
    #[track_caller]
    pub fn var(val: T, index: usize) -> Self {
        let mut x = Self::constant(val);
        x.seed(index);
        x
    }

    /// Mark as independent variable `index`: derivative `index` is 1, all
    /// others 0. Re-seeding overwrites the vector.
    #[track_caller]
    pub fn seed(&mut self, index: usize) {
        if let Err(e) = self.try_seed(index) {
            user_failure(e)
        }
    }

    /// Fallible form of [`seed`](Self::seed).
    pub fn try_seed(&mut self, index: usize) -> Result<()> {
        self.seed_with_width(index, N)
    }
}

// --- Seeding: runtime width ---

impl<T: ElementaryOps> DualDyn<T> {
    /// Independent variable `index` out of `width`.
    #[track_caller]
    pub fn var(val: T, index: usize, width: usize) -> Self {
        let mut x = Self::constant(val);
        x.seed(index, width);
        x
    }

    /// Mark as independent variable `index` out of `width`.
    ///
    /// The first seeding allocates the vector. Re-seeding a dependent
    /// variable with a different width fails.
    #[track_caller]
    pub fn seed(&mut self, index: usize, width: usize) {
        if let Err(e) = self.try_seed(index, width) {
            user_failure(e)
        }
    }

    /// Fallible form of [`seed`](Self::seed).
    pub fn try_seed(&mut self, index: usize, width: usize) -> Result<()> {
        self.seed_with_width(index, width)
    }
}

// --- Indexed derivative access ---

impl<T: ElementaryOps, S: Storage<T>> Index<usize> for Dual<T, S> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.try_deriv(index) {
            Ok(d) => d,
            Err(e) => user_failure(e),
        }
    }
}

impl<T: ElementaryOps, S: Storage<T>> IndexMut<usize> for Dual<T, S> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.try_deriv_mut(index) {
            Ok(d) => d,
            Err(e) => user_failure(e),
        }
    }
}

// --- Construction ---

impl<T: ElementaryOps, S: Storage<T>> Default for Dual<T, S> {
    #[inline]
    fn default() -> Self {
        Self::constant(T::zero())
    }
}

impl<T: ElementaryOps, S: Storage<T>> From<T> for Dual<T, S> {
    #[inline]
    fn from(val: T) -> Self {
        Self::constant(val)
    }
}

//! Operator overloads, comparisons and elementary functions for [`Dual`].
//!
//! Every binary operator reduces to a compound-assignment rule in
//! [`crate::rules`]. Owned left operands are updated in place and returned;
//! borrowed ones are cloned first, which is O(1) for constants.

use crate::dual::Dual;
use crate::rules;
use crate::storage::Storage;
use fwd_core::ElementaryOps;
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// --- Arithmetic: Dual op Dual, Dual op T ---

macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $rule:ident, $value_rule:ident) => {
        impl<T: ElementaryOps, S: Storage<T>> $OpAssign<&Dual<T, S>> for Dual<T, S> {
            #[inline]
            fn $op_assign(&mut self, rhs: &Dual<T, S>) {
                rules::$rule(self, rhs)
            }
        }

        impl<T: ElementaryOps, S: Storage<T>> $OpAssign for Dual<T, S> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                rules::$rule(self, &rhs)
            }
        }

        impl<T: ElementaryOps, S: Storage<T>> $OpAssign<T> for Dual<T, S> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                rules::$value_rule(self, &rhs)
            }
        }

        impl<T: ElementaryOps, S: Storage<T>> $OpAssign<&T> for Dual<T, S> {
            #[inline]
            fn $op_assign(&mut self, rhs: &T) {
                rules::$value_rule(self, rhs)
            }
        }

        impl<T: ElementaryOps, S: Storage<T>> $Op for Dual<T, S> {
            type Output = Self;
            #[inline]
            fn $op(mut self, rhs: Self) -> Self {
                rules::$rule(&mut self, &rhs);
                self
            }
        }

        impl<T: ElementaryOps, S: Storage<T>> $Op<&Dual<T, S>> for Dual<T, S> {
            type Output = Self;
            #[inline]
            fn $op(mut self, rhs: &Dual<T, S>) -> Self {
                rules::$rule(&mut self, rhs);
                self
            }
        }

        impl<T: ElementaryOps, S: Storage<T>> $Op for &Dual<T, S> {
            type Output = Dual<T, S>;
            #[inline]
            fn $op(self, rhs: Self) -> Dual<T, S> {
                let mut c = self.clone();
                rules::$rule(&mut c, rhs);
                c
            }
        }

        impl<T: ElementaryOps, S: Storage<T>> $Op<Dual<T, S>> for &Dual<T, S> {
            type Output = Dual<T, S>;
            #[inline]
            fn $op(self, rhs: Dual<T, S>) -> Dual<T, S> {
                let mut c = self.clone();
                rules::$rule(&mut c, &rhs);
                c
            }
        }

        impl<T: ElementaryOps, S: Storage<T>> $Op<T> for Dual<T, S> {
            type Output = Self;
            #[inline]
            fn $op(mut self, rhs: T) -> Self {
                rules::$value_rule(&mut self, &rhs);
                self
            }
        }

        impl<T: ElementaryOps, S: Storage<T>> $Op<&T> for Dual<T, S> {
            type Output = Self;
            #[inline]
            fn $op(mut self, rhs: &T) -> Self {
                rules::$value_rule(&mut self, rhs);
                self
            }
        }

        impl<T: ElementaryOps, S: Storage<T>> $Op<T> for &Dual<T, S> {
            type Output = Dual<T, S>;
            #[inline]
            fn $op(self, rhs: T) -> Dual<T, S> {
                let mut c = self.clone();
                rules::$value_rule(&mut c, &rhs);
                c
            }
        }

        impl<T: ElementaryOps, S: Storage<T>> $Op<&T> for &Dual<T, S> {
            type Output = Dual<T, S>;
            #[inline]
            fn $op(self, rhs: &T) -> Dual<T, S> {
                let mut c = self.clone();
                rules::$value_rule(&mut c, rhs);
                c
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_assign, add_value_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_assign, sub_value_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul_assign, mul_value_assign);
impl_binary_op!(Div, div, DivAssign, div_assign, div_assign, div_value_assign);

// --- Arithmetic: float op Dual ---
//
// Generic `T op Dual<T, S>` would need an impl on a bare type parameter, so
// the plain-value-on-the-left forms exist for the hardware floats only. Other
// base types go through `Dual::from` or the functions in `crate::rules`.

macro_rules! impl_float_lhs {
    ($t:ty) => {
        impl<S: Storage<$t>> Add<Dual<$t, S>> for $t {
            type Output = Dual<$t, S>;
            #[inline]
            fn add(self, mut rhs: Dual<$t, S>) -> Dual<$t, S> {
                rules::add_value_assign(&mut rhs, &self);
                rhs
            }
        }

        impl<S: Storage<$t>> Add<&Dual<$t, S>> for $t {
            type Output = Dual<$t, S>;
            #[inline]
            fn add(self, rhs: &Dual<$t, S>) -> Dual<$t, S> {
                let mut c = rhs.clone();
                rules::add_value_assign(&mut c, &self);
                c
            }
        }

        impl<S: Storage<$t>> Sub<Dual<$t, S>> for $t {
            type Output = Dual<$t, S>;
            #[inline]
            fn sub(self, rhs: Dual<$t, S>) -> Dual<$t, S> {
                rules::value_sub(&self, &rhs)
            }
        }

        impl<S: Storage<$t>> Sub<&Dual<$t, S>> for $t {
            type Output = Dual<$t, S>;
            #[inline]
            fn sub(self, rhs: &Dual<$t, S>) -> Dual<$t, S> {
                rules::value_sub(&self, rhs)
            }
        }

        impl<S: Storage<$t>> Mul<Dual<$t, S>> for $t {
            type Output = Dual<$t, S>;
            #[inline]
            fn mul(self, mut rhs: Dual<$t, S>) -> Dual<$t, S> {
                rules::mul_value_assign(&mut rhs, &self);
                rhs
            }
        }

        impl<S: Storage<$t>> Mul<&Dual<$t, S>> for $t {
            type Output = Dual<$t, S>;
            #[inline]
            fn mul(self, rhs: &Dual<$t, S>) -> Dual<$t, S> {
                let mut c = rhs.clone();
                rules::mul_value_assign(&mut c, &self);
                c
            }
        }

        impl<S: Storage<$t>> Div<Dual<$t, S>> for $t {
            type Output = Dual<$t, S>;
            #[inline]
            fn div(self, rhs: Dual<$t, S>) -> Dual<$t, S> {
                rules::value_div(&self, &rhs)
            }
        }

        impl<S: Storage<$t>> Div<&Dual<$t, S>> for $t {
            type Output = Dual<$t, S>;
            #[inline]
            fn div(self, rhs: &Dual<$t, S>) -> Dual<$t, S> {
                rules::value_div(&self, rhs)
            }
        }

        impl<S: Storage<$t>> PartialEq<Dual<$t, S>> for $t {
            #[inline]
            fn eq(&self, other: &Dual<$t, S>) -> bool {
                self.is_eq(&other.val)
            }
        }

        impl<S: Storage<$t>> PartialOrd<Dual<$t, S>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Dual<$t, S>) -> Option<Ordering> {
                compare(self, &other.val)
            }
        }
    };
}

impl_float_lhs!(f64);
impl_float_lhs!(f32);

// --- Neg ---

impl<T: ElementaryOps, S: Storage<T>> Neg for Dual<T, S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        rules::neg(&self)
    }
}

impl<T: ElementaryOps, S: Storage<T>> Neg for &Dual<T, S> {
    type Output = Dual<T, S>;
    #[inline]
    fn neg(self) -> Dual<T, S> {
        rules::neg(self)
    }
}

// --- Comparisons: value only ---

#[inline]
fn compare<T: ElementaryOps>(a: &T, b: &T) -> Option<Ordering> {
    if a.is_lt(b) {
        Some(Ordering::Less)
    } else if a.is_gt(b) {
        Some(Ordering::Greater)
    } else if a.is_eq(b) {
        Some(Ordering::Equal)
    } else {
        None
    }
}

impl<T: ElementaryOps, S: Storage<T>> PartialEq for Dual<T, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.val.is_eq(&other.val)
    }

    #[allow(clippy::partialeq_ne_impl)]
    #[inline]
    fn ne(&self, other: &Self) -> bool {
        self.val.is_ne(&other.val)
    }
}

impl<T: ElementaryOps, S: Storage<T>> PartialOrd for Dual<T, S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(&self.val, &other.val)
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.val.is_lt(&other.val)
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.val.is_le(&other.val)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.val.is_gt(&other.val)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.val.is_ge(&other.val)
    }
}

impl<T: ElementaryOps, S: Storage<T>> PartialEq<T> for Dual<T, S> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.val.is_eq(other)
    }
}

impl<T: ElementaryOps, S: Storage<T>> PartialOrd<T> for Dual<T, S> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        compare(&self.val, other)
    }
}

// --- Sum ---

impl<T: ElementaryOps, S: Storage<T>> Sum for Dual<T, S> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, x| {
            rules::add_assign(&mut acc, &x);
            acc
        })
    }
}

impl<'a, T: ElementaryOps, S: Storage<T>> Sum<&'a Dual<T, S>> for Dual<T, S> {
    fn sum<I: Iterator<Item = &'a Dual<T, S>>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, x| {
            rules::add_assign(&mut acc, x);
            acc
        })
    }
}

// --- Elementary functions ---

impl<T: ElementaryOps, S: Storage<T>> Dual<T, S> {
    /// Square: d/dx x^2 = 2x.
    #[inline]
    pub fn sqr(&self) -> Self {
        rules::sqr(self)
    }

    /// Square root: d/dx sqrt(x) = 1/(2*sqrt(x)).
    #[inline]
    pub fn sqrt(&self) -> Self {
        rules::sqrt(self)
    }

    /// Exponential: d/dx exp(x) = exp(x).
    #[inline]
    pub fn exp(&self) -> Self {
        rules::exp(self)
    }

    /// Natural logarithm: d/dx ln(x) = 1/x.
    #[inline]
    pub fn ln(&self) -> Self {
        rules::ln(self)
    }

    /// Sine.
    #[inline]
    pub fn sin(&self) -> Self {
        rules::sin(self)
    }

    /// Cosine.
    #[inline]
    pub fn cos(&self) -> Self {
        rules::cos(self)
    }

    /// Tangent: d/dx tan(x) = 1 + tan(x)^2.
    #[inline]
    pub fn tan(&self) -> Self {
        rules::tan(self)
    }

    /// Arcsine.
    #[inline]
    pub fn asin(&self) -> Self {
        rules::asin(self)
    }

    /// Arccosine.
    #[inline]
    pub fn acos(&self) -> Self {
        rules::acos(self)
    }

    /// Arctangent: d/dx atan(x) = 1/(1+x^2).
    #[inline]
    pub fn atan(&self) -> Self {
        rules::atan(self)
    }

    /// Generalized power with a dependent exponent.
    #[inline]
    pub fn pow(&self, exponent: &Self) -> Self {
        rules::pow(self, exponent)
    }

    /// Power with a plain exponent: d/dx x^n = n * x^(n-1).
    #[inline]
    pub fn powf(&self, exponent: &T) -> Self {
        rules::pow_value(self, exponent)
    }

    /// Plain base raised to a dual exponent: d/dy b^y = b^y * ln(b).
    #[inline]
    pub fn scalar_pow(base: &T, exponent: &Self) -> Self {
        rules::value_pow(base, exponent)
    }
}

#[cfg(test)]
mod tests {
    use crate::dual::{DualDyn, DualN};
    use approx::assert_relative_eq;

    type D2 = DualN<f64, 2>;

    #[test]
    fn test_operator_forms_agree() {
        let x = D2::var(3.0, 0);
        let y = D2::var(5.0, 1);

        let by_ref = &x * &y;
        let mixed = x.clone() * &y;
        let owned = x.clone() * y.clone();
        let mut compound = x.clone();
        compound *= &y;
        for z in [&by_ref, &mixed, &owned, &compound] {
            assert_eq!(*z.value(), 15.0);
            assert_eq!(z.derivatives(), Some(&[5.0, 3.0][..]));
        }
    }

    #[test]
    fn test_mixed_float_operands() {
        let x = D2::var(2.0, 0);

        let a = &x + 1.0;
        assert_eq!(*a.value(), 3.0);
        assert_eq!(a.derivative(0), 1.0);

        let b = 1.0 - &x;
        assert_eq!(*b.value(), -1.0);
        assert_eq!(b.derivative(0), -1.0);

        let c = 3.0 * x.clone();
        assert_eq!(c.derivative(0), 3.0);

        // d/dx (1/x) = -1/x^2
        let d = 1.0 / &x;
        assert_relative_eq!(d.derivative(0), -0.25, epsilon = 1e-12);

        let e = &x / 4.0;
        assert_eq!(e.derivative(0), 0.25);

        let mut f = x.clone();
        f -= 0.5;
        f *= 2.0;
        assert_eq!(*f.value(), 3.0);
        assert_eq!(f.derivative(0), 2.0);
    }

    #[test]
    fn test_f32_base() {
        let x = DualN::<f32, 1>::var(2.0, 0);
        let y = 2.0_f32 * &x * &x;
        assert_eq!(*y.value(), 8.0);
        assert_relative_eq!(y.derivative(0), 8.0, epsilon = 1e-6);
    }

    #[test]
    fn test_constant_operations_stay_constant() {
        let a = DualDyn::<f64>::constant(2.0);
        let b = DualDyn::<f64>::constant(3.0);
        let c = (&a * &b + 1.0).sin() / &b;
        assert!(!c.is_dependent());
        assert_eq!(c.size(), 0);
    }

    #[test]
    fn test_comparisons_use_value_only() {
        let x = D2::var(1.0, 0);
        let y = D2::var(1.0, 1);
        let z = D2::constant(2.0);

        assert!(x == y);
        assert!(x != z);
        assert!(x < z && x <= y && z > y && z >= x);
        assert!(x == 1.0 && x < 1.5 && 0.5 < x && 1.0 == x);
        assert!(D2::constant(f64::NAN).partial_cmp(&x).is_none());
    }

    #[test]
    fn test_sum() {
        let xs: Vec<D2> = vec![D2::var(1.0, 0), D2::var(2.0, 1), D2::constant(3.0)];
        let s: D2 = xs.iter().sum();
        assert_eq!(*s.value(), 6.0);
        assert_eq!(s.derivatives(), Some(&[1.0, 1.0][..]));

        let t: D2 = xs.into_iter().sum();
        assert_eq!(*t.value(), 6.0);
    }

    #[test]
    fn test_neg_and_pow_methods() {
        let x = D2::var(2.0, 0);
        let n = -&x;
        assert_eq!(n.derivative(0), -1.0);

        let p = x.powf(&3.0);
        assert_relative_eq!(p.derivative(0), 12.0, epsilon = 1e-12);

        let q = D2::scalar_pow(&2.0, &x);
        assert_relative_eq!(*q.value(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(q.derivative(0), 4.0 * 2.0_f64.ln(), epsilon = 1e-12);

        let y = D2::var(3.0, 1);
        let r = x.pow(&y);
        assert_relative_eq!(r.derivative(0), 12.0, epsilon = 1e-12);
        assert_relative_eq!(r.derivative(1), 8.0 * 2.0_f64.ln(), epsilon = 1e-12);
    }
}

//! [`ElementaryOps`] for [`Dual`], so a dual can be the base type of another
//! dual. Nesting `Dual<Dual<f64, _>, _>` yields second derivatives, and deeper
//! nesting yields higher orders.
//!
//! Constants lift to constant duals; everything else is the ordinary rule set.

use crate::dual::Dual;
use crate::rules;
use crate::storage::Storage;
use fwd_core::ElementaryOps;

impl<T: ElementaryOps, S: Storage<T>> ElementaryOps for Dual<T, S> {
    #[inline]
    fn from_i32(i: i32) -> Self {
        Self::constant(T::from_i32(i))
    }

    #[inline]
    fn zero() -> Self {
        Self::constant(T::zero())
    }

    #[inline]
    fn one() -> Self {
        Self::constant(T::one())
    }

    #[inline]
    fn two() -> Self {
        Self::constant(T::two())
    }

    #[inline]
    fn pi() -> Self {
        Self::constant(T::pi())
    }

    fn pos(&self) -> Self {
        rules::pos(self)
    }

    fn neg(&self) -> Self {
        rules::neg(self)
    }

    fn cadd(&mut self, rhs: &Self) {
        rules::add_assign(self, rhs)
    }

    fn csub(&mut self, rhs: &Self) {
        rules::sub_assign(self, rhs)
    }

    fn cmul(&mut self, rhs: &Self) {
        rules::mul_assign(self, rhs)
    }

    fn cdiv(&mut self, rhs: &Self) {
        rules::div_assign(self, rhs)
    }

    fn pow(&self, exponent: &Self) -> Self {
        rules::pow(self, exponent)
    }

    fn sqr(&self) -> Self {
        rules::sqr(self)
    }

    fn sqrt(&self) -> Self {
        rules::sqrt(self)
    }

    fn ln(&self) -> Self {
        rules::ln(self)
    }

    fn exp(&self) -> Self {
        rules::exp(self)
    }

    fn sin(&self) -> Self {
        rules::sin(self)
    }

    fn cos(&self) -> Self {
        rules::cos(self)
    }

    fn tan(&self) -> Self {
        rules::tan(self)
    }

    fn asin(&self) -> Self {
        rules::asin(self)
    }

    fn acos(&self) -> Self {
        rules::acos(self)
    }

    fn atan(&self) -> Self {
        rules::atan(self)
    }

    #[inline]
    fn is_eq(&self, other: &Self) -> bool {
        self.val.is_eq(&other.val)
    }

    #[inline]
    fn is_ne(&self, other: &Self) -> bool {
        self.val.is_ne(&other.val)
    }

    #[inline]
    fn is_lt(&self, other: &Self) -> bool {
        self.val.is_lt(&other.val)
    }

    #[inline]
    fn is_le(&self, other: &Self) -> bool {
        self.val.is_le(&other.val)
    }

    #[inline]
    fn is_gt(&self, other: &Self) -> bool {
        self.val.is_gt(&other.val)
    }

    #[inline]
    fn is_ge(&self, other: &Self) -> bool {
        self.val.is_ge(&other.val)
    }
}

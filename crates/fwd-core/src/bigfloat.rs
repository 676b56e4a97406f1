//! Arbitrary-precision base type backed by MPFR (via `rug`).
//!
//! The working precision is the const generic `PREC` (bits), so it is fixed by
//! the host program's choice of type rather than by process-wide state. Every
//! value created through [`ElementaryOps`] carries exactly `PREC` bits.

use crate::ops::ElementaryOps;
use rug::float::Constant;
use rug::ops::Pow;
use rug::{Assign, Float};

/// MPFR float with `PREC` bits of mantissa.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct BigFloat<const PREC: u32>(Float);

impl<const PREC: u32> BigFloat<PREC> {
    /// Build from anything MPFR can assign from, rounded to `PREC` bits.
    pub fn with_val<V>(val: V) -> Self
    where
        Float: Assign<V>,
    {
        Self(Float::with_val(PREC, val))
    }

    /// Borrow the underlying MPFR value.
    pub fn as_float(&self) -> &Float {
        &self.0
    }

    /// Unwrap the underlying MPFR value.
    pub fn into_inner(self) -> Float {
        self.0
    }

    /// Round to the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }
}

impl<const PREC: u32> From<f64> for BigFloat<PREC> {
    fn from(val: f64) -> Self {
        Self::with_val(val)
    }
}

impl<const PREC: u32> ElementaryOps for BigFloat<PREC> {
    #[inline]
    fn from_i32(i: i32) -> Self {
        Self::with_val(i)
    }

    fn pi() -> Self {
        Self::with_val(Constant::Pi)
    }

    fn neg(&self) -> Self {
        Self::with_val(-&self.0)
    }

    #[inline]
    fn cadd(&mut self, rhs: &Self) {
        self.0 += &rhs.0;
    }

    #[inline]
    fn csub(&mut self, rhs: &Self) {
        self.0 -= &rhs.0;
    }

    #[inline]
    fn cmul(&mut self, rhs: &Self) {
        self.0 *= &rhs.0;
    }

    #[inline]
    fn cdiv(&mut self, rhs: &Self) {
        self.0 /= &rhs.0;
    }

    fn add(&self, rhs: &Self) -> Self {
        Self::with_val(&self.0 + &rhs.0)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self::with_val(&self.0 - &rhs.0)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self::with_val(&self.0 * &rhs.0)
    }

    fn div(&self, rhs: &Self) -> Self {
        Self::with_val(&self.0 / &rhs.0)
    }

    fn pow(&self, exponent: &Self) -> Self {
        Self::with_val((&self.0).pow(&exponent.0))
    }

    fn inv(&self) -> Self {
        Self::with_val(self.0.recip_ref())
    }

    fn sqr(&self) -> Self {
        Self::with_val(self.0.square_ref())
    }

    fn sqrt(&self) -> Self {
        Self::with_val(self.0.sqrt_ref())
    }

    fn ln(&self) -> Self {
        Self::with_val(self.0.ln_ref())
    }

    fn exp(&self) -> Self {
        Self::with_val(self.0.exp_ref())
    }

    fn sin(&self) -> Self {
        Self::with_val(self.0.sin_ref())
    }

    fn cos(&self) -> Self {
        Self::with_val(self.0.cos_ref())
    }

    fn tan(&self) -> Self {
        Self::with_val(self.0.tan_ref())
    }

    fn asin(&self) -> Self {
        Self::with_val(self.0.asin_ref())
    }

    fn acos(&self) -> Self {
        Self::with_val(self.0.acos_ref())
    }

    fn atan(&self) -> Self {
        Self::with_val(self.0.atan_ref())
    }

    #[inline]
    fn is_eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    #[inline]
    fn is_ne(&self, other: &Self) -> bool {
        self.0 != other.0
    }

    #[inline]
    fn is_lt(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    #[inline]
    fn is_le(&self, other: &Self) -> bool {
        self.0 <= other.0
    }

    #[inline]
    fn is_gt(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    #[inline]
    fn is_ge(&self, other: &Self) -> bool {
        self.0 >= other.0
    }

    // In-place forms reuse the output's limbs instead of allocating.

    fn neg_into(&self, out: &mut Self) {
        out.0.assign(-&self.0);
    }

    fn add_into(&self, rhs: &Self, out: &mut Self) {
        out.0.assign(&self.0 + &rhs.0);
    }

    fn sub_into(&self, rhs: &Self, out: &mut Self) {
        out.0.assign(&self.0 - &rhs.0);
    }

    fn mul_into(&self, rhs: &Self, out: &mut Self) {
        out.0.assign(&self.0 * &rhs.0);
    }

    fn div_into(&self, rhs: &Self, out: &mut Self) {
        out.0.assign(&self.0 / &rhs.0);
    }

    fn pow_into(&self, exponent: &Self, out: &mut Self) {
        out.0.assign((&self.0).pow(&exponent.0));
    }

    fn inv_into(&self, out: &mut Self) {
        out.0.assign(self.0.recip_ref());
    }

    fn sqr_into(&self, out: &mut Self) {
        out.0.assign(self.0.square_ref());
    }

    fn sqrt_into(&self, out: &mut Self) {
        out.0.assign(self.0.sqrt_ref());
    }

    fn ln_into(&self, out: &mut Self) {
        out.0.assign(self.0.ln_ref());
    }

    fn exp_into(&self, out: &mut Self) {
        out.0.assign(self.0.exp_ref());
    }

    fn sin_into(&self, out: &mut Self) {
        out.0.assign(self.0.sin_ref());
    }

    fn cos_into(&self, out: &mut Self) {
        out.0.assign(self.0.cos_ref());
    }

    fn tan_into(&self, out: &mut Self) {
        out.0.assign(self.0.tan_ref());
    }

    fn asin_into(&self, out: &mut Self) {
        out.0.assign(self.0.asin_ref());
    }

    fn acos_into(&self, out: &mut Self) {
        out.0.assign(self.0.acos_ref());
    }

    fn atan_into(&self, out: &mut Self) {
        out.0.assign(self.0.atan_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    type Big = BigFloat<128>;

    #[test]
    fn test_precision_is_carried() {
        assert_eq!(Big::from_i32(3).as_float().prec(), 128);
        assert_eq!(Big::pi().as_float().prec(), 128);
        assert_eq!(Big::from(0.5).sqrt().as_float().prec(), 128);
    }

    #[test]
    fn test_matches_f64_at_low_accuracy() {
        let x = Big::from(0.512);
        assert_relative_eq!(x.atan().to_f64(), 0.512_f64.atan(), epsilon = 1e-15);
        assert_relative_eq!(x.exp().to_f64(), 0.512_f64.exp(), epsilon = 1e-15);
        let p = ElementaryOps::pow(&Big::from(2.0), &Big::from(0.5));
        assert_relative_eq!(p.to_f64(), std::f64::consts::SQRT_2, epsilon = 1e-15);
    }

    #[test]
    fn test_into_forms_match_value_forms() {
        let x = Big::from(0.3);
        let y = Big::from(1.7);
        let mut out = Big::zero();

        x.mul_into(&y, &mut out);
        assert!(out.is_eq(&ElementaryOps::mul(&x, &y)));
        x.asin_into(&mut out);
        assert!(out.is_eq(&x.asin()));
        y.pow_into(&x, &mut out);
        assert!(out.is_eq(&ElementaryOps::pow(&y, &x)));
        y.inv_into(&mut out);
        assert!(out.is_eq(&y.inv()));
    }

    #[test]
    fn test_extra_precision_beyond_f64() {
        // 1 + 2^-80 is representable at 128 bits but not in f64.
        let tiny = Big::with_val(Float::i_exp(1, -80));
        let mut x = Big::one();
        x.cadd(&tiny);
        assert!(x.is_gt(&Big::one()));
        assert_eq!(x.to_f64(), 1.0);
    }
}

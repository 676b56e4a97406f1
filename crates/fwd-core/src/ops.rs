//! [`ElementaryOps`]: the base-arithmetic seam of the AD engine.
//!
//! The derivative rules in `fwd-ad` never touch a base type's operators
//! directly; every constant, comparison and elementary function goes through
//! this trait. That keeps the rules identical for hardware floats,
//! arbitrary-precision floats and AD variables nested inside AD variables.
//!
//! Implementors must provide the value-returning forms. The `*_into` forms
//! write into a caller-supplied output and default to the value-returning
//! forms; expensive types override them to reuse the output's allocation.

use std::fmt::Debug;

/// Constants, comparisons and elementary math over a base type.
pub trait ElementaryOps: Clone + Debug {
    // --- Constants ---

    /// Integer literal.
    fn from_i32(i: i32) -> Self;

    /// Additive identity.
    #[inline]
    fn zero() -> Self {
        Self::from_i32(0)
    }

    /// Multiplicative identity.
    #[inline]
    fn one() -> Self {
        Self::from_i32(1)
    }

    /// The constant 2.
    #[inline]
    fn two() -> Self {
        Self::from_i32(2)
    }

    /// π.
    fn pi() -> Self;

    // --- Unary ---

    /// Unary plus.
    #[inline]
    fn pos(&self) -> Self {
        self.clone()
    }

    /// Negation.
    fn neg(&self) -> Self;

    // --- Compound assignment ---

    /// `self += rhs`
    fn cadd(&mut self, rhs: &Self);

    /// `self -= rhs`
    fn csub(&mut self, rhs: &Self);

    /// `self *= rhs`
    fn cmul(&mut self, rhs: &Self);

    /// `self /= rhs`
    fn cdiv(&mut self, rhs: &Self);

    // --- Binary ---

    /// `self + rhs`
    #[inline]
    fn add(&self, rhs: &Self) -> Self {
        let mut c = self.clone();
        c.cadd(rhs);
        c
    }

    /// `self - rhs`
    #[inline]
    fn sub(&self, rhs: &Self) -> Self {
        let mut c = self.clone();
        c.csub(rhs);
        c
    }

    /// `self * rhs`
    #[inline]
    fn mul(&self, rhs: &Self) -> Self {
        let mut c = self.clone();
        c.cmul(rhs);
        c
    }

    /// `self / rhs`
    #[inline]
    fn div(&self, rhs: &Self) -> Self {
        let mut c = self.clone();
        c.cdiv(rhs);
        c
    }

    /// Generalized power `self^exponent`.
    fn pow(&self, exponent: &Self) -> Self;

    // --- Elementary functions ---

    /// `1 / self`
    #[inline]
    fn inv(&self) -> Self {
        Self::div(&Self::one(), self)
    }

    /// `self * self`
    #[inline]
    fn sqr(&self) -> Self {
        Self::mul(self, self)
    }

    /// Square root.
    fn sqrt(&self) -> Self;

    /// Natural logarithm.
    fn ln(&self) -> Self;

    /// Exponential.
    fn exp(&self) -> Self;

    /// Sine.
    fn sin(&self) -> Self;

    /// Cosine.
    fn cos(&self) -> Self;

    /// Tangent.
    fn tan(&self) -> Self;

    /// Arcsine.
    fn asin(&self) -> Self;

    /// Arccosine.
    fn acos(&self) -> Self;

    /// Arctangent.
    fn atan(&self) -> Self;

    // --- Comparisons ---

    /// `self == other`
    fn is_eq(&self, other: &Self) -> bool;

    /// `self != other`
    fn is_ne(&self, other: &Self) -> bool;

    /// `self < other`
    fn is_lt(&self, other: &Self) -> bool;

    /// `self <= other`
    fn is_le(&self, other: &Self) -> bool;

    /// `self > other`
    fn is_gt(&self, other: &Self) -> bool;

    /// `self >= other`
    fn is_ge(&self, other: &Self) -> bool;

    // --- In-place forms: result written to `out` ---

    /// `out = -self`
    #[inline]
    fn neg_into(&self, out: &mut Self) {
        *out = self.neg();
    }

    /// `out = self + rhs`
    #[inline]
    fn add_into(&self, rhs: &Self, out: &mut Self) {
        out.clone_from(self);
        out.cadd(rhs);
    }

    /// `out = self - rhs`
    #[inline]
    fn sub_into(&self, rhs: &Self, out: &mut Self) {
        out.clone_from(self);
        out.csub(rhs);
    }

    /// `out = self * rhs`
    #[inline]
    fn mul_into(&self, rhs: &Self, out: &mut Self) {
        out.clone_from(self);
        out.cmul(rhs);
    }

    /// `out = self / rhs`
    #[inline]
    fn div_into(&self, rhs: &Self, out: &mut Self) {
        out.clone_from(self);
        out.cdiv(rhs);
    }

    /// `out = self^exponent`
    #[inline]
    fn pow_into(&self, exponent: &Self, out: &mut Self) {
        *out = self.pow(exponent);
    }

    /// `out = 1 / self`
    #[inline]
    fn inv_into(&self, out: &mut Self) {
        *out = self.inv();
    }

    /// `out = self * self`
    #[inline]
    fn sqr_into(&self, out: &mut Self) {
        self.mul_into(self, out);
    }

    /// `out = sqrt(self)`
    #[inline]
    fn sqrt_into(&self, out: &mut Self) {
        *out = self.sqrt();
    }

    /// `out = ln(self)`
    #[inline]
    fn ln_into(&self, out: &mut Self) {
        *out = self.ln();
    }

    /// `out = exp(self)`
    #[inline]
    fn exp_into(&self, out: &mut Self) {
        *out = self.exp();
    }

    /// `out = sin(self)`
    #[inline]
    fn sin_into(&self, out: &mut Self) {
        *out = self.sin();
    }

    /// `out = cos(self)`
    #[inline]
    fn cos_into(&self, out: &mut Self) {
        *out = self.cos();
    }

    /// `out = tan(self)`
    #[inline]
    fn tan_into(&self, out: &mut Self) {
        *out = self.tan();
    }

    /// `out = asin(self)`
    #[inline]
    fn asin_into(&self, out: &mut Self) {
        *out = self.asin();
    }

    /// `out = acos(self)`
    #[inline]
    fn acos_into(&self, out: &mut Self) {
        *out = self.acos();
    }

    /// `out = atan(self)`
    #[inline]
    fn atan_into(&self, out: &mut Self) {
        *out = self.atan();
    }
}

// --- f64 / f32 implementations ---

macro_rules! impl_elementary_ops_float {
    ($t:ident) => {
        impl ElementaryOps for $t {
            #[inline]
            fn from_i32(i: i32) -> Self {
                i as $t
            }

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn two() -> Self {
                2.0
            }

            #[inline]
            fn pi() -> Self {
                std::$t::consts::PI
            }

            #[inline]
            fn neg(&self) -> Self {
                -*self
            }

            #[inline]
            fn cadd(&mut self, rhs: &Self) {
                *self += *rhs;
            }

            #[inline]
            fn csub(&mut self, rhs: &Self) {
                *self -= *rhs;
            }

            #[inline]
            fn cmul(&mut self, rhs: &Self) {
                *self *= *rhs;
            }

            #[inline]
            fn cdiv(&mut self, rhs: &Self) {
                *self /= *rhs;
            }

            #[inline]
            fn add(&self, rhs: &Self) -> Self {
                *self + *rhs
            }

            #[inline]
            fn sub(&self, rhs: &Self) -> Self {
                *self - *rhs
            }

            #[inline]
            fn mul(&self, rhs: &Self) -> Self {
                *self * *rhs
            }

            #[inline]
            fn div(&self, rhs: &Self) -> Self {
                *self / *rhs
            }

            #[inline]
            fn pow(&self, exponent: &Self) -> Self {
                $t::powf(*self, *exponent)
            }

            #[inline]
            fn inv(&self) -> Self {
                $t::recip(*self)
            }

            #[inline]
            fn sqr(&self) -> Self {
                *self * *self
            }

            #[inline]
            fn sqrt(&self) -> Self {
                $t::sqrt(*self)
            }

            #[inline]
            fn ln(&self) -> Self {
                $t::ln(*self)
            }

            #[inline]
            fn exp(&self) -> Self {
                $t::exp(*self)
            }

            #[inline]
            fn sin(&self) -> Self {
                $t::sin(*self)
            }

            #[inline]
            fn cos(&self) -> Self {
                $t::cos(*self)
            }

            #[inline]
            fn tan(&self) -> Self {
                $t::tan(*self)
            }

            #[inline]
            fn asin(&self) -> Self {
                $t::asin(*self)
            }

            #[inline]
            fn acos(&self) -> Self {
                $t::acos(*self)
            }

            #[inline]
            fn atan(&self) -> Self {
                $t::atan(*self)
            }

            #[inline]
            fn is_eq(&self, other: &Self) -> bool {
                *self == *other
            }

            #[inline]
            fn is_ne(&self, other: &Self) -> bool {
                *self != *other
            }

            #[inline]
            fn is_lt(&self, other: &Self) -> bool {
                *self < *other
            }

            #[inline]
            fn is_le(&self, other: &Self) -> bool {
                *self <= *other
            }

            #[inline]
            fn is_gt(&self, other: &Self) -> bool {
                *self > *other
            }

            #[inline]
            fn is_ge(&self, other: &Self) -> bool {
                *self >= *other
            }
        }
    };
}

impl_elementary_ops_float!(f64);
impl_elementary_ops_float!(f32);

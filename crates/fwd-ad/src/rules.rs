//! Derivative propagation rules.
//!
//! Binary rules are written as compound assignments on the left operand and
//! dispatch on which operands carry a derivative vector, so constants never
//! pay for vector work. The value-returning operators in [`crate::arith`] are
//! thin wrappers over these.
//!
//! Elementary functions compute the derivative factor once, into call-local
//! temporaries, and then scale a copy of the input's derivative vector.

use crate::dual::{Dual, Tangent};
use crate::storage::Storage;
use fwd_core::check::user_assert;
use fwd_core::{ElementaryOps, Error};

#[inline]
fn check_widths<T>(left: &[T], right: &[T]) {
    user_assert(left.len() == right.len(), || Error::WidthMismatch {
        left: left.len(),
        right: right.len(),
    });
}

/// `d * f` for every entry of a copy of `d`.
#[inline]
fn scaled<T: ElementaryOps, S: Storage<T>>(d: &S, f: &T) -> S {
    let mut out = d.clone();
    for x in out.as_mut() {
        x.cmul(f);
    }
    out
}

/// `d / g` for every entry of a copy of `d`.
#[inline]
fn divided<T: ElementaryOps, S: Storage<T>>(d: &S, g: &T) -> S {
    let mut out = d.clone();
    for x in out.as_mut() {
        x.cdiv(g);
    }
    out
}

#[inline]
fn negated<T: ElementaryOps, S: Storage<T>>(d: &S) -> S {
    S::build(d.width(), |i| d.as_ref()[i].neg())
}

/// `-(a / b)`
#[inline]
fn neg_quotient<T: ElementaryOps>(a: &T, b: &T) -> T {
    let mut q = T::zero();
    a.div_into(b, &mut q);
    let mut f = T::zero();
    q.neg_into(&mut f);
    f
}

// --- Compound assignment: Dual op= Dual ---

/// `a += b`
pub fn add_assign<T: ElementaryOps, S: Storage<T>>(a: &mut Dual<T, S>, b: &Dual<T, S>) {
    a.val.cadd(&b.val);
    let Tangent::Dependent(db) = &b.tangent else { return };
    match &mut a.tangent {
        Tangent::Dependent(da) => {
            let da = da.as_mut();
            check_widths(da, db.as_ref());
            for (x, y) in da.iter_mut().zip(db.as_ref()) {
                x.cadd(y);
            }
        }
        Tangent::Constant => a.tangent = Tangent::Dependent(db.clone()),
    }
}

/// `a -= b`
pub fn sub_assign<T: ElementaryOps, S: Storage<T>>(a: &mut Dual<T, S>, b: &Dual<T, S>) {
    a.val.csub(&b.val);
    let Tangent::Dependent(db) = &b.tangent else { return };
    match &mut a.tangent {
        Tangent::Dependent(da) => {
            let da = da.as_mut();
            check_widths(da, db.as_ref());
            for (x, y) in da.iter_mut().zip(db.as_ref()) {
                x.csub(y);
            }
        }
        Tangent::Constant => a.tangent = Tangent::Dependent(negated(db)),
    }
}

/// `a *= b`
pub fn mul_assign<T: ElementaryOps, S: Storage<T>>(a: &mut Dual<T, S>, b: &Dual<T, S>) {
    match (&mut a.tangent, &b.tangent) {
        (Tangent::Dependent(da), Tangent::Dependent(db)) => {
            let da = da.as_mut();
            check_widths(da, db.as_ref());
            let mut tmp = T::zero();
            for (x, y) in da.iter_mut().zip(db.as_ref()) {
                x.cmul(&b.val);
                y.mul_into(&a.val, &mut tmp);
                x.cadd(&tmp);
            }
        }
        (Tangent::Dependent(da), Tangent::Constant) => {
            for x in da.as_mut() {
                x.cmul(&b.val);
            }
        }
        (Tangent::Constant, Tangent::Dependent(db)) => {
            a.tangent = Tangent::Dependent(scaled(db, &a.val));
        }
        (Tangent::Constant, Tangent::Constant) => {}
    }
    a.val.cmul(&b.val);
}

/// `a /= b`
pub fn div_assign<T: ElementaryOps, S: Storage<T>>(a: &mut Dual<T, S>, b: &Dual<T, S>) {
    a.val.cdiv(&b.val);
    match (&mut a.tangent, &b.tangent) {
        (Tangent::Dependent(da), Tangent::Dependent(db)) => {
            let da = da.as_mut();
            check_widths(da, db.as_ref());
            let mut tmp = T::zero();
            for (x, y) in da.iter_mut().zip(db.as_ref()) {
                y.mul_into(&a.val, &mut tmp);
                x.csub(&tmp);
                x.cdiv(&b.val);
            }
        }
        (Tangent::Dependent(da), Tangent::Constant) => {
            for x in da.as_mut() {
                x.cdiv(&b.val);
            }
        }
        (Tangent::Constant, Tangent::Dependent(db)) => {
            let f = neg_quotient(&a.val, &b.val);
            a.tangent = Tangent::Dependent(scaled(db, &f));
        }
        (Tangent::Constant, Tangent::Constant) => {}
    }
}

// --- Compound assignment: Dual op= T ---

/// `a += v`
#[inline]
pub fn add_value_assign<T: ElementaryOps, S: Storage<T>>(a: &mut Dual<T, S>, v: &T) {
    a.val.cadd(v);
}

/// `a -= v`
#[inline]
pub fn sub_value_assign<T: ElementaryOps, S: Storage<T>>(a: &mut Dual<T, S>, v: &T) {
    a.val.csub(v);
}

/// `a *= v`
pub fn mul_value_assign<T: ElementaryOps, S: Storage<T>>(a: &mut Dual<T, S>, v: &T) {
    if let Tangent::Dependent(da) = &mut a.tangent {
        for x in da.as_mut() {
            x.cmul(v);
        }
    }
    a.val.cmul(v);
}

/// `a /= v`
pub fn div_value_assign<T: ElementaryOps, S: Storage<T>>(a: &mut Dual<T, S>, v: &T) {
    a.val.cdiv(v);
    if let Tangent::Dependent(da) = &mut a.tangent {
        for x in da.as_mut() {
            x.cdiv(v);
        }
    }
}

// --- Plain value on the left ---

/// `v - b`
pub fn value_sub<T: ElementaryOps, S: Storage<T>>(v: &T, b: &Dual<T, S>) -> Dual<T, S> {
    let val = T::sub(v, &b.val);
    match &b.tangent {
        Tangent::Constant => Dual::constant(val),
        Tangent::Dependent(db) => Dual { val, tangent: Tangent::Dependent(negated(db)) },
    }
}

/// `v / b`
pub fn value_div<T: ElementaryOps, S: Storage<T>>(v: &T, b: &Dual<T, S>) -> Dual<T, S> {
    let val = T::div(v, &b.val);
    match &b.tangent {
        Tangent::Constant => Dual::constant(val),
        Tangent::Dependent(db) => {
            let f = neg_quotient(&val, &b.val);
            Dual { tangent: Tangent::Dependent(scaled(db, &f)), val }
        }
    }
}

// --- Powers ---

/// `exponent * base^(exponent - 1)`
fn pow_base_factor<T: ElementaryOps>(base: &T, exponent: &T) -> T {
    let mut e1 = exponent.clone();
    e1.csub(&T::one());
    let mut f = T::zero();
    base.pow_into(&e1, &mut f);
    f.cmul(exponent);
    f
}

/// `base^exponent * ln(base)`, given `val = base^exponent`
fn pow_exponent_factor<T: ElementaryOps>(val: &T, base: &T) -> T {
    let mut f = T::zero();
    base.ln_into(&mut f);
    f.cmul(val);
    f
}

/// `a^b`
pub fn pow<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>, b: &Dual<T, S>) -> Dual<T, S> {
    let val = T::pow(&a.val, &b.val);
    let tangent = match (&a.tangent, &b.tangent) {
        (Tangent::Constant, Tangent::Constant) => Tangent::Constant,
        (Tangent::Dependent(da), Tangent::Constant) => {
            Tangent::Dependent(scaled(da, &pow_base_factor(&a.val, &b.val)))
        }
        (Tangent::Constant, Tangent::Dependent(db)) => {
            Tangent::Dependent(scaled(db, &pow_exponent_factor(&val, &a.val)))
        }
        (Tangent::Dependent(da), Tangent::Dependent(db)) => {
            check_widths(da.as_ref(), db.as_ref());
            let fa = pow_base_factor(&a.val, &b.val);
            let fb = pow_exponent_factor(&val, &a.val);
            let mut d = scaled(da, &fa);
            let mut tmp = T::zero();
            for (x, y) in d.as_mut().iter_mut().zip(db.as_ref()) {
                y.mul_into(&fb, &mut tmp);
                x.cadd(&tmp);
            }
            Tangent::Dependent(d)
        }
    };
    Dual { val, tangent }
}

/// `a^e` for a plain exponent
pub fn pow_value<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>, e: &T) -> Dual<T, S> {
    let val = T::pow(&a.val, e);
    match &a.tangent {
        Tangent::Constant => Dual::constant(val),
        Tangent::Dependent(da) => {
            let f = pow_base_factor(&a.val, e);
            Dual { val, tangent: Tangent::Dependent(scaled(da, &f)) }
        }
    }
}

/// `v^b` for a plain base
pub fn value_pow<T: ElementaryOps, S: Storage<T>>(v: &T, b: &Dual<T, S>) -> Dual<T, S> {
    let val = T::pow(v, &b.val);
    match &b.tangent {
        Tangent::Constant => Dual::constant(val),
        Tangent::Dependent(db) => {
            let f = pow_exponent_factor(&val, v);
            Dual { tangent: Tangent::Dependent(scaled(db, &f)), val }
        }
    }
}

// --- Unary ---

/// Apply the chain rule: value `val`, derivative `d[a] * factor(a, val)`.
#[inline]
fn chain<T, S, F>(a: &Dual<T, S>, val: T, factor: F) -> Dual<T, S>
where
    T: ElementaryOps,
    S: Storage<T>,
    F: FnOnce(&T, &T) -> T,
{
    let tangent = match &a.tangent {
        Tangent::Constant => Tangent::Constant,
        Tangent::Dependent(da) => Tangent::Dependent(scaled(da, &factor(&a.val, &val))),
    };
    Dual { val, tangent }
}

/// Chain rule with a divisor: derivative `d[a] / divisor(a, val)`.
#[inline]
fn chain_div<T, S, F>(a: &Dual<T, S>, val: T, divisor: F) -> Dual<T, S>
where
    T: ElementaryOps,
    S: Storage<T>,
    F: FnOnce(&T, &T) -> T,
{
    let tangent = match &a.tangent {
        Tangent::Constant => Tangent::Constant,
        Tangent::Dependent(da) => Tangent::Dependent(divided(da, &divisor(&a.val, &val))),
    };
    Dual { val, tangent }
}

/// `sqrt(1 - x^2)`
fn sqrt_one_minus_sqr<T: ElementaryOps>(x: &T) -> T {
    let mut s = T::zero();
    x.sqr_into(&mut s);
    let mut r = T::one();
    r.csub(&s);
    r.sqrt_into(&mut s);
    s
}

/// `+a`
#[inline]
pub fn pos<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    a.clone()
}

/// `-a`
pub fn neg<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    let val = a.val.neg();
    match &a.tangent {
        Tangent::Constant => Dual::constant(val),
        Tangent::Dependent(da) => Dual { val, tangent: Tangent::Dependent(negated(da)) },
    }
}

/// `a^2`
pub fn sqr<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    chain(a, a.val.sqr(), |x, _| {
        let mut f = T::two();
        f.cmul(x);
        f
    })
}

/// `sqrt(a)`
pub fn sqrt<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    chain_div(a, a.val.sqrt(), |_, v| {
        let mut g = T::two();
        g.cmul(v);
        g
    })
}

/// `exp(a)`
pub fn exp<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    chain(a, a.val.exp(), |_, v| v.clone())
}

/// `ln(a)`
pub fn ln<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    chain_div(a, a.val.ln(), |x, _| x.clone())
}

/// `sin(a)`
pub fn sin<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    chain(a, a.val.sin(), |x, _| {
        let mut f = T::zero();
        x.cos_into(&mut f);
        f
    })
}

/// `cos(a)`
pub fn cos<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    chain(a, a.val.cos(), |x, _| {
        let mut s = T::zero();
        x.sin_into(&mut s);
        let mut f = T::zero();
        s.neg_into(&mut f);
        f
    })
}

/// `tan(a)`
pub fn tan<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    chain(a, a.val.tan(), |_, v| {
        let mut f = T::zero();
        v.sqr_into(&mut f);
        f.cadd(&T::one());
        f
    })
}

/// `asin(a)`
pub fn asin<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    chain_div(a, a.val.asin(), |x, _| sqrt_one_minus_sqr(x))
}

/// `acos(a)`
pub fn acos<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    chain(a, a.val.acos(), |x, _| {
        let mut r = T::zero();
        sqrt_one_minus_sqr(x).inv_into(&mut r);
        let mut f = T::zero();
        r.neg_into(&mut f);
        f
    })
}

/// `atan(a)`
pub fn atan<T: ElementaryOps, S: Storage<T>>(a: &Dual<T, S>) -> Dual<T, S> {
    chain_div(a, a.val.atan(), |x, _| {
        let mut g = T::zero();
        x.sqr_into(&mut g);
        g.cadd(&T::one());
        g
    })
}

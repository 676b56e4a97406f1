//! Differentiation over the MPFR-backed base type.
#![cfg(feature = "mpfr")]

use approx::assert_relative_eq;
use fwd_ad::{BigFloat, DualDyn, DualN, ElementaryOps};

type Big = BigFloat<160>;

#[test]
fn test_atan_times_at_high_precision() {
    let mut x = DualDyn::constant(Big::from(0.512));
    let mut y = DualDyn::constant(Big::from(2.141));
    x.seed(0, 2);
    y.seed(1, 2);

    let f = x.atan() * &y;
    assert_relative_eq!(f.value().to_f64(), 0.512_f64.atan() * 2.141, epsilon = 1e-14);
    assert_relative_eq!(f.derivative(0).to_f64(), 2.141 / (1.0 + 0.512 * 0.512), epsilon = 1e-14);
    assert_relative_eq!(f.derivative(1).to_f64(), 0.512_f64.atan(), epsilon = 1e-14);
    assert_eq!(f.derivative(0).as_float().prec(), 160);
}

#[test]
fn test_derivatives_keep_working_precision() {
    // d/dx exp(x) at x = 1 is e; check well past f64 resolution.
    let x = DualN::<Big, 1>::var(Big::one(), 0);
    let f = x.exp();
    let e = Big::one().exp();
    let mut diff = f.derivative(0);
    diff.csub(&e);
    assert!(diff.is_eq(&Big::zero()));
}

#[test]
fn test_mixed_plain_values() {
    let x = DualN::<Big, 1>::var(Big::from(3.0), 0);
    let f = &x * Big::from(2.0) - Big::from(1.0);
    assert_relative_eq!(f.value().to_f64(), 5.0);
    assert_relative_eq!(f.derivative(0).to_f64(), 2.0);
}

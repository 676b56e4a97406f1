//! API misuse is rejected: fallible forms return an error, panicking forms
//! abort with the same message.

use fwd_ad::{DualDyn, DualN, Error};

#[test]
#[should_panic(expected = "derivative vectors not of same size: 2,3")]
fn test_add_with_different_widths_panics() {
    let a = DualDyn::<f64>::var(1.0, 0, 2);
    let b = DualDyn::<f64>::var(2.0, 0, 3);
    let _ = &a + &b;
}

#[test]
#[should_panic(expected = "derivative vectors not of same size: 3,2")]
fn test_mul_with_different_widths_panics() {
    let a = DualDyn::<f64>::var(1.0, 0, 3);
    let b = DualDyn::<f64>::var(2.0, 1, 2);
    let _ = a * b;
}

#[test]
#[should_panic(expected = "derivative vectors not of same size")]
fn test_pow_with_different_widths_panics() {
    let a = DualDyn::<f64>::var(1.5, 0, 1);
    let b = DualDyn::<f64>::var(2.0, 1, 4);
    let _ = a.pow(&b);
}

#[test]
fn test_mismatch_is_fine_when_one_side_is_constant() {
    let a = DualDyn::<f64>::var(1.0, 0, 2);
    let b = DualDyn::<f64>::constant(2.0);
    let c = &a * &b;
    assert_eq!(c.size(), 2);
}

#[test]
#[should_panic(expected = "index 5 out of bounds [0,2)")]
fn test_derivative_past_width_panics() {
    let a = DualDyn::<f64>::var(1.0, 0, 2);
    let _ = a.derivative(5);
}

#[test]
#[should_panic(expected = "index 2 out of bounds [0,2)")]
fn test_fixed_constant_derivative_past_width_panics() {
    let a = DualN::<f64, 2>::constant(1.0);
    let _ = a.derivative(2);
}

#[test]
#[should_panic(expected = "derivative vectors not of same size: 2,3")]
fn test_reseed_with_other_width_panics() {
    let mut a = DualDyn::<f64>::var(1.0, 0, 2);
    a.seed(0, 3);
}

#[test]
#[should_panic(expected = "index 4 out of bounds [0,4)")]
fn test_seed_index_past_width_panics() {
    let mut a = DualDyn::<f64>::constant(1.0);
    a.seed(4, 4);
}

#[test]
fn test_fallible_forms_report_errors() {
    let mut a = DualDyn::<f64>::constant(1.0);
    assert_eq!(a.try_seed(4, 4), Err(Error::IndexOutOfBounds { index: 4, width: 4 }));
    assert_eq!(a.try_deriv_mut(0).err(), Some(Error::NotDependent { index: 0 }));

    a.seed(1, 4);
    assert_eq!(a.try_seed(0, 2), Err(Error::WidthMismatch { left: 4, right: 2 }));
    assert_eq!(a.try_derivative(7), Err(Error::IndexOutOfBounds { index: 7, width: 4 }));
    assert!(a.try_deriv(3).is_ok());

    let mut b = DualN::<f64, 3>::constant(0.0);
    assert_eq!(b.try_seed(3), Err(Error::IndexOutOfBounds { index: 3, width: 3 }));
    assert!(b.try_seed(2).is_ok());
}

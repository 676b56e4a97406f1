//! One-pass gradients: seed every input, evaluate once, read back all
//! derivatives.

use crate::dual::{DualDyn, DualN};
use fwd_core::ElementaryOps;

/// Value and gradient of `f` at `x`, with the width fixed at compile time.
pub fn gradient<T, F, const N: usize>(f: F, x: [T; N]) -> (T, [T; N])
where
    T: ElementaryOps,
    F: FnOnce([DualN<T, N>; N]) -> DualN<T, N>,
{
    let mut index = 0;
    let vars = x.map(|v| {
        let var = DualN::var(v, index);
        index += 1;
        var
    });
    let y = f(vars);
    let grad = std::array::from_fn(|i| y.derivative(i));
    (y.into_value(), grad)
}

/// Value and gradient of `f` at `x`, with the width taken from `x.len()`.
pub fn gradient_dyn<T, F>(f: F, x: &[T]) -> (T, Vec<T>)
where
    T: ElementaryOps,
    F: FnOnce(&[DualDyn<T>]) -> DualDyn<T>,
{
    let n = x.len();
    let vars: Vec<DualDyn<T>> =
        x.iter().enumerate().map(|(i, v)| DualDyn::var(v.clone(), i, n)).collect();
    let y = f(&vars);
    let grad = (0..n).map(|i| y.derivative(i)).collect();
    (y.into_value(), grad)
}

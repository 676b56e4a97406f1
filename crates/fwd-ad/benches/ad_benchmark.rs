use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fwd_ad::{DualDyn, DualN, gradient};
use std::hint::black_box;

fn x0(n: usize) -> Vec<f64> {
    (0..n).map(|i| 1.0 + (i as f64) * 1e-3).collect()
}

fn bench_fixed_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("dual_fixed");

    macro_rules! bench_width {
        ($n:literal) => {
            group.bench_function(BenchmarkId::new("sum_ln_sqr_plus_one", $n), |b| {
                let x: [f64; $n] = std::array::from_fn(|i| 1.0 + (i as f64) * 1e-3);
                b.iter(|| {
                    // f(x) = sum_i ln(x_i^2 + 1)
                    let (v, g) = gradient(
                        |xs: [DualN<f64, $n>; $n]| xs.iter().map(|x| (x.sqr() + 1.0).ln()).sum(),
                        black_box(x),
                    );
                    black_box((v, g[0]));
                })
            });
        };
    }

    bench_width!(4);
    bench_width!(16);
    bench_width!(64);

    group.finish();
}

fn bench_dynamic_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("dual_dynamic");

    for n_vars in [4usize, 16, 64, 256] {
        group.bench_with_input(
            BenchmarkId::new("sum_ln_sqr_plus_one", n_vars),
            &n_vars,
            |b, &n| {
                let x = x0(n);
                b.iter(|| {
                    let xs: Vec<DualDyn<f64>> =
                        x.iter().enumerate().map(|(i, &v)| DualDyn::var(v, i, n)).collect();
                    let mut acc = DualDyn::<f64>::constant(0.0);
                    for x in &xs {
                        acc += (x.sqr() + 1.0).ln();
                    }
                    black_box(acc.derivative(0));
                })
            },
        );

        // Mostly-constant expression: only one input is seeded.
        group.bench_with_input(BenchmarkId::new("single_seed", n_vars), &n_vars, |b, &n| {
            let x = x0(n);
            b.iter(|| {
                let mut acc = DualDyn::<f64>::constant(0.0);
                for (i, &v) in x.iter().enumerate() {
                    let xi =
                        if i == 0 { DualDyn::var(v, 0, n) } else { DualDyn::constant(v) };
                    acc += (xi.sqr() + 1.0).ln();
                }
                black_box(acc.derivative(0));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixed_width, bench_dynamic_width);
criterion_main!(benches);

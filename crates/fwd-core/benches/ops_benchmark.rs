use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fwd_core::{BigFloat, ElementaryOps};
use std::hint::black_box;

type Big = BigFloat<256>;

fn inputs(n: usize) -> Vec<Big> {
    (0..n).map(|i| Big::from(0.1 + (i as f64) * 1e-3)).collect()
}

fn bench_value_vs_into(c: &mut Criterion) {
    let mut group = c.benchmark_group("bigfloat_ops");

    for n in [16usize, 256] {
        let xs = inputs(n);

        // sum_i sin(x_i) * x_i, one fresh value per call
        group.bench_with_input(BenchmarkId::new("value_forms", n), &xs, |b, xs| {
            b.iter(|| {
                let mut acc = Big::zero();
                for x in xs {
                    acc.cadd(&ElementaryOps::mul(&x.sin(), x));
                }
                black_box(acc);
            })
        });

        // Same sum, scratch values reused across iterations
        group.bench_with_input(BenchmarkId::new("into_forms", n), &xs, |b, xs| {
            let mut s = Big::zero();
            let mut p = Big::zero();
            b.iter(|| {
                let mut acc = Big::zero();
                for x in xs {
                    x.sin_into(&mut s);
                    s.mul_into(x, &mut p);
                    acc.cadd(&p);
                }
                black_box(acc);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_value_vs_into);
criterion_main!(benches);

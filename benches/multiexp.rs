// -*- mode: rust; -*-
//
// This file is part of multiexp.
// See LICENSE for licensing information.

//! Benchmarks comparing the multi-exponentiation backends.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use multiexp::mocks::{MockFr, MockG1, MOCK_SCALAR_BITS};
use multiexp::scalar_mul::{multi_exp, MultiExpMethod};
use multiexp::traits::Group;
use multiexp::window::{batch_exp, get_exp_window_size, get_window_table};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_instance(length: usize) -> (Vec<MockG1>, Vec<MockFr>) {
    let mut rng = StdRng::seed_from_u64(0xbe_ec);
    let bases = (0..length).map(|_| MockG1::random(&mut rng)).collect();
    let scalars = (0..length).map(|_| MockFr::random(&mut rng)).collect();
    (bases, scalars)
}

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_exp");
    for length in [256usize, 4096] {
        let (bases, scalars) = random_instance(length);
        for (name, method) in [
            ("naive", MultiExpMethod::Naive),
            ("naive_plain", MultiExpMethod::NaivePlain),
            ("bdlo12", MultiExpMethod::Bdlo12),
            ("bos_coster", MultiExpMethod::BosCoster),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, length),
                &length,
                |b, _| b.iter(|| multi_exp(&bases, &scalars, method, 1)),
            );
        }
    }
    group.finish();
}

fn bench_fixed_base(c: &mut Criterion) {
    let (_, scalars) = random_instance(4096);
    let g = MockG1::generator();
    let window = get_exp_window_size::<MockG1>(scalars.len());
    let table = get_window_table(MOCK_SCALAR_BITS, window, &g);

    c.bench_function("batch_exp/4096", |b| {
        b.iter(|| batch_exp(MOCK_SCALAR_BITS, window, &table, &scalars))
    });
}

criterion_group!(benches, bench_backends, bench_fixed_base);
criterion_main!(benches);

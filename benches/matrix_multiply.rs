//! Benchmarks for boolean sparse matrix multiplication

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use boole::{multiply_parallel, multiply_with_config, BoolMatrixCSR, BooleConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_matrix_multiply(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let a = create_test_matrix(1000, 0.01, &mut rng);
    let b = create_test_matrix(1000, 0.01, &mut rng);

    let dense_path = BooleConfig {
        dense_accum_threshold: usize::MAX,
        ..BooleConfig::default()
    };
    c.bench_function("multiply_dense_accumulator", |bench| {
        bench.iter(|| multiply_with_config(black_box(&a), black_box(&b), &dense_path).unwrap())
    });

    let sort_path = BooleConfig {
        dense_accum_threshold: 0,
        ..BooleConfig::default()
    };
    c.bench_function("multiply_sort_accumulator", |bench| {
        bench.iter(|| multiply_with_config(black_box(&a), black_box(&b), &sort_path).unwrap())
    });

    let parallel = BooleConfig::default();
    c.bench_function("multiply_parallel", |bench| {
        bench.iter(|| multiply_parallel(black_box(&a), black_box(&b), &parallel).unwrap())
    });
}

/// Create a square test matrix with the given entry density
fn create_test_matrix(n: usize, density: f64, rng: &mut StdRng) -> BoolMatrixCSR {
    BoolMatrixCSR::random(n, n, density, rng)
}

criterion_group!(benches, bench_matrix_multiply);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use matbench::{Algorithm, Matrix, OperationStats};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

/// Compare every available strategy on random f64 matrices
fn bench_algorithms_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_f64");
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for n in [16usize, 64, 128] {
        let a: Matrix<f64> = Matrix::random(n, n, &mut rng);
        let b: Matrix<f64> = Matrix::random(n, n, &mut rng);

        for algorithm in Algorithm::available() {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), n), &n, |bench, _| {
                let mut stats = OperationStats::new();
                bench.iter(|| {
                    algorithm
                        .multiply(black_box(&a), black_box(&b), &mut stats)
                        .unwrap()
                });
            });
        }
    }
    group.finish();
}

/// Complex arithmetic is where Winograd's saved multiplications matter most
fn bench_algorithms_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_complex");
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let n = 64;
    let a: Matrix<Complex64> = Matrix::random(n, n, &mut rng);
    let b: Matrix<Complex64> = Matrix::random(n, n, &mut rng);

    for algorithm in Algorithm::available() {
        group.bench_function(algorithm.name(), |bench| {
            let mut stats = OperationStats::new();
            bench.iter(|| {
                algorithm
                    .multiply(black_box(&a), black_box(&b), &mut stats)
                    .unwrap()
            });
        });
    }
    group.finish();
}

/// Cost of the quadrant copies Strassen pays at every level
fn bench_split_join(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let m: Matrix<f64> = Matrix::random(256, 256, &mut rng);

    c.bench_function("split_join_256", |bench| {
        bench.iter(|| {
            let quadrants = black_box(&m).split();
            let mut out = Matrix::new(256, 256);
            out.join(&quadrants);
            out
        });
    });
}

criterion_group!(
    benches,
    bench_algorithms_f64,
    bench_algorithms_complex,
    bench_split_join
);
criterion_main!(benches);

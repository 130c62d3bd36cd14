/// Performance benchmarks for union-find and percolation operations
///
/// Run with: cargo bench
///
/// Row-major opening is the worst case for an unweighted union-find, so it is
/// the pattern tracked here alongside random-order threshold trials.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use percolation::stats::run_trial;
use percolation::{Percolation, UnionFind};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark: open every site of an n-by-n grid in row-major order
fn bench_row_major_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_major_open");

    for n in [64usize, 256, 512].iter() {
        group.throughput(Throughput::Elements((n * n) as u64));
        group.sample_size(10);

        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| {
                let mut p = Percolation::new(n).unwrap();
                for row in 0..n {
                    for col in 0..n {
                        p.open(row, col).unwrap();
                    }
                }
                black_box(p.percolates())
            });
        });
    }

    group.finish();
}

/// Benchmark: one Monte Carlo trial in random order
fn bench_random_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_trial");

    for n in [64usize, 256].iter() {
        group.throughput(Throughput::Elements((n * n) as u64));
        group.sample_size(10);

        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(17);
            b.iter(|| black_box(run_trial(n, &mut rng).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: long chain of unions followed by finds from the far end
fn bench_union_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_chain");
    let size = 1_000_000usize;
    group.throughput(Throughput::Elements(size as u64));
    group.sample_size(10);

    group.bench_function("chain_1m", |b| {
        b.iter(|| {
            let mut uf = UnionFind::new(size);
            for i in 1..size {
                uf.union(i - 1, i).unwrap();
            }
            black_box(uf.find(size - 1).unwrap())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_row_major_open,
    bench_random_trial,
    bench_union_chain
);
criterion_main!(benches);

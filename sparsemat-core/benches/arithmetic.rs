use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparsemat_core::{RowIndex, SparseMatrix};

fn random_matrix(rng: &mut StdRng, size: usize, nnz: usize) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(size, size);
    for _ in 0..nnz {
        let row = rng.gen_range(0..size);
        let col = rng.gen_range(0..size);
        matrix.set_element(row, col, rng.gen_range(1..100));
    }
    matrix
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let mut rng = StdRng::seed_from_u64(42);

    for &size in &[1_000usize, 10_000, 100_000] {
        let nnz = size * 4;
        let a = random_matrix(&mut rng, size, nnz);
        let b = random_matrix(&mut rng, size, nnz);

        group.bench_with_input(BenchmarkId::new("fresh_index", size), &size, |bench, _| {
            bench.iter(|| black_box(a.multiply(&b)))
        });

        let index = RowIndex::build(&b);
        group.bench_with_input(BenchmarkId::new("reused_index", size), &size, |bench, _| {
            bench.iter(|| black_box(a.multiply_with_index(&index)))
        });
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    let mut rng = StdRng::seed_from_u64(7);

    for &size in &[1_000usize, 100_000] {
        let a = random_matrix(&mut rng, size, size * 4);
        let b = random_matrix(&mut rng, size, size * 4);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(a.add(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply, bench_add);
criterion_main!(benches);

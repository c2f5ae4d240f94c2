/// Criterion benchmarks for the data transforms behind the charts.
///
/// Rendering itself is dominated by the bitmap backend and font rasterising,
/// so only the pure steps are measured:
///   • category_rollup   – grouping and mean per category
///   • sorted_by_change  – delta chart ordering
use benchplot::{
    chart::{category::category_rollup, delta::sorted_by_change},
    Entry,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn entries(n: usize) -> Vec<Entry> {
    (0..n)
        .map(|i| Entry {
            name: format!("BenchmarkCase{i}"),
            category: format!("category{}", i % 17),
            old_ns_per_op: 1000.0 + i as f64,
            new_ns_per_op: 950.0 + (i % 100) as f64,
            ns_per_op_change_pct: ((i * 7919) % 200) as f64 / 2.0 - 50.0,
            old_bytes_per_op: 256.0,
            new_bytes_per_op: 192.0,
            old_allocs_per_op: 4.0,
            new_allocs_per_op: 3.0,
            bytes_change_pct: None,
            allocs_change_pct: None,
            winner: None,
        })
        .collect()
}

fn bench_rollup(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_rollup");
    for n in [16, 256, 4096] {
        let data = entries(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| category_rollup(data))
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_by_change");
    for n in [16, 256, 4096] {
        let data = entries(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| sorted_by_change(data))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rollup, bench_sort);
criterion_main!(benches);

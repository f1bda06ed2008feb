//! Benchmarks for health scoring and roster lookups
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rose_csm::roster::{Customer, Roster, RosterStore};
use rose_csm::scoring::compute;

fn bench_compute(c: &mut Criterion) {
    c.bench_function("compute_score", |b| {
        b.iter(|| compute(black_box(5.0), black_box(2.0), black_box(7.0)))
    });
}

fn bench_roster(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster");

    for size in [5, 500, 5000] {
        let customers: Vec<Customer> = (0..size)
            .map(|i| Customer::new(format!("Customer {}", i), 1000 * i as u64, "Dane", 7.0))
            .collect();
        let store = RosterStore::from_roster(Roster::new(customers));
        let target = format!("Customer {}", size - 1);

        group.bench_function(format!("get_{}", size), |b| {
            b.iter(|| store.get(black_box(&target)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_roster);
criterion_main!(benches);

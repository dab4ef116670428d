//! List Modification Benchmarks - criterion harness
//!
//! Run with: cargo bench --bench list_modification
//!
//! One group per (suite, operation), one benchmark per implementation and
//! size. Same grid as the `list-bench` runner.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use list_modification_benchmarks::{
    head_add_remove, iterate, middle_add_remove, populate, tail_add_remove, Grid, Operation,
    ParamSet, SeqList, Suite, Trial,
};

// ============================================================================
// Per-operation bodies
// ============================================================================

fn bench_operation(c: &mut Criterion, suite: Suite, op: Operation) {
    let mut group = c.benchmark_group(format!("{}/{}", suite, op));
    group.throughput(Throughput::Elements(1));

    let grid = Grid::for_suite(suite);
    for &implementation in &grid.implementations {
        for &size in &grid.sizes {
            let params = ParamSet::new(implementation, size);
            let id = BenchmarkId::new(implementation.name(), size);

            match op {
                // The fresh list is dropped outside the timed section.
                Operation::Populate => {
                    group.bench_with_input(id, &params, |b, p| {
                        b.iter_with_large_drop(|| {
                            populate(black_box(p.implementation), black_box(p.size))
                        })
                    });
                }
                Operation::Iteration => {
                    let trial = Trial::setup(params);
                    group.bench_with_input(id, &params, |b, _| b.iter(|| iterate(trial.list())));
                }
                Operation::HeadAddRemove => {
                    let mut trial = Trial::setup(params);
                    group.bench_with_input(id, &params, |b, _| {
                        b.iter(|| head_add_remove(trial.list_mut()).len())
                    });
                }
                Operation::MiddleAddRemove => {
                    let mut trial = Trial::setup(params);
                    group.bench_with_input(id, &params, |b, p| {
                        b.iter(|| middle_add_remove(trial.list_mut(), black_box(p.size)).len())
                    });
                }
                Operation::TailAddRemove => {
                    let mut trial = Trial::setup(params);
                    group.bench_with_input(id, &params, |b, p| {
                        b.iter(|| tail_add_remove(trial.list_mut(), black_box(p.size)).len())
                    });
                }
            }
        }
    }

    group.finish();
}

// ============================================================================
// Suites
// ============================================================================

fn thread_unsafe(c: &mut Criterion) {
    for op in Operation::ALL {
        bench_operation(c, Suite::ThreadUnsafe, op);
    }
}

fn thread_safe(c: &mut Criterion) {
    for op in Operation::ALL {
        bench_operation(c, Suite::ThreadSafe, op);
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(5));
    targets = thread_unsafe, thread_safe
}
criterion_main!(benches);

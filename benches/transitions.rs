//! Benchmarks for the machine hot paths
//!
//! Measures moving along an edge, legality checks, reading the current
//! state, and declaring a blueprint then creating a machine from it.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fsm_blueprint::{Blueprint, Machine};

const A: &str = "A";
const B: &str = "B";
const C: &str = "C";

fn make_blueprint() -> Blueprint<&'static str> {
    let mut blueprint = Blueprint::new();
    blueprint.start(A);
    blueprint.from(A).to(B).unwrap();
    blueprint.from(B).to(C).unwrap();
    blueprint.from(B).to(B).unwrap();
    blueprint
}

fn make_machine() -> Machine<&'static str> {
    make_blueprint().machine().unwrap()
}

/// Benchmark repeated self-loop transitions
fn bench_transitions(c: &mut Criterion) {
    let mut machine = make_machine();
    machine.goto(B).unwrap();

    c.bench_function("goto", |b| {
        b.iter(|| machine.goto(black_box(B)));
    });
}

/// Benchmark legality checks
fn bench_can_goto(c: &mut Criterion) {
    let machine = make_machine();

    c.bench_function("can_goto", |b| {
        b.iter(|| machine.can_goto(black_box(&B)));
    });
}

fn bench_current_state(c: &mut Criterion) {
    let machine = make_machine();

    c.bench_function("current_state", |b| {
        b.iter(|| *black_box(&machine).current_state());
    });
}

/// Benchmark declaring a blueprint and creating a machine from it
fn bench_build_machine(c: &mut Criterion) {
    c.bench_function("build_machine", |b| {
        b.iter(make_machine);
    });
}

/// Benchmark lookups against tables of growing size
fn bench_table_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("goto_table_size");

    for size in [8u32, 64, 512].iter() {
        let mut blueprint = Blueprint::new();
        blueprint.start(0u32);
        for state in 0..*size {
            blueprint.from(state).to((state + 1) % size).unwrap();
        }
        let mut machine = blueprint.machine().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let next = (*machine.current_state() + 1) % size;
                machine.goto(black_box(next))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_transitions,
    bench_can_goto,
    bench_current_state,
    bench_build_machine,
    bench_table_size
);
criterion_main!(benches);

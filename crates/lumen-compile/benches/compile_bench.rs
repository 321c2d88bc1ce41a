//! Benchmarks for gate lowering and circuit assembly
//!
//! Run with: cargo bench -p lumen-compile

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lumen_compile::{OpticalCircuit, compile_gate};
use lumen_ir::{Encoding, Gate, Qubit};

/// Benchmark single-gate lowering across register sizes. Element counts
/// scale as 2^N, so this tracks the enumeration cost directly.
fn bench_compile_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_gate");

    for num_qubits in &[3usize, 6, 9, 12] {
        group.bench_with_input(
            BenchmarkId::new("cnot_pol_to_path", num_qubits),
            num_qubits,
            |b, &n| {
                let gate = Gate::Cnot {
                    control: Qubit(1),
                    target: Qubit(3),
                };
                b.iter(|| {
                    compile_gate(black_box(&gate), black_box(n), Encoding::PolPath).unwrap()
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ry_path_qubit", num_qubits),
            num_qubits,
            |b, &n| {
                let gate = Gate::Ry(Qubit(2));
                b.iter(|| {
                    compile_gate(black_box(&gate), black_box(n), Encoding::PolPath).unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark sequential circuit assembly.
fn bench_circuit_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_build");

    group.bench_function("ten_gate_sequence", |b| {
        b.iter(|| {
            let mut circuit = OpticalCircuit::new(black_box(6)).unwrap();
            for _ in 0..5 {
                circuit.rx(Qubit(2)).unwrap();
                circuit.cnot(Qubit(1), Qubit(4)).unwrap();
            }
            circuit
        });
    });

    group.bench_function("compose", |b| {
        let mut left = OpticalCircuit::new(6).unwrap();
        left.rx(Qubit(2)).unwrap().ry(Qubit(3)).unwrap();
        let mut right = OpticalCircuit::new(6).unwrap();
        right.cnot(Qubit(2), Qubit(5)).unwrap();

        b.iter(|| (black_box(&left) * black_box(&right)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_compile_gate, bench_circuit_build);
criterion_main!(benches);

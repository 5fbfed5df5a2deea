//! Benchmarks for Enigma machine operations.
//!
//! Measures single-symbol conversion, whole-message throughput, stepping
//! through a full rotor period, and the cost of applying a setting line.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{Machine, MachineConfig, Setting};

/// Naval A catalog restricted to the rotors used below.
const CONFIG: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ 5 3
    I MQ (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
    III MV (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
    IV MJ (AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)
    Beta N (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
    B R (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)";

/// Setting line used consistently across all benchmarks.
const BENCH_SETTING: &str = "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)";

fn machine() -> (Machine, Setting) {
    let mut machine = MachineConfig::parse(CONFIG).unwrap().build().unwrap();
    let setting = Setting::parse(BENCH_SETTING, machine.num_rotors()).unwrap();
    machine.apply_setting(&setting).unwrap();
    (machine, setting)
}

/// Benchmarks `Machine::convert()` for one symbol index.
///
/// The machine is configured once and the rotors advance naturally
/// between iterations.
fn bench_convert_symbol(c: &mut Criterion) {
    let (mut machine, _) = machine();
    c.bench_function("convert_symbol", |b| {
        b.iter(|| machine.convert(black_box(24)).unwrap());
    });
}

/// Benchmarks `Machine::convert_message()` across message lengths.
fn bench_convert_message(c: &mut Criterion) {
    let lengths: &[usize] = &[16, 256, 4096];

    let mut group = c.benchmark_group("convert_message");
    for &len in lengths {
        let (mut machine, setting) = machine();
        let message: String = "FROMHISSHOULDERHIAWATHA".chars().cycle().take(len).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &message, |b, msg| {
            b.iter(|| {
                machine.apply_setting(&setting).unwrap();
                machine.convert_message(black_box(msg)).unwrap()
            });
        });
    }
    group.finish();
}

/// Setting with every rotor at `A`, the start of a full stepping period.
const PERIOD_SETTING: &str = "* B Beta III IV I AAAA";

/// Benchmarks 26^3 conversions starting from `AAAA`.
///
/// The three moving rotors cycle through their stepping period, double
/// steps included, over this many key presses.
fn bench_full_rotor_period(c: &mut Criterion) {
    const PERIOD: usize = 26 * 26 * 26;
    let (mut machine, _) = machine();
    let setting = Setting::parse(PERIOD_SETTING, machine.num_rotors()).unwrap();

    let mut group = c.benchmark_group("full_rotor_period");
    group.throughput(Throughput::Elements(PERIOD as u64));
    group.bench_function("AAAA", |b| {
        b.iter(|| {
            machine.apply_setting(&setting).unwrap();
            for i in 0..PERIOD {
                black_box(machine.convert(black_box(i % 26)).unwrap());
            }
            machine.settings()
        });
    });
    group.finish();
}

/// Benchmarks parsing and applying a setting line.
fn bench_apply_setting(c: &mut Criterion) {
    let (mut machine, _) = machine();
    c.bench_function("apply_setting", |b| {
        b.iter(|| {
            let setting = Setting::parse(black_box(BENCH_SETTING), 5).unwrap();
            machine.apply_setting(&setting).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_convert_symbol,
    bench_convert_message,
    bench_apply_setting,
    bench_full_rotor_period,
);
criterion_main!(benches);

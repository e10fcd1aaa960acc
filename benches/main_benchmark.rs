use halfbits::{f16_to_f32_vec, f32_to_f16_vec, load_f16, store_f16, F16, RoundingMode};

fn test_narrow() {
    for v in [0.1f32, 1.5, 65504.0, 65520.0, 1e10, -1e-20, 6e-8] {
        black_box(F16::from_f32(black_box(v)));
    }
}

fn test_narrow_directed() {
    for v in [0.1f32, 1.5, 65504.0, 65520.0, 1e10, -1e-20] {
        black_box(F16::from_f32_with_rm(black_box(v), RoundingMode::Positive));
    }
}

fn test_widen_all() {
    for bits in 0..=u16::MAX {
        black_box(F16::from_bits(bits).to_f32());
    }
}

fn test_store_load() {
    let mut slot = 0u16;
    for i in 0..4096u32 {
        store_f16(i as f32 * 0.25, &mut slot);
        black_box(load_f16(black_box(slot)));
    }
}

fn test_slices() {
    let values: Vec<f32> = (0..4096).map(|i| (i as f32) * 0.061).collect();
    let bits = f32_to_f16_vec(black_box(&values));
    black_box(f16_to_f32_vec(black_box(&bits)));
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("test_narrow", |b| b.iter(test_narrow));
    c.bench_function("test_narrow_directed", |b| b.iter(test_narrow_directed));
    c.bench_function("test_widen_all", |b| b.iter(test_widen_all));
    c.bench_function("test_store_load", |b| b.iter(test_store_load));
    c.bench_function("test_slices", |b| b.iter(test_slices));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

//! Benchmarks for the four waveform shape functions.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavetrace::dsp::Waveform;
use wavetrace::trace::DEFAULT_PITCH;

use crate::TRACE_SIZES;

const SAMPLE_RATE: f64 = 44_100.0;

fn fill(buffer: &mut [f64], shape: Waveform) {
    for (n, out) in buffer.iter_mut().enumerate() {
        *out = shape.sample(black_box(n as f64 / SAMPLE_RATE), black_box(DEFAULT_PITCH));
    }
}

pub fn bench_waveform(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/waveform");

    for &size in TRACE_SIZES {
        let mut buffer = vec![0.0f64; size];

        // Sine - sin() transcendental per sample
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| fill(black_box(&mut buffer), Waveform::Sine))
        });

        // Sawtooth - euclidean fold, no sin()
        group.bench_with_input(BenchmarkId::new("sawtooth", size), &size, |b, _| {
            b.iter(|| fill(black_box(&mut buffer), Waveform::Sawtooth))
        });

        // Square - sin() plus scale and clamp
        group.bench_with_input(BenchmarkId::new("square", size), &size, |b, _| {
            b.iter(|| fill(black_box(&mut buffer), Waveform::Square))
        });

        // Triangle - quarter-shifted fold plus abs()
        group.bench_with_input(BenchmarkId::new("triangle", size), &size, |b, _| {
            b.iter(|| fill(black_box(&mut buffer), Waveform::Triangle))
        });
    }

    group.finish();
}

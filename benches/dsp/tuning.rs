//! Benchmarks for pitch-to-frequency conversion.

use criterion::Criterion;
use std::hint::black_box;

use wavetrace::dsp::tuning::pitch_to_freq;

pub fn bench_tuning(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/tuning");

    // Full MIDI sweep - 128 exp2 calls
    group.bench_function("pitch_to_freq/midi_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for pitch in 0..128 {
                acc += pitch_to_freq(black_box(pitch as f64));
            }
            acc
        })
    });

    // Fractional pitches exercise the same path as integers
    group.bench_function("pitch_to_freq/fractional", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for step in 0..128 {
                acc += pitch_to_freq(black_box(step as f64 + 0.37));
            }
            acc
        })
    });

    group.finish();
}

//! Benchmarks for whole-trace capture.
//!
//! Capture allocates its output Vec each call, so these numbers include
//! the allocation a caller actually pays, not just the per-sample math.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavetrace::dsp::Waveform;
use wavetrace::trace::{TextSink, Trace, TraceConfig, TraceSink};

use crate::TRACE_SIZES;

pub fn bench_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/trace");

    for &size in TRACE_SIZES {
        let config = TraceConfig {
            samples: size,
            ..TraceConfig::default()
        };

        // === CAPTURE ===
        // One full sweep: validate, allocate, fill
        group.bench_with_input(BenchmarkId::new("capture_sine", size), &size, |b, _| {
            b.iter(|| Trace::capture(black_box(Waveform::Sine), black_box(&config)))
        });

        group.bench_with_input(BenchmarkId::new("capture_sawtooth", size), &size, |b, _| {
            b.iter(|| Trace::capture(black_box(Waveform::Sawtooth), black_box(&config)))
        });

        // === CAPTURE + TEXT DUMP ===
        // The print_trace demo path: capture, then format every sample
        group.bench_with_input(BenchmarkId::new("capture_text_dump", size), &size, |b, _| {
            b.iter(|| {
                let trace = Trace::capture(Waveform::Sawtooth, &config).unwrap();
                let mut sink = TextSink::new(std::io::sink());
                sink.consume(black_box(&trace)).unwrap();
            })
        });

        // === STATS ===
        // The scope's status line recomputes these after every capture
        let trace = Trace::capture(Waveform::Square, &config).unwrap();
        group.bench_with_input(BenchmarkId::new("stats", size), &size, |b, _| {
            b.iter(|| {
                (
                    black_box(&trace).peak(),
                    black_box(&trace).rms(),
                    black_box(&trace).dc_offset(),
                )
            })
        });
    }

    group.finish();
}

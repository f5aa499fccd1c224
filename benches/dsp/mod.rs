//! Benchmarks for the closed-form math: tuning and the waveform shapes.

mod tuning;
mod waveform;

pub use tuning::bench_tuning;
pub use waveform::bench_waveform;

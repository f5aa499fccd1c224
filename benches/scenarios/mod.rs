//! Scenario benchmarks for the capture pipeline.
//!
//! These model the actual call pattern of the demos and the scope:
//! capture a whole trace, then hand it to a sink.

mod trace;

pub use trace::bench_trace;

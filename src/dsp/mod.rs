//! Pure waveform math: pitch-to-frequency conversion and the closed-form
//! periodic shapes built on top of it.
//!
//! Everything in this module is a total function of its arguments. No state,
//! no allocation, no I/O. A capture loop, a test, or a parallel sweep can
//! evaluate these in any order and get identical samples.

/// Equal-tempered pitch to frequency conversion.
pub mod tuning;
/// Phase folds and the four periodic waveform shapes.
pub mod waveform;

pub use waveform::Waveform;

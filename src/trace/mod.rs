//! Sample-sequence capture: turn a waveform selection into a finite trace
//! and hand it to whatever sink renders it.

/*
Traces and Capture
==================

The waveform math in `dsp` answers one question: what is the amplitude at
time t? A trace asks that question N times on a uniform clock and keeps
the answers, together with the parameters that produced them, so a sink
(terminal chart, text writer, test collector) can render the sequence
without recomputing anything.

The Sample Clock
----------------

Sample n is taken at

    t_n = n / sample_rate

computed per index. The alternative, accumulating t += 1/rate in a loop,
picks up one rounding error per step and drifts on long captures; the
indexed form keeps every t_n within one rounding of exact, so a capture
of 10 samples and the first 10 samples of a capture of 10,000 agree
bit for bit.

Defaults
--------

    sample_rate   44,100 Hz
    samples       1,000
    pitch         55 (G3, ~196 Hz)

One thousand samples at 44.1 kHz is ~22.7 ms, about 4.4 cycles of G3:
enough to see the shape repeat without smearing it across the terminal.

Validation
----------

The shape functions are total; the capture loop is not. Zero samples is
a plot of nothing, a zero sample rate divides by zero, and a non-finite
pitch turns every sample into NaN. Capture rejects those up front with
`TraceError::InvalidInput` instead of producing a trace no sink can
draw. Everything finite is accepted, including pitches far outside the
MIDI range.
*/

/// The sink seam: consumers of finished traces.
pub mod sink;

pub use sink::{TextSink, TraceSink};

use crate::dsp::tuning::pitch_to_freq;
use crate::dsp::Waveform;
use crate::DEFAULT_SAMPLE_RATE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of samples in a capture.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Default capture pitch: MIDI 55, G3.
pub const DEFAULT_PITCH: f64 = 55.0;

/// Errors produced when a capture configuration is degenerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// A capture parameter is outside the domain the sweep can handle.
    InvalidInput { reason: &'static str },
}

impl std::fmt::Display for TraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceError::InvalidInput { reason } => {
                write!(f, "invalid capture input: {}", reason)
            }
        }
    }
}

impl std::error::Error for TraceError {}

/// Capture parameters: how many samples to take, how fast, of what pitch.
///
/// `Default` is the reference sweep (44.1 kHz, 1000 samples, pitch 55).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceConfig {
    /// Samples per second of the capture clock.
    pub sample_rate: u32,
    /// Number of samples to capture.
    pub samples: usize,
    /// Pitch number fed to the waveform, fractional values allowed.
    pub pitch: f64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            samples: DEFAULT_SAMPLE_COUNT,
            pitch: DEFAULT_PITCH,
        }
    }
}

impl TraceConfig {
    /// Check the config describes a capturable sweep.
    pub fn validate(&self) -> Result<(), TraceError> {
        if self.sample_rate == 0 {
            return Err(TraceError::InvalidInput {
                reason: "sample rate must be non-zero",
            });
        }
        if self.samples == 0 {
            return Err(TraceError::InvalidInput {
                reason: "sample count must be non-zero",
            });
        }
        if !self.pitch.is_finite() {
            return Err(TraceError::InvalidInput {
                reason: "pitch must be finite",
            });
        }
        Ok(())
    }

    /// Time offset of sample `index` on the capture clock, in seconds.
    #[inline]
    pub fn time_of(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate as f64
    }

    /// Total duration covered by the capture, in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples as f64 / self.sample_rate as f64
    }
}

/// A captured sample sequence plus the parameters that produced it.
///
/// Built only by [`Trace::capture`], so a trace always holds at least one
/// sample and a validated config.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    waveform: Waveform,
    config: TraceConfig,
    samples: Vec<f64>,
}

impl Trace {
    /// Capture `config.samples` samples of `waveform` on the capture clock.
    ///
    /// # Example
    /// ```
    /// use wavetrace::dsp::Waveform;
    /// use wavetrace::trace::{Trace, TraceConfig};
    ///
    /// let trace = Trace::capture(Waveform::Sine, &TraceConfig::default())?;
    /// assert_eq!(trace.len(), 1000);
    /// assert_eq!(trace.samples()[0], 0.0);
    /// # Ok::<(), wavetrace::trace::TraceError>(())
    /// ```
    pub fn capture(waveform: Waveform, config: &TraceConfig) -> Result<Self, TraceError> {
        config.validate()?;
        let samples = (0..config.samples)
            .map(|n| waveform.sample(config.time_of(n), config.pitch))
            .collect();
        Ok(Self {
            waveform,
            config: *config,
            samples,
        })
    }

    /// The shape this trace was captured from.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// The capture parameters.
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// The captured amplitudes, one per sample index.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of captured samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a capture-built trace; here for slice-like callers.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The frequency in Hz behind the captured pitch.
    pub fn frequency(&self) -> f64 {
        pitch_to_freq(self.config.pitch)
    }

    /// Largest absolute amplitude in the trace.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()))
    }

    /// Root-mean-square amplitude of the trace.
    pub fn rms(&self) -> f64 {
        let sum_sq: f64 = self.samples.iter().map(|&x| x * x).sum();
        (sum_sq / self.samples.len() as f64).sqrt()
    }

    /// Mean amplitude of the trace: how far the shape sits off center.
    pub fn dc_offset(&self) -> f64 {
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_the_reference_sweep() {
        let config = TraceConfig::default();
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.samples, 1000);
        assert_eq!(config.pitch, 55.0);
        assert!((config.duration_secs() - 0.0226757).abs() < 1e-6);
    }

    #[test]
    fn capture_length_matches_config() {
        let config = TraceConfig {
            samples: 37,
            ..TraceConfig::default()
        };
        let trace = Trace::capture(Waveform::Triangle, &config).unwrap();
        assert_eq!(trace.len(), 37);
        assert!(!trace.is_empty());
    }

    #[test]
    fn first_sine_sample_is_exactly_zero() {
        let trace = Trace::capture(Waveform::Sine, &TraceConfig::default()).unwrap();
        assert_eq!(trace.samples()[0], 0.0);
    }

    #[test]
    fn time_axis_is_index_over_rate() {
        let config = TraceConfig::default();
        let trace = Trace::capture(Waveform::Sawtooth, &config).unwrap();
        for n in [0usize, 1, 12, 999] {
            let expected = Waveform::Sawtooth.sample(n as f64 / 44_100.0, config.pitch);
            assert_eq!(trace.samples()[n], expected, "sample {} drifted", n);
        }
    }

    #[test]
    fn capture_is_deterministic() {
        let config = TraceConfig::default();
        let a = Trace::capture(Waveform::Square, &config).unwrap();
        let b = Trace::capture(Waveform::Square, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn capture_rejects_degenerate_configs() {
        let zero_rate = TraceConfig {
            sample_rate: 0,
            ..TraceConfig::default()
        };
        assert_eq!(
            Trace::capture(Waveform::Sine, &zero_rate),
            Err(TraceError::InvalidInput {
                reason: "sample rate must be non-zero"
            })
        );

        let zero_samples = TraceConfig {
            samples: 0,
            ..TraceConfig::default()
        };
        assert_eq!(
            Trace::capture(Waveform::Sine, &zero_samples),
            Err(TraceError::InvalidInput {
                reason: "sample count must be non-zero"
            })
        );

        let nan_pitch = TraceConfig {
            pitch: f64::NAN,
            ..TraceConfig::default()
        };
        assert_eq!(
            Trace::capture(Waveform::Sine, &nan_pitch),
            Err(TraceError::InvalidInput {
                reason: "pitch must be finite"
            })
        );
    }

    #[test]
    fn out_of_range_pitch_is_not_an_error() {
        let config = TraceConfig {
            pitch: 140.0,
            ..TraceConfig::default()
        };
        assert!(Trace::capture(Waveform::Sine, &config).is_ok());
    }

    #[test]
    fn frequency_reports_the_captured_pitch() {
        let trace = Trace::capture(Waveform::Sine, &TraceConfig::default()).unwrap();
        assert!((trace.frequency() - 195.99771799087463).abs() < 1e-6);
    }

    #[test]
    fn stats_track_a_sine_trace() {
        let trace = Trace::capture(Waveform::Sine, &TraceConfig::default()).unwrap();
        let peak = trace.peak();
        assert!(peak > 0.99 && peak <= 1.0, "sine peak {}", peak);
        let rms = trace.rms();
        assert!(rms > 0.65 && rms < 0.75, "sine rms {}", rms);
        assert!(trace.dc_offset().abs() < 0.15);
    }

    #[test]
    fn stats_track_a_square_trace() {
        let trace = Trace::capture(Waveform::Square, &TraceConfig::default()).unwrap();
        assert_eq!(trace.peak(), 1.0);
        assert!(trace.rms() > 0.98, "square rms {}", trace.rms());
        assert!(trace.dc_offset().abs() < 0.15);
    }
}

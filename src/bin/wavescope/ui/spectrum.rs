//! Spectrum analyzer widget
//!
//! FFT-based harmonic spectrum of the captured trace with log-spaced bins.
//! The square's finite-slope edges and the sawtooth's drop put their
//! signatures exactly here, which is why the scope carries this chart.

use std::sync::Arc;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};

/// Number of frequency bins to display
const SPECTRUM_BINS: usize = 48;

/// Decibel floor reported for silent bins
const DB_FLOOR: f64 = -120.0;

/// Spectrum analyzer with FFT processing
pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f64>,
    /// Frequency values for each display bin (Hz)
    freq_bins: Vec<f64>,
    /// FFT bin indices corresponding to each frequency
    bin_indices: Vec<usize>,
    /// FFT processor
    fft: Arc<dyn Fft<f64>>,
    /// Scratch buffer for FFT computation
    scratch: Vec<Complex<f64>>,
    /// Current spectrum data: (log10 frequency, magnitude dB)
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// # Arguments
    /// * `buffer_len` - FFT size (the capture length)
    /// * `sample_rate` - capture clock in Hz
    pub fn new(buffer_len: usize, sample_rate: u32) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer_len);

        // Hann window - reduces spectral leakage from the finite capture
        let window: Vec<f64> = (0..buffer_len)
            .map(|i| {
                if buffer_len > 1 {
                    let denom = (buffer_len - 1) as f64;
                    0.5 * (1.0 - (std::f64::consts::TAU * i as f64 / denom).cos())
                } else {
                    1.0
                }
            })
            .collect();

        // Log-spaced frequency bins (20 Hz up to Nyquist, capped at 20 kHz)
        let sample_rate = sample_rate as f64;
        let max_freq = (sample_rate / 2.0).min(20_000.0).max(1.0);
        let min_freq = 20.0f64.min(max_freq);
        let ratio = if max_freq > min_freq {
            max_freq / min_freq
        } else {
            1.0
        };
        let half = (buffer_len / 2).max(1);

        let mut freq_bins = Vec::with_capacity(SPECTRUM_BINS);
        let mut bin_indices = Vec::with_capacity(SPECTRUM_BINS);
        for i in 0..SPECTRUM_BINS {
            let t = i as f64 / (SPECTRUM_BINS - 1) as f64;
            let freq = if ratio > 1.0 {
                min_freq * ratio.powf(t)
            } else {
                min_freq + (max_freq - min_freq) * t
            };
            let index = ((freq * buffer_len as f64 / sample_rate).round() as usize).min(half - 1);
            freq_bins.push(freq);
            bin_indices.push(index);
        }

        let scratch = vec![Complex::new(0.0, 0.0); buffer_len];
        let spectrum = freq_bins.iter().map(|&f| (f.log10(), DB_FLOOR)).collect();

        Self {
            window,
            freq_bins,
            bin_indices,
            fft,
            scratch,
            spectrum,
        }
    }

    /// FFT size this analyzer was planned for.
    pub fn fft_len(&self) -> usize {
        self.window.len()
    }

    /// Recompute the spectrum from a finished capture.
    ///
    /// Ignores buffers whose length does not match the planned FFT size;
    /// the caller rebuilds the analyzer when the capture is resized.
    pub fn update(&mut self, samples: &[f64]) {
        if samples.len() != self.window.len() {
            return;
        }

        // Apply window and prepare for FFT
        for (i, sample) in samples.iter().enumerate() {
            self.scratch[i].re = sample * self.window[i];
            self.scratch[i].im = 0.0;
        }

        // Compute FFT
        self.fft.process(&mut self.scratch);

        // Extract magnitudes at the log-spaced frequencies
        let half = (self.scratch.len() / 2).max(1);
        for (i, &idx) in self.bin_indices.iter().enumerate() {
            if let Some((x, magnitude_db)) = self.spectrum.get_mut(i) {
                let bin = self.scratch[idx.min(half - 1)];
                let power = (bin.re * bin.re + bin.im * bin.im).max(1e-12);
                *x = self.freq_bins[i].log10();
                *magnitude_db = 10.0 * power.log10();
            }
        }
    }

    /// Get the current spectrum data
    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

/// Render the spectrum analyzer widget. The x axis is log-frequency, so
/// the evenly spaced labels land on decades.
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let min_x = spectrum.first().map(|&(x, _)| x).unwrap_or(1.0);
    let max_x = spectrum.last().map(|&(x, _)| x).unwrap_or(4.0);
    let max_db = spectrum.iter().map(|&(_, db)| db).fold(-100.0, f64::max);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([min_x, max_x])
                .labels(vec!["20", "200", "2k", "20k"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-100.0, max_db.max(0.0) + 10.0])
                .labels(vec!["-100", "-60", "-20", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

//! Wavescope - application builder and runner

use color_eyre::eyre::Result as EyreResult;

use wavetrace::dsp::Waveform;
use wavetrace::trace::TraceConfig;

use super::ui::ScopeApp;

/// Main application builder
pub struct Wavescope {
    waveform: Waveform,
    overlay: Option<Waveform>,
    config: TraceConfig,
}

impl Wavescope {
    /// Create a new Wavescope with the default capture (the reference
    /// sweep: 44.1 kHz, 1000 samples, pitch 55).
    pub fn new() -> Self {
        Self {
            waveform: Waveform::Sine,
            overlay: None,
            config: TraceConfig::default(),
        }
    }

    /// Set the initial waveform shape.
    pub fn waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Draw a second shape on the same chart from the start.
    pub fn overlay(mut self, overlay: Waveform) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Set the initial pitch number.
    pub fn pitch(mut self, pitch: f64) -> Self {
        self.config.pitch = pitch;
        self
    }

    /// Set the initial capture length in samples.
    pub fn samples(mut self, samples: usize) -> Self {
        self.config.samples = samples;
        self
    }

    /// Run the oscilloscope (takes over the terminal until quit).
    pub fn run(self) -> EyreResult<()> {
        let mut app = ScopeApp::new(self.waveform, self.overlay, self.config)?;

        let mut terminal = ratatui::init();
        let result = app.run(&mut terminal);
        ratatui::restore();
        result
    }
}

impl Default for Wavescope {
    fn default() -> Self {
        Self::new()
    }
}

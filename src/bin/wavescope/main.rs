//! wavescope - Terminal oscilloscope for the wavetrace waveforms
//!
//! Run with: cargo run

mod app;
mod ui;

use app::Wavescope;
use wavetrace::dsp::Waveform;
use wavetrace::trace::DEFAULT_PITCH;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    Wavescope::new()
        .waveform(Waveform::Sine)
        .overlay(Waveform::Sawtooth)
        .pitch(DEFAULT_PITCH)
        .run()
}

//! TUI module for wavescope
//!
//! Owns the event loop and the layout; the chart widgets live in their own
//! files. Every state change recaptures through the library; nothing here
//! computes samples.

mod spectrum;
mod trace;

use std::time::Duration;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};

use wavetrace::dsp::Waveform;
use wavetrace::trace::{Trace, TraceConfig};

use spectrum::{render_spectrum, SpectrumAnalyzer};
use trace::render_trace;

/// Sample-count bounds for the `[` / `]` keys.
const MIN_SAMPLES: usize = 125;
const MAX_SAMPLES: usize = 16_000;

/// Oscilloscope application state
pub struct ScopeApp {
    /// Selected shape for the main trace
    waveform: Waveform,
    /// Optional comparison shape drawn on the same chart
    overlay: Option<Waveform>,
    /// Capture parameters shared by both traces
    config: TraceConfig,
    /// Current main trace
    trace: Trace,
    /// Current overlay trace, captured with the same config
    overlay_trace: Option<Trace>,
    /// Harmonic spectrum of the main trace
    spectrum: SpectrumAnalyzer,
    /// Whether the app should quit
    should_quit: bool,
}

impl ScopeApp {
    /// Capture the initial traces and build the analyzer.
    pub fn new(
        waveform: Waveform,
        overlay: Option<Waveform>,
        config: TraceConfig,
    ) -> EyreResult<Self> {
        let trace = Trace::capture(waveform, &config).wrap_err("capturing initial trace")?;
        let overlay_trace = overlay
            .map(|shape| Trace::capture(shape, &config))
            .transpose()
            .wrap_err("capturing overlay trace")?;

        let mut spectrum = SpectrumAnalyzer::new(trace.len(), config.sample_rate);
        spectrum.update(trace.samples());

        Ok(Self {
            waveform,
            overlay,
            config,
            trace,
            overlay_trace,
            spectrum,
            should_quit: false,
        })
    }

    /// Run the UI event loop.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: KeyCode) -> EyreResult<()> {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.select_waveform(Waveform::ALL[c as usize - '1' as usize]);
                self.recapture()?;
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.cycle_overlay();
                self.recapture()?;
            }
            KeyCode::Up => {
                self.nudge_pitch(1.0);
                self.recapture()?;
            }
            KeyCode::Down => {
                self.nudge_pitch(-1.0);
                self.recapture()?;
            }
            KeyCode::Char(']') => {
                self.config.samples = (self.config.samples * 2).min(MAX_SAMPLES);
                self.recapture()?;
            }
            KeyCode::Char('[') => {
                self.config.samples = (self.config.samples / 2).max(MIN_SAMPLES);
                self.recapture()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn select_waveform(&mut self, waveform: Waveform) {
        self.waveform = waveform;
        // An overlay of the selected shape would just redraw the same line.
        if self.overlay == Some(waveform) {
            self.overlay = None;
        }
    }

    /// Step the overlay through the other shapes, then back to off.
    fn cycle_overlay(&mut self) {
        let mut others = Waveform::ALL.iter().copied().filter(|&w| w != self.waveform);
        self.overlay = match self.overlay {
            None => others.next(),
            Some(current) => {
                let mut seen = false;
                let mut next = None;
                for shape in others {
                    if seen {
                        next = Some(shape);
                        break;
                    }
                    seen = shape == current;
                }
                next
            }
        };
    }

    /// Move the pitch a semitone, staying inside the MIDI range.
    fn nudge_pitch(&mut self, semitones: f64) {
        self.config.pitch = (self.config.pitch + semitones).clamp(0.0, 127.0);
    }

    /// Recapture both traces and refresh the spectrum.
    fn recapture(&mut self) -> EyreResult<()> {
        self.trace = Trace::capture(self.waveform, &self.config).wrap_err("recapturing trace")?;
        self.overlay_trace = self
            .overlay
            .map(|shape| Trace::capture(shape, &self.config))
            .transpose()
            .wrap_err("recapturing overlay trace")?;

        if self.spectrum.fft_len() != self.trace.len() {
            self.spectrum = SpectrumAnalyzer::new(self.trace.len(), self.config.sample_rate);
        }
        self.spectrum.update(self.trace.samples());
        Ok(())
    }

    /// Render the UI.
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Status bar
                Constraint::Min(8),     // Trace chart
                Constraint::Length(10), // Spectrum
                Constraint::Length(1),  // Help bar
            ])
            .split(frame.area());

        self.render_status(frame, chunks[0]);
        render_trace(frame, chunks[1], &self.trace, self.overlay_trace.as_ref());
        render_spectrum(frame, chunks[2], self.spectrum.data());

        let help = Paragraph::new(" [Q] Quit  [1-4] Shape  [O] Overlay  [Up/Down] Pitch  [ [ / ] ] Samples")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }

    /// Status bar: shape, pitch, frequency, capture size, trace stats.
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" wavescope ").borders(Borders::ALL);

        let config = self.trace.config();
        let mut spans = vec![
            Span::styled(
                format!(" {}  ", self.trace.waveform()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!(
                    "Pitch {} ({})  {:.2} Hz  ",
                    config.pitch,
                    note_label(config.pitch),
                    self.trace.frequency()
                ),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!(
                    "{} samples @ {:.1}kHz ({:.1} ms)  ",
                    self.trace.len(),
                    config.sample_rate as f64 / 1000.0,
                    config.duration_secs() * 1000.0
                ),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(
                    "Peak: {:.2}  RMS: {:.2}  DC: {:+.3}",
                    self.trace.peak(),
                    self.trace.rms(),
                    self.trace.dc_offset()
                ),
                Style::default().fg(Color::Magenta),
            ),
        ];
        if let Some(overlay) = &self.overlay_trace {
            spans.push(Span::styled(
                format!("  overlay: {}", overlay.waveform()),
                Style::default().fg(Color::Yellow),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, area);
    }
}

/// Note name for integer MIDI pitches, the bare number otherwise.
fn note_label(pitch: f64) -> String {
    const NAMES: [&str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];
    let rounded = pitch.round();
    if (pitch - rounded).abs() < 1e-9 && (0.0..=127.0).contains(&rounded) {
        let n = rounded as usize;
        format!("{}{}", NAMES[n % 12], (n / 12) as i32 - 1)
    } else {
        format!("{:.2}", pitch)
    }
}

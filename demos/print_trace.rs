use color_eyre::Result;
use wavetrace::dsp::Waveform;
use wavetrace::trace::{TextSink, Trace, TraceConfig, TraceSink};

fn main() -> Result<()> {
    color_eyre::install()?;

    // 48 samples is enough to watch the ramp wrap once.
    let config = TraceConfig {
        samples: 48,
        ..TraceConfig::default()
    };
    let trace = Trace::capture(Waveform::Sawtooth, &config)?;

    // Banner on stderr, samples on stdout.
    eprintln!(
        "{} at pitch {} ({:.2} Hz), {} samples @ {} Hz",
        trace.waveform(),
        config.pitch,
        trace.frequency(),
        trace.len(),
        config.sample_rate
    );

    let mut sink = TextSink::new(std::io::stdout().lock());
    sink.consume(&trace)?;
    Ok(())
}

use wavetrace::dsp::{waveform, Waveform};
use wavetrace::trace::{TextSink, Trace, TraceConfig, TraceSink};

#[test]
fn reference_sine_sweep_profile() {
    let config = TraceConfig::default();
    let trace = Trace::capture(Waveform::Sine, &config).unwrap();

    assert_eq!(trace.len(), 1000);
    assert_eq!(trace.samples()[0], 0.0);
    assert!(trace.samples().iter().all(|v| v.abs() <= 1.0));

    // Sample n must be the shape evaluated at t = n / rate, bit for bit.
    let expected = waveform::sine(12.0 / 44_100.0, config.pitch);
    assert_eq!(trace.samples()[12], expected);
}

#[test]
fn square_sweep_shows_trapezoid_edges() {
    let config = TraceConfig::default();
    let trace = Trace::capture(Waveform::Square, &config).unwrap();

    assert!(trace.samples().iter().all(|v| v.abs() <= 1.0));
    assert!(trace.samples().iter().any(|v| *v == 1.0));
    assert!(trace.samples().iter().any(|v| *v == -1.0));
    // The clamp edges are finite ramps, so a sweep this long lands
    // samples strictly between the rails.
    assert!(trace.samples().iter().any(|v| v.abs() < 1.0));
}

#[test]
fn text_dump_round_trips_bit_exact() {
    let trace = Trace::capture(Waveform::Sawtooth, &TraceConfig::default()).unwrap();

    let mut sink = TextSink::new(Vec::new());
    sink.consume(&trace).unwrap();
    let dump = String::from_utf8(sink.into_inner()).unwrap();

    let mut count = 0;
    for (n, line) in dump.lines().enumerate() {
        let (index, value) = line.split_once('\t').unwrap();
        assert_eq!(index.parse::<usize>().unwrap(), n);
        assert_eq!(value.parse::<f64>().unwrap(), trace.samples()[n]);
        count += 1;
    }
    assert_eq!(count, trace.len());
}

#[test]
fn captures_are_deterministic() {
    let config = TraceConfig::default();
    let first = Trace::capture(Waveform::Triangle, &config).unwrap();
    let second = Trace::capture(Waveform::Triangle, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn configured_pitch_reaches_the_frequency_report() {
    let config = TraceConfig {
        pitch: 69.0,
        ..TraceConfig::default()
    };
    let trace = Trace::capture(Waveform::Sine, &config).unwrap();
    assert_eq!(trace.frequency(), 440.0);
}

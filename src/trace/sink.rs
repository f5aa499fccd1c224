//! Sinks: consumers of finished traces.

/*
The Sink Seam
=============

Capture produces a `Trace`; a sink renders it. The split is the whole
design: the library computes sample sequences and never draws, and
anything that can consume a finite ordered sequence of amplitudes can be
injected as the renderer: the wavescope terminal charts, a text writer,
a test collector.

Sinks declare their own failure mode through an associated `Error` type.
A terminal chart fails with an I/O error, a test collector cannot fail
at all (`std::convert::Infallible`), and callers composing the two steps
decide what a sink failure means to them.

`TextSink` is the reference sink: one line per sample, tab-separated
index and amplitude. Amplitudes are formatted with the standard float
`Display`, which emits the shortest string that parses back to the same
bits, so a text dump is a lossless snapshot of the trace.
*/

use std::io::{self, Write};

use super::Trace;

/// A consumer of finished traces.
pub trait TraceSink {
    /// What this sink reports when it cannot consume a trace.
    type Error;

    /// Render or record one finished trace.
    fn consume(&mut self, trace: &Trace) -> Result<(), Self::Error>;
}

/// Writes one `index<TAB>amplitude` line per sample to any writer.
#[derive(Debug)]
pub struct TextSink<W> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for TextSink<W> {
    type Error = io::Error;

    fn consume(&mut self, trace: &Trace) -> io::Result<()> {
        for (n, sample) in trace.samples().iter().enumerate() {
            writeln!(self.writer, "{}\t{}", n, sample)?;
        }
        self.writer.flush()
    }
}

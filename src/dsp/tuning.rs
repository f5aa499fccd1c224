//! Equal-tempered pitch to frequency conversion.

/*
Equal-Tempered Tuning
=====================

Musical pitch is logarithmic: every octave up doubles the frequency, and
equal temperament divides that octave into 12 identical ratio steps. Pitch
numbers (MIDI note numbers) count those steps; frequency is what the
oscillator math actually needs.

Vocabulary
----------

  pitch           A MIDI note number. Integer 0-127 on the wire, but the
                  conversion is defined for any real value (see below).

  semitone        One step of 12 per octave. A ratio of 2^(1/12) ~ 1.0595,
                  NOT a fixed number of Hz.

  octave          12 semitones. Exactly doubles (or halves) the frequency.

  A4              Pitch 69, the tuning reference. Fixed at 440.0 Hz by
                  convention; every other pitch is derived from it.

  cent            1/100 of a semitone. Pitch 69.01 is one cent sharp of A4.


The Formula
-----------

    frequency = 2^((pitch - 69) / 12) * 440.0

Subtract the reference pitch, scale to octaves, exponentiate, anchor at
440 Hz. Selected values:

    pitch    note    frequency (Hz)
    -----    ----    --------------
      21      A0          27.5
      33      A1          55.0
      45      A2         110.0
      55      G3         195.9977
      57      A3         220.0
      60      C4         261.6256
      69      A4         440.0      (exact: the exponent is 0)
      81      A5         880.0
     127      G9       12543.854

The A-notes land on exact values because their exponents are whole
numbers; everything else picks up the irrational 2^(k/12) factor.


Fractional and Out-of-Range Pitches
-----------------------------------

The formula is total over the reals, and that is useful, not an accident:

  - Fractional pitches are detune. 69.5 is a quarter tone above A4;
    vibrato and pitch bends are fractional pitch sweeps.
  - Pitches below 0 or above 127 are musically meaningless but still
    produce a well-defined positive frequency. Nothing here validates
    range; a display layer can clamp if it wants to.

2^x is positive for every finite x, so the result is always > 0. Non-finite
input propagates through the float math (NaN in, NaN out) rather than
panicking.
*/

/// The tuning reference pitch: MIDI note 69, A4.
pub const A4_PITCH: f64 = 69.0;

/// The tuning reference frequency in Hz: A4 = 440.0.
pub const A4_FREQ: f64 = 440.0;

/// Convert a pitch number to a frequency in Hz using equal-tempered tuning.
///
/// Defined for any real pitch, not just the MIDI integer range. Always
/// returns a positive value for finite input.
///
/// # Example
/// ```
/// use wavetrace::dsp::tuning::pitch_to_freq;
///
/// assert_eq!(pitch_to_freq(69.0), 440.0); // A4, the reference, is exact
/// let g3 = pitch_to_freq(55.0);
/// assert!((g3 - 196.0).abs() < 0.01);
/// ```
#[inline]
pub fn pitch_to_freq(pitch: f64) -> f64 {
    ((pitch - A4_PITCH) / 12.0).exp2() * A4_FREQ
}

//! Phase folds and the four periodic waveform shapes.

/*
Closed-Form Waveforms
=====================

Every shape here is a pure function of (time, pitch). There is no phase
accumulator and no per-voice state: the pitch picks a frequency, the time
picks an angle, and a per-shape fold maps that angle onto one cycle of the
waveform. Evaluating sample 500 never requires evaluating sample 499.

Vocabulary
----------

  phase           The angle handed to a shape function, in radians:
                  2π * t * frequency. Grows without bound as t grows.

  fold            A mapping from unbounded phase onto one repeating cycle.
                  Folding is what makes the output periodic.

  period          Seconds per cycle: 1 / frequency. At pitch 55 (~196 Hz)
                  one period is ~5.1 ms, ~225 samples at 44.1 kHz.

  bipolar         Output in [-1.0, +1.0], centered on zero. All four
                  shapes here are bipolar.


The Four Shapes
---------------

SINE        the smooth reference:   ∿∿∿∿
            sin(phase), nothing else. Strictly inside [-1, +1].

SAWTOOTH    ramp up, snap down:     ╱╱╱╱
            One linear ramp from -1 toward +1 per cycle, instantaneous
            drop at the cycle boundary.

SQUARE      flat high, flat low:    ▔▁▔▁
            A sine driven far past the clamp so it saturates almost
            everywhere. The edges are NOT vertical - see below.

TRIANGLE    up-down, no snap:       ╱╲╱╲
            A phase-shifted sawtooth, rectified and rescaled. Piecewise
            linear, continuous everywhere.


Phase Folding and the Euclidean Modulo
--------------------------------------

The sawtooth fold is

    sawFold(x) = (((x + π) mod 2π) / π) - 1.0

and the modulo MUST be Euclidean: the remainder has to land in [0, 2π)
for any sign of x + π. Rust's `%` on floats is truncated remainder and
keeps the sign of the left operand, which silently breaks the negative
half of the time axis:

    x + π        (x + π) % 2π       (x + π).rem_euclid(2π)
    ------       -------------      ----------------------
     7.0             0.7168                 0.7168
    -0.5            -0.5                    5.7832

With the truncated remainder, any phase below -π folds to a negative
remainder, the ramp comes out shifted by a full swing (values down to
-3.0) and the drop points flip. `rem_euclid` is the correct fold, so
negative time is just more of the same ramp.


The Clamped-Sine Square
-----------------------

    squareFold(x) = clamp(sin(x) * 100.0, 0.0, 2.0) - 1.0

The * 100 drive pushes the sine past the [0, 2] clamp almost everywhere,
so the output sits flat at +1 or -1 with no branch anywhere. "Almost" is
the interesting part: wherever sin(x) is between 0 and 0.02 the clamp is
not reached and the output is a short linear ramp. Each edge spans about
0.02 rad (asin(2/100)) of the 2π cycle, so roughly 0.6% of every period
is spent on the two ramps. The result is a trapezoid, not a true square,
and its upper harmonics roll off accordingly. One more quirk of the
formula: the ramp band lives entirely on the positive side of the sine's
zero crossing, so the low flat (sin <= 0, exactly half the cycle) is a
touch longer than the high flat (sin >= 0.02).

Both constants are part of the observable shape. Changing the drive or
the clamp bounds changes where the edges sit and what the spectrum looks
like, so they are named and kept, not "fixed".


Aliasing
--------

These are the raw textbook shapes. The sawtooth drop and the square
edges carry energy above any finite Nyquist limit, which is exactly what
makes them easy to reason about and draw. This crate renders traces of
them; it does not feed them to a DAC, so no band-limiting (polyBLEP,
additive resynthesis, ...) is layered on top.


Dispatch
--------

Callers that know their shape statically use the free functions. Callers
that select a shape at runtime (a UI, a config file) go through the
`Waveform` enum and `Waveform::sample`, which is a plain match over the
same four functions.
*/

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use crate::dsp::tuning::pitch_to_freq;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Drive applied to the sine before the square-wave clamp. Finite on
/// purpose: it sets the slope and width of the trapezoid edges.
const SQUARE_DRIVE: f64 = 100.0;

/// The four waveform shapes, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Waveform {
    Sine,
    Sawtooth,
    Square,
    Triangle,
}

impl Waveform {
    /// Every shape, in selection order.
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Sawtooth,
        Waveform::Square,
        Waveform::Triangle,
    ];

    /// Evaluate this shape at time `t` (seconds) for a pitch number.
    ///
    /// # Example
    /// ```
    /// use wavetrace::dsp::Waveform;
    ///
    /// // Every shape starts a capture somewhere in [-1, 1].
    /// for shape in Waveform::ALL {
    ///     assert!(shape.sample(0.0, 55.0).abs() <= 1.0);
    /// }
    /// assert_eq!(Waveform::Sine.sample(0.0, 55.0), 0.0);
    /// ```
    #[inline]
    pub fn sample(self, t: f64, pitch: f64) -> f64 {
        match self {
            Waveform::Sine => sine(t, pitch),
            Waveform::Sawtooth => sawtooth(t, pitch),
            Waveform::Square => square(t, pitch),
            Waveform::Triangle => triangle(t, pitch),
        }
    }

    /// Display name of the shape.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Sawtooth => "Sawtooth",
            Waveform::Square => "Square",
            Waveform::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Angular phase in radians at time `t` for a pitch number.
#[inline]
fn phase_of(t: f64, pitch: f64) -> f64 {
    TAU * t * pitch_to_freq(pitch)
}

/// Fold an unbounded phase onto the [-1.0, 1.0) sawtooth ramp.
///
/// `rem_euclid` keeps the remainder in [0, 2π) for negative phases too;
/// the `%` operator would not.
#[inline]
fn saw_fold(x: f64) -> f64 {
    ((x + PI).rem_euclid(TAU) / PI) - 1.0
}

/// Fold a phase onto the clamped-sine square shape, range [-1.0, 1.0].
#[inline]
fn square_fold(x: f64) -> f64 {
    (x.sin() * SQUARE_DRIVE).clamp(0.0, 2.0) - 1.0
}

/// Sine wave at time `t` (seconds) for a pitch number. Range [-1.0, 1.0].
///
/// # Example
/// ```
/// use wavetrace::dsp::waveform::sine;
///
/// assert_eq!(sine(0.0, 55.0), 0.0);
/// ```
#[inline]
pub fn sine(t: f64, pitch: f64) -> f64 {
    phase_of(t, pitch).sin()
}

/// Sawtooth wave: linear ramp from -1.0 toward 1.0 once per period, then
/// an instantaneous drop. Range [-1.0, 1.0).
#[inline]
pub fn sawtooth(t: f64, pitch: f64) -> f64 {
    saw_fold(phase_of(t, pitch))
}

/// Clamped-sine square wave with finite-slope edges. Range [-1.0, 1.0],
/// exact: the clamp cannot be exceeded.
#[inline]
pub fn square(t: f64, pitch: f64) -> f64 {
    square_fold(phase_of(t, pitch))
}

/// Triangle wave: a phase-shifted sawtooth, rectified and rescaled.
/// Range [-1.0, 1.0], continuous everywhere.
#[inline]
pub fn triangle(t: f64, pitch: f64) -> f64 {
    saw_fold(phase_of(t, pitch) + FRAC_PI_2).abs() * 2.0 - 1.0
}

pub mod dsp;
pub mod trace; // Sample-sequence capture and sink hand-off

pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

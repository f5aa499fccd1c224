use wavetrace::dsp::{tuning::pitch_to_freq, Waveform};
use wavetrace::trace::DEFAULT_PITCH;

const COLUMNS: usize = 64;
const ROWS: usize = 9; // odd, so zero gets its own row

fn main() {
    println!("=== ASCII Scope: One Period of Each Shape ===");

    for shape in Waveform::ALL {
        println!("\n{} ({:.2} Hz)", shape, pitch_to_freq(DEFAULT_PITCH));
        draw_period(shape, DEFAULT_PITCH);
    }
}

fn draw_period(shape: Waveform, pitch: f64) {
    let period = 1.0 / pitch_to_freq(pitch);
    let mut rows = vec![vec![' '; COLUMNS]; ROWS];

    for col in 0..COLUMNS {
        let t = col as f64 / COLUMNS as f64 * period;
        let sample = shape.sample(t, pitch);
        // Map [-1, +1] onto the grid, +1 on the top row
        let row = ((1.0 - sample) / 2.0 * (ROWS - 1) as f64).round() as usize;
        rows[row.min(ROWS - 1)][col] = '*';
    }

    for (i, row) in rows.iter().enumerate() {
        let label = match i {
            0 => "+1",
            i if i == ROWS / 2 => " 0",
            i if i == ROWS - 1 => "-1",
            _ => "  ",
        };
        println!("{} |{}", label, row.iter().collect::<String>());
    }
}

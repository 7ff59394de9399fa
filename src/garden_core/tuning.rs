//! Size-to-sound mapping: every tree's carrier pitch and vibrato rate are
//! pure functions of its size.
//!
//! Small trees sit near the high anchor and react steeply to growth; large
//! trees sit near the low anchor and barely move. Pitch is snapped to an
//! equal-tempered chromatic table so the garden always plays in tune.

use crate::garden_core::config::TuningConfig;

/// Usable size range. Sizes outside it are clamped before mapping.
pub const SIZE_MIN: f32 = 0.1;
pub const SIZE_MAX: f32 = 10.0;

const MIDI_C1: i32 = 24;
const MIDI_C7: i32 = 96;
const MIDI_A4: i32 = 69;
const A4_HZ: f32 = 440.0;

pub struct Tuning {
    /// Chromatic note frequencies C1..=C7, ascending.
    table: Vec<f32>,
    pitch_low_hz: f32,
    pitch_high_hz: f32,
    vibrato_slow_hz: f32,
    vibrato_fast_hz: f32,
}

impl Tuning {
    pub fn new(config: &TuningConfig) -> Self {
        Self {
            table: chromatic_table(),
            pitch_low_hz: config.pitch_low_hz,
            pitch_high_hz: config.pitch_high_hz,
            vibrato_slow_hz: config.vibrato_slow_hz,
            vibrato_fast_hz: config.vibrato_fast_hz,
        }
    }

    /// Carrier frequency in Hz for a tree of the given size, quantized to
    /// the nearest chromatic note.
    pub fn pitch(&self, size: f32) -> f32 {
        let factor = exponential_response(size);
        let raw = factor * self.pitch_high_hz + (1.0 - factor) * self.pitch_low_hz;
        self.nearest_note(raw)
    }

    /// Amplitude-wobble rate in Hz for a tree of the given size. Not a note
    /// pitch, so no quantization.
    pub fn vibrato_rate(&self, size: f32) -> f32 {
        let factor = exponential_response(size);
        factor * self.vibrato_fast_hz + (1.0 - factor) * self.vibrato_slow_hz
    }

    fn nearest_note(&self, hz: f32) -> f32 {
        let mut best = self.table[0];
        for &note in &self.table[1..] {
            if (note - hz).abs() < (best - hz).abs() {
                best = note;
            }
        }
        best
    }
}

/// Normalized response in [0, 1]: 1 at `SIZE_MIN`, 0 at `SIZE_MAX`, with an
/// exponential curve so pitch moves faster per unit of growth while a tree
/// is small.
fn exponential_response(size: f32) -> f32 {
    let clamped = size.clamp(SIZE_MIN, SIZE_MAX);
    let s = (SIZE_MAX - clamped) / (SIZE_MAX - SIZE_MIN);
    (s.exp() - 1.0) / (std::f32::consts::E - 1.0)
}

fn chromatic_table() -> Vec<f32> {
    (MIDI_C1..=MIDI_C7)
        .map(|note| A4_HZ * 2.0_f32.powf((note - MIDI_A4) as f32 / 12.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garden_core::config::TuningConfig;

    fn tuning() -> Tuning {
        Tuning::new(&TuningConfig::default())
    }

    #[test]
    fn mappers_are_deterministic() {
        let t = tuning();
        for size in [0.1, 1.0, 3.7, 9.9, 25.0] {
            assert_eq!(t.pitch(size), t.pitch(size));
            assert_eq!(t.vibrato_rate(size), t.vibrato_rate(size));
        }
    }

    #[test]
    fn pitch_is_always_a_chromatic_table_member() {
        let t = tuning();
        let table = chromatic_table();
        let mut size = SIZE_MIN;
        while size <= SIZE_MAX {
            let hz = t.pitch(size);
            assert!(
                table.contains(&hz),
                "pitch {hz} for size {size} is not a table note"
            );
            size += 0.07;
        }
    }

    #[test]
    fn smallest_size_plays_the_high_anchor() {
        // C7 = 2093.0045 Hz in the A440 table
        let hz = t_pitch(SIZE_MIN);
        assert!((hz - 2093.0).abs() < 1.0, "expected ~C7, got {hz}");
    }

    #[test]
    fn largest_size_plays_the_low_anchor() {
        // C1 = 32.703 Hz
        let hz = t_pitch(SIZE_MAX);
        assert!((hz - 32.7).abs() < 0.5, "expected ~C1, got {hz}");
    }

    fn t_pitch(size: f32) -> f32 {
        tuning().pitch(size)
    }

    #[test]
    fn pitch_never_rises_as_a_tree_grows() {
        let t = tuning();
        let mut previous = t.pitch(SIZE_MIN);
        let mut size = SIZE_MIN;
        while size <= SIZE_MAX {
            let hz = t.pitch(size);
            assert!(
                hz <= previous,
                "pitch rose from {previous} to {hz} at size {size}"
            );
            previous = hz;
            size += 0.05;
        }
    }

    #[test]
    fn sizes_outside_the_range_are_pinned_to_the_anchors() {
        let t = tuning();
        assert_eq!(t.pitch(14.0), t.pitch(SIZE_MAX));
        assert_eq!(t.pitch(0.01), t.pitch(SIZE_MIN));
        assert_eq!(t.vibrato_rate(14.0), t.vibrato_rate(SIZE_MAX));
    }

    #[test]
    fn vibrato_spans_the_configured_bounds_without_quantization() {
        let t = tuning();
        let fast = t.vibrato_rate(SIZE_MIN);
        let slow = t.vibrato_rate(SIZE_MAX);
        assert!((fast - 0.2).abs() < 1e-6, "expected ~1/5 Hz, got {fast}");
        assert!(
            (slow - 1.0 / 51.0).abs() < 1e-6,
            "expected ~1/51 Hz, got {slow}"
        );

        // strictly between the bounds mid-range, not snapped anywhere
        let mid = t.vibrato_rate(5.0);
        assert!(mid > slow && mid < fast);
    }
}

//! Conversion parameters bundled with their defaults.

use crate::time_signature::TimeSignature;
use crate::units::{
    beat_to_tick, bpm_to_tempo, second_to_tick, tempo_to_bpm, tick_to_beat, tick_to_second,
    DEFAULT_TEMPO, DEFAULT_TICKS_PER_BEAT,
};

/// The three parameters every conversion depends on, with the standard
/// MIDI defaults (480 PPQN, 500000 µs/quarter, 4/4) as `Default`.
///
/// Rust has no optional arguments, so this is how "call with the
/// defaults" is spelled: start from `Timebase::default()` and override
/// fields as needed. The methods delegate to the free functions at the
/// crate root and add no semantics of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timebase {
    /// Resolution in ticks per quarter note (PPQN)
    pub ticks_per_beat: u32,
    /// Tempo in microseconds per quarter note
    pub tempo: u32,
    /// Current time signature
    pub time_signature: TimeSignature,
}

impl Default for Timebase {
    fn default() -> Self {
        Self {
            ticks_per_beat: DEFAULT_TICKS_PER_BEAT,
            tempo: DEFAULT_TEMPO,
            time_signature: TimeSignature::default(),
        }
    }
}

impl Timebase {
    /// See [`tick_to_second`].
    pub fn tick_to_second(&self, tick: i64) -> f64 {
        tick_to_second(tick, self.ticks_per_beat, self.tempo)
    }

    /// See [`second_to_tick`].
    pub fn second_to_tick(&self, second: f64) -> i64 {
        second_to_tick(second, self.ticks_per_beat, self.tempo)
    }

    /// See [`tick_to_beat`].
    pub fn tick_to_beat(&self, tick: i64) -> f64 {
        tick_to_beat(tick, self.ticks_per_beat, self.time_signature)
    }

    /// See [`beat_to_tick`].
    pub fn beat_to_tick(&self, beat: f64) -> i64 {
        beat_to_tick(beat, self.ticks_per_beat, self.time_signature)
    }

    /// The stored tempo expressed in beats per minute.
    pub fn bpm(&self) -> f64 {
        tempo_to_bpm(self.tempo, self.time_signature)
    }

    /// Set the stored tempo from beats per minute.
    pub fn set_bpm(&mut self, bpm: f64) {
        self.tempo = bpm_to_tempo(bpm, self.time_signature);
    }
}

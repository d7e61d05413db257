//! Conversions between ticks, seconds, beats, tempo, and BPM.
//!
//! All six functions are closed-form evaluations of their inputs. The
//! formulas hinge on two facts: tempo is expressed in microseconds per
//! quarter note, and a "beat" in a given time signature is a
//! `4 / denominator` fraction of a quarter note (in 6/8 a beat is an
//! eighth note).
//!
//! Zero divisors (`tempo`, `ticks_per_beat`, `bpm`, or a zero
//! denominator) are not guarded: the math is done in `f64`, so they
//! propagate as ±inf/NaN, and integer results then saturate through the
//! float-to-int cast (NaN casts to 0). Callers are responsible for
//! supplying valid musical parameters.

use crate::time_signature::TimeSignature;

/// Default tempo in microseconds per quarter note (120 BPM in 4/4).
pub const DEFAULT_TEMPO: u32 = 500_000;

/// Default resolution in ticks (pulses) per quarter note.
pub const DEFAULT_TICKS_PER_BEAT: u32 = 480;

/// Default time signature.
pub const DEFAULT_TIME_SIGNATURE: TimeSignature = TimeSignature::FOUR_FOUR;

/// Convert MIDI ticks to seconds.
///
/// `scale = tempo * 1e-6 / ticks_per_beat`, one tick's duration in
/// seconds. The result's sign follows `tick`'s sign.
///
/// At the defaults, 480 ticks is one quarter note: exactly 0.5 s.
pub fn tick_to_second(tick: i64, ticks_per_beat: u32, tempo: u32) -> f64 {
    let scale = tempo as f64 * 1e-6 / ticks_per_beat as f64;
    tick as f64 * scale
}

/// Convert seconds to MIDI ticks.
///
/// Inverse of [`tick_to_second`], rounded to the nearest tick with ties
/// away from zero (`(-0.5).round() == -1`), which is Rust's native
/// `round` behavior and applies to negative seconds too.
pub fn second_to_tick(second: f64, ticks_per_beat: u32, tempo: u32) -> i64 {
    let scale = tempo as f64 * 1e-6 / ticks_per_beat as f64;
    libm::round(second / scale) as i64
}

/// Convert beats per minute to MIDI tempo (microseconds per quarter
/// note), rounded to the nearest integer with ties away from zero.
///
/// A beat in `time_signature` is a `4 / denominator` fraction of a
/// quarter note, so the same BPM yields half the tempo in x/8 meter
/// that it does in x/4.
pub fn bpm_to_tempo(bpm: f64, time_signature: TimeSignature) -> u32 {
    libm::round(60.0 * 1e6 / bpm * time_signature.denominator as f64 / 4.0) as u32
}

/// Convert MIDI tempo (microseconds per quarter note) to beats per
/// minute. Exact inverse of [`bpm_to_tempo`] up to its rounding.
pub fn tempo_to_bpm(tempo: u32, time_signature: TimeSignature) -> f64 {
    60.0 * 1e6 / tempo as f64 * time_signature.denominator as f64 / 4.0
}

/// Convert MIDI ticks to a beat count.
///
/// `4 * ticks_per_beat / denominator` is the tick length of one beat in
/// `time_signature`; despite its name, `ticks_per_beat` is ticks per
/// *quarter note* (PPQN).
pub fn tick_to_beat(tick: i64, ticks_per_beat: u32, time_signature: TimeSignature) -> f64 {
    tick as f64 / (4.0 * ticks_per_beat as f64 / time_signature.denominator as f64)
}

/// Convert a beat count to MIDI ticks, rounded to the nearest tick with
/// ties away from zero. Inverse of [`tick_to_beat`].
pub fn beat_to_tick(beat: f64, ticks_per_beat: u32, time_signature: TimeSignature) -> i64 {
    libm::round(beat * 4.0 * ticks_per_beat as f64 / time_signature.denominator as f64) as i64
}

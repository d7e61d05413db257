//! Time-unit conversions for MIDI sequencing.
//!
//! This crate converts between the time representations a sequencer
//! juggles: absolute MIDI ticks, wall-clock seconds, tempo in
//! microseconds per quarter note, beats per minute, and beat counts.
//! Everything is a pure function over its arguments; there is no state
//! and nothing to synchronize.
//!
//! Designed to be `no_std` compatible.

#![cfg_attr(not(feature = "std"), no_std)]

mod time_signature;
mod timebase;
mod units;

pub use time_signature::TimeSignature;
pub use timebase::Timebase;
pub use units::{
    beat_to_tick, bpm_to_tempo, second_to_tick, tempo_to_bpm, tick_to_beat, tick_to_second,
    DEFAULT_TEMPO, DEFAULT_TICKS_PER_BEAT, DEFAULT_TIME_SIGNATURE,
};

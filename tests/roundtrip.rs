//! Cross-function round-trip and monotonicity properties.

use miditime::{
    beat_to_tick, bpm_to_tempo, second_to_tick, tempo_to_bpm, tick_to_beat, tick_to_second,
    TimeSignature, DEFAULT_TEMPO, DEFAULT_TICKS_PER_BEAT, DEFAULT_TIME_SIGNATURE,
};

const RESOLUTIONS: &[u32] = &[24, 96, 192, 480, 960];
const TEMPI: &[u32] = &[200_000, 250_000, 500_000, 857_143, 1_000_000];
const METERS: &[TimeSignature] = &[
    TimeSignature::FOUR_FOUR,
    TimeSignature::THREE_FOUR,
    TimeSignature::TWO_TWO,
    TimeSignature::SIX_EIGHT,
    TimeSignature::NINE_EIGHT,
    TimeSignature::TWELVE_EIGHT,
];

#[test]
fn tick_second_round_trip() {
    for &ppb in RESOLUTIONS {
        for &tempo in TEMPI {
            for tick in (0..10_000).step_by(37) {
                let s = tick_to_second(tick, ppb, tempo);
                let back = second_to_tick(s, ppb, tempo);
                assert!(
                    (back - tick).abs() <= 1,
                    "tick {} -> {}s -> {} (ppb {}, tempo {})",
                    tick,
                    s,
                    back,
                    ppb,
                    tempo
                );
            }
        }
    }
}

#[test]
fn tick_beat_round_trip() {
    for &ppb in RESOLUTIONS {
        for &ts in METERS {
            for tick in (0..10_000).step_by(37) {
                let b = tick_to_beat(tick, ppb, ts);
                let back = beat_to_tick(b, ppb, ts);
                assert!(
                    (back - tick).abs() <= 1,
                    "tick {} -> {} beats -> {} (ppb {}, ts {})",
                    tick,
                    b,
                    back,
                    ppb,
                    ts
                );
            }
        }
    }
}

#[test]
fn bpm_tempo_round_trip() {
    // Rounding happens only in bpm_to_tempo; one microsecond of tempo
    // at 300 BPM is about 0.0015 BPM, so 0.01 is a comfortable bound.
    for &ts in METERS {
        for bpm10 in 300..3000 {
            let bpm = bpm10 as f64 / 10.0;
            let back = tempo_to_bpm(bpm_to_tempo(bpm, ts), ts);
            assert!(
                (back - bpm).abs() < 0.01,
                "bpm {} -> {} (ts {})",
                bpm,
                back,
                ts
            );
        }
    }
}

#[test]
fn tick_to_second_is_monotone() {
    for &ppb in RESOLUTIONS {
        for &tempo in TEMPI {
            let mut prev = tick_to_second(0, ppb, tempo);
            for tick in 1..2_000 {
                let s = tick_to_second(tick, ppb, tempo);
                assert!(s >= prev, "not monotone at tick {}", tick);
                prev = s;
            }
        }
    }
}

#[test]
fn zero_tick_is_zero_everywhere() {
    for &ppb in RESOLUTIONS {
        for &tempo in TEMPI {
            assert_eq!(tick_to_second(0, ppb, tempo), 0.0);
        }
        for &ts in METERS {
            assert_eq!(tick_to_beat(0, ppb, ts), 0.0);
        }
    }
}

#[test]
fn documented_defaults_hold() {
    assert_eq!(DEFAULT_TICKS_PER_BEAT, 480);
    assert_eq!(DEFAULT_TEMPO, 500_000);
    assert_eq!(DEFAULT_TIME_SIGNATURE, TimeSignature::FOUR_FOUR);
    assert_eq!(
        tick_to_second(480, DEFAULT_TICKS_PER_BEAT, DEFAULT_TEMPO),
        0.5
    );
    assert_eq!(bpm_to_tempo(120.0, TimeSignature::default()), DEFAULT_TEMPO);
    assert_eq!(tempo_to_bpm(DEFAULT_TEMPO, TimeSignature::default()), 120.0);
}

//! Musical time signatures.

use core::fmt;

/// A (numerator, denominator) time signature.
///
/// For tick/beat and tempo/BPM conversions only the denominator
/// matters: it decides which note value counts as one beat (4 =
/// quarter, 8 = eighth). The numerator is carried along for callers
/// that care about bar structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeSignature {
    /// Beats per bar
    pub numerator: u8,
    /// Note value that gets one beat
    pub denominator: u8,
}

impl TimeSignature {
    /// Common time.
    pub const FOUR_FOUR: TimeSignature = TimeSignature::new(4, 4);
    /// Waltz time.
    pub const THREE_FOUR: TimeSignature = TimeSignature::new(3, 4);
    /// Cut time.
    pub const TWO_TWO: TimeSignature = TimeSignature::new(2, 2);
    /// Compound duple meter; a beat is an eighth note.
    pub const SIX_EIGHT: TimeSignature = TimeSignature::new(6, 8);
    /// Compound triple meter.
    pub const NINE_EIGHT: TimeSignature = TimeSignature::new(9, 8);
    /// Compound quadruple meter.
    pub const TWELVE_EIGHT: TimeSignature = TimeSignature::new(12, 8);

    /// Create a time signature.
    pub const fn new(numerator: u8, denominator: u8) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::FOUR_FOUR
    }
}

impl From<(u8, u8)> for TimeSignature {
    fn from((numerator, denominator): (u8, u8)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

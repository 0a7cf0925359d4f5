//! core/satb-theory/src/interval.rs
//! Interval classification between two pitches.
//!
//! Intervals drive the perfect-interval detection the voicing DP leans on: parallel
//! fifths/octaves/unisons are all defined in terms of `semitones mod 12`.

use crate::pitch::Pitch;

/// Simple (within-octave) interval name, collapsed to the handful of categories the harmonizer
/// actually distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleIntervalName {
    PerfectUnison,
    PerfectFifth,
    PerfectOctave,
    Other,
}

/// Ordered interval between two pitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    directed_semitones: i32,
}

impl Interval {
    /// Interval from `low` to `high` (may be negative if `high` sounds below `low`).
    #[must_use]
    pub fn between(low: Pitch, high: Pitch) -> Self {
        Self { directed_semitones: high.midi() - low.midi() }
    }

    /// Directed (signed) semitone distance.
    #[must_use]
    pub const fn directed_semitones(self) -> i32 {
        self.directed_semitones
    }

    /// Absolute semitone distance.
    #[must_use]
    pub fn semitones(self) -> i32 {
        self.directed_semitones.abs()
    }

    /// Classify into the simple-interval buckets the harmonizer cares about.
    #[must_use]
    pub fn simple_name(self) -> SimpleIntervalName {
        if self.directed_semitones == 0 {
            return SimpleIntervalName::PerfectUnison;
        }
        match self.directed_semitones.rem_euclid(12) {
            0 => SimpleIntervalName::PerfectOctave,
            7 => SimpleIntervalName::PerfectFifth,
            _ => SimpleIntervalName::Other,
        }
    }

    /// True iff this interval is a perfect fifth (mod octave).
    #[must_use]
    pub fn is_perfect_fifth(self) -> bool {
        matches!(self.simple_name(), SimpleIntervalName::PerfectFifth)
    }

    /// True iff this interval is a perfect octave (and not a unison).
    #[must_use]
    pub fn is_perfect_octave(self) -> bool {
        matches!(self.simple_name(), SimpleIntervalName::PerfectOctave) && self.directed_semitones != 0
    }

    /// True iff this interval is a perfect unison (zero distance).
    #[must_use]
    pub fn is_perfect_unison(self) -> bool {
        self.directed_semitones == 0
    }
}

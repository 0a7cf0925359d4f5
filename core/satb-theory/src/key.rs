//! core/satb-theory/src/key.rs
//! Key, mode, and diatonic scale-degree lookups.
//!
//! A [`Key`] wraps a tonic [`PitchClass`] and a [`Mode`] and derives the seven diatonic scale
//! degrees used everywhere downstream: the bass-to-chord map (`satb-harmony::bassmap`) maps a
//! bass pitch to its scale degree via [`Key::scale_degree`], and the numeral expander
//! (`crate::numeral`) reads [`Key::leading_tone`] to forbid doubling it.

use crate::pitch::PitchClass;

/// Diatonic mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Whole/half step pattern from the tonic (natural minor, i.e. Aeolian, for `Minor`).
    #[must_use]
    pub const fn step_pattern(self) -> [i32; 6] {
        match self {
            Self::Major => [2, 2, 1, 2, 2, 2],
            Self::Minor => [2, 1, 2, 2, 1, 2],
        }
    }
}

/// A tonal key: tonic pitch-class + mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    tonic: PitchClass,
    mode: Mode,
}

impl Key {
    /// Construct a key from its tonic and mode.
    #[must_use]
    pub fn new(tonic: PitchClass, mode: Mode) -> Self {
        Self { tonic, mode }
    }

    /// Major key on the given tonic.
    #[must_use]
    pub fn major(tonic: PitchClass) -> Self {
        Self::new(tonic, Mode::Major)
    }

    /// Minor key on the given tonic.
    #[must_use]
    pub fn minor(tonic: PitchClass) -> Self {
        Self::new(tonic, Mode::Minor)
    }

    /// Tonic pitch-class.
    #[must_use]
    pub const fn tonic(self) -> PitchClass {
        self.tonic
    }

    /// Mode (major/minor).
    #[must_use]
    pub const fn mode(self) -> Mode {
        self.mode
    }

    /// The seven diatonic scale degrees, 1-indexed via the returned array's position.
    ///
    /// For `Minor`, position 7 (index 6) carries the *raised* leading tone rather than the
    /// natural-minor subtonic — the natural scale with the leading tone substituted in position
    /// 7. This is what makes `V`/`V7`/`vii°` expand correctly in minor keys (their thirds/fifths
    /// are computed from triad-quality offsets off this root, see `crate::numeral`).
    #[must_use]
    pub fn scale_pitch_classes(self) -> [PitchClass; 7] {
        let mut degrees = [self.tonic; 7];
        let mut current = self.tonic;
        for (index, step) in self.mode.step_pattern().iter().enumerate() {
            current = current.transpose(*step);
            degrees[index + 1] = current;
        }
        if matches!(self.mode, Mode::Minor) {
            degrees[6] = self.tonic.transpose(11);
        }
        degrees
    }

    /// The leading tone: scale degree 7, raised in minor.
    #[must_use]
    pub fn leading_tone(self) -> PitchClass {
        self.scale_pitch_classes()[6]
    }

    /// 1-indexed scale degree of a pitch-class, if it is diatonic in this key.
    #[must_use]
    pub fn scale_degree(self, pitch_class: PitchClass) -> Option<u8> {
        self.scale_pitch_classes()
            .iter()
            .position(|degree| *degree == pitch_class)
            .map(|index| (index + 1) as u8)
    }

    /// Nearest diatonic scale degree by semitone distance, used as the bass-map fallback when a
    /// bass note is chromatic in this key. Ties favor the lower-numbered degree.
    #[must_use]
    pub fn nearest_scale_degree(self, pitch_class: PitchClass) -> u8 {
        if let Some(exact) = self.scale_degree(pitch_class) {
            return exact;
        }
        let degrees = self.scale_pitch_classes();
        let target = i32::from(pitch_class.semitone());
        let mut best_degree = 1u8;
        let mut best_distance = i32::MAX;
        for (index, degree) in degrees.iter().enumerate() {
            let diff = (i32::from(degree.semitone()) - target).rem_euclid(12);
            let distance = diff.min(12 - diff);
            if distance < best_distance {
                best_distance = distance;
                best_degree = (index + 1) as u8;
            }
        }
        best_degree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(semitone: i32) -> PitchClass {
        PitchClass::from_semitones(semitone)
    }

    #[test]
    fn c_major_scale_degrees() {
        let key = Key::major(pc(0));
        let expected = [0, 2, 4, 5, 7, 9, 11];
        for (index, semitone) in expected.iter().enumerate() {
            assert_eq!(key.scale_pitch_classes()[index].semitone(), *semitone as u8);
        }
        assert_eq!(key.leading_tone().semitone(), 11);
    }

    #[test]
    fn a_minor_raises_the_leading_tone_only() {
        let key = Key::minor(pc(9));
        // Natural minor degrees: A B C D E F G — scale_degree(7) must be the raised G#, not G.
        let degrees = key.scale_pitch_classes();
        assert_eq!(degrees[5].semitone(), 5); // F natural (submediant untouched)
        assert_eq!(degrees[6].semitone(), 8); // G# raised leading tone
        assert_eq!(key.leading_tone().semitone(), 8);
    }

    #[test]
    fn scale_degree_lookup_and_fallback() {
        let key = Key::major(pc(0));
        assert_eq!(key.scale_degree(pc(7)), Some(5));
        assert_eq!(key.scale_degree(pc(1)), None); // C#, chromatic
        assert_eq!(key.nearest_scale_degree(pc(1)), 1); // snaps to C (or D), nearest wins
    }
}

//! core/satb-theory/src/pitch.rs
//! Pitch and pitch-class primitives for 12-tone equal temperament.
//!
//! [`PitchClass`] is the atomic harmonic alphabet (a semitone 0..=11, wrapping). [`Pitch`] adds an
//! octave so voicings, ranges, and MIDI-distance costs can be computed. Diatonic spelling
//! (step + accidental) is retained only far enough to support display and the note-name parser at
//! the API boundary; every comparison and the DP cost surface in
//! `satb-harmony` works from [`Pitch::midi`].

use core::cmp::Ordering;
use core::fmt;

/// The seven natural letter names, in alphabetical (not scalar) order starting at C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiatonicStep {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl DiatonicStep {
    const ORDER: [DiatonicStep; 7] = [
        DiatonicStep::C,
        DiatonicStep::D,
        DiatonicStep::E,
        DiatonicStep::F,
        DiatonicStep::G,
        DiatonicStep::A,
        DiatonicStep::B,
    ];

    /// Natural (no accidental) semitone offset from C within the octave.
    #[must_use]
    pub const fn natural_semitone(self) -> i32 {
        match self {
            Self::C => 0,
            Self::D => 2,
            Self::E => 4,
            Self::F => 5,
            Self::G => 7,
            Self::A => 9,
            Self::B => 11,
        }
    }

    /// Letter name as an ASCII byte.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::A => 'A',
            Self::B => 'B',
        }
    }

    /// Parse a single letter `A`..=`G` (case-insensitive).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ORDER.iter().copied().find(|step| step.letter() == letter.to_ascii_uppercase())
    }
}

/// Pitch-class in 12-TET: a semitone 0..=11 (0 = C), always normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass {
    semitone: u8,
}

impl PitchClass {
    /// Construct from a (possibly out-of-range or negative) semitone count, wrapping mod 12.
    #[must_use]
    pub fn from_semitones(semitones: i32) -> Self {
        Self { semitone: semitones.rem_euclid(12) as u8 }
    }

    /// Raw semitone value, 0..=11.
    #[must_use]
    pub const fn semitone(self) -> u8 {
        self.semitone
    }

    /// Transpose by a signed semitone count.
    #[must_use]
    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_semitones(i32::from(self.semitone) + semitones)
    }

    /// Sharp-preferred canonical spelling, e.g. `C#`.
    #[must_use]
    pub fn name_sharp(self) -> &'static str {
        const NAMES: [&str; 12] =
            ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
        NAMES[self.semitone as usize]
    }

    /// Flat-preferred canonical spelling, e.g. `Db`.
    #[must_use]
    pub fn name_flat(self) -> &'static str {
        const NAMES: [&str; 12] =
            ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];
        NAMES[self.semitone as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_sharp())
    }
}

/// Absolute pitch: diatonic step + accidental + octave, with MIDI-based ordering/equality.
///
/// Equality and ordering compare [`Pitch::midi`] only — two enharmonically distinct spellings of
/// the same key (`D#4` and `Eb4`) compare equal. Use [`Pitch::step`]/[`Pitch::accidental`] when
/// spelling matters (interval naming, display).
#[derive(Debug, Clone, Copy)]
pub struct Pitch {
    step: DiatonicStep,
    accidental: i8,
    octave: i32,
}

impl Pitch {
    /// Construct a pitch from its spelling. `accidental` is signed semitones (-2..=2 typical).
    #[must_use]
    pub fn new(step: DiatonicStep, accidental: i8, octave: i32) -> Self {
        Self { step, accidental, octave }
    }

    /// Construct the canonical (sharp-spelled) pitch for a pitch-class at a given octave.
    #[must_use]
    pub fn from_pitch_class(pitch_class: PitchClass, octave: i32) -> Self {
        const SPELLING: [(DiatonicStep, i8); 12] = [
            (DiatonicStep::C, 0),
            (DiatonicStep::C, 1),
            (DiatonicStep::D, 0),
            (DiatonicStep::D, 1),
            (DiatonicStep::E, 0),
            (DiatonicStep::F, 0),
            (DiatonicStep::F, 1),
            (DiatonicStep::G, 0),
            (DiatonicStep::G, 1),
            (DiatonicStep::A, 0),
            (DiatonicStep::A, 1),
            (DiatonicStep::B, 0),
        ];
        let (step, accidental) = SPELLING[pitch_class.semitone() as usize];
        Self::new(step, accidental, octave)
    }

    /// Diatonic letter name.
    #[must_use]
    pub const fn step(self) -> DiatonicStep {
        self.step
    }

    /// Signed accidental in semitones.
    #[must_use]
    pub const fn accidental(self) -> i8 {
        self.accidental
    }

    /// Octave number (scientific pitch notation: middle C is `C4`).
    #[must_use]
    pub const fn octave(self) -> i32 {
        self.octave
    }

    /// MIDI note number (`C4` = 60).
    #[must_use]
    pub fn midi(self) -> i32 {
        (self.octave + 1) * 12 + self.step.natural_semitone() + i32::from(self.accidental)
    }

    /// Pitch-class (semitone 0..=11) of this pitch.
    #[must_use]
    pub fn pitch_class(self) -> PitchClass {
        PitchClass::from_semitones(self.midi())
    }

    /// Transpose by a signed semitone count, re-spelling onto the nearest natural/sharp pitch.
    #[must_use]
    pub fn transpose_semitones(self, semitones: i32) -> Self {
        let midi = self.midi() + semitones;
        let octave = midi.div_euclid(12) - 1;
        Self::from_pitch_class(PitchClass::from_semitones(midi), octave)
    }

    /// Shift by whole octaves.
    #[must_use]
    pub fn shift_octaves(self, octaves: i32) -> Self {
        Self { octave: self.octave + octaves, ..self }
    }

    /// Render using sharp-preferred spelling, e.g. `F#4`.
    #[must_use]
    pub fn name(self) -> String {
        let accidental = match self.accidental {
            i8::MIN..=-2 => "bb",
            -1 => "b",
            0 => "",
            1 => "#",
            _ => "x",
        };
        format!("{}{}{}", self.step.letter(), accidental, self.octave)
    }
}

impl PartialEq for Pitch {
    fn eq(&self, other: &Self) -> bool {
        self.midi() == other.midi()
    }
}

impl Eq for Pitch {}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.midi().cmp(&other.midi())
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_c_is_midi_60() {
        let c4 = Pitch::new(DiatonicStep::C, 0, 4);
        assert_eq!(c4.midi(), 60);
    }

    #[test]
    fn enharmonic_spellings_compare_equal() {
        let d_sharp = Pitch::new(DiatonicStep::D, 1, 4);
        let e_flat = Pitch::new(DiatonicStep::E, -1, 4);
        assert_eq!(d_sharp, e_flat);
        assert_eq!(d_sharp.midi(), e_flat.midi());
    }

    #[test]
    fn transpose_semitones_updates_octave() {
        let c4 = Pitch::new(DiatonicStep::C, 0, 4);
        let d5 = c4.transpose_semitones(14);
        assert_eq!(d5.midi(), 74);
        assert_eq!(d5.octave(), 5);
    }

    #[test]
    fn ordering_follows_midi() {
        let c3 = Pitch::new(DiatonicStep::C, 0, 3);
        let g3 = Pitch::new(DiatonicStep::G, 0, 3);
        let c4 = Pitch::new(DiatonicStep::C, 0, 4);
        assert!(c3 < g3);
        assert!(g3 < c4);
    }

    #[test]
    fn pitch_class_wraps() {
        let pc = PitchClass::from_semitones(-1);
        assert_eq!(pc.semitone(), 11);
        assert_eq!(pc.name_sharp(), "B");
    }
}

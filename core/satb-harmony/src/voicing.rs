//! core/satb-harmony/src/voicing.rs
//! Voicing generator: every admissible four-voice voicing of a chord over a fixed bass.

use satb_theory::numeral::Inversion;
use satb_theory::{ExpandedChord, Key, Pitch, PitchClass};

/// A single four-voice chord realization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voicing {
    pub bass: Pitch,
    pub tenor: Pitch,
    pub alto: Pitch,
    pub soprano: Pitch,
    /// Set when this voicing is the last-resort fallback emitted when no voicing survives the
    /// generator's constraints.
    pub fallback: bool,
}

impl Voicing {
    /// MIDI numbers in voice order, bass first.
    #[must_use]
    pub fn midi(self) -> [i32; 4] {
        [self.bass.midi(), self.tenor.midi(), self.alto.midi(), self.soprano.midi()]
    }
}

fn soprano_range() -> (Pitch, Pitch) {
    (Pitch::from_pitch_class(PitchClass::from_semitones(0), 4), Pitch::from_pitch_class(PitchClass::from_semitones(7), 5))
}

fn alto_range() -> (Pitch, Pitch) {
    (Pitch::from_pitch_class(PitchClass::from_semitones(7), 3), Pitch::from_pitch_class(PitchClass::from_semitones(0), 5))
}

fn tenor_range() -> (Pitch, Pitch) {
    (Pitch::from_pitch_class(PitchClass::from_semitones(0), 3), Pitch::from_pitch_class(PitchClass::from_semitones(7), 4))
}

fn bass_range() -> (Pitch, Pitch) {
    (Pitch::from_pitch_class(PitchClass::from_semitones(4), 2), Pitch::from_pitch_class(PitchClass::from_semitones(0), 4))
}

/// Every pitch fitting `pitch_class` within `range`, ascending by octave.
fn octave_options(pitch_class: PitchClass, range: (Pitch, Pitch)) -> Vec<Pitch> {
    let (low, high) = range;
    (low.octave()..=high.octave())
        .map(|octave| Pitch::from_pitch_class(pitch_class, octave))
        .filter(|candidate| *candidate >= low && *candidate <= high)
        .collect()
}

/// `bass` is within range, by construction of the caller (the bass line is fixed and never
/// re-voiced); this only validates the upper three voices' own ranges, ordering, and spacing.
fn range_ok(voicing: &Voicing) -> bool {
    let (sop_lo, sop_hi) = soprano_range();
    let (alt_lo, alt_hi) = alto_range();
    let (ten_lo, ten_hi) = tenor_range();
    voicing.soprano >= sop_lo
        && voicing.soprano <= sop_hi
        && voicing.alto >= alt_lo
        && voicing.alto <= alt_hi
        && voicing.tenor >= ten_lo
        && voicing.tenor <= ten_hi
}

fn ordering_and_spacing_ok(voicing: &Voicing) -> bool {
    voicing.bass <= voicing.tenor
        && voicing.tenor <= voicing.alto
        && voicing.alto <= voicing.soprano
        && (voicing.soprano.midi() - voicing.alto.midi()) <= 12
        && (voicing.alto.midi() - voicing.tenor.midi()) <= 12
}

const PERMUTATIONS: [[usize; 3]; 6] =
    [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

fn remove_one(tones: &mut Vec<PitchClass>, target: PitchClass) {
    if let Some(index) = tones.iter().position(|tone| *tone == target) {
        tones.remove(index);
    }
}

/// Doubling candidates in priority order (root, fifth, third), skipping the leading tone and,
/// for seventh chords, skipping doubling altogether.
fn doubling_candidates(chord: ExpandedChord, key: Key) -> Vec<Vec<PitchClass>> {
    if chord.contains_seventh {
        let tones = vec![chord.root, chord.third, chord.fifth, chord.seventh.unwrap_or(chord.fifth)];
        return vec![tones];
    }
    if chord.inversion == Inversion::Second {
        return vec![vec![chord.root, chord.third, chord.fifth, chord.fifth]];
    }
    let leading_tone = key.leading_tone();
    [chord.root, chord.fifth, chord.third]
        .into_iter()
        .filter(|tone| *tone != leading_tone)
        .map(|doubled| vec![chord.root, chord.third, chord.fifth, doubled])
        .collect()
}

/// Generate up to 10 admissible voicings for `chord` over the fixed `bass` pitch.
#[must_use]
pub fn generate(chord: ExpandedChord, bass: Pitch, key: Key) -> Vec<Voicing> {
    const CAP: usize = 10;
    let mut out = Vec::new();

    'doublings: for mut tones in doubling_candidates(chord, key) {
        remove_one(&mut tones, bass.pitch_class());
        if tones.len() != 3 {
            continue;
        }
        let upper = [tones[0], tones[1], tones[2]];

        for indices in PERMUTATIONS {
            let soprano_pc = upper[indices[0]];
            let alto_pc = upper[indices[1]];
            let tenor_pc = upper[indices[2]];

            for soprano in octave_options(soprano_pc, soprano_range()) {
                for alto in octave_options(alto_pc, alto_range()) {
                    for tenor in octave_options(tenor_pc, tenor_range()) {
                        let voicing = Voicing { bass, tenor, alto, soprano, fallback: false };
                        if range_ok(&voicing) && ordering_and_spacing_ok(&voicing) {
                            out.push(voicing);
                            if out.len() >= CAP {
                                break 'doublings;
                            }
                        }
                    }
                }
            }
        }
    }

    if out.is_empty() {
        out.push(fallback_voicing(chord, bass));
    }
    out
}

/// Last-resort voicing when no combination survives range/ordering/spacing constraints:
/// tenor = third@4, alto = fifth@4, soprano = root@5, swapping tenor/alto if that violates
/// ordering.
fn fallback_voicing(chord: ExpandedChord, bass: Pitch) -> Voicing {
    let mut tenor = Pitch::from_pitch_class(chord.third, 4);
    let mut alto = Pitch::from_pitch_class(chord.fifth, 4);
    let soprano = Pitch::from_pitch_class(chord.root, 5);
    if alto < tenor {
        core::mem::swap(&mut alto, &mut tenor);
    }
    Voicing { bass, tenor, alto, soprano, fallback: true }
}

/// The four voice ranges, bass first, exposed for the validator.
#[must_use]
pub fn voice_ranges() -> [(Pitch, Pitch); 4] {
    [bass_range(), tenor_range(), alto_range(), soprano_range()]
}

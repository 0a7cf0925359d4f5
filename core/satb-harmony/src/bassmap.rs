//! core/satb-harmony/src/bassmap.rs
//! Bass-to-chord map: scale degree × mode × position → candidate numerals.

use satb_theory::numeral::{Degree, Inversion, Numeral, TriadQuality};
use satb_theory::{Key, Mode, PitchClass};
use smallvec::SmallVec;

/// Candidate numeral set for a single bass position. Bounded at 3 entries by construction.
pub type Candidates = SmallVec<[Numeral; 3]>;

fn candidates(degree: Degree, quality: TriadQuality, inversion: Inversion) -> Numeral {
    Numeral::triad(degree, quality, inversion)
}

fn major_table(degree: u8) -> Candidates {
    match degree {
        1 => SmallVec::from_slice(&[
            candidates(Degree::I, TriadQuality::Major, Inversion::Root),
            candidates(Degree::VI, TriadQuality::Minor, Inversion::First),
        ]),
        2 => SmallVec::from_slice(&[
            candidates(Degree::II, TriadQuality::Minor, Inversion::Root),
            candidates(Degree::VII, TriadQuality::Diminished, Inversion::First),
            Numeral::dominant_seventh(Degree::V, Inversion::Root),
        ]),
        3 => SmallVec::from_slice(&[candidates(Degree::I, TriadQuality::Major, Inversion::First)]),
        4 => SmallVec::from_slice(&[
            candidates(Degree::IV, TriadQuality::Major, Inversion::Root),
            candidates(Degree::II, TriadQuality::Minor, Inversion::First),
            candidates(Degree::I, TriadQuality::Major, Inversion::Second),
        ]),
        5 => SmallVec::from_slice(&[
            candidates(Degree::V, TriadQuality::Major, Inversion::Root),
            Numeral::dominant_seventh(Degree::V, Inversion::Root),
            candidates(Degree::I, TriadQuality::Major, Inversion::Second),
        ]),
        6 => SmallVec::from_slice(&[
            candidates(Degree::VI, TriadQuality::Minor, Inversion::Root),
            candidates(Degree::IV, TriadQuality::Major, Inversion::First),
        ]),
        _ => SmallVec::from_slice(&[
            candidates(Degree::VII, TriadQuality::Diminished, Inversion::Root),
            Numeral::dominant_seventh(Degree::V, Inversion::Root),
            Numeral::dominant_seventh(Degree::V, Inversion::Third),
        ]),
    }
}

fn minor_table(degree: u8) -> Candidates {
    match degree {
        1 => SmallVec::from_slice(&[
            candidates(Degree::I, TriadQuality::Minor, Inversion::Root),
            candidates(Degree::VI, TriadQuality::Major, Inversion::First),
        ]),
        2 => SmallVec::from_slice(&[
            candidates(Degree::II, TriadQuality::Diminished, Inversion::Root),
            candidates(Degree::VII, TriadQuality::Diminished, Inversion::First),
            Numeral::dominant_seventh(Degree::V, Inversion::Root),
        ]),
        3 => SmallVec::from_slice(&[candidates(Degree::I, TriadQuality::Minor, Inversion::First)]),
        4 => SmallVec::from_slice(&[
            candidates(Degree::IV, TriadQuality::Minor, Inversion::Root),
            candidates(Degree::II, TriadQuality::Diminished, Inversion::First),
            candidates(Degree::I, TriadQuality::Minor, Inversion::Second),
        ]),
        5 => SmallVec::from_slice(&[
            candidates(Degree::V, TriadQuality::Major, Inversion::Root),
            candidates(Degree::V, TriadQuality::Minor, Inversion::Root),
        ]),
        6 => SmallVec::from_slice(&[
            candidates(Degree::VI, TriadQuality::Major, Inversion::Root),
            candidates(Degree::IV, TriadQuality::Minor, Inversion::First),
        ]),
        _ => SmallVec::from_slice(&[
            candidates(Degree::VII, TriadQuality::Diminished, Inversion::Root),
            Numeral::dominant_seventh(Degree::V, Inversion::Root),
        ]),
    }
}

fn tonic_numeral(mode: Mode) -> Numeral {
    match mode {
        Mode::Major => Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root),
        Mode::Minor => Numeral::triad(Degree::I, TriadQuality::Minor, Inversion::Root),
    }
}

/// Candidate numerals for a bass pitch-class at `position` of a progression of `total` chords.
///
/// The scale degree is resolved via [`Key::nearest_scale_degree`] — a chromatic bass note snaps
/// to its nearest diatonic degree rather than forcing a bare tonic fallback. First/last position
/// overrides for degrees 1 and 5 are applied afterward, and the result is always truncated to
/// 3 entries.
#[must_use]
pub fn candidates_for_bass(key: Key, bass_pitch_class: PitchClass, position: usize, total: usize) -> Candidates {
    let degree = key.nearest_scale_degree(bass_pitch_class);
    let mut set = match key.mode() {
        Mode::Major => major_table(degree),
        Mode::Minor => minor_table(degree),
    };

    let is_first = position == 0;
    let is_last = position + 1 == total;

    if is_first && degree == 1 {
        set = SmallVec::from_slice(&[tonic_numeral(key.mode())]);
    } else if is_first && degree == 5 {
        set = SmallVec::from_slice(&[
            candidates(Degree::V, TriadQuality::Major, Inversion::Root),
            Numeral::dominant_seventh(Degree::V, Inversion::Root),
        ]);
    }

    if is_last && degree == 1 {
        set = SmallVec::from_slice(&[tonic_numeral(key.mode())]);
    } else if is_last && degree == 5 {
        set = SmallVec::from_slice(&[Numeral::dominant_seventh(Degree::V, Inversion::Root)]);
    }

    set.truncate(3);
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(semitone: i32) -> PitchClass {
        PitchClass::from_semitones(semitone)
    }

    #[test]
    fn c_major_tonic_bass_at_any_interior_position() {
        let key = Key::major(pc(0));
        let set = candidates_for_bass(key, pc(0), 1, 4);
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].canonical(), "I");
        assert_eq!(set[1].canonical(), "vi6");
    }

    #[test]
    fn first_position_tonic_bass_forces_tonic_only() {
        let key = Key::major(pc(0));
        let set = candidates_for_bass(key, pc(0), 0, 4);
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].canonical(), "I");
    }

    #[test]
    fn last_position_dominant_bass_forces_v7_only() {
        let key = Key::major(pc(0));
        let set = candidates_for_bass(key, pc(7), 3, 4);
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].canonical(), "V7");
    }

    #[test]
    fn minor_dominant_bass_offers_major_and_minor_v() {
        let key = Key::minor(pc(9));
        let set = candidates_for_bass(key, pc(4), 1, 4);
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].canonical(), "V");
        assert_eq!(set[1].canonical(), "v");
    }

    #[test]
    fn chromatic_bass_snaps_to_nearest_diatonic_degree() {
        let key = Key::major(pc(0));
        let set = candidates_for_bass(key, pc(1), 1, 4); // C#, nearest is degree 1 (C)
        assert_eq!(set[0].canonical(), "I");
    }
}

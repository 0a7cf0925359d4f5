//! Progression enumeration, scoring, and SATB voicing search over a fixed bass line.
//!
//! This crate owns the algorithmic core of the harmonizer: it consumes a bass line and a key from
//! `satb-theory`, produces ranked Roman-numeral progressions (`analyze`), and, given a chosen
//! progression, realizes it into a four-voice texture with a validation report (`realize`). It
//! never parses text and never touches a transport — both live in `satb-api`.

pub mod bassmap;
pub mod compromise;
pub mod dp;
pub mod enumerator;
pub mod scorer;
pub mod validator;
pub mod voicing;

use satb_theory::{Key, Numeral, Pitch};

pub use compromise::{Compromise, Severity};
pub use dp::DpResult;
pub use scorer::{ScoredProgression, Style};
pub use validator::{Issue, Report};
pub use voicing::Voicing;

/// Analyze a bass line: map each bass note to candidate numerals, enumerate admissible
/// sequences, and score them, returning at most 5 ranked progressions.
#[must_use]
pub fn analyze(bass_notes: &[Pitch], key: Key) -> Vec<ScoredProgression> {
    let n = bass_notes.len();
    let candidate_sets: Vec<bassmap::Candidates> = bass_notes
        .iter()
        .enumerate()
        .map(|(position, bass)| bassmap::candidates_for_bass(key, bass.pitch_class(), position, n))
        .collect();
    let progressions = enumerator::enumerate(&candidate_sets);
    scorer::top_five(progressions)
}

/// Realize a chosen progression over its fixed bass line: generate and search the voicing
/// lattice, then validate and annotate the result. Returns `None` only if `progression` and
/// `bass_notes` differ in length or are empty — both are caller errors, surfaced by `satb-api`
/// as `InputMissing`/`InputMalformed`.
#[must_use]
pub fn realize(progression: &[Numeral], bass_notes: &[Pitch], key: Key) -> Option<RealizeOutcome> {
    if progression.is_empty() || progression.len() != bass_notes.len() {
        return None;
    }

    let chords: Vec<satb_theory::ExpandedChord> = progression.iter().map(|numeral| numeral.expand(key)).collect();
    let voicing_sets: Vec<Vec<Voicing>> = chords
        .iter()
        .zip(bass_notes)
        .map(|(chord, bass)| voicing::generate(*chord, *bass, key))
        .collect();

    let dp_result = dp::run(&chords, &voicing_sets, key)?;
    let compromises = compromise::analyze(&dp_result);
    let mut report = validator::validate(&dp_result.path, &chords, key);
    report.compromises.extend(compromises);

    Some(RealizeOutcome { realization: dp_result.path, report })
}

/// Output of [`realize`]: the chosen voicing per chord plus its validation report.
#[derive(Debug, Clone)]
pub struct RealizeOutcome {
    pub realization: Vec<Voicing>,
    pub report: Report,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realize_rejects_mismatched_lengths() {
        let key = Key::major(satb_theory::PitchClass::from_semitones(0));
        let progression = [Numeral::triad(
            satb_theory::numeral::Degree::I,
            satb_theory::numeral::TriadQuality::Major,
            satb_theory::numeral::Inversion::Root,
        )];
        let bass_notes = [
            Pitch::from_pitch_class(satb_theory::PitchClass::from_semitones(0), 3),
            Pitch::from_pitch_class(satb_theory::PitchClass::from_semitones(7), 3),
        ];
        assert!(realize(&progression, &bass_notes, key).is_none());
    }

    #[test]
    fn analyze_returns_nothing_for_an_empty_bass_line() {
        let key = Key::major(satb_theory::PitchClass::from_semitones(0));
        assert!(analyze(&[], key).is_empty());
    }
}

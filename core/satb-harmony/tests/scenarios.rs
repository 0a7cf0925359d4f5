use satb_harmony::{analyze, realize};
use satb_theory::numeral::{Degree, Inversion, TriadQuality};
use satb_theory::{Key, Numeral, Pitch, PitchClass};

fn pc(semitone: i32) -> PitchClass {
    PitchClass::from_semitones(semitone)
}

fn bass(semitone: i32, octave: i32) -> Pitch {
    Pitch::from_pitch_class(pc(semitone), octave)
}

#[test]
fn s1_authentic_cadence_progression_scores_high() {
    let key = Key::major(pc(0));
    let bass_notes = [bass(0, 3), bass(5, 3), bass(7, 3), bass(0, 3)];
    let progressions = analyze(&bass_notes, key);
    let top = progressions.first().expect("at least one progression");
    assert!(top.score >= 100 + 30 + 25 + 15);
}

#[test]
fn s2_minor_authentic_cadence_begins_and_ends_on_tonic() {
    let key = Key::minor(pc(9));
    let bass_notes = [bass(9, 3), bass(2, 3), bass(4, 3), bass(9, 3)];
    let progressions = analyze(&bass_notes, key);
    let top = progressions.first().expect("at least one progression");
    assert_eq!(top.numerals.first().unwrap().degree(), Degree::I);
    assert_eq!(top.numerals.last().unwrap().degree(), Degree::I);
}

#[test]
fn s3_simple_progression_validates_cleanly() {
    let key = Key::major(pc(0));
    let progression = [
        Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root),
        Numeral::triad(Degree::V, TriadQuality::Major, Inversion::Root),
        Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root),
    ];
    let bass_notes = [bass(0, 3), bass(7, 2), bass(0, 3)];
    let outcome = realize(&progression, &bass_notes, key).expect("realize should succeed");
    assert_eq!(outcome.report.errors.len(), 0);
    assert_eq!(outcome.report.score, 100);
}

#[test]
fn s4_full_cadence_is_complete_and_parallel_free() {
    let key = Key::major(pc(0));
    let progression = [
        Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root),
        Numeral::triad(Degree::IV, TriadQuality::Major, Inversion::Root),
        Numeral::dominant_seventh(Degree::V, Inversion::Root),
        Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root),
    ];
    let bass_notes = [bass(0, 3), bass(5, 3), bass(7, 3), bass(0, 3)];
    let outcome = realize(&progression, &bass_notes, key).expect("realize should succeed");
    assert!(outcome.report.errors.iter().all(|e| e.rule != "incomplete_chord"));
    assert!(outcome
        .report
        .errors
        .iter()
        .all(|e| e.rule != "parallel_fifths" && e.rule != "parallel_octaves"));
    assert!(outcome.report.score >= 90);
}

#[test]
fn s5_dominant_to_subdominant_does_not_trigger_tendency_tone_warning() {
    let key = Key::major(pc(0));
    let progression = [
        Numeral::triad(Degree::V, TriadQuality::Major, Inversion::Root),
        Numeral::triad(Degree::IV, TriadQuality::Major, Inversion::Root),
    ];
    let bass_notes = [bass(7, 3), bass(5, 3)];
    let outcome = realize(&progression, &bass_notes, key).expect("realize should succeed");
    assert!(outcome.report.warnings.iter().all(|w| w.rule != "tendency_tone"));
}

#[test]
fn s6_iii_chord_penalized_in_score_not_flagged_as_error() {
    let key = Key::major(pc(0));

    let iii_alone = [Numeral::triad(Degree::III, TriadQuality::Minor, Inversion::Root)];
    let vi_alone = [Numeral::triad(Degree::VI, TriadQuality::Minor, Inversion::Root)];
    let iii_score = satb_harmony::scorer::score(&iii_alone).score;
    let vi_score = satb_harmony::scorer::score(&vi_alone).score;
    assert_eq!(vi_score - iii_score, 30);

    let with_iii = [
        Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root),
        Numeral::triad(Degree::III, TriadQuality::Minor, Inversion::Root),
        Numeral::triad(Degree::VI, TriadQuality::Minor, Inversion::Root),
        Numeral::triad(Degree::IV, TriadQuality::Major, Inversion::Root),
        Numeral::dominant_seventh(Degree::V, Inversion::Root),
        Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root),
    ];
    let bass_notes = [bass(0, 3), bass(4, 3), bass(9, 3), bass(5, 3), bass(7, 3), bass(0, 3)];
    let outcome = realize(&with_iii, &bass_notes, key).expect("realize should succeed");
    assert!(outcome.report.errors.iter().all(|e| e.rule != "iii"));
}

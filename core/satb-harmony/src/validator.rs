//! core/satb-harmony/src/validator.rs
//! SATB validator: independent re-check of a finished realization.
//!
//! Unlike `crate::compromise`, which reads the DP's own cost terms, this is a pure function of
//! the realization, the progression, and the key — it re-derives every violation from scratch and
//! does not know what the DP's cost surface looked like. The two are deliberately not
//! reconciled: a voicing flagged `forced_parallels` by the analyzer can also surface here as a
//! `parallel_fifths`/`parallel_octaves` error.

use satb_theory::{ExpandedChord, Interval, Key, Pitch};

use crate::compromise::{Compromise, Severity};
use crate::voicing::{self, Voicing};

/// Severity-carrying validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub rule: &'static str,
    pub is_error: bool,
    pub location: Option<usize>,
    pub description: String,
}

/// Full validation report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub compromises: Vec<Compromise>,
    pub score: i64,
    pub suggestions: Vec<String>,
}

const VOICE_NAMES: [&str; 4] = ["bass", "tenor", "alto", "soprano"];

fn voice_range_issues(voicing: &Voicing, location: usize) -> Vec<Issue> {
    let ranges = voicing::voice_ranges();
    let pitches = [voicing.bass, voicing.tenor, voicing.alto, voicing.soprano];
    let mut out = Vec::new();
    for (index, pitch) in pitches.iter().enumerate() {
        let (low, high) = ranges[index];
        if *pitch < low || *pitch > high {
            out.push(Issue {
                rule: "voice_range",
                is_error: true,
                location: Some(location),
                description: format!("{} at {} is outside its range", VOICE_NAMES[index], pitch.name()),
            });
        }
    }
    out
}

fn crossing_issue(voicing: &Voicing, location: usize) -> Option<Issue> {
    let ordered = voicing.bass <= voicing.tenor && voicing.tenor <= voicing.alto && voicing.alto <= voicing.soprano;
    (!ordered).then(|| Issue {
        rule: "voice_crossing",
        is_error: true,
        location: Some(location),
        description: "adjacent voices are out of order".to_string(),
    })
}

fn wide_spacing_issue(voicing: &Voicing, location: usize) -> Option<Issue> {
    let soprano_alto = voicing.soprano.midi() - voicing.alto.midi();
    let alto_tenor = voicing.alto.midi() - voicing.tenor.midi();
    (soprano_alto > 12 || alto_tenor > 12).then(|| Issue {
        rule: "wide_spacing",
        is_error: false,
        location: Some(location),
        description: "soprano-alto or alto-tenor spacing exceeds an octave".to_string(),
    })
}

fn incomplete_chord_issue(voicing: &Voicing, chord: ExpandedChord, location: usize) -> Option<Issue> {
    let pitch_classes: Vec<_> =
        [voicing.bass, voicing.tenor, voicing.alto, voicing.soprano].map(Pitch::pitch_class).to_vec();
    let complete = [chord.root, chord.third, chord.fifth]
        .iter()
        .all(|tone| pitch_classes.contains(tone));
    (!complete).then(|| Issue {
        rule: "incomplete_chord",
        is_error: true,
        location: Some(location),
        description: "chord is missing its root, third, or fifth".to_string(),
    })
}

fn large_leap_issues(prev: &Voicing, next: &Voicing, location: usize) -> Vec<Issue> {
    let mut out = Vec::new();
    let bass_leap = (next.bass.midi() - prev.bass.midi()).abs();
    if bass_leap > 12 {
        out.push(Issue {
            rule: "large_leap",
            is_error: true,
            location: Some(location),
            description: format!("bass leaps {bass_leap} semitones"),
        });
    }
    let upper = [
        ("tenor", prev.tenor, next.tenor),
        ("alto", prev.alto, next.alto),
        ("soprano", prev.soprano, next.soprano),
    ];
    for (name, before, after) in upper {
        let leap = (after.midi() - before.midi()).abs();
        if leap > 12 {
            out.push(Issue {
                rule: "large_leap",
                is_error: true,
                location: Some(location),
                description: format!("{name} leaps {leap} semitones"),
            });
        } else if leap >= 7 {
            out.push(Issue {
                rule: "large_leap",
                is_error: false,
                location: Some(location),
                description: format!("{name} leaps {leap} semitones"),
            });
        }
    }
    out
}

fn parallel_issues(prev: &Voicing, next: &Voicing, location: usize) -> Vec<Issue> {
    let old = prev.midi();
    let new = next.midi();
    let mut out = Vec::new();
    for i in 0..4 {
        for j in (i + 1)..4 {
            if old[i] == new[i] && old[j] == new[j] {
                continue;
            }
            let before = Interval::between(
                pitch_at(prev, i),
                pitch_at(prev, j),
            );
            let after = Interval::between(pitch_at(next, i), pitch_at(next, j));
            let rule = if before.is_perfect_fifth() && after.is_perfect_fifth() {
                Some(("parallel_fifths", "fifth"))
            } else if before.is_perfect_octave() && after.is_perfect_octave() {
                Some(("parallel_octaves", "octave"))
            } else if before.is_perfect_unison() && after.is_perfect_unison() {
                Some(("parallel_unisons", "unison"))
            } else {
                None
            };
            if let Some((rule, label)) = rule {
                out.push(Issue {
                    rule,
                    is_error: true,
                    location: Some(location),
                    description: format!("parallel {label} between {} and {}", VOICE_NAMES[i], VOICE_NAMES[j]),
                });
            }
        }
    }
    out
}

fn pitch_at(voicing: &Voicing, index: usize) -> Pitch {
    [voicing.bass, voicing.tenor, voicing.alto, voicing.soprano][index]
}

fn tendency_tone_issue(
    prev: &Voicing,
    prev_chord: ExpandedChord,
    next_chord: ExpandedChord,
    next: &Voicing,
    key: Key,
    location: usize,
) -> Option<Issue> {
    let prev_degree = key.scale_degree(prev_chord.root)?;
    if prev_degree != 5 {
        return None;
    }
    let next_degree = key.scale_degree(next_chord.root)?;
    if next_degree != 1 {
        return None;
    }
    let leading_tone = key.leading_tone();
    let tonic = key.tonic();
    let voices_prev = [prev.bass, prev.tenor, prev.alto, prev.soprano];
    let voices_next = [next.bass, next.tenor, next.alto, next.soprano];
    let index = voices_prev.iter().position(|pitch| pitch.pitch_class() == leading_tone)?;
    let resolves = voices_next[index].pitch_class() == tonic;
    (!resolves).then(|| Issue {
        rule: "tendency_tone",
        is_error: false,
        location: Some(location),
        description: "leading tone in a dominant chord does not resolve to the tonic".to_string(),
    })
}

/// Validate a completed realization against the progression's expanded chords and the key.
#[must_use]
pub fn validate(realization: &[Voicing], chords: &[ExpandedChord], key: Key) -> Report {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (location, (voicing, chord)) in realization.iter().zip(chords).enumerate() {
        for issue in voice_range_issues(voicing, location) {
            errors.push(issue);
        }
        if let Some(issue) = crossing_issue(voicing, location) {
            errors.push(issue);
        }
        if let Some(issue) = incomplete_chord_issue(voicing, *chord, location) {
            errors.push(issue);
        }
        if let Some(issue) = wide_spacing_issue(voicing, location) {
            warnings.push(issue);
        }
    }

    for (location, pair) in realization.windows(2).enumerate() {
        for issue in parallel_issues(&pair[0], &pair[1], location) {
            errors.push(issue);
        }
        for issue in large_leap_issues(&pair[0], &pair[1], location) {
            if issue.is_error {
                errors.push(issue);
            } else {
                warnings.push(issue);
            }
        }
        if let Some(issue) =
            tendency_tone_issue(&pair[0], chords[location], chords[location + 1], &pair[1], key, location)
        {
            warnings.push(issue);
        }
    }

    let compromises: Vec<Compromise> = realization
        .windows(2)
        .enumerate()
        .flat_map(|(location, pair)| forced_parallels_as_compromise(&pair[0], &pair[1], location))
        .collect();

    let penalty_total: i64 = compromises.iter().map(|c| c.severity.penalty()).sum();
    let score = (100 - 20 * errors.len() as i64 - 5 * warnings.len() as i64 - penalty_total).max(0);

    let suggestions = build_suggestions(&errors, &warnings);

    Report { errors, warnings, compromises, score, suggestions }
}

fn forced_parallels_as_compromise(prev: &Voicing, next: &Voicing, location: usize) -> Vec<Compromise> {
    parallel_issues(prev, next, location)
        .into_iter()
        .filter(|issue| issue.rule == "parallel_fifths" || issue.rule == "parallel_octaves")
        .map(|issue| Compromise {
            kind: "forced_parallels",
            severity: Severity::High,
            location: Some(location),
            description: issue.description,
        })
        .collect()
}

fn build_suggestions(errors: &[Issue], warnings: &[Issue]) -> Vec<String> {
    let mut suggestions = Vec::new();
    if errors.is_empty() && warnings.is_empty() {
        suggestions.push("no violations found; this realization follows classical voice-leading conventions".to_string());
        return suggestions;
    }
    suggestions.push(format!("{} error(s) and {} warning(s) were found", errors.len(), warnings.len()));

    let mut rules: Vec<&'static str> = errors.iter().chain(warnings).map(|issue| issue.rule).collect();
    rules.sort_unstable();
    rules.dedup();
    for rule in rules {
        let hint = match rule {
            "voice_range" => "keep every voice within its declared range",
            "parallel_fifths" | "parallel_octaves" | "parallel_unisons" => {
                "avoid moving two voices in parallel perfect intervals"
            }
            "voice_crossing" => "keep voices in bass-tenor-alto-soprano order within each chord",
            "incomplete_chord" => "include the chord's root, third, and fifth",
            "large_leap" => "prefer stepwise motion or small leaps between chords",
            "tendency_tone" => "resolve the leading tone up to the tonic",
            "wide_spacing" => "keep soprano-alto and alto-tenor gaps within an octave",
            _ => continue,
        };
        suggestions.push(hint.to_string());
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voicing;
    use satb_theory::numeral::{Degree, Inversion, TriadQuality};
    use satb_theory::{Numeral, Pitch, PitchClass};

    fn pc(semitone: i32) -> PitchClass {
        PitchClass::from_semitones(semitone)
    }

    #[test]
    fn clean_progression_scores_one_hundred() {
        let key = Key::major(pc(0));
        let numerals = [
            Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root),
            Numeral::triad(Degree::V, TriadQuality::Major, Inversion::Root),
            Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root),
        ];
        let basses = [pc(0), pc(7), pc(0)];
        let chords: Vec<ExpandedChord> = numerals.iter().map(|n| n.expand(key)).collect();
        let bass_pitches: Vec<Pitch> = basses.iter().map(|pc| Pitch::from_pitch_class(*pc, 3)).collect();
        let sets: Vec<Vec<voicing::Voicing>> = chords
            .iter()
            .zip(&bass_pitches)
            .map(|(chord, bass)| voicing::generate(*chord, *bass, key))
            .collect();
        let result = crate::dp::run(&chords, &sets, key).expect("dp path");
        let report = validate(&result.path, &chords, key);
        assert_eq!(report.errors.len(), 0);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn iii_chord_is_never_flagged_as_an_error() {
        let key = Key::major(pc(0));
        let numerals = [
            Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root),
            Numeral::triad(Degree::III, TriadQuality::Minor, Inversion::Root),
            Numeral::triad(Degree::VI, TriadQuality::Minor, Inversion::Root),
        ];
        let basses = [pc(0), pc(4), pc(9)];
        let chords: Vec<ExpandedChord> = numerals.iter().map(|n| n.expand(key)).collect();
        let bass_pitches: Vec<Pitch> = basses.iter().map(|pc| Pitch::from_pitch_class(*pc, 3)).collect();
        let sets: Vec<Vec<voicing::Voicing>> = chords
            .iter()
            .zip(&bass_pitches)
            .map(|(chord, bass)| voicing::generate(*chord, *bass, key))
            .collect();
        let result = crate::dp::run(&chords, &sets, key).expect("dp path");
        let report = validate(&result.path, &chords, key);
        assert!(report.errors.iter().all(|e| e.rule != "iii"));
    }
}

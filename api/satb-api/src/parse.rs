//! api/satb-api/src/parse.rs
//! Note and key text parsing: the only place request strings become typed values.

use satb_theory::pitch::DiatonicStep;
use satb_theory::{Key, Mode, Pitch, PitchClass};

use crate::error::ApiError;

/// Parse a note name such as `"C3"`, `"F#4"`, `"Bb2"`, or `"B-2"` (the flat alias) into a [`Pitch`].
/// A missing octave defaults to 3.
pub fn parse_note(text: &str) -> Result<Pitch, ApiError> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let letter = chars
        .next()
        .ok_or_else(|| ApiError::InputMalformed(format!("empty note name: {trimmed:?}")))?;
    let step = DiatonicStep::from_letter(letter)
        .ok_or_else(|| ApiError::InputMalformed(format!("unrecognized note letter in {trimmed:?}")))?;
    let rest: String = chars.collect();
    let (accidental, octave_str) = split_accidental(&rest);
    let octave = if octave_str.is_empty() {
        3
    } else {
        octave_str
            .parse::<i32>()
            .map_err(|_| ApiError::InputMalformed(format!("bad octave in {trimmed:?}")))?
    };
    Ok(Pitch::new(step, accidental, octave))
}

/// Split a note's tail into `(accidental, remaining octave digits)`. `"-"` is accepted as a flat
/// spelling alias alongside `"b"`.
fn split_accidental(rest: &str) -> (i8, &str) {
    if let Some(stripped) = rest.strip_prefix('#') {
        (1, stripped)
    } else if let Some(stripped) = rest.strip_prefix('-') {
        (-1, stripped)
    } else if let Some(stripped) = rest.strip_prefix('b') {
        (-1, stripped)
    } else {
        (0, rest)
    }
}

fn parse_tonic_label(text: &str) -> Option<PitchClass> {
    let mut chars = text.chars();
    let letter = chars.next()?;
    let step = DiatonicStep::from_letter(letter)?;
    let rest: String = chars.collect();
    let accidental: i32 = match rest.as_str() {
        "" => 0,
        "#" => 1,
        "-" | "b" | "B" => -1,
        _ => return None,
    };
    Some(PitchClass::from_semitones(step.natural_semitone() + accidental))
}

fn parse_key_literal(text: &str) -> Option<Key> {
    let mut parts = text.split_whitespace();
    let tonic_token = parts.next()?;
    let mode_token = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let tonic = parse_tonic_label(tonic_token)?;
    let mode = match mode_token.to_ascii_lowercase().as_str() {
        "major" => Mode::Major,
        "minor" => Mode::Minor,
        _ => return None,
    };
    Some(Key::new(tonic, mode))
}

/// The restricted 12-key candidate set `auto` detection is allowed to land on.
fn candidate_keys() -> Vec<Key> {
    const MAJOR_TONICS: [&str; 7] = ["C", "G", "F", "D", "A", "E", "B-"];
    const MINOR_TONICS: [&str; 5] = ["A", "E", "B", "D", "F#"];
    MAJOR_TONICS
        .iter()
        .map(|label| Key::major(parse_tonic_label(label).expect("candidate tonic is well-formed")))
        .chain(
            MINOR_TONICS
                .iter()
                .map(|label| Key::minor(parse_tonic_label(label).expect("candidate tonic is well-formed"))),
        )
        .collect()
}

/// (first-pitch-class match, last-pitch-class match, in-key-note ratio) score, compared in that
/// priority order. Returns `true` if `candidate` beats `incumbent`.
fn beats(candidate: (bool, bool, f64), incumbent: (bool, bool, f64)) -> bool {
    if candidate.0 != incumbent.0 {
        return candidate.0;
    }
    if candidate.1 != incumbent.1 {
        return candidate.1;
    }
    candidate.2 > incumbent.2
}

fn detect_key(bass_notes: &[Pitch]) -> Key {
    let Some(first) = bass_notes.first() else {
        return Key::major(PitchClass::from_semitones(0));
    };
    let last = bass_notes.last().unwrap_or(first);
    let first_pc = first.pitch_class();
    let last_pc = last.pitch_class();

    let mut best_key = Key::major(PitchClass::from_semitones(0));
    let mut best_score = (false, false, -1.0_f64);
    for key in candidate_keys() {
        let degrees = key.scale_pitch_classes();
        let in_key = bass_notes.iter().filter(|pitch| degrees.contains(&pitch.pitch_class())).count();
        #[allow(clippy::cast_precision_loss)]
        let ratio = in_key as f64 / bass_notes.len() as f64;
        let score = (key.tonic() == first_pc, key.tonic() == last_pc, ratio);
        if beats(score, best_score) {
            best_score = score;
            best_key = key;
        }
    }
    best_key
}

fn fallback_from_bass(bass_notes: &[Pitch]) -> Key {
    match (bass_notes.first(), bass_notes.last()) {
        (Some(first), Some(last)) if first.pitch_class() == last.pitch_class() => Key::major(first.pitch_class()),
        _ => Key::major(PitchClass::from_semitones(0)),
    }
}

/// Resolve a key string against a bass line. `"auto"` triggers key detection; any other
/// unparseable string falls back to a same-first/last-pitch-class major key (or C major), logging
/// a warning but never failing the request.
#[must_use]
pub fn resolve_key(text: &str, bass_notes: &[Pitch]) -> Key {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("auto") {
        return detect_key(bass_notes);
    }
    match parse_key_literal(trimmed) {
        Some(key) => key,
        None => {
            tracing::warn!(key = trimmed, "key string failed to parse, falling back");
            fallback_from_bass(bass_notes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_note_with_explicit_octave() {
        let pitch = parse_note("F#4").expect("should parse");
        assert_eq!(pitch.midi(), 66);
    }

    #[test]
    fn missing_octave_defaults_to_three() {
        let pitch = parse_note("C").expect("should parse");
        assert_eq!(pitch.octave(), 3);
    }

    #[test]
    fn dash_flat_alias_matches_b_flat_spelling() {
        let dash = parse_note("B-2").expect("should parse");
        let letter = parse_note("Bb2").expect("should parse");
        assert_eq!(dash.midi(), letter.midi());
    }

    #[test]
    fn rejects_unknown_letters() {
        assert!(parse_note("H4").is_err());
    }

    #[test]
    fn parses_literal_key_strings() {
        let key = parse_key_literal("F# minor").expect("should parse");
        assert_eq!(key.mode(), Mode::Minor);
        assert_eq!(key.tonic(), PitchClass::from_semitones(6));
    }

    #[test]
    fn auto_detects_c_major_from_a_authentic_cadence() {
        let bass: Vec<Pitch> = ["C3", "F3", "G3", "C3"].iter().map(|s| parse_note(s).unwrap()).collect();
        let key = resolve_key("auto", &bass);
        assert_eq!(key.tonic(), PitchClass::from_semitones(0));
        assert_eq!(key.mode(), Mode::Major);
    }

    #[test]
    fn malformed_key_falls_back_to_same_first_last_pitch_class() {
        let bass: Vec<Pitch> = ["G3", "C3", "G3"].iter().map(|s| parse_note(s).unwrap()).collect();
        let key = resolve_key("not a key", &bass);
        assert_eq!(key.tonic(), PitchClass::from_semitones(7));
        assert_eq!(key.mode(), Mode::Major);
    }
}

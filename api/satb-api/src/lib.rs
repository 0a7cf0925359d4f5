//! Request/response DTOs, text parsing, and error taxonomy for the SATB harmonizer.
//!
//! This crate is the only place a wire-format string becomes a typed `satb-theory`/`satb-harmony`
//! value and back. It never renders output for a human (that's `satb-cli`) and never enumerates
//! voicings itself (that's `satb-harmony`); it is pure translation plus input validation.

pub mod dto;
pub mod error;
pub mod parse;

use satb_theory::Numeral;

pub use dto::{AnalyzeRequest, AnalyzeResponse, HealthResponse, ProgressionDto, RealizeRequest, RealizeResponse, ValidationDto, VoiceChordDto};
pub use error::ApiError;

/// Parse inputs, enumerate and score candidate progressions, return up to 5 ranked results.
pub fn analyze_bassline(request: &AnalyzeRequest) -> Result<AnalyzeResponse, ApiError> {
    if request.bass_notes.is_empty() {
        return Err(ApiError::InputMissing("bass_notes".to_string()));
    }
    let bass_notes: Vec<_> =
        request.bass_notes.iter().map(|text| parse::parse_note(text)).collect::<Result<_, _>>()?;
    let key = parse::resolve_key(&request.key, &bass_notes);
    let progressions = satb_harmony::analyze(&bass_notes, key);
    Ok(dto::AnalyzeResponse {
        key: key_label(key),
        progressions: progressions.into_iter().map(dto::ProgressionDto::from).collect(),
    })
}

/// Parse inputs, realize a chosen progression into SATB, return the texture plus validation.
pub fn realize_satb(request: &RealizeRequest) -> Result<RealizeResponse, ApiError> {
    if request.chord_progression.is_empty() {
        return Err(ApiError::InputMissing("chord_progression".to_string()));
    }
    if request.bass_notes.is_empty() {
        return Err(ApiError::InputMissing("bass_notes".to_string()));
    }
    if request.chord_progression.len() != request.bass_notes.len() {
        return Err(ApiError::InputMalformed(
            "chord_progression and bass_notes must have the same length".to_string(),
        ));
    }

    let numerals: Vec<Numeral> = request
        .chord_progression
        .iter()
        .map(|text| {
            Numeral::parse(text).ok_or_else(|| ApiError::InputMalformed(format!("unrecognized numeral: {text}")))
        })
        .collect::<Result<_, _>>()?;
    let bass_notes: Vec<_> =
        request.bass_notes.iter().map(|text| parse::parse_note(text)).collect::<Result<_, _>>()?;
    let key = parse::resolve_key(&request.key, &bass_notes);

    let outcome = satb_harmony::realize(&numerals, &bass_notes, key)
        .ok_or_else(|| ApiError::Internal("voice realization produced no result".to_string()))?;

    let satb_harmonization = outcome
        .realization
        .into_iter()
        .zip(&numerals)
        .map(|(voicing, numeral)| dto::VoiceChordDto::from_voicing(voicing, numeral))
        .collect();

    Ok(RealizeResponse { satb_harmonization, validation: ValidationDto::from(outcome.report) })
}

/// `health`: a constant, side-effect-free readiness signal.
#[must_use]
pub fn health() -> HealthResponse {
    HealthResponse::default()
}

fn key_label(key: satb_theory::Key) -> String {
    let mode = match key.mode() {
        satb_theory::Mode::Major => "major",
        satb_theory::Mode::Minor => "minor",
    };
    format!("{} {mode}", key.tonic().name_sharp())
}

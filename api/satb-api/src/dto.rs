//! api/satb-api/src/dto.rs
//! Request/response payloads for the three in-scope operations.

use serde::{Deserialize, Serialize};

use satb_harmony::{Compromise, Issue, Report, ScoredProgression, Voicing};
use satb_theory::Numeral;

/// Request payload for `analyze_bassline`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeRequest {
    /// Bass note names, e.g. `["C3", "F3", "G3", "C3"]`.
    pub bass_notes: Vec<String>,
    /// Key string, e.g. `"C major"`, `"F# minor"`, or `"auto"`.
    pub key: String,
}

/// Response payload for `analyze_bassline`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeResponse {
    /// The key actually used (after `auto` detection or fallback).
    pub key: String,
    /// Up to 5 ranked candidate progressions.
    pub progressions: Vec<ProgressionDto>,
}

/// A single ranked progression.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressionDto {
    /// Canonical Roman-numeral tags, e.g. `["I", "IV", "V7", "I"]`.
    pub roman_numerals: Vec<String>,
    /// Heuristic score.
    pub score: i64,
    /// Implied harmonic style.
    pub style: String,
    /// One-line human-readable summary of the progression.
    pub description: String,
}

impl From<ScoredProgression> for ProgressionDto {
    fn from(scored: ScoredProgression) -> Self {
        let roman_numerals: Vec<String> = scored.numerals.iter().copied().map(Numeral::canonical).collect();
        let description = format!("{} ({} style, score {})", roman_numerals.join(" - "), scored.style.label(), scored.score);
        Self { roman_numerals, score: scored.score, style: scored.style.label().to_string(), description }
    }
}

/// Request payload for `realize_satb`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RealizeRequest {
    /// Chosen progression as canonical Roman-numeral tags.
    pub chord_progression: Vec<String>,
    /// Fixed bass line, same length as `chord_progression`.
    pub bass_notes: Vec<String>,
    /// Key string, e.g. `"C major"`.
    pub key: String,
}

/// Response payload for `realize_satb`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RealizeResponse {
    /// One entry per chord: the realized four voices plus the numeral that produced it.
    pub satb_harmonization: Vec<VoiceChordDto>,
    /// Validation report.
    pub validation: ValidationDto,
}

/// A single realized chord.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceChordDto {
    /// Soprano pitch, e.g. `"E5"`.
    pub soprano: String,
    /// Alto pitch.
    pub alto: String,
    /// Tenor pitch.
    pub tenor: String,
    /// Bass pitch (always equal to the input bass note at this position).
    pub bass: String,
    /// Canonical numeral tag realized by this chord.
    pub chord: String,
}

impl VoiceChordDto {
    #[must_use]
    pub(crate) fn from_voicing(voicing: Voicing, chord: &Numeral) -> Self {
        Self {
            soprano: voicing.soprano.name(),
            alto: voicing.alto.name(),
            tenor: voicing.tenor.name(),
            bass: voicing.bass.name(),
            chord: chord.canonical(),
        }
    }
}

/// Validation report mirrored onto the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationDto {
    /// Error descriptions, one per violation.
    pub errors: Vec<String>,
    /// Warning descriptions, one per violation.
    pub warnings: Vec<String>,
    /// Compromise descriptions extracted from the DP cost surface.
    pub compromises: Vec<String>,
    /// `max(0, 100 - 20*errors - 5*warnings - compromise penalties)`.
    pub score: i64,
    /// Summary plus deduplicated rule-specific hints.
    pub suggestions: Vec<String>,
}

impl From<Report> for ValidationDto {
    fn from(report: Report) -> Self {
        Self {
            errors: report.errors.iter().map(format_issue).collect(),
            warnings: report.warnings.iter().map(format_issue).collect(),
            compromises: report.compromises.iter().map(format_compromise).collect(),
            score: report.score,
            suggestions: report.suggestions,
        }
    }
}

fn format_issue(issue: &Issue) -> String {
    format!("{}: {}", issue.rule, issue.description)
}

fn format_compromise(compromise: &Compromise) -> String {
    format!("{} ({:?}): {}", compromise.kind, compromise.severity, compromise.description)
}

/// Response payload for `health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always `"healthy"` — the core performs no I/O that could degrade this.
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "healthy".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_request_round_trips_through_json() {
        let request = AnalyzeRequest { bass_notes: vec!["C3".into(), "G3".into()], key: "auto".into() };
        let json = serde_json::to_string(&request).expect("serialize");
        let decoded: AnalyzeRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, request);
    }

    #[test]
    fn health_response_defaults_to_healthy() {
        assert_eq!(HealthResponse::default().status, "healthy");
    }
}

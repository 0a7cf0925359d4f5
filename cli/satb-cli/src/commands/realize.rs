//! cli/satb-cli/src/commands/realize.rs
//! `satb realize`: realize a fixed progression into SATB and validate it.

use std::fmt::Write as _;

use anyhow::Result;
use satb_api::{RealizeRequest, ValidationDto, VoiceChordDto};
use serde::Serialize;

use crate::args::RealizeArgs;
use crate::format::OutputFormat;

#[derive(Debug, Serialize)]
pub struct RealizeReport {
    pub satb_harmonization: Vec<VoiceChordDto>,
    pub validation: ValidationDto,
}

impl RealizeReport {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(&mut out, "Realized {} chord(s):", self.satb_harmonization.len());
        for chord in &self.satb_harmonization {
            let _ = writeln!(
                &mut out,
                "  {:<6} S={:<4} A={:<4} T={:<4} B={:<4}",
                chord.chord, chord.soprano, chord.alto, chord.tenor, chord.bass
            );
        }
        let _ = writeln!(&mut out, "Validation score: {}", self.validation.score);
        for error in &self.validation.errors {
            let _ = writeln!(&mut out, "  error: {error}");
        }
        for warning in &self.validation.warnings {
            let _ = writeln!(&mut out, "  warning: {warning}");
        }
        for compromise in &self.validation.compromises {
            let _ = writeln!(&mut out, "  compromise: {compromise}");
        }
        for suggestion in &self.validation.suggestions {
            let _ = writeln!(&mut out, "  suggestion: {suggestion}");
        }
        out
    }
}

pub fn handle_realize(args: RealizeArgs, format: OutputFormat) -> Result<()> {
    let request =
        RealizeRequest { chord_progression: args.progression, bass_notes: args.bass_notes, key: args.key };
    let response = satb_api::realize_satb(&request)?;
    let report =
        RealizeReport { satb_harmonization: response.satb_harmonization, validation: response.validation };
    format.emit(&report, RealizeReport::render_text)
}

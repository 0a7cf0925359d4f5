//! cli/satb-cli/src/commands/analyze.rs
//! `satb analyze`: rank candidate progressions over a fixed bass line.

use std::fmt::Write as _;

use anyhow::Result;
use satb_api::{AnalyzeRequest, ProgressionDto};
use serde::Serialize;

use crate::args::AnalyzeArgs;
use crate::format::OutputFormat;

#[derive(Debug, Serialize)]
pub struct AnalyzeReport {
    pub key: String,
    pub progressions: Vec<ProgressionDto>,
}

impl AnalyzeReport {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(&mut out, "Key: {}", self.key);
        let _ = writeln!(&mut out, "{} candidate progression(s):", self.progressions.len());
        for (rank, progression) in self.progressions.iter().enumerate() {
            let _ = writeln!(&mut out, "  {}. {}", rank + 1, progression.description);
        }
        out
    }
}

pub fn handle_analyze(args: AnalyzeArgs, format: OutputFormat) -> Result<()> {
    let request = AnalyzeRequest { bass_notes: args.bass_notes, key: args.key };
    let response = satb_api::analyze_bassline(&request)?;
    let report = AnalyzeReport { key: response.key, progressions: response.progressions };
    format.emit(&report, AnalyzeReport::render_text)
}

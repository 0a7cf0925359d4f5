//! cli/satb-cli/src/commands/health.rs
//! `satb health`: a constant readiness signal, no I/O.

use anyhow::Result;
use satb_api::HealthResponse;

use crate::format::OutputFormat;

pub fn handle_health(format: OutputFormat) -> Result<()> {
    let report = satb_api::health();
    format.emit(&report, |report: &HealthResponse| format!("status: {}", report.status))
}

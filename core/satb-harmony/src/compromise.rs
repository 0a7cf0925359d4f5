//! core/satb-harmony/src/compromise.rs
//! Compromise analyzer: human-readable notes extracted from the DP cost surface.

use crate::dp::DpResult;
use crate::voicing::Voicing;

/// Severity of a [`Compromise`], shared with `crate::validator`'s issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Score deduction used by both this analyzer's callers and `crate::validator::score`.
    #[must_use]
    pub const fn penalty(self) -> i64 {
        match self {
            Self::Low => 5,
            Self::Medium => 10,
            Self::High => 15,
        }
    }
}

/// A single compromise note.
#[derive(Debug, Clone, PartialEq)]
pub struct Compromise {
    pub kind: &'static str,
    pub severity: Severity,
    pub location: Option<usize>,
    pub description: String,
}

fn parallel_interval(pair: (i32, i32)) -> Option<&'static str> {
    let (before, after) = pair;
    if before.rem_euclid(12) == 7 && after.rem_euclid(12) == 7 {
        Some("fifth")
    } else if before.rem_euclid(12) == 0 && after.rem_euclid(12) == 0 && before != 0 && after != 0 {
        Some("octave")
    } else {
        None
    }
}

fn forced_parallels(prev: &Voicing, next: &Voicing, location: usize) -> Vec<Compromise> {
    let old = prev.midi();
    let new = next.midi();
    const VOICE_NAMES: [&str; 4] = ["bass", "tenor", "alto", "soprano"];
    let mut out = Vec::new();
    for i in 0..4 {
        for j in (i + 1)..4 {
            if old[i] == new[i] && old[j] == new[j] {
                continue;
            }
            if let Some(kind) = parallel_interval((old[j] - old[i], new[j] - new[i])) {
                out.push(Compromise {
                    kind: "forced_parallels",
                    severity: Severity::High,
                    location: Some(location),
                    description: format!(
                        "parallel {kind} forced between {} and {}",
                        VOICE_NAMES[i], VOICE_NAMES[j]
                    ),
                });
            }
        }
    }
    out
}

/// Derive structured compromise notes from a completed DP result. Never fails — an over-
/// constrained cost surface produces high-severity notes, not an error.
#[must_use]
pub fn analyze(result: &DpResult) -> Vec<Compromise> {
    let n = result.path.len();
    let mut notes = Vec::new();

    #[allow(clippy::cast_precision_loss)]
    let n_f64 = n as f64;
    if result.total_cost > 100.0 * n_f64 {
        notes.push(Compromise {
            kind: "overall_quality",
            severity: Severity::High,
            location: None,
            description: format!("total voicing cost {:.1} is high for a {n}-chord progression", result.total_cost),
        });
    } else if result.total_cost > 50.0 * n_f64 {
        notes.push(Compromise {
            kind: "overall_quality",
            severity: Severity::Medium,
            location: None,
            description: format!("total voicing cost {:.1} is elevated for a {n}-chord progression", result.total_cost),
        });
    }

    for (index, &marginal) in result.marginal_costs.iter().enumerate() {
        if marginal > 100.0 {
            notes.push(Compromise {
                kind: "chord_compromise",
                severity: Severity::High,
                location: Some(index),
                description: format!("chord {index} carries a marginal cost of {marginal:.1}"),
            });
        } else if marginal > 50.0 {
            notes.push(Compromise {
                kind: "chord_compromise",
                severity: Severity::Medium,
                location: Some(index),
                description: format!("chord {index} carries a marginal cost of {marginal:.1}"),
            });
        }
    }

    for (index, pair) in result.path.windows(2).enumerate() {
        notes.extend(forced_parallels(&pair[0], &pair[1], index));
    }

    if result.used_fallback {
        notes.push(Compromise {
            kind: "fallback_used",
            severity: Severity::High,
            location: None,
            description: "one or more chords fell back to the default voicing".to_string(),
        });
    }

    notes
}

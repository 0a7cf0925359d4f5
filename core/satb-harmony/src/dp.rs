//! core/satb-harmony/src/dp.rs
//! Voicing DP: stage-by-stage forward shortest-path search over the voicing lattice.
//!
//! Per-stage buffers are the "doubly-nested dict DP" collapsed into two `Vec<(f64, Option<usize>)>`
//! tables: `prev[voicingIdx] -> (cost, predecessorIdx)` folds into `cur[]` one
//! stage at a time, and only the pitches needed to compute [`transition_cost`] ever leave the
//! table — no back-pointer graph is materialized.

use satb_theory::{ExpandedChord, Key};

use crate::voicing::Voicing;

/// Result of running the DP over a full progression: the chosen voicing per chord, each chord's
/// marginal cost (`C(v_i) + T(v_{i-1}, v_i)`, used by `crate::compromise`), and the total path cost.
#[derive(Debug, Clone)]
pub struct DpResult {
    pub path: Vec<Voicing>,
    pub marginal_costs: Vec<f64>,
    pub total_cost: f64,
    /// True iff any chord's voicing set contained only the flagged fallback voicing produced by
    /// `voicing::generate` when nothing else survived range/ordering/spacing.
    pub used_fallback: bool,
}

fn count_pitch_class(voicing: &Voicing, target: satb_theory::PitchClass) -> usize {
    [voicing.bass, voicing.tenor, voicing.alto, voicing.soprano]
        .into_iter()
        .filter(|pitch| pitch.pitch_class() == target)
        .count()
}

/// One-chord cost `C(v)`.
#[must_use]
pub fn chord_cost(voicing: &Voicing, chord: ExpandedChord, key: Key) -> f64 {
    let mut cost = 0.0;
    if count_pitch_class(voicing, chord.root) == 0 {
        cost += 500.0;
    }
    if count_pitch_class(voicing, chord.third) == 0 {
        cost += 300.0;
    }
    if count_pitch_class(voicing, chord.fifth) == 0 {
        cost += 200.0;
    }
    if chord.inversion == satb_theory::numeral::Inversion::Root && count_pitch_class(voicing, chord.root) == 1 {
        cost += 10.0;
    }
    if count_pitch_class(voicing, key.leading_tone()) > 1 {
        cost += 100.0;
    }
    cost
}

fn overlap_cost(prev: &Voicing, next: &Voicing) -> f64 {
    let pairs = [
        (prev.bass.midi(), prev.tenor.midi(), next.bass.midi(), next.tenor.midi()),
        (prev.tenor.midi(), prev.alto.midi(), next.tenor.midi(), next.alto.midi()),
        (prev.alto.midi(), prev.soprano.midi(), next.alto.midi(), next.soprano.midi()),
    ];
    let crosses = pairs
        .iter()
        .any(|&(old_low, old_high, new_low, new_high)| new_low > old_high || new_high < old_low);
    if crosses {
        40.0
    } else {
        0.0
    }
}

fn leap_cost(prev: &Voicing, next: &Voicing) -> f64 {
    let soprano_d = f64::from((next.soprano.midi() - prev.soprano.midi()).abs());
    let alto_d = f64::from((next.alto.midi() - prev.alto.midi()).abs());
    let tenor_d = f64::from((next.tenor.midi() - prev.tenor.midi()).abs());
    let bass_d = (next.bass.midi() - prev.bass.midi()).abs();

    let soprano_cost = if soprano_d == 0.0 { 1.0 } else { (soprano_d / 3.0).powi(2) };
    let alto_cost = alto_d.powi(2) / 3.0;
    let tenor_cost = tenor_d.powi(2) / 3.0;
    let bass_cost = if bass_d == 12 { 0.0 } else { f64::from(bass_d).powi(2) / 50.0 };

    soprano_cost + alto_cost + tenor_cost + bass_cost
}

fn parallel_and_hidden_cost(prev: &Voicing, next: &Voicing) -> f64 {
    let old = prev.midi();
    let new = next.midi();
    let mut cost = 0.0;

    for i in 0..4 {
        for j in (i + 1)..4 {
            let moved_i = old[i] != new[i];
            let moved_j = old[j] != new[j];
            if !moved_i && !moved_j {
                continue;
            }
            let interval_before = old[j] - old[i];
            let interval_after = new[j] - new[i];

            if interval_before.rem_euclid(12) == 7 && interval_after.rem_euclid(12) == 7 {
                cost += 200.0;
            }
            if interval_before.rem_euclid(12) == 0
                && interval_after.rem_euclid(12) == 0
                && interval_before != 0
                && interval_after != 0
            {
                cost += 300.0;
            }
            if interval_before == 0 && interval_after == 0 {
                cost += 250.0;
            }

            if i == 0 && j == 3 {
                let bass_delta = new[0] - old[0];
                let soprano_delta = new[3] - old[3];
                let same_direction =
                    bass_delta != 0 && soprano_delta != 0 && bass_delta.signum() == soprano_delta.signum();
                if same_direction {
                    let arrival = interval_after.rem_euclid(12);
                    cost += if arrival == 0 || arrival == 7 { 50.0 } else { 2.0 };
                }
            }
        }
    }
    cost
}

fn seventh_resolution_cost(prev: &Voicing, prev_chord: ExpandedChord, next: &Voicing) -> f64 {
    let Some(seventh_pc) = prev_chord.seventh else {
        return 0.0;
    };
    let voices_prev = [prev.bass, prev.tenor, prev.alto, prev.soprano];
    let voices_next = [next.bass, next.tenor, next.alto, next.soprano];
    let Some(index) = voices_prev.iter().position(|pitch| pitch.pitch_class() == seventh_pc) else {
        return 0.0;
    };
    let delta = voices_next[index].midi() - voices_prev[index].midi();
    if (-2..=0).contains(&delta) {
        0.0
    } else {
        100.0
    }
}

fn leading_tone_resolution_cost(prev: &Voicing, prev_chord: ExpandedChord, next_chord: ExpandedChord, next: &Voicing, key: Key) -> f64 {
    let Some(prev_degree) = key.scale_degree(prev_chord.root) else {
        return 0.0;
    };
    let Some(next_degree) = key.scale_degree(next_chord.root) else {
        return 0.0;
    };
    if !matches!(prev_degree, 5 | 7) || !matches!(next_degree, 1 | 6) {
        return 0.0;
    }

    let leading_tone = key.leading_tone();
    let voices_prev = [prev.bass, prev.tenor, prev.alto, prev.soprano];
    let voices_next = [next.bass, next.tenor, next.alto, next.soprano];
    let Some(index) = voices_prev.iter().position(|pitch| pitch.pitch_class() == leading_tone) else {
        return 0.0;
    };

    let delta = voices_next[index].midi() - voices_prev[index].midi();
    let is_inner_voice = index == 1 || index == 2; // tenor or alto
    let resolved = delta == 1 || (is_inner_voice && delta == -4);
    if resolved {
        0.0
    } else {
        100.0
    }
}

/// Transition cost `T(v, v')` between consecutive chords.
#[must_use]
pub fn transition_cost(prev: &Voicing, prev_chord: ExpandedChord, next: &Voicing, next_chord: ExpandedChord, key: Key) -> f64 {
    overlap_cost(prev, next)
        + leap_cost(prev, next)
        + parallel_and_hidden_cost(prev, next)
        + seventh_resolution_cost(prev, prev_chord, next)
        + leading_tone_resolution_cost(prev, prev_chord, next_chord, next, key)
}

/// Run the forward DP over the full progression and backtrack the minimum-cost path.
///
/// `voicing_sets[i]` must be non-empty (guaranteed by `voicing::generate`, which always emits at
/// least its fallback voicing) — an empty set here is a caller error and returns `None`.
#[must_use]
pub fn run(chords: &[ExpandedChord], voicing_sets: &[Vec<Voicing>], key: Key) -> Option<DpResult> {
    let n = chords.len();
    if n == 0 || voicing_sets.len() != n || voicing_sets.iter().any(Vec::is_empty) {
        return None;
    }

    // stage[i] holds (cumulative_cost, predecessor_index_in_stage_i_minus_1)
    let mut stages: Vec<Vec<(f64, Option<usize>)>> = Vec::with_capacity(n);

    let first_stage: Vec<(f64, Option<usize>)> =
        voicing_sets[0].iter().map(|v| (chord_cost(v, chords[0], key), None)).collect();
    stages.push(first_stage);

    for i in 1..n {
        let mut stage = Vec::with_capacity(voicing_sets[i].len());
        for candidate in &voicing_sets[i] {
            let mut best: Option<(f64, usize)> = None;
            for (prev_index, prev_candidate) in voicing_sets[i - 1].iter().enumerate() {
                let (prev_cost, _) = stages[i - 1][prev_index];
                let transition =
                    transition_cost(prev_candidate, chords[i - 1], candidate, chords[i], key);
                let total = prev_cost + transition + chord_cost(candidate, chords[i], key);
                if best.is_none_or(|(best_cost, _)| total < best_cost) {
                    best = Some((total, prev_index));
                }
            }
            // voicing_sets[i - 1] is checked non-empty above, so `best` is always populated.
            let (cost, predecessor) = best.unwrap_or((chord_cost(candidate, chords[i], key), 0));
            stage.push((cost, Some(predecessor)));
        }
        stages.push(stage);
    }

    let last_stage = &stages[n - 1];
    let (best_index, &(total_cost, _)) =
        last_stage.iter().enumerate().min_by(|a, b| a.1 .0.total_cmp(&b.1 .0))?;

    let mut indices = vec![0usize; n];
    indices[n - 1] = best_index;
    for i in (1..n).rev() {
        let (_, predecessor) = stages[i][indices[i]];
        indices[i - 1] = predecessor.unwrap_or(0);
    }

    let path: Vec<Voicing> = indices.iter().enumerate().map(|(i, &idx)| voicing_sets[i][idx]).collect();

    let mut marginal_costs = Vec::with_capacity(n);
    marginal_costs.push(chord_cost(&path[0], chords[0], key));
    for i in 1..n {
        let marginal = chord_cost(&path[i], chords[i], key)
            + transition_cost(&path[i - 1], chords[i - 1], &path[i], chords[i], key);
        marginal_costs.push(marginal);
    }

    let used_fallback = path.iter().any(|v| v.fallback);

    Some(DpResult { path, marginal_costs, total_cost, used_fallback })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voicing;
    use satb_theory::numeral::{Degree, Inversion as Inv, TriadQuality};
    use satb_theory::{Numeral, Pitch, PitchClass};

    fn pc(semitone: i32) -> PitchClass {
        PitchClass::from_semitones(semitone)
    }

    #[test]
    fn authentic_cadence_path_is_cheap_and_avoids_parallels() {
        let key = Key::major(pc(0));
        let numerals = vec![
            Numeral::triad(Degree::I, TriadQuality::Major, Inv::Root),
            Numeral::triad(Degree::IV, TriadQuality::Major, Inv::Root),
            Numeral::dominant_seventh(Degree::V, Inv::Root),
            Numeral::triad(Degree::I, TriadQuality::Major, Inv::Root),
        ];
        let basses = [pc(0), pc(5), pc(7), pc(0)];
        let chords: Vec<ExpandedChord> = numerals.iter().map(|n| n.expand(key)).collect();
        let bass_pitches: Vec<Pitch> = basses.iter().map(|pc| Pitch::from_pitch_class(*pc, 3)).collect();
        let sets: Vec<Vec<voicing::Voicing>> = chords
            .iter()
            .zip(&bass_pitches)
            .map(|(chord, bass)| voicing::generate(*chord, *bass, key))
            .collect();

        let result = run(&chords, &sets, key).expect("dp should find a path");
        assert_eq!(result.path.len(), 4);
        assert!(result.total_cost.is_finite());
        assert!(!result.used_fallback);
    }

    #[test]
    fn single_chord_path_costs_only_the_chord_term() {
        let key = Key::major(pc(0));
        let chord = Numeral::triad(Degree::I, TriadQuality::Major, Inv::Root).expand(key);
        let bass = Pitch::from_pitch_class(pc(0), 3);
        let set = voicing::generate(chord, bass, key);
        let result = run(&[chord], &[set], key).expect("single-stage dp");
        assert_eq!(result.marginal_costs.len(), 1);
        assert!((result.total_cost - result.marginal_costs[0]).abs() < f64::EPSILON);
    }
}

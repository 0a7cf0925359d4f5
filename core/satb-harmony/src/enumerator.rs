//! core/satb-harmony/src/enumerator.rs
//! Progression enumerator: budget-clipped Cartesian product over candidate sets.

use satb_theory::Numeral;

use crate::bassmap::Candidates;

/// One admissible numeral sequence, same length as the input candidate sets.
pub type Progression = Vec<Numeral>;

/// `max(2, floor(8/n))`, the per-position truncation width.
#[must_use]
pub fn max_per_note(n: usize) -> usize {
    if n == 0 {
        return 2;
    }
    (8 / n).max(2)
}

/// `min(100, 4^min(n, 6))`, the total combination budget.
#[must_use]
pub fn max_combinations(n: usize) -> usize {
    let capped = n.min(6) as u32;
    (4usize.pow(capped)).min(100)
}

/// Enumerate progressions in lexicographic order over the (per-position-truncated) candidate
/// sets, stopping at [`max_combinations`] tuples.
#[must_use]
pub fn enumerate(candidate_sets: &[Candidates]) -> Vec<Progression> {
    let n = candidate_sets.len();
    if n == 0 {
        return Vec::new();
    }

    let per_note_cap = max_per_note(n);
    let total_cap = max_combinations(n);
    let truncated: Vec<&[Numeral]> =
        candidate_sets.iter().map(|set| &set[..set.len().min(per_note_cap)]).collect();

    let mut out = Vec::new();
    let mut indices = vec![0usize; n];
    loop {
        if out.len() >= total_cap {
            break;
        }
        let tuple: Progression = indices.iter().zip(&truncated).map(|(&i, set)| set[i]).collect();
        out.push(tuple);

        // Odometer increment, rightmost position fastest — this is the lexicographic order.
        let mut position = n;
        loop {
            if position == 0 {
                return out;
            }
            position -= 1;
            indices[position] += 1;
            if indices[position] < truncated[position].len() {
                break;
            }
            indices[position] = 0;
            if position == 0 {
                return out;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use satb_theory::numeral::{Degree, Inversion, TriadQuality};

    fn set(numerals: &[satb_theory::Numeral]) -> Candidates {
        Candidates::from_slice(numerals)
    }

    #[test]
    fn budgets_match_the_formulas() {
        assert_eq!(max_per_note(4), 2);
        assert_eq!(max_per_note(1), 8);
        assert_eq!(max_combinations(1), 4);
        assert_eq!(max_combinations(6), 100); // 4^6 = 4096, clipped
        assert_eq!(max_combinations(3), 64);
    }

    #[test]
    fn enumeration_is_lexicographic_and_capped() {
        let a = satb_theory::Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root);
        let b = satb_theory::Numeral::triad(Degree::VI, TriadQuality::Minor, Inversion::Root);
        let sets = vec![set(&[a, b]), set(&[a, b])];
        let progressions = enumerate(&sets);
        assert_eq!(progressions.len(), 4);
        assert_eq!(progressions[0], vec![a, a]);
        assert_eq!(progressions[1], vec![a, b]);
        assert_eq!(progressions[2], vec![b, a]);
        assert_eq!(progressions[3], vec![b, b]);
    }

    #[test]
    fn single_candidate_sets_yield_one_progression() {
        let a = satb_theory::Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root);
        let sets = vec![set(&[a]), set(&[a]), set(&[a])];
        assert_eq!(enumerate(&sets), vec![vec![a, a, a]]);
    }
}

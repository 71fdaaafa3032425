//! Optimality-Theoretic tableaux over candidate segmentations.

use crate::language::phonotactics::Constraint;

/// Violation counts, one row per constraint and one column per candidate.
///
/// ```text
///            cand 0   cand 1   ...
/// MnWrd      [0,      1,       ...]
/// SonSeq     [0,      0,       ...]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tableau {
    names: Vec<&'static str>,
    rows: Vec<Vec<u32>>,
}

impl Tableau {
    /// Evaluate `constraints` against each candidate. A candidate's count for
    /// a constraint is the number of its `=`-separated segments that violate
    /// it.
    pub fn build<S: AsRef<str>>(constraints: &[Constraint], candidates: &[S]) -> Self {
        let rows = constraints
            .iter()
            .map(|constraint| {
                candidates
                    .iter()
                    .map(|cand| {
                        cand.as_ref()
                            .split('=')
                            .map(|seg| constraint.violations(seg))
                            .sum()
                    })
                    .collect()
            })
            .collect();

        Self {
            names: constraints.iter().map(|c| c.name).collect(),
            rows,
        }
    }

    /// Raw violation count of `candidate` on constraint `row`.
    pub fn violations(&self, row: usize, candidate: usize) -> u32 {
        self.rows[row][candidate]
    }

    /// Violations minus each row's minimum, so that marks incurred by every
    /// candidate do not count against any of them.
    pub fn relative(&self) -> Vec<Vec<u32>> {
        self.rows
            .iter()
            .map(|row| {
                let min = row.iter().copied().min().unwrap_or(0);
                row.iter().map(|v| v - min).collect()
            })
            .collect()
    }

    /// Total relative violations per candidate.
    pub fn totals(&self) -> Vec<u32> {
        let relative = self.relative();
        let width = self.rows.first().map(Vec::len).unwrap_or(0);
        (0..width)
            .map(|j| relative.iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Indices of candidates with no relative violations, in order.
    pub fn survivors(&self) -> Vec<usize> {
        self.totals()
            .into_iter()
            .enumerate()
            .filter(|&(_, total)| total == 0)
            .map(|(j, _)| j)
            .collect()
    }

    pub fn constraint_names(&self) -> &[&'static str] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::phonotactics::CONSTRAINTS;

    #[test]
    fn test_build_counts_segments() {
        let t = Tableau::build(&CONSTRAINTS, &["runo=ja", "runoja"]);
        // MnWrd: "ja" has one vowel
        assert_eq!(t.violations(0, 0), 1);
        assert_eq!(t.violations(0, 1), 0);
        assert_eq!(t.constraint_names(), &["MnWrd", "SonSeq", "Word#", "Harmonic"]);
    }

    #[test]
    fn test_relative_neutralizes_shared_violations() {
        // both candidates end in a non-coronal consonant
        let t = Tableau::build(&CONSTRAINTS, &["kesäiltax", "kesä=iltax"]);
        assert_eq!(t.violations(2, 0), 1);
        assert_eq!(t.violations(2, 1), 1);
        assert_eq!(t.relative()[2], vec![0, 0]);
        // only the unsplit form breaks harmony
        assert_eq!(t.totals(), vec![1, 0]);
        assert_eq!(t.survivors(), vec![1]);
    }

    #[test]
    fn test_all_survive_when_clean() {
        let t = Tableau::build(&CONSTRAINTS, &["auto=aseman", "autoaseman"]);
        assert_eq!(t.survivors(), vec![0, 1]);
    }

    #[test]
    fn test_empty_candidates() {
        let t = Tableau::build::<&str>(&CONSTRAINTS, &[]);
        assert!(t.survivors().is_empty());
        assert!(t.totals().is_empty());
    }
}

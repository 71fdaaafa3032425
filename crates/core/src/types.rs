use serde::{Deserialize, Serialize};

use crate::language::Derivation;

/// One syllabification of a word.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    /// Syllabified word, `.` between syllables
    pub word: String,
    /// Space-joined rule trace (e.g. "T1 T4"), when tracking is on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
}

impl Candidate {
    pub fn from_derivation(d: Derivation, track_rules: bool) -> Self {
        Self {
            rules: track_rules.then(|| d.trace.to_string()),
            word: d.word,
        }
    }
}

/// Result of checking one word for compound structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segmentation {
    pub word: String,
    /// Word with `=` at inferred morpheme boundaries
    pub split: String,
    pub is_complex: bool,
}

/// Matcher and constraint report for a single word.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inspection {
    pub word: String,
    /// Matcher name → matched sequences with their character offsets
    pub matches: Vec<(String, Vec<(usize, String)>)>,
    /// Constraint name → satisfied
    pub constraints: Vec<(String, bool)>,
    pub foreign: bool,
}

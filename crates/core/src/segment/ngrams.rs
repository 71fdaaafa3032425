//! N-gram counts and Stupid Backoff scoring.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FinnSyllError, Result};
use crate::resources::read_resource;

/// Discount applied per backoff step.
const BACKOFF: f64 = 0.4;

/// Unigram, bigram and trigram counts keyed by space-joined tokens.
///
/// Serialized as `{"ngrams": {"w1 w2 w3": n, ...}, "vocab_size": n,
/// "total": n}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NgramTable {
    pub ngrams: HashMap<String, u64>,
    pub vocab_size: u64,
    pub total: u64,
}

impl NgramTable {
    /// Parse a JSON table. `path` is only used in error messages.
    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        let table: NgramTable =
            serde_json::from_str(text).map_err(|source| FinnSyllError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        if table.ngrams.is_empty() {
            return Err(FinnSyllError::EmptyResource {
                path: path.to_path_buf(),
            });
        }
        Ok(table)
    }

    /// Load a JSON table from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_resource(path)?;
        let table = Self::from_json(&text, path)?;
        log::info!(
            "Loaded {} n-grams from {} (vocab {}, total {})",
            table.ngrams.len(),
            path.display(),
            table.vocab_size,
            table.total
        );
        Ok(table)
    }

    /// Count for a space-joined n-gram. Zero counts read as absent.
    pub fn count(&self, key: &str) -> Option<u64> {
        self.ngrams.get(key).copied().filter(|&c| c > 0)
    }

    /// Stupid Backoff log score of a token sequence, rounded to four
    /// decimals.
    ///
    /// Each token is scored from its trigram when both the trigram and its
    /// bigram history are known, else from its bigram (discounted by 0.4)
    /// when the bigram and its unigram history are known, else from its
    /// add-one unigram (discounted by 0.4²). The first token is always
    /// scored as a unigram.
    pub fn score(&self, tokens: &[&str]) -> f64 {
        let denominator = (self.total + self.vocab_size + 1) as f64;
        let mut score = 0.0;

        for (i, &c) in tokens.iter().enumerate() {
            if i > 1 {
                let (a, b) = (tokens[i - 2], tokens[i - 1]);
                let abc = self.count(&format!("{} {} {}", a, b, c));
                let ab = self.count(&format!("{} {}", a, b));
                if let (Some(abc), Some(ab)) = (abc, ab) {
                    score += (abc as f64).ln() - (ab as f64).ln();
                    continue;
                }
            }

            if i > 0 {
                let b = tokens[i - 1];
                let bc = self.count(&format!("{} {}", b, c));
                let b_count = self.count(b);
                if let (Some(bc), Some(b_count)) = (bc, b_count) {
                    score += (bc as f64 * BACKOFF).ln() - (b_count as f64).ln();
                    continue;
                }
            }

            let c_count = self.count(c).unwrap_or(1);
            score += (c_count as f64 * BACKOFF * BACKOFF).ln() - denominator.ln();
        }

        round4(score)
    }
}

/// Round to 4 decimal places.
fn round4(v: f64) -> f64 {
    (v * 10000.0).round() / 10000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> NgramTable {
        let ngrams = [
            ("#", 100u64),
            ("kuu", 10),
            ("# kuu", 8),
            ("# kuu #", 4),
            ("kuu #", 5),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        NgramTable {
            ngrams,
            vocab_size: 9,
            total: 90,
        }
    }

    #[test]
    fn test_score_unigram_only() {
        let t = table();
        // ln(100 * 0.16) - ln(100)
        let expected = round4((100.0f64 * 0.16).ln() - 100.0f64.ln());
        assert_eq!(t.score(&["#"]), expected);
    }

    #[test]
    fn test_score_bigram_and_trigram() {
        let t = table();
        let unigram = (100.0f64 * 0.16).ln() - 100.0f64.ln();
        let bigram = (8.0f64 * 0.4).ln() - 100.0f64.ln();
        let trigram = 4.0f64.ln() - 8.0f64.ln();
        assert_eq!(
            t.score(&["#", "kuu", "#"]),
            round4(unigram + bigram + trigram)
        );
    }

    #[test]
    fn test_score_unknown_tokens_use_add_one() {
        let t = table();
        let unknown = (0.16f64).ln() - 100.0f64.ln();
        assert_eq!(t.score(&["zzz"]), round4(unknown));
        assert_eq!(t.score(&[]), 0.0);
    }

    #[test]
    fn test_trigram_without_history_backs_off() {
        let mut t = table();
        t.ngrams.insert("a b c".to_string(), 3);
        t.ngrams.insert("b".to_string(), 2);
        t.ngrams.insert("b c".to_string(), 1);
        // "a b" is missing, so "a b c" is not used
        let s = t.score(&["a", "b", "c"]);
        let a = (0.16f64).ln() - 100.0f64.ln();
        let b = (2.0f64 * 0.16).ln() - 100.0f64.ln();
        let c = (0.4f64).ln() - 2.0f64.ln();
        assert_eq!(s, round4(a + b + c));
    }

    #[test]
    fn test_from_json() {
        let json = r##"{"ngrams": {"#": 3, "# kuu": 1}, "vocab_size": 2, "total": 4}"##;
        let t = NgramTable::from_json(json, Path::new("n.json")).unwrap();
        assert_eq!(t.count("#"), Some(3));
        assert_eq!(t.count("kuu"), None);
        assert_eq!(t.total, 4);
    }

    #[test]
    fn test_from_json_errors() {
        let err = NgramTable::from_json("{", Path::new("n.json")).unwrap_err();
        assert!(matches!(err, FinnSyllError::Json { .. }));
        let err = NgramTable::from_json(
            r#"{"ngrams": {}, "vocab_size": 0, "total": 0}"#,
            Path::new("n.json"),
        )
        .unwrap_err();
        assert!(matches!(err, FinnSyllError::EmptyResource { .. }));
    }

    #[test]
    fn test_load_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finnsyll-ngrams.json");
        std::fs::write(&path, serde_json::to_string(&table()).unwrap()).unwrap();
        assert_eq!(NgramTable::load(&path).unwrap(), table());
    }
}

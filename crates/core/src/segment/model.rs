//! Morpheme segmentation models.
//!
//! The segmenter only needs "the most probable flat morpheme sequence of a
//! lowercase token". [`MorphModel`] is that seam; [`MorphLexicon`] is the
//! bundled backend, a unigram morph lexicon decoded with Viterbi search.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{FinnSyllError, Result};
use crate::resources::read_resource;

/// Longest morph the Viterbi search will consider, in characters.
pub const MAX_MORPH_LEN: usize = 30;

/// Morpheme segmentation backend.
pub trait MorphModel: Send + Sync {
    /// Backend name for logging/display.
    fn name(&self) -> &str;

    /// Split a lowercase token (umlauts in the `A`/`O` placeholder alphabet)
    /// into morphs that concatenate back to the token.
    fn best_segmentation(&self, token: &str) -> Vec<String>;
}

/// A morph lexicon with corpus counts.
///
/// Text format, one entry per line: `<count> <morph>`. Blank lines and lines
/// starting with `#` are skipped.
#[derive(Debug, Clone)]
pub struct MorphLexicon {
    counts: HashMap<String, u64>,
    log_tokens: f64,
}

impl MorphLexicon {
    /// Build a lexicon from `(morph, count)` pairs. Zero counts are dropped.
    pub fn from_counts<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for (morph, count) in entries {
            if count > 0 {
                *counts.entry(morph.into()).or_default() += count;
            }
        }
        let tokens: u64 = counts.values().sum();
        Self {
            counts,
            log_tokens: (tokens.max(1) as f64).ln(),
        }
    }

    /// Parse lexicon text. `path` is only used in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let mut entries = Vec::new();

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parse_err = |message: &str| FinnSyllError::Parse {
                path: path.to_path_buf(),
                line: i + 1,
                message: message.to_string(),
            };

            let (count, morph) = line
                .split_once(char::is_whitespace)
                .ok_or_else(|| parse_err("expected '<count> <morph>'"))?;
            let count: u64 = count
                .parse()
                .map_err(|_| parse_err("count is not a non-negative integer"))?;
            let morph = morph.trim();
            if morph.is_empty() || morph.contains(char::is_whitespace) {
                return Err(parse_err("morph must be a single non-empty string"));
            }

            entries.push((morph.to_string(), count));
        }

        let lexicon = Self::from_counts(entries);
        if lexicon.is_empty() {
            return Err(FinnSyllError::EmptyResource {
                path: path.to_path_buf(),
            });
        }
        Ok(lexicon)
    }

    /// Load a lexicon file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_resource(path)?;
        let lexicon = Self::parse(&text, path)?;
        log::info!(
            "Loaded {} morphs from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, morph: &str) -> Option<u64> {
        self.counts.get(morph).copied()
    }
}

impl MorphModel for MorphLexicon {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn best_segmentation(&self, token: &str) -> Vec<String> {
        let chars: Vec<char> = token.chars().collect();
        let n = chars.len();
        if n == 0 {
            return vec![];
        }

        // unknown single characters are always possible, at a high cost
        let bad_likelihood = n as f64 * self.log_tokens + 1.0;

        // grid[t] = (best cost of token[..t], start of the last morph)
        let mut grid: Vec<(f64, usize)> = Vec::with_capacity(n + 1);
        grid.push((0.0, 0));

        for t in 1..=n {
            let mut best: Option<(f64, usize)> = None;
            for pt in t.saturating_sub(MAX_MORPH_LEN)..t {
                let morph: String = chars[pt..t].iter().collect();
                let step = match self.counts.get(&morph) {
                    Some(&count) => self.log_tokens - (count as f64).ln(),
                    None if t - pt == 1 => bad_likelihood,
                    None => continue,
                };
                let cost = grid[pt].0 + step;
                // strict comparison: the earliest start (longest morph) wins ties
                if best.map(|(c, _)| cost < c).unwrap_or(true) {
                    best = Some((cost, pt));
                }
            }
            // a single character always yields a path
            grid.push(best.unwrap_or((f64::INFINITY, t - 1)));
        }

        let mut morphs = Vec::new();
        let mut t = n;
        while t > 0 {
            let pt = grid[t].1;
            morphs.push(chars[pt..t].iter().collect());
            t = pt;
        }
        morphs.reverse();
        morphs
    }
}

//! Compound segmentation.
//!
//! For each component of a token (split on hyphens, spaces and `=`):
//!
//! 1. ask the morph model for the component's morphs,
//! 2. enumerate every way of joining adjacent morphs with a surfacing
//!    boundary (`#`, shown as `=`) or a silent juncture (`X`),
//! 3. drop candidates the phonotactic tableau marks as worse than a rival,
//! 4. score the rest with the n-gram model and keep the best, preferring
//!    fewer boundaries on ties.
//!
//! The model and scorer see a lowercase working copy with `ä`/`ö` written
//! as `A`/`O`; boundaries are copied back onto the original spelling at the
//! end.

use std::path::Path;

use super::model::{MorphLexicon, MorphModel};
use super::ngrams::NgramTable;
use super::tableau::Tableau;
use crate::error::Result;
use crate::language::phonotactics::CONSTRAINTS;
use crate::resources::{morphs_path, ngrams_path};
use crate::text::split_on_delimiters;

/// Components with more morphs than this are left unsegmented.
pub const MAX_MORPHEMES: usize = 10;

const BOUNDARY: &str = "#";
const JUNCTURE: &str = "X";

/// Lowercase `s` one character at a time and write `ä`/`ö` as `A`/`O`.
/// The result has as many characters as `s`.
pub fn to_working(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_lowercase().next().unwrap_or(c) {
            'ä' => 'A',
            'ö' => 'O',
            other => other,
        })
        .collect()
}

/// Undo the placeholder alphabet of [`to_working`] (case is not restored).
pub fn restore_umlauts(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'A' => 'ä',
            'O' => 'ö',
            other => other,
        })
        .collect()
}

/// One way of joining a component's morphs.
#[derive(Debug, Clone, PartialEq)]
struct Candidate {
    /// Language-model tokens: `#`, morphs interleaved with `#`/`X`, `#`.
    tokens: Vec<String>,
    /// Working-copy surface form with `=` at surfacing boundaries.
    surface: String,
}

impl Candidate {
    fn boundaries(&self) -> usize {
        self.surface.matches('=').count()
    }
}

/// Every boundary pattern over `morphs`, all-`#` first and all-`X` last.
fn enumerate_candidates(morphs: &[String]) -> Vec<Candidate> {
    let gaps = morphs.len().saturating_sub(1);

    (0..1usize << gaps)
        .map(|n| {
            let mut tokens = vec![BOUNDARY.to_string()];
            let mut surface = String::new();
            for (i, morph) in morphs.iter().enumerate() {
                tokens.push(morph.clone());
                surface.push_str(morph);
                if i < gaps {
                    // the first gap varies slowest
                    let silent = (n >> (gaps - 1 - i)) & 1 == 1;
                    tokens.push(if silent { JUNCTURE } else { BOUNDARY }.to_string());
                    if !silent {
                        surface.push('=');
                    }
                }
            }
            tokens.push(BOUNDARY.to_string());
            Candidate { tokens, surface }
        })
        .collect()
}

/// Copy the `=` marks of `segmented` (a working copy) onto `original`.
fn reinsert_boundaries(original: &str, segmented: &str) -> String {
    let mut source = original.chars();
    let mut out = String::with_capacity(original.len() + 4);
    for ch in segmented.chars() {
        if ch == '=' {
            out.push('=');
        } else if let Some(orig) = source.next() {
            out.push(orig);
        }
    }
    out.extend(source);
    out
}

/// Splits compounds with a morph model, phonotactic constraints and an
/// n-gram language model.
pub struct Segmenter {
    model: Box<dyn MorphModel>,
    ngrams: NgramTable,
}

impl Segmenter {
    pub fn new(model: Box<dyn MorphModel>, ngrams: NgramTable) -> Self {
        Self { model, ngrams }
    }

    /// Load the bundled lexicon model and n-gram table from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let model = MorphLexicon::load(&morphs_path(dir))?;
        let ngrams = NgramTable::load(&ngrams_path(dir))?;
        Ok(Self::new(Box::new(model), ngrams))
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Insert `=` at the morpheme boundaries of `word`, keeping its spelling
    /// and any hyphens, spaces or `=` already present.
    pub fn segment(&self, word: &str) -> String {
        split_on_delimiters(word)
            .into_iter()
            .map(|comp| {
                if comp.chars().count() > 1 {
                    self.segment_component(comp)
                } else {
                    comp.to_string()
                }
            })
            .collect()
    }

    fn segment_component(&self, comp: &str) -> String {
        let working = to_working(comp);
        let morphs = self.model.best_segmentation(&working);

        if morphs.len() > MAX_MORPHEMES {
            log::warn!(
                "{:?} has {} morphs (max {}), leaving it unsegmented",
                comp,
                morphs.len(),
                MAX_MORPHEMES
            );
            return comp.to_string();
        }
        if morphs.len() < 2 {
            return comp.to_string();
        }

        let candidates = enumerate_candidates(&morphs);
        let surfaces: Vec<String> = candidates
            .iter()
            .map(|c| restore_umlauts(&c.surface))
            .collect();
        let tableau = Tableau::build(&CONSTRAINTS, &surfaces);
        let survivors = tableau.survivors();

        log::debug!(
            "{}: {} candidates, {} survive the tableau",
            working,
            candidates.len(),
            survivors.len()
        );

        // every candidate is worse than some rival: back off to the simplex
        if survivors.is_empty() {
            return comp.to_string();
        }

        let mut best: Option<(f64, &Candidate)> = None;
        for &j in &survivors {
            let cand = &candidates[j];
            let tokens: Vec<&str> = cand.tokens.iter().map(String::as_str).collect();
            let score = self.ngrams.score(&tokens);
            let better = match best {
                None => true,
                Some((s, b)) => score > s || (score == s && cand.boundaries() < b.boundaries()),
            };
            if better {
                best = Some((score, cand));
            }
        }

        match best {
            Some((score, cand)) => {
                log::debug!("{} -> {} ({})", working, cand.surface, score);
                reinsert_boundaries(comp, &cand.surface)
            }
            None => comp.to_string(),
        }
    }
}

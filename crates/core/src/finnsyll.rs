//! The `FinnSyll` facade: configuration, compound splitting and
//! syllabification behind one handle.

use std::fmt;
use std::path::PathBuf;

use crate::error::{FinnSyllError, Result};
use crate::language::phonotactics::{is_foreign, CONSTRAINTS};
use crate::language::sequences::{
    i_final_diphthong_vvv_sequences, long_vowel_sequences, precedence_sequences,
    tail_diphthongs, u_y_final_diphthongs, vv_sequences, vvv_sequences, SeqMatch,
};
use crate::language::syllabify::syllabify;
use crate::resources::resolve_data_dir;
use crate::segment::Segmenter;
use crate::text::{has_delimiter, word_runs};
use crate::types::{Candidate, Inspection, Segmentation};

/// Facade configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FinnSyllConfig {
    /// Split unmarked compounds before syllabifying
    pub split_compounds: bool,
    /// Return every ranked variant instead of only the best
    pub variation: bool,
    /// Attach rule traces to candidates
    pub track_rules: bool,
    /// Mark primary and secondary stress
    pub stress: bool,
    /// Resource directory (see [`crate::resources::data_dir`])
    pub data_dir: Option<PathBuf>,
}

impl Default for FinnSyllConfig {
    fn default() -> Self {
        Self {
            split_compounds: true,
            variation: true,
            track_rules: false,
            stress: false,
            data_dir: None,
        }
    }
}

/// Finnish syllabifier with optional compound segmentation.
pub struct FinnSyll {
    config: FinnSyllConfig,
    segmenter: Option<Segmenter>,
}

impl fmt::Debug for FinnSyll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinnSyll")
            .field("config", &self.config)
            .field(
                "segmenter",
                &self.segmenter.as_ref().map(|s| s.model_name()),
            )
            .finish()
    }
}

impl FinnSyll {
    /// Build a facade, loading the segmentation resources from the
    /// configured directory. Missing or corrupt resources are an error here,
    /// never later.
    pub fn new(config: FinnSyllConfig) -> Result<Self> {
        let dir = resolve_data_dir(config.data_dir.as_deref());
        log::info!("Loading segmentation resources from {}", dir.display());
        let segmenter = Segmenter::load(&dir)?;
        Ok(Self::with_segmenter(config, segmenter))
    }

    /// Build a facade around an already constructed segmenter.
    pub fn with_segmenter(config: FinnSyllConfig, segmenter: Segmenter) -> Self {
        Self {
            config,
            segmenter: Some(segmenter),
        }
    }

    /// Build a facade with no segmenter; compound splitting is turned off.
    pub fn without_segmenter(mut config: FinnSyllConfig) -> Self {
        config.split_compounds = false;
        Self {
            config,
            segmenter: None,
        }
    }

    pub fn config(&self) -> &FinnSyllConfig {
        &self.config
    }

    pub fn has_segmenter(&self) -> bool {
        self.segmenter.is_some()
    }

    fn normalize(&self, word: &str) -> String {
        match (&self.segmenter, self.config.split_compounds) {
            (Some(segmenter), true) => segmenter.segment(word),
            _ => word.to_string(),
        }
    }

    /// Syllabify `word`. Candidates come most preferred first; with
    /// variation off only the first is returned.
    pub fn syllabify(&self, word: &str) -> Vec<Candidate> {
        let normalized = self.normalize(word);
        let mut candidates: Vec<Candidate> = syllabify(&normalized, self.config.stress)
            .into_iter()
            .map(|d| Candidate::from_derivation(d, self.config.track_rules))
            .collect();

        if !self.config.variation {
            candidates.truncate(1);
        }
        candidates
    }

    /// The most preferred syllabification of `word`.
    pub fn syllabify_best(&self, word: &str) -> String {
        let normalized = self.normalize(word);
        syllabify(&normalized, self.config.stress)
            .into_iter()
            .next()
            .map(|d| d.word)
            .unwrap_or_default()
    }

    /// Syllabify running text, keeping punctuation and whitespace as is and
    /// replacing each word with its most preferred syllabification.
    pub fn syllabify_sent(&self, text: &str) -> String {
        word_runs(text)
            .into_iter()
            .map(|(is_word, run)| {
                if is_word {
                    self.syllabify_best(run)
                } else {
                    run.to_string()
                }
            })
            .collect()
    }

    fn segmenter(&self) -> Result<&Segmenter> {
        self.segmenter
            .as_ref()
            .ok_or(FinnSyllError::SegmenterUnavailable)
    }

    /// Insert `=` at the morpheme boundaries of `word`.
    pub fn split(&self, word: &str) -> Result<String> {
        Ok(self.segmenter()?.segment(word))
    }

    /// True if `word` has internal word boundaries, overt or inferred.
    pub fn is_complex(&self, word: &str) -> Result<bool> {
        Ok(has_delimiter(&self.split(word)?))
    }

    /// Split and classify `word` in one go.
    pub fn segmentation(&self, word: &str) -> Result<Segmentation> {
        let split = self.split(word)?;
        Ok(Segmentation {
            word: word.to_string(),
            is_complex: has_delimiter(&split),
            split,
        })
    }
}

fn hits(matches: Vec<SeqMatch>) -> Vec<(usize, String)> {
    matches.into_iter().map(|m| (m.start, m.text)).collect()
}

/// Report every matcher hit and constraint result for `word`. Needs no
/// resources.
pub fn inspect(word: &str) -> Inspection {
    let matches = vec![
        ("vv".to_string(), hits(vv_sequences(word))),
        ("vvv".to_string(), hits(vvv_sequences(word))),
        ("long_vowel_vvv".to_string(), hits(long_vowel_sequences(word))),
        (
            "i_final_diphthong_vvv".to_string(),
            hits(i_final_diphthong_vvv_sequences(word)),
        ),
        (
            "tail_diphthong".to_string(),
            hits(tail_diphthongs(word).into_iter().collect()),
        ),
        (
            "u_y_final_diphthong".to_string(),
            hits(u_y_final_diphthongs(word).into_iter().collect()),
        ),
        (
            "precedence".to_string(),
            hits(precedence_sequences(word).into_iter().collect()),
        ),
    ];

    let constraints = CONSTRAINTS
        .iter()
        .map(|c| (c.to_string(), c.test(word)))
        .collect();

    Inspection {
        word: word.to_string(),
        matches,
        constraints,
        foreign: is_foreign(word),
    }
}

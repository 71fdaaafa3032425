//! Small in-memory segmentation resources for tests.

use std::collections::HashMap;

use super::model::MorphLexicon;
use super::ngrams::NgramTable;
use super::segmenter::Segmenter;

pub(crate) const MORPHS: &[(&str, u64)] = &[
    ("kuu", 30),
    ("kautta", 20),
    ("linja", 15),
    ("auto", 50),
    ("aseman", 20),
    ("loppu", 25),
    ("ottelu", 20),
    ("ssa", 40),
    ("runo", 20),
    ("ja", 60),
    ("muutos", 15),
    ("tOitA", 10),
    ("hovi", 10),
    ("oikeus", 15),
];

pub(crate) const NGRAMS: &[(&str, u64)] = &[
    ("#", 200),
    ("X", 50),
    // kuu=kautta
    ("kuu", 30),
    ("kautta", 20),
    ("# kuu", 20),
    ("# kuu #", 10),
    ("kuu #", 15),
    ("kuu # kautta", 5),
    ("# kautta", 10),
    ("# kautta #", 8),
    ("kautta #", 10),
    // loppu=ottelussa
    ("loppu", 20),
    ("# loppu", 15),
    ("# loppu #", 10),
    ("loppu #", 12),
    ("loppu # ottelu", 6),
    ("ottelu", 20),
    ("# ottelu", 10),
    ("# ottelu X", 8),
    ("ottelu X", 10),
    ("ottelu X ssa", 9),
    ("ssa", 30),
    ("X ssa", 12),
    ("X ssa #", 10),
    ("ssa #", 20),
    // auto=aseman
    ("auto", 50),
    ("# auto", 30),
    ("# auto #", 20),
    ("auto #", 25),
    ("auto # aseman", 10),
    ("aseman", 20),
    ("# aseman", 15),
    ("# aseman #", 10),
    // hovi=oikeus
    ("hovi", 10),
    ("# hovi", 8),
    ("# hovi #", 5),
    ("hovi #", 6),
    ("hovi # oikeus", 3),
    ("oikeus", 10),
    ("# oikeus", 5),
    ("# oikeus #", 4),
];

pub(crate) fn fixture_lexicon() -> MorphLexicon {
    MorphLexicon::from_counts(MORPHS.iter().copied())
}

pub(crate) fn fixture_ngrams() -> NgramTable {
    let ngrams: HashMap<String, u64> = NGRAMS
        .iter()
        .map(|&(k, v)| (k.to_string(), v))
        .collect();
    NgramTable {
        ngrams,
        vocab_size: 100,
        total: 1000,
    }
}

pub(crate) fn fixture_segmenter() -> Segmenter {
    Segmenter::new(Box::new(fixture_lexicon()), fixture_ngrams())
}

/// Write the fixture resources into `dir` in their on-disk formats.
pub(crate) fn write_fixture_resources(dir: &std::path::Path) {
    let morphs: String = MORPHS
        .iter()
        .map(|(m, c)| format!("{} {}\n", c, m))
        .collect();
    std::fs::write(crate::resources::morphs_path(dir), morphs).unwrap();
    let json = serde_json::to_string(&fixture_ngrams()).unwrap();
    std::fs::write(crate::resources::ngrams_path(dir), json).unwrap();
}

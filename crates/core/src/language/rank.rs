//! Markedness ranking of syllabification variants.
//!
//! Cost = unstressed superheavy syllables (WSP) + stressed light syllables
//! (PK-PROM) + syllable count (NUC). Lower is better; ties keep generation
//! order.

use regex::Regex;

use super::phonotactics::is_vowel;
use super::rules::Derivation;
use crate::text::extract_words;

lazy_static::lazy_static! {
    /// CVVC: a long nucleus closed by a coda.
    static ref SUPERHEAVY: Regex = Regex::new(r"(?i)[ieaouäöy]{2}[^$ieaouäöy]").unwrap();
}

/// Number of unstressed superheavy syllables.
///
/// Even syllables are unstressed; an odd final syllable is extrametrical and
/// counted as unstressed too.
pub fn wsp(word: &str) -> usize {
    let mut unstressed: Vec<&str> = Vec::new();

    for w in extract_words(word) {
        unstressed.extend(w.split('.').skip(1).step_by(2));
        if w.matches('.').count() % 2 == 0 {
            if let Some(last) = w.rsplit('.').next() {
                unstressed.push(last);
            }
        }
    }

    unstressed
        .into_iter()
        .filter(|syll| SUPERHEAVY.is_match(syll))
        .count()
}

/// Number of stressed light syllables (open, non-initial, odd syllables).
pub fn pk_prom(word: &str) -> usize {
    let mut violations = 0;

    for w in extract_words(word) {
        let sylls: Vec<&str> = w.split('.').collect();
        let end = sylls.len().saturating_sub(1);
        for syll in sylls.iter().take(end).skip(2).step_by(2) {
            if syll.chars().last().map(is_vowel).unwrap_or(false) {
                violations += 1;
            }
        }
    }

    violations
}

/// Number of syllable nuclei.
pub fn nuc(word: &str) -> usize {
    word.matches('.').count() + 1
}

/// Total markedness cost of a syllabified word.
pub fn cost(word: &str) -> usize {
    wsp(word) + pk_prom(word) + nuc(word)
}

/// Order `candidates` from most to least preferred. Stable.
pub fn rank(candidates: &mut [Derivation]) {
    if candidates.len() > 1 {
        candidates.sort_by_cached_key(|d| cost(&d.word));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wsp() {
        assert_eq!(wsp("oi.keus"), 1);
        assert_eq!(wsp("oi.ke.us"), 0);
        // odd final syllable counts as unstressed
        assert_eq!(wsp("kuu.kaut.ta"), 1);
        assert_eq!(wsp("lei.maus"), 1);
    }

    #[test]
    fn test_pk_prom() {
        assert_eq!(pk_prom("ho.vi.oi.ke.us"), 1);
        assert_eq!(pk_prom("kuu.ka.ut.ta"), 0);
        assert_eq!(pk_prom("ru.no.ja"), 0);
        assert_eq!(pk_prom("ka.la.ma.ja"), 1);
    }

    #[test]
    fn test_nuc() {
        assert_eq!(nuc("ru.no.ja"), 3);
        assert_eq!(nuc(""), 1);
    }

    #[test]
    fn test_cost_ties_keep_generation_order() {
        let mut candidates = vec![
            Derivation::new("oi.ke.us"),
            Derivation::new("oi.keus"),
        ];
        rank(&mut candidates);
        assert_eq!(candidates[0].word, "oi.ke.us");
        assert_eq!(cost("oi.ke.us"), cost("oi.keus"));
    }

    #[test]
    fn test_rank_orders_by_cost() {
        let mut candidates = vec![
            Derivation::new("a.b.c.d.e"),
            Derivation::new("ka.la"),
        ];
        rank(&mut candidates);
        assert_eq!(candidates[0].word, "ka.la");
    }

    #[test]
    fn test_rank_idempotent() {
        let mut candidates = vec![
            Derivation::new("lau.kaus.ta"),
            Derivation::new("lau.ka.us.ta"),
            Derivation::new("la.u.ka.us.ta"),
        ];
        rank(&mut candidates);
        let once = candidates.clone();
        rank(&mut candidates);
        assert_eq!(candidates, once);
    }
}

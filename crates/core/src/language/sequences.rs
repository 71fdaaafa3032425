//! Sequence matchers over syllabified words.
//!
//! Each matcher scans a word over the alphabet {vowels, consonants, `.`} and
//! returns its hits left to right. Offsets are **character** indices, not
//! byte offsets, so callers can insert or delete boundaries without caring
//! about the two-byte umlaut vowels.

use regex::Regex;

use super::phonotactics::{is_long, is_vowel};

lazy_static::lazy_static! {
    /// /ie/, /uo/, /yö/ split by a boundary in the first syllable.
    static ref TAIL_DIPHTHONG: Regex = Regex::new(
        r"(?i)^[^ieaouäöy]*(i\.e|u\.o|y\.ö)(?:\.|[^ieaouäöy]+|$)"
    ).unwrap();

    /// A /u,y/-final diphthong after a consonant, closed by a consonant or
    /// the word end.
    static ref U_Y_FINAL_DIPHTHONG: Regex = Regex::new(
        r"(?i)(?:[^ieaouäöy.]+\.*)(au|eu|ou|iu|iy|ey|äy|öy)(?:\.*[^ieaouäöy.]+|$)"
    ).unwrap();

    /// A primary-stressed VVV containing a /u,y/-final diphthong.
    static ref PRECEDENCE: Regex = Regex::new(concat!(
        r"(?i)^[^ieaouäöy]*",
        r"([ieaoäö](?:au|eu|ou|iu|iy|ey|äy|öy)|(?:au|eu|ou|iu|iy|ey|äy|öy)[ieaoäö])",
        r"[^ieaouäöy]"
    ))
    .unwrap();

    /// Stretches of a word in which a /u,y/-final diphthong follows a
    /// syllable, i.e. sits outside primary stress.
    static ref UNSTRESSED_DIPHTHONG_SCOPE: Regex = Regex::new(
        r"(?i)([ieaouäöy]+[^ieaouäöy]+\.*[ieaoäö](?:u|y)(?:\.*[^ieaouäöy]+|$))"
    ).unwrap();
}

/// A matcher hit: the character offset of the captured sequence and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqMatch {
    pub start: usize,
    pub text: String,
}

impl SeqMatch {
    fn from_capture(word: &str, m: regex::Match<'_>) -> Self {
        Self {
            start: char_offset(word, m.start()),
            text: m.as_str().to_string(),
        }
    }
}

/// Convert a byte offset into `s` to a character offset.
pub fn char_offset(s: &str, byte: usize) -> usize {
    s[..byte].chars().count()
}

/// Maximal runs of vowels, as `(start, run)` pairs.
fn vowel_runs(word: &str) -> Vec<(usize, Vec<char>)> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, Vec<char>)> = None;

    for (i, ch) in word.chars().enumerate() {
        if is_vowel(ch) {
            current.get_or_insert_with(|| (i, Vec::new())).1.push(ch);
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }
    if let Some(run) = current {
        runs.push(run);
    }
    runs
}

/// Every VV sequence, including overlapping ones: `"aei"` yields `ae` at 0
/// and `ei` at 1.
pub fn vv_sequences(word: &str) -> Vec<SeqMatch> {
    let chars: Vec<char> = word.chars().collect();
    chars
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| is_vowel(pair[0]) && is_vowel(pair[1]))
        .map(|(i, pair)| SeqMatch {
            start: i,
            text: pair.iter().collect(),
        })
        .collect()
}

/// Every VVV sequence not adjacent to a further vowel.
pub fn vvv_sequences(word: &str) -> Vec<SeqMatch> {
    vowel_runs(word)
        .into_iter()
        .filter(|(_, run)| run.len() == 3)
        .map(|(start, run)| SeqMatch {
            start,
            text: run.into_iter().collect(),
        })
        .collect()
}

/// VVV sequences that contain a long vowel, e.g. `aai` in *maailma*.
pub fn long_vowel_sequences(word: &str) -> Vec<SeqMatch> {
    vvv_sequences(word)
        .into_iter()
        .filter(|m| {
            let chars: Vec<char> = m.text.chars().collect();
            is_long(&chars[..2].iter().collect::<String>())
                || is_long(&chars[1..].iter().collect::<String>())
        })
        .collect()
}

/// i-final diphthongs (`ai`, `ei`, `oi`, `äi`, `öi`, `ui`, `yi`) inside a
/// vowel run of three or more. The hit is the diphthong itself.
pub fn i_final_diphthong_vvv_sequences(word: &str) -> Vec<SeqMatch> {
    let mut hits = Vec::new();
    for (start, run) in vowel_runs(word) {
        if run.len() < 3 {
            continue;
        }
        for (j, pair) in run.windows(2).enumerate() {
            let first = pair[0].to_lowercase().next().unwrap_or(pair[0]);
            let second = pair[1].to_lowercase().next().unwrap_or(pair[1]);
            if first != 'i' && second == 'i' {
                hits.push(SeqMatch {
                    start: start + j,
                    text: pair.iter().collect(),
                });
            }
        }
    }
    hits
}

/// The boundary-split /ie/, /uo/ or /yö/ of the first syllable, if any.
/// The hit text includes the boundary, e.g. `u.o`.
pub fn tail_diphthongs(word: &str) -> Option<SeqMatch> {
    TAIL_DIPHTHONG
        .captures(word)
        .and_then(|caps| caps.get(1))
        .map(|m| SeqMatch::from_capture(word, m))
}

/// The leftmost /u,y/-final diphthong preceded by a consonant.
pub fn u_y_final_diphthongs(word: &str) -> Option<SeqMatch> {
    U_Y_FINAL_DIPHTHONG
        .captures(word)
        .and_then(|caps| caps.get(1))
        .map(|m| SeqMatch::from_capture(word, m))
}

/// The word-initial VVV containing a /u,y/-final diphthong next to
/// /i, e, a, o, ä, ö/, if followed by a consonant or boundary.
pub fn precedence_sequences(word: &str) -> Option<SeqMatch> {
    PRECEDENCE
        .captures(word)
        .and_then(|caps| caps.get(1))
        .map(|m| SeqMatch::from_capture(word, m))
}

/// Cut `word` into pieces around every diphthong-scope match, keeping the
/// matches. The first piece is always the (possibly empty) text before the
/// first match, so pieces at odd indices are matches.
pub fn unstressed_diphthong_pieces(word: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for m in UNSTRESSED_DIPHTHONG_SCOPE.find_iter(word) {
        pieces.push(word[last..m.start()].to_string());
        pieces.push(m.as_str().to_string());
        last = m.end();
    }
    pieces.push(word[last..].to_string());
    pieces
}

/// Insert `.` before the character at `index`.
pub fn insert_boundary(word: &str, index: usize) -> String {
    let mut out = String::with_capacity(word.len() + 1);
    for (i, ch) in word.chars().enumerate() {
        if i == index {
            out.push('.');
        }
        out.push(ch);
    }
    if index >= word.chars().count() {
        out.push('.');
    }
    out
}

/// Remove the character at `index`.
pub fn remove_char(word: &str, index: usize) -> String {
    word.chars()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, ch)| ch)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vv_sequences_overlap() {
        let hits = vv_sequences("hovioikeus");
        let found: Vec<(usize, &str)> = hits
            .iter()
            .map(|m| (m.start, m.text.as_str()))
            .collect();
        assert_eq!(found, vec![(3, "io"), (4, "oi"), (7, "eu")]);
    }

    #[test]
    fn test_vv_sequences_uses_char_offsets() {
        let hits = vv_sequences("käyä");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].start, 1);
        assert_eq!(hits[0].text, "äy");
        assert_eq!(hits[1].start, 2);
    }

    #[test]
    fn test_vvv_sequences_maximal_only() {
        assert_eq!(vvv_sequences("maailma")[0].start, 1);
        assert!(vvv_sequences("hääyöaie").is_empty());
        assert!(vvv_sequences("aa").is_empty());
    }

    #[test]
    fn test_long_vowel_sequences() {
        let hits = long_vowel_sequences("riuun");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "iuu");
        assert!(long_vowel_sequences("kauit").is_empty());
    }

    #[test]
    fn test_i_final_diphthong_vvv() {
        let hits = i_final_diphthong_vvv_sequences("kauit");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "ui");
        assert_eq!(hits[0].start, 2);
        assert!(i_final_diphthong_vvv_sequences("kai").is_empty());
    }

    #[test]
    fn test_tail_diphthongs() {
        let m = tail_diphthongs("Nu.o").unwrap();
        assert_eq!(m.start, 1);
        assert_eq!(m.text, "u.o");
        assert!(tail_diphthongs("kos.ton.ti.e").is_none());
        assert!(tail_diphthongs("yö").is_none());
        let m = tail_diphthongs("ty.ö.tä").unwrap();
        assert_eq!(m.text, "y.ö");
    }

    #[test]
    fn test_u_y_final_diphthongs() {
        let m = u_y_final_diphthongs("oi.keus").unwrap();
        assert_eq!(m.text, "eu");
        assert_eq!(m.start, 4);
        assert!(u_y_final_diphthongs("au").is_none());
    }

    #[test]
    fn test_precedence_sequences() {
        let m = precedence_sequences("kauit").unwrap();
        assert_eq!(m.text, "aui");
        assert_eq!(m.start, 1);
        assert!(precedence_sequences("kaui").is_none());
    }

    #[test]
    fn test_unstressed_diphthong_pieces() {
        assert_eq!(
            unstressed_diphthong_pieces("oi.keus"),
            vec!["", "oi.keus", ""]
        );
        assert_eq!(
            unstressed_diphthong_pieces("kuu.kaut.ta"),
            vec!["k", "uu.kaut.t", "a"]
        );
        assert_eq!(unstressed_diphthong_pieces("ru.no.ja"), vec!["ru.no.ja"]);
        assert_eq!(unstressed_diphthong_pieces(""), vec![""]);
    }

    #[test]
    fn test_insert_and_remove() {
        assert_eq!(insert_boundary("kävi", 2), "kä.vi");
        assert_eq!(insert_boundary("ab", 2), "ab.");
        assert_eq!(remove_char("nu.o", 2), "nuo");
    }

    #[test]
    fn test_matchers_total_on_degenerate_input() {
        for w in ["", ".", "k", "a", "ktrs", "aaaa", "..."] {
            let _ = vv_sequences(w);
            let _ = vvv_sequences(w);
            let _ = long_vowel_sequences(w);
            let _ = i_final_diphthong_vvv_sequences(w);
            let _ = tail_diphthongs(w);
            let _ = u_y_final_diphthongs(w);
            let _ = precedence_sequences(w);
            let _ = unstressed_diphthong_pieces(w);
        }
    }
}

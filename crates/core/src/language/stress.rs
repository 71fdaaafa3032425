//! Stress assignment over syllabified words.
//!
//! Primary stress (`'`) falls on the first syllable of a word. A compound
//! member following `=` takes secondary stress (`` ` ``) instead. Secondary
//! stress also falls on every odd-numbered syllable after the first,
//! except the last.

use crate::text::{letter_runs, Piece};

pub const PRIMARY: char = '\'';
pub const SECONDARY: char = '`';

fn stress_syllables(word: &str, initial: char) -> String {
    let sylls: Vec<&str> = word.split('.').collect();
    let last = sylls.len() - 1;

    let marked: Vec<String> = sylls
        .iter()
        .enumerate()
        .map(|(i, syll)| {
            if i == 0 {
                format!("{}{}", initial, syll)
            } else if i % 2 == 0 && i != last {
                format!("{}{}", SECONDARY, syll)
            } else {
                syll.to_string()
            }
        })
        .collect();

    marked.join(".")
}

fn flush(pending: &mut String, out: &mut String, secondary: bool) {
    if !pending.is_empty() {
        let initial = if secondary { SECONDARY } else { PRIMARY };
        out.push_str(&stress_syllables(pending, initial));
        pending.clear();
    }
}

/// Mark stress on a syllabified word that may still contain `=`, `-` or
/// spaces between its members.
pub fn stress(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 8);
    let mut after_morpheme_boundary = false;

    // letters and the '.' between them accumulate until a delimiter
    let mut pending = String::new();

    for piece in letter_runs(word) {
        match piece {
            Piece::Letters(s) => pending.push_str(s),
            Piece::Other(s) if s.chars().all(|c| c == '.') && !pending.is_empty() => {
                pending.push_str(s)
            }
            Piece::Other(s) => {
                flush(&mut pending, &mut out, after_morpheme_boundary);
                after_morpheme_boundary = s.contains('=');
                out.push_str(s);
            }
        }
    }
    flush(&mut pending, &mut out, after_morpheme_boundary);

    out
}

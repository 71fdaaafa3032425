//! Syllabification: orthographic word → ranked syllabified candidates.
//!
//! Simplex words run through the rule cascade; complex words (anything with
//! hyphens, spaces, `=` or other non-letters) are cut into letter runs that
//! are syllabified independently and recombined.

use super::rank::rank;
use super::rules::{t1, t11, t2, t4, t6, t8, Derivation, Trace, TraceToken};
use super::stress::stress;
use crate::text::{letter_runs, Piece};

/// Upper bound on candidates assembled for one compound.
pub const MAX_COMPOUND_CANDIDATES: usize = 256;

/// True if `word` is a single run of letters.
pub fn is_simplex(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Run the cascade over a simplex word. The result is in generation order
/// and never empty.
pub fn syllabify_simplex(word: &str) -> Vec<Derivation> {
    let d = t8(t2(t1(Derivation::new(word))));

    t4(d)
        .into_iter()
        .map(|d| {
            let mut d = t11(t6(d));
            d.trace = d.trace.or_unchanged();
            d
        })
        .collect()
}

/// Syllabify each letter run of a complex word and combine the results.
/// Non-letter runs pass through with themselves as trace tokens.
pub fn syllabify_complex(word: &str) -> Vec<Derivation> {
    let components: Vec<Vec<Derivation>> = letter_runs(word)
        .into_iter()
        .map(|piece| match piece {
            Piece::Letters(s) => syllabify_simplex(s),
            Piece::Other(s) => {
                let mut trace = Trace::new();
                trace.push(TraceToken::Delimiter(s.to_string()));
                vec![Derivation {
                    word: s.to_string(),
                    trace,
                }]
            }
        })
        .collect();

    let total: usize = components.iter().map(Vec::len).product();
    let mut combined = combine(&components, MAX_COMPOUND_CANDIDATES);
    if total > MAX_COMPOUND_CANDIDATES {
        log::warn!(
            "{} candidates for {:?}, keeping {} (including the unsplit form)",
            total,
            word,
            MAX_COMPOUND_CANDIDATES
        );
        // the unsplit form always survives the cap
        if let (Some(slot), Some(whole)) = (combined.last_mut(), unsplit(&components)) {
            *slot = whole;
        }
    }
    combined
}

/// The combination taking each component's last option, which is its
/// least-split variant.
fn unsplit(components: &[Vec<Derivation>]) -> Option<Derivation> {
    let mut d = Derivation::new(String::new());
    for options in components {
        let option = options.last()?;
        d.word.push_str(&option.word);
        d.trace.extend(&option.trace);
    }
    Some(d)
}

/// Concatenate one derivation per component for every combination, first
/// component varying slowest, stopping after `limit`.
fn combine(components: &[Vec<Derivation>], limit: usize) -> Vec<Derivation> {
    let mut acc = vec![Derivation::new(String::new())];
    for options in components {
        let mut next = Vec::with_capacity(acc.len() * options.len());
        'outer: for prefix in &acc {
            for option in options {
                if next.len() == limit {
                    break 'outer;
                }
                let mut d = prefix.clone();
                d.word.push_str(&option.word);
                d.trace.extend(&option.trace);
                next.push(d);
            }
        }
        acc = next;
    }
    acc
}

/// Derive and rank every candidate for `word`, before stress and
/// post-processing.
pub fn derive(word: &str) -> Vec<Derivation> {
    let mut candidates = if is_simplex(word) {
        syllabify_simplex(word)
    } else {
        syllabify_complex(word)
    };

    rank(&mut candidates);
    candidates
}

/// Turn morpheme boundaries into syllable boundaries and tidy boundary
/// runs: no `.` next to another `.` or at either edge.
pub fn post_process(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        let ch = if ch == '=' { '.' } else { ch };
        if ch == '.' && (out.is_empty() || out.ends_with('.')) {
            continue;
        }
        out.push(ch);
    }
    while out.ends_with('.') {
        out.pop();
    }
    out
}

/// Syllabify `word`, returning ranked, post-processed candidates.
///
/// With `with_stress` the candidates carry `'` and `` ` `` stress marks.
pub fn syllabify(word: &str, with_stress: bool) -> Vec<Derivation> {
    derive(word)
        .into_iter()
        .map(|d| {
            let marked = if with_stress { stress(&d.word) } else { d.word };
            Derivation {
                word: post_process(&marked),
                trace: d.trace.or_unchanged(),
            }
        })
        .collect()
}

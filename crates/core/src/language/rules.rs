//! The rule cascade: T1, T2, T8, T4, T6, T11.
//!
//! Each rule maps a [`Derivation`] to a new one, appending its identifier to
//! the trace only when it actually changes the word. T4 is the one optional
//! rule and fans a derivation out into several.

use std::fmt;

use super::phonotactics::{
    is_cluster, is_consonant, is_diphthong, is_long, is_sonorant, is_vowel,
};
use super::sequences::{
    insert_boundary, long_vowel_sequences, precedence_sequences, remove_char, tail_diphthongs,
    u_y_final_diphthongs, unstressed_diphthong_pieces, vv_sequences,
};

/// Upper bound on the variants T4 may produce for one word.
pub const MAX_T4_VARIANTS: usize = 64;

/// A cascade rule identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    T1,
    T2,
    T4,
    T6,
    T8,
    T11,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::T1 => "T1",
            Rule::T2 => "T2",
            Rule::T4 => "T4",
            Rule::T6 => "T6",
            Rule::T8 => "T8",
            Rule::T11 => "T11",
        };
        f.write_str(name)
    }
}

/// One entry of a rule trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceToken {
    Rule(Rule),
    /// No rule fired (`T0`).
    Unchanged,
    /// A compound delimiter passed through verbatim.
    Delimiter(String),
}

impl fmt::Display for TraceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceToken::Rule(rule) => write!(f, "{}", rule),
            TraceToken::Unchanged => f.write_str("T0"),
            TraceToken::Delimiter(d) => f.write_str(d),
        }
    }
}

/// The ordered record of rules applied while deriving one candidate.
///
/// Renders as space-joined tokens, e.g. `T1 T4` or `T0 = T1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace(Vec<TraceToken>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: TraceToken) {
        self.0.push(token);
    }

    pub fn extend(&mut self, other: &Trace) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `rule` appears in the trace.
    pub fn contains(&self, rule: Rule) -> bool {
        self.0.contains(&TraceToken::Rule(rule))
    }

    /// Replace an empty trace with `T0`.
    pub fn or_unchanged(mut self) -> Self {
        if self.0.is_empty() {
            self.0.push(TraceToken::Unchanged);
        }
        self
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// A word under derivation and the rules applied to it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub word: String,
    pub trace: Trace,
}

impl Derivation {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            trace: Trace::new(),
        }
    }

    /// Move to `word`, recording `rule` if the word changed.
    fn advance(mut self, rule: Rule, word: String) -> Self {
        if word != self.word {
            log::debug!("{}: {} -> {}", rule, self.word, word);
            self.trace.push(TraceToken::Rule(rule));
            self.word = word;
        }
        self
    }
}

/// Split `word` into maximal runs of vowels and non-vowels.
fn cv_runs(word: &str) -> Vec<Vec<char>> {
    let mut runs: Vec<Vec<char>> = Vec::new();
    for ch in word.chars() {
        match runs.last_mut() {
            Some(run) if is_vowel(run[0]) == is_vowel(ch) => run.push(ch),
            _ => runs.push(vec![ch]),
        }
    }
    runs
}

fn join(chars: &[char]) -> String {
    chars.iter().collect()
}

// --- T1 ---

/// Insert a syllable boundary in front of every CV sequence.
///
/// Word-initial and word-final consonant runs stay whole. Medial "Finnish"
/// clusters (/kr/, /pl/, ...) split after their first consonant when the
/// preceding syllable is unstressed and otherwise form a complex onset.
pub fn t1(d: Derivation) -> Derivation {
    let runs = cv_runs(&d.word);
    let last = runs.len().saturating_sub(1);

    // a count divisible by 2 marks an even, unstressed syllable
    let mut count = 1;
    let mut out = String::with_capacity(d.word.len() + runs.len());

    for (i, run) in runs.iter().enumerate() {
        if !is_consonant(run[0]) || i == 0 {
            out.push_str(&join(run));
            continue;
        }

        count += 1;
        let unstressed = count % 2 == 0;

        if i == last {
            out.push_str(&join(run));
        } else if is_cluster(&join(run)) {
            if unstressed {
                out.push(run[0]);
                out.push('.');
                out.push_str(&join(&run[1..]));
            } else {
                out.push('.');
                out.push_str(&join(run));
            }
        } else if is_cluster(&join(&run[1..])) {
            let cut = if is_sonorant(run[0]) && unstressed { 2 } else { 1 };
            out.push_str(&join(&run[..cut]));
            out.push('.');
            out.push_str(&join(&run[cut..]));
        } else {
            let cut = run.len() - 1;
            out.push_str(&join(&run[..cut]));
            out.push('.');
            out.push(run[cut]);
        }
    }

    d.advance(Rule::T1, out)
}

// --- T2 ---

/// Split every VV sequence that is neither a diphthong nor a long vowel,
/// e.g. *ta.e*, *ko.et.taa*. Applies inside VVV+ runs too.
pub fn t2(d: Derivation) -> Derivation {
    let mut word = d.word.clone();
    let mut offset = 0;

    for vv in vv_sequences(&d.word) {
        if !is_diphthong(&vv.text) && !is_long(&vv.text) {
            word = insert_boundary(&word, vv.start + 1 + offset);
            offset += 1;
        }
    }

    d.advance(Rule::T2, word)
}

// --- T8 ---

/// Join /ie/, /uo/ or /yö/ in the stressed first syllable by deleting the
/// boundary T2 placed inside it.
pub fn t8(d: Derivation) -> Derivation {
    let word = match tail_diphthongs(&d.word) {
        Some(m) => remove_char(&d.word, m.start + 1),
        None => d.word.clone(),
    };
    d.advance(Rule::T8, word)
}

// --- T4 ---

/// Optionally split /u,y/-final diphthongs that do not take primary stress,
/// e.g. *lau.ka.us* next to *lau.kaus*.
///
/// Returns every combination of split and unsplit occurrences, split forms
/// first. Past [`MAX_T4_VARIANTS`] the tail of the enumeration is dropped,
/// but the fully unsplit form is always kept.
pub fn t4(d: Derivation) -> Vec<Derivation> {
    let pieces = unstressed_diphthong_pieces(&d.word);

    let options: Vec<Vec<String>> = pieces
        .iter()
        .enumerate()
        .map(|(i, piece)| {
            let mut opts = Vec::with_capacity(2);
            if i != 0 {
                if let Some(m) = u_y_final_diphthongs(piece) {
                    opts.push(insert_boundary(piece, m.start + 1));
                }
            }
            opts.push(piece.clone());
            opts
        })
        .collect();

    let mut words = cross_product(&options, MAX_T4_VARIANTS);
    if words.len() == MAX_T4_VARIANTS && !words.contains(&d.word) {
        log::warn!(
            "T4 variants for {:?} capped at {}",
            d.word,
            MAX_T4_VARIANTS
        );
        words.pop();
        words.push(d.word.clone());
    }

    words
        .into_iter()
        .map(|word| d.clone().advance(Rule::T4, word))
        .collect()
}

/// Concatenate one option per slot, for every combination, first slot
/// varying slowest. Stops after `limit` results.
fn cross_product(slots: &[Vec<String>], limit: usize) -> Vec<String> {
    let mut acc = vec![String::new()];
    for slot in slots {
        let mut next = Vec::with_capacity(acc.len() * slot.len());
        'outer: for prefix in &acc {
            for option in slot {
                if next.len() == limit {
                    break 'outer;
                }
                next.push(format!("{}{}", prefix, option));
            }
        }
        acc = next;
    }
    acc
}

// --- T6 ---

/// Split a VVV sequence containing a long vowel, e.g. *maa.il.ma*,
/// *kor.ke.aa*, *ruu.an*.
///
/// In the first syllable the boundary goes after the second vowel. Later
/// syllables put it right after the long vowel, or between the first vowel
/// and a following long vowel.
pub fn t6(d: Derivation) -> Derivation {
    let (first, rest) = match d.word.split_once('.') {
        Some((first, rest)) => (first.to_string(), Some(rest.to_string())),
        None => (d.word.clone(), None),
    };

    let rest = rest.map(|mut rest| {
        let mut offset = 0;
        let hits = long_vowel_sequences(&rest);
        for vvv in hits {
            let head: String = vvv.text.chars().take(2).collect();
            let step = if is_long(&head) { 2 } else { 1 };
            rest = insert_boundary(&rest, vvv.start + step + offset);
            offset += 1;
        }
        rest
    });

    let mut word = first.clone();
    let mut offset = 0;
    for vvv in long_vowel_sequences(&first) {
        word = insert_boundary(&word, vvv.start + 2 + offset);
        offset += 1;
    }

    if let Some(rest) = rest {
        word.push('.');
        word.push_str(&rest);
    }

    d.advance(Rule::T6, word)
}

// --- T11 ---

/// Split a stressed VVV containing a /u,y/-final diphthong from its third
/// vowel, e.g. *kau.it*.
pub fn t11(d: Derivation) -> Derivation {
    let word = match precedence_sequences(&d.word) {
        Some(m) => {
            let ends_in_u_y = m
                .text
                .chars()
                .last()
                .map(|c| matches!(c, 'u' | 'y' | 'U' | 'Y'))
                .unwrap_or(false);
            let step = if ends_in_u_y { 1 } else { 2 };
            insert_boundary(&d.word, m.start + step)
        }
        None => d.word.clone(),
    };
    d.advance(Rule::T11, word)
}

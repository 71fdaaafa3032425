//! Finnish phonotactic predicates and well-formedness constraints.
//!
//! All predicates are case-insensitive and total: any `char` or `&str`,
//! including the empty string, yields a definite answer.

use std::collections::HashSet;
use std::fmt;

/// Finnish vowel letters (lowercase).
pub const VOWELS: &str = "ieaouäöy";

/// Letters of the native phonemic inventory, plus the delimiters that may
/// legitimately appear inside a token.
const PHONEMIC_INVENTORY: &str = "ieaouäöydhjklmnprstv -=";

lazy_static::lazy_static! {
    /// Finnish diphthongs. The tail diphthongs /ie/, /uo/, /yö/ are handled
    /// by the cascade (T8), not here.
    static ref DIPHTHONGS: HashSet<&'static str> = {
        [
            // i-final
            "ai", "ei", "oi", "äi", "öi", "ui", "yi",
            // u/y-final
            "au", "eu", "ou", "iu", "ey", "äy", "öy", "iy",
            // loanword
            "ay", "oy", "uy",
        ].into_iter().collect()
    };

    /// Consonant clusters that behave as complex onsets (Karlsson 1985, #4).
    static ref CLUSTERS: HashSet<&'static str> = {
        [
            "bl", "br", "dr", "fl", "fr", "gl", "gr", "kl", "kr", "kv",
            "pl", "pr", "cl", "qv", "schm",
        ].into_iter().collect()
    };

    /// Licit word-initial complex onsets.
    static ref ONSETS: HashSet<&'static str> = {
        [
            "pl", "pr", "tr", "kl", "kr", "sp", "st", "sk", "ps", "ts",
            "sn", "dr", "spr", "str",
        ].into_iter().collect()
    };
}

fn lower_char(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Lowercase `s` one character at a time, so the result has exactly as many
/// characters as the input.
pub fn lowercase(s: &str) -> String {
    s.chars().map(lower_char).collect()
}

/// True if `ch` is a Finnish vowel.
pub fn is_vowel(ch: char) -> bool {
    matches!(
        ch,
        'i' | 'e' | 'a' | 'o' | 'u' | 'ä' | 'ö' | 'y'
            | 'I' | 'E' | 'A' | 'O' | 'U' | 'Ä' | 'Ö' | 'Y'
    )
}

/// True if `ch` is not a vowel. Foreign letters such as `w` count as
/// consonants.
pub fn is_consonant(ch: char) -> bool {
    !is_vowel(ch)
}

/// True if `ch` is a front vowel (ä, ö, y).
pub fn is_front(ch: char) -> bool {
    matches!(lower_char(ch), 'ä' | 'ö' | 'y')
}

/// True if `ch` is a back vowel (a, o, u).
pub fn is_back(ch: char) -> bool {
    matches!(lower_char(ch), 'a' | 'o' | 'u')
}

/// True if `ch` is a coronal consonant (Suomi et al. 2008).
pub fn is_coronal(ch: char) -> bool {
    matches!(lower_char(ch), 'l' | 'n' | 'r' | 's' | 't')
}

/// True if `ch` is a sonorant consonant.
pub fn is_sonorant(ch: char) -> bool {
    matches!(lower_char(ch), 'l' | 'm' | 'n' | 'r')
}

/// True if `chars` is a Finnish diphthong.
pub fn is_diphthong(chars: &str) -> bool {
    DIPHTHONGS.contains(lowercase(chars).as_str())
}

/// True if `chars` is a long vowel or geminate: a non-empty run of one
/// repeated letter.
pub fn is_long(chars: &str) -> bool {
    let mut it = chars.chars().map(lower_char);
    match it.next() {
        Some(first) => it.all(|c| c == first),
        None => false,
    }
}

/// True if `chars` is a "Finnish" consonant cluster.
pub fn is_cluster(chars: &str) -> bool {
    CLUSTERS.contains(lowercase(chars).as_str())
}

/// True if `chars` is a licit complex onset.
pub fn is_onset(chars: &str) -> bool {
    ONSETS.contains(lowercase(chars).as_str())
}

// --- Constraints ---

/// A word contains at least two vowels, allowing binary footing.
pub fn min_word(word: &str) -> bool {
    word.chars().filter(|&c| is_vowel(c)).count() > 1
}

/// The word's edges respect sonority sequencing: a simplex or licit complex
/// onset, and at most one coda consonant.
pub fn sonseq(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let first = chars.iter().position(|&c| is_vowel(c));
    let last = chars.iter().rposition(|&c| is_vowel(c));

    let (onset, coda): (String, String) = match (first, last) {
        (Some(f), Some(l)) => (
            chars[..f].iter().collect(),
            chars[l + 1..].iter().collect(),
        ),
        _ => (word.to_string(), word.to_string()),
    };

    if onset.chars().count() <= 1 || is_onset(&onset) {
        return coda.chars().count() <= 1;
    }
    false
}

/// The word ends in a vowel or a coronal consonant.
pub fn word_final(word: &str) -> bool {
    match word.chars().last() {
        Some(ch) => is_vowel(ch) || is_coronal(ch),
        None => false,
    }
}

/// The word's non-neutral vowels agree in frontness/backness.
pub fn harmonic(word: &str) -> bool {
    let has_front = word.chars().any(is_front);
    let has_back = word.chars().any(is_back);
    !(has_front && has_back)
}

/// A named boolean well-formedness test with an optional weight.
#[derive(Debug, Clone, Copy)]
pub struct Constraint {
    pub name: &'static str,
    pub check: fn(&str) -> bool,
    pub weight: f64,
}

impl Constraint {
    pub const fn new(name: &'static str, check: fn(&str) -> bool) -> Self {
        Self { name, check, weight: 0.0 }
    }

    /// True if `segment` satisfies the constraint.
    pub fn test(&self, segment: &str) -> bool {
        (self.check)(segment)
    }

    /// 1 if `segment` violates the constraint, else 0.
    pub fn violations(&self, segment: &str) -> u32 {
        u32::from(!self.test(segment))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weight != 0.0 {
            write!(f, "{}={}", self.name, self.weight)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// The unranked constraint set used for compound scoring and foreign-word
/// detection.
pub static CONSTRAINTS: [Constraint; 4] = [
    Constraint::new("MnWrd", min_word),
    Constraint::new("SonSeq", sonseq),
    Constraint::new("Word#", word_final),
    Constraint::new("Harmonic", harmonic),
];

// --- Foreign word detection ---

/// True if `word` looks non-nativized: it uses letters outside the Finnish
/// inventory or one of its constituents violates a constraint.
pub fn is_foreign(word: &str) -> bool {
    has_foreign_characters(word) || violates_constraint(word)
}

fn has_foreign_characters(word: &str) -> bool {
    let word = lowercase(word);

    // /d/ occurs only word-medially
    if word.starts_with('d') {
        return true;
    }

    let foreign: HashSet<char> = word
        .chars()
        .filter(|c| !PHONEMIC_INVENTORY.contains(*c))
        .collect();

    // 'g' is native only as part of 'ng' (/ŋ/)
    if foreign.len() == 1 && foreign.contains(&'g') {
        return word.matches('g').count() != word.matches("ng").count();
    }

    !foreign.is_empty()
}

fn violates_constraint(word: &str) -> bool {
    word.split(['-', ' ', '='])
        .any(|constituent| CONSTRAINTS.iter().any(|c| !c.test(constituent)))
}

//! Tokenization helpers shared by the syllabifier, the segmenter and the
//! sentence interface.

use regex::Regex;

lazy_static::lazy_static! {
    static ref LETTER_RUN: Regex = Regex::new(r"[a-zA-ZäöÄÖ]+").unwrap();
    static ref SYLLABIFIED_WORD: Regex =
        Regex::new(r"[a-zA-ZäöÄÖ]+[a-zA-ZäöÄÖ.]*[a-zA-ZäöÄÖ]+").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"\W+").unwrap();
    static ref OVERT_DELIMITER: Regex = Regex::new(r"[- =]").unwrap();
}

/// A slice of a word: either a run of Finnish letters or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Letters(&'a str),
    Other(&'a str),
}

/// Split `re` matches and the text between them into an ordered list,
/// tagging matches with `true`. Empty gaps are dropped.
fn split_keep<'a>(re: &Regex, s: &'a str) -> Vec<(bool, &'a str)> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in re.find_iter(s) {
        if m.start() > last {
            out.push((false, &s[last..m.start()]));
        }
        out.push((true, m.as_str()));
        last = m.end();
    }
    if last < s.len() {
        out.push((false, &s[last..]));
    }
    out
}

/// Split a word into letter runs and the punctuation/whitespace between
/// them, e.g. `"linja-auto"` → `linja`, `-`, `auto`.
pub fn letter_runs(word: &str) -> Vec<Piece<'_>> {
    split_keep(&LETTER_RUN, word)
        .into_iter()
        .map(|(is_letters, s)| {
            if is_letters {
                Piece::Letters(s)
            } else {
                Piece::Other(s)
            }
        })
        .collect()
}

/// Extract the syllabified letter words of `s`: letter runs possibly
/// containing `.`, with at least two letters.
pub fn extract_words(s: &str) -> Vec<&str> {
    SYLLABIFIED_WORD.find_iter(s).map(|m| m.as_str()).collect()
}

/// Split running text into words and the non-word runs between them.
/// Returns `(is_word, text)` pairs in order.
pub fn word_runs(text: &str) -> Vec<(bool, &str)> {
    split_keep(&NON_WORD, text)
        .into_iter()
        .map(|(is_gap, s)| (!is_gap, s))
        .collect()
}

/// Split a token on hyphens, spaces and `=`, keeping each delimiter as its
/// own piece. Empty pieces are dropped.
pub fn split_on_delimiters(word: &str) -> Vec<&str> {
    split_keep(&OVERT_DELIMITER, word)
        .into_iter()
        .map(|(_, s)| s)
        .collect()
}

/// True if `s` contains a hyphen, space or `=`.
pub fn has_delimiter(s: &str) -> bool {
    OVERT_DELIMITER.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_runs() {
        let pieces = letter_runs("linja-auto=aseman");
        assert_eq!(
            pieces,
            vec![
                Piece::Letters("linja"),
                Piece::Other("-"),
                Piece::Letters("auto"),
                Piece::Other("="),
                Piece::Letters("aseman"),
            ]
        );
        assert!(letter_runs("").is_empty());
        assert_eq!(letter_runs("--"), vec![Piece::Other("--")]);
    }

    #[test]
    fn test_letter_runs_umlauts() {
        let pieces = letter_runs("Töölö 2");
        assert_eq!(pieces[0], Piece::Letters("Töölö"));
        assert_eq!(pieces[1], Piece::Other(" 2"));
    }

    #[test]
    fn test_extract_words() {
        assert_eq!(extract_words("kuu=kaut.ta"), vec!["kuu", "kaut.ta"]);
        assert_eq!(extract_words("a.b"), vec!["a.b"]);
        assert_eq!(extract_words("a b"), Vec::<&str>::new());
    }

    #[test]
    fn test_word_runs() {
        let runs = word_runs("näky,\nhoure");
        assert_eq!(runs, vec![(true, "näky"), (false, ",\n"), (true, "houre")]);
        assert_eq!(word_runs("--"), vec![(false, "--")]);
    }

    #[test]
    fn test_split_on_delimiters() {
        assert_eq!(
            split_on_delimiters("linja-autoaseman"),
            vec!["linja", "-", "autoaseman"]
        );
        assert_eq!(split_on_delimiters("a b=c"), vec!["a", " ", "b", "=", "c"]);
        assert!(split_on_delimiters("").is_empty());
    }

    #[test]
    fn test_has_delimiter() {
        assert!(has_delimiter("loppu=ottelussa"));
        assert!(has_delimiter("linja-auto"));
        assert!(!has_delimiter("runoja"));
    }
}

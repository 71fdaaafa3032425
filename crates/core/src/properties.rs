//! Property-based checks over the whole pipeline.

use proptest::prelude::*;

use crate::language::phonotactics::CONSTRAINTS;
use crate::language::rank::rank;
use crate::language::syllabify::{derive, post_process, syllabify};
use crate::segment::fixtures::fixture_segmenter;

/// Finnish-looking words, optionally joined by hyphens or spaces.
fn arb_word() -> impl Strategy<Value = String> {
    "[a-zäöA-ZÄÖ -]{0,16}"
}

fn strip(s: &str, marks: &[char]) -> String {
    s.chars().filter(|c| !marks.contains(c)).collect()
}

proptest! {
    #[test]
    fn prop_boundaries_only_insert(word in arb_word()) {
        for d in syllabify(&word, false) {
            prop_assert_eq!(strip(&d.word, &['.']), word.clone());
        }
    }

    #[test]
    fn prop_stress_marks_only_insert(word in arb_word()) {
        for d in syllabify(&word, true) {
            prop_assert_eq!(strip(&d.word, &['.', '\'', '`']), word.clone());
        }
    }

    #[test]
    fn prop_never_empty(word in ".{0,12}") {
        let out = syllabify(&word, false);
        prop_assert!(!out.is_empty());
        prop_assert!(!out[0].trace.is_empty());
    }

    #[test]
    fn prop_deterministic(word in arb_word()) {
        prop_assert_eq!(syllabify(&word, false), syllabify(&word, false));
    }

    #[test]
    fn prop_ranking_is_idempotent(word in arb_word()) {
        let mut ranked = derive(&word);
        let once = ranked.clone();
        rank(&mut ranked);
        prop_assert_eq!(ranked, once);
    }

    #[test]
    fn prop_post_process_idempotent(word in "[a-kä.=]{0,12}") {
        let once = post_process(&word);
        prop_assert_eq!(post_process(&once), once.clone());
        prop_assert!(!once.starts_with('.'));
        prop_assert!(!once.ends_with('.'));
        prop_assert!(!once.contains(".."));
    }

    #[test]
    fn prop_constraints_total(word in ".{0,6}") {
        for c in CONSTRAINTS.iter() {
            let _ = c.test(&word);
            let _ = c.violations(&word);
        }
    }

    #[test]
    fn prop_segmentation_only_inserts(word in "[a-zäöA-ZÄÖ -]{0,14}") {
        let seg = fixture_segmenter();
        prop_assert_eq!(strip(&seg.segment(&word), &['=']), word);
    }
}

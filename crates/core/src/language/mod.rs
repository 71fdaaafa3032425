//! Finnish phonology: phonotactics, the rule cascade and variant ranking.

pub mod phonotactics;
pub mod rank;
pub mod rules;
pub mod sequences;
pub mod stress;
pub mod syllabify;

pub use rules::{Derivation, Rule, Trace, TraceToken};
pub use syllabify::syllabify;

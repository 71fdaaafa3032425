//! Finnish syllabification with compound segmentation.
//!
//! [`language`] holds the rule cascade that inserts syllable boundaries and
//! ranks competing variants; [`segment`] finds morpheme boundaries in
//! unmarked compounds so the cascade can treat each member as a word.
//! [`FinnSyll`] ties both together.

pub mod error;
pub mod finnsyll;
pub mod language;
pub mod resources;
pub mod segment;
pub mod text;
pub mod types;

#[cfg(test)]
mod properties;

pub use error::{FinnSyllError, Result};
pub use finnsyll::{inspect, FinnSyll, FinnSyllConfig};
pub use types::{Candidate, Inspection, Segmentation};

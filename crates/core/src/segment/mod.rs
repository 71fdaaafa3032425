//! Compound segmentation: morph model, n-gram scoring and constraint
//! tableaux.

pub mod model;
pub mod ngrams;
pub mod segmenter;
pub mod tableau;

#[cfg(test)]
pub(crate) mod fixtures;

pub use model::{MorphLexicon, MorphModel};
pub use ngrams::NgramTable;
pub use segmenter::Segmenter;
pub use tableau::Tableau;

//! Error types for resource loading and the facade.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T, E = FinnSyllError> = std::result::Result<T, E>;

/// Errors raised by `finnsyll-core`.
///
/// Syllabification itself never fails; every variant here comes from loading
/// the segmentation resources or from asking a facade for a capability it
/// was built without.
#[derive(Debug, thiserror::Error)]
pub enum FinnSyllError {
    #[error("failed to read resource {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed entry in {} at line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("invalid n-gram table in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("resource {} contains no entries", path.display())]
    EmptyResource { path: PathBuf },

    #[error("compound segmentation requested but no segmenter is loaded")]
    SegmenterUnavailable,
}

//! Locating and reading the segmentation resources.

use std::path::{Path, PathBuf};

use crate::error::{FinnSyllError, Result};

/// Environment variable overriding the resource directory.
pub const DATA_DIR_ENV: &str = "FINNSYLL_DATA_DIR";

/// Morph lexicon file name.
pub const MORPHS_FILE: &str = "finnsyll-morphs.txt";

/// N-gram table file name.
pub const NGRAMS_FILE: &str = "finnsyll-ngrams.json";

/// Get the default resource directory.
///
/// Uses `FINNSYLL_DATA_DIR` if set, otherwise `~/.local/share/finnsyll`.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".local").join("share").join("finnsyll")
}

/// An explicit directory wins over [`data_dir`].
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(data_dir)
}

pub fn morphs_path(dir: &Path) -> PathBuf {
    dir.join(MORPHS_FILE)
}

pub fn ngrams_path(dir: &Path) -> PathBuf {
    dir.join(NGRAMS_FILE)
}

/// Read a resource file as UTF-8 text.
pub fn read_resource(path: &Path) -> Result<String> {
    log::debug!("Reading {}", path.display());
    std::fs::read_to_string(path).map_err(|source| FinnSyllError::Io {
        path: path.to_path_buf(),
        source,
    })
}

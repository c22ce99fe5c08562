//! API key loading.

use std::path::{Path, PathBuf};

/// Default file holding the Trafiklab API key.
pub const DEFAULT_KEY_FILE: &str = ".api.key";

/// Errors loading an API key.
#[derive(Debug, thiserror::Error)]
pub enum ApiKeyError {
    /// The key file could not be read
    #[error("cannot read API key from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The key file's first line is blank
    #[error("API key file {0} is empty")]
    Empty(PathBuf),
}

/// Read an API key from the first line of `path`.
pub fn load_api_key(path: impl AsRef<Path>) -> Result<String, ApiKeyError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ApiKeyError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let key = contents.lines().next().unwrap_or_default().trim();
    if key.is_empty() {
        return Err(ApiKeyError::Empty(path.to_path_buf()));
    }

    Ok(key.to_string())
}

/// Pick the API key: an explicit key wins, otherwise read `key_file`.
pub fn resolve_api_key(
    explicit: Option<&str>,
    key_file: impl AsRef<Path>,
) -> Result<String, ApiKeyError> {
    match explicit.map(str::trim).filter(|k| !k.is_empty()) {
        Some(key) => Ok(key.to_string()),
        None => load_api_key(key_file),
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a repository's backing collection.
///
/// Queries never fail: an entity that is not found is `None`, and a query with
/// no matches is an empty `Vec`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading the entity source failed. `path` is set when the source was a file.
    #[error("failed to read entities{}: {source}", describe_path(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },
    /// The entity source was not a valid JSON array of entities.
    #[error("failed to decode entities: {0}")]
    Decode(#[from] serde_json::Error),
}

fn describe_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|path| format!(" from {}", path.display()))
        .unwrap_or_default()
}

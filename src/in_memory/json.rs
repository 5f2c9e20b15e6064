//! Loading an in-memory repository from a JSON array of entities.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::InMemoryRepository;
use crate::repository::RepositoryError;

impl<T: DeserializeOwned> InMemoryRepository<T> {
    /// Build a repository from a JSON array, keeping the array order.
    pub fn from_json_str(json: &str) -> Result<Self, RepositoryError> {
        let items: Vec<T> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    /// Read a JSON array from `reader`. Read failures are reported as
    /// `RepositoryError::Io`, never as decode errors.
    pub fn from_json_reader<R: Read>(mut reader: R) -> Result<Self, RepositoryError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| RepositoryError::Io { path: None, source })?;

        Self::from_json_slice(&bytes)
    }

    /// Build a repository from a JSON file holding an array of entities.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading entities");

        let bytes = fs::read(path).map_err(|source| RepositoryError::Io {
            path: Some(path.to_path_buf()),
            source,
        })?;

        Self::from_json_slice(&bytes)
    }

    fn from_json_slice(bytes: &[u8]) -> Result<Self, RepositoryError> {
        let items: Vec<T> = serde_json::from_slice(bytes)?;
        Ok(Self::new(items))
    }
}

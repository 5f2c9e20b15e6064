#[cfg(feature = "json")]
mod error;
mod repository;

#[cfg(feature = "json")]
pub use error::RepositoryError;
pub use repository::{Count, Exists, GetById, ListAll, Repository};

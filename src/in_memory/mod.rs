//! InMemoryRepository - Vec-backed repository for tests, demos and fixtures.

#[cfg(feature = "json")]
mod json;
mod repository;

pub use repository::InMemoryRepository;

// Lets `#[derive(Entity)]` expand to `specified_rust::Entity` inside this crate too.
extern crate self as specified_rust;

mod entity;
mod evaluator;
mod in_memory;
mod repository;
mod specification;

pub use entity::Entity;
pub use evaluator::SpecificationEvaluator;
pub use in_memory::InMemoryRepository;
pub use repository::{Count, Exists, GetById, ListAll, Repository};
#[cfg(feature = "json")]
pub use repository::RepositoryError;
pub use specification::{Criteria, Include, Specification};

// Re-export the Entity derive macro
pub use specified_rust_macros::Entity;

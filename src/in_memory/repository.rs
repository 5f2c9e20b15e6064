use tracing::debug;

use crate::evaluator::SpecificationEvaluator;
use crate::repository::{Count, Exists, GetById, ListAll};
use crate::specification::Specification;

/// Repository over an owned, ordered collection fixed at construction.
///
/// Every query is a read-only pass over the collection, so a shared reference
/// can be read from many threads at once without locking.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> InMemoryRepository<T> {
    /// Create a repository that owns `items`, keeping their order.
    pub fn new(items: Vec<T>) -> Self {
        debug!(entities = items.len(), "created in-memory repository");
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The backing collection in its original order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for InMemoryRepository<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for InMemoryRepository<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> GetById<T> for InMemoryRepository<T> {
    fn get_by_id(&self, spec: &Specification<T>) -> Option<&T> {
        let found = SpecificationEvaluator::get_query(&self.items, spec).next();
        debug!(?spec, found = found.is_some(), "get_by_id");
        found
    }
}

impl<T> ListAll<T> for InMemoryRepository<T> {
    fn list_all(&self, spec: &Specification<T>) -> Vec<&T> {
        let matches: Vec<&T> = SpecificationEvaluator::get_query(&self.items, spec).collect();
        debug!(?spec, matched = matches.len(), "list_all");
        matches
    }
}

impl<T> Count<T> for InMemoryRepository<T> {
    fn count(&self, spec: &Specification<T>) -> usize {
        SpecificationEvaluator::get_query(&self.items, spec).count()
    }
}

impl<T> Exists<T> for InMemoryRepository<T> {
    fn exists(&self, spec: &Specification<T>) -> bool {
        SpecificationEvaluator::get_query(&self.items, spec)
            .next()
            .is_some()
    }
}

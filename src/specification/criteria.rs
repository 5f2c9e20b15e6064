//! Criteria - the shared predicate half of a specification.

use std::fmt;
use std::sync::Arc;

/// A pure boolean predicate over an entity type.
///
/// Backed by an `Arc` so specifications clone cheaply and can be shared
/// between threads. The closure must not have side effects.
pub struct Criteria<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Criteria<T> {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate against one entity.
    pub fn evaluate(&self, entity: &T) -> bool {
        (self.predicate)(entity)
    }
}

impl<T> Clone for Criteria<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Criteria<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Criteria(..)")
    }
}

//! SpecificationEvaluator - applies a specification to a sequence of entities.

use tracing::trace;

use crate::specification::Specification;

/// Decouples how a sequence is filtered from what the filter is.
///
/// Evaluation is a single ordered pass: matches keep their relative order and
/// multiplicity, nothing is mutated, and a specification without criteria
/// passes the sequence through unchanged.
pub struct SpecificationEvaluator;

impl SpecificationEvaluator {
    /// Lazily filter `items` by `spec`.
    ///
    /// Include selectors are inspected but not applied; there is no relation
    /// mechanism to load related data through.
    pub fn get_query<'a, 's, T, I>(
        items: I,
        spec: &'s Specification<T>,
    ) -> impl Iterator<Item = &'a T> + 's
    where
        T: 'a,
        'a: 's,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 's,
    {
        for include in spec.includes() {
            trace!(path = include.path(), "include not applied");
        }

        items
            .into_iter()
            .filter(move |entity| spec.is_satisfied_by(entity))
    }

    /// Collect the entities of `items` that satisfy `spec`, in order.
    pub fn evaluate<'a, T>(items: &'a [T], spec: &Specification<T>) -> Vec<&'a T> {
        Self::get_query(items, spec).collect()
    }
}

//! Specifications - query predicates as reusable, composable values.
//!
//! A specification pairs an optional predicate over an entity type with an
//! ordered list of include selectors. Repositories evaluate specifications
//! instead of taking ad hoc filter closures at every call site.
//!
//! ## Example
//!
//! ```ignore
//! use specified_rust::{Entity, InMemoryRepository, Repository, Specification};
//!
//! #[derive(Clone, Debug, Entity)]
//! struct Product {
//!     id: u32,
//!     name: String,
//! }
//!
//! let repo = InMemoryRepository::new(products);
//! let two = repo.get_by_id(&Specification::by_id(2));
//! let cheap = Specification::new(|p: &Product| p.price < 10).include("supplier");
//! let listed = repo.list_all(&cheap.and(Specification::new(|p: &Product| p.listed)));
//! ```

mod criteria;
mod include;

use std::fmt;

use crate::entity::Entity;

pub use criteria::Criteria;
pub use include::Include;

/// Which entities match, and which related data a query would need.
///
/// A specification without criteria matches every entity. Includes are
/// advisory: they are kept in order but never affect evaluation.
pub struct Specification<T> {
    criteria: Option<Criteria<T>>,
    includes: Vec<Include>,
}

impl<T> Specification<T> {
    /// A specification with no criteria. Matches every entity.
    pub fn all() -> Self {
        Self {
            criteria: None,
            includes: Vec::new(),
        }
    }

    /// A specification matching entities for which `predicate` returns true.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::from_criteria(Criteria::new(predicate))
    }

    /// A specification matching entities accepted by existing `criteria`.
    pub fn from_criteria(criteria: Criteria<T>) -> Self {
        Self {
            criteria: Some(criteria),
            includes: Vec::new(),
        }
    }

    /// Append an include selector. Order is preserved and duplicates are kept.
    pub fn include(mut self, include: impl Into<Include>) -> Self {
        self.includes.push(include.into());
        self
    }

    /// The predicate, or `None` when every entity matches.
    pub fn criteria(&self) -> Option<&Criteria<T>> {
        self.criteria.as_ref()
    }

    /// Include selectors in the order they were added.
    pub fn includes(&self) -> &[Include] {
        &self.includes
    }

    /// Returns true when the criteria are absent or hold for `entity`.
    pub fn is_satisfied_by(&self, entity: &T) -> bool {
        self.criteria
            .as_ref()
            .map_or(true, |criteria| criteria.evaluate(entity))
    }
}

impl<T: 'static> Specification<T> {
    /// Both specifications must hold. Includes are concatenated, `self` first.
    pub fn and(self, other: Specification<T>) -> Self {
        let criteria = match (self.criteria, other.criteria) {
            (Some(left), Some(right)) => Some(Criteria::new(move |entity: &T| {
                left.evaluate(entity) && right.evaluate(entity)
            })),
            // An absent side matches everything, so the other side decides.
            (left, right) => left.or(right),
        };

        Self {
            criteria,
            includes: concat(self.includes, other.includes),
        }
    }

    /// Either specification may hold. Includes are concatenated, `self` first.
    pub fn or(self, other: Specification<T>) -> Self {
        let criteria = match (self.criteria, other.criteria) {
            (Some(left), Some(right)) => Some(Criteria::new(move |entity: &T| {
                left.evaluate(entity) || right.evaluate(entity)
            })),
            _ => None,
        };

        Self {
            criteria,
            includes: concat(self.includes, other.includes),
        }
    }

    /// Negate the criteria. Negating a match-all specification matches nothing.
    pub fn not(self) -> Self {
        let criteria = match self.criteria {
            Some(inner) => Criteria::new(move |entity: &T| !inner.evaluate(entity)),
            None => Criteria::new(|_: &T| false),
        };

        Self {
            criteria: Some(criteria),
            includes: self.includes,
        }
    }
}

impl<T> Specification<T>
where
    T: Entity + 'static,
    T::Id: Send + Sync + 'static,
{
    /// Matches entities whose id equals `id`.
    pub fn by_id(id: T::Id) -> Self {
        Self::new(move |entity: &T| *entity.id() == id)
    }
}

fn concat(mut left: Vec<Include>, right: Vec<Include>) -> Vec<Include> {
    left.extend(right);
    left
}

impl<T> Default for Specification<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
            includes: self.includes.clone(),
        }
    }
}

impl<T> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("has_criteria", &self.criteria.is_some())
            .field("includes", &self.includes)
            .finish()
    }
}

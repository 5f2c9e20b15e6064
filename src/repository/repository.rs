use crate::specification::Specification;

/// Get the first entity matching a specification.
pub trait GetById<T> {
    /// Returns the first match in collection order, or `None` when nothing
    /// matches. Not finding an entity is not an error.
    fn get_by_id(&self, spec: &Specification<T>) -> Option<&T>;
}

/// List all entities matching a specification.
pub trait ListAll<T> {
    /// Returns every match in collection order. Empty when nothing matches.
    fn list_all(&self, spec: &Specification<T>) -> Vec<&T>;
}

/// Count entities matching a specification.
pub trait Count<T> {
    fn count(&self, spec: &Specification<T>) -> usize;
}

/// Check if any entity matches a specification.
pub trait Exists<T> {
    fn exists(&self, spec: &Specification<T>) -> bool;
}

/// Full read repository trait combining all query capabilities.
pub trait Repository<T>: GetById<T> + ListAll<T> + Count<T> + Exists<T> {}

// Blanket implementation: anything implementing all traits is a Repository
impl<R, T> Repository<T> for R where R: GetById<T> + ListAll<T> + Count<T> + Exists<T> {}

//! Entity - the identity capability shared by every record a repository holds.

use std::fmt;

/// A uniquely identifiable record.
///
/// Identity is carried by composition: each entity type exposes the field that
/// identifies it instead of inheriting from a common base type. Use
/// `#[derive(Entity)]` to implement it from a field marked `#[entity(id)]` or a
/// field named `id`.
///
/// ```
/// use specified_rust::Entity;
///
/// #[derive(Entity)]
/// struct Product {
///     #[entity(id)]
///     sku: String,
///     name: String,
/// }
///
/// let product = Product { sku: "SKU-1".into(), name: "one".into() };
/// assert_eq!(product.id(), "SKU-1");
/// # let _ = product.name;
/// ```
///
/// The derive only accepts structs with named fields:
///
/// ```compile_fail
/// use specified_rust::Entity;
///
/// #[derive(Entity)]
/// struct Pair(u32, String);
/// ```
///
/// ```compile_fail
/// use specified_rust::Entity;
///
/// #[derive(Entity)]
/// struct Marker;
/// ```
///
/// At most one field may be marked as the id:
///
/// ```compile_fail
/// use specified_rust::Entity;
///
/// #[derive(Entity)]
/// struct Product {
///     #[entity(id)]
///     id: u32,
///     #[entity(id)]
///     sku: String,
/// }
/// ```
///
/// `id` is the only supported key:
///
/// ```compile_fail
/// use specified_rust::Entity;
///
/// #[derive(Entity)]
/// struct Product {
///     #[entity(key)]
///     id: u32,
/// }
/// ```
///
/// A struct with neither a marked field nor a field named `id` is rejected:
///
/// ```compile_fail
/// use specified_rust::Entity;
///
/// #[derive(Entity)]
/// struct Product {
///     sku: String,
///     name: String,
/// }
/// ```
pub trait Entity {
    /// The identifier type. Unique within the owning collection.
    type Id: PartialEq + fmt::Debug;

    /// Returns the unique identifier for this entity.
    fn id(&self) -> &Self::Id;
}

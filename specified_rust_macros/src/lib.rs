mod entity;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Entity)] derive macro
// ============================================================================

/// Derive macro for the `Entity` trait.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Debug, Entity)]
/// struct Product {
///     #[entity(id)]
///     pub sku: u32,
///     pub name: String,
/// }
/// ```
///
/// - `#[entity(id)]` marks the field used as the unique identifier.
///   If omitted, defaults to a field named `id`.
/// - The identifier type is the type of that field.
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive_entity(input)
}

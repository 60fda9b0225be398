//! Host item handles and typed job properties.
//!
//! The host owns every item and every property. The router only ever sees
//! borrowed references for the duration of a single lifecycle callback.

use std::{
    any::{TypeId, type_name},
    fmt,
    hash::{Hash, Hasher},
};

/// An opaque handle to a host-managed configurable entity (a job).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Item`",
    label = "missing `Item` implementation",
    note = "Items must expose their short and full names."
)]
pub trait Item: Send + Sync {
    /// The item's short name.
    fn name(&self) -> &str;

    /// The item's full name, unique across the host.
    fn full_name(&self) -> &str;
}

impl<T: Item + ?Sized> Item for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn full_name(&self) -> &str {
        (**self).full_name()
    }
}

impl<T: Item + ?Sized> Item for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn full_name(&self) -> &str {
        (**self).full_name()
    }
}

/// A strongly-typed configuration facet attached to some items.
///
/// # Example
///
/// ```rust,ignore
/// struct TemplateProperty { sync_description: bool }
///
/// impl JobProperty for TemplateProperty {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `JobProperty`",
    label = "must be `Send + Sync + 'static`",
    note = "Job properties are tracked by type and must be thread-safe."
)]
pub trait JobProperty: Send + Sync + 'static {}

/// Typed property extraction, implemented by host item types.
///
/// Must be side-effect free: it is called on every lifecycle event.
pub trait PropertyLookup<P: JobProperty> {
    /// Returns the item's property of type `P`, if it carries one.
    fn property(&self) -> Option<&P>;
}

impl<P: JobProperty, T: PropertyLookup<P> + ?Sized> PropertyLookup<P> for &T {
    fn property(&self) -> Option<&P> {
        (**self).property()
    }
}

/// Runtime tag identifying a property type.
///
/// Equality and hashing use the [`TypeId`] only; the name is kept for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct PropertyKind {
    id: TypeId,
    name: &'static str,
}

impl PropertyKind {
    /// The tag for property type `P`.
    pub fn of<P: JobProperty>() -> Self {
        Self {
            id: TypeId::of::<P>(),
            name: type_name::<P>(),
        }
    }

    /// The fully qualified type name of the property.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The property's type id.
    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for PropertyKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PropertyKind {}

impl Hash for PropertyKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyKind").field(&self.name).finish()
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

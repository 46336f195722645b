//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own - it is defined entirely by its
/// attribute values, and two instances with the same values are equal. The
/// unsaved form draft is the canonical example here: there is no "the" draft,
/// only whatever text currently sits in the fields.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

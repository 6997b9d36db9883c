//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. `Money` and cart lines are value objects; products are
//! entities (see [`crate::Entity`]).

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. A cart line, for instance, is never edited in place: it is
/// created by an add and destroyed by a remove.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money(u64);
///
/// impl ValueObject for Money {}
///
/// assert_eq!(Money(239), Money(239));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

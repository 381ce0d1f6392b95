//! Value object trait: equality by value, not identity.
//!
//! Recipes, stock levels and refill quantities have **no identity**; they are
//! defined entirely by their attribute values.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Refill { water: i64, milk: i64, beans: i64, cups: i64 }
///
/// impl ValueObject for Refill {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Value object trait: equality by value, not identity.
//!
//! Every request, response and nested record of the compute API is a value object:
//! it has **no identity** and is defined entirely by its field values. Two records
//! with the same fields are equal, hash equally and render identically.

use core::any::Any;
use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

/// Contract shared by every generated shape.
///
/// Shapes are produced by [`shape!`](crate::shape) and are:
/// - **Immutable**: fields are private and only readable through getters. To
///   "modify" a record, go through its builder (`to_builder()` / `into_builder()`).
/// - **Compared by value**: `PartialEq`, `Eq` and `Hash` are derived over every
///   field in declaration order. An absent field only equals another absent field.
/// - **Default-absent**: `Default` yields a record with every field absent.
/// - **Renderable**: `Display` renders the present fields only, using wire names.
///
/// ```ignore
/// let a = Tag::builder().key("env").value("prod").build();
/// let b = Tag::builder().key("env").value("prod").build();
/// assert_eq!(a, b);
/// assert_eq!(a.structural_hash(), b.structural_hash());
/// assert_eq!(a.to_string(), "{Key: env,Value: prod}");
/// ```
pub trait ValueObject:
    Clone + Default + PartialEq + Eq + Hash + core::fmt::Debug + core::fmt::Display + 'static
{
    /// Wire name of the shape (e.g. `"DescribeInstancesRequest"`).
    const SHAPE_NAME: &'static str;

    /// Hash of the record's structural value.
    ///
    /// Stable within a process: equal records always produce the same value.
    fn structural_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Whether every field of the record is absent.
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Object-safe view of a shape, for comparing records whose concrete types are
/// only known at runtime.
///
/// Records of different concrete types are never equal, even when their field
/// layouts happen to coincide.
pub trait ErasedShape: Any + core::fmt::Debug {
    fn shape_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    /// Type-checked structural equality.
    fn dyn_eq(&self, other: &dyn ErasedShape) -> bool;
}

impl<T> ErasedShape for T
where
    T: ValueObject,
{
    fn shape_name(&self) -> &'static str {
        T::SHAPE_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn ErasedShape) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

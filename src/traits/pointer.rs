//! Single-level indirection over an owned value.
//!
//! [`Pointer`] is the "reference shape" half of shape reconciliation: it knows
//! how to look through one level of indirection and how to allocate a fresh one.
use crate::types::alloc_type::{Arc, Box};

/// An owning pointer to a single value.
///
/// Implemented for [`Box`] and [`Arc`]. Custom handle types may implement it
/// too; a handle whose [`target`](Pointer::target) is `None` is treated as a
/// null reference and is never reported as a match.
///
/// # Examples
///
/// ```
/// use error_tree::traits::Pointer;
///
/// let boxed = <Box<u8> as Pointer>::from_target(3);
/// assert_eq!(boxed.target(), Some(&3));
/// ```
pub trait Pointer: Sized + 'static {
    /// The pointed-to value type.
    type Target: Clone + 'static;

    /// Returns the pointed-to value, or `None` for a null pointer.
    fn target(&self) -> Option<&Self::Target>;

    /// Allocates a fresh pointer owning `value`.
    fn from_target(value: Self::Target) -> Self;
}

impl<V: Clone + 'static> Pointer for Box<V> {
    type Target = V;

    #[inline]
    fn target(&self) -> Option<&V> {
        Some(&**self)
    }

    #[inline]
    fn from_target(value: V) -> Self {
        Box::new(value)
    }
}

impl<V: Clone + 'static> Pointer for Arc<V> {
    type Target = V;

    #[inline]
    fn target(&self) -> Option<&V> {
        Some(&**self)
    }

    #[inline]
    fn from_target(value: V) -> Self {
        Arc::new(value)
    }
}

//! Requested error shapes.
//!
//! A search asks for an error type `T: Shape`. Besides exact matches, the
//! search may find `T` behind a different level of indirection: a value type
//! is also found inside a `Box<T>` node, and a `Box<V>`/`Arc<V>` is also found
//! as a plain `V` node. [`Shape::classify`] picks which of those applies.
//!
//! # Examples
//!
//! ```
//! use error_tree::traits::Shape;
//! use error_tree::types::StrategyKind;
//! use core::num::ParseIntError;
//!
//! assert_eq!(ParseIntError::classify().kind(), StrategyKind::ValuePrimary);
//! assert_eq!(<Box<ParseIntError>>::classify().kind(), StrategyKind::ReferencePrimary);
//! ```
use core::error::Error;
use core::num::{ParseFloatError, ParseIntError, TryFromIntError};
use core::str::{ParseBoolError, Utf8Error};

use crate::types::alloc_type::{Arc, Box, FromUtf8Error};
use crate::types::Strategy;

/// An error type that can be searched for.
///
/// Implement it with [`impl_shape!`](crate::impl_shape) for owned error types.
/// Pointer shapes (`Box<V>`, `Arc<V>`) are covered by blanket impls.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be searched for in an error tree",
    label = "this type does not implement `Shape`",
    note = "use `impl_shape!(value {Self})` for a cloneable error type"
)]
pub trait Shape: Error + Clone + 'static {
    /// Selects the reconciliation strategy for this shape.
    ///
    /// Must not depend on any particular error value.
    fn classify() -> Strategy<Self>;
}

impl<V: Error + Clone + 'static> Shape for Box<V> {
    #[inline]
    fn classify() -> Strategy<Self> {
        Strategy::reference_primary()
    }
}

impl<V: Error + Clone + 'static> Shape for Arc<V> {
    #[inline]
    fn classify() -> Strategy<Self> {
        Strategy::reference_primary()
    }
}

crate::impl_shape!(
    value core::fmt::Error,
    ParseIntError,
    ParseFloatError,
    ParseBoolError,
    TryFromIntError,
    Utf8Error,
    FromUtf8Error,
);

//! Conversion of search roots into [`Node`]s.
//!
//! Every search entry point accepts `impl IntoRoot`, so callers can pass a
//! reference to their error, a trait object, or an already-built node. An
//! absent root (`None`) is legal and yields an empty walk.
//!
//! # Examples
//!
//! ```
//! use error_tree::traits::IntoRoot;
//! use core::error::Error;
//!
//! let err = "-".parse::<i32>().unwrap_err();
//! let dynamic: &(dyn Error + 'static) = &err;
//!
//! assert!(dynamic.into_root().is_some());
//! assert!(None::<&core::num::ParseIntError>.into_root().is_none());
//! ```
use core::error::Error;

use crate::traits::ErrorTree;
use crate::types::Node;

/// Converts a value into the (possibly absent) root of a cause tree.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as the root of an error tree search",
    label = "this type does not implement `IntoRoot`",
    note = "pass `&err` for an `ErrorTree` type, or `Node::plain(&err)` for any other error"
)]
pub trait IntoRoot<'a> {
    /// Converts `self` into the root node, or `None` if there is no error.
    fn into_root(self) -> Option<Node<'a>>;
}

impl<'a> IntoRoot<'a> for Node<'a> {
    #[inline]
    fn into_root(self) -> Option<Node<'a>> {
        Some(self)
    }
}

impl<'a> IntoRoot<'a> for Option<Node<'a>> {
    #[inline]
    fn into_root(self) -> Option<Node<'a>> {
        self
    }
}

impl<'a, E: ErrorTree> IntoRoot<'a> for &'a E {
    #[inline]
    fn into_root(self) -> Option<Node<'a>> {
        Some(Node::tree(self))
    }
}

impl<'a, E: ErrorTree> IntoRoot<'a> for Option<&'a E> {
    #[inline]
    fn into_root(self) -> Option<Node<'a>> {
        self.map(|error| Node::tree(error))
    }
}

impl<'a> IntoRoot<'a> for &'a dyn ErrorTree {
    #[inline]
    fn into_root(self) -> Option<Node<'a>> {
        Some(Node::tree(self))
    }
}

impl<'a> IntoRoot<'a> for &'a (dyn Error + 'static) {
    #[inline]
    fn into_root(self) -> Option<Node<'a>> {
        Some(Node::plain(self))
    }
}

impl<'a> IntoRoot<'a> for &'a (dyn Error + Send + Sync + 'static) {
    #[inline]
    fn into_root(self) -> Option<Node<'a>> {
        Some(Node::plain(self))
    }
}

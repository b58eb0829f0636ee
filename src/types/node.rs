//! Borrowed handles to the errors of a cause tree.
//!
//! A [`Node`] is what the walker yields and what the matcher inspects. It is
//! either a full [`ErrorTree`] node, which may expose multiple causes and a
//! self-matching routine, or a plain [`core::error::Error`] whose only link is
//! [`Error::source`].
//!
//! # Examples
//!
//! ```
//! use error_tree::Node;
//!
//! let err = "x".parse::<u8>().unwrap_err();
//! let node = Node::plain(&err);
//!
//! assert!(node.downcast_ref::<core::num::ParseIntError>().is_some());
//! assert!(node.single_cause().is_none());
//! ```
use core::error::Error;
use core::fmt;

use crate::traits::{ErrorTree, MultiCause, SelfMatch};

/// A borrowed error inside a cause tree.
///
/// Nodes are cheap to copy and never own the error they point at.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    repr: Repr<'a>,
}

#[derive(Clone, Copy)]
enum Repr<'a> {
    Tree(&'a dyn ErrorTree),
    Plain(&'a (dyn Error + 'static)),
}

impl<'a> Node<'a> {
    /// Wraps an error that exposes the full set of cause capabilities.
    #[inline]
    pub fn tree(error: &'a dyn ErrorTree) -> Self {
        Self { repr: Repr::Tree(error) }
    }

    /// Wraps an arbitrary error. Its cause chain is followed through
    /// [`Error::source`] only.
    ///
    /// # Note
    ///
    /// A plain node never exposes a multi-cause view or a self-matching
    /// routine, and neither do the plain nodes produced for its causes. Use
    /// [`Node::tree`] for errors that implement [`ErrorTree`].
    #[inline]
    pub fn plain(error: &'a (dyn Error + 'static)) -> Self {
        Self { repr: Repr::Plain(error) }
    }

    /// Returns the underlying error as a trait object.
    #[inline]
    pub fn as_error(&self) -> &'a (dyn Error + 'static) {
        match self.repr {
            Repr::Tree(error) => error.as_dyn_error(),
            Repr::Plain(error) => error,
        }
    }

    /// Attempts to view the node as the concrete type `T`.
    ///
    /// This compares the node's dynamic type with `T` exactly; no shape
    /// reconciliation is performed.
    #[inline]
    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&'a T> {
        self.as_error().downcast_ref::<T>()
    }

    /// Returns `true` if the node's dynamic type is exactly `T`.
    #[inline]
    pub fn is<T: Error + 'static>(&self) -> bool {
        self.as_error().is::<T>()
    }

    /// Returns the multi-cause view of this node, if it has one.
    #[inline]
    pub fn multi_cause(&self) -> Option<&'a dyn MultiCause> {
        match self.repr {
            Repr::Tree(error) => error.as_multi_cause(),
            Repr::Plain(_) => None,
        }
    }

    /// Returns the single cause of this node.
    ///
    /// Plain nodes report their [`Error::source`].
    #[inline]
    pub fn single_cause(&self) -> Option<Node<'a>> {
        match self.repr {
            Repr::Tree(error) => error.single_cause(),
            Repr::Plain(error) => error.source().map(Node::plain),
        }
    }

    /// Returns the self-matching routine of this node, if it has one.
    #[inline]
    pub fn self_match(&self) -> Option<&'a dyn SelfMatch> {
        match self.repr {
            Repr::Tree(error) => error.as_self_match(),
            Repr::Plain(_) => None,
        }
    }

    /// Returns `true` if both nodes refer to the same error object.
    #[inline]
    pub fn ptr_eq(a: &Node<'_>, b: &Node<'_>) -> bool {
        core::ptr::addr_eq(a.as_error(), b.as_error())
    }
}

impl<'a, E: ErrorTree> From<&'a E> for Node<'a> {
    #[inline]
    fn from(error: &'a E) -> Self {
        Node::tree(error)
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_error(), f)
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_error(), f)
    }
}

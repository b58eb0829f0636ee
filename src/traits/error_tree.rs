//! Capability interface for errors that take part in a cause tree.
//!
//! Any `'static` error can be searched as a [`Node::plain`] node, following
//! [`Error::source`]. Implementing [`ErrorTree`] additionally lets an error
//! expose several causes, or answer type queries on its own through
//! [`SelfMatch`].
//!
//! # Examples
//!
//! ```
//! use error_tree::traits::{ErrorTree, MultiCause};
//! use error_tree::Node;
//! use core::fmt;
//!
//! #[derive(Debug)]
//! struct Leaf(&'static str);
//!
//! impl fmt::Display for Leaf {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str(self.0)
//!     }
//! }
//!
//! impl core::error::Error for Leaf {}
//! impl ErrorTree for Leaf {}
//!
//! #[derive(Debug)]
//! struct Joined(Vec<Leaf>);
//!
//! impl fmt::Display for Joined {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{} errors", self.0.len())
//!     }
//! }
//!
//! impl core::error::Error for Joined {}
//!
//! impl ErrorTree for Joined {
//!     fn as_multi_cause(&self) -> Option<&dyn MultiCause> {
//!         Some(self)
//!     }
//! }
//!
//! impl MultiCause for Joined {
//!     fn cause_count(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn cause_at(&self, index: usize) -> Option<Node<'_>> {
//!         self.0.get(index).map(Node::from)
//!     }
//! }
//!
//! let joined = Joined(vec![Leaf("a"), Leaf("b")]);
//! let seen: Vec<String> = error_tree::depth_first(&joined).map(|n| n.to_string()).collect();
//! assert_eq!(seen, ["2 errors", "a", "b"]);
//! ```
use core::error::Error;
use core::num::{ParseFloatError, ParseIntError, TryFromIntError};
use core::str::{ParseBoolError, Utf8Error};

use crate::types::alloc_type::{Arc, Box, FromUtf8Error};
use crate::types::{Node, Slot};

/// Conversion to a `'static` error trait object.
///
/// Implemented for every sized `'static` error; it exists so that
/// `dyn ErrorTree` can hand out `&dyn Error` without trait upcasting.
pub trait AsDynError {
    /// Returns `self` as an error trait object.
    fn as_dyn_error(&self) -> &(dyn Error + 'static);
}

impl<E: Error + 'static> AsDynError for E {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

/// An error that exposes its causes and, optionally, a self-matching routine.
///
/// All methods have defaults: a bare `impl ErrorTree for MyError {}` yields a
/// single-cause node that follows [`Error::source`].
///
/// When an error reports both a multi-cause view and a single cause, the
/// multi-cause view wins.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a cause tree node",
    label = "this type does not implement `ErrorTree`",
    note = "implement `ErrorTree` manually or use `impl_error_tree!({Self})`",
    note = "errors that only implement `Error` can be passed as `Node::plain(&err)`"
)]
pub trait ErrorTree: Error + AsDynError + 'static {
    /// Returns the single underlying cause.
    ///
    /// # Note
    ///
    /// The default wraps [`Error::source`] in [`Node::plain`]. A cause reached
    /// that way is searched as a bare error: its multi-cause view and its
    /// self-matching routine are not consulted, even if its type implements
    /// `ErrorTree`. Override this method, or use `impl_error_tree!(Type => field)`,
    /// to keep them.
    #[inline]
    fn single_cause(&self) -> Option<Node<'_>> {
        self.source().map(Node::plain)
    }

    /// Returns the ordered list of underlying causes, if this error has several.
    #[inline]
    fn as_multi_cause(&self) -> Option<&dyn MultiCause> {
        None
    }

    /// Returns the self-matching routine, if this error provides one.
    #[inline]
    fn as_self_match(&self) -> Option<&dyn SelfMatch> {
        None
    }
}

/// Ordered view over several causes.
///
/// Entries may be absent; absent entries are skipped by the walker without
/// disturbing the order of their siblings.
pub trait MultiCause {
    /// Number of entries, absent ones included.
    fn cause_count(&self) -> usize;

    /// Returns the entry at `index`, or `None` if it is absent or out of range.
    fn cause_at(&self, index: usize) -> Option<Node<'_>>;
}

/// Lets an error answer a type query on its own.
///
/// The searcher passes a [`Slot`] shaped for the requested type (or for the
/// boxed/unboxed counterpart of it). An implementation writes a value when it
/// can produce one of the slot's type and returns `true`.
///
/// # Examples
///
/// ```
/// use error_tree::traits::SelfMatch;
/// use error_tree::Slot;
///
/// struct Code(u16);
///
/// impl SelfMatch for Code {
///     fn match_into(&self, slot: &mut Slot<'_>) -> bool {
///         slot.fill(self.0)
///     }
/// }
///
/// let mut out = None::<u16>;
/// assert!(Code(404).match_into(&mut Slot::new(&mut out)));
/// assert_eq!(out, Some(404));
/// ```
pub trait SelfMatch {
    /// Writes a value into `slot` if this error can be viewed as the slot's type.
    ///
    /// Returning `true` without filling the slot counts as a non-match, unless
    /// the slot was handed in already holding a value (as
    /// [`find_into`](crate::find_into) does with its target). That value is
    /// then the result.
    fn match_into(&self, slot: &mut Slot<'_>) -> bool;
}

impl<E: ErrorTree> ErrorTree for Box<E> {
    #[inline]
    fn single_cause(&self) -> Option<Node<'_>> {
        (**self).single_cause()
    }

    #[inline]
    fn as_multi_cause(&self) -> Option<&dyn MultiCause> {
        (**self).as_multi_cause()
    }

    #[inline]
    fn as_self_match(&self) -> Option<&dyn SelfMatch> {
        (**self).as_self_match()
    }
}

impl<E: ErrorTree> ErrorTree for Arc<E> {
    #[inline]
    fn single_cause(&self) -> Option<Node<'_>> {
        (**self).single_cause()
    }

    #[inline]
    fn as_multi_cause(&self) -> Option<&dyn MultiCause> {
        (**self).as_multi_cause()
    }

    #[inline]
    fn as_self_match(&self) -> Option<&dyn SelfMatch> {
        (**self).as_self_match()
    }
}

crate::impl_error_tree!(
    core::fmt::Error,
    ParseIntError,
    ParseFloatError,
    ParseBoolError,
    TryFromIntError,
    Utf8Error,
    FromUtf8Error,
);

#[cfg(feature = "std")]
crate::impl_error_tree!(std::io::Error);

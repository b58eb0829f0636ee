//! Searching cause trees for typed errors.
//!
//! Each entry point walks the tree with [`depth_first`] and stops at the first
//! node the [`Matcher`] accepts. They differ only in how the result is handed
//! back:
//!
//! | Function | Reconciles shapes | Result |
//! |----------|-------------------|--------|
//! | [`find`] | yes | `Option<T>` |
//! | [`find_simple`] | no | `Option<T>` |
//! | [`find_into`] | yes | writes into a target, returns `bool` |
//! | [`find_into_simple`] | no | writes into a target, returns `bool` |
//! | [`locate`] | yes | [`Located<T>`] with position and [`MatchPath`](crate::MatchPath) |
//! | [`locate_simple`] | no | [`Located<T>`] |
//! | [`contains`] | yes | `bool` |
//!
//! The simple variants only accept nodes that are exactly `T` or that fill a
//! `T`-shaped slot through [`SelfMatch`](crate::traits::SelfMatch).
//!
//! # Examples
//!
//! ```
//! use error_tree::{find, find_simple};
//! use core::num::ParseIntError;
//!
//! let err = "".parse::<u16>().unwrap_err();
//!
//! assert_eq!(find::<ParseIntError>(&err), Some(err.clone()));
//! assert_eq!(find::<Box<ParseIntError>>(&err), Some(Box::new(err.clone())));
//! assert_eq!(find_simple::<Box<ParseIntError>>(&err), None);
//! ```
mod matcher;

pub use matcher::{Matcher, Mode};

use crate::traits::{IntoRoot, Shape};
use crate::types::Located;
use crate::walk::depth_first;

/// Finds the first error in the tree that is `T`, possibly after reconciling
/// boxed and owned shapes, and returns it with its position.
pub fn locate<'a, T: Shape>(root: impl IntoRoot<'a>) -> Option<Located<T>> {
    search(root, Matcher::full())
}

/// Like [`locate`], without shape reconciliation.
pub fn locate_simple<'a, T: Shape>(root: impl IntoRoot<'a>) -> Option<Located<T>> {
    search(root, Matcher::simple())
}

/// Finds the first error in the tree that is `T`.
///
/// A node is `T` if its dynamic type is `T`; if it is `T` behind one level of
/// indirection more or less (a `Box<T>` node when `T` is requested, or a `V`
/// node when `Box<V>` is requested); or if its self-matching routine produces
/// a `T`, either directly or through the dual shape.
///
/// Returns `None` if no node matches or if `root` is absent.
#[inline]
pub fn find<'a, T: Shape>(root: impl IntoRoot<'a>) -> Option<T> {
    locate(root).map(Located::into_value)
}

/// Finds the first error in the tree that is exactly `T` or that fills a
/// `T`-shaped slot through its self-matching routine.
#[inline]
pub fn find_simple<'a, T: Shape>(root: impl IntoRoot<'a>) -> Option<T> {
    locate_simple(root).map(Located::into_value)
}

/// Returns `true` if [`find`] would find a `T`.
#[inline]
pub fn contains<'a, T: Shape>(root: impl IntoRoot<'a>) -> bool {
    locate::<T>(root).is_some()
}

/// Finds the first error in the tree that is `T` and writes it into `target`.
///
/// Returns `true` if a match was written. On `false`, `target` is untouched.
/// Matching follows [`find`], except that a self-matching routine sees a slot
/// that already holds the current value of `target`. Its answer is trusted: a
/// routine that returns `true` ends the search, and `target` keeps whatever
/// value is in the slot.
///
/// # Panics
///
/// Panics if `target` is `None`, before the tree is examined.
///
/// # Examples
///
/// ```
/// use error_tree::find_into;
/// use core::num::ParseIntError;
///
/// let err = "q".parse::<u32>().unwrap_err();
/// let mut target: Box<ParseIntError> = Box::new("".parse::<u32>().unwrap_err());
///
/// assert!(find_into(&err, &mut target));
/// assert_eq!(*target, err);
/// ```
#[track_caller]
pub fn find_into<'a, 't, T, S>(root: impl IntoRoot<'a>, target: S) -> bool
where
    T: Shape + 't,
    S: Into<Option<&'t mut T>>,
{
    let target = require_target(target);
    let matcher = Matcher::full().prefilled(target.clone());
    store(target, search(root, matcher))
}

/// Like [`find_into`], without shape reconciliation.
///
/// # Panics
///
/// Panics if `target` is `None`, before the tree is examined.
#[track_caller]
pub fn find_into_simple<'a, 't, T, S>(root: impl IntoRoot<'a>, target: S) -> bool
where
    T: Shape + 't,
    S: Into<Option<&'t mut T>>,
{
    let target = require_target(target);
    let matcher = Matcher::simple().prefilled(target.clone());
    store(target, search(root, matcher))
}

fn search<'a, T: Shape>(root: impl IntoRoot<'a>, mut matcher: Matcher<T>) -> Option<Located<T>> {
    let found = depth_first(root).enumerate().find_map(|(position, node)| {
        matcher.match_node(node).map(|(value, path)| Located { value, position, path })
    });

    #[cfg(feature = "tracing")]
    {
        if let Some(found) = &found {
            tracing::trace!(
                shape = core::any::type_name::<T>(),
                position = found.position,
                path = ?found.path,
                "error found in cause tree"
            );
        }
    }

    found
}

#[track_caller]
fn require_target<'t, T, S: Into<Option<&'t mut T>>>(target: S) -> &'t mut T {
    match target.into() {
        Some(target) => target,
        None => panic!("error-tree: target cannot be None"),
    }
}

fn store<T>(target: &mut T, found: Option<Located<T>>) -> bool {
    match found {
        Some(Located { value, .. }) => {
            *target = value;
            true
        },
        None => false,
    }
}

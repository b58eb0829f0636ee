//! Search nested error cause trees for the first error of a requested type.
//!
//! Errors form a tree: each error may wrap one cause, or several through
//! [`MultiCause`](traits::MultiCause). The search walks that tree depth-first
//! and accepts a node when
//!
//! - its dynamic type is the requested type `T`,
//! - it is `T` behind one level of indirection more or less (a `Box<T>` node
//!   when `T` is requested, a `V` node when `Box<V>` or `Arc<V>` is requested), or
//! - its [`SelfMatch`](traits::SelfMatch) routine produces a `T`, either for a
//!   slot shaped as `T` or for the boxed/unboxed counterpart.
//!
//! The `*_simple` variants skip the indirection reconciliation.
//!
//! # Examples
//!
//! ## Finding an error behind a box
//!
//! ```
//! use error_tree::{find, impl_error_tree, impl_shape};
//! use core::fmt;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct KeySize(usize);
//!
//! impl fmt::Display for KeySize {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "invalid key size {}", self.0)
//!     }
//! }
//!
//! impl core::error::Error for KeySize {}
//! impl_error_tree!(KeySize);
//! impl_shape!(value KeySize);
//!
//! let err = Box::new(KeySize(31));
//! assert_eq!(find::<KeySize>(&err), Some(KeySize(31)));
//! assert_eq!(find::<Box<KeySize>>(&KeySize(31)), Some(Box::new(KeySize(31))));
//! ```
//!
//! ## Following `source()` of plain errors
//!
//! ```
//! use error_tree::{find, Node};
//! use core::error::Error;
//! use core::num::ParseIntError;
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct BadConfig {
//!     cause: ParseIntError,
//! }
//!
//! impl fmt::Display for BadConfig {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("invalid configuration")
//!     }
//! }
//!
//! impl Error for BadConfig {
//!     fn source(&self) -> Option<&(dyn Error + 'static)> {
//!         Some(&self.cause)
//!     }
//! }
//!
//! let err = BadConfig { cause: "x".parse::<u8>().unwrap_err() };
//! assert_eq!(find::<ParseIntError>(Node::plain(&err)), Some(err.cause.clone()));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Macros for implementing the crate traits
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Typed search over cause trees
pub mod search;
/// Capability traits for error nodes and requested shapes
pub mod traits;
/// Nodes, slots, strategies, and search results
pub mod types;
/// Depth-first cause tree traversal
pub mod walk;

pub use search::{contains, find, find_into, find_into_simple, find_simple, locate, locate_simple};
pub use traits::{ErrorTree, IntoRoot, MultiCause, Pointer, SelfMatch, Shape};
pub use types::{classify, Located, MatchPath, Node, Slot, Strategy, StrategyKind};
pub use walk::{depth_first, DepthFirst};

#[doc(hidden)]
pub mod __private {
    pub use crate::types::alloc_type::Box;
}

//! Capability traits of the cause-tree search.
//!
//! - [`ErrorTree`]: errors that expose single or multiple causes and
//!   optionally a [`SelfMatch`] routine
//! - [`Shape`]: types that can be searched for
//! - [`Pointer`]: single-level indirection used to reconcile shapes
//! - [`IntoRoot`]: values accepted as the root of a search
//!
//! # Examples
//!
//! ```
//! use error_tree::traits::{ErrorTree, IntoRoot};
//!
//! let err = "1.2.3".parse::<f32>().unwrap_err();
//! assert!(err.single_cause().is_none());
//! assert!((&err).into_root().is_some());
//! ```
pub mod error_tree;
pub mod into_root;
pub mod pointer;
pub mod shape;

pub use error_tree::{AsDynError, ErrorTree, MultiCause, SelfMatch};
pub use into_root::IntoRoot;
pub use pointer::Pointer;
pub use shape::Shape;

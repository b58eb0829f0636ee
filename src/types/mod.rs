//! Data types of the cause-tree search.
//!
//! - [`Node`]: borrowed handle to one error of the tree
//! - [`Slot`]: type-erased output location for self-matching errors
//! - [`Strategy`]: boxed/owned shape reconciliation for a requested type
//! - [`Located`]: a search result with its position and [`MatchPath`]
//!
//! # Examples
//!
//! ```
//! use error_tree::types::{classify, StrategyKind};
//! use core::num::ParseIntError;
//!
//! assert_eq!(classify::<ParseIntError>().kind(), StrategyKind::ValuePrimary);
//! ```
pub mod alloc_type;
pub mod located;
pub mod node;
pub mod slot;
pub mod strategy;

pub use located::*;
pub use node::*;
pub use slot::*;
pub use strategy::*;

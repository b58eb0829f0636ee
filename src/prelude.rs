//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_tree::prelude::*;
//!
//! let err = "nope".parse::<bool>().unwrap_err();
//! assert!(contains::<core::str::ParseBoolError>(&err));
//! ```

// Macros
pub use crate::{impl_error_tree, impl_shape};

// Search entry points
pub use crate::search::{contains, find, find_into, find_simple, locate};
pub use crate::walk::depth_first;

// Traits and types
pub use crate::traits::{ErrorTree, MultiCause, SelfMatch, Shape};
pub use crate::types::{Node, Slot};

//! Search results that record where and how a match was made.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The step of the matcher that produced a result.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPath {
    /// The node's dynamic type is exactly the requested type.
    Direct,
    /// The node is the requested type behind one level of indirection more
    /// or less.
    Reconciled,
    /// The node's self-matching routine filled a slot of the requested type.
    SelfMatch,
    /// The node's self-matching routine filled a slot of the dual shape.
    AdaptedSelfMatch,
}

/// A found error together with its position in the walk.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T> {
    /// The matched value, as the requested type.
    pub value: T,
    /// Zero-based pre-order index of the matching node.
    pub position: usize,
    /// How the node matched.
    pub path: MatchPath,
}

impl<T> Located<T> {
    /// Discards the location and returns the value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

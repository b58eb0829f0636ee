//! Depth-first traversal of error cause trees.
//!
//! The tree consists of the root error followed by its causes. A node with a
//! [`MultiCause`](crate::traits::MultiCause) view contributes each of its
//! entries in order; otherwise its single cause is followed. Traversal is
//! pre-order: a node is yielded before any of its causes, and a whole subtree
//! is finished before the next sibling is visited.
//!
//! # Examples
//!
//! ```
//! use error_tree::{depth_first, Node};
//!
//! let err = "256".parse::<u8>().unwrap_err();
//! let nodes: Vec<Node<'_>> = depth_first(&err).collect();
//!
//! assert_eq!(nodes.len(), 1);
//! assert!(depth_first(None::<Node<'_>>).next().is_none());
//! ```
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::traits::IntoRoot;
use crate::types::Node;

/// Pending work is kept inline for trees up to this many queued entries.
const INLINE_STACK: usize = 8;

/// Lazy pre-order iterator over a cause tree.
///
/// Created by [`depth_first`]. Only the nodes that are actually consumed are
/// visited; stopping early leaves the rest of the tree untouched.
///
/// There is no cycle detection: an error that is reachable from itself makes
/// the iterator infinite. Cause trees are expected to be finite.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct DepthFirst<'a> {
    stack: SmallVec<[Option<Node<'a>>; INLINE_STACK]>,
    // Last yielded node; its causes are queued on the following call.
    expand: Option<Node<'a>>,
}

/// Walks the cause tree rooted at `root` in depth-first pre-order.
///
/// Absent roots and absent causes are skipped.
#[inline]
pub fn depth_first<'a>(root: impl IntoRoot<'a>) -> DepthFirst<'a> {
    let mut stack = SmallVec::new();
    stack.push(root.into_root());
    DepthFirst { stack, expand: None }
}

impl<'a> DepthFirst<'a> {
    fn push_causes(&mut self, node: Node<'a>) {
        if let Some(causes) = node.multi_cause() {
            // Reverse push so that popping restores the original order.
            for index in (0..causes.cause_count()).rev() {
                self.stack.push(causes.cause_at(index));
            }
        } else if let Some(cause) = node.single_cause() {
            self.stack.push(Some(cause));
        }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Node<'a>> {
        if let Some(node) = self.expand.take() {
            self.push_causes(node);
        }

        while let Some(entry) = self.stack.pop() {
            if let Some(node) = entry {
                self.expand = Some(node);
                return Some(node);
            }
        }

        None
    }
}

impl FusedIterator for DepthFirst<'_> {}

impl core::fmt::Debug for DepthFirst<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DepthFirst")
            .field("pending", &self.stack.len())
            .field("expand", &self.expand)
            .finish()
    }
}

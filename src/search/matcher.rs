//! Per-node type matching.
//!
//! For each node a [`Matcher`] tries, in order:
//!
//! 1. an exact downcast to `T`,
//! 2. shape reconciliation through the [`Strategy`] of `T` (full mode only),
//! 3. the node's [`SelfMatch`] routine with a slot shaped as `T`, then, in full
//!    mode, with a slot of the dual shape.
//!
//! The strategy is classified the first time a node fails the exact downcast
//! and is reused for the rest of the search.
//!
//! A self-matching routine that returns `true` without writing to its slot
//! only matches when the matcher was [prefilled](Matcher::prefilled): the
//! prefilled value is then taken as the result. Otherwise there is no value
//! to hand back and the node does not match.
use crate::macros::trace_event;
use crate::traits::{SelfMatch, Shape};
use crate::types::{classify, MatchPath, Node, Slot, Strategy};

/// Whether a [`Matcher`] reconciles shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Exact match, reconciliation, and self-matching with slot adaptation.
    Full,
    /// Exact match and self-matching with a slot shaped as `T` only.
    Simple,
}

/// Matches nodes of one search against the requested type `T`.
///
/// # Examples
///
/// ```
/// use error_tree::search::Matcher;
/// use error_tree::{MatchPath, Node};
/// use core::num::ParseIntError;
///
/// let err = "z".parse::<i64>().unwrap_err();
/// let mut matcher = Matcher::<Box<ParseIntError>>::full();
///
/// let (found, path) = matcher.match_node(Node::plain(&err)).unwrap();
/// assert_eq!(*found, err);
/// assert_eq!(path, MatchPath::Reconciled);
/// ```
#[derive(Debug, Clone)]
pub struct Matcher<T> {
    mode: Mode,
    strategy: Option<Strategy<T>>,
    prefill: Option<T>,
}

impl<T: Shape> Matcher<T> {
    /// A matcher that reconciles value and pointer shapes.
    #[inline]
    pub fn full() -> Self {
        Self { mode: Mode::Full, strategy: None, prefill: None }
    }

    /// A matcher that only tries exact matches and self-matching.
    #[inline]
    pub fn simple() -> Self {
        Self { mode: Mode::Simple, strategy: None, prefill: None }
    }

    /// Starts every `T`-shaped self-match slot out holding `value`.
    ///
    /// A routine can then inspect the current value through
    /// [`Slot::get_mut`], and returning `true` is trusted even if it
    /// writes nothing.
    #[inline]
    pub fn prefilled(mut self, value: T) -> Self {
        self.prefill = Some(value);
        self
    }

    /// The mode this matcher runs in.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The strategy classified so far, if any node has needed it.
    #[inline]
    pub fn strategy(&self) -> Option<&Strategy<T>> {
        self.strategy.as_ref()
    }

    /// Tries to view `node` as `T`.
    pub fn match_node(&mut self, node: Node<'_>) -> Option<(T, MatchPath)> {
        if let Some(value) = node.downcast_ref::<T>() {
            return Some((value.clone(), MatchPath::Direct));
        }

        let strategy = self.reconciler();

        if let Some(value) = strategy.and_then(|s| s.reconcile(node.as_error())) {
            return Some((value, MatchPath::Reconciled));
        }

        let matcher = node.self_match()?;

        if let Some(value) = fill_slot(matcher, self.prefill.clone()) {
            return Some((value, MatchPath::SelfMatch));
        }

        strategy?.adapt(matcher).map(|value| (value, MatchPath::AdaptedSelfMatch))
    }

    fn reconciler(&mut self) -> Option<Strategy<T>> {
        if self.mode == Mode::Simple {
            return None;
        }

        let strategy = *self.strategy.get_or_insert_with(|| {
            let strategy = classify::<T>();
            trace_event!(
                shape = core::any::type_name::<T>(),
                kind = ?strategy.kind(),
                "classified requested error shape"
            );
            strategy
        });
        Some(strategy)
    }
}

fn fill_slot<T: 'static>(matcher: &dyn SelfMatch, mut value: Option<T>) -> Option<T> {
    if matcher.match_into(&mut Slot::new(&mut value)) {
        value
    } else {
        None
    }
}

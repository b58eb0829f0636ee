//! Shape reconciliation strategies.
//!
//! When a node is not exactly of the requested type `T`, a [`Strategy<T>`]
//! decides whether the node is `T` behind one level of indirection more or
//! less. There are three strategies:
//!
//! | Kind | Requested `T` | Also matches |
//! |------|---------------|--------------|
//! | [`None`](StrategyKind::None) | anything | nothing |
//! | [`ValuePrimary`](StrategyKind::ValuePrimary) | `V` | non-null `Box<V>` nodes |
//! | [`ReferencePrimary`](StrategyKind::ReferencePrimary) | `Box<V>` / `Arc<V>` | `V` nodes, copied into a fresh allocation |
//!
//! The same duality is applied to [`SelfMatch`] implementations: if a matcher
//! does not fill a slot shaped as `T`, it is offered a slot of the dual shape.
//!
//! A strategy is derived from the type alone and never inspects an error value.
use core::error::Error;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::{Pointer, SelfMatch, Shape};
use crate::types::Slot;

/// Which reconciliation a [`Strategy`] performs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// No dual shape is usable.
    None,
    /// `T` is a value; `Box<T>`-like nodes are reconcilable.
    ValuePrimary,
    /// `T` is a pointer; nodes of its target type are reconcilable.
    ReferencePrimary,
}

/// Reconciliation between a requested shape `T` and its dual shape.
///
/// Built once per search by [`classify`]. The strategy is a pair of plain
/// function pointers, so copying it is free.
pub struct Strategy<T> {
    kind: StrategyKind,
    reconcile: fn(&(dyn Error + 'static)) -> Option<T>,
    adapt: fn(&dyn SelfMatch) -> Option<T>,
}

/// Returns the reconciliation strategy of `T`.
#[inline]
pub fn classify<T: Shape>() -> Strategy<T> {
    T::classify()
}

impl<T> Strategy<T> {
    /// A strategy that never matches.
    #[inline]
    pub const fn none() -> Self {
        Self { kind: StrategyKind::None, reconcile: reject_node, adapt: reject_matcher }
    }

    /// Which reconciliation this strategy performs.
    #[inline]
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Tries to view `error` as `T` through the dual shape.
    #[inline]
    pub fn reconcile(&self, error: &(dyn Error + 'static)) -> Option<T> {
        (self.reconcile)(error)
    }

    /// Offers `matcher` a slot of the dual shape and converts what it writes.
    #[inline]
    pub fn adapt(&self, matcher: &dyn SelfMatch) -> Option<T> {
        (self.adapt)(matcher)
    }
}

impl<T: Clone + 'static> Strategy<T> {
    /// `T` is requested by value; nodes of pointer type `P` to `T` match.
    ///
    /// A pointer node whose target is null does not match.
    #[inline]
    pub fn value_primary<P>() -> Self
    where
        P: Pointer<Target = T> + Error,
    {
        Self {
            kind: StrategyKind::ValuePrimary,
            reconcile: deref_pointer_node::<P>,
            adapt: adapt_pointer_slot::<P>,
        }
    }
}

impl<T> Strategy<T>
where
    T: Pointer,
    T::Target: Error,
{
    /// `T` is requested as a pointer; nodes of `T::Target` match and are
    /// copied into a freshly allocated `T`.
    #[inline]
    pub fn reference_primary() -> Self {
        Self {
            kind: StrategyKind::ReferencePrimary,
            reconcile: box_value_node::<T>,
            adapt: adapt_value_slot::<T>,
        }
    }
}

impl<T> Clone for Strategy<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Strategy<T> {}

impl<T> fmt::Debug for Strategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy")
            .field("kind", &self.kind)
            .field("shape", &core::any::type_name::<T>())
            .finish()
    }
}

fn reject_node<T>(_: &(dyn Error + 'static)) -> Option<T> {
    None
}

fn reject_matcher<T>(_: &dyn SelfMatch) -> Option<T> {
    None
}

fn deref_pointer_node<P>(error: &(dyn Error + 'static)) -> Option<P::Target>
where
    P: Pointer + Error,
{
    error.downcast_ref::<P>()?.target().cloned()
}

fn adapt_pointer_slot<P: Pointer>(matcher: &dyn SelfMatch) -> Option<P::Target> {
    // Matchers written for the pointer form fill an `Option<P>`.
    let mut pointer: Option<P> = None;
    if !matcher.match_into(&mut Slot::new(&mut pointer)) {
        return None;
    }
    pointer.as_ref()?.target().cloned()
}

fn box_value_node<P>(error: &(dyn Error + 'static)) -> Option<P>
where
    P: Pointer,
    P::Target: Error,
{
    error.downcast_ref::<P::Target>().map(|value| P::from_target(value.clone()))
}

fn adapt_value_slot<P: Pointer>(matcher: &dyn SelfMatch) -> Option<P> {
    let mut value: Option<P::Target> = None;
    if !matcher.match_into(&mut Slot::new(&mut value)) {
        return None;
    }
    value.map(P::from_target)
}

//! Type-erased output location handed to self-matching errors.
//!
//! A [`Slot`] stands for "somewhere a value of some type can be written". The
//! searcher decides the type; the [`SelfMatch`](crate::traits::SelfMatch)
//! implementation inspects it and writes a value only when it knows how to
//! produce one of that type.
//!
//! # Examples
//!
//! ```
//! use error_tree::Slot;
//!
//! let mut out: Option<u32> = None;
//! let mut slot = Slot::new(&mut out);
//!
//! assert!(slot.is::<u32>());
//! assert!(!slot.fill("wrong type"));
//! assert!(slot.fill(7u32));
//! assert_eq!(out, Some(7));
//! ```
use core::any::Any;
use core::fmt;

/// Mutable, type-erased location that holds an `Option<U>` for some `U`.
pub struct Slot<'a> {
    inner: &'a mut dyn Any,
}

impl<'a> Slot<'a> {
    /// Creates a slot that accepts values of type `U`.
    #[inline]
    pub fn new<U: 'static>(target: &'a mut Option<U>) -> Self {
        Self { inner: target }
    }

    /// Returns `true` if the slot accepts values of type `U`.
    #[inline]
    pub fn is<U: 'static>(&self) -> bool {
        self.inner.is::<Option<U>>()
    }

    /// Returns the typed location if the slot accepts values of type `U`.
    #[inline]
    pub fn get_mut<U: 'static>(&mut self) -> Option<&mut Option<U>> {
        self.inner.downcast_mut::<Option<U>>()
    }

    /// Writes `value` if the slot accepts values of type `U`.
    ///
    /// Returns whether the value was written. A rejected value is dropped.
    #[inline]
    pub fn fill<U: 'static>(&mut self, value: U) -> bool {
        match self.get_mut::<U>() {
            Some(target) => {
                *target = Some(value);
                true
            },
            None => false,
        }
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").finish_non_exhaustive()
    }
}

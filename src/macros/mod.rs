/// Implements [`ErrorTree`](crate::traits::ErrorTree) for one or more error
/// types.
///
/// - `Type` - the default capabilities: the single cause is
///   [`Error::source`](core::error::Error::source), wrapped as a plain node,
///   and there is no multi-cause view or self-matching routine.
/// - `Type => field` - the single cause is `self.field`, kept as a full
///   [`ErrorTree`](crate::traits::ErrorTree) node. The field type must itself
///   implement `ErrorTree`.
///
/// # Note
///
/// A cause reached through `source()` is a plain node, so its own causes
/// beyond `source()` and its self-matching routine are not seen. Use the
/// `=> field` form when the wrapped error is a multi-cause or self-matching
/// error.
///
/// # Examples
///
/// ```
/// use error_tree::impl_error_tree;
/// use core::fmt;
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("timed out")
///     }
/// }
///
/// impl core::error::Error for Timeout {}
///
/// #[derive(Debug)]
/// struct Request(Timeout);
///
/// impl fmt::Display for Request {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("request failed")
///     }
/// }
///
/// impl core::error::Error for Request {
///     fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
///         Some(&self.0)
///     }
/// }
///
/// impl_error_tree!(Timeout);
/// impl_error_tree!(Request => 0);
///
/// assert_eq!(error_tree::depth_first(&Timeout).count(), 1);
/// assert_eq!(error_tree::depth_first(&Request(Timeout)).count(), 2);
/// ```
#[macro_export]
macro_rules! impl_error_tree {
    ($($type:ty => $field:tt),+ $(,)?) => {
        $(
            impl $crate::traits::ErrorTree for $type {
                #[inline]
                fn single_cause(&self) -> Option<$crate::types::Node<'_>> {
                    Some($crate::types::Node::tree(&self.$field))
                }
            }
        )+
    };
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::traits::ErrorTree for $type {}
        )+
    };
}

/// Implements [`Shape`](crate::traits::Shape) for error types, selecting how a
/// search reconciles boxed and owned forms of them.
///
/// - `value T` - `T` is requested by value; `Box<T>` nodes are found too.
/// - `opaque T` - only exact `T` nodes (and self-matching errors) are found.
///
/// `Box<T>` and `Arc<T>` are already shapes for every `T: Error + Clone`.
///
/// # Examples
///
/// ```
/// use error_tree::{impl_error_tree, impl_shape};
/// use core::fmt;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct NotFound(u32);
///
/// impl fmt::Display for NotFound {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "record {} not found", self.0)
///     }
/// }
///
/// impl core::error::Error for NotFound {}
///
/// impl_error_tree!(NotFound);
/// impl_shape!(value NotFound);
///
/// let boxed = Box::new(NotFound(7));
/// assert_eq!(error_tree::find::<NotFound>(&boxed), Some(NotFound(7)));
/// ```
#[macro_export]
macro_rules! impl_shape {
    (value $($type:ty),+ $(,)?) => {
        $(
            impl $crate::traits::Shape for $type {
                #[inline]
                fn classify() -> $crate::types::Strategy<Self> {
                    $crate::types::Strategy::value_primary::<$crate::__private::Box<Self>>()
                }
            }
        )+
    };
    (opaque $($type:ty),+ $(,)?) => {
        $(
            impl $crate::traits::Shape for $type {
                #[inline]
                fn classify() -> $crate::types::Strategy<Self> {
                    $crate::types::Strategy::none()
                }
            }
        )+
    };
}

/// Emits a `tracing` event at trace level when the `tracing` feature is on.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use trace_event;

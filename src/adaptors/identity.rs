use crate::Transducer;

/// A [`Transducer`] passing every item through unchanged.
///
/// This `struct` is created by [`identity()`]. See its documentation for more.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

/// Creates a [`Transducer`] that hands back the downstream transformer as is.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, identity};
///
/// assert_eq!(identity().eager(["a", "b"]), ["a", "b"]);
/// ```
#[inline]
pub const fn identity() -> Identity {
    Identity
}

impl<R> Transducer<R> for Identity {
    type Transformer = R;

    #[inline]
    fn transform(self, downstream: R) -> R {
        downstream
    }
}

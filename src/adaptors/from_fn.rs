use std::fmt::Debug;

use crate::Transducer;

/// A [`Transducer`] made of a closure from a transformer to another.
///
/// This `struct` is created by [`from_fn()`]. See its documentation for more.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Lifts a closure wrapping a downstream transformer into a [`Transducer`].
///
/// Handy to plug a hand-written [`Transformer`](crate::Transformer) into a
/// [`compose!`](crate::compose) chain.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, from_fn, map, take};
///
/// let xf = compose!(map(|x: i32| x * 2), from_fn(|r| take(2).transform(r)));
/// assert_eq!(xf.eager([5, 6, 7]), [10, 12]);
/// ```
#[inline]
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn { f }
}

impl<F, R, R2> Transducer<R> for FromFn<F>
where
    F: FnOnce(R) -> R2,
{
    type Transformer = R2;

    #[inline]
    fn transform(self, downstream: R) -> R2 {
        (self.f)(downstream)
    }
}

impl<F> Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

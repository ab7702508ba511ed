use std::{marker::PhantomData, ops::ControlFlow};

use crate::{Step, Transformer, assert_transformer};

/// A terminal [`Transformer`] keeping the most recent item it receives.
///
/// Its accumulator is `None` until an item arrives.
/// This transformer corresponds to [`Iterator::last()`].
///
/// # Examples
///
/// ```
/// use transducers::{Last, drop_while, transduce1};
///
/// assert_eq!(transduce1(drop_while(|x: &i32| *x < 10), Last::new(), [1, 2, 3]), None);
/// assert_eq!(transduce1(drop_while(|x: &i32| *x < 2), Last::new(), [1, 2, 3]), Some(3));
/// ```
pub struct Last<T> {
    _marker: PhantomData<fn(T)>,
}

impl<T> Last<T> {
    /// Creates a new instance of this transformer.
    #[inline]
    pub const fn new() -> Self {
        assert_transformer::<_, T>(Last {
            _marker: PhantomData,
        })
    }
}

impl<T> Default for Last<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Last<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Last<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Last").finish()
    }
}

impl<T> Transformer<T> for Last<T> {
    type Acc = Option<T>;

    #[inline]
    fn init(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn step(&mut self, _: Option<T>, item: T) -> Step<Option<T>> {
        ControlFlow::Continue(Some(item))
    }

    #[inline]
    fn complete(&mut self, acc: Option<T>) -> Option<T> {
        acc
    }
}

use std::ops::ControlFlow;

use crate::{Step, Transformer, assert_transformer};

/// A terminal [`Transformer`] that counts the items it receives.
///
/// Its accumulator is a [`usize`] starting at `0`.
///
/// # Overflow Behavior
///
/// This transformer does no guarding against overflows, so feeding it more than
/// [`usize::MAX`] items either produces the wrong result or panics.
/// This is similar to [`Iterator::count()`].
///
/// # Examples
///
/// ```
/// use transducers::{Count, filter, transduce1};
///
/// let n = transduce1(filter(|c: &char| c.is_uppercase()), Count::new(), "HeLLo".chars());
/// assert_eq!(n, 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl Count {
    /// Creates a new instance of this transformer.
    #[inline]
    pub const fn new() -> Self {
        assert_transformer::<_, ()>(Count)
    }
}

impl<T> Transformer<T> for Count {
    type Acc = usize;

    #[inline]
    fn init(&mut self) -> usize {
        0
    }

    #[inline]
    fn step(&mut self, acc: usize, _: T) -> Step<usize> {
        ControlFlow::Continue(acc + 1)
    }

    #[inline]
    fn complete(&mut self, acc: usize) -> usize {
        acc
    }
}

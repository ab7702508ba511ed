use std::{fmt::Debug, marker::PhantomData, ops::ControlFlow};

use crate::{Step, Transducer, Transformer};

/// A [`Transducer`] dropping the last item.
///
/// This `struct` is created by [`initial()`]. See its documentation for more.
pub struct Initial<T> {
    _marker: PhantomData<fn(T)>,
}

/// Creates a [`Transducer`] passing downstream every item but the last one.
///
/// Each item is held back until the next one arrives. The one still held when the
/// reduction completes is discarded, so a source with zero or one item yields nothing.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, initial};
///
/// assert_eq!(initial().eager([1, 2, 3]), [1, 2]);
/// assert_eq!(initial().eager([1]), Vec::<i32>::new());
/// ```
#[inline]
pub const fn initial<T>() -> Initial<T> {
    Initial {
        _marker: PhantomData,
    }
}

impl<T, R> Transducer<R> for Initial<T> {
    type Transformer = InitialTransformer<T, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        InitialTransformer {
            downstream,
            held: None,
        }
    }
}

/// The [`Transformer`] built by [`Initial`].
#[derive(Clone)]
pub struct InitialTransformer<T, R> {
    downstream: R,
    held: Option<T>,
}

impl<T, R: Transformer<T>> Transformer<T> for InitialTransformer<T, R> {
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        match self.held.replace(item) {
            Some(previous) => self.downstream.step(acc, previous),
            None => ControlFlow::Continue(acc),
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.held = None;
        self.downstream.complete(acc)
    }
}

impl<T> Clone for Initial<T> {
    #[inline]
    fn clone(&self) -> Self {
        initial()
    }
}

impl<T> Copy for Initial<T> {}

impl<T> Debug for Initial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Initial").finish()
    }
}

impl<T: Debug, R: Debug> Debug for InitialTransformer<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitialTransformer")
            .field("downstream", &self.downstream)
            .field("held", &self.held)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::initial;
    use crate::test_utils::assert_all_ways;

    #[test]
    fn short_sources_yield_nothing() {
        assert_all_ways(initial::<char>(), &[], &[]);
        assert_all_ways(initial::<char>(), &['x'], &[]);
        assert_all_ways(initial::<char>(), &['x', 'y'], &['x']);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::initial;
    use crate::test_utils::check_all_ways;

    proptest! {
        #[test]
        fn initial_like_slicing(input in propvec(any::<i32>(), ..64)) {
            let expected = &input[..input.len().saturating_sub(1)];
            check_all_ways(initial(), &input, expected)?;
        }
    }
}

use std::fmt::Debug;

use crate::{Step, Transducer, Transformer, reduced};

/// A [`Transducer`] stopping the reduction at the first item failing a predicate.
///
/// This `struct` is created by [`take_while()`]. See its documentation for more.
#[derive(Clone)]
pub struct TakeWhile<F> {
    pred: F,
}

/// Creates a [`Transducer`] passing items downstream while `pred` returns `true`.
///
/// The first item for which `pred` returns `false` is dropped and the reduction stops.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, take_while};
///
/// assert_eq!(take_while(|x: &i32| *x < 3).eager([1, 2, 3, 1]), [1, 2]);
/// ```
#[inline]
pub fn take_while<F>(pred: F) -> TakeWhile<F> {
    TakeWhile { pred }
}

impl<F, R> Transducer<R> for TakeWhile<F> {
    type Transformer = TakeWhileTransformer<F, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        TakeWhileTransformer {
            downstream,
            pred: self.pred,
        }
    }
}

/// The [`Transformer`] built by [`TakeWhile`].
#[derive(Clone)]
pub struct TakeWhileTransformer<F, R> {
    downstream: R,
    pred: F,
}

impl<T, F, R> Transformer<T> for TakeWhileTransformer<F, R>
where
    F: FnMut(&T) -> bool,
    R: Transformer<T>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if (self.pred)(&item) {
            self.downstream.step(acc, item)
        } else {
            reduced(acc)
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

impl<F> Debug for TakeWhile<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeWhile").finish_non_exhaustive()
    }
}

impl<F, R: Debug> Debug for TakeWhileTransformer<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeWhileTransformer")
            .field("downstream", &self.downstream)
            .finish()
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::take_while;
    use crate::test_utils::check_all_ways;

    proptest! {
        #[test]
        fn take_while_like_iterator(input in propvec(any::<i8>(), ..64), bound in any::<i8>()) {
            let pred = |x: &i8| *x <= bound;
            let expected: Vec<i8> = input.iter().copied().take_while(pred).collect();
            check_all_ways(take_while(pred), &input, &expected)?;
        }
    }
}

use std::{fmt::Debug, ops::ControlFlow};

use crate::{Step, Transducer, Transformer};

/// A [`Transducer`] keeping only the items satisfying a predicate.
///
/// This `struct` is created by [`filter()`]. See its documentation for more.
#[derive(Clone)]
pub struct Filter<F> {
    pred: F,
}

/// Creates a [`Transducer`] passing an item downstream only if `pred` returns `true`
/// for it.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, filter};
///
/// assert_eq!(filter(|x: &i32| *x > 1).eager([3, 1, 2]), [3, 2]);
/// ```
#[inline]
pub fn filter<F>(pred: F) -> Filter<F> {
    Filter { pred }
}

impl<F, R> Transducer<R> for Filter<F> {
    type Transformer = FilterTransformer<F, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        FilterTransformer {
            downstream,
            pred: self.pred,
            keep: true,
        }
    }
}

/// A [`Transducer`] dropping the items satisfying a predicate.
///
/// This `struct` is created by [`remove()`]. See its documentation for more.
#[derive(Clone)]
pub struct Remove<F> {
    pred: F,
}

/// Creates a [`Transducer`] passing an item downstream only if `pred` returns `false`
/// for it. This is the complement of [`filter()`].
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, remove};
///
/// assert_eq!(remove(|x: &i32| *x > 1).eager([3, 1, 2]), [1]);
/// ```
#[inline]
pub fn remove<F>(pred: F) -> Remove<F> {
    Remove { pred }
}

impl<F, R> Transducer<R> for Remove<F> {
    type Transformer = FilterTransformer<F, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        FilterTransformer {
            downstream,
            pred: self.pred,
            keep: false,
        }
    }
}

/// The [`Transformer`] built by [`Filter`] and [`Remove`].
#[derive(Clone)]
pub struct FilterTransformer<F, R> {
    downstream: R,
    pred: F,
    // What the predicate must answer for the item to pass.
    keep: bool,
}

impl<T, F, R> Transformer<T> for FilterTransformer<F, R>
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
        if (self.pred)(&item) == self.keep {
            self.downstream.step(acc, item)
        } else {
            ControlFlow::Continue(acc)
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

impl<F> Debug for Filter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}

impl<F> Debug for Remove<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Remove").finish_non_exhaustive()
    }
}

impl<F, R: Debug> Debug for FilterTransformer<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterTransformer")
            .field("downstream", &self.downstream)
            .field("keep", &self.keep)
            .finish()
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::test_utils::check_all_ways;
    use crate::{filter, remove};

    proptest! {
        #[test]
        fn filter_and_remove_split_the_input(
            input in propvec(any::<i32>(), ..64),
            modulus in 1..5_i32,
        ) {
            let pred = |x: &i32| x.rem_euclid(modulus) == 0;
            let (kept, removed): (Vec<i32>, Vec<i32>) =
                input.iter().copied().partition(|x| pred(x));

            check_all_ways(filter(pred), &input, &kept)?;
            check_all_ways(remove(pred), &input, &removed)?;
        }
    }
}

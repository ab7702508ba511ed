use std::{fmt::Debug, ops::ControlFlow};

use crate::{Step, Transducer, Transformer};

/// A [`Transducer`] skipping items while a predicate holds.
///
/// This `struct` is created by [`drop_while()`]. See its documentation for more.
#[derive(Clone)]
pub struct DropWhile<F> {
    pred: F,
}

/// Creates a [`Transducer`] suppressing items while `pred` returns `true`, then passing
/// the first item for which it returns `false` and everything after it downstream.
///
/// `pred` is not called anymore once it has returned `false`.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, drop_while};
///
/// assert_eq!(drop_while(|x: &i32| *x < 3).eager([1, 3, 1]), [3, 1]);
/// ```
#[inline]
pub fn drop_while<F>(pred: F) -> DropWhile<F> {
    DropWhile { pred }
}

impl<F, R> Transducer<R> for DropWhile<F> {
    type Transformer = DropWhileTransformer<F, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        DropWhileTransformer {
            downstream,
            pred: self.pred,
            dropping: true,
        }
    }
}

/// The [`Transformer`] built by [`DropWhile`].
#[derive(Clone)]
pub struct DropWhileTransformer<F, R> {
    downstream: R,
    pred: F,
    dropping: bool,
}

impl<T, F, R> Transformer<T> for DropWhileTransformer<F, R>
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
        if self.dropping && (self.pred)(&item) {
            return ControlFlow::Continue(acc);
        }

        self.dropping = false;
        self.downstream.step(acc, item)
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

impl<F> Debug for DropWhile<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropWhile").finish_non_exhaustive()
    }
}

impl<F, R: Debug> Debug for DropWhileTransformer<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropWhileTransformer")
            .field("downstream", &self.downstream)
            .field("dropping", &self.dropping)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::drop_while;
    use crate::test_utils::assert_all_ways;

    #[test]
    fn predicate_retires_after_first_false() {
        let calls = Cell::new(0);
        let xf = drop_while(|x: &i32| {
            calls.set(calls.get() + 1);
            *x < 0
        });

        // Each of the three runs calls the predicate for -1 and 2 only.
        assert_all_ways(xf, &[-1, 2, -3, 4], &[2, -3, 4]);
        assert_eq!(calls.get(), 6);
    }
}

use std::fmt::Debug;

use crate::{Step, Transducer, Transformer, ensure_reduced, reduced};

/// A [`Transducer`] stopping the reduction after the first `n` items.
///
/// This `struct` is created by [`take()`]. See its documentation for more.
#[derive(Debug, Clone, Copy)]
pub struct Take {
    n: usize,
}

/// Creates a [`Transducer`] passing the first `n` items downstream, then stopping the
/// reduction.
///
/// The reduction stops right after the `n`-th item is stepped, so the source is never
/// pulled past it. `take(0)` stops at the first item without passing it.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, take};
///
/// assert_eq!(take(2).eager(1..), [1, 2]);
/// assert_eq!(take(0).eager(1..), Vec::<i32>::new());
/// ```
#[inline]
pub const fn take(n: usize) -> Take {
    Take { n }
}

impl<R> Transducer<R> for Take {
    type Transformer = TakeTransformer<R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        TakeTransformer {
            downstream,
            remaining: self.n,
        }
    }
}

/// The [`Transformer`] built by [`Take`].
#[derive(Debug, Clone)]
pub struct TakeTransformer<R> {
    downstream: R,
    remaining: usize,
}

impl<T, R: Transformer<T>> Transformer<T> for TakeTransformer<R> {
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        // Only reachable with `take(0)` or a driver that ignored the stop signal.
        if self.remaining == 0 {
            return reduced(acc);
        }

        self.remaining -= 1;
        let step = self.downstream.step(acc, item);
        if self.remaining == 0 {
            ensure_reduced(step).into_step()
        } else {
            step
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use crate::{Append, Transducer, Transformer, is_reduced, take};

    #[test]
    fn stops_on_the_last_item() {
        let mut t = take(2).transform(Append::<Vec<i32>>::new());

        let step = t.step(vec![], 1);
        assert_eq!(step, ControlFlow::Continue(vec![1]));

        let step = t.step(vec![1], 2);
        assert!(is_reduced(&step));

        // Past the limit, nothing reaches downstream.
        let step = t.step(vec![1, 2], 3);
        assert_eq!(crate::unreduced(step), [1, 2]);
    }
}

use std::ops::ControlFlow;

use crate::{Step, Transducer, Transformer};

/// A [`Transducer`] skipping the first `n` items.
///
/// This `struct` is created by [`drop()`]. See its documentation for more.
#[derive(Debug, Clone, Copy)]
pub struct DropFirst {
    n: usize,
}

/// Creates a [`Transducer`] suppressing the first `n` items and passing the rest
/// downstream.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, drop};
///
/// assert_eq!(drop(2).eager([1, 2, 3]), [3]);
/// assert_eq!(drop(5).eager([1, 2, 3]), Vec::<i32>::new());
/// ```
#[inline]
pub const fn drop(n: usize) -> DropFirst {
    DropFirst { n }
}

impl<R> Transducer<R> for DropFirst {
    type Transformer = DropFirstTransformer<R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        DropFirstTransformer {
            downstream,
            remaining: self.n,
        }
    }
}

/// The [`Transformer`] built by [`DropFirst`].
#[derive(Debug, Clone)]
pub struct DropFirstTransformer<R> {
    downstream: R,
    remaining: usize,
}

impl<T, R: Transformer<T>> Transformer<T> for DropFirstTransformer<R> {
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;
            ControlFlow::Continue(acc)
        } else {
            self.downstream.step(acc, item)
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

use std::ops::ControlFlow;

use crate::{Step, Transducer, Transformer};

/// A [`Transducer`] dropping the first item.
///
/// This `struct` is created by [`tail()`]. See its documentation for more.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tail;

/// Creates a [`Transducer`] suppressing the first item and passing the rest downstream.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, tail};
///
/// assert_eq!(tail().eager("abc".chars()), ['b', 'c']);
/// ```
#[inline]
pub const fn tail() -> Tail {
    Tail
}

impl<R> Transducer<R> for Tail {
    type Transformer = TailTransformer<R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        TailTransformer {
            downstream,
            started: false,
        }
    }
}

/// The [`Transformer`] built by [`Tail`].
#[derive(Debug, Clone)]
pub struct TailTransformer<R> {
    downstream: R,
    started: bool,
}

impl<T, R: Transformer<T>> Transformer<T> for TailTransformer<R> {
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.started {
            self.downstream.step(acc, item)
        } else {
            self.started = true;
            ControlFlow::Continue(acc)
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::tail;
    use crate::test_utils::check_all_ways;

    proptest! {
        #[test]
        fn tail_like_skip_one(input in propvec(any::<i32>(), ..64)) {
            let expected: Vec<i32> = input.iter().copied().skip(1).collect();
            check_all_ways(tail(), &input, &expected)?;
        }
    }
}

use crate::{Step, Transducer, Transformer};

/// A [`Transducer`] flattening one level of nesting.
///
/// This `struct` is created by [`cat()`]. See its documentation for more.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

/// Creates a [`Transducer`] treating each item as a collection and passing its elements
/// downstream one by one.
///
/// If downstream stops the reduction inside a collection, the remaining elements of
/// that collection are not pulled and the stop signal reaches the driver untouched.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, cat, take};
///
/// let xf = compose!(cat(), take(3));
/// assert_eq!(xf.eager([vec![1, 2], vec![], vec![3, 4]]), [1, 2, 3]);
/// ```
#[inline]
pub const fn cat() -> Cat {
    Cat
}

impl<R> Transducer<R> for Cat {
    type Transformer = CatTransformer<R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        CatTransformer { downstream }
    }
}

/// The [`Transformer`] built by [`Cat`].
#[derive(Debug, Clone)]
pub struct CatTransformer<R> {
    downstream: R,
}

impl<C, R> Transformer<C> for CatTransformer<R>
where
    C: IntoIterator,
    R: Transformer<C::Item>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R::Acc, item: C) -> Step<R::Acc> {
        item.into_iter()
            .try_fold(acc, |acc, x| self.downstream.step(acc, x))
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::prelude::*;
    use crate::test_utils::assert_all_ways;
    use crate::{cat, map, take};

    #[test]
    fn stop_inside_a_collection() {
        let pulled = Cell::new(0);
        let counter = &pulled;
        let xf = compose!(
            map(move |n: usize| (0..n).inspect(move |_| counter.set(counter.get() + 1))),
            cat(),
            take(4),
        );

        let out: Vec<usize> = xf.eager([3, 3, 3]);
        assert_eq!(out, [0, 1, 2, 0]);
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn strings_are_collections_of_chars() {
        let xf = compose!(map(str::chars), cat());
        assert_all_ways(xf, &["ab", "", "c"], &['a', 'b', 'c']);
    }
}

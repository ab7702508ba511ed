use std::{collections::HashSet, fmt::Debug, hash::Hash, marker::PhantomData, ops::ControlFlow};

use crate::{Step, Transducer, Transformer};

/// A [`Transducer`] letting only the first occurrence of each item through.
///
/// This `struct` is created by [`distinct()`]. See its documentation for more.
pub struct Distinct<T> {
    _marker: PhantomData<fn(T)>,
}

/// Creates a [`Transducer`] passing an item downstream only the first time it is seen
/// during a reduction. Items keep the order of their first occurrence.
///
/// Every distinct item is remembered until the reduction ends. See [`dedupe()`](crate::dedupe)
/// to only drop consecutive duplicates.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, distinct};
///
/// assert_eq!(distinct().eager([1, 2, 1, 3, 2]), [1, 2, 3]);
/// ```
#[inline]
pub const fn distinct<T>() -> Distinct<T> {
    Distinct {
        _marker: PhantomData,
    }
}

impl<T, R> Transducer<R> for Distinct<T> {
    type Transformer = DistinctTransformer<T, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        DistinctTransformer {
            downstream,
            seen: HashSet::new(),
        }
    }
}

/// The [`Transformer`] built by [`Distinct`].
pub struct DistinctTransformer<T, R> {
    downstream: R,
    seen: HashSet<T>,
}

impl<T, R> Transformer<T> for DistinctTransformer<T, R>
where
    T: Eq + Hash + Clone,
    R: Transformer<T>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.seen.insert(item.clone()) {
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

impl<T> Clone for Distinct<T> {
    #[inline]
    fn clone(&self) -> Self {
        distinct()
    }
}

impl<T> Copy for Distinct<T> {}

impl<T> Debug for Distinct<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Distinct").finish()
    }
}

impl<T: Debug, R: Debug> Debug for DistinctTransformer<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistinctTransformer")
            .field("downstream", &self.downstream)
            .field("seen", &self.seen)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::distinct;
    use crate::test_utils::{Value, assert_all_ways, values};

    #[test]
    fn mixed_values() {
        let input = values![true, false, true, true, false, null, null, 1_i64, 1_i64, "true"];
        let expected = values![true, false, null, 1_i64, "true"];

        assert_all_ways(distinct::<Value>(), &input, &expected);
    }

    #[test]
    fn state_is_per_application() {
        let xf = distinct();
        let first: Vec<u8> = crate::into(vec![], xf, [1, 1, 2]);
        let second: Vec<u8> = crate::into(vec![], xf, [2, 1]);

        assert_eq!(first, [1, 2]);
        assert_eq!(second, [2, 1]);
    }
}

#[cfg(test)]
mod proptests {
    use itertools::Itertools;
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::distinct;
    use crate::test_utils::check_all_ways;

    proptest! {
        #[test]
        fn distinct_like_unique(input in propvec(0..16_u8, ..64)) {
            let expected: Vec<u8> = input.iter().copied().unique().collect();
            check_all_ways(distinct(), &input, &expected)?;
        }
    }
}

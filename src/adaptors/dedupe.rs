use std::{fmt::Debug, marker::PhantomData, ops::ControlFlow};

use crate::{Step, Transducer, Transformer};

/// A [`Transducer`] dropping consecutive duplicates.
///
/// This `struct` is created by [`dedupe()`]. See its documentation for more.
pub struct Dedupe<T> {
    _marker: PhantomData<fn(T)>,
}

/// Creates a [`Transducer`] passing an item downstream only if it differs from the item
/// right before it.
///
/// Unlike [`distinct()`](crate::distinct), an item equal to an earlier but not
/// immediately preceding one goes through.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, dedupe};
///
/// assert_eq!(dedupe().eager("aabaa".chars()), ['a', 'b', 'a']);
/// ```
#[inline]
pub const fn dedupe<T>() -> Dedupe<T> {
    Dedupe {
        _marker: PhantomData,
    }
}

impl<T, R> Transducer<R> for Dedupe<T> {
    type Transformer = DedupeTransformer<T, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        DedupeTransformer {
            downstream,
            last: None,
        }
    }
}

/// The [`Transformer`] built by [`Dedupe`].
#[derive(Clone)]
pub struct DedupeTransformer<T, R> {
    downstream: R,
    last: Option<T>,
}

impl<T, R> Transformer<T> for DedupeTransformer<T, R>
where
    T: PartialEq + Clone,
    R: Transformer<T>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.last.as_ref() == Some(&item) {
            return ControlFlow::Continue(acc);
        }

        self.last = Some(item.clone());
        self.downstream.step(acc, item)
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

impl<T> Clone for Dedupe<T> {
    #[inline]
    fn clone(&self) -> Self {
        dedupe()
    }
}

impl<T> Copy for Dedupe<T> {}

impl<T> Debug for Dedupe<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dedupe").finish()
    }
}

impl<T: Debug, R: Debug> Debug for DedupeTransformer<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DedupeTransformer")
            .field("downstream", &self.downstream)
            .field("last", &self.last)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::dedupe;
    use crate::test_utils::{Value, assert_all_ways, values};

    #[test]
    fn mixed_values() {
        let input = values![true, false, true, true, false, null, null, 1_i64, 1_i64, "true"];
        let expected = values![true, false, true, false, null, 1_i64, "true"];

        assert_all_ways(dedupe::<Value>(), &input, &expected);
    }

    #[test]
    fn nothing_to_compare_the_first_item_with() {
        assert_all_ways(dedupe(), &[Value::Null], &[Value::Null]);
        assert_all_ways(dedupe::<Value>(), &[], &[]);
    }
}

#[cfg(test)]
mod proptests {
    use itertools::Itertools;
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::dedupe;
    use crate::test_utils::check_all_ways;

    proptest! {
        #[test]
        fn dedupe_like_itertools(input in propvec(0..4_u8, ..64)) {
            let expected: Vec<u8> = input.iter().copied().dedup().collect();
            check_all_ways(dedupe(), &input, &expected)?;
        }
    }
}

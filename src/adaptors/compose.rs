use crate::Transducer;

/// A [`Transducer`] running items through `A`, then through `B`.
///
/// Applied to a terminal transformer, `B` wraps the terminal first and `A` wraps the
/// result, so the outermost stage sees each item first.
///
/// This `struct` is created by [`TransducerExt::compose()`](crate::TransducerExt::compose)
/// and the [`compose!`](crate::compose) macro. See their documentation for more.
#[derive(Debug, Clone, Copy)]
pub struct Compose<A, B> {
    first: A,
    second: B,
}

impl<A, B> Compose<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B, R> Transducer<R> for Compose<A, B>
where
    B: Transducer<R>,
    A: Transducer<B::Transformer>,
{
    type Transformer = A::Transformer;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        self.first.transform(self.second.transform(downstream))
    }
}

/// Composes transducers left to right.
///
/// `compose!(a, b, c)` is `a.compose(b.compose(c))`: items flow through `a`, then `b`,
/// then `c`. A single transducer is returned as is. A trailing comma is accepted.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, drop, map, take};
///
/// let xf = compose!(drop(1), map(|x: i32| x * x), take(2));
/// assert_eq!(xf.eager(1..), [4, 9]);
/// ```
#[macro_export]
macro_rules! compose {
    ($xf:expr $(,)?) => {
        $xf
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::TransducerExt::compose($first, $crate::compose!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::assert_all_ways;
    use crate::{filter, identity, map, tail, take};

    #[test]
    fn items_flow_left_to_right() {
        // Filtering after the map sees mapped values.
        let xf = compose!(map(|x: i32| x + 1), filter(|x: &i32| x % 2 == 0));
        assert_all_ways(xf, &[1, 2, 3, 4], &[2, 4]);

        let xf = compose!(filter(|x: &i32| x % 2 == 0), map(|x: i32| x + 1));
        assert_all_ways(xf, &[1, 2, 3, 4], &[3, 5]);
    }

    #[test]
    fn macro_and_method_agree() {
        let by_macro = compose!(tail(), take(2), map(|c: char| c.to_ascii_uppercase()),);
        let by_method = tail().compose(take(2).compose(map(|c: char| c.to_ascii_uppercase())));

        assert_eq!(by_macro.eager("hello".chars()), ['E', 'L']);
        assert_eq!(by_method.eager("hello".chars()), ['E', 'L']);
    }

    #[test]
    fn identity_is_neutral() {
        let xf = compose!(identity(), map(|x: u8| x * 2), identity());
        assert_all_ways(xf, &[1, 2], &[2, 4]);
    }
}

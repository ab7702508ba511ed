use crate::{Step, Transducer, Transformer};

/// A [`Transducer`] putting a separator between items.
///
/// This `struct` is created by [`interpose()`]. See its documentation for more.
#[derive(Debug, Clone, Copy)]
pub struct Interpose<S> {
    separator: S,
}

/// Creates a [`Transducer`] passing a clone of `separator` downstream before every item
/// but the first.
///
/// If downstream stops the reduction on a separator, the item after it is not passed.
///
/// # Examples
///
/// ```
/// use transducers::{interpose, into};
///
/// assert_eq!(into(String::new(), interpose(", "), ["a", "b", "c"]), "a, b, c");
/// ```
#[inline]
pub fn interpose<S>(separator: S) -> Interpose<S> {
    Interpose { separator }
}

impl<S, R> Transducer<R> for Interpose<S> {
    type Transformer = InterposeTransformer<S, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        InterposeTransformer {
            downstream,
            separator: self.separator,
            started: false,
        }
    }
}

/// The [`Transformer`] built by [`Interpose`].
#[derive(Debug, Clone)]
pub struct InterposeTransformer<S, R> {
    downstream: R,
    separator: S,
    started: bool,
}

impl<T, R> Transformer<T> for InterposeTransformer<T, R>
where
    T: Clone,
    R: Transformer<T>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let acc = if self.started {
            self.downstream.step(acc, self.separator.clone())?
        } else {
            self.started = true;
            acc
        };

        self.downstream.step(acc, item)
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::{Value, assert_all_ways, values};
    use crate::{interpose, take};

    #[test]
    fn null_separator() {
        let input = values![true, false, "true", "false"];
        let expected = values![true, null, false, null, "true", null, "false"];

        assert_all_ways(interpose(Value::Null), &input, &expected);
    }

    #[test]
    fn stopping_on_a_separator_drops_the_next_item() {
        // The third step downstream is the second separator.
        let xf = compose!(interpose(0), take(3));
        assert_all_ways(xf, &[1, 2, 3], &[1, 0, 2]);

        let xf = compose!(interpose(0), take(2));
        assert_all_ways(xf, &[1, 2, 3], &[1, 0]);
    }
}

#[cfg(test)]
mod proptests {
    use itertools::Itertools;
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::interpose;
    use crate::test_utils::check_all_ways;

    proptest! {
        #[test]
        fn interpose_like_intersperse(
            input in propvec(any::<i32>(), ..64),
            separator in any::<i32>(),
        ) {
            let expected: Vec<i32> =
                Itertools::intersperse(input.iter().copied(), separator).collect();
            check_all_ways(interpose(separator), &input, &expected)?;
        }
    }
}

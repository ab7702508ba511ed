use std::ops::ControlFlow;

use crate::{Error, Result, Step, Transducer, Transformer};

/// A [`Transducer`] keeping every `n`-th item.
///
/// This `struct` is created by [`take_nth()`]. See its documentation for more.
#[derive(Debug, Clone, Copy)]
pub struct TakeNth {
    n: usize,
    start: isize,
}

/// Creates a [`Transducer`] passing downstream the items at positions `start`,
/// `start + n`, `start + 2n`... where `start` defaults to `0` and is set with
/// [`starting_at`](TakeNth::starting_at).
///
/// # Errors
///
/// Fails with [`Error::InvalidArgument`] if `n` is `0`.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, take_nth};
///
/// let every_third = take_nth(3)?;
/// assert_eq!(every_third.eager(0..10), [0, 3, 6, 9]);
///
/// assert!(take_nth(0).is_err());
/// # Ok::<(), transducers::Error>(())
/// ```
pub fn take_nth(n: usize) -> Result<TakeNth> {
    if n == 0 {
        return Err(Error::invalid_argument("n", "must be at least 1"));
    }

    Ok(TakeNth { n, start: 0 })
}

impl TakeNth {
    /// Sets the position of the first item to keep.
    ///
    /// A negative `start` counts positions before the first item: with `n = 5` and
    /// `start = -1`, the first item kept is at position `4`, i.e. the positions kept are
    /// those congruent to `start` modulo `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transducers::{prelude::*, take_nth};
    ///
    /// let xf = take_nth(3)?.starting_at(-2);
    /// assert_eq!(xf.eager("abcdefghijkl".chars()), ['b', 'e', 'h', 'k']);
    /// # Ok::<(), transducers::Error>(())
    /// ```
    #[inline]
    pub const fn starting_at(self, start: isize) -> Self {
        Self { start, ..self }
    }

    /// Number of items to skip before the first one kept.
    fn lead(&self) -> usize {
        if self.start >= 0 {
            self.start.unsigned_abs()
        } else {
            match self.start.unsigned_abs() % self.n {
                0 => 0,
                back => self.n - back,
            }
        }
    }
}

impl<R> Transducer<R> for TakeNth {
    type Transformer = TakeNthTransformer<R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        TakeNthTransformer {
            downstream,
            n: self.n,
            skip: self.lead(),
        }
    }
}

/// The [`Transformer`] built by [`TakeNth`].
#[derive(Debug, Clone)]
pub struct TakeNthTransformer<R> {
    downstream: R,
    n: usize,
    // Items left to skip before the next one is kept.
    skip: usize,
}

impl<T, R: Transformer<T>> Transformer<T> for TakeNthTransformer<R> {
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.skip == 0 {
            self.skip = self.n - 1;
            self.downstream.step(acc, item)
        } else {
            self.skip -= 1;
            ControlFlow::Continue(acc)
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::assert_all_ways;
    use crate::{Error, take_nth};

    const LETTERS: [&str; 12] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"];

    #[test]
    fn letters() {
        let cases: [(usize, isize, &[&str]); 6] = [
            (5, 0, &["a", "f", "k"]),
            (5, -1, &["e", "j"]),
            (3, -2, &["b", "e", "h", "k"]),
            (3, 3, &["d", "g", "j"]),
            (100, -2, &[]),
            (1, 0, &LETTERS),
        ];

        for (n, start, expected) in cases {
            let xf = take_nth(n).unwrap().starting_at(start);
            assert_all_ways(xf, &LETTERS, expected);
        }
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(
            take_nth(0).unwrap_err(),
            Error::InvalidArgument {
                name: "n",
                reason: "must be at least 1"
            }
        );
    }
}

use std::{fmt::Debug, ops::ControlFlow};

use crate::{Step, Transducer, Transformer};

/// A [`Transducer`] mapping items to optional values and keeping the present ones.
///
/// This `struct` is created by [`keep()`]. See its documentation for more.
#[derive(Clone)]
pub struct Keep<F> {
    f: F,
}

/// Creates a [`Transducer`] passing `value` downstream for every item where `f(item)`
/// is `Some(value)`, and nothing where it is `None`.
///
/// Only `None` drops an item: `Some(false)` or `Some(0)` go through.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, keep};
///
/// let xf = keep(|s: &str| s.parse::<i32>().ok());
/// assert_eq!(xf.eager(["1", "x", "0"]), [1, 0]);
/// ```
#[inline]
pub fn keep<F>(f: F) -> Keep<F> {
    Keep { f }
}

impl<F, R> Transducer<R> for Keep<F> {
    type Transformer = KeepTransformer<F, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        KeepTransformer {
            downstream,
            f: self.f,
        }
    }
}

/// The [`Transformer`] built by [`Keep`].
#[derive(Clone)]
pub struct KeepTransformer<F, R> {
    downstream: R,
    f: F,
}

impl<T, U, F, R> Transformer<T> for KeepTransformer<F, R>
where
    F: FnMut(T) -> Option<U>,
    R: Transformer<U>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        match (self.f)(item) {
            Some(value) => self.downstream.step(acc, value),
            None => ControlFlow::Continue(acc),
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

/// A [`Transducer`] like [`Keep`] whose closure also receives the item position.
///
/// This `struct` is created by [`keep_indexed()`]. See its documentation for more.
#[derive(Clone)]
pub struct KeepIndexed<F> {
    f: F,
}

/// Same as [`keep()`], with `f` called as `f(item, index)`. The index counts every
/// item seen, kept or not, starting at `0`.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, keep_indexed};
///
/// let xf = keep_indexed(|c: char, i: usize| (i % 2 == 1).then_some(c));
/// assert_eq!(xf.eager("abcde".chars()), ['b', 'd']);
/// ```
#[inline]
pub fn keep_indexed<F>(f: F) -> KeepIndexed<F> {
    KeepIndexed { f }
}

impl<F, R> Transducer<R> for KeepIndexed<F> {
    type Transformer = KeepIndexedTransformer<F, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        KeepIndexedTransformer {
            downstream,
            f: self.f,
            index: 0,
        }
    }
}

/// The [`Transformer`] built by [`KeepIndexed`].
#[derive(Clone)]
pub struct KeepIndexedTransformer<F, R> {
    downstream: R,
    f: F,
    index: usize,
}

impl<T, U, F, R> Transformer<T> for KeepIndexedTransformer<F, R>
where
    F: FnMut(T, usize) -> Option<U>,
    R: Transformer<U>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let index = self.index;
        self.index += 1;
        match (self.f)(item, index) {
            Some(value) => self.downstream.step(acc, value),
            None => ControlFlow::Continue(acc),
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

impl<F> Debug for Keep<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keep").finish_non_exhaustive()
    }
}

impl<F, R: Debug> Debug for KeepTransformer<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeepTransformer")
            .field("downstream", &self.downstream)
            .finish()
    }
}

impl<F> Debug for KeepIndexed<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeepIndexed").finish_non_exhaustive()
    }
}

impl<F, R: Debug> Debug for KeepIndexedTransformer<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeepIndexedTransformer")
            .field("downstream", &self.downstream)
            .field("index", &self.index)
            .finish()
    }
}

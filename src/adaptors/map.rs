use std::fmt::Debug;

use crate::{Step, Transducer, Transformer};

/// A [`Transducer`] calling a closure on each item.
///
/// This `struct` is created by [`map()`]. See its documentation for more.
#[derive(Clone)]
pub struct Map<F> {
    f: F,
}

/// Creates a [`Transducer`] replacing each item with `f(item)`.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, map};
///
/// assert_eq!(map(|s: &str| s.len()).eager(["a", "bcd"]), [1, 3]);
/// ```
#[inline]
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

impl<F, R> Transducer<R> for Map<F> {
    type Transformer = MapTransformer<F, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        MapTransformer {
            downstream,
            f: self.f,
        }
    }
}

/// The [`Transformer`] built by [`Map`].
#[derive(Clone)]
pub struct MapTransformer<F, R> {
    downstream: R,
    f: F,
}

impl<T, U, F, R> Transformer<T> for MapTransformer<F, R>
where
    F: FnMut(T) -> U,
    R: Transformer<U>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        self.downstream.step(acc, (self.f)(item))
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

/// A [`Transducer`] calling a closure on each item and its position.
///
/// This `struct` is created by [`map_indexed()`]. See its documentation for more.
#[derive(Clone)]
pub struct MapIndexed<F> {
    f: F,
}

/// Creates a [`Transducer`] replacing each item with `f(item, index)`, where `index`
/// counts the items seen so far, starting at `0`.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, map_indexed};
///
/// let xf = map_indexed(|c: char, i: usize| format!("{i}{c}"));
/// assert_eq!(xf.eager("ab".chars()), ["0a", "1b"]);
/// ```
#[inline]
pub fn map_indexed<F>(f: F) -> MapIndexed<F> {
    MapIndexed { f }
}

impl<F, R> Transducer<R> for MapIndexed<F> {
    type Transformer = MapIndexedTransformer<F, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        MapIndexedTransformer {
            downstream,
            f: self.f,
            index: 0,
        }
    }
}

/// The [`Transformer`] built by [`MapIndexed`].
#[derive(Clone)]
pub struct MapIndexedTransformer<F, R> {
    downstream: R,
    f: F,
    index: usize,
}

impl<T, U, F, R> Transformer<T> for MapIndexedTransformer<F, R>
where
    F: FnMut(T, usize) -> U,
    R: Transformer<U>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let index = self.index;
        self.index += 1;
        self.downstream.step(acc, (self.f)(item, index))
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

impl<F> Debug for Map<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").finish_non_exhaustive()
    }
}

impl<F, R: Debug> Debug for MapTransformer<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapTransformer")
            .field("downstream", &self.downstream)
            .finish()
    }
}

impl<F> Debug for MapIndexed<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapIndexed").finish_non_exhaustive()
    }
}

impl<F, R: Debug> Debug for MapIndexedTransformer<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapIndexedTransformer")
            .field("downstream", &self.downstream)
            .field("index", &self.index)
            .finish()
    }
}

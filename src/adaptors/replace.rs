use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    hash::{BuildHasher, Hash},
};

use crate::{Step, Transducer, Transformer};

/// A lookup table from items to their replacements.
///
/// Implemented for [`HashMap`], [`BTreeMap`] and lists of `(from, to)` pairs, where the
/// first matching pair wins.
pub trait Replacements<T> {
    /// Returns the replacement of `item`, if any.
    fn replacement(&self, item: &T) -> Option<&T>;
}

impl<T: Eq + Hash, S: BuildHasher> Replacements<T> for HashMap<T, T, S> {
    #[inline]
    fn replacement(&self, item: &T) -> Option<&T> {
        self.get(item)
    }
}

impl<T: Ord> Replacements<T> for BTreeMap<T, T> {
    #[inline]
    fn replacement(&self, item: &T) -> Option<&T> {
        self.get(item)
    }
}

impl<T: PartialEq> Replacements<T> for [(T, T)] {
    fn replacement(&self, item: &T) -> Option<&T> {
        self.iter()
            .find_map(|(from, to)| (from == item).then_some(to))
    }
}

impl<T: PartialEq, const N: usize> Replacements<T> for [(T, T); N] {
    #[inline]
    fn replacement(&self, item: &T) -> Option<&T> {
        self.as_slice().replacement(item)
    }
}

impl<T: PartialEq> Replacements<T> for Vec<(T, T)> {
    #[inline]
    fn replacement(&self, item: &T) -> Option<&T> {
        self.as_slice().replacement(item)
    }
}

impl<T, M: Replacements<T> + ?Sized> Replacements<T> for &M {
    #[inline]
    fn replacement(&self, item: &T) -> Option<&T> {
        (**self).replacement(item)
    }
}

/// A [`Transducer`] substituting items found in a lookup table.
///
/// This `struct` is created by [`replace()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Replace<M> {
    mapping: M,
}

/// Creates a [`Transducer`] passing downstream a clone of `mapping`'s replacement for
/// each item that has one, and the item itself otherwise.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use transducers::{prelude::*, replace};
///
/// let xf = replace(HashMap::from([("cat", "dog")]));
/// assert_eq!(xf.eager(["a", "cat"]), ["a", "dog"]);
///
/// let xf = replace([(0, 10), (1, 11)]);
/// assert_eq!(xf.eager([1, 2, 0]), [11, 2, 10]);
/// ```
#[inline]
pub fn replace<M>(mapping: M) -> Replace<M> {
    Replace { mapping }
}

impl<M, R> Transducer<R> for Replace<M> {
    type Transformer = ReplaceTransformer<M, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        ReplaceTransformer {
            downstream,
            mapping: self.mapping,
        }
    }
}

/// The [`Transformer`] built by [`Replace`].
#[derive(Debug, Clone)]
pub struct ReplaceTransformer<M, R> {
    downstream: R,
    mapping: M,
}

impl<T, M, R> Transformer<T> for ReplaceTransformer<M, R>
where
    T: Clone,
    M: Replacements<T>,
    R: Transformer<T>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let item = match self.mapping.replacement(&item) {
            Some(to) => to.clone(),
            None => item,
        };
        self.downstream.step(acc, item)
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.downstream.complete(acc)
    }
}

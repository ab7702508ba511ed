//! Accumulators and the [`Append`] transformer that fills them.
//!
//! An [`Accumulator`] is a collection-like value with an empty state and a way to add
//! one item to it. This crate implements it for [`Vec`], [`VecDeque`], [`String`], the
//! standard sets and the standard maps (where adding a `(key, value)` pair merges it into
//! the map).
//!
//! [`VecDeque`]: std::collections::VecDeque

mod collections;
mod string;
mod vec;

use std::{fmt::Debug, marker::PhantomData, ops::ControlFlow};

use crate::{Step, Transformer};

/// A value items can be concatenated onto.
///
/// # Examples
///
/// ```
/// use transducers::Accumulator;
///
/// let empty: Vec<i32> = Accumulator::empty();
/// let one = empty.concat(1);
///
/// assert!(empty.is_empty());
/// assert_eq!(one, [1]);
/// ```
pub trait Accumulator<T>: Sized {
    /// Returns an accumulator holding nothing.
    fn empty() -> Self;

    /// Adds `item` in place.
    fn concat_mut(&mut self, item: T);

    /// Returns a copy of this accumulator with `item` added, leaving `self` untouched.
    fn concat(&self, item: T) -> Self
    where
        Self: Clone,
    {
        let mut next = self.clone();
        next.concat_mut(item);
        next
    }
}

/// A terminal [`Transformer`] adding every item to an [`Accumulator`].
///
/// [`init`](Transformer::init) yields [`Accumulator::empty()`].
/// This is the sink behind [`into()`](crate::into).
pub struct Append<C> {
    _marker: PhantomData<fn() -> C>,
}

impl<C> Append<C> {
    /// Creates a new instance of this transformer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<C> Default for Append<C> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Append<C> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C> Debug for Append<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Append").finish()
    }
}

impl<T, C> Transformer<T> for Append<C>
where
    C: Accumulator<T>,
{
    type Acc = C;

    #[inline]
    fn init(&mut self) -> C {
        C::empty()
    }

    #[inline]
    fn step(&mut self, mut acc: C, item: T) -> Step<C> {
        acc.concat_mut(item);
        ControlFlow::Continue(acc)
    }

    #[inline]
    fn complete(&mut self, acc: C) -> C {
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transduce1;

    #[test]
    fn concat_leaves_the_original_alone() {
        let base = vec![1, 2];
        let grown = base.concat(3);

        assert_eq!(base, [1, 2]);
        assert_eq!(grown, [1, 2, 3]);
    }

    #[test]
    fn concat_mut_keeps_identity() {
        let mut v: Vec<u8> = Vec::with_capacity(8);
        let ptr = v.as_ptr();
        v.concat_mut(1);
        v.concat_mut(2);

        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn append_starts_empty() {
        let out: Vec<char> = transduce1(crate::identity(), Append::new(), "hey".chars());
        assert_eq!(out, ['h', 'e', 'y']);
    }
}

use std::collections::VecDeque;

use crate::{Append, Pending, Sequence, Transducer, Transformer, into, transduce};

/// Extends [`Iterator`] with methods feeding its items through a [`Transducer`].
///
/// This trait is automatically implemented for all [`Iterator`] types.
pub trait IteratorExt: Iterator + Sized {
    /// Same as [`transduce()`](crate::transduce) with this iterator as the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use transducers::{prelude::*, Count, filter};
    ///
    /// let evens = (1..=10).transduce(filter(|x: &i32| x % 2 == 0), Count::new(), 0);
    /// assert_eq!(evens, 5);
    /// ```
    #[inline]
    fn transduce<X, R>(
        self,
        xf: X,
        transformer: R,
        init: <X::Transformer as Transformer<Self::Item>>::Acc,
    ) -> <X::Transformer as Transformer<Self::Item>>::Acc
    where
        X: Transducer<R>,
        X::Transformer: Transformer<Self::Item>,
    {
        transduce(xf, transformer, init, self)
    }

    /// Same as [`into()`](crate::into) with this iterator as the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use transducers::{prelude::*, map};
    ///
    /// let set = ["b", "a", "b"].into_iter().transduce_into(BTreeSet::new(), map(str::to_uppercase));
    /// assert_eq!(set, BTreeSet::from(["A".to_owned(), "B".to_owned()]));
    /// ```
    #[inline]
    fn transduce_into<C, X>(self, seed: C, xf: X) -> C
    where
        X: Transducer<Append<C>>,
        X::Transformer: Transformer<Self::Item, Acc = C>,
    {
        into(seed, xf, self)
    }

    /// Same as [`TransducerExt::sequence`](crate::TransducerExt::sequence) with this
    /// iterator as the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use transducers::{prelude::*, tail};
    ///
    /// let mut rest = "xyz".chars().transduce_lazy(tail());
    /// assert_eq!(rest.next(), Some('y'));
    /// ```
    #[inline]
    fn transduce_lazy<X, Out>(self, xf: X) -> Sequence<Self, X::Transformer, Out>
    where
        X: Transducer<Pending<Out>>,
        X::Transformer: Transformer<Self::Item, Acc = VecDeque<Out>>,
    {
        Sequence::new(xf, self)
    }
}

impl<I: Iterator> IteratorExt for I {}

use std::collections::VecDeque;

use crate::{Append, Compose, Pending, Sequence, Transformer, into};

/// Turns a downstream [`Transformer`] into a new one that transforms items on their way
/// to it.
///
/// A transducer value is only a configuration (a predicate, a count, a separator...).
/// Private mutable state such as counters, buffers and seen-sets is created by
/// [`transform`](Transducer::transform) and belongs to the transformer it returns, so
/// each application starts afresh. To apply the same configuration twice, clone it.
///
/// Transducers are composed with [`TransducerExt::compose`] or the
/// [`compose!`](crate::compose) macro.
pub trait Transducer<R> {
    /// The transformer produced around `R`.
    type Transformer;

    /// Wraps `downstream`.
    fn transform(self, downstream: R) -> Self::Transformer;
}

/// Extends every type with composition and with the iterable entry points of transducers.
///
/// This trait is automatically implemented for all types.
pub trait TransducerExt: Sized {
    /// Chains `next` after this transducer: items pass through `self` first, then
    /// through `next`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transducers::{prelude::*, filter, map};
    ///
    /// let xf = map(|x: i32| x * 10).compose(filter(|x: &i32| *x > 10));
    /// assert_eq!(xf.eager([1, 2, 3]), [20, 30]);
    /// ```
    #[inline]
    fn compose<B>(self, next: B) -> Compose<Self, B> {
        Compose::new(self, next)
    }

    /// Runs this transducer over `source` right away and collects the results into a
    /// [`Vec`].
    ///
    /// # Examples
    ///
    /// ```
    /// use transducers::{prelude::*, dedupe};
    ///
    /// assert_eq!(dedupe().eager([1, 1, 2, 1]), [1, 2, 1]);
    /// ```
    #[inline]
    fn eager<I, Out>(self, source: I) -> Vec<Out>
    where
        I: IntoIterator,
        Self: Transducer<Append<Vec<Out>>>,
        <Self as Transducer<Append<Vec<Out>>>>::Transformer: Transformer<I::Item, Acc = Vec<Out>>,
    {
        into(Vec::new(), self, source)
    }

    /// Returns a lazy, single-pass [`Sequence`] of the results of this transducer over
    /// `source`. Items are pulled from `source` only when the sequence is advanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use transducers::{prelude::*, map, take_while};
    ///
    /// let mut squares = compose!(map(|x: u64| x * x), take_while(|x: &u64| *x < 20)).sequence(1..);
    ///
    /// assert_eq!(squares.next(), Some(1));
    /// assert_eq!(squares.collect::<Vec<_>>(), [4, 9, 16]);
    /// ```
    #[inline]
    fn sequence<I, Out>(
        self,
        source: I,
    ) -> Sequence<I::IntoIter, <Self as Transducer<Pending<Out>>>::Transformer, Out>
    where
        I: IntoIterator,
        Self: Transducer<Pending<Out>>,
        <Self as Transducer<Pending<Out>>>::Transformer:
            Transformer<I::Item, Acc = VecDeque<Out>>,
    {
        Sequence::new(self, source)
    }
}

impl<X> TransducerExt for X {}

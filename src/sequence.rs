use std::{
    collections::VecDeque,
    fmt::Debug,
    iter::FusedIterator,
    marker::PhantomData,
    ops::ControlFlow,
};

use crate::{Step, Transducer, Transformer, assert_transformer};

/// The terminal [`Transformer`] behind [`Sequence`]: it queues every item it receives
/// until the sequence hands it out.
pub struct Pending<T> {
    _marker: PhantomData<fn(T)>,
}

impl<T> Pending<T> {
    /// Creates a new instance of this transformer.
    #[inline]
    pub const fn new() -> Self {
        assert_transformer::<_, T>(Self {
            _marker: PhantomData,
        })
    }
}

impl<T> Default for Pending<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Pending<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Debug for Pending<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pending").finish()
    }
}

impl<T> Transformer<T> for Pending<T> {
    type Acc = VecDeque<T>;

    #[inline]
    fn init(&mut self) -> Self::Acc {
        VecDeque::new()
    }

    #[inline]
    fn step(&mut self, mut acc: Self::Acc, item: T) -> Step<Self::Acc> {
        acc.push_back(item);
        ControlFlow::Continue(acc)
    }

    #[inline]
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        acc
    }
}

/// A lazy, single-pass sequence of the outputs of a transducer over a source iterator.
///
/// Each call to [`next`](Iterator::next) pulls from the source only until the pipeline
/// has produced at least one output. When the source runs dry, or a stage stops the
/// reduction, the pipeline is completed exactly once (flushing buffered state such as a
/// pending partition) and the sequence ends for good. It cannot be restarted.
///
/// This `struct` is created by [`TransducerExt::sequence()`](crate::TransducerExt::sequence)
/// and [`IteratorExt::transduce_lazy()`](crate::IteratorExt::transduce_lazy).
pub struct Sequence<I, R, T> {
    source: I,
    transformer: R,
    queue: VecDeque<T>,
    done: bool,
}

impl<I, R, T> Sequence<I, R, T> {
    pub(crate) fn new<X>(xf: X, source: impl IntoIterator<IntoIter = I>) -> Self
    where
        X: Transducer<Pending<T>, Transformer = R>,
    {
        Self {
            source: source.into_iter(),
            transformer: xf.transform(Pending::new()),
            queue: VecDeque::new(),
            done: false,
        }
    }
}

impl<I, R, T> Sequence<I, R, T>
where
    I: Iterator,
    R: Transformer<I::Item, Acc = VecDeque<T>>,
{
    fn finish(&mut self, queue: VecDeque<T>) {
        self.queue = self.transformer.complete(queue);
        self.done = true;
        trace!(flushed = self.queue.len(), "lazy sequence completed");
    }
}

impl<I, R, T> Iterator for Sequence<I, R, T>
where
    I: Iterator,
    R: Transformer<I::Item, Acc = VecDeque<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(out) = self.queue.pop_front() {
                return Some(out);
            }

            if self.done {
                return None;
            }

            // The queue is empty here, so taking it costs nothing.
            let queue = std::mem::take(&mut self.queue);
            match self.source.next() {
                Some(item) => match self.transformer.step(queue, item) {
                    ControlFlow::Continue(queue) => self.queue = queue,
                    ControlFlow::Break(done) => self.finish(done.into_inner()),
                },
                None => self.finish(queue),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let queued = self.queue.len();
        if self.done {
            (queued, Some(queued))
        } else {
            // Any stage may drop, buffer or multiply items.
            (queued, None)
        }
    }
}

impl<I, R, T> FusedIterator for Sequence<I, R, T>
where
    I: Iterator,
    R: Transformer<I::Item, Acc = VecDeque<T>>,
{
}

impl<I: Debug, R: Debug, T: Debug> Debug for Sequence<I, R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("source", &self.source)
            .field("transformer", &self.transformer)
            .field("queue", &self.queue)
            .field("done", &self.done)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::prelude::*;
    use crate::{map, partition_all, take};

    #[test]
    fn pulls_on_demand() {
        let pulled = Cell::new(0);
        let source = (0..100).inspect(|_| pulled.set(pulled.get() + 1));

        let mut seq = map(|x: i32| x * 2).sequence(source);
        assert_eq!(pulled.get(), 0);

        assert_eq!(seq.next(), Some(0));
        assert_eq!(seq.next(), Some(2));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn completes_once_and_stays_done() {
        let mut seq = partition_all(2).unwrap().sequence([1, 2, 3]);

        assert_eq!(seq.next(), Some(vec![1, 2]));
        assert_eq!(seq.next(), Some(vec![3]));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.size_hint(), (0, Some(0)));
    }

    #[test]
    fn stops_pulling_after_reduced() {
        let pulled = Cell::new(0);
        let source = (0..).inspect(|_| pulled.set(pulled.get() + 1));

        let out: Vec<u32> = take(3).sequence(source).collect();
        assert_eq!(out, [0, 1, 2]);
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn from_iterator_side() {
        let out: Vec<i32> = [1, 2, 3].into_iter().transduce_lazy(map(|x: i32| -x)).collect();
        assert_eq!(out, [-1, -2, -3]);
    }
}

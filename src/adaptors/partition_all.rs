use std::{fmt::Debug, marker::PhantomData, mem, ops::ControlFlow};

use crate::{Error, Result, Step, Transducer, Transformer, ensure_unreduced};

/// A [`Transducer`] grouping items into batches of a fixed size.
///
/// This `struct` is created by [`partition_all()`]. See its documentation for more.
pub struct PartitionAll<T> {
    size: usize,
    _marker: PhantomData<fn(T)>,
}

/// Creates a [`Transducer`] buffering items into [`Vec`]s of `size` items and passing
/// each full batch downstream.
///
/// On completion, a non-empty partial batch is passed downstream before the downstream
/// transformer completes, so the last batch may hold fewer than `size` items.
///
/// # Errors
///
/// Fails with [`Error::InvalidArgument`] if `size` is `0`.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, partition_all};
///
/// let xf = partition_all(2)?;
/// assert_eq!(xf.eager(1..=5), [vec![1, 2], vec![3, 4], vec![5]]);
/// # Ok::<(), transducers::Error>(())
/// ```
pub fn partition_all<T>(size: usize) -> Result<PartitionAll<T>> {
    if size == 0 {
        return Err(Error::invalid_argument("size", "must be at least 1"));
    }

    Ok(PartitionAll {
        size,
        _marker: PhantomData,
    })
}

impl<T, R> Transducer<R> for PartitionAll<T> {
    type Transformer = PartitionAllTransformer<T, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        PartitionAllTransformer {
            downstream,
            size: self.size,
            batch: Vec::new(),
        }
    }
}

/// The [`Transformer`] built by [`PartitionAll`].
#[derive(Clone)]
pub struct PartitionAllTransformer<T, R> {
    downstream: R,
    size: usize,
    batch: Vec<T>,
}

impl<T, R> Transformer<T> for PartitionAllTransformer<T, R>
where
    R: Transformer<Vec<T>>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        self.batch.push(item);
        if self.batch.len() < self.size {
            return ControlFlow::Continue(acc);
        }

        let batch = mem::take(&mut self.batch);
        self.downstream.step(acc, batch)
    }

    fn complete(&mut self, mut acc: R::Acc) -> R::Acc {
        if !self.batch.is_empty() {
            let batch = mem::take(&mut self.batch);
            acc = ensure_unreduced(self.downstream.step(acc, batch));
        }

        self.downstream.complete(acc)
    }
}

impl<T> Clone for PartitionAll<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PartitionAll<T> {}

impl<T> Debug for PartitionAll<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartitionAll")
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug, R: Debug> Debug for PartitionAllTransformer<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartitionAllTransformer")
            .field("downstream", &self.downstream)
            .field("size", &self.size)
            .field("batch", &self.batch)
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::partition_all;
    use crate::test_utils::check_all_ways;

    proptest! {
        #[test]
        fn partition_all_like_chunks(input in propvec(any::<i32>(), ..64), size in 1..10_usize) {
            let expected: Vec<Vec<i32>> = input.chunks(size).map(<[i32]>::to_vec).collect();
            check_all_ways(partition_all(size).unwrap(), &input, &expected)?;
        }
    }
}

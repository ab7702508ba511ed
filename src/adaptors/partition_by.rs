use std::{fmt::Debug, marker::PhantomData, mem, ops::ControlFlow};

use crate::{Step, Transducer, Transformer, ensure_unreduced};

/// A [`Transducer`] grouping runs of items sharing a key.
///
/// This `struct` is created by [`partition_by()`]. See its documentation for more.
pub struct PartitionBy<F, T, K> {
    f: F,
    _marker: PhantomData<fn(T) -> K>,
}

/// Creates a [`Transducer`] buffering consecutive items for which `f` returns equal keys,
/// and passing each run downstream as a [`Vec`] once an item with a different key
/// arrives. The last run is passed on completion.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, partition_by};
///
/// let xf = partition_by(|x: &i32| *x > 0);
/// assert_eq!(xf.eager([1, 2, -1, 3]), [vec![1, 2], vec![-1], vec![3]]);
/// ```
#[inline]
pub fn partition_by<T, K, F>(f: F) -> PartitionBy<F, T, K>
where
    F: FnMut(&T) -> K,
{
    PartitionBy {
        f,
        _marker: PhantomData,
    }
}

impl<F, T, K, R> Transducer<R> for PartitionBy<F, T, K> {
    type Transformer = PartitionByTransformer<F, T, K, R>;

    #[inline]
    fn transform(self, downstream: R) -> Self::Transformer {
        PartitionByTransformer {
            downstream,
            f: self.f,
            run: Vec::new(),
            key: None,
        }
    }
}

/// The [`Transformer`] built by [`PartitionBy`].
#[derive(Clone)]
pub struct PartitionByTransformer<F, T, K, R> {
    downstream: R,
    f: F,
    run: Vec<T>,
    key: Option<K>,
}

impl<F, T, K, R> Transformer<T> for PartitionByTransformer<F, T, K, R>
where
    F: FnMut(&T) -> K,
    K: PartialEq,
    R: Transformer<Vec<T>>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.downstream.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let key = (self.f)(&item);
        let same_run = self.key.as_ref().is_none_or(|last| *last == key);
        self.key = Some(key);

        if same_run {
            self.run.push(item);
            return ControlFlow::Continue(acc);
        }

        let run = mem::take(&mut self.run);
        let acc = self.downstream.step(acc, run)?;
        // The new run only starts if downstream wants more.
        self.run.push(item);
        ControlFlow::Continue(acc)
    }

    fn complete(&mut self, mut acc: R::Acc) -> R::Acc {
        if !self.run.is_empty() {
            let run = mem::take(&mut self.run);
            acc = ensure_unreduced(self.downstream.step(acc, run));
        }

        self.downstream.complete(acc)
    }
}

impl<F: Clone, T, K> Clone for PartitionBy<F, T, K> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T, K> Debug for PartitionBy<F, T, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartitionBy").finish_non_exhaustive()
    }
}

impl<F, T: Debug, K: Debug, R: Debug> Debug for PartitionByTransformer<F, T, K, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartitionByTransformer")
            .field("downstream", &self.downstream)
            .field("run", &self.run)
            .field("key", &self.key)
            .finish()
    }
}

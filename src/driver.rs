use std::ops::ControlFlow;

use crate::{Append, Transducer, Transformer};

/// Feeds every item of `source` to `transformer`, starting from `acc`, and returns the
/// completed accumulator.
///
/// Iteration stops as soon as [`step`](Transformer::step) returns a
/// [`Reduced`](crate::Reduced) accumulator: no further item is pulled from `source`.
/// Either way, [`complete`](Transformer::complete) is called exactly once on the final
/// accumulator.
///
/// # Examples
///
/// ```
/// use transducers::{Append, Transducer, reduce, take};
///
/// let mut xf = take(2).transform(Append::new());
/// assert_eq!(reduce(&mut xf, vec![0], 1..), [0, 1, 2]);
/// ```
pub fn reduce<T, R, I>(transformer: &mut R, acc: R::Acc, source: I) -> R::Acc
where
    R: Transformer<T> + ?Sized,
    I: IntoIterator<Item = T>,
{
    let acc = match source
        .into_iter()
        .try_fold(acc, |acc, item| transformer.step(acc, item))
    {
        ControlFlow::Continue(acc) => acc,
        ControlFlow::Break(done) => {
            trace!("reduction stopped early");
            done.into_inner()
        }
    };

    trace!("completing reduction");
    transformer.complete(acc)
}

/// Folds `source` with a plain reducing function.
///
/// A plain function has no completion phase and cannot stop early: every item is fed
/// and the accumulator is returned as the function left it. Wrap the function with
/// [`make_transformer`](crate::make_transformer) to get both.
///
/// # Examples
///
/// ```
/// use transducers::reduce_fn;
///
/// assert_eq!(reduce_fn(|acc: String, s: &str| acc + s, String::new(), ["a", "b"]), "ab");
/// ```
#[inline]
pub fn reduce_fn<A, T, F, I>(f: F, acc: A, source: I) -> A
where
    F: FnMut(A, T) -> A,
    I: IntoIterator<Item = T>,
{
    source.into_iter().fold(acc, f)
}

/// Applies `xf` to `transformer` and reduces `source` with the result, starting from
/// `init`.
///
/// # Examples
///
/// ```
/// use transducers::{make_transformer, map, transduce};
/// use std::ops::ControlFlow;
///
/// let sum = make_transformer(|acc: i32, x: i32| ControlFlow::Continue(acc + x));
/// assert_eq!(transduce(map(|x: i32| x * x), sum, 100, [1, 2, 3]), 114);
/// ```
#[inline]
pub fn transduce<X, R, I>(
    xf: X,
    transformer: R,
    init: <X::Transformer as Transformer<I::Item>>::Acc,
    source: I,
) -> <X::Transformer as Transformer<I::Item>>::Acc
where
    X: Transducer<R>,
    X::Transformer: Transformer<I::Item>,
    I: IntoIterator,
{
    let mut transformer = xf.transform(transformer);
    reduce(&mut transformer, init, source)
}

/// Same as [`transduce()`], with the initial accumulator produced by
/// [`init`](Transformer::init).
///
/// # Examples
///
/// ```
/// use transducers::{Last, remove, transduce1};
///
/// assert_eq!(transduce1(remove(|x: &i32| *x > 2), Last::new(), [1, 2, 3]), Some(2));
/// ```
#[inline]
pub fn transduce1<X, R, I>(
    xf: X,
    transformer: R,
    source: I,
) -> <X::Transformer as Transformer<I::Item>>::Acc
where
    X: Transducer<R>,
    X::Transformer: Transformer<I::Item>,
    I: IntoIterator,
{
    let mut transformer = xf.transform(transformer);
    let init = transformer.init();
    reduce(&mut transformer, init, source)
}

/// Runs `xf` over `source` and appends every result to `seed`.
///
/// `seed` is any [`Accumulator`](crate::Accumulator): a [`Vec`], a [`String`], a set, a
/// map (merging key/value pairs)...
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use transducers::{into, map};
///
/// let merged = into(
///     HashMap::from([("a", 0)]),
///     map(|(k, v): (&'static str, i32)| (k, v * 2)),
///     [("a", 1), ("b", 2)],
/// );
/// assert_eq!(merged, HashMap::from([("a", 2), ("b", 4)]));
/// ```
#[inline]
pub fn into<C, X, I>(seed: C, xf: X, source: I) -> C
where
    X: Transducer<Append<C>>,
    X::Transformer: Transformer<I::Item, Acc = C>,
    I: IntoIterator,
{
    transduce(xf, Append::new(), seed, source)
}

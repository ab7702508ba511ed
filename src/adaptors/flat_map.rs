use crate::{Cat, Compose, Map, TransducerExt, cat, map};

/// A [`Transducer`] mapping each item to a collection and flattening the results.
///
/// This is literally [`map()`] composed with [`cat()`].
pub type FlatMap<F> = Compose<Map<F>, Cat>;

/// Creates a [`Transducer`] passing downstream every element of `f(item)`, for each
/// item.
///
/// # Examples
///
/// ```
/// use transducers::{prelude::*, flat_map};
///
/// let xf = flat_map(|n: usize| std::iter::repeat_n(n, n));
/// assert_eq!(xf.eager([1, 0, 2]), [1, 2, 2]);
/// ```
#[inline]
pub fn flat_map<F>(f: F) -> FlatMap<F> {
    map(f).compose(cat())
}

use crate::Step;

/// A reducing step bundled with how to start and how to finish a reduction.
///
/// This trait requires three methods:
///
/// - [`init`](Transformer::init): produces a fresh accumulator, used when the caller
///   does not supply one.
/// - [`step`](Transformer::step): folds one item into the accumulator and tells whether
///   the reduction should go on.
/// - [`complete`](Transformer::complete): finalizes the accumulator once no more items
///   will come, e.g. by flushing a pending partition.
///
/// Every [`Transducer`](crate::Transducer) wraps a downstream transformer and produces a
/// new one whose `step` decides whether and how to call the downstream `step`. The
/// terminal transformer at the bottom of the chain owns the accumulator type.
///
/// # Stopping early
///
/// Returning [`Break`](std::ops::ControlFlow::Break) from `step` means the accumulator
/// inside the [`Reduced`](crate::Reduced) box is final. Drivers stop pulling items right
/// away but still call [`complete`](Transformer::complete) exactly once.
///
/// # Dyn compatibility
///
/// This trait is dyn-compatible: `&mut dyn Transformer<i32, Acc = Vec<i32>>` works.
///
/// # Example
///
/// A transformer summing items until the sum exceeds a budget:
///
/// ```
/// use std::ops::ControlFlow;
/// use transducers::{Step, Transformer, reduce, reduced};
///
/// struct Budget(u32);
///
/// impl Transformer<u32> for Budget {
///     type Acc = u32;
///
///     fn init(&mut self) -> u32 {
///         0
///     }
///
///     fn step(&mut self, acc: u32, item: u32) -> Step<u32> {
///         let acc = acc + item;
///         if acc > self.0 { reduced(acc) } else { ControlFlow::Continue(acc) }
///     }
///
///     fn complete(&mut self, acc: u32) -> u32 {
///         acc
///     }
/// }
///
/// assert_eq!(reduce(&mut Budget(10), 0, [4, 4, 4, 4]), 12);
/// ```
pub trait Transformer<T> {
    /// The accumulator threaded through the reduction.
    type Acc;

    /// Produces a fresh, empty accumulator.
    fn init(&mut self) -> Self::Acc;

    /// Folds `item` into `acc`.
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc>;

    /// Finalizes `acc`. Called once, after the last `step`.
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc;
}

impl<T, R> Transformer<T> for &mut R
where
    R: Transformer<T> + ?Sized,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> Self::Acc {
        (**self).init()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        (**self).step(acc, item)
    }

    #[inline]
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        (**self).complete(acc)
    }
}

impl<T, R> Transformer<T> for Box<R>
where
    R: Transformer<T> + ?Sized,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> Self::Acc {
        (**self).init()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        (**self).step(acc, item)
    }

    #[inline]
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        (**self).complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Append, Transformer, ensure_unreduced, reduce};

    #[test]
    fn boxed_trait_object() {
        let mut boxed: Box<dyn Transformer<i32, Acc = Vec<i32>>> = Box::new(Append::new());
        let acc = boxed.init();
        let acc = ensure_unreduced(boxed.step(acc, 1));
        assert_eq!(reduce(&mut boxed, acc, [2, 3]), [1, 2, 3]);
    }
}

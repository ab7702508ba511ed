use std::ops::{ControlFlow, Deref};

/// What a [`Transformer`](crate::Transformer) answers after folding one item.
///
/// - [`Continue(acc)`](ControlFlow::Continue): the reduction goes on with `acc`.
/// - [`Break(Reduced(acc))`](ControlFlow::Break): `acc` is final. Whoever receives
///   this must stop feeding items, and every enclosing stage must pass it on untouched.
pub type Step<A> = ControlFlow<Reduced<A>, A>;

/// A terminal accumulator: "stop iterating, this is the final result."
///
/// A box may hold another box (`Reduced<Reduced<A>>`). Boxing never collapses, so a
/// nested reduction can signal its own stop independently of the enclosing one.
///
/// # Examples
///
/// ```
/// use transducers::Reduced;
///
/// let done = Reduced::new(vec![1, 2]);
/// assert_eq!(done.len(), 2);
/// assert_eq!(done.into_inner(), [1, 2]);
///
/// let twice = Reduced::new(Reduced::new(0));
/// assert_eq!(twice.into_inner().into_inner(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Reduced<T>(T);

impl<T> Reduced<T> {
    /// Boxes `value`, marking it as terminal.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Unboxes the terminal value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Turns the box into a stopping [`Step`].
    #[inline]
    pub const fn into_step(self) -> Step<T> {
        ControlFlow::Break(self)
    }
}

impl<T> Deref for Reduced<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

/// Returns a [`Step`] that stops the reduction with `acc` as its final value.
#[inline]
pub const fn reduced<A>(acc: A) -> Step<A> {
    ControlFlow::Break(Reduced(acc))
}

/// Returns `true` if `step` asks the reduction to stop.
#[inline]
pub const fn is_reduced<A>(step: &Step<A>) -> bool {
    matches!(step, ControlFlow::Break(_))
}

/// Boxes the accumulator of `step` unless it is already boxed.
///
/// Applied to a step that already stopped, the existing box is returned as is,
/// not wrapped again.
///
/// ```
/// use std::ops::ControlFlow;
/// use transducers::{Reduced, ensure_reduced, reduced};
///
/// assert_eq!(ensure_reduced(ControlFlow::Continue(1)), Reduced::new(1));
/// assert_eq!(ensure_reduced(reduced(1)), Reduced::new(1));
/// ```
#[inline]
pub fn ensure_reduced<A>(step: Step<A>) -> Reduced<A> {
    match step {
        ControlFlow::Continue(acc) => Reduced(acc),
        ControlFlow::Break(done) => done,
    }
}

/// Returns the accumulator of `step`, whether or not it stopped.
#[inline]
pub fn ensure_unreduced<A>(step: Step<A>) -> A {
    match step {
        ControlFlow::Continue(acc) | ControlFlow::Break(Reduced(acc)) => acc,
    }
}

/// Same as [`ensure_unreduced`].
#[inline]
pub fn unreduced<A>(step: Step<A>) -> A {
    ensure_unreduced(step)
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::*;

    #[test]
    fn box_then_unbox_is_identity() {
        for x in [0, 1, -7, i32::MAX] {
            let boxed = ensure_reduced(ControlFlow::Continue(x));
            assert_eq!(ensure_unreduced(boxed.into_step()), x);
            assert_eq!(ensure_unreduced(ControlFlow::Continue(x)), x);
        }
    }

    #[test]
    fn ensure_reduced_keeps_an_existing_box() {
        let step = reduced("done");
        assert!(is_reduced(&step));
        assert_eq!(*ensure_reduced(step), "done");
    }

    #[test]
    fn boxing_a_box_nests() {
        let inner = ensure_reduced(ControlFlow::Continue(5));
        let outer = ensure_reduced(ControlFlow::Continue(inner));

        assert_eq!(outer, Reduced::new(Reduced::new(5)));
        assert_eq!(outer.into_inner().into_inner(), 5);
    }

    #[test]
    fn is_reduced_only_on_break() {
        assert!(!is_reduced(&ControlFlow::<Reduced<u8>, u8>::Continue(1)));
        assert!(is_reduced(&reduced(1_u8)));
        assert_eq!(unreduced(reduced(3)), 3);
    }
}

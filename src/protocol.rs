//! Building transformers out of plain closures.
//!
//! [`make_transformer`] wraps a step closure into a statically typed [`Transformer`],
//! filling `init` and `complete` with defaults.
//!
//! [`Bundle`] is the dynamic counterpart: a set of *optional* capabilities assembled at
//! run time, e.g. from user callbacks. A bundle is only usable as a transformer once all
//! three capabilities are present. The helpers [`step`], [`complete`] and [`init`] check
//! that before delegating and fail with [`Error::MissingCapability`] otherwise.

use std::{convert::identity, fmt::Debug};

use crate::{Capability, Error, Result, Step, Transformer};

/// A [`Transformer`] made of three closures.
///
/// This `struct` is created by [`make_transformer()`]. See its documentation for more.
#[derive(Clone)]
pub struct FnTransformer<S, C, I> {
    step: S,
    complete: C,
    init: I,
}

/// Creates a [`Transformer`] from its step function.
///
/// `complete` defaults to passing the accumulator through and `init` defaults to
/// [`Default::default`]. Override them with [`with_complete`](FnTransformer::with_complete)
/// and [`with_init`](FnTransformer::with_init).
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use transducers::{make_transformer, partition_all, transduce1};
///
/// let longest = make_transformer(|acc: usize, batch: Vec<char>| {
///     ControlFlow::Continue(acc.max(batch.len()))
/// })
/// .with_complete(|acc: usize| acc * 100);
///
/// let xf = partition_all(3).unwrap();
/// assert_eq!(transduce1(xf, longest, "abcd".chars()), 300);
/// ```
#[allow(clippy::type_complexity)]
pub fn make_transformer<A, T, S>(step: S) -> FnTransformer<S, fn(A) -> A, fn() -> A>
where
    A: Default,
    S: FnMut(A, T) -> Step<A>,
{
    FnTransformer {
        step,
        complete: identity,
        init: A::default,
    }
}

impl<S, C, I> FnTransformer<S, C, I> {
    /// Replaces the completion function.
    #[inline]
    pub fn with_complete<C2>(self, complete: C2) -> FnTransformer<S, C2, I> {
        FnTransformer {
            step: self.step,
            complete,
            init: self.init,
        }
    }

    /// Replaces the function producing the initial accumulator.
    #[inline]
    pub fn with_init<I2>(self, init: I2) -> FnTransformer<S, C, I2> {
        FnTransformer {
            step: self.step,
            complete: self.complete,
            init,
        }
    }
}

impl<A, T, S, C, I> Transformer<T> for FnTransformer<S, C, I>
where
    S: FnMut(A, T) -> Step<A>,
    C: FnMut(A) -> A,
    I: FnMut() -> A,
{
    type Acc = A;

    #[inline]
    fn init(&mut self) -> A {
        (self.init)()
    }

    #[inline]
    fn step(&mut self, acc: A, item: T) -> Step<A> {
        (self.step)(acc, item)
    }

    #[inline]
    fn complete(&mut self, acc: A) -> A {
        (self.complete)(acc)
    }
}

impl<S, C, I> Debug for FnTransformer<S, C, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTransformer")
            .field("step", &std::any::type_name::<S>())
            .finish_non_exhaustive()
    }
}

type StepFn<'a, A, T> = Box<dyn FnMut(A, T) -> Step<A> + 'a>;
type CompleteFn<'a, A> = Box<dyn FnMut(A) -> A + 'a>;
type InitFn<'a, A> = Box<dyn FnMut() -> A + 'a>;

/// A set of optional transformer capabilities, assembled at run time.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use transducers::{Capability, Error, protocol::{self, Bundle}};
///
/// let mut partial = Bundle::new().with_step(|acc: i32, x: i32| ControlFlow::Continue(acc + x));
/// assert!(!protocol::is_transformer(&partial));
/// assert_eq!(
///     protocol::init(&mut partial),
///     Err(Error::MissingCapability { capability: Capability::Complete }),
/// );
///
/// let mut full = partial.with_complete(|acc| acc).with_init(|| 0);
/// assert!(protocol::is_transformer(&full));
/// assert_eq!(protocol::init(&mut full), Ok(0));
/// ```
pub struct Bundle<'a, A, T> {
    step: Option<StepFn<'a, A, T>>,
    complete: Option<CompleteFn<'a, A>>,
    init: Option<InitFn<'a, A>>,
}

impl<'a, A, T> Bundle<'a, A, T> {
    /// Creates a bundle with no capability at all.
    #[inline]
    pub fn new() -> Self {
        Self {
            step: None,
            complete: None,
            init: None,
        }
    }

    /// Sets the step capability.
    pub fn with_step(mut self, step: impl FnMut(A, T) -> Step<A> + 'a) -> Self {
        self.step = Some(Box::new(step));
        self
    }

    /// Sets the completion capability.
    pub fn with_complete(mut self, complete: impl FnMut(A) -> A + 'a) -> Self {
        self.complete = Some(Box::new(complete));
        self
    }

    /// Sets the init capability.
    pub fn with_init(mut self, init: impl FnMut() -> A + 'a) -> Self {
        self.init = Some(Box::new(init));
        self
    }

    /// Returns the first missing capability, checked in the order step, complete, init.
    pub fn missing(&self) -> Option<Capability> {
        if self.step.is_none() {
            Some(Capability::Step)
        } else if self.complete.is_none() {
            Some(Capability::Complete)
        } else if self.init.is_none() {
            Some(Capability::Init)
        } else {
            None
        }
    }

    /// Converts this bundle into a [`Transformer`], provided no capability is missing.
    pub fn into_transformer(self) -> Result<BundleTransformer<'a, A, T>> {
        match (self.step, self.complete, self.init) {
            (Some(step), Some(complete), Some(init)) => Ok(BundleTransformer {
                step,
                complete,
                init,
            }),
            (step, complete, init) => {
                let capability = Self { step, complete, init }
                    .missing()
                    .unwrap_or(Capability::Step);
                Err(Error::missing_capability(capability))
            }
        }
    }

    fn check(&self) -> Result<()> {
        match self.missing() {
            Some(capability) => Err(Error::missing_capability(capability)),
            None => Ok(()),
        }
    }
}

impl<A, T> Default for Bundle<'_, A, T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T> Debug for Bundle<'_, A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bundle")
            .field("step", &self.step.is_some())
            .field("complete", &self.complete.is_some())
            .field("init", &self.init.is_some())
            .finish()
    }
}

/// Returns `true` if `target` has all three capabilities.
#[inline]
pub fn is_transformer<A, T>(target: &Bundle<'_, A, T>) -> bool {
    target.missing().is_none()
}

/// Feeds `item` to the step capability of `target`.
///
/// Fails if `target` lacks any capability, not only the step one.
pub fn step<A, T>(target: &mut Bundle<'_, A, T>, acc: A, item: T) -> Result<Step<A>> {
    target.check()?;
    let step = target
        .step
        .as_mut()
        .ok_or(Error::MissingCapability {
            capability: Capability::Step,
        })?;
    Ok(step(acc, item))
}

/// Finalizes `acc` with the completion capability of `target`.
///
/// Fails if `target` lacks any capability.
pub fn complete<A, T>(target: &mut Bundle<'_, A, T>, acc: A) -> Result<A> {
    target.check()?;
    let complete = target
        .complete
        .as_mut()
        .ok_or(Error::MissingCapability {
            capability: Capability::Complete,
        })?;
    Ok(complete(acc))
}

/// Produces an initial accumulator with the init capability of `target`.
///
/// Fails if `target` lacks any capability.
pub fn init<A, T>(target: &mut Bundle<'_, A, T>) -> Result<A> {
    target.check()?;
    let init = target.init.as_mut().ok_or(Error::MissingCapability {
        capability: Capability::Init,
    })?;
    Ok(init())
}

/// A [`Transformer`] backed by a complete [`Bundle`].
///
/// This `struct` is created by [`Bundle::into_transformer()`].
pub struct BundleTransformer<'a, A, T> {
    step: StepFn<'a, A, T>,
    complete: CompleteFn<'a, A>,
    init: InitFn<'a, A>,
}

impl<A, T> Transformer<T> for BundleTransformer<'_, A, T> {
    type Acc = A;

    #[inline]
    fn init(&mut self) -> A {
        (self.init)()
    }

    #[inline]
    fn step(&mut self, acc: A, item: T) -> Step<A> {
        (self.step)(acc, item)
    }

    #[inline]
    fn complete(&mut self, acc: A) -> A {
        (self.complete)(acc)
    }
}

impl<A, T> Debug for BundleTransformer<'_, A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleTransformer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::*;
    use crate::{map, transduce1};

    fn sum_step(acc: i32, x: i32) -> Step<i32> {
        ControlFlow::Continue(acc + x)
    }

    fn partial_bundles() -> Vec<(Capability, Bundle<'static, i32, i32>)> {
        vec![
            (
                Capability::Step,
                Bundle::new().with_complete(|acc| acc).with_init(|| 0),
            ),
            (
                Capability::Complete,
                Bundle::new().with_step(sum_step).with_init(|| 0),
            ),
            (
                Capability::Init,
                Bundle::new().with_step(sum_step).with_complete(|acc| acc),
            ),
        ]
    }

    #[test]
    fn any_missing_capability_fails_every_helper() {
        for (capability, mut bundle) in partial_bundles() {
            let expected = Err(Error::MissingCapability { capability });

            assert!(!is_transformer(&bundle));
            assert_eq!(bundle.missing(), Some(capability));
            assert_eq!(step(&mut bundle, 0, 1).map(crate::ensure_unreduced), expected);
            assert_eq!(complete(&mut bundle, 0), expected);
            assert_eq!(init(&mut bundle), expected);
            assert_eq!(bundle.into_transformer().map(|_| ()), expected.map(|_| ()));
        }
    }

    #[test]
    fn complete_bundle_is_a_transformer() {
        let mut bundle = Bundle::new()
            .with_step(sum_step)
            .with_complete(|acc| acc * 2)
            .with_init(|| 10);

        assert!(is_transformer(&bundle));
        assert_eq!(init(&mut bundle), Ok(10));
        assert_eq!(step(&mut bundle, 1, 2), Ok(ControlFlow::Continue(3)));
        assert_eq!(complete(&mut bundle, 4), Ok(8));

        let transformer = bundle.into_transformer().unwrap();
        assert_eq!(transduce1(map(|x: i32| x + 1), transformer, [1, 2]), 30);
    }

    #[test]
    fn defaults_of_make_transformer() {
        let mut t = make_transformer(sum_step);
        assert_eq!(Transformer::<i32>::init(&mut t), 0);
        assert_eq!(Transformer::<i32>::complete(&mut t, 7), 7);

        let mut t = t.with_init(|| 5).with_complete(|acc: i32| -acc);
        assert_eq!(Transformer::<i32>::init(&mut t), 5);
        assert_eq!(Transformer::<i32>::complete(&mut t, 7), -7);
    }
}

use std::{cell::Cell, collections::VecDeque, fmt::Debug, marker::PhantomData, ops::ControlFlow, rc::Rc};

use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::{Append, Pending, Step, Transducer, TransducerExt, Transformer, into, transduce1};

/// A loosely typed value, for scenarios mixing kinds of items in one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Builds a `Vec<Value>` out of mixed literals. `null` stands for [`Value::Null`].
macro_rules! values {
    (@one null) => { $crate::test_utils::Value::Null };
    (@one $e:expr) => { $crate::test_utils::Value::from($e) };
    ($($x:tt),* $(,)?) => { vec![$(values!(@one $x)),*] };
}

pub(crate) use values;

/// Shared counters of the calls a [`Spy`] received.
#[derive(Debug, Clone, Default)]
pub struct Calls {
    steps: Rc<Cell<usize>>,
    completes: Rc<Cell<usize>>,
}

impl Calls {
    pub fn steps(&self) -> usize {
        self.steps.get()
    }

    pub fn completes(&self) -> usize {
        self.completes.get()
    }
}

/// A terminal transformer collecting into a `Vec` while counting its calls.
pub struct Spy<T> {
    calls: Calls,
    _marker: PhantomData<fn(T)>,
}

pub fn spy<T>() -> (Spy<T>, Calls) {
    let calls = Calls::default();
    (
        Spy {
            calls: calls.clone(),
            _marker: PhantomData,
        },
        calls,
    )
}

impl<T> Transformer<T> for Spy<T> {
    type Acc = Vec<T>;

    fn init(&mut self) -> Vec<T> {
        Vec::new()
    }

    fn step(&mut self, mut acc: Vec<T>, item: T) -> Step<Vec<T>> {
        self.calls.steps.set(self.calls.steps.get() + 1);
        acc.push(item);
        ControlFlow::Continue(acc)
    }

    fn complete(&mut self, acc: Vec<T>) -> Vec<T> {
        self.calls.completes.set(self.calls.completes.get() + 1);
        acc
    }
}

/// Runs `xf` over `input` eagerly, lazily and through a spied terminal, and returns the
/// three outputs. The spied run must have completed exactly once.
pub fn run_all_ways<X, T, Out>(xf: X, input: &[T]) -> [Vec<Out>; 3]
where
    T: Clone,
    X: Clone
        + Transducer<Append<Vec<Out>>>
        + Transducer<Pending<Out>>
        + Transducer<Spy<Out>>,
    <X as Transducer<Append<Vec<Out>>>>::Transformer: Transformer<T, Acc = Vec<Out>>,
    <X as Transducer<Pending<Out>>>::Transformer: Transformer<T, Acc = VecDeque<Out>>,
    <X as Transducer<Spy<Out>>>::Transformer: Transformer<T, Acc = Vec<Out>>,
{
    let eager = into(Vec::new(), xf.clone(), input.iter().cloned());
    let lazy = xf.clone().sequence(input.iter().cloned()).collect();

    let (terminal, calls) = spy();
    let spied = transduce1(xf, terminal, input.iter().cloned());
    assert_eq!(calls.completes(), 1, "completed {} times", calls.completes());

    [eager, lazy, spied]
}

/// Asserts every way of running `xf` over `input` yields `expected`.
#[track_caller]
pub fn assert_all_ways<X, T, Out>(xf: X, input: &[T], expected: &[Out])
where
    T: Clone,
    Out: PartialEq + Debug,
    X: Clone
        + Transducer<Append<Vec<Out>>>
        + Transducer<Pending<Out>>
        + Transducer<Spy<Out>>,
    <X as Transducer<Append<Vec<Out>>>>::Transformer: Transformer<T, Acc = Vec<Out>>,
    <X as Transducer<Pending<Out>>>::Transformer: Transformer<T, Acc = VecDeque<Out>>,
    <X as Transducer<Spy<Out>>>::Transformer: Transformer<T, Acc = Vec<Out>>,
{
    let [eager, lazy, spied] = run_all_ways(xf, input);
    assert_eq!(eager, expected, "eager");
    assert_eq!(lazy, expected, "lazy");
    assert_eq!(spied, expected, "transduce1");
}

/// Property-test flavor of [`assert_all_ways`].
pub fn check_all_ways<X, T, Out>(xf: X, input: &[T], expected: &[Out]) -> TestCaseResult
where
    T: Clone,
    Out: PartialEq + Debug,
    X: Clone
        + Transducer<Append<Vec<Out>>>
        + Transducer<Pending<Out>>
        + Transducer<Spy<Out>>,
    <X as Transducer<Append<Vec<Out>>>>::Transformer: Transformer<T, Acc = Vec<Out>>,
    <X as Transducer<Pending<Out>>>::Transformer: Transformer<T, Acc = VecDeque<Out>>,
    <X as Transducer<Spy<Out>>>::Transformer: Transformer<T, Acc = Vec<Out>>,
{
    let [eager, lazy, spied] = run_all_ways(xf, input);
    prop_assert_eq!(&eager[..], expected, "eager way failed");
    prop_assert_eq!(&lazy[..], expected, "lazy way failed");
    prop_assert_eq!(&spied[..], expected, "transduce1 way failed");
    Ok(())
}

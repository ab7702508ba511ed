//! Composable transformations that know nothing about where their items
//! come from or where they end up.
//!
//! If [`Iterator`] adaptors bake the *source* into a pipeline and [`FromIterator`]
//! bakes in the *sink*, a [`Transducer`] bakes in neither. It only describes *how
//! each item is transformed*, and it can later be attached to any reducing sink (a
//! [`Transformer`]) and driven by any source.
//!
//! # Vocabulary
//!
//! - A [`Transformer`] is a reducing step with two satellites:
//!   [`init`](Transformer::init) produces an empty accumulator,
//!   [`step`](Transformer::step) folds one item into the accumulator and
//!   [`complete`](Transformer::complete) finalizes it (flushing buffered state).
//! - [`step`](Transformer::step) returns a [`Step`]. [`Continue`] keeps the reduction going,
//!   [`Break`] carries a [`Reduced`] box and stops it right away.
//! - A [`Transducer`] turns one [`Transformer`] into another. Composing several
//!   transducers and applying them to a terminal transformer yields a single transformer
//!   whose `step` does the work of every stage, one item at a time, without any
//!   intermediate collection.
//! - The driver, [`reduce()`], pulls items from any [`IntoIterator`] and feeds them
//!   to a transformer until the source is exhausted or the transformer stops.
//!
//! # Example
//!
//! ```
//! use transducers::{prelude::*, filter, into, map, take};
//!
//! let xf = compose!(
//!     map(|x: i32| x * 3),
//!     filter(|x: &i32| x % 2 == 0),
//!     take(3),
//! );
//!
//! assert_eq!(into(vec![], xf, 1..), [6, 12, 18]);
//! ```
//!
//! The very same pipeline can feed a different sink:
//!
//! ```
//! use transducers::{prelude::*, Count, interpose, into, map, transduce1};
//!
//! let xf = compose!(map(|x: i32| x.to_string()), interpose(", ".to_owned()));
//! let s: String = into(String::new(), xf, [1, 2, 3]);
//! assert_eq!(s, "1, 2, 3");
//!
//! let n = transduce1(map(|x: i32| x + 1), Count::new(), [1, 2, 3]);
//! assert_eq!(n, 3);
//! ```
//!
//! Or run lazily, pulling from the source only when asked:
//!
//! ```
//! use transducers::{prelude::*, partition_all};
//!
//! let mut batches = partition_all(2)
//!     .unwrap()
//!     .sequence(0..);
//!
//! assert_eq!(batches.next(), Some(vec![0, 1]));
//! assert_eq!(batches.next(), Some(vec![2, 3]));
//! ```
//!
//! [`Continue`]: std::ops::ControlFlow::Continue
//! [`Break`]: std::ops::ControlFlow::Break

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)+);
        }
    }};
}

macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)+);
        }
    }};
}

pub mod accumulator;
mod adaptors;
mod driver;
mod error;
pub mod prelude;
pub mod protocol;
mod reduced;
mod sequence;
mod terminal;
mod traits;

#[cfg(test)]
mod test_utils;

pub use accumulator::{Accumulator, Append};
pub use adaptors::*;
pub use driver::*;
pub use error::*;
pub use protocol::{FnTransformer, make_transformer};
pub use reduced::*;
pub use sequence::*;
pub use terminal::*;
pub use traits::*;

#[inline(always)]
pub(crate) const fn assert_transformer<R: Transformer<T>, T>(transformer: R) -> R {
    transformer
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::{filter, into, map, take};

    #[test]
    fn one_pipeline_many_sinks() {
        let xf = compose!(map(|x: u8| x + 1), filter(|x: &u8| x % 2 == 1), take(2));

        let v: Vec<u8> = into(vec![], xf.clone(), 0..10);
        assert_eq!(v, [1, 3]);

        let s: String = into(
            String::new(),
            compose!(xf.clone(), map(|x: u8| char::from(b'a' + x))),
            0..10,
        );
        assert_eq!(s, "bd");

        let lazy: Vec<u8> = xf.sequence(0..).collect();
        assert_eq!(lazy, [1, 3]);
    }
}

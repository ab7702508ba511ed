//! Re-exports the traits and the macro needed to build and run pipelines.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the methods of [`Transducer`], [`Transformer`] and
//! [`Accumulator`], the extension traits and the [`compose!`] macro.
//!
//! # Example
//!
//! ```
//! use transducers::prelude::*;
//! ```

pub use crate::accumulator::Accumulator;
pub use crate::compose;
pub use crate::traits::*;

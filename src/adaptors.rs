mod cat;
mod compose;
mod dedupe;
mod distinct;
mod drop;
mod drop_while;
mod filter;
mod flat_map;
mod from_fn;
mod identity;
mod initial;
mod interpose;
mod keep;
mod map;
mod partition_all;
mod partition_by;
mod replace;
mod tail;
mod take;
mod take_nth;
mod take_while;

pub use cat::*;
pub use compose::*;
pub use dedupe::*;
pub use distinct::*;
pub use drop::*;
pub use drop_while::*;
pub use filter::*;
pub use flat_map::*;
pub use from_fn::*;
pub use identity::*;
pub use initial::*;
pub use interpose::*;
pub use keep::*;
pub use map::*;
pub use partition_all::*;
pub use partition_by::*;
pub use replace::*;
pub use tail::*;
pub use take::*;
pub use take_nth::*;
pub use take_while::*;

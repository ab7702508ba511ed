mod count;
mod last;

pub use count::*;
pub use last::*;

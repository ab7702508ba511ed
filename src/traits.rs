mod iterator_ext;
mod transducer;
mod transformer;

pub use iterator_ext::*;
pub use transducer::*;
pub use transformer::*;

// Question selection and pagination. Everything here is synchronous and works
// on snapshots handed over by the handlers; storage never leaks in.

pub mod assemble;
pub mod category_index;
pub mod coerce;
pub mod drawer;
pub mod filter;
pub mod pager;
pub mod random;

pub use pager::PageNumber;
pub use random::{RandomSource, SeededRandom, ThreadRandom};

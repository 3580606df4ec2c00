//! Generic structures, independent of the solver.

pub mod index_heap;
pub mod luby;

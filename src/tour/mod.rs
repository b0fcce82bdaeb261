//! Solution representation.
//!
//! A [`Tour`] is a permutation of city indices read as a closed cycle. A
//! [`SwapMove`] names the two positions exchanged to reach a neighbor; it is
//! also the key under which the tabu memory records that step.

mod types;

pub use types::{SwapMove, Tour};

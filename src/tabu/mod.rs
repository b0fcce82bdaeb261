//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses memory structures
//! (the tabu list) to forbid recently used moves, preventing cycling
//! and encouraging exploration of new regions of the search space.
//!
//! Here the memory is keyed by [`SwapMove`](crate::tour::SwapMove): each
//! entry forbids re-swapping a pair of positions for `tabu_tenure`
//! iterations, unless the swap would produce a new global best and
//! aspiration is enabled.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;
mod types;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use runner::{select_admissible, TabuResult, TabuRunner, TabuSearch};
pub use types::{Candidate, Termination};

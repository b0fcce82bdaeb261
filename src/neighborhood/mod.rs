//! Neighborhood generation.
//!
//! The swap neighborhood of a tour holds every tour reachable by exchanging
//! the cities at two positions. It is rebuilt from scratch at each search
//! iteration.

mod swap;

pub use swap::{moves, SwapNeighborhood};

//! Tabu Search for the symmetric Traveling Salesman Problem.
//!
//! A tour is a permutation of city indices read as a closed cycle. Each
//! iteration evaluates every pairwise-swap neighbor of the current tour,
//! moves to the shortest one whose swap is not tabu (or that beats the best
//! tour seen when aspiration is on), and records the swap in a tenure-decayed
//! tabu memory.
//!
//! - [`distance`]: validated symmetric distance matrix and tour length.
//! - [`tour`]: tour and swap-move types, random initial tours.
//! - [`neighborhood`]: ordered enumeration of the swap neighborhood.
//! - [`tabu`]: tabu memory, configuration and the search engine.
//! - [`instance`]: named cities mapped onto a distance matrix.
//!
//! # Example
//!
//! ```
//! use tsp_tabu::instance::TspInstance;
//! use tsp_tabu::tabu::TabuConfig;
//!
//! let instance = TspInstance::sample();
//! let result = instance.solve(&TabuConfig::default().with_seed(7)).unwrap();
//! assert!(result.best.is_permutation_of(instance.len()));
//! println!("{:?} = {}", instance.route(&result.best), result.best_length);
//! ```

pub mod distance;
pub mod error;
pub mod instance;
pub mod neighborhood;
pub mod tabu;
pub mod tour;

pub use error::{Result, TspError};

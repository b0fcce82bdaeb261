//! Named TSP instances.
//!
//! Cities are identified by name at load time and mapped to indices in
//! first-seen order. The search itself only ever sees indices; names come
//! back in through [`TspInstance::route`].

mod builder;

pub use builder::{InstanceBuilder, InstanceSpec, TspInstance};

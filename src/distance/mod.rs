//! Distance model.
//!
//! An immutable, validated N×N symmetric weight table and cyclic tour-length
//! evaluation over it. Built once per run and only ever read afterwards.

mod matrix;

pub use matrix::DistanceMatrix;

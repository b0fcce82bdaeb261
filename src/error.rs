//! Input validation errors.
//!
//! Every variant is raised while building an instance or starting a run,
//! before the first search iteration. Running out of admissible moves is not
//! an error; see [`Termination`](crate::tabu::Termination).

use thiserror::Error;

/// Invalid input to the solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// Fewer than three cities were supplied.
    #[error("at least 3 cities are required, got {found}")]
    TooFewCities { found: usize },

    /// A matrix row has the wrong number of entries.
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// `weight(a, b) != weight(b, a)`.
    #[error("asymmetric weight between {a} and {b}: {forward} vs {backward}")]
    AsymmetricWeight {
        a: String,
        b: String,
        forward: f64,
        backward: f64,
    },

    /// A weight below zero.
    #[error("negative weight {weight} between {a} and {b}")]
    NegativeWeight { a: String, b: String, weight: f64 },

    /// A NaN or infinite weight.
    #[error("non-finite weight between {a} and {b}")]
    NonFiniteWeight { a: String, b: String },

    /// No weight was given for a pair of distinct cities.
    #[error("missing edge weight between {a} and {b}")]
    MissingEdge { a: String, b: String },

    /// A city name or index that is not part of the instance.
    #[error("unknown city {0}")]
    UnknownCity(String),

    /// A tour that is not a permutation of the instance's cities.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TspError::TooFewCities { found: 2 };
        assert_eq!(err.to_string(), "at least 3 cities are required, got 2");

        let err = TspError::MissingEdge {
            a: "A".into(),
            b: "C".into(),
        };
        assert_eq!(err.to_string(), "missing edge weight between A and C");

        let err = TspError::InvalidConfig("tabu_tenure must be positive".into());
        assert!(err.to_string().contains("tabu_tenure"));
    }
}

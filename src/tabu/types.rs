//! Candidate moves and termination reasons.

use std::fmt;

use crate::tour::{SwapMove, Tour};

/// An evaluated neighbor of the current tour.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The neighbor tour.
    pub tour: Tour,
    /// The swap that produced it.
    pub mv: SwapMove,
    /// Cyclic length of `tour`.
    pub length: f64,
}

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The iteration budget was used up.
    BudgetExhausted,
    /// Every neighbor was tabu and none satisfied aspiration.
    Stagnation,
    /// The wall-clock limit elapsed.
    TimeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Termination::BudgetExhausted => "iteration budget exhausted",
            Termination::Stagnation => "no admissible move",
            Termination::TimeLimit => "time limit reached",
            Termination::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

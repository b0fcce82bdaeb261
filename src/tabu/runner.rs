//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate a random initial tour
//! 2. At each iteration:
//!    a. Evaluate every swap neighbor of the current tour
//!    b. Keep the non-tabu moves, plus tabu moves that beat the global best
//!    when aspiration is enabled
//!    c. Stop if nothing is admissible
//!    d. Move to the shortest admissible neighbor, even if it is longer
//!    e. Update global best if strictly improved
//!    f. Forbid the move at full tenure, then decay every entry
//! 3. Terminate after max iterations or stagnation
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::config::TabuConfig;
use super::memory::TabuMemory;
use super::types::{Candidate, Termination};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::neighborhood::SwapNeighborhood;
use crate::tour::{SwapMove, Tour};

/// Result of a Tabu Search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best tour found.
    pub best: Tour,
    /// Cyclic length of the best tour.
    pub best_length: f64,
    /// Length of the starting tour.
    pub initial_length: f64,
    /// Accepted moves.
    pub iterations: usize,
    /// Iteration after which the best tour was found (0 = initial tour).
    pub best_iteration: usize,
    /// Best length after each accepted move.
    pub cost_history: Vec<f64>,
    /// Why the run stopped.
    pub termination: Termination,
}

/// Index of the shortest admissible candidate.
///
/// A candidate is admissible when its move is not tabu, or when
/// `aspiration` is set and its length is strictly below `best_length`.
/// Ties go to the earliest candidate. Returns `None` if nothing is
/// admissible.
pub fn select_admissible(
    candidates: &[Candidate],
    memory: &TabuMemory,
    best_length: f64,
    aspiration: bool,
) -> Option<usize> {
    let mut chosen = None;
    let mut chosen_length = f64::INFINITY;

    for (idx, c) in candidates.iter().enumerate() {
        if memory.is_tabu(c.mv) && !(aspiration && c.length < best_length) {
            continue;
        }
        if chosen.is_none() || c.length < chosen_length {
            chosen = Some(idx);
            chosen_length = c.length;
        }
    }

    chosen
}

/// Stepwise Tabu Search state over one distance matrix.
///
/// [`TabuRunner`] drives this to completion; tests and callers that want to
/// observe each iteration can call [`step`](Self::step) directly.
#[derive(Debug, Clone)]
pub struct TabuSearch<'a> {
    matrix: &'a DistanceMatrix,
    config: TabuConfig,
    current: Tour,
    current_length: f64,
    best: Tour,
    best_length: f64,
    best_iteration: usize,
    initial_length: f64,
    memory: TabuMemory,
    iteration: usize,
    cost_history: Vec<f64>,
    finished: Option<Termination>,
}

impl<'a> TabuSearch<'a> {
    /// Starts from a uniformly random tour drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(
        matrix: &'a DistanceMatrix,
        config: TabuConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let initial = Tour::random(matrix.len(), rng);
        Self::with_initial(matrix, config, initial)
    }

    /// Starts from the given tour.
    pub fn with_initial(
        matrix: &'a DistanceMatrix,
        config: TabuConfig,
        initial: Tour,
    ) -> Result<Self> {
        config.validate()?;
        if matrix.len() < 3 {
            return Err(TspError::TooFewCities {
                found: matrix.len(),
            });
        }
        let length = matrix.tour_length(initial.as_slice())?;

        Ok(Self {
            matrix,
            current: initial.clone(),
            current_length: length,
            best: initial,
            best_length: length,
            best_iteration: 0,
            initial_length: length,
            memory: TabuMemory::new(),
            iteration: 0,
            cost_history: Vec::with_capacity(config.max_iterations),
            config,
            finished: None,
        })
    }

    /// Runs one iteration.
    ///
    /// Returns `Some` once the search has stopped; further calls return the
    /// same reason without changing state.
    pub fn step(&mut self) -> Option<Termination> {
        if let Some(t) = self.finished {
            return Some(t);
        }

        let mut candidates = self.evaluate_neighborhood();
        let Some(idx) = select_admissible(
            &candidates,
            &self.memory,
            self.best_length,
            self.config.aspiration,
        ) else {
            // Nothing accepted, so no decay either.
            trace!("iteration {}: no admissible move", self.iteration);
            return self.finish(Termination::Stagnation);
        };

        let Candidate { tour, mv, length } = candidates.swap_remove(idx);
        self.current = tour;
        self.current_length = length;

        if length < self.best_length {
            self.best = self.current.clone();
            self.best_length = length;
            self.best_iteration = self.iteration + 1;
            debug!(
                "iteration {}: new best length {}",
                self.best_iteration, self.best_length
            );
        }

        self.memory.forbid(mv, self.config.tabu_tenure);
        self.memory.decay();

        self.iteration += 1;
        self.cost_history.push(self.best_length);
        trace!(
            "iteration {}: {} -> length {} (tabu {})",
            self.iteration,
            mv,
            length,
            self.memory.len()
        );

        if self.iteration >= self.config.max_iterations {
            return self.finish(Termination::BudgetExhausted);
        }
        None
    }

    fn finish(&mut self, termination: Termination) -> Option<Termination> {
        self.finished = Some(termination);
        Some(termination)
    }

    /// Evaluates all swap neighbors in enumeration order.
    fn evaluate_neighborhood(&self) -> Vec<Candidate> {
        let matrix = self.matrix;
        let evaluate = |(tour, mv): (Tour, SwapMove)| {
            let length = matrix.cyclic_length(tour.as_slice());
            Candidate { tour, mv, length }
        };

        let neighbors: Vec<_> = SwapNeighborhood::new(&self.current).collect();
        if self.config.parallel {
            neighbors.into_par_iter().map(evaluate).collect()
        } else {
            neighbors.into_iter().map(evaluate).collect()
        }
    }

    /// Consumes the search, reporting the best tour found.
    pub fn into_result(self, termination: Termination) -> TabuResult {
        TabuResult {
            best: self.best,
            best_length: self.best_length,
            initial_length: self.initial_length,
            iterations: self.iteration,
            best_iteration: self.best_iteration,
            cost_history: self.cost_history,
            termination,
        }
    }

    pub fn current(&self) -> &Tour {
        &self.current
    }

    pub fn current_length(&self) -> f64 {
        self.current_length
    }

    pub fn best(&self) -> &Tour {
        &self.best
    }

    pub fn best_length(&self) -> f64 {
        self.best_length
    }

    pub fn memory(&self) -> &TabuMemory {
        &self.memory
    }

    /// Accepted moves so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn config(&self) -> &TabuConfig {
        &self.config
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given distance matrix.
    ///
    /// The initial tour is drawn from a generator seeded with
    /// `config.seed`, or from OS entropy when no seed is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_tabu::distance::DistanceMatrix;
    /// use tsp_tabu::tabu::{TabuConfig, TabuRunner};
    ///
    /// let matrix = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    ///     .unwrap();
    /// let config = TabuConfig::default().with_max_iterations(50).with_seed(42);
    /// let result = TabuRunner::run(&matrix, &config).unwrap();
    /// assert!((result.best_length - 4.0).abs() < 1e-9);
    /// ```
    pub fn run(matrix: &DistanceMatrix, config: &TabuConfig) -> Result<TabuResult> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If the flag is set, the search stops before its next iteration and
    /// returns the best tour found so far.
    pub fn run_with_cancel(
        matrix: &DistanceMatrix,
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TabuResult> {
        let mut rng = create_rng(config.seed);
        let search = TabuSearch::new(matrix, config.clone(), &mut rng)?;
        Ok(drive(search, cancel.as_deref()))
    }

    /// Runs with a caller-supplied random source for the initial tour.
    pub fn run_with_rng<R: Rng + ?Sized>(
        matrix: &DistanceMatrix,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<TabuResult> {
        let search = TabuSearch::new(matrix, config.clone(), rng)?;
        Ok(drive(search, None))
    }

    /// Runs from the given initial tour.
    pub fn run_from(
        matrix: &DistanceMatrix,
        config: &TabuConfig,
        initial: Tour,
    ) -> Result<TabuResult> {
        let search = TabuSearch::with_initial(matrix, config.clone(), initial)?;
        Ok(drive(search, None))
    }
}

fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

fn drive(mut search: TabuSearch<'_>, cancel: Option<&AtomicBool>) -> TabuResult {
    let started = Instant::now();
    debug!(
        "tabu search: {} cities, initial length {}, {:?}",
        search.matrix.len(),
        search.initial_length,
        search.config
    );

    let termination = loop {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            break Termination::Cancelled;
        }
        if search
            .config
            .time_limit
            .is_some_and(|limit| started.elapsed() >= limit)
        {
            break Termination::TimeLimit;
        }
        if let Some(t) = search.step() {
            break t;
        }
    };

    debug!(
        "tabu search stopped ({termination}) after {} iterations: best length {} at iteration {}",
        search.iteration, search.best_length, search.best_iteration
    );
    search.into_result(termination)
}

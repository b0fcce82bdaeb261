//! Short-term tabu memory keyed by swap move.

use std::collections::HashMap;

use crate::tour::SwapMove;

/// Forbidden moves and their remaining tenure.
///
/// A move is absent until [`forbid`](Self::forbid) inserts it, then loses
/// one unit of tenure per [`decay`](Self::decay) and is dropped on reaching
/// zero. Memory holds at most one entry per move, so its size is bounded by
/// the tenure rather than by the number of tours visited.
///
/// # Examples
///
/// ```
/// use tsp_tabu::tabu::TabuMemory;
/// use tsp_tabu::tour::SwapMove;
///
/// let mv = SwapMove::new(0, 2).unwrap();
/// let mut memory = TabuMemory::new();
/// memory.forbid(mv, 2);
/// memory.decay();
/// assert!(memory.is_tabu(mv));
/// memory.decay();
/// assert!(!memory.is_tabu(mv));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabuMemory {
    entries: HashMap<SwapMove, usize>,
}

impl TabuMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `mv` is present with positive tenure.
    #[inline]
    pub fn is_tabu(&self, mv: SwapMove) -> bool {
        self.entries.get(&mv).is_some_and(|&t| t > 0)
    }

    /// Sets the tenure of `mv`, overwriting any remaining tenure.
    ///
    /// A zero tenure removes the entry.
    pub fn forbid(&mut self, mv: SwapMove, tenure: usize) {
        if tenure == 0 {
            self.entries.remove(&mv);
        } else {
            self.entries.insert(mv, tenure);
        }
    }

    /// Decrements every tenure by one and drops expired entries.
    pub fn decay(&mut self) {
        self.entries.retain(|_, tenure| {
            *tenure -= 1;
            *tenure > 0
        });
    }

    /// Remaining tenure of `mv`, if it is tabu.
    pub fn remaining(&self, mv: SwapMove) -> Option<usize> {
        self.entries.get(&mv).copied()
    }

    /// Number of tabu moves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

//! Tour and move types.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, TspError};

/// A position pair `(i, j)` with `i < j` whose entries are exchanged.
///
/// Two tours reached through the same position pair share one key: the tabu
/// memory forbids re-using positions, not revisiting tours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapMove {
    i: usize,
    j: usize,
}

impl SwapMove {
    /// Creates the move for positions `a` and `b` in either order.
    ///
    /// Returns `None` when `a == b`.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { i: a, j: b }),
            std::cmp::Ordering::Greater => Some(Self { i: b, j: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Lower position.
    #[inline]
    pub fn i(&self) -> usize {
        self.i
    }

    /// Higher position.
    #[inline]
    pub fn j(&self) -> usize {
        self.j
    }
}

impl fmt::Display for SwapMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "swap({}, {})", self.i, self.j)
    }
}

/// An ordered visit of every city exactly once, closed back to its start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Uniformly random permutation of `0..n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self(order)
    }

    /// Wraps `order` after checking it is a permutation of `0..n`.
    pub fn from_order(order: Vec<usize>, n: usize) -> Result<Self> {
        if order.len() != n {
            return Err(TspError::InvalidTour(format!(
                "expected {n} cities, got {}",
                order.len()
            )));
        }
        let tour = Self(order);
        if !tour.is_permutation_of(n) {
            return Err(TspError::InvalidTour(format!(
                "{:?} is not a permutation of 0..{n}",
                tour.0
            )));
        }
        Ok(tour)
    }

    /// True iff the tour holds each of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        self.0
            .iter()
            .all(|&c| c < n && !std::mem::replace(&mut seen[c], true))
    }

    /// Exchanges the entries at the move's positions in place.
    #[inline]
    pub fn swap(&mut self, mv: SwapMove) {
        self.0.swap(mv.i, mv.j);
    }

    /// Copy of this tour with the move applied.
    pub fn swapped(&self, mv: SwapMove) -> Self {
        let mut next = self.clone();
        next.swap(mv);
        next
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_swap_move_normalizes_order() {
        let a = SwapMove::new(4, 1).unwrap();
        let b = SwapMove::new(1, 4).unwrap();
        assert_eq!(a, b);
        assert_eq!((a.i(), a.j()), (1, 4));
        assert!(SwapMove::new(2, 2).is_none());
        assert_eq!(a.to_string(), "swap(1, 4)");
    }

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 3..20 {
            let tour = Tour::random(n, &mut rng);
            assert!(tour.is_permutation_of(n));
        }
    }

    #[test]
    fn test_random_tour_seeded_is_reproducible() {
        let a = Tour::random(10, &mut StdRng::seed_from_u64(42));
        let b = Tour::random(10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_swapped_leaves_original_untouched() {
        let tour = Tour::identity(5);
        let next = tour.swapped(SwapMove::new(0, 3).unwrap());
        assert_eq!(tour.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(next.as_slice(), &[3, 1, 2, 0, 4]);
    }

    #[test]
    fn test_from_order_validation() {
        assert!(Tour::from_order(vec![2, 0, 1], 3).is_ok());
        assert!(Tour::from_order(vec![0, 0, 1], 3).is_err());
        assert!(Tour::from_order(vec![0, 1, 3], 3).is_err());
        assert!(Tour::from_order(vec![0, 1], 3).is_err());
    }
}

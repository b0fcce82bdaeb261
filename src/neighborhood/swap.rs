//! Pairwise-swap neighborhood.

use crate::tour::{SwapMove, Tour};

/// All position pairs `(i, j)`, `i < j < n`, in lexicographic order.
pub fn moves(n: usize) -> impl Iterator<Item = SwapMove> {
    (0..n).flat_map(move |i| ((i + 1)..n).filter_map(move |j| SwapMove::new(i, j)))
}

/// Iterator over `(neighbor, move)` pairs of a tour.
///
/// Yields exactly `n(n-1)/2` items ordered by `(i, j)`; the search relies
/// on this order to break ties.
///
/// # Examples
///
/// ```
/// use tsp_tabu::neighborhood::SwapNeighborhood;
/// use tsp_tabu::tour::Tour;
///
/// let tour = Tour::identity(4);
/// let neighbors: Vec<_> = SwapNeighborhood::new(&tour).collect();
/// assert_eq!(neighbors.len(), SwapNeighborhood::size(4));
/// assert_eq!(neighbors[0].0.as_slice(), &[1, 0, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct SwapNeighborhood<'a> {
    tour: &'a Tour,
    i: usize,
    j: usize,
}

impl<'a> SwapNeighborhood<'a> {
    pub fn new(tour: &'a Tour) -> Self {
        Self { tour, i: 0, j: 1 }
    }

    /// Neighborhood size for `n` cities.
    #[inline]
    pub fn size(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }
}

impl Iterator for SwapNeighborhood<'_> {
    type Item = (Tour, SwapMove);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.tour.len();
        if self.j >= n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= n {
                return None;
            }
        }
        let mv = SwapMove::new(self.i, self.j)?;
        self.j += 1;
        Some((self.tour.swapped(mv), mv))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.tour.len();
        if self.i + 1 >= n {
            return (0, Some(0));
        }
        // Remaining in the current row plus every later row.
        let row = n.saturating_sub(self.j);
        let rest = SwapNeighborhood::size(n - self.i - 1);
        (row + rest, Some(row + rest))
    }
}

impl ExactSizeIterator for SwapNeighborhood<'_> {}

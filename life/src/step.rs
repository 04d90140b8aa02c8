// step.rs - One generation of B3/S23 over a sparse live set

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use crate::{Cell, LiveSet};

/// How many live cells claim each coordinate as a neighbor.
pub type NeighborCounts = HashMap<Cell, u32>;

/// Counts occurrences of every item.
pub fn frequencies<T, I>(items: I) -> HashMap<T, u32>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    items.into_iter().fold(HashMap::new(), |mut counts, item| {
        *counts.entry(item).or_insert(0) += 1;
        counts
    })
}

/// Every neighbor of every cell, counted with multiplicity.
///
/// A coordinate reached from several live cells is counted once per cell,
/// which is exactly its live-neighbor count. Coordinates with no live
/// neighbors never appear.
pub fn neighbor_counts<I>(cells: I) -> NeighborCounts
where
    I: IntoIterator<Item = Cell>,
{
    frequencies(cells.into_iter().flat_map(Cell::neighbors))
}

/// Folds `from` into `into` by adding counts per coordinate.
pub fn merge_counts(mut into: NeighborCounts, from: NeighborCounts) -> NeighborCounts {
    for (cell, count) in from {
        *into.entry(cell).or_insert(0) += count;
    }
    into
}

/// Applies the birth/survival rule to precomputed neighbor counts.
pub fn next_generation(live: &LiveSet, counts: NeighborCounts) -> LiveSet {
    counts
        .into_iter()
        .filter(|&(cell, count)| match (live.contains(&cell), count) {
            (true, 2) | (true, 3) => true, // Survival
            (false, 3)            => true, // Birth
            _                     => false, // Death or stays dead
        })
        .map(|(cell, _)| cell)
        .collect()
}

/// Computes the live set one generation after `live`.
///
/// Only the live cells are consulted. The input is left untouched and the
/// result shares nothing with it.
pub fn step(live: &LiveSet) -> LiveSet {
    let counts = neighbor_counts(live.iter().copied());
    let candidates = counts.len();
    let next = next_generation(live, counts);
    trace!(population = live.len(), candidates, next = next.len(), "step");
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_counts_duplicates() {
        let counts = frequencies(["a", "b", "a", "c", "a"]);
        assert_eq!(counts["a"], 3);
        assert_eq!(counts["b"], 1);
        assert_eq!(counts["c"], 1);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn isolated_cell_claims_eight_singletons() {
        let counts = neighbor_counts([Cell::new(0, 0)]);
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&n| n == 1));
        assert!(!counts.contains_key(&Cell::new(0, 0)));
    }

    #[test]
    fn merging_partials_matches_whole_count() {
        let cells = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0), Cell::new(1, 1)];
        let whole = neighbor_counts(cells);
        let merged = merge_counts(neighbor_counts(cells[..2].iter().copied()), neighbor_counts(cells[2..].iter().copied()));
        assert_eq!(whole, merged);
    }

    #[test]
    fn survival_needs_membership_but_birth_does_not() {
        let live = LiveSet::from([(0, 0)]);
        let counts: NeighborCounts = [(Cell::new(0, 0), 2), (Cell::new(5, 5), 2), (Cell::new(9, 9), 3)]
            .into_iter()
            .collect();
        let next = next_generation(&live, counts);
        assert_eq!(next, LiveSet::from([(0, 0), (9, 9)]));
    }
}

// coro.rs - Step split across cooperative tokio tasks
//
// Each task counts neighbors for its own slice of the live cells. The partial
// counts are merged by addition before the rule is applied, so no task ever
// writes to shared state.

use tracing::trace;

use crate::{Cell, CoroError, LiveSet, NeighborCounts, merge_counts, next_generation};

/// Counting coroutine for one slice of live cells.
async fn count_slice(slice_index: usize, cells: Vec<Cell>) -> (usize, NeighborCounts) {
    let mut counts = NeighborCounts::with_capacity(cells.len() * 8);
    for cell in cells {
        for neighbor in cell.neighbors() {
            *counts.entry(neighbor).or_insert(0) += 1;
        }
        tokio::task::yield_now().await; // Cooperative yielding
    }
    (slice_index, counts)
}

/// Same result as [`crate::step`], with neighbor counting spread over
/// `workers` spawned tasks.
///
/// Must be awaited inside a tokio runtime.
pub async fn step_coro(live: &LiveSet, workers: usize) -> Result<LiveSet, CoroError> {
    let cells: Vec<Cell> = live.iter().copied().collect();
    let slice_len = cells.len().div_ceil(workers.max(1)).max(1);

    let handles: Vec<_> = cells
        .chunks(slice_len)
        .enumerate()
        .map(|(i, slice)| tokio::spawn(count_slice(i, slice.to_vec())))
        .collect();

    let mut counts = NeighborCounts::new();
    for handle in handles {
        let (slice_index, partial) = handle.await?;
        trace!(slice_index, candidates = partial.len(), "slice counted");
        counts = merge_counts(counts, partial);
    }

    Ok(next_generation(live, counts))
}

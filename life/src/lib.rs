//! Sparse Conway's Game of Life (B3/S23) on an unbounded integer plane.
//!
//! The board is never stored densely: a [`LiveSet`] holds only the live
//! coordinates, and [`step`] derives the next generation by counting how many
//! live cells claim each coordinate as a neighbor.

mod cell;
pub mod coro;
pub mod error;
pub mod history;
mod live_set;
pub mod patterns;
mod step;

pub use cell::Cell;
pub use coro::step_coro;
pub use error::{CoroError, ParseError};
pub use history::CycleDetector;
pub use live_set::LiveSet;
pub use step::{NeighborCounts, frequencies, merge_counts, neighbor_counts, next_generation, step};

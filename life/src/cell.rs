// cell.rs - Grid coordinate value type

/// One integer coordinate on the unbounded plane.
///
/// A `Cell` is only a location, never a state: whether it is alive is decided
/// by membership in a [`LiveSet`](crate::LiveSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

// Neighbor offsets, row by row, skipping the centre
const NEIGHBOR_DELTAS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Checked translation; `None` when either coordinate leaves `i64`.
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The 8 surrounding cells, diagonals included.
    ///
    /// Coordinates past the edge of `i64` are skipped rather than wrapped, so
    /// the plane simply ends there.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_DELTAS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

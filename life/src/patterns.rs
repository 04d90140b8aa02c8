// patterns.rs - Named starting patterns and random soups
//
// Coordinates are (x, y) relative to the pattern's top-left, y pointing down.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Cell, LiveSet};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

impl Pattern {
    pub fn live_set(&self) -> LiveSet {
        self.cells.iter().copied().collect()
    }

    /// The pattern with its top-left corner moved to `origin`.
    pub fn placed_at(&self, origin: Cell) -> LiveSet {
        self.live_set().translate(origin.x, origin.y)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

/// Case-insensitive lookup in [`PATTERNS`].
pub fn find(name: &str) -> Option<&'static Pattern> {
    find_index(name).map(|i| &PATTERNS[i])
}

/// Position of the named pattern in [`PATTERNS`], ignoring case.
pub fn find_index(name: &str) -> Option<usize> {
    PATTERNS.iter().position(|p| p.name.eq_ignore_ascii_case(name))
}

/// Fills `width x height` from `(0, 0)` with cells alive at probability
/// `density` (clamped to `[0, 1]`). Deterministic for a given `seed`.
pub fn random_soup(width: i64, height: i64, density: f64, seed: u64) -> LiveSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };

    let mut live = LiveSet::new();
    for y in 0..height {
        for x in 0..width {
            if rng.gen_bool(density) {
                live.insert(Cell::new(x, y));
            }
        }
    }
    live
}

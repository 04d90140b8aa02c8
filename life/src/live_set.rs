// live_set.rs - Sparse board state: the set of live coordinates

use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::collections::hash_set;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{Cell, ParseError};

/// The cells alive at one generation. This is the whole state of a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Cell>,
}

impl LiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Returns `true` if the cell was not already alive.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Returns `true` if the cell was alive.
    pub fn remove(&mut self, cell: &Cell) -> bool {
        self.cells.remove(cell)
    }

    /// Flips membership of `cell` and returns whether it is alive afterwards.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    /// Inclusive `(min, max)` corners of the bounding box, `None` when empty.
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        let first = *self.cells.iter().next()?;
        let (min, max) = self.cells.iter().fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        });
        Some((min, max))
    }

    /// Shifts every cell by `(dx, dy)`. Cells pushed past `i64` are dropped.
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        self.cells.iter().filter_map(|c| c.offset(dx, dy)).collect()
    }

    /// The same shape moved so its bounding box starts at `(0, 0)`.
    pub fn normalized(&self) -> Self {
        match self.bounds() {
            // Spans wider than i64::MAX wrap.
            Some((min, _)) => self
                .cells
                .iter()
                .map(|c| Cell::new(c.x.wrapping_sub(min.x), c.y.wrapping_sub(min.y)))
                .collect(),
            None => Self::new(),
        }
    }

    /// Order-independent hash of the contents.
    pub fn fingerprint(&self) -> u64 {
        let mut sorted: Vec<&Cell> = self.cells.iter().collect();
        sorted.sort_unstable();
        let mut hasher = DefaultHasher::new();
        sorted.len().hash(&mut hasher);
        for cell in sorted {
            cell.hash(&mut hasher);
        }
        hasher.finish()
    }

    /// The next generation. See [`crate::step`].
    pub fn step(&self) -> Self {
        crate::step(self)
    }

    /// `self`, then every following generation, forever.
    pub fn generations(self) -> impl Iterator<Item = LiveSet> {
        std::iter::successors(Some(self), |live| Some(live.step()))
    }
}

impl FromIterator<Cell> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for LiveSet {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(Cell::from).collect()
    }
}

impl From<&[(i64, i64)]> for LiveSet {
    fn from(coords: &[(i64, i64)]) -> Self {
        coords.iter().copied().collect()
    }
}

impl<const N: usize> From<[(i64, i64); N]> for LiveSet {
    fn from(coords: [(i64, i64); N]) -> Self {
        coords.into_iter().collect()
    }
}

impl Extend<Cell> for LiveSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl IntoIterator for LiveSet {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a LiveSet {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Plaintext picture of the bounding box: `O` alive, `.` dead, one row per line.
///
/// Output grows with the bounding-box area, not the population, so a few
/// cells spread far apart produce an enormous picture.
impl fmt::Display for LiveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((min, max)) = self.bounds() else {
            return Ok(());
        };
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let ch = if self.contains(&Cell::new(x, y)) { 'O' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for LiveSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut live = LiveSet::new();
        let rows = s.lines().enumerate().filter(|(_, line)| !line.starts_with('!'));
        for (y, (line_index, line)) in rows.enumerate() {
            for (x, ch) in line.chars().enumerate() {
                match ch {
                    'O' | 'o' | '*' => {
                        live.insert(Cell::new(x as i64, y as i64));
                    }
                    '.' | ' ' => {}
                    found => {
                        return Err(ParseError::UnexpectedChar {
                            line: line_index + 1,
                            column: x + 1,
                            found,
                        });
                    }
                }
            }
        }
        Ok(live)
    }
}

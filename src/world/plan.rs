//! Floor plan data structure
//!
//! The set of occupied cells produced by one generation run. Cells are only
//! ever added, never removed.

use std::collections::HashSet;

use serde::Serialize;

use super::cell::GridCell;

/// Axis-aligned extent of a floor plan (inclusive on all sides)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Bounds enclosing a single cell
    pub fn point(cell: GridCell) -> Self {
        Self {
            min_x: cell.x,
            max_x: cell.x,
            min_y: cell.y,
            max_y: cell.y,
        }
    }

    /// Grow to include `cell`
    fn include(&mut self, cell: GridCell) {
        self.min_x = self.min_x.min(cell.x);
        self.max_x = self.max_x.max(cell.x);
        self.min_y = self.min_y.min(cell.y);
        self.max_y = self.max_y.max(cell.y);
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        cell.x >= self.min_x && cell.x <= self.max_x && cell.y >= self.min_y && cell.y <= self.max_y
    }
}

/// Deduplicating store of occupied cells
///
/// Keeps insertion order alongside a hash index so iteration is reproducible
/// for a given seed while membership checks stay O(1).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FloorPlan {
    cells: Vec<GridCell>,
    #[serde(skip)]
    index: HashSet<GridCell>,
    #[serde(skip)]
    bounds: Option<Bounds>,
}

impl FloorPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupy (x, y) if it is free. Returns the cell either way.
    pub fn try_occupy(&mut self, x: i32, y: i32) -> GridCell {
        self.occupy(GridCell::new(x, y))
    }

    /// Occupy `cell` if it is free. Returns the cell either way.
    pub fn occupy(&mut self, cell: GridCell) -> GridCell {
        if self.index.insert(cell) {
            log::trace!("Occupied [{}, {}]", cell.x, cell.y);
            self.cells.push(cell);
            match self.bounds.as_mut() {
                Some(bounds) => bounds.include(cell),
                None => self.bounds = Some(Bounds::point(cell)),
            }
        }
        cell
    }

    /// Check if a cell is occupied
    #[inline]
    pub fn contains(&self, cell: GridCell) -> bool {
        self.index.contains(&cell)
    }

    /// All occupied cells, in the order they were first occupied
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn min_x(&self) -> Option<i32> {
        self.bounds.map(|b| b.min_x)
    }

    pub fn max_x(&self) -> Option<i32> {
        self.bounds.map(|b| b.max_x)
    }

    pub fn min_y(&self) -> Option<i32> {
        self.bounds.map(|b| b.min_y)
    }

    pub fn max_y(&self) -> Option<i32> {
        self.bounds.map(|b| b.max_y)
    }
}

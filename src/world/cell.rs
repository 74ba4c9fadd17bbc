//! Grid coordinates and headings
//!
//! The floor lives on an unbounded integer grid. Y grows downwards.

use serde::{Deserialize, Serialize};

/// A single square on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    /// The cell every level starts from
    pub const ORIGIN: GridCell = GridCell { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`
    pub fn step(&self, direction: Direction) -> GridCell {
        let (dx, dy) = direction.delta();
        GridCell::new(self.x + dx, self.y + dy)
    }

    /// Offset by an arbitrary delta
    pub fn offset(&self, dx: i32, dy: i32) -> GridCell {
        GridCell::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to another cell
    pub fn distance(&self, other: &GridCell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// One of the four cardinal headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All headings, in table order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step as (dx, dy)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The two 90 degree turns available from this heading
    pub fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }

    /// Slot in direction-indexed tables
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_perpendicular_excludes_own_axis() {
        for dir in Direction::ALL {
            let [a, b] = dir.perpendicular();
            assert_ne!(a, dir);
            assert_ne!(b, dir);
            assert_ne!(a, dir.opposite());
            assert_eq!(a.opposite(), b);
        }
    }

    #[test]
    fn test_step_uses_delta() {
        let cell = GridCell::new(3, -2);
        assert_eq!(cell.step(Direction::Up), GridCell::new(3, -3));
        assert_eq!(cell.step(Direction::Down), GridCell::new(3, -1));
        assert_eq!(cell.step(Direction::Left), GridCell::new(2, -2));
        assert_eq!(cell.step(Direction::Right), GridCell::new(4, -2));
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }
}

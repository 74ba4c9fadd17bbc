//! Tile definitions
//!
//! Walls surrounding the generated floor, and the neighbour masks used to
//! pick a tile variant for each square.

use std::collections::HashSet;

use serde::Serialize;

use super::cell::GridCell;
use super::plan::FloorPlan;

/// Raw 8-neighbour masks that can occur once lone diagonals are dropped,
/// sorted. A mask's variant id is its position here plus one.
const BLOB_MASKS: [u8; 46] = [
    2, 8, 10, 11, 16, 18, 22, 24, 26, 27, 30, 31, 64, 66, 72, 74, 75, 80, 82, 86, 88, 90, 91, 94,
    95, 104, 106, 107, 120, 122, 123, 126, 127, 208, 210, 214, 216, 218, 219, 222, 223, 248, 250,
    251, 254, 255,
];

/// Variant id for a floor with no floor neighbours at all
pub const ISOLATED_FLOOR_ID: u8 = 47;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TileKind {
    Floor,
    Wall,
}

/// A square of the finished level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub cell: GridCell,
    pub kind: TileKind,
    /// Variant id: 1..=47 for floors, 0..=15 for walls
    pub mask: u8,
}

/// Every unoccupied cell touching the floor, diagonals included.
///
/// Order follows the floor's insertion order, scanning each floor's
/// neighbourhood column by column.
pub fn wall_cells(plan: &FloorPlan) -> Vec<GridCell> {
    let mut seen = HashSet::new();
    let mut walls = Vec::new();

    for floor in plan.iter() {
        for dx in -1..=1 {
            for dy in -1..=1 {
                let cell = floor.offset(dx, dy);
                if !plan.contains(cell) && seen.insert(cell) {
                    walls.push(cell);
                }
            }
        }
    }

    walls
}

/// Floor variant id from the 8 surrounding cells.
///
/// ```text
/// [  1] [  2] [  4]
/// [  8] [   ] [ 16]
/// [ 32] [ 64] [128]
/// ```
///
/// A diagonal only counts when both orthogonals next to it are floor.
pub fn floor_mask(plan: &FloorPlan, cell: GridCell) -> u8 {
    let at = |dx, dy| plan.contains(cell.offset(dx, dy));

    let up = at(0, -1);
    let down = at(0, 1);
    let left = at(-1, 0);
    let right = at(1, 0);

    let mut raw = 0u8;
    if up && left && at(-1, -1) {
        raw |= 1;
    }
    if up {
        raw |= 2;
    }
    if up && right && at(1, -1) {
        raw |= 4;
    }
    if left {
        raw |= 8;
    }
    if right {
        raw |= 16;
    }
    if down && left && at(-1, 1) {
        raw |= 32;
    }
    if down {
        raw |= 64;
    }
    if down && right && at(1, 1) {
        raw |= 128;
    }

    blob_id(raw)
}

fn blob_id(raw: u8) -> u8 {
    match BLOB_MASKS.binary_search(&raw) {
        Ok(idx) => idx as u8 + 1,
        // 0 is the only raw mask the diagonal rule can produce that isn't listed
        Err(_) => ISOLATED_FLOOR_ID,
    }
}

/// Wall variant id from the 4 orthogonal wall neighbours
/// (up = 1, right = 2, down = 4, left = 8).
pub fn wall_mask(walls: &HashSet<GridCell>, cell: GridCell) -> u8 {
    let mut mask = 0;
    if walls.contains(&cell.offset(0, -1)) {
        mask |= 1;
    }
    if walls.contains(&cell.offset(1, 0)) {
        mask |= 2;
    }
    if walls.contains(&cell.offset(0, 1)) {
        mask |= 4;
    }
    if walls.contains(&cell.offset(-1, 0)) {
        mask |= 8;
    }
    mask
}

/// Floors followed by walls, each with its variant id
pub fn build_tiles(plan: &FloorPlan) -> Vec<Tile> {
    let walls = wall_cells(plan);
    let wall_set: HashSet<GridCell> = walls.iter().copied().collect();

    let floors = plan.iter().map(|&cell| Tile {
        cell,
        kind: TileKind::Floor,
        mask: floor_mask(plan, cell),
    });
    let walls = walls.iter().map(|&cell| Tile {
        cell,
        kind: TileKind::Wall,
        mask: wall_mask(&wall_set, cell),
    });

    floors.chain(walls).collect()
}

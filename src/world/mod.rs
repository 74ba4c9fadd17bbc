//! World module
//!
//! Grid cells, the floor plan, tiles, and procedural generation.

pub mod cell;
pub mod plan;
pub mod tile;
pub mod generation;

pub use cell::{Direction, GridCell};
pub use plan::{Bounds, FloorPlan};
pub use tile::{Tile, TileKind};

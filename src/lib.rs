//! Floorwalk - random-walk dungeon floor generator
//!
//! Walks a biased path across an unbounded grid, carving corridors, side
//! branches and rough-cornered rooms into a connected floor plan.

pub mod config;
pub mod error;
pub mod world;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use error::{ConfigError, GenerationError};
pub use world::generation::{Level, LevelGenerator};
pub use world::{Bounds, Direction, FloorPlan, GridCell};

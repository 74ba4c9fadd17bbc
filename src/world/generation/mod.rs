//! Procedural floor generation
//!
//! A single biased random walk with rooms and side branches carved along the
//! way. [`LevelGenerator`] owns the configuration and the most recent level;
//! everything mutable during a run lives inside [`walk::walk`].

pub mod bias;
pub mod branches;
pub mod random;
pub mod rooms;
pub mod walk;

pub use bias::{DirectionBias, WeightTable};
pub use branches::{carve_branch, Branch};
pub use random::{choose_weighted, clipped_gaussian, percent_chance};
pub use rooms::{carve_room, Room};
pub use walk::{walk, Turn, Walk};

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::world::tile::{build_tiles, wall_cells, Tile};
use crate::world::{Bounds, Direction, FloorPlan, GridCell};

/// A generated level
#[derive(Debug, Clone, Serialize)]
pub struct Level {
    /// Seed the level was generated from
    pub seed: u64,
    pub start: GridCell,
    /// Where the main path finished
    pub end: GridCell,
    pub initial_heading: Direction,
    pub main_path_length: i32,
    pub turns: Vec<Turn>,
    /// Rooms on the main path (start, turns, end)
    pub rooms: Vec<Room>,
    pub branches: Vec<Branch>,
    pub bounds: Bounds,
    pub plan: FloorPlan,
}

impl Level {
    fn from_walk(seed: u64, walk: Walk) -> Self {
        let bounds = walk.plan.bounds().unwrap_or(Bounds::point(walk.start));
        Self {
            seed,
            start: walk.start,
            end: walk.end,
            initial_heading: walk.initial_heading,
            main_path_length: walk.main_path_length,
            turns: walk.turns,
            rooms: walk.rooms,
            branches: walk.branches,
            bounds,
            plan: walk.plan,
        }
    }

    /// Number of floor cells
    pub fn floor_area(&self) -> usize {
        self.plan.len()
    }

    /// Wall cells surrounding the floor
    pub fn walls(&self) -> Vec<GridCell> {
        wall_cells(&self.plan)
    }

    /// Floor and wall tiles with their variant ids
    pub fn tiles(&self) -> Vec<Tile> {
        build_tiles(&self.plan)
    }

    /// All carved rooms: main path rooms first, then branch rooms
    pub fn all_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms
            .iter()
            .chain(self.branches.iter().map(|branch| &branch.room))
    }

    /// First room whose rectangle covers `cell`
    pub fn room_at(&self, cell: GridCell) -> Option<&Room> {
        self.all_rooms().find(|room| room.contains(cell))
    }
}

/// Produces levels from a validated configuration
#[derive(Debug)]
pub struct LevelGenerator {
    config: GeneratorConfig,
    level: Option<Level>,
}

impl LevelGenerator {
    /// Create a generator, rejecting invalid configurations up front
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self {
            config,
            level: None,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a fresh level.
    ///
    /// Without a seed one is drawn from the OS; it is recorded on the level
    /// either way so the result can be reproduced.
    pub fn generate(&mut self, seed: Option<u64>) -> Result<&Level, GenerationError> {
        let seed = match seed {
            Some(seed) => seed,
            None => draw_seed()?,
        };
        log::info!("Generating level with seed {}", seed);

        let mut rng = StdRng::seed_from_u64(seed);
        let level = Level::from_walk(seed, walk(&mut rng, &self.config, GridCell::ORIGIN)?);

        log::info!(
            "Level {} done: {} floor cells, {} turns, {} branches, bounds {}x{}",
            seed,
            level.floor_area(),
            level.turns.len(),
            level.branches.len(),
            level.bounds.width(),
            level.bounds.height()
        );

        Ok(self.level.insert(level))
    }

    /// The most recently generated level, if any
    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    /// Discard the current level
    pub fn reset(&mut self) {
        self.level = None;
    }
}

/// Pull a seed from the OS entropy source
fn draw_seed() -> Result<u64, GenerationError> {
    let mut bytes = [0u8; 8];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(u64::from_le_bytes(bytes))
}

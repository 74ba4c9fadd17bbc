//! Main path walk
//!
//! A biased random walk from the start cell. Every few steps it turns 90
//! degrees, and a turn may spawn a branch or a room. Single steps may also
//! jitter sideways to make corridors wavy without changing heading.

use rand::Rng;
use serde::Serialize;

use super::bias::DirectionBias;
use super::branches::{carve_branch, Branch};
use super::random::percent_chance;
use super::rooms::{carve_room, Room};
use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::world::{Direction, FloorPlan, GridCell};

/// A 90 degree heading change on the main path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Turn {
    /// Cursor position when the turn fired
    pub at: GridCell,
    pub from: Direction,
    pub to: Direction,
}

/// Everything a finished walk produced
#[derive(Debug, Clone)]
pub struct Walk {
    pub plan: FloorPlan,
    pub start: GridCell,
    /// Cursor position after the last step
    pub end: GridCell,
    pub initial_heading: Direction,
    pub main_path_length: i32,
    pub turns: Vec<Turn>,
    pub rooms: Vec<Room>,
    pub branches: Vec<Branch>,
}

/// Per-run mutable state
struct Walker<'a, R: Rng> {
    config: &'a GeneratorConfig,
    rng: &'a mut R,
    plan: FloorPlan,
    bias: DirectionBias,
    cursor: GridCell,
    heading: Direction,
    steps_until_turn: i32,
    turns: Vec<Turn>,
    rooms: Vec<Room>,
    branches: Vec<Branch>,
}

impl<'a, R: Rng> Walker<'a, R> {
    /// Change heading by 90 degrees, maybe leaving a branch and/or a room
    /// behind at the turn point.
    fn turn(&mut self) {
        let previous = self.heading;
        let next = self.bias.turn.choose(&mut *self.rng, previous.perpendicular());
        self.steps_until_turn = self.config.turn_distance.sample(&mut *self.rng);
        log::debug!(
            "Turning {:?} -> {:?} at [{}, {}], next turn in {}",
            previous,
            next,
            self.cursor.x,
            self.cursor.y,
            self.steps_until_turn
        );

        if percent_chance(&mut *self.rng, self.config.branch_chance) {
            // Branches either carry on the old line or double back,
            // never along the new heading
            let direction = self
                .bias
                .branch
                .choose(&mut *self.rng, [previous, next.opposite()]);
            let branch = carve_branch(
                &mut self.plan,
                &mut *self.rng,
                self.cursor,
                direction,
                self.config.branch_length,
                &self.config.room,
            );
            self.branches.push(branch);
        }

        if percent_chance(&mut *self.rng, self.config.turn_room_chance) {
            let room = carve_room(&mut self.plan, &mut *self.rng, self.cursor, &self.config.room);
            self.rooms.push(room);
        }

        self.heading = next;
        self.turns.push(Turn {
            at: self.cursor,
            from: previous,
            to: next,
        });
    }

    /// Step one cell to either side of the heading (unweighted)
    fn shift_sideways(&mut self) -> Direction {
        let sides = self.heading.perpendicular();
        let side = sides[self.rng.gen_range(0..sides.len())];
        self.cursor = self.plan.occupy(self.cursor.step(side));
        side
    }

    fn advance(&mut self) {
        self.cursor = self.plan.occupy(self.cursor.step(self.heading));
    }

    fn run(mut self, main_path_length: i32) -> Walk {
        let start = self.cursor;
        let initial_heading = self.heading;

        for _ in 0..main_path_length {
            if self.steps_until_turn == 0 {
                self.turn();
            }
            if percent_chance(&mut *self.rng, self.config.shift_chance) {
                let side = self.shift_sideways();
                log::trace!("Shifted {:?} to [{}, {}]", side, self.cursor.x, self.cursor.y);
            }
            self.advance();
            self.steps_until_turn -= 1;
        }

        let room = carve_room(&mut self.plan, &mut *self.rng, self.cursor, &self.config.room);
        self.rooms.push(room);

        Walk {
            plan: self.plan,
            start,
            end: self.cursor,
            initial_heading,
            main_path_length,
            turns: self.turns,
            rooms: self.rooms,
            branches: self.branches,
        }
    }
}

/// Generate a floor plan by walking from `start`.
///
/// All bias state is created here and dropped at the end, so consecutive
/// calls never influence each other. The config is validated first so no
/// draw can hit an empty range.
pub fn walk(
    rng: &mut impl Rng,
    config: &GeneratorConfig,
    start: GridCell,
) -> Result<Walk, ConfigError> {
    config.validate()?;

    let mut plan = FloorPlan::new();
    let cursor = plan.occupy(start);
    let first_room = carve_room(&mut plan, rng, cursor, &config.room);

    let heading = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
    let sides = heading.perpendicular();
    let side = sides[rng.gen_range(0..sides.len())];
    let mut bias = DirectionBias::new(config.default_weight);
    bias.favour(heading, side, config.priority_weight);

    let main_path_length = config.main_path_length.sample(rng);
    let steps_until_turn = config.turn_distance.sample(rng);
    log::info!(
        "Walking {} steps heading {:?}, first turn in {}",
        main_path_length,
        heading,
        steps_until_turn
    );

    let walker = Walker {
        config,
        rng,
        plan,
        bias,
        cursor,
        heading,
        steps_until_turn,
        turns: Vec::new(),
        rooms: vec![first_room],
        branches: Vec::new(),
    };
    Ok(walker.run(main_path_length))
}

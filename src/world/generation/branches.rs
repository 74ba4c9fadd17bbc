//! Branch carver
//!
//! A branch is a short straight corridor off the main path that ends in a
//! room. Branches never turn or branch again.

use rand::Rng;
use serde::Serialize;

use super::rooms::{carve_room, Room};
use crate::config::{RoomSpec, SizeRange};
use crate::world::{Direction, FloorPlan, GridCell};

/// A carved side corridor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Branch {
    pub start: GridCell,
    pub direction: Direction,
    pub length: i32,
    /// Last corridor cell, where the terminal room is centered
    pub end: GridCell,
    pub room: Room,
}

/// Walk straight from `start` and finish with a room
pub fn carve_branch(
    plan: &mut FloorPlan,
    rng: &mut impl Rng,
    start: GridCell,
    direction: Direction,
    length: SizeRange,
    room: &RoomSpec,
) -> Branch {
    let length = length.sample(rng);
    log::debug!(
        "Creating {}-cell branch at [{}, {}] heading {:?}",
        length,
        start.x,
        start.y,
        direction
    );

    let mut end = start;
    for _ in 0..length {
        end = plan.occupy(end.step(direction));
    }
    let room = carve_room(plan, rng, end, room);

    Branch {
        start,
        direction,
        length,
        end,
        room,
    }
}

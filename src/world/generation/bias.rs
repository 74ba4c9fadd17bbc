//! Direction weighting
//!
//! Two tables steer a run: one for 90 degree turns and one for branch
//! directions. Both start uniform and are boosted once per run right after
//! the initial heading is picked, which pulls the level towards one quadrant.

use rand::Rng;

use super::random::choose_weighted;
use crate::world::Direction;

/// Weight per direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightTable {
    weights: [u32; 4],
}

impl WeightTable {
    /// Every direction gets the same weight
    pub fn uniform(weight: u32) -> Self {
        Self { weights: [weight; 4] }
    }

    pub fn weight(&self, direction: Direction) -> u32 {
        self.weights[direction.index()]
    }

    pub fn set(&mut self, direction: Direction, weight: u32) {
        self.weights[direction.index()] = weight;
    }

    /// Weighted pick between two candidate directions.
    ///
    /// Falls back to the first option if both weights are zero.
    pub fn choose(&self, rng: &mut impl Rng, options: [Direction; 2]) -> Direction {
        choose_weighted(rng, &options, |dir| self.weight(*dir)).unwrap_or(options[0])
    }
}

/// Turn and branch tables for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionBias {
    pub turn: WeightTable,
    pub branch: WeightTable,
}

impl DirectionBias {
    pub fn new(default_weight: u32) -> Self {
        Self {
            turn: WeightTable::uniform(default_weight),
            branch: WeightTable::uniform(default_weight),
        }
    }

    /// Favour `heading` and `side` in both tables
    pub fn favour(&mut self, heading: Direction, side: Direction, priority: u32) {
        for direction in [heading, side] {
            self.turn.set(direction, priority);
            self.branch.set(direction, priority);
        }
        log::debug!(
            "Favouring {:?} and {:?}: turn {:?}, branch {:?}",
            heading,
            side,
            self.turn.weights,
            self.branch.weights
        );
    }
}

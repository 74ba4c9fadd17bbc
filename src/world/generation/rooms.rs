//! Room carver
//!
//! Stamps a randomly sized rectangle of floor around a cell. Corners may be
//! left out so rooms read as rough-hewn rather than boxy.

use rand::Rng;
use serde::Serialize;

use super::random::percent_chance;
use crate::config::RoomSpec;
use crate::world::{FloorPlan, GridCell};

/// A carved rectangular room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Room {
    /// Top-left cell
    pub origin: GridCell,
    pub width: i32,
    pub height: i32,
    /// The cell the room was carved around
    pub center: GridCell,
}

impl Room {
    /// Place a room of the given size around `center`.
    ///
    /// Even dimensions put the center nearer the top left:
    ///
    /// ```text
    /// +-------+   +-------+   +-----+
    /// |X X X X|   |X X X X|   |X X X|
    /// |X C X X|   |X C X X|   |X C X|
    /// |X X X X|   |X X X X|   |X X X|
    /// |X X X X|   +-------+   +-----+
    /// +-------+
    /// ```
    pub fn around(center: GridCell, width: i32, height: i32) -> Self {
        let origin = GridCell::new(
            center.x + 1 - (width + 1) / 2,
            center.y + 1 - (height + 1) / 2,
        );
        Self {
            origin,
            width,
            height,
            center,
        }
    }

    fn is_corner(&self, dx: i32, dy: i32) -> bool {
        (dx == 0 || dx == self.width - 1) && (dy == 0 || dy == self.height - 1)
    }

    /// Check if a cell falls inside the rectangle
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.x >= self.origin.x
            && cell.x < self.origin.x + self.width
            && cell.y >= self.origin.y
            && cell.y < self.origin.y + self.height
    }
}

/// Carve a room centered on `center` into the plan
pub fn carve_room(
    plan: &mut FloorPlan,
    rng: &mut impl Rng,
    center: GridCell,
    spec: &RoomSpec,
) -> Room {
    let width = spec.width.sample(rng);
    let height = spec.height.sample(rng);
    let room = Room::around(center, width, height);

    log::debug!(
        "Carving {}x{} room at [{}, {}]",
        width,
        height,
        center.x,
        center.y
    );

    for dx in 0..width {
        for dy in 0..height {
            if room.is_corner(dx, dy) && percent_chance(rng, spec.corner_removal_chance) {
                log::trace!("Room corner at [{}, {}] left out", dx, dy);
                continue;
            }
            plan.occupy(room.origin.offset(dx, dy));
        }
    }

    room
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizeRange;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_spec(width: i32, height: i32, corner_removal_chance: u32) -> RoomSpec {
        RoomSpec {
            width: SizeRange::exactly(width),
            height: SizeRange::exactly(height),
            corner_removal_chance,
        }
    }

    #[test]
    fn test_three_by_three_room() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut plan = FloorPlan::new();
        let center = GridCell::new(10, -4);

        let room = carve_room(&mut plan, &mut rng, center, &fixed_spec(3, 3, 0));

        assert_eq!(plan.len(), 9);
        assert_eq!(room.origin, GridCell::new(9, -5));
        for dx in -1..=1 {
            for dy in -1..=1 {
                assert!(plan.contains(center.offset(dx, dy)));
            }
        }
    }

    #[test]
    fn test_even_room_favours_top_left() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut plan = FloorPlan::new();

        let room = carve_room(&mut plan, &mut rng, GridCell::ORIGIN, &fixed_spec(4, 4, 0));

        assert_eq!(plan.len(), 16);
        assert_eq!(room.origin, GridCell::new(-1, -1));
        assert_eq!(plan.min_x(), Some(-1));
        assert_eq!(plan.max_x(), Some(2));
        assert_eq!(plan.min_y(), Some(-1));
        assert_eq!(plan.max_y(), Some(2));
    }

    #[test]
    fn test_all_corners_removed() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut plan = FloorPlan::new();

        let room = carve_room(&mut plan, &mut rng, GridCell::ORIGIN, &fixed_spec(5, 4, 100));

        assert_eq!(plan.len(), 5 * 4 - 4);
        let far_x = room.origin.x + room.width - 1;
        let far_y = room.origin.y + room.height - 1;
        for corner in [
            room.origin,
            GridCell::new(far_x, room.origin.y),
            GridCell::new(room.origin.x, far_y),
            GridCell::new(far_x, far_y),
        ] {
            assert!(room.contains(corner));
            assert!(!plan.contains(corner));
        }
    }

    #[test]
    fn test_room_size_within_ranges() {
        let mut rng = StdRng::seed_from_u64(24);
        let spec = RoomSpec::default();
        for _ in 0..200 {
            let mut plan = FloorPlan::new();
            let room = carve_room(&mut plan, &mut rng, GridCell::ORIGIN, &spec);

            assert!((3..=5).contains(&room.width));
            assert!((3..=5).contains(&room.height));
            assert!(plan.contains(GridCell::ORIGIN));
            assert!(plan.len() as i32 >= room.width * room.height - 4);
            assert!(plan.iter().all(|c| room.contains(*c)));
        }
    }

    #[test]
    fn test_overlapping_rooms_do_not_duplicate() {
        let mut rng = StdRng::seed_from_u64(25);
        let mut plan = FloorPlan::new();
        let spec = fixed_spec(3, 3, 0);

        carve_room(&mut plan, &mut rng, GridCell::ORIGIN, &spec);
        carve_room(&mut plan, &mut rng, GridCell::new(1, 0), &spec);

        assert_eq!(plan.len(), 12);
    }
}

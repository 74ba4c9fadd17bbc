//! Random draws shared by the generators
//!
//! All helpers take the random source explicitly so a run is reproducible
//! from its seed alone.

use rand::Rng;

/// Number of uniform samples summed for the Irwin-Hall approximation
const IRWIN_HALL_SAMPLES: usize = 12;

/// Roll against a percentage (0 never, 100 always)
pub fn percent_chance(rng: &mut impl Rng, percent: u32) -> bool {
    rng.gen_range(0..100) < percent
}

/// Pick one of `items` with probability proportional to its weight.
///
/// Returns `None` when there are no items or every weight is zero. Items with
/// zero weight are never picked. The draw walks `items` in order, so the same
/// slice and seed always give the same answer.
pub fn choose_weighted<T: Copy>(
    rng: &mut impl Rng,
    items: &[T],
    weight: impl Fn(&T) -> u32,
) -> Option<T> {
    let total: u64 = items.iter().map(|item| weight(item) as u64).sum();
    if total == 0 {
        return None;
    }

    let roll = rng.gen_range(0..total);
    let mut running = 0u64;
    for item in items {
        running += weight(item) as u64;
        if roll < running {
            return Some(*item);
        }
    }

    None
}

/// Approximately normal integer draw clamped into `[low, high]`.
///
/// Sums twelve uniform samples and subtracts six to get a unit normal, then
/// scales, rounds half-to-even and clamps, in that order. If `low > high` the
/// result is `low`.
pub fn clipped_gaussian(rng: &mut impl Rng, mean: f64, std_dev: f64, low: i32, high: i32) -> i32 {
    let mut z = 0.0;
    for _ in 0..IRWIN_HALL_SAMPLES {
        z += rng.gen::<f64>();
    }
    z -= 6.0;

    let value = (mean + z * std_dev).round_ties_even();
    // `as` saturates at the i32 limits
    (value as i32).min(high).max(low)
}

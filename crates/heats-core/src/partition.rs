//! Heat-size partitioning.
//!
//! Decides how many entrants swim in each heat before anyone is placed.
//! Sizes are listed slowest heat first.
//!
//! # Algorithm Summary
//!
//! 1. `ceil(entrants / lanes)` heats are needed
//! 2. Fill from the fastest heat backward, so only heat 1 can be short
//! 3. Top up short heats by borrowing surplus from faster heats, nearest first
//! 4. Drop heats left empty

/// Smallest heat worth swimming. Shorter heats borrow from faster heats.
pub const MIN_SWIMMERS_PER_HEAT: usize = 3;

/// Computes heat sizes using [`MIN_SWIMMERS_PER_HEAT`].
///
/// Returns an empty list when there are no entrants or no lanes.
pub fn heat_sizes(num_swimmers: usize, lanes_per_heat: usize) -> Vec<usize> {
    heat_sizes_with_minimum(num_swimmers, lanes_per_heat, MIN_SWIMMERS_PER_HEAT)
}

/// Computes heat sizes with a caller-chosen minimum heat size.
///
/// A minimum of 0 or 1 disables borrowing.
pub fn heat_sizes_with_minimum(
    num_swimmers: usize,
    lanes_per_heat: usize,
    minimum: usize,
) -> Vec<usize> {
    let raw = raw_heat_sizes(num_swimmers, lanes_per_heat);
    rebalance_heat_sizes(&raw, minimum)
        .into_iter()
        .filter(|&size| size > 0)
        .collect()
}

/// Splits entrants into full heats, leaving any remainder in the first heat.
pub fn raw_heat_sizes(num_swimmers: usize, lanes_per_heat: usize) -> Vec<usize> {
    if lanes_per_heat == 0 {
        return Vec::new();
    }

    let num_heats = num_swimmers.div_ceil(lanes_per_heat);
    let mut sizes = vec![0; num_heats];
    let mut remaining = num_swimmers;

    for size in sizes.iter_mut().rev() {
        let take = remaining.min(lanes_per_heat);
        *size = take;
        remaining -= take;
    }

    sizes
}

/// Raises heats below `minimum` by borrowing from later (faster) heats.
///
/// Walks every heat except the fastest. A donor gives only what it holds above
/// `minimum`, and closer donors give first. A heat may stay short when the
/// faster heats have no surplus left.
pub fn rebalance_heat_sizes(sizes: &[usize], minimum: usize) -> Vec<usize> {
    let mut sizes = sizes.to_vec();
    let len = sizes.len();

    for idx in 0..len.saturating_sub(1) {
        let mut shortfall = minimum.saturating_sub(sizes[idx]);

        for donor in idx + 1..len {
            if shortfall == 0 {
                break;
            }
            let surplus = sizes[donor].saturating_sub(minimum);
            let moved = surplus.min(shortfall);
            sizes[donor] -= moved;
            sizes[idx] += moved;
            shortfall -= moved;
        }
    }

    sizes
}

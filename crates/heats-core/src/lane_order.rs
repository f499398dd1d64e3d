//! Center-out lane order.

/// Iterator over lanes in seeding order. See [`lane_order`].
///
/// Lanes are computed on demand, so a pool with more lanes than entrants
/// costs nothing beyond the lanes actually filled.
#[derive(Debug, Clone)]
pub struct LaneOrder {
    center: usize,
    step: usize,
    lanes: usize,
}

impl Iterator for LaneOrder {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step >= self.lanes {
            return None;
        }
        let offset = self.step / 2;
        let lane = if self.step % 2 == 0 {
            self.center - offset
        } else {
            self.center + 1 + offset
        };
        self.step += 1;
        Some(lane)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.lanes - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LaneOrder {}

/// Returns the lanes in seeding order for a pool with `lanes` lanes.
///
/// The first entry is the most central lane, then seeding alternates outward,
/// taking the lane below the center before the lane above it. For eight lanes
/// this is `4, 5, 3, 6, 2, 7, 1, 8`. Lanes are 1-based.
pub fn lane_order(lanes: usize) -> LaneOrder {
    LaneOrder {
        center: lanes.div_ceil(2),
        step: 0,
        lanes,
    }
}

//! Heat generation and lane seeding.
//!
//! Builds start lists from a pool of entrants and a lane count.
//!
//! # Algorithm Summary
//!
//! 1. Order all entrants slowest to fastest (NT slowest of all)
//! 2. Partition the count into heat sizes (see [`crate::partition`])
//! 3. Slice the ordering into heats, so heat 1 holds the slowest entrants
//! 4. Within each heat, seed fastest to slowest along [`lane_order`]
//! 5. List each heat's assignments by lane number

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::lane_order::lane_order;
use crate::partition::{MIN_SWIMMERS_PER_HEAT, heat_sizes_with_minimum};
use crate::seed_time::SeedTime;

/// Anything that can be seeded into a heat.
///
/// This trait lets heat generation work with different entrant
/// representations (e.g., the CLI's entry records, or test fixtures).
pub trait Seeded {
    /// Returns the entrant's seed time.
    fn seed_time(&self) -> SeedTime;
}

/// An entrant with an opaque payload carried through seeding unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entrant<T> {
    /// Athlete or team reference.
    pub payload: T,

    /// Seed time used for placement.
    #[serde(default)]
    pub seed_time: SeedTime,
}

impl<T> Entrant<T> {
    /// Creates an entrant.
    pub const fn new(payload: T, seed_time: SeedTime) -> Self {
        Self { payload, seed_time }
    }
}

impl<T> Seeded for Entrant<T> {
    fn seed_time(&self) -> SeedTime {
        self.seed_time
    }
}

/// One entrant placed in one lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneAssignment<E> {
    /// 1-based lane number.
    pub lane: usize,

    /// The entrant swimming in this lane.
    pub entrant: E,
}

/// A single race within an event.
///
/// Unfilled lanes are absent from `assignments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heat<E> {
    /// 1-based heat number. Heat 1 is the slowest and swims first.
    pub heat_number: usize,

    /// Lane assignments, ordered by lane number.
    pub assignments: Vec<LaneAssignment<E>>,
}

impl<E> Heat<E> {
    /// Number of filled lanes.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if no lane is filled.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Returns the entrant in `lane`, if that lane is filled.
    pub fn entrant_in_lane(&self, lane: usize) -> Option<&E> {
        self.assignments
            .iter()
            .find(|assignment| assignment.lane == lane)
            .map(|assignment| &assignment.entrant)
    }

    /// Iterates over entrants in lane order.
    pub fn entrants(&self) -> impl Iterator<Item = &E> {
        self.assignments.iter().map(|assignment| &assignment.entrant)
    }
}

/// Configuration for heat generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedingConfig {
    /// Lanes available per heat.
    /// Default: 8.
    pub lanes_per_heat: usize,

    /// Heats below this size borrow entrants from faster heats.
    /// Default: [`MIN_SWIMMERS_PER_HEAT`] (3).
    pub min_swimmers_per_heat: usize,
}

impl SeedingConfig {
    /// Creates a configuration for `lanes_per_heat` lanes with the default minimum.
    pub const fn new(lanes_per_heat: usize) -> Self {
        Self {
            lanes_per_heat,
            min_swimmers_per_heat: MIN_SWIMMERS_PER_HEAT,
        }
    }
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self::new(8)
    }
}

/// Generate heats for `lanes_per_heat` lanes.
///
/// Returns heats slowest first. Empty input or zero lanes produce no heats.
/// Entrants with equal seed times keep their input order, so the result is
/// fully determined by the input.
pub fn generate_heats<E: Seeded + Clone>(entries: &[E], lanes_per_heat: usize) -> Vec<Heat<E>> {
    generate_heats_with(entries, &SeedingConfig::new(lanes_per_heat))
}

/// Generate heats with an explicit [`SeedingConfig`].
pub fn generate_heats_with<E: Seeded + Clone>(
    entries: &[E],
    config: &SeedingConfig,
) -> Vec<Heat<E>> {
    let lanes = config.lanes_per_heat;
    if entries.is_empty() || lanes == 0 {
        return Vec::new();
    }

    let mut slowest_first: Vec<&E> = entries.iter().collect();
    slowest_first.sort_by_key(|entrant| Reverse(entrant.seed_time()));

    let sizes = heat_sizes_with_minimum(
        slowest_first.len(),
        lanes,
        config.min_swimmers_per_heat,
    );
    tracing::debug!(
        entrants = entries.len(),
        lanes,
        ?sizes,
        "generating heats"
    );

    let mut remaining = slowest_first.as_slice();
    let mut heats = Vec::with_capacity(sizes.len());

    for (idx, &size) in sizes.iter().enumerate() {
        let (slice, rest) = remaining.split_at(size);
        remaining = rest;

        let mut fastest_first = slice.to_vec();
        fastest_first.sort_by_key(|entrant| entrant.seed_time());

        let mut assignments: Vec<LaneAssignment<E>> = lane_order(lanes)
            .zip(fastest_first.into_iter().cloned())
            .map(|(lane, entrant)| LaneAssignment { lane, entrant })
            .collect();
        assignments.sort_by_key(|assignment| assignment.lane);

        heats.push(Heat {
            heat_number: idx + 1,
            assignments,
        });
    }

    heats
}

//! Core domain logic for swim meet start lists.
//!
//! This crate contains the fundamental types and logic for:
//! - Seed times: recorded times and "no time" (NT), with NT always slowest
//! - Lane order: center-out seeding within a heat
//! - Partitioning: heat sizes with a minimum heat size
//! - Heat generation: placing entrants into heats and lanes

mod heat_builder;
pub mod lane_order;
pub mod partition;
pub mod seed_time;
pub mod types;

pub use heat_builder::{
    Entrant, Heat, LaneAssignment, Seeded, SeedingConfig, generate_heats, generate_heats_with,
};
pub use lane_order::{LaneOrder, lane_order};
pub use partition::{MIN_SWIMMERS_PER_HEAT, heat_sizes, heat_sizes_with_minimum};
pub use seed_time::SeedTime;
pub use types::{EntrantId, ValidationError};

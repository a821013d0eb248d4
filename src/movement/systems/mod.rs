//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{report_movement_edges, sample_movement, simulate_movement};

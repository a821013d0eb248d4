//! Movement domain: player controller, physics adapters and spawning.

mod bootstrap;
mod components;
pub mod controller;
mod dev;
mod events;
mod resources;
mod systems;

pub use components::{Facing, GameLayer, Ground, MovementState, PendingVisuals, Player, Wall};
pub use controller::GroundPhase;
pub use events::{JumpedMessage, LandedMessage, MovementVisuals};
pub use resources::{MovementConfig, MovementInput};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    read_input, report_movement_edges, sample_movement, simulate_movement,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementConfig>()
            .init_resource::<MovementInput>()
            .add_message::<MovementVisuals>()
            .add_message::<JumpedMessage>()
            .add_message::<LandedMessage>()
            .add_systems(Startup, (spawn_test_room, spawn_player))
            // Input cadence: once per rendered frame
            .add_systems(Update, (read_input, sample_movement).chain())
            // Physics cadence: fixed step, before avian's solver in FixedPostUpdate
            .add_systems(FixedUpdate, simulate_movement)
            .add_systems(Update, report_movement_edges);
    }
}

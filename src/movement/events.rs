//! Movement domain: messages for presentation and effects.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::Facing;

/// Presentation snapshot, written once per rendered frame per player.
/// Consumers (animation, audio) never write back to the controller.
#[derive(Debug, Clone, Copy)]
pub struct MovementVisuals {
    pub entity: Entity,
    pub is_grounded: bool,
    /// Run speed while grounded so the run loop keeps playing, |vx| in the air.
    pub horizontal_speed: f32,
    pub vertical_velocity: f32,
    /// A jump fired on some physics tick since the previous snapshot.
    pub jump_triggered: bool,
    /// A landing happened on some physics tick since the previous snapshot.
    pub landed: bool,
    pub facing: Facing,
}

impl Message for MovementVisuals {}

/// Fired on the physics tick that applies a jump impulse
#[derive(Debug)]
pub struct JumpedMessage {
    pub entity: Entity,
    pub position: Vec2,
}

impl Message for JumpedMessage {}

/// Fired on the physics tick where the ground query flips from false to true
#[derive(Debug)]
pub struct LandedMessage {
    pub entity: Entity,
    pub position: Vec2,
}

impl Message for LandedMessage {}

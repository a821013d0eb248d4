//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-entity controller state.
///
/// Written by two entry points only: `sample` (once per rendered frame) and
/// `simulate` (once per fixed physics tick). See `movement::controller`.
#[derive(Component, Debug, Clone, Default)]
pub struct MovementState {
    /// Last horizontal axis sample, clamped to [-1, 1].
    pub horizontal_input: f32,
    /// Desired horizontal velocity computed from the last sample.
    pub target_velocity_x: f32,
    /// Body velocity as of the end of the last simulate tick.
    pub velocity: Vec2,
    pub is_grounded: bool,
    pub was_grounded: bool,
    pub facing: Facing,
    /// Time of the most recent grounded physics tick. `None` until first contact.
    pub last_grounded_time: Option<f32>,
    /// Time of the pending buffered jump press. `None` once consumed.
    pub last_jump_requested_time: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Jump and landing edges seen by fixed ticks since the last visual sample.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PendingVisuals {
    pub jumped: bool,
    pub landed: bool,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

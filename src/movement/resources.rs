//! Movement domain: tuning and input resources.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Controller tuning. Loaded from `assets/data/movement.ron` by the content
/// plugin; falls back to these defaults when the file is missing or invalid.
#[derive(Resource, Debug, Clone)]
pub struct MovementConfig {
    /// Max horizontal speed while grounded.
    pub run_speed: f32,
    /// How fast horizontal velocity ramps toward the target, per second.
    pub acceleration: f32,
    /// Horizontal control multiplier while airborne, in [0, 1].
    pub air_control: f32,
    /// Upward impulse applied on jump.
    pub jump_force: f32,
    /// How long after leaving ground a jump is still allowed.
    pub coyote_time: f32,
    /// How long an early jump press stays valid.
    pub jump_buffer_time: f32,
    /// Foot anchor relative to the body origin.
    pub ground_check_offset: Vec2,
    pub ground_check_radius: f32,
    pub ground_layers: LayerMask,
    /// World gravity magnitude, applied by the physics integrator.
    pub gravity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            run_speed: 300.0,
            acceleration: 1000.0,
            air_control: 0.6,
            jump_force: 760.0,
            coyote_time: 0.1,
            jump_buffer_time: 0.1,
            ground_check_offset: Vec2::new(0.0, -24.0),
            ground_check_radius: 8.0,
            ground_layers: LayerMask::from(GameLayer::Ground),
            gravity: 1800.0,
        }
    }
}

impl MovementConfig {
    /// Apex height of a jump from rest for a body of the given mass.
    /// Uses h = v² / (2g) with v = jump_force / mass.
    pub fn jump_apex_height(&self, mass: f32) -> f32 {
        if self.gravity <= 0.0 || mass <= 0.0 {
            return f32::INFINITY;
        }
        let launch = self.jump_force / mass;
        launch * launch / (2.0 * self.gravity)
    }
}

/// Raw input for the current frame, filled by `read_input`.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis_x: f32,
    pub jump_just_pressed: bool,
}

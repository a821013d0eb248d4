//! Movement domain: engine-agnostic player controller.
//!
//! The controller has two entry points on the same [`MovementState`]:
//!
//! - [`MovementState::sample`] runs once per rendered frame. It only records
//!   intent: target horizontal velocity, facing and the jump press time.
//! - [`MovementState::simulate`] runs once per fixed physics tick. It performs
//!   the ground query, integrates horizontal velocity and resolves jumps.
//!
//! Values written by `sample` are read-only inputs to `simulate`. Physics is
//! reached through [`GroundQuery`] and [`PhysicsBody`] so the logic can be
//! driven by avian2d in game and by plain structs in tests.

use avian2d::prelude::LayerMask;
use bevy::prelude::*;

use crate::movement::{Facing, MovementConfig, MovementState};

/// Overlap test against the physics world. Read-only.
pub trait GroundQuery {
    fn overlaps_circle(&self, center: Vec2, radius: f32, mask: LayerMask) -> bool;
}

/// Velocity and impulse access for the controlled body.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Instantaneous change in momentum.
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// One input sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementSample {
    pub horizontal: f32,
    /// Edge: true only on the frame the button went down.
    pub jump_pressed: bool,
}

/// Notifications produced by a single physics tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub jumped: bool,
    pub landed: bool,
    pub left_ground: bool,
}

/// Implicit grounding state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundPhase {
    Grounded,
    /// Airborne, still inside the coyote window.
    CoyoteEligible,
    /// Airborne, coyote window elapsed. Cannot jump until grounded again.
    Expired,
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + diff.signum() * max_delta
    }
}

/// True when `since` is set and no more than `window` seconds before `now`.
fn within_window(since: Option<f32>, now: f32, window: f32) -> bool {
    since.is_some_and(|t| now - t <= window)
}

impl MovementState {
    /// Horizontal control authority: 1 on the ground, `air_control` in the air.
    pub fn control_authority(&self, config: &MovementConfig) -> f32 {
        if self.is_grounded {
            1.0
        } else {
            config.air_control
        }
    }

    pub fn can_coyote(&self, config: &MovementConfig, now: f32) -> bool {
        within_window(self.last_grounded_time, now, config.coyote_time)
    }

    pub fn has_buffered_jump(&self, config: &MovementConfig, now: f32) -> bool {
        within_window(self.last_jump_requested_time, now, config.jump_buffer_time)
    }

    pub fn phase(&self, config: &MovementConfig, now: f32) -> GroundPhase {
        if self.is_grounded {
            GroundPhase::Grounded
        } else if self.can_coyote(config, now) {
            GroundPhase::CoyoteEligible
        } else {
            GroundPhase::Expired
        }
    }

    /// Variable-rate input step.
    pub fn sample(&mut self, config: &MovementConfig, input: MovementSample, now: f32) {
        let horizontal = input.horizontal.clamp(-1.0, 1.0);
        self.horizontal_input = horizontal;
        self.target_velocity_x = horizontal * config.run_speed * self.control_authority(config);

        // The press is remembered, it does not have to land on a grounded frame.
        if input.jump_pressed {
            self.last_jump_requested_time = Some(now);
        }

        if horizontal != 0.0 {
            self.facing = if horizontal > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            };
        }
    }

    /// Fixed-rate physics step. `foot` is the world-space ground check anchor.
    pub fn simulate(
        &mut self,
        config: &MovementConfig,
        now: f32,
        dt: f32,
        foot: Vec2,
        ground: &impl GroundQuery,
        body: &mut impl PhysicsBody,
    ) -> StepOutcome {
        self.was_grounded = self.is_grounded;
        self.is_grounded =
            ground.overlaps_circle(foot, config.ground_check_radius, config.ground_layers);

        if self.is_grounded {
            self.last_grounded_time = Some(now);
        }

        let mut velocity = body.velocity();
        velocity.x = move_towards(velocity.x, self.target_velocity_x, config.acceleration * dt);
        body.set_velocity(velocity);

        let jumped = self.has_buffered_jump(config, now) && self.can_coyote(config, now);
        if jumped {
            self.last_jump_requested_time = None;
            // Zero first so jump height does not depend on fall speed.
            body.set_velocity(Vec2::new(velocity.x, 0.0));
            body.apply_impulse(Vec2::Y * config.jump_force);
        }

        self.velocity = body.velocity();

        StepOutcome {
            jumped,
            landed: !self.was_grounded && self.is_grounded,
            left_ground: self.was_grounded && !self.is_grounded,
        }
    }
}

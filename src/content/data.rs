//! Data definitions for RON content files.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::{GameLayer, MovementConfig};

/// On-disk shape of `movement.ron`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovementConfigDef {
    pub run_speed: f32,
    pub acceleration: f32,
    pub air_control: f32,
    pub jump_force: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub ground_check_offset: (f32, f32),
    pub ground_check_radius: f32,
    pub ground_layers: Vec<GameLayer>,
    pub gravity: f32,
}

impl Default for MovementConfigDef {
    fn default() -> Self {
        let config = MovementConfig::default();
        Self {
            run_speed: config.run_speed,
            acceleration: config.acceleration,
            air_control: config.air_control,
            jump_force: config.jump_force,
            coyote_time: config.coyote_time,
            jump_buffer_time: config.jump_buffer_time,
            ground_check_offset: (config.ground_check_offset.x, config.ground_check_offset.y),
            ground_check_radius: config.ground_check_radius,
            ground_layers: vec![GameLayer::Ground],
            gravity: config.gravity,
        }
    }
}

impl MovementConfigDef {
    /// Fold the listed layers into a single collision mask.
    pub fn ground_mask(&self) -> LayerMask {
        LayerMask(
            self.ground_layers
                .iter()
                .fold(0, |bits, layer| bits | layer.to_bits()),
        )
    }

    pub fn to_config(&self) -> MovementConfig {
        MovementConfig {
            run_speed: self.run_speed,
            acceleration: self.acceleration,
            air_control: self.air_control,
            jump_force: self.jump_force,
            coyote_time: self.coyote_time,
            jump_buffer_time: self.jump_buffer_time,
            ground_check_offset: Vec2::from(self.ground_check_offset),
            ground_check_radius: self.ground_check_radius,
            ground_layers: self.ground_mask(),
            gravity: self.gravity,
        }
    }
}

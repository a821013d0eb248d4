//! Debug overlay for tuning the movement controller (dev-tools feature).
//!
//! F3 toggles a readout of the player's grounding phase, velocities and
//! the age of the coyote anchor and buffered jump press, measured on the
//! fixed clock the controller's physics step uses.

mod systems;
#[cfg(test)]
mod tests;
mod ui;

use bevy::prelude::*;

use crate::debug::systems::{toggle_debug_overlay, update_debug_overlay};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the movement readout is visible
    pub show_info: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_overlay, update_debug_overlay).chain(),
        );
    }
}

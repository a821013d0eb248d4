//! Debug domain: toggle and refresh of the movement readout.

use bevy::prelude::*;

use crate::debug::DebugState;
use crate::debug::ui::{DebugInfoOverlay, format_movement_readout, spawn_debug_info_overlay};
use crate::movement::{MovementConfig, MovementState, Player};

/// Toggle the movement readout with F3
pub(crate) fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        let msg = if debug_state.show_info {
            "Movement overlay ON"
        } else {
            "Movement overlay OFF"
        };
        info!("[DEBUG] {}", msg);
    }
}

pub(crate) fn update_debug_overlay(
    mut commands: Commands,
    fixed_time: Res<Time<Fixed>>,
    debug_state: Res<DebugState>,
    config: Res<MovementConfig>,
    player_query: Query<&MovementState, With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some(state), Ok(mut text)) = (player_query.iter().next(), overlay_query.single_mut()) {
        **text = format_movement_readout(state, &config, fixed_time.elapsed_secs());
    }
}

//! Debug domain: overlay node and readout formatting.

use bevy::prelude::*;

use crate::movement::{MovementConfig, MovementState};

/// Marker for the movement readout
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

fn age(since: Option<f32>, now: f32) -> String {
    match since {
        Some(t) => format!("{:.3}s", now - t),
        None => "-".to_string(),
    }
}

pub(crate) fn format_movement_readout(
    state: &MovementState,
    config: &MovementConfig,
    now: f32,
) -> String {
    format!(
        "Phase: {:?}\n\
         Velocity: ({:.1}, {:.1}) target_x {:.1}\n\
         Facing: {:?}  Control: {:.2}\n\
         Grounded age: {} / coyote {:.3}s\n\
         Jump press age: {} / buffer {:.3}s",
        state.phase(config, now),
        state.velocity.x,
        state.velocity.y,
        state.target_velocity_x,
        state.facing,
        state.control_authority(config),
        age(state.last_grounded_time, now),
        config.coyote_time,
        age(state.last_jump_requested_time, now),
        config.jump_buffer_time,
    )
}

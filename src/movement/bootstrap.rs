//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementConfig, MovementState, PendingVisuals, Player};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player as a dynamic body driven by the movement controller.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<MovementConfig>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    // Unit mass so jump_force maps directly to launch speed
    let mass = 1.0;
    info!(
        "Spawning player: run_speed={}, jump_force={}, apex={:.1}px",
        config.run_speed,
        config.jump_force,
        config.jump_apex_height(mass)
    );

    commands.spawn((
        // Identity & Movement
        (Player, MovementState::default(), PendingVisuals::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            Mass(mass),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

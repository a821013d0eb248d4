//! Movement domain: sample and simulate systems driving the controller.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::controller::{MovementSample, StepOutcome};
use crate::movement::systems::collisions::{DynamicBody, SpatialGround};
use crate::movement::{
    JumpedMessage, LandedMessage, MovementConfig, MovementInput, MovementState, MovementVisuals,
    PendingVisuals, Player,
};

/// Per-frame input step. Records intent and publishes a presentation snapshot.
pub(crate) fn sample_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    config: Res<MovementConfig>,
    mut query: Query<(Entity, &mut MovementState, &mut PendingVisuals), With<Player>>,
    mut visuals: MessageWriter<MovementVisuals>,
) {
    let now = time.elapsed_secs();
    let sample = MovementSample {
        horizontal: input.axis_x,
        jump_pressed: input.jump_just_pressed,
    };

    for (entity, mut state, mut pending) in &mut query {
        state.sample(&config, sample, now);
        visuals.write(build_visuals(entity, &state, &config, &mut pending));
    }
}

/// Snapshot for animation and audio consumers. Drains the pending edges.
pub(crate) fn build_visuals(
    entity: Entity,
    state: &MovementState,
    config: &MovementConfig,
    pending: &mut PendingVisuals,
) -> MovementVisuals {
    let horizontal_speed = if state.is_grounded {
        config.run_speed
    } else {
        state.velocity.x.abs()
    };

    let visuals = MovementVisuals {
        entity,
        is_grounded: state.is_grounded,
        horizontal_speed,
        vertical_velocity: state.velocity.y,
        jump_triggered: pending.jumped,
        landed: pending.landed,
        facing: state.facing,
    };
    *pending = PendingVisuals::default();
    visuals
}

/// Fixed-rate physics step: ground query, horizontal ramp, jump resolution.
pub(crate) fn simulate_movement(
    time: Res<Time>,
    config: Res<MovementConfig>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &ComputedMass,
            &mut LinearVelocity,
            &mut MovementState,
            &mut PendingVisuals,
        ),
        With<Player>,
    >,
    mut jumped_writer: MessageWriter<JumpedMessage>,
    mut landed_writer: MessageWriter<LandedMessage>,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (entity, transform, mass, mut velocity, mut state, mut pending) in &mut query {
        let position = transform.translation.truncate();
        let ground = SpatialGround {
            spatial_query: &spatial_query,
            exclude: entity,
        };
        let mut body = DynamicBody {
            velocity: &mut *velocity,
            inverse_mass: mass.inverse(),
        };

        let outcome = state.simulate(
            &config,
            now,
            dt,
            position + config.ground_check_offset,
            &ground,
            &mut body,
        );

        latch_outcome(&mut pending, outcome);

        if outcome.jumped {
            jumped_writer.write(JumpedMessage { entity, position });
        }
        if outcome.landed {
            landed_writer.write(LandedMessage { entity, position });
        } else if outcome.left_ground {
            debug!(
                "Left ground: phase={:?}, coyote window {:.3}s",
                state.phase(&config, now),
                config.coyote_time
            );
        }
    }
}

/// Record tick edges until the next visual snapshot drains them.
pub(crate) fn latch_outcome(pending: &mut PendingVisuals, outcome: StepOutcome) {
    pending.jumped |= outcome.jumped;
    pending.landed |= outcome.landed;
}

/// Log jump and landing edges from the physics tick and the frame snapshots.
pub(crate) fn report_movement_edges(
    mut jumped: MessageReader<JumpedMessage>,
    mut landed: MessageReader<LandedMessage>,
    mut visuals: MessageReader<MovementVisuals>,
) {
    for message in jumped.read() {
        debug!(
            "Jump: {:?} at ({:.1}, {:.1})",
            message.entity, message.position.x, message.position.y
        );
    }
    for message in landed.read() {
        debug!(
            "Landed: {:?} at ({:.1}, {:.1})",
            message.entity, message.position.x, message.position.y
        );
    }
    for snapshot in visuals.read() {
        trace!(
            "Visuals {:?}: grounded={} speed={:.1} vy={:.1} jump={} land={} facing={:?}",
            snapshot.entity,
            snapshot.is_grounded,
            snapshot.horizontal_speed,
            snapshot.vertical_velocity,
            snapshot.jump_triggered,
            snapshot.landed,
            snapshot.facing
        );
    }
}

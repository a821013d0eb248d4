//! Core domain: clock rates and camera.

use bevy::prelude::*;

/// Physics tick rate. The controller's `simulate` step runs at this rate.
pub const FIXED_TICK_HZ: f64 = 64.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ))
            .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

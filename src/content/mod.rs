//! Content domain: data-driven movement tuning loaded from RON.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::MovementConfigDef;
pub use loader::{ConfigLoadError, load_movement_config, parse_movement_config};
pub use validation::{ConfigValidationError, validate_movement_config};

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementConfig;

const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_movement_content);
    }
}

/// Load and validate movement tuning, falling back to defaults on any error.
fn load_movement_content(mut commands: Commands) {
    let config = match resolve_movement_config(Path::new(DATA_DIR)) {
        Ok(config) => {
            info!(
                "Loaded movement config: run_speed={}, jump_force={}, coyote={}s, buffer={}s",
                config.run_speed, config.jump_force, config.coyote_time, config.jump_buffer_time
            );
            config
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!(
                "Movement config rejected ({} errors), using defaults",
                errors.len()
            );
            MovementConfig::default()
        }
    };

    commands.insert_resource(Gravity(Vec2::NEG_Y * config.gravity));
    commands.insert_resource(config);
}

/// Load, validate and convert. Errors are rendered to strings for logging.
pub fn resolve_movement_config(base_path: &Path) -> Result<MovementConfig, Vec<String>> {
    let def = load_movement_config(base_path).map_err(|e| vec![e.to_string()])?;

    let errors = validate_movement_config(&def);
    if errors.is_empty() {
        Ok(def.to_config())
    } else {
        Err(errors.iter().map(ToString::to_string).collect())
    }
}

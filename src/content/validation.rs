//! Range checks for movement tuning before it reaches the controller.

use super::data::MovementConfigDef;

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    pub field: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "movement config field '{}' = {} {}",
            self.field, self.value, self.reason
        )
    }
}

/// Helper macro for checking a numeric field against a predicate
macro_rules! check_field {
    ($errors:expr, $def:expr, $field:ident, $ok:expr, $reason:expr) => {
        let value: f32 = $def.$field;
        if !value.is_finite() {
            $errors.push(ConfigValidationError {
                field: stringify!($field),
                value: value.to_string(),
                reason: "must be finite",
            });
        } else if !($ok)(value) {
            $errors.push(ConfigValidationError {
                field: stringify!($field),
                value: value.to_string(),
                reason: $reason,
            });
        }
    };
}

/// Validate movement tuning.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_movement_config(def: &MovementConfigDef) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    check_field!(errors, def, run_speed, |v: f32| v >= 0.0, "must be >= 0");
    check_field!(errors, def, acceleration, |v: f32| v > 0.0, "must be > 0");
    check_field!(
        errors,
        def,
        air_control,
        |v: f32| (0.0..=1.0).contains(&v),
        "must be within [0, 1]"
    );
    check_field!(errors, def, jump_force, |v: f32| v >= 0.0, "must be >= 0");
    check_field!(errors, def, coyote_time, |v: f32| v >= 0.0, "must be >= 0");
    check_field!(errors, def, jump_buffer_time, |v: f32| v >= 0.0, "must be >= 0");
    check_field!(errors, def, ground_check_radius, |v: f32| v > 0.0, "must be > 0");
    check_field!(errors, def, gravity, |v: f32| v >= 0.0, "must be >= 0");

    let (offset_x, offset_y) = def.ground_check_offset;
    if !offset_x.is_finite() || !offset_y.is_finite() {
        errors.push(ConfigValidationError {
            field: "ground_check_offset",
            value: format!("({}, {})", offset_x, offset_y),
            reason: "must be finite",
        });
    }

    if def.ground_layers.is_empty() {
        errors.push(ConfigValidationError {
            field: "ground_layers",
            value: "[]".to_string(),
            reason: "must name at least one layer",
        });
    }

    errors
}

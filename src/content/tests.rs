//! Content domain: tests for movement config parsing and validation.

use avian2d::prelude::*;
use std::path::Path;

use super::{
    MovementConfigDef, load_movement_config, parse_movement_config, resolve_movement_config,
    validate_movement_config,
};
use crate::movement::GameLayer;

const SHIPPED_CONFIG: &str = include_str!("../../assets/data/movement.ron");

fn invalid_fields(def: &MovementConfigDef) -> Vec<&'static str> {
    validate_movement_config(def)
        .iter()
        .map(|e| e.field)
        .collect()
}

#[test]
fn test_shipped_config_parses_and_validates() {
    let def = parse_movement_config(SHIPPED_CONFIG, "movement.ron").unwrap();
    assert!(validate_movement_config(&def).is_empty());
    assert_eq!(def.ground_layers, vec![GameLayer::Ground]);
    assert!((def.air_control - 0.6).abs() < 1e-6);
}

#[test]
fn test_default_def_matches_default_config() {
    let config = MovementConfigDef::default().to_config();
    let expected = crate::movement::MovementConfig::default();
    assert_eq!(config.run_speed, expected.run_speed);
    assert_eq!(config.coyote_time, expected.coyote_time);
    assert_eq!(config.ground_check_offset, expected.ground_check_offset);
    assert_eq!(config.ground_layers, expected.ground_layers);
}

#[test]
fn test_ground_mask_folds_layers() {
    let def = MovementConfigDef {
        ground_layers: vec![GameLayer::Ground, GameLayer::Wall],
        ..Default::default()
    };
    let mask = def.ground_mask();
    assert_eq!(
        mask.0,
        GameLayer::Ground.to_bits() | GameLayer::Wall.to_bits()
    );
    assert_ne!(mask.0 & GameLayer::Wall.to_bits(), 0);
    assert_eq!(mask.0 & GameLayer::Player.to_bits(), 0);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_movement_config("(run_speed: )", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_movement_config(Path::new("does/not/exist")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
    assert!(resolve_movement_config(Path::new("does/not/exist")).is_err());
}

#[test]
fn test_air_control_out_of_range() {
    let def = MovementConfigDef {
        air_control: 1.5,
        ..Default::default()
    };
    assert_eq!(invalid_fields(&def), vec!["air_control"]);

    let def = MovementConfigDef {
        air_control: -0.1,
        ..Default::default()
    };
    assert_eq!(invalid_fields(&def), vec!["air_control"]);
}

#[test]
fn test_negative_windows_rejected() {
    let def = MovementConfigDef {
        coyote_time: -0.01,
        jump_buffer_time: -1.0,
        ..Default::default()
    };
    assert_eq!(
        invalid_fields(&def),
        vec!["coyote_time", "jump_buffer_time"]
    );
}

#[test]
fn test_zero_windows_allowed() {
    let def = MovementConfigDef {
        coyote_time: 0.0,
        jump_buffer_time: 0.0,
        ..Default::default()
    };
    assert!(validate_movement_config(&def).is_empty());
}

#[test]
fn test_non_finite_and_degenerate_values() {
    let def = MovementConfigDef {
        run_speed: f32::NAN,
        acceleration: 0.0,
        ground_check_radius: 0.0,
        ground_check_offset: (0.0, f32::INFINITY),
        ground_layers: Vec::new(),
        ..Default::default()
    };
    let errors = validate_movement_config(&def);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            "run_speed",
            "acceleration",
            "ground_check_radius",
            "ground_check_offset",
            "ground_layers"
        ]
    );
    assert_eq!(errors[0].reason, "must be finite");
    assert!(errors[1].to_string().contains("'acceleration'"));
}

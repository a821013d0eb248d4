//! Debug domain: tests for the movement readout.

use bevy::prelude::*;

use super::ui::format_movement_readout;
use crate::movement::{Facing, MovementConfig, MovementState};

#[test]
fn test_readout_ages_use_given_clock() {
    let config = MovementConfig {
        coyote_time: 0.1,
        ..default()
    };
    let state = MovementState {
        facing: Facing::Left,
        last_grounded_time: Some(1.0),
        last_jump_requested_time: None,
        ..default()
    };

    // Fixed clock 0.05s after the anchor: still inside the coyote window
    let text = format_movement_readout(&state, &config, 1.05);
    assert!(text.contains("Phase: CoyoteEligible"));
    assert!(text.contains("Grounded age: 0.050s"));
    assert!(text.contains("Jump press age: -"));
    assert!(text.contains("Facing: Left"));

    let text = format_movement_readout(&state, &config, 1.2);
    assert!(text.contains("Phase: Expired"));
}

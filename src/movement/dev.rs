//! Movement domain: test room for manual play.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

#[derive(Clone, Copy)]
enum Surface {
    Floor,
    Platform,
    Wall,
}

/// (kind, size, center). Platform gaps stay under the default jump apex.
const ROOM_LAYOUT: [(Surface, Vec2, Vec2); 6] = [
    (Surface::Floor, Vec2::new(800.0, 40.0), Vec2::new(0.0, -200.0)),
    (Surface::Wall, Vec2::new(40.0, 500.0), Vec2::new(-420.0, 50.0)),
    (Surface::Wall, Vec2::new(40.0, 500.0), Vec2::new(420.0, 50.0)),
    (Surface::Platform, Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0)),
    (Surface::Platform, Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0)),
    (Surface::Platform, Vec2::new(120.0, 20.0), Vec2::new(0.0, 150.0)),
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    for (surface, size, center) in ROOM_LAYOUT {
        let body = (
            Sprite {
                color: surface_color(surface),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        );

        match surface {
            Surface::Floor | Surface::Platform => {
                commands.spawn((
                    Ground,
                    body,
                    CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
                ));
            }
            Surface::Wall => {
                commands.spawn((
                    Wall,
                    body,
                    CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
                ));
            }
        }
    }
}

fn surface_color(surface: Surface) -> Color {
    match surface {
        Surface::Floor => Color::srgb(0.4, 0.5, 0.4),
        Surface::Platform => Color::srgb(0.5, 0.4, 0.3),
        Surface::Wall => Color::srgb(0.3, 0.3, 0.4),
    }
}

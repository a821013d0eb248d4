//! Movement domain: avian2d adapters for ground queries and body velocity.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::{GroundQuery, PhysicsBody};

/// Mask-filtered query that never reports the querying body itself.
pub(crate) fn ground_filter(mask: LayerMask, exclude: Entity) -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask(mask).with_excluded_entities([exclude])
}

/// Circle overlap against the spatial query pipeline, ignoring the querying body.
pub(crate) struct SpatialGround<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub exclude: Entity,
}

impl GroundQuery for SpatialGround<'_, '_, '_> {
    fn overlaps_circle(&self, center: Vec2, radius: f32, mask: LayerMask) -> bool {
        let filter = ground_filter(mask, self.exclude);
        let probe = Collider::circle(radius);

        !self
            .spatial_query
            .shape_intersections(&probe, center, 0.0, &filter)
            .is_empty()
    }
}

/// Velocity view over a dynamic body. Impulses are scaled by inverse mass.
pub(crate) struct DynamicBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub inverse_mass: f32,
}

impl PhysicsBody for DynamicBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }
}

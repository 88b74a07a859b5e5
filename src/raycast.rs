//! Line traces against [`Collider`] boxes.
//!
//! The host engine owns real physics; the interact trace only needs the
//! nearest box along a short segment, which `bevy_math`'s bounding-volume
//! casts answer directly.

use bevy::prelude::*;
use bevy_math::bounding::{Aabb3d, RayCast3d};

use crate::components::Collider;

/// Nearest intersection found by [`trace_line`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    /// Owner of the box that was hit.
    pub entity: Entity,
    /// Distance from the trace origin.
    pub distance: f32,
    /// World-space entry point on the box.
    pub point: Vec3,
}

/// World-space box for a collider on an entity at `translation`.
#[must_use]
pub fn collider_bounds(translation: Vec3, collider: &Collider) -> Aabb3d {
    Aabb3d::new(translation, collider.half_extents)
}

/// Casts from `origin` along `direction` for at most `reach` units.
///
/// Returns the closest candidate the segment touches. A zero or non-finite
/// direction hits nothing.
pub fn trace_line<I>(origin: Vec3, direction: Vec3, reach: f32, candidates: I) -> Option<TraceHit>
where
    I: IntoIterator<Item = (Entity, Aabb3d)>,
{
    let dir = Dir3::new(direction).ok()?;
    let cast = RayCast3d::new(origin, dir, reach);

    candidates
        .into_iter()
        .filter_map(|(entity, bounds)| {
            cast.aabb_intersection_at(&bounds)
                .map(|distance| (entity, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, distance)| TraceHit {
            entity,
            distance,
            point: origin + dir.as_vec3() * distance,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn boxed(world: &mut World, centre: Vec3) -> (Entity, Aabb3d) {
        (
            world.spawn_empty().id(),
            collider_bounds(centre, &Collider::cuboid(Vec3::splat(10.0))),
        )
    }

    #[rstest]
    fn nearest_box_wins() {
        let mut world = World::new();
        let near = boxed(&mut world, Vec3::new(0.0, 0.0, -100.0));
        let far = boxed(&mut world, Vec3::new(0.0, 0.0, -300.0));
        let hit = trace_line(Vec3::ZERO, Vec3::NEG_Z, 800.0, [far, near]).expect("should hit");
        assert_eq!(hit.entity, near.0);
        assert_relative_eq!(hit.distance, 90.0, epsilon = 1e-3);
        assert!(hit.point.abs_diff_eq(Vec3::new(0.0, 0.0, -90.0), 1e-3));
    }

    #[rstest]
    fn boxes_beyond_reach_are_missed() {
        let mut world = World::new();
        let target = boxed(&mut world, Vec3::new(0.0, 0.0, -900.0));
        assert!(trace_line(Vec3::ZERO, Vec3::NEG_Z, 800.0, [target]).is_none());
    }

    #[rstest]
    fn boxes_behind_the_origin_are_missed() {
        let mut world = World::new();
        let target = boxed(&mut world, Vec3::new(0.0, 0.0, 100.0));
        assert!(trace_line(Vec3::ZERO, Vec3::NEG_Z, 800.0, [target]).is_none());
    }

    #[rstest]
    fn off_axis_boxes_are_missed() {
        let mut world = World::new();
        let target = boxed(&mut world, Vec3::new(50.0, 0.0, -100.0));
        assert!(trace_line(Vec3::ZERO, Vec3::NEG_Z, 800.0, [target]).is_none());
    }

    #[rstest]
    #[case::zero(Vec3::ZERO)]
    #[case::nan(Vec3::new(f32::NAN, 0.0, -1.0))]
    fn degenerate_direction_hits_nothing(#[case] direction: Vec3) {
        let mut world = World::new();
        let target = boxed(&mut world, Vec3::new(0.0, 0.0, -100.0));
        assert!(trace_line(Vec3::ZERO, direction, 800.0, [target]).is_none());
    }
}

//! The demo clearing the binary starts in.

use bevy::prelude::*;

use crate::components::Collider;
use crate::config::SurvivalSettings;
use crate::harvest::Harvestable;
use crate::inventory::ResourceKind;
use crate::player::PlayerBundle;

/// Spawns a small demo clearing: the player plus one node of each resource.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn spawn_world_system(mut commands: Commands, settings: Res<SurvivalSettings>) {
    commands.spawn(PlayerBundle::new(Transform::default(), &settings));

    // Tree straight ahead of the spawn point
    commands.spawn((
        Name::new("Tree"),
        Harvestable::new(ResourceKind::Wood, 10, 100),
        Collider::cuboid(Vec3::new(40.0, 300.0, 40.0)),
        Transform::from_xyz(0.0, 0.0, -300.0),
    ));

    // Boulder off to the right
    commands.spawn((
        Name::new("Boulder"),
        Harvestable::new(ResourceKind::Stone, 5, 60),
        Collider::cuboid(Vec3::splat(80.0)),
        Transform::from_xyz(300.0, 0.0, -200.0),
    ));

    // Berry bush to the left
    commands.spawn((
        Name::new("Berry bush"),
        Harvestable::new(ResourceKind::Berry, 2, 20),
        Collider::cuboid(Vec3::new(50.0, 40.0, 50.0)),
        Transform::from_xyz(-250.0, 0.0, -150.0),
    ));
}

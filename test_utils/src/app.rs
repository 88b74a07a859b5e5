//! Headless app fixtures driven by a fixed frame time.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use forager::components::{Collider, Player};
use forager::harvest::Harvestable;
use forager::inventory::ResourceKind;
use forager::{PlayerBundle, SurvivalPlugin, SurvivalSettings};

/// Frame time applied by [`test_app`]. Bevy clamps larger virtual deltas.
pub const TICK: Duration = Duration::from_millis(250);

/// Builds an app with [`MinimalPlugins`] and [`SurvivalPlugin`], advancing
/// time by [`TICK`] on every update.
///
/// The first update only establishes the clock, so call it once before
/// measuring.
pub fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));
    app.add_plugins(SurvivalPlugin);
    app.update();
    app
}

/// Runs `frames` updates.
pub fn advance(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Spawns a player at `transform` using the app's settings.
pub fn spawn_test_player(app: &mut App, transform: Transform) -> Entity {
    let settings = app.world().resource::<SurvivalSettings>().clone();
    app.world_mut()
        .spawn(PlayerBundle::new(transform, &settings))
        .id()
}

/// Spawns a resource node with a cube collider of half extent `half` at
/// `position`.
pub fn spawn_node(
    app: &mut App,
    kind: ResourceKind,
    yield_per_hit: u32,
    remaining: u32,
    position: Vec3,
    half: f32,
) -> Entity {
    app.world_mut()
        .spawn((
            Harvestable::new(kind, yield_per_hit, remaining),
            Collider::cuboid(Vec3::splat(half)),
            Transform::from_translation(position),
        ))
        .id()
}

/// All entities carrying the [`Player`] marker.
pub fn find_players(world: &mut World) -> Vec<Entity> {
    let mut query = world.query_filtered::<Entity, With<Player>>();
    query.iter(world).collect()
}

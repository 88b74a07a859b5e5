//! Spawning, steering and confirming building previews.

use std::mem;

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::warn;
use thiserror::Error;

use crate::components::{Player, PlayerView};
use crate::config::{PlacementSettings, SurvivalSettings};
use crate::vector_math::point_along;

use super::{
    BuildingFeedback, BuildingKind, BuildingOutcome, BuildingPart, BuildingStock, PlacedPart,
    PlacementPreview,
};

/// Whether a player is currently holding a preview.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlacementState {
    /// No preview active.
    #[default]
    Idle,
    /// A part follows the player's view.
    Previewing {
        /// The preview entity.
        part: Entity,
        /// What kind of part it is.
        kind: BuildingKind,
    },
}

impl PlacementState {
    /// Whether a preview is active.
    #[must_use]
    pub const fn is_previewing(&self) -> bool {
        matches!(self, Self::Previewing { .. })
    }

    /// The part following the player's view, if any.
    #[must_use]
    pub const fn preview(&self) -> Option<Entity> {
        match self {
            Self::Previewing { part, .. } => Some(*part),
            Self::Idle => None,
        }
    }

    /// Returns to [`PlacementState::Idle`], handing back the previewed part.
    pub fn finish(&mut self) -> Option<Entity> {
        mem::take(self).preview()
    }
}

/// Why a preview could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// A preview of this kind is already following the player.
    #[error("a {0} preview is already active")]
    AlreadyPlacing(BuildingKind),
    /// No part of this kind has been crafted.
    #[error("no {0} in stock")]
    OutOfStock(BuildingKind),
}

/// Request to start previewing a stocked part.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeginPlacement {
    /// Player who wants to build.
    pub player: Entity,
    /// Part to take from stock.
    pub kind: BuildingKind,
}

/// Request to turn the active preview by one rotation step.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatePreview {
    /// Player owning the preview.
    pub player: Entity,
}

/// Checks that a preview may start and takes one part of `kind` from stock.
///
/// # Errors
/// [`PlacementError::AlreadyPlacing`] while another preview is active and
/// [`PlacementError::OutOfStock`] when no part of `kind` is left. Stock is
/// untouched on error.
pub fn reserve_part(
    state: &PlacementState,
    stock: &mut BuildingStock,
    kind: BuildingKind,
) -> Result<(), PlacementError> {
    if let PlacementState::Previewing { kind: active, .. } = *state {
        return Err(PlacementError::AlreadyPlacing(active));
    }
    if !stock.take(kind) {
        return Err(PlacementError::OutOfStock(kind));
    }
    Ok(())
}

/// Where a preview hovers for a player standing at `transform`.
///
/// Only the translation is meaningful; callers keep the part's own rotation.
#[must_use]
pub fn preview_transform(
    transform: &Transform,
    view: &PlayerView,
    settings: &PlacementSettings,
) -> Transform {
    Transform::from_translation(point_along(
        view.eye(transform),
        view.forward(),
        settings.distance,
    ))
}

/// Confirms the active preview, leaving the part where it is.
///
/// Returns the placed part. A preview whose entity has already gone simply
/// ends preview mode.
pub fn confirm_placement(
    commands: &mut Commands,
    state: &mut PlacementState,
    previews: &Query<(), With<PlacementPreview>>,
) -> Option<Entity> {
    let part = state.finish()?;
    if !previews.contains(part) {
        return None;
    }
    commands
        .entity(part)
        .remove::<PlacementPreview>()
        .insert(PlacedPart);
    Some(part)
}

/// Reserves a part and spawns its preview in front of the player's eye.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> and Res<T> by value."
)]
pub fn on_begin_placement(
    event: On<BeginPlacement>,
    settings: Res<SurvivalSettings>,
    mut players: Query<(&Transform, &PlayerView, &mut BuildingStock, &mut PlacementState)>,
    mut commands: Commands,
) {
    let BeginPlacement { player, kind } = *event.event();
    let Ok((transform, view, mut stock, mut state)) = players.get_mut(player) else {
        warn!("placement request for {player:?}, which cannot build");
        return;
    };

    let outcome = match reserve_part(&state, &mut stock, kind) {
        Ok(()) => {
            let part = commands
                .spawn((
                    BuildingPart { kind },
                    PlacementPreview,
                    kind.collider(),
                    preview_transform(transform, view, &settings.placement),
                    Name::new(format!("{kind} preview")),
                ))
                .id();
            *state = PlacementState::Previewing { part, kind };
            BuildingOutcome::PreviewSpawned { kind, part }
        }
        Err(err) => BuildingOutcome::PreviewRefused(err),
    };
    commands.trigger(BuildingFeedback { player, outcome });
}

/// Turns the active preview about world up by one rotation step.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> and Res<T> by value."
)]
pub fn on_rotate_preview(
    event: On<RotatePreview>,
    settings: Res<SurvivalSettings>,
    players: Query<&PlacementState>,
    mut previews: Query<&mut Transform, With<PlacementPreview>>,
    mut commands: Commands,
) {
    let RotatePreview { player } = *event.event();
    let Some(part) = players.get(player).ok().and_then(PlacementState::preview) else {
        return;
    };
    let Ok(mut transform) = previews.get_mut(part) else {
        return;
    };
    transform.rotate_y(settings.placement.rotation_step());
    commands.trigger(BuildingFeedback {
        player,
        outcome: BuildingOutcome::Rotated { part },
    });
}

/// Keeps each preview hovering in front of its owner's eye.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn preview_follow_system(
    settings: Res<SurvivalSettings>,
    players: Query<(&Transform, &PlayerView, &PlacementState), With<Player>>,
    mut previews: Query<&mut Transform, (With<PlacementPreview>, Without<Player>)>,
) {
    for (transform, view, state) in &players {
        let Some(part) = state.preview() else {
            continue;
        };
        let Ok(mut part_transform) = previews.get_mut(part) else {
            continue;
        };
        part_transform.translation =
            preview_transform(transform, view, &settings.placement).translation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use rstest::{fixture, rstest};
    use std::f32::consts::FRAC_PI_2;

    #[fixture]
    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(SurvivalSettings::default());
        world.add_observer(on_begin_placement);
        world.add_observer(on_rotate_preview);
        world
    }

    fn spawn_builder(world: &mut World, stock: BuildingStock) -> Entity {
        world
            .spawn((
                Player,
                Transform::default(),
                PlayerView {
                    eye_height: 0.0,
                    ..PlayerView::default()
                },
                stock,
                PlacementState::default(),
            ))
            .id()
    }

    #[rstest]
    fn reserving_needs_an_idle_player_and_stock() {
        let mut stock = BuildingStock {
            walls: 1,
            ..Default::default()
        };
        assert_eq!(
            reserve_part(&PlacementState::Idle, &mut stock, BuildingKind::Floor),
            Err(PlacementError::OutOfStock(BuildingKind::Floor))
        );
        let mut world = World::new();
        let busy = PlacementState::Previewing {
            part: world.spawn_empty().id(),
            kind: BuildingKind::Ceiling,
        };
        assert_eq!(
            reserve_part(&busy, &mut stock, BuildingKind::Wall),
            Err(PlacementError::AlreadyPlacing(BuildingKind::Ceiling))
        );
        assert_eq!(stock.walls, 1);
        assert_eq!(
            reserve_part(&PlacementState::Idle, &mut stock, BuildingKind::Wall),
            Ok(())
        );
        assert_eq!(stock.walls, 0);
    }

    #[rstest]
    fn begin_spawns_preview_in_front_of_the_eye(mut world: World) {
        let player = spawn_builder(
            &mut world,
            BuildingStock {
                walls: 2,
                ..Default::default()
            },
        );

        world.trigger(BeginPlacement {
            player,
            kind: BuildingKind::Wall,
        });
        world.flush();

        let state = *world.get::<PlacementState>(player).expect("state");
        let part = state.preview().expect("preview started");
        let transform = world.get::<Transform>(part).expect("part transform");
        assert!(transform
            .translation
            .abs_diff_eq(Vec3::new(0.0, 0.0, -400.0), 1e-3));
        assert_eq!(transform.rotation, Quat::IDENTITY);
        assert_eq!(
            world.get::<BuildingPart>(part),
            Some(&BuildingPart {
                kind: BuildingKind::Wall
            })
        );
        assert_eq!(world.get::<BuildingStock>(player).map(|s| s.walls), Some(1));
    }

    #[rstest]
    fn second_begin_is_refused_while_previewing(mut world: World) {
        let player = spawn_builder(
            &mut world,
            BuildingStock {
                walls: 2,
                ..Default::default()
            },
        );
        let request = BeginPlacement {
            player,
            kind: BuildingKind::Wall,
        };
        world.trigger(request);
        world.flush();
        world.trigger(request);
        world.flush();

        assert_eq!(world.get::<BuildingStock>(player).map(|s| s.walls), Some(1));
        let mut parts = world.query::<&BuildingPart>();
        assert_eq!(parts.iter(&world).count(), 1);
    }

    #[rstest]
    fn rotate_turns_only_the_active_preview(mut world: World) {
        let player = spawn_builder(
            &mut world,
            BuildingStock {
                floors: 1,
                ..Default::default()
            },
        );

        world.trigger(RotatePreview { player });
        world.flush();
        world.trigger(BeginPlacement {
            player,
            kind: BuildingKind::Floor,
        });
        world.flush();
        world.trigger(RotatePreview { player });
        world.flush();

        let part = world
            .get::<PlacementState>(player)
            .and_then(PlacementState::preview)
            .expect("previewing");
        let rotation = world.get::<Transform>(part).expect("transform").rotation;
        assert!(rotation.abs_diff_eq(Quat::from_rotation_y(FRAC_PI_2), 1e-5));
    }

    #[rstest]
    fn preview_follows_the_view(mut world: World) {
        let player = spawn_builder(
            &mut world,
            BuildingStock {
                ceilings: 1,
                ..Default::default()
            },
        );
        world.trigger(BeginPlacement {
            player,
            kind: BuildingKind::Ceiling,
        });
        world.flush();
        world.trigger(RotatePreview { player });
        world.flush();

        {
            let mut entity = world.entity_mut(player);
            entity.get_mut::<Transform>().expect("transform").translation = Vec3::new(10.0, 0.0, 0.0);
            entity.get_mut::<PlayerView>().expect("view").yaw = FRAC_PI_2;
        }
        world
            .run_system_once(preview_follow_system)
            .expect("follow system runs");

        let part = world
            .get::<PlacementState>(player)
            .and_then(PlacementState::preview)
            .expect("previewing");
        let transform = world.get::<Transform>(part).expect("transform");
        assert!(transform
            .translation
            .abs_diff_eq(Vec3::new(-390.0, 0.0, 0.0), 1e-3));
        assert!(transform
            .rotation
            .abs_diff_eq(Quat::from_rotation_y(FRAC_PI_2), 1e-5));
    }

    #[rstest]
    fn confirm_leaves_part_in_place(mut world: World) {
        let player = spawn_builder(
            &mut world,
            BuildingStock {
                walls: 1,
                ..Default::default()
            },
        );
        world.trigger(BeginPlacement {
            player,
            kind: BuildingKind::Wall,
        });
        world.flush();

        let placed = world
            .run_system_once(
                move |mut commands: Commands,
                      mut states: Query<&mut PlacementState>,
                      previews: Query<(), With<PlacementPreview>>| {
                    let mut state = states.get_mut(player).ok()?;
                    confirm_placement(&mut commands, &mut state, &previews)
                },
            )
            .expect("confirm system runs")
            .expect("a part was placed");

        assert_eq!(
            world.get::<PlacementState>(player),
            Some(&PlacementState::Idle)
        );
        assert!(world.get::<PlacedPart>(placed).is_some());
        assert!(world.get::<PlacementPreview>(placed).is_none());
    }

    #[rstest]
    fn confirm_tolerates_a_vanished_preview() {
        let mut world = World::new();
        let part = world.spawn_empty().id();
        world.despawn(part);
        let mut state = PlacementState::Previewing {
            part,
            kind: BuildingKind::Wall,
        };
        let placed = world
            .run_system_once(
                move |mut commands: Commands, previews: Query<(), With<PlacementPreview>>| {
                    confirm_placement(&mut commands, &mut state, &previews)
                },
            )
            .expect("confirm system runs");
        assert_eq!(placed, None);
    }
}

//! Gathering resources from nodes in the world.
//!
//! Pressing interact traces a line from the player's eye. When it lands on a
//! [`Harvestable`] node and the player has the stamina for it, the node gives
//! up a share of its stock. A node whose stock runs out is removed instead.
//! While a building preview is active, interact confirms the placement and
//! nothing is harvested.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use bevy_ecs::system::SystemParam;
use log::{debug, info, warn};

use crate::building::{
    confirm_placement, BuildingFeedback, BuildingOutcome, PlacementPreview, PlacementState,
};
use crate::components::{Collider, Player, PlayerView};
use crate::config::{HarvestSettings, SurvivalSettings};
use crate::inventory::{Inventory, ResourceKind};
use crate::raycast::{collider_bounds, trace_line};
use crate::vitals::Vitals;

/// A resource node that can be struck for materials.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct Harvestable {
    /// Material handed over.
    pub kind: ResourceKind,
    /// Amount handed over by each successful strike.
    pub yield_per_hit: u32,
    /// Stock left in the node.
    pub remaining: u32,
}

impl Harvestable {
    /// A node holding `remaining` of `kind`, paying `yield_per_hit` per strike.
    #[must_use]
    pub const fn new(kind: ResourceKind, yield_per_hit: u32, remaining: u32) -> Self {
        Self {
            kind,
            yield_per_hit,
            remaining,
        }
    }
}

/// Short-lived impact marker left where a strike landed.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct HitMarker {
    /// Despawns the marker when finished.
    pub lifetime: Timer,
}

/// Result of striking a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    /// The node handed over `amount` of `kind`.
    Collected {
        /// Material handed over.
        kind: ResourceKind,
        /// Quantity handed over.
        amount: u32,
    },
    /// The node ran dry and should be removed. Nothing was handed over.
    Depleted,
    /// The player lacked the stamina to swing.
    TooTired,
}

/// Strikes `node` once on behalf of a player.
///
/// The node's stock is reduced first. The player is paid only if more than
/// one strike's worth is still left afterwards; otherwise the node is
/// reported as depleted and the final strike pays nothing.
pub fn strike(
    node: &mut Harvestable,
    vitals: &mut Vitals,
    inventory: &mut Inventory,
    settings: &HarvestSettings,
) -> Strike {
    if vitals.stamina <= settings.min_stamina {
        return Strike::TooTired;
    }
    node.remaining = node.remaining.saturating_sub(node.yield_per_hit);
    if node.remaining <= node.yield_per_hit {
        return Strike::Depleted;
    }
    inventory.give(node.kind, node.yield_per_hit);
    vitals.adjust_stamina(-settings.stamina_cost);
    Strike::Collected {
        kind: node.kind,
        amount: node.yield_per_hit,
    }
}

/// Request to interact with whatever the player is looking at.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interact {
    /// Player pressing interact.
    pub player: Entity,
}

/// What an [`Interact`] request achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractOutcome {
    /// A strike paid out.
    Collected {
        /// Node that was struck.
        node: Entity,
        /// Material received.
        kind: ResourceKind,
        /// Quantity received.
        amount: u32,
    },
    /// The node ran dry and was removed.
    Depleted {
        /// Node that was removed.
        node: Entity,
    },
    /// The player lacked the stamina to strike.
    TooTired {
        /// Node that was targeted.
        node: Entity,
    },
    /// The trace hit something that cannot be harvested.
    Blocked {
        /// Entity in the way.
        entity: Entity,
    },
    /// The trace hit nothing within reach.
    Missed,
    /// Interact ended preview mode instead of harvesting.
    PlacementConfirmed {
        /// Part left in the world, if the preview still existed.
        part: Option<Entity>,
    },
}

/// Published after every [`Interact`] request.
#[derive(Event, Debug, Clone, Copy)]
pub struct InteractFeedback {
    /// Player who interacted.
    pub player: Entity,
    /// What came of it.
    pub outcome: InteractOutcome,
}

/// Player components touched by an interact.
#[derive(SystemParam)]
pub struct Interactors<'w, 's> {
    players: Query<
        'w,
        's,
        (
            &'static Transform,
            &'static PlayerView,
            &'static mut Vitals,
            &'static mut Inventory,
            &'static mut PlacementState,
        ),
        With<Player>,
    >,
}

/// World state an interact trace can see or change.
#[derive(SystemParam)]
pub struct InteractTargets<'w, 's> {
    colliders: Query<'w, 's, (Entity, &'static Transform, &'static Collider), Without<Player>>,
    nodes: Query<'w, 's, &'static mut Harvestable>,
    previews: Query<'w, 's, (), With<PlacementPreview>>,
}

/// Confirms an active preview, or traces from the eye and strikes the node
/// that was hit.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> and Res<T> by value."
)]
pub fn on_interact(
    event: On<Interact>,
    settings: Res<SurvivalSettings>,
    mut interactors: Interactors,
    mut targets: InteractTargets,
    mut commands: Commands,
) {
    let Interact { player } = *event.event();
    let Ok((transform, view, mut vitals, mut inventory, mut state)) =
        interactors.players.get_mut(player)
    else {
        warn!("interact request for {player:?}, which is not a player");
        return;
    };

    if state.is_previewing() {
        let part = confirm_placement(&mut commands, &mut state, &targets.previews);
        if let Some(placed) = part {
            commands.trigger(BuildingFeedback {
                player,
                outcome: BuildingOutcome::Placed { part: placed },
            });
        }
        commands.trigger(InteractFeedback {
            player,
            outcome: InteractOutcome::PlacementConfirmed { part },
        });
        return;
    }

    let origin = view.eye(transform);
    let direction = view.forward();
    let traced = trace_line(
        origin,
        direction,
        settings.harvest.reach,
        targets
            .colliders
            .iter()
            .map(|(entity, at, collider)| (entity, collider_bounds(at.translation, collider))),
    );

    let outcome = match traced {
        None => InteractOutcome::Missed,
        Some(hit) => match targets.nodes.get_mut(hit.entity) {
            Err(_) => InteractOutcome::Blocked { entity: hit.entity },
            Ok(mut node) => {
                let node_entity = hit.entity;
                match strike(&mut node, &mut vitals, &mut inventory, &settings.harvest) {
                    Strike::Collected { kind, amount } => {
                        commands.spawn((
                            HitMarker {
                                lifetime: Timer::from_seconds(
                                    settings.harvest.marker_lifetime_secs,
                                    TimerMode::Once,
                                ),
                            },
                            Transform::from_translation(hit.point)
                                .looking_to(-direction, Vec3::Y)
                                .with_scale(Vec3::splat(settings.harvest.marker_size)),
                            Name::new("Hit marker"),
                        ));
                        InteractOutcome::Collected {
                            node: node_entity,
                            kind,
                            amount,
                        }
                    }
                    Strike::Depleted => {
                        commands.entity(node_entity).despawn();
                        InteractOutcome::Depleted { node: node_entity }
                    }
                    Strike::TooTired => InteractOutcome::TooTired { node: node_entity },
                }
            }
        },
    };
    commands.trigger(InteractFeedback { player, outcome });
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub(crate) fn log_interact_feedback(event: On<InteractFeedback>) {
    let InteractFeedback { player, outcome } = *event.event();
    match outcome {
        InteractOutcome::Collected { kind, amount, .. } => {
            info!("Resource Collected: {amount} {kind} for {player:?}");
        }
        InteractOutcome::Depleted { node } => info!("Resource Depleted: {node:?}"),
        InteractOutcome::TooTired { .. } => debug!("{player:?} is too tired to harvest"),
        InteractOutcome::Blocked { entity } => debug!("{player:?} interact blocked by {entity:?}"),
        InteractOutcome::Missed => debug!("{player:?} interact hit nothing"),
        InteractOutcome::PlacementConfirmed { part } => debug!("{player:?} confirmed {part:?}"),
    }
}

/// Removes impact markers once their lifetime is up.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn expire_hit_markers_system(
    time: Res<Time>,
    mut markers: Query<(Entity, &mut HitMarker)>,
    mut commands: Commands,
) {
    for (entity, mut marker) in &mut markers {
        if marker.lifetime.tick(time.delta()).is_finished() {
            commands.entity(entity).despawn();
        }
    }
}

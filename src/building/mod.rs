//! Building parts: crafting them from resources and placing them in the world.
//!
//! A part goes through three stages:
//!
//! - crafted: wood and stone are exchanged for one unit of [`BuildingStock`],
//! - previewed: a stocked unit is spawned as a [`BuildingPart`] carrying
//!   [`PlacementPreview`], which hovers in front of the player's eye and can
//!   be rotated,
//! - placed: the next interact confirms the preview, swapping the marker for
//!   [`PlacedPart`] and leaving the part where it hovered.
//!
//! Requests arrive as observer events ([`CraftBuilding`], [`BeginPlacement`],
//! [`RotatePreview`]) so both the input layer and a host UI can issue them.

pub mod craft;
pub mod placement;

pub use craft::{craft, on_craft_building, CraftBuilding};
pub use placement::{
    confirm_placement, on_begin_placement, on_rotate_preview, preview_follow_system,
    preview_transform, reserve_part, BeginPlacement, PlacementError, PlacementState,
    RotatePreview,
};

use std::fmt;

use bevy::prelude::*;
use bevy::ecs::prelude::On;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::Collider;
use crate::inventory::CraftError;

/// The kinds of structure a player can build.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    /// Upright panel.
    Wall,
    /// Flat panel at foot level.
    Floor,
    /// Flat panel overhead.
    Ceiling,
}

impl BuildingKind {
    /// Every kind, in slot order.
    pub const ALL: [Self; 3] = [Self::Wall, Self::Floor, Self::Ceiling];

    /// Name shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wall => "Wall",
            Self::Floor => "Floor",
            Self::Ceiling => "Ceiling",
        }
    }

    /// Collision box of a part of this kind.
    #[must_use]
    pub const fn collider(self) -> Collider {
        match self {
            Self::Wall => Collider::cuboid(Vec3::new(200.0, 150.0, 10.0)),
            Self::Floor | Self::Ceiling => Collider::cuboid(Vec3::new(200.0, 10.0, 200.0)),
        }
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a slot index names no [`BuildingKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no building kind in slot {0}")]
pub struct BuildingIndexError(pub usize);

impl TryFrom<usize> for BuildingKind {
    type Error = BuildingIndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(BuildingIndexError(index))
    }
}

/// Crafted parts waiting to be placed.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct BuildingStock {
    /// Walls in stock.
    pub walls: u32,
    /// Floors in stock.
    pub floors: u32,
    /// Ceilings in stock.
    pub ceilings: u32,
}

impl BuildingStock {
    /// Parts of `kind` in stock.
    #[must_use]
    pub const fn count(&self, kind: BuildingKind) -> u32 {
        match kind {
            BuildingKind::Wall => self.walls,
            BuildingKind::Floor => self.floors,
            BuildingKind::Ceiling => self.ceilings,
        }
    }

    fn slot_mut(&mut self, kind: BuildingKind) -> &mut u32 {
        match kind {
            BuildingKind::Wall => &mut self.walls,
            BuildingKind::Floor => &mut self.floors,
            BuildingKind::Ceiling => &mut self.ceilings,
        }
    }

    /// Stocks one more part of `kind`.
    pub fn add(&mut self, kind: BuildingKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(1);
    }

    /// Takes one part of `kind` out of stock, returning `false` when empty.
    pub fn take(&mut self, kind: BuildingKind) -> bool {
        let slot = self.slot_mut(kind);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

/// A structure spawned from stock.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct BuildingPart {
    /// What was built.
    pub kind: BuildingKind,
}

/// The part is still following its owner's view.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct PlacementPreview;

/// The part has been confirmed and stays put.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct PlacedPart;

/// What happened to a building request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuildingOutcome {
    /// One part was added to stock.
    Crafted(BuildingKind),
    /// The player could not afford the part.
    CraftRefused(BuildingKind, CraftError),
    /// A preview now follows the player.
    PreviewSpawned {
        /// Kind taken from stock.
        kind: BuildingKind,
        /// The preview entity.
        part: Entity,
    },
    /// No preview was started.
    PreviewRefused(PlacementError),
    /// The preview turned by one step.
    Rotated {
        /// The preview entity.
        part: Entity,
    },
    /// The preview was confirmed in place.
    Placed {
        /// The placed entity.
        part: Entity,
    },
}

/// Published after every building request so a UI can react.
#[derive(Event, Debug, Clone, Copy)]
pub struct BuildingFeedback {
    /// Player who made the request.
    pub player: Entity,
    /// What came of it.
    pub outcome: BuildingOutcome,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub(crate) fn log_building_feedback(event: On<BuildingFeedback>) {
    let BuildingFeedback { player, outcome } = *event.event();
    match outcome {
        BuildingOutcome::Crafted(kind) => info!("{player:?} crafted a {kind}"),
        BuildingOutcome::CraftRefused(kind, err) => debug!("{player:?} cannot craft a {kind}: {err}"),
        BuildingOutcome::PreviewSpawned { kind, part } => {
            debug!("{player:?} previewing {kind} {part:?}");
        }
        BuildingOutcome::PreviewRefused(err) => debug!("{player:?} cannot start placing: {err}"),
        BuildingOutcome::Rotated { part } => debug!("{player:?} rotated {part:?}"),
        BuildingOutcome::Placed { part } => info!("{player:?} placed {part:?}"),
    }
}

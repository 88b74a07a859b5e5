//! Harvested resource kinds and the player's stockpile of them.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A raw material that can be gathered from the world.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Felled from trees.
    Wood,
    /// Broken off boulders.
    Stone,
    /// Picked from bushes.
    Berry,
}

impl ResourceKind {
    /// Every kind in display order.
    pub const ALL: [Self; 3] = [Self::Wood, Self::Stone, Self::Berry];

    /// Name shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Stone => "Stone",
            Self::Berry => "Berry",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a resource name matches no [`ResourceKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource kind `{0}`")]
pub struct ParseResourceKindError(pub String);

impl FromStr for ResourceKind {
    type Err = ParseResourceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| ParseResourceKindError(s.to_owned()))
    }
}

/// Wood and stone needed to craft something.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCost {
    /// Wood consumed.
    pub wood: u32,
    /// Stone consumed.
    pub stone: u32,
}

impl ResourceCost {
    /// A cost of `wood` and `stone`.
    #[must_use]
    pub const fn new(wood: u32, stone: u32) -> Self {
        Self { wood, stone }
    }
}

/// Why [`Inventory::try_spend`] refused a cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CraftError {
    /// Too little wood.
    #[error("not enough wood: need {needed}, have {available}")]
    InsufficientWood {
        /// Wood the cost asks for.
        needed: u32,
        /// Wood carried.
        available: u32,
    },
    /// Enough wood but too little stone.
    #[error("not enough stone: need {needed}, have {available}")]
    InsufficientStone {
        /// Stone the cost asks for.
        needed: u32,
        /// Stone carried.
        available: u32,
    },
}

/// Resource counts carried by a player.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct Inventory {
    /// Wood carried.
    pub wood: u32,
    /// Stone carried.
    pub stone: u32,
    /// Berries carried.
    pub berry: u32,
}

impl Inventory {
    /// Amount of `kind` carried.
    #[must_use]
    pub const fn count(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Stone => self.stone,
            ResourceKind::Berry => self.berry,
        }
    }

    fn slot_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Wood => &mut self.wood,
            ResourceKind::Stone => &mut self.stone,
            ResourceKind::Berry => &mut self.berry,
        }
    }

    /// Adds `amount` of `kind`, saturating at `u32::MAX`.
    pub fn give(&mut self, kind: ResourceKind, amount: u32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(amount);
    }

    /// Removes the wood and stone in `cost` if both are available.
    ///
    /// Wood is checked before stone. On failure the inventory is unchanged.
    ///
    /// # Errors
    /// Returns the first resource that falls short.
    pub fn try_spend(&mut self, cost: ResourceCost) -> Result<(), CraftError> {
        if cost.wood > self.wood {
            return Err(CraftError::InsufficientWood {
                needed: cost.wood,
                available: self.wood,
            });
        }
        if cost.stone > self.stone {
            return Err(CraftError::InsufficientStone {
                needed: cost.stone,
                available: self.stone,
            });
        }
        self.wood -= cost.wood;
        self.stone -= cost.stone;
        Ok(())
    }

    /// `(name, count)` rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        ResourceKind::ALL
            .into_iter()
            .map(|kind| (kind.label(), self.count(kind)))
    }
}

//! Read-out of the player's state for the host UI to draw.

use bevy::prelude::*;

use crate::building::BuildingStock;
use crate::components::Player;
use crate::inventory::Inventory;
use crate::vitals::Vitals;

/// Per-frame snapshot of what the HUD bars and counters show.
///
/// Vitals are fractions of their maximum in `[0, 1]`.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct VitalsReadout {
    /// Health bar fill.
    pub health: f32,
    /// Hunger bar fill.
    pub hunger: f32,
    /// Stamina bar fill.
    pub stamina: f32,
    /// `(name, count)` rows in Wood, Stone, Berry order.
    pub resources: Vec<(&'static str, u32)>,
    /// Crafted parts waiting to be placed.
    pub buildings: BuildingStock,
}

impl VitalsReadout {
    /// Snapshot of one player's state. A zero maximum reads as empty bars.
    #[must_use]
    pub fn capture(vitals: &Vitals, inventory: &Inventory, buildings: BuildingStock) -> Self {
        let fraction = |value: f32| {
            if vitals.max > 0.0 {
                (value / vitals.max).clamp(0.0, 1.0)
            } else {
                0.0
            }
        };
        Self {
            health: fraction(vitals.health),
            hunger: fraction(vitals.hunger),
            stamina: fraction(vitals.stamina),
            resources: inventory.rows().collect(),
            buildings,
        }
    }
}

/// Refreshes [`VitalsReadout`] from the single player, leaving it alone when
/// nothing changed.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn update_readout_system(
    mut readout: ResMut<VitalsReadout>,
    players: Query<(&Vitals, &Inventory, &BuildingStock), With<Player>>,
) {
    let Ok((vitals, inventory, stock)) = players.single() else {
        return;
    };
    let next = VitalsReadout::capture(vitals, inventory, *stock);
    if *readout != next {
        *readout = next;
    }
}

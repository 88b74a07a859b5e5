//! Turning wood and stone into stocked building parts.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::warn;

use crate::config::{Recipes, SurvivalSettings};
use crate::inventory::{CraftError, Inventory};

use super::{BuildingFeedback, BuildingKind, BuildingOutcome, BuildingStock};

/// Request to craft one part of `kind` for `player`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CraftBuilding {
    /// Player paying for the part.
    pub player: Entity,
    /// Part to craft.
    pub kind: BuildingKind,
}

/// Spends the recipe cost of `kind` and stocks one part.
///
/// Both wood and stone must be available; otherwise nothing changes.
///
/// # Errors
/// Returns the resource that fell short.
///
/// # Examples
///
/// ```
/// use forager::building::{craft, BuildingKind, BuildingStock};
/// use forager::config::Recipes;
/// use forager::inventory::Inventory;
///
/// let mut inventory = Inventory { wood: 10, stone: 5, berry: 0 };
/// let mut stock = BuildingStock::default();
/// craft(&mut inventory, &mut stock, BuildingKind::Wall, &Recipes::default()).unwrap();
/// assert_eq!(stock.walls, 1);
/// assert_eq!(inventory.wood, 0);
/// ```
pub fn craft(
    inventory: &mut Inventory,
    stock: &mut BuildingStock,
    kind: BuildingKind,
    recipes: &Recipes,
) -> Result<(), CraftError> {
    inventory.try_spend(recipes.cost(kind))?;
    stock.add(kind);
    Ok(())
}

/// Crafts for the requesting player and reports the result as
/// [`BuildingFeedback`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> and Res<T> by value."
)]
pub fn on_craft_building(
    event: On<CraftBuilding>,
    settings: Res<SurvivalSettings>,
    mut players: Query<(&mut Inventory, &mut BuildingStock)>,
    mut commands: Commands,
) {
    let CraftBuilding { player, kind } = *event.event();
    let Ok((mut inventory, mut stock)) = players.get_mut(player) else {
        warn!("craft request for {player:?}, which cannot craft");
        return;
    };

    let outcome = match craft(&mut inventory, &mut stock, kind, &settings.recipes) {
        Ok(()) => BuildingOutcome::Crafted(kind),
        Err(err) => BuildingOutcome::CraftRefused(kind, err),
    };
    commands.trigger(BuildingFeedback { player, outcome });
}

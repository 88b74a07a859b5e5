//! Bevy plugin wiring the survival systems into the schedule.

use bevy::prelude::*;

use crate::building::{
    log_building_feedback, on_begin_placement, on_craft_building, on_rotate_preview,
    preview_follow_system, BuildingPart, BuildingStock, PlacedPart, PlacementPreview,
};
use crate::components::{Collider, Jump, Player, PlayerView};
use crate::config::SurvivalSettings;
use crate::harvest::{
    expire_hit_markers_system, log_interact_feedback, on_interact, Harvestable, HitMarker,
};
use crate::hud::{update_readout_system, VitalsReadout};
use crate::input::{capture_input_system, InputBindings, PlayerInput};
use crate::inventory::Inventory;
use crate::movement::player_movement_system;
use crate::vitals::{stat_decay_system, StatDecay, Vitals};

/// Ordered stages of a survival frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurvivalSet {
    /// Host input sampled and turned into actions.
    Input,
    /// Look and walk applied to the player.
    Movement,
    /// Timers and previews.
    Simulation,
    /// HUD read-out refreshed.
    Presentation,
}

/// Installs the character controller: stats, harvesting, building and
/// movement.
///
/// Settings already inserted by the host are kept. Otherwise the defaults
/// are used.
#[derive(Default)]
pub struct SurvivalPlugin;

impl Plugin for SurvivalPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SurvivalSettings>() {
            app.init_resource::<SurvivalSettings>();
        }
        app.init_resource::<InputBindings>()
            .init_resource::<PlayerInput>()
            .init_resource::<VitalsReadout>();

        app.register_type::<Player>()
            .register_type::<PlayerView>()
            .register_type::<Jump>()
            .register_type::<Collider>()
            .register_type::<Vitals>()
            .register_type::<StatDecay>()
            .register_type::<Inventory>()
            .register_type::<Harvestable>()
            .register_type::<HitMarker>()
            .register_type::<BuildingStock>()
            .register_type::<BuildingPart>()
            .register_type::<PlacementPreview>()
            .register_type::<PlacedPart>();

        app.add_observer(on_interact)
            .add_observer(on_craft_building)
            .add_observer(on_begin_placement)
            .add_observer(on_rotate_preview)
            .add_observer(log_interact_feedback)
            .add_observer(log_building_feedback);

        app.configure_sets(
            Update,
            (
                SurvivalSet::Input,
                SurvivalSet::Movement,
                SurvivalSet::Simulation,
                SurvivalSet::Presentation,
            )
                .chain(),
        );
        app.add_systems(
            Update,
            (
                capture_input_system.in_set(SurvivalSet::Input),
                player_movement_system.in_set(SurvivalSet::Movement),
                (
                    stat_decay_system,
                    preview_follow_system,
                    expire_hit_markers_system,
                )
                    .in_set(SurvivalSet::Simulation),
                update_readout_system.in_set(SurvivalSet::Presentation),
            ),
        );
    }
}

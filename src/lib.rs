#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the forager character controller.
//!
//! [`SurvivalPlugin`] installs everything: stat decay, harvesting, building
//! placement, movement and the HUD read-out. The host engine owns rendering,
//! physics and windowing.
pub mod building;
pub mod components;
pub mod config;
pub mod constants;
pub mod harvest;
pub mod hud;
pub mod input;
pub mod inventory;
pub mod logging;
pub mod movement;
pub mod player;
pub mod plugin;
pub mod raycast;
pub mod spawn_world;
pub mod vector_math;
pub mod vitals;
pub use constants::*;

// Re-export commonly used items
pub use building::{
    BeginPlacement, BuildingFeedback, BuildingKind, BuildingOutcome, BuildingPart, BuildingStock,
    CraftBuilding, PlacedPart, PlacementError, PlacementPreview, PlacementState, RotatePreview,
};
pub use components::{Collider, Jump, Player, PlayerView};
pub use config::{ConfigError, SurvivalSettings};
pub use harvest::{Harvestable, HitMarker, Interact, InteractFeedback, InteractOutcome};
pub use hud::VitalsReadout;
pub use input::{InputBindings, PlayerInput};
pub use inventory::{CraftError, Inventory, ResourceCost, ResourceKind};
pub use logging::init as init_logging;
pub use player::PlayerBundle;
pub use plugin::{SurvivalPlugin, SurvivalSet};
pub use spawn_world::spawn_world_system;
pub use vitals::{StatDecay, Vitals};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use forager::prelude::*;
    //! ```

    pub use crate::BeginPlacement;
    pub use crate::BuildingKind;
    pub use crate::CraftBuilding;
    pub use crate::Interact;
    pub use crate::Inventory;
    pub use crate::PlayerBundle;
    pub use crate::ResourceKind;
    pub use crate::SurvivalPlugin;
    pub use crate::SurvivalSettings;
    pub use crate::Vitals;
}

//! The player character's component set.

use bevy::prelude::*;

use crate::building::{BuildingStock, PlacementState};
use crate::components::{Jump, Player, PlayerView};
use crate::config::SurvivalSettings;
use crate::inventory::Inventory;
use crate::vitals::{StatDecay, Vitals};

/// Everything a controllable survivor carries.
#[derive(Bundle)]
pub struct PlayerBundle {
    /// Marker picked up by input, movement and the HUD.
    pub player: Player,
    /// Always "Player".
    pub name: Name,
    /// Feet position; the eye sits above it.
    pub transform: Transform,
    /// Yaw, pitch and eye height.
    pub view: PlayerView,
    /// Jump key state.
    pub jump: Jump,
    /// Health, hunger and stamina.
    pub vitals: Vitals,
    /// Timer driving the vitals.
    pub decay: StatDecay,
    /// Gathered materials.
    pub inventory: Inventory,
    /// Crafted parts not yet placed.
    pub buildings: BuildingStock,
    /// Whether a preview is active.
    pub placement: PlacementState,
}

impl PlayerBundle {
    /// A fresh survivor at `transform`: full stats, empty pockets.
    ///
    /// # Examples
    ///
    /// ```
    /// use bevy::prelude::*;
    /// use forager::config::SurvivalSettings;
    /// use forager::player::PlayerBundle;
    ///
    /// let bundle = PlayerBundle::new(Transform::default(), &SurvivalSettings::default());
    /// assert_eq!(bundle.name.as_str(), "Player");
    /// assert!((bundle.vitals.hunger - 100.0).abs() < f32::EPSILON);
    /// ```
    #[must_use]
    pub fn new(transform: Transform, settings: &SurvivalSettings) -> Self {
        Self {
            player: Player,
            name: Name::new("Player"),
            transform,
            view: PlayerView {
                eye_height: settings.movement.eye_height,
                ..PlayerView::default()
            },
            jump: Jump::default(),
            vitals: Vitals::full(settings.stats.max),
            decay: StatDecay::new(&settings.stats),
            inventory: Inventory::default(),
            buildings: BuildingStock::default(),
            placement: PlacementState::default(),
        }
    }
}

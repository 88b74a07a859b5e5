//! Runtime configuration for the survival plugin.
//!
//! [`SurvivalSettings`] is a Bevy resource grouping every tunable the systems
//! read. Defaults mirror [`crate::constants`]. Settings can also be loaded
//! from a JSON document in which every field is optional:
//!
//! ```
//! use forager::config::SurvivalSettings;
//!
//! let settings = SurvivalSettings::from_json_str(r#"{ "stats": { "hunger_decay": 2.0 } }"#)
//!     .unwrap();
//! assert!((settings.stats.hunger_decay - 2.0).abs() < f32::EPSILON);
//! assert!((settings.stats.stamina_regen - 10.0).abs() < f32::EPSILON);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::building::BuildingKind;
use crate::constants::{
    EYE_HEIGHT, HARVEST_MIN_STAMINA, HARVEST_REACH, HARVEST_STAMINA_COST, HIT_MARKER_LIFETIME_SECS,
    HIT_MARKER_SIZE, HUNGER_DECAY, LOOK_SENSITIVITY, MAX_PITCH_DEGREES, PLACEMENT_DISTANCE,
    PLACEMENT_ROTATION_STEP_DEGREES, STAMINA_REGEN, STARVATION_DAMAGE, STAT_DECAY_INTERVAL_SECS,
    STAT_MAX, WALK_SPEED,
};
use crate::inventory::ResourceCost;

/// Errors raised while loading or validating [`SurvivalSettings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document was not valid JSON for the settings schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field held a value the systems cannot work with.
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Tunables for the periodic vitals update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatSettings {
    /// Upper bound for health, hunger and stamina.
    pub max: f32,
    /// Seconds between decay steps.
    pub decay_interval_secs: f32,
    /// Hunger lost per step.
    pub hunger_decay: f32,
    /// Stamina regained per step.
    pub stamina_regen: f32,
    /// Health lost per step once hunger is empty.
    pub starvation_damage: f32,
}

impl StatSettings {
    /// Decay interval as a [`Duration`] suitable for a Bevy [`Timer`].
    #[must_use]
    pub fn decay_interval(&self) -> Duration {
        Duration::from_secs_f32(self.decay_interval_secs)
    }
}

impl Default for StatSettings {
    fn default() -> Self {
        Self {
            max: STAT_MAX,
            decay_interval_secs: STAT_DECAY_INTERVAL_SECS,
            hunger_decay: HUNGER_DECAY,
            stamina_regen: STAMINA_REGEN,
            starvation_damage: STARVATION_DAMAGE,
        }
    }
}

/// Tunables for the interact trace and harvest economy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestSettings {
    /// Trace length from the eye.
    pub reach: f32,
    /// Stamina spent per successful hit.
    pub stamina_cost: f32,
    /// Stamina must exceed this for a swing to count.
    pub min_stamina: f32,
    /// Edge length of the impact marker.
    pub marker_size: f32,
    /// Lifetime of the impact marker in seconds.
    pub marker_lifetime_secs: f32,
}

impl Default for HarvestSettings {
    fn default() -> Self {
        Self {
            reach: HARVEST_REACH,
            stamina_cost: HARVEST_STAMINA_COST,
            min_stamina: HARVEST_MIN_STAMINA,
            marker_size: HIT_MARKER_SIZE,
            marker_lifetime_secs: HIT_MARKER_LIFETIME_SECS,
        }
    }
}

/// Tunables for the building preview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    /// Distance from the eye at which the preview hovers.
    pub distance: f32,
    /// Yaw added per rotate action, in degrees.
    pub rotation_step_degrees: f32,
}

impl PlacementSettings {
    /// Rotation step converted to radians.
    #[must_use]
    pub fn rotation_step(&self) -> f32 {
        self.rotation_step_degrees.to_radians()
    }
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            distance: PLACEMENT_DISTANCE,
            rotation_step_degrees: PLACEMENT_ROTATION_STEP_DEGREES,
        }
    }
}

/// Tunables for walking and looking around.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    /// Units per second at full axis deflection.
    pub walk_speed: f32,
    /// Radians per unit of mouse motion.
    pub look_sensitivity: f32,
    /// Pitch clamp either side of level, in degrees.
    pub max_pitch_degrees: f32,
    /// Eye height above the player's origin.
    pub eye_height: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            look_sensitivity: LOOK_SENSITIVITY,
            max_pitch_degrees: MAX_PITCH_DEGREES,
            eye_height: EYE_HEIGHT,
        }
    }
}

/// Crafting cost of each building kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipes {
    /// Cost of one wall.
    pub wall: ResourceCost,
    /// Cost of one floor.
    pub floor: ResourceCost,
    /// Cost of one ceiling.
    pub ceiling: ResourceCost,
}

impl Recipes {
    /// Cost of crafting one part of `kind`.
    #[must_use]
    pub const fn cost(&self, kind: BuildingKind) -> ResourceCost {
        match kind {
            BuildingKind::Wall => self.wall,
            BuildingKind::Floor => self.floor,
            BuildingKind::Ceiling => self.ceiling,
        }
    }
}

impl Default for Recipes {
    fn default() -> Self {
        Self {
            wall: ResourceCost::new(10, 5),
            floor: ResourceCost::new(8, 8),
            ceiling: ResourceCost::new(10, 10),
        }
    }
}

/// Every tunable read by [`crate::SurvivalPlugin`].
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalSettings {
    /// Vitals decay.
    pub stats: StatSettings,
    /// Interact trace and harvest economy.
    pub harvest: HarvestSettings,
    /// Building preview.
    pub placement: PlacementSettings,
    /// Walking and looking.
    pub movement: MovementSettings,
    /// Crafting costs.
    pub recipes: Recipes,
}

impl SurvivalSettings {
    /// Parses and validates settings from a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value fails [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates settings from a JSON file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// the same errors as [`Self::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let text = fs::read_to_string(file).map_err(|source| ConfigError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Rejects values the systems cannot run with.
    ///
    /// # Errors
    /// Returns the first offending field as [`ConfigError::Invalid`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive(self.stats.max, "stats.max")?;
        duration(self.stats.decay_interval_secs, "stats.decay_interval_secs")?;
        non_negative(self.stats.hunger_decay, "stats.hunger_decay")?;
        non_negative(self.stats.stamina_regen, "stats.stamina_regen")?;
        non_negative(self.stats.starvation_damage, "stats.starvation_damage")?;
        positive(self.harvest.reach, "harvest.reach")?;
        non_negative(self.harvest.stamina_cost, "harvest.stamina_cost")?;
        non_negative(self.harvest.min_stamina, "harvest.min_stamina")?;
        non_negative(self.harvest.marker_size, "harvest.marker_size")?;
        duration(
            self.harvest.marker_lifetime_secs,
            "harvest.marker_lifetime_secs",
        )?;
        positive(self.placement.distance, "placement.distance")?;
        finite(
            self.placement.rotation_step_degrees,
            "placement.rotation_step_degrees",
        )?;
        non_negative(self.movement.walk_speed, "movement.walk_speed")?;
        non_negative(self.movement.look_sensitivity, "movement.look_sensitivity")?;
        if !(0.0..90.0).contains(&self.movement.max_pitch_degrees) {
            return Err(ConfigError::Invalid {
                field: "movement.max_pitch_degrees",
                reason: "must lie in [0, 90)",
            });
        }
        finite(self.movement.eye_height, "movement.eye_height")
    }
}

fn finite(value: f32, field: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite",
        })
    }
}

fn non_negative(value: f32, field: &'static str) -> Result<(), ConfigError> {
    finite(value, field)?;
    if value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn positive(value: f32, field: &'static str) -> Result<(), ConfigError> {
    finite(value, field)?;
    if value <= 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

/// A positive number of seconds that a [`Duration`] can hold.
fn duration(seconds: f32, field: &'static str) -> Result<(), ConfigError> {
    positive(seconds, field)?;
    if Duration::try_from_secs_f32(seconds).is_err() {
        return Err(ConfigError::Invalid {
            field,
            reason: "is too long to represent as a duration",
        });
    }
    Ok(())
}

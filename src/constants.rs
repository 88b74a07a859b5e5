//! Gameplay tuning defaults shared across systems.
//!
//! [`crate::config::SurvivalSettings`] starts from these values; a JSON
//! config file may override any of them at launch.

/// Upper bound of every vital. The lower bound is always zero.
pub const STAT_MAX: f32 = 100.0;
/// Seconds between two stat decay steps.
pub const STAT_DECAY_INTERVAL_SECS: f32 = 2.0;
/// Hunger lost per decay step while the player is not yet starving.
pub const HUNGER_DECAY: f32 = 1.0;
/// Stamina regained per decay step.
pub const STAMINA_REGEN: f32 = 10.0;
/// Health lost per decay step once hunger has run out.
pub const STARVATION_DAMAGE: f32 = 3.0;

/// Length of the interaction line trace, in world units.
pub const HARVEST_REACH: f32 = 800.0;
/// Stamina spent on a successful harvest hit.
pub const HARVEST_STAMINA_COST: f32 = 5.0;
/// Stamina must be strictly above this for a harvest swing to land.
pub const HARVEST_MIN_STAMINA: f32 = 5.0;
/// Edge length of the impact marker left by a harvest hit.
pub const HIT_MARKER_SIZE: f32 = 10.0;
/// Seconds an impact marker stays in the world.
pub const HIT_MARKER_LIFETIME_SECS: f32 = 2.0;

/// Distance in front of the eye at which building previews hover.
pub const PLACEMENT_DISTANCE: f32 = 400.0;
/// Yaw added by a single rotate action, in degrees.
pub const PLACEMENT_ROTATION_STEP_DEGREES: f32 = 90.0;

/// Walking speed in world units per second.
pub const WALK_SPEED: f32 = 600.0;
/// Radians of yaw or pitch per unit of mouse motion.
pub const LOOK_SENSITIVITY: f32 = 0.003;
/// Pitch limit either side of the horizon, in degrees.
pub const MAX_PITCH_DEGREES: f32 = 89.0;
/// Height of the eye above the player's origin.
pub const EYE_HEIGHT: f32 = 64.0;

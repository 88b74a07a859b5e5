//! ECS component types shared between the player systems.
//! Covers the player marker, view orientation, jump state and trace colliders.
use bevy::prelude::*;

use crate::constants::EYE_HEIGHT;
use crate::vector_math::{view_forward, view_rotation};

/// Marker for the locally controlled player character.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct Player;

/// Where the player is looking from and towards.
///
/// The eye sits `eye_height` above the entity's translation. Yaw and pitch are
/// radians; see [`crate::vector_math::view_forward`] for the convention.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct PlayerView {
    /// Turn about world up; positive turns left.
    pub yaw: f32,
    /// Positive looks up.
    pub pitch: f32,
    /// Height of the eye above the translation.
    pub eye_height: f32,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            eye_height: EYE_HEIGHT,
        }
    }
}

impl PlayerView {
    /// World-space eye position for a player at `transform`.
    #[must_use]
    pub fn eye(&self, transform: &Transform) -> Vec3 {
        transform.translation + Vec3::Y * self.eye_height
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        view_forward(self.yaw, self.pitch)
    }

    /// Orientation of the view, yaw applied before pitch.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        view_rotation(self.yaw, self.pitch)
    }
}

/// Jump input state, read by the host's character movement.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct Jump {
    /// Jump held this frame.
    pub pressed: bool,
}

/// Axis-aligned box centred on the entity's translation.
///
/// Only entities carrying a collider are visible to the interact trace.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct Collider {
    /// Half the box size along each axis.
    pub half_extents: Vec3,
}

impl Collider {
    /// A box with the given half extents.
    #[must_use]
    pub const fn cuboid(half_extents: Vec3) -> Self {
        Self { half_extents }
    }
}

//! Walking, looking and jumping for the player character.

use bevy::prelude::*;

use crate::components::{Jump, Player, PlayerView};
use crate::config::{MovementSettings, SurvivalSettings};
use crate::input::PlayerInput;
use crate::vector_math::ground_basis;

/// Applies a look delta to `view`, clamping pitch.
///
/// Positive `look.x` turns right and positive `look.y` looks down, matching
/// screen-space mouse motion.
pub fn apply_look(view: &mut PlayerView, look: Vec2, settings: &MovementSettings) {
    let max_pitch = settings.max_pitch_degrees.to_radians();
    view.yaw -= look.x * settings.look_sensitivity;
    view.pitch = (view.pitch - look.y * settings.look_sensitivity).clamp(-max_pitch, max_pitch);
}

/// World-space displacement for one frame of walking.
///
/// Diagonal input is normalised so it is no faster than a single axis.
#[must_use]
pub fn walk_displacement(
    yaw: f32,
    move_forward: f32,
    move_right: f32,
    speed: f32,
    delta_secs: f32,
) -> Vec3 {
    let (forward, right) = ground_basis(yaw);
    let wish = forward * move_forward + right * move_right;
    wish.clamp_length_max(1.0) * speed * delta_secs
}

/// Moves and turns every player from the sampled [`PlayerInput`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn player_movement_system(
    time: Res<Time>,
    input: Res<PlayerInput>,
    settings: Res<SurvivalSettings>,
    mut players: Query<(&mut Transform, &mut PlayerView, &mut Jump), With<Player>>,
) {
    let movement = &settings.movement;
    for (mut transform, mut view, mut jump) in &mut players {
        if input.look != Vec2::ZERO {
            apply_look(&mut view, input.look, movement);
            transform.rotation = Quat::from_rotation_y(view.yaw);
        }
        if jump.pressed != input.jump {
            jump.pressed = input.jump;
        }
        let step = walk_displacement(
            view.yaw,
            input.move_forward,
            input.move_right,
            movement.walk_speed,
            time.delta_secs(),
        );
        if step != Vec3::ZERO {
            transform.translation += step;
        }
    }
}

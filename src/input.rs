//! Maps host keyboard and mouse state onto player intents.
//!
//! Continuous input (walk axes, look delta, jump held) lands in the
//! [`PlayerInput`] resource each frame. Discrete presses become observer
//! events: [`Interact`], [`RotatePreview`], [`BeginPlacement`] and
//! [`CraftBuilding`].
//!
//! The system stays silent when the host has not installed Bevy's input
//! resources, which leaves `PlayerInput` free for tests and scripted drivers.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::building::{BeginPlacement, BuildingKind, CraftBuilding, RotatePreview};
use crate::components::Player;
use crate::harvest::Interact;

/// Key assignments for every player action.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct InputBindings {
    /// Walk forward.
    pub forward: KeyCode,
    /// Walk backward.
    pub back: KeyCode,
    /// Strafe left.
    pub left: KeyCode,
    /// Strafe right.
    pub right: KeyCode,
    /// Held to jump.
    pub jump: KeyCode,
    /// Harvest, or confirm an active preview.
    pub interact: KeyCode,
    /// Turn the active preview.
    pub rotate: KeyCode,
    /// Held together with a building key to craft instead of place.
    pub craft_modifier: KeyCode,
    /// Wall building key.
    pub wall: KeyCode,
    /// Floor building key.
    pub floor: KeyCode,
    /// Ceiling building key.
    pub ceiling: KeyCode,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::Space,
            interact: KeyCode::KeyE,
            rotate: KeyCode::KeyR,
            craft_modifier: KeyCode::ShiftLeft,
            wall: KeyCode::Digit1,
            floor: KeyCode::Digit2,
            ceiling: KeyCode::Digit3,
        }
    }
}

impl InputBindings {
    /// Key bound to each building kind.
    #[must_use]
    pub const fn building_key(&self, kind: BuildingKind) -> KeyCode {
        match kind {
            BuildingKind::Wall => self.wall,
            BuildingKind::Floor => self.floor,
            BuildingKind::Ceiling => self.ceiling,
        }
    }
}

/// Continuous input sampled this frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Forward (+1) to back (-1).
    pub move_forward: f32,
    /// Right (+1) to left (-1).
    pub move_right: f32,
    /// Mouse motion since last frame; +x turns right, +y looks down.
    pub look: Vec2,
    /// Jump key held.
    pub jump: bool,
}

/// Maps a negative/positive key pair to an axis value.
const fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Samples the keyboard and mouse into [`PlayerInput`] and fires action events.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn capture_input_system(
    host_keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<AccumulatedMouseMotion>>,
    bindings: Res<InputBindings>,
    mut input: ResMut<PlayerInput>,
    players: Query<Entity, With<Player>>,
    mut commands: Commands,
) {
    let Some(keyboard) = host_keyboard else {
        return;
    };

    *input = PlayerInput {
        move_forward: axis(
            keyboard.pressed(bindings.back),
            keyboard.pressed(bindings.forward),
        ),
        move_right: axis(
            keyboard.pressed(bindings.left),
            keyboard.pressed(bindings.right),
        ),
        look: mouse.map_or(Vec2::ZERO, |motion| motion.delta),
        jump: keyboard.pressed(bindings.jump),
    };

    let Ok(player) = players.single() else {
        return;
    };

    if keyboard.just_pressed(bindings.interact) {
        commands.trigger(Interact { player });
    }
    if keyboard.just_pressed(bindings.rotate) {
        commands.trigger(RotatePreview { player });
    }
    let crafting = keyboard.pressed(bindings.craft_modifier);
    for kind in BuildingKind::ALL {
        if !keyboard.just_pressed(bindings.building_key(kind)) {
            continue;
        }
        if crafting {
            commands.trigger(CraftBuilding { player, kind });
        } else {
            commands.trigger(BeginPlacement { player, kind });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::prelude::On;
    use bevy::ecs::system::RunSystemOnce;
    use rstest::rstest;

    #[rstest]
    #[case::none(false, false, 0.0)]
    #[case::negative(true, false, -1.0)]
    #[case::positive(false, true, 1.0)]
    #[case::both_cancel(true, true, 0.0)]
    fn axis_combines_key_pair(#[case] negative: bool, #[case] positive: bool, #[case] expected: f32) {
        assert!((axis(negative, positive) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    fn missing_keyboard_leaves_input_untouched() {
        let mut world = World::new();
        world.init_resource::<InputBindings>();
        let scripted = PlayerInput {
            move_forward: 1.0,
            ..Default::default()
        };
        world.insert_resource(scripted);

        world
            .run_system_once(capture_input_system)
            .expect("system runs");

        assert_eq!(*world.resource::<PlayerInput>(), scripted);
    }

    #[rstest]
    fn held_keys_become_axes() {
        let mut world = World::new();
        world.init_resource::<InputBindings>();
        world.init_resource::<PlayerInput>();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::KeyA);
        keyboard.press(KeyCode::Space);
        world.insert_resource(keyboard);

        world
            .run_system_once(capture_input_system)
            .expect("system runs");

        let input = *world.resource::<PlayerInput>();
        assert!((input.move_forward - 1.0).abs() < f32::EPSILON);
        assert!((input.move_right + 1.0).abs() < f32::EPSILON);
        assert!(input.jump);
        assert_eq!(input.look, Vec2::ZERO);
    }

    #[rstest]
    fn building_keys_choose_between_craft_and_place() {
        #[derive(Resource, Default)]
        struct Seen(Vec<&'static str>);

        let mut world = World::new();
        world.init_resource::<InputBindings>();
        world.init_resource::<PlayerInput>();
        world.init_resource::<Seen>();
        world.spawn(Player);
        world.add_observer(|_: On<CraftBuilding>, mut seen: ResMut<Seen>| seen.0.push("craft"));
        world.add_observer(|_: On<BeginPlacement>, mut seen: ResMut<Seen>| seen.0.push("place"));

        let mut placing = ButtonInput::<KeyCode>::default();
        placing.press(KeyCode::Digit2);
        world.insert_resource(placing);
        world
            .run_system_once(capture_input_system)
            .expect("system runs");

        let mut crafting = ButtonInput::<KeyCode>::default();
        crafting.press(KeyCode::ShiftLeft);
        crafting.press(KeyCode::Digit1);
        world.insert_resource(crafting);
        world
            .run_system_once(capture_input_system)
            .expect("system runs");

        assert_eq!(world.resource::<Seen>().0, vec!["place", "craft"]);
    }
}

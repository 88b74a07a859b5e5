//! Health, hunger and stamina, and the timer that wears them down.

use bevy::prelude::*;
use log::{debug, warn};

use crate::config::{StatSettings, SurvivalSettings};
use crate::constants::STAT_MAX;

/// The three survival stats, each kept within `[0, max]`.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct Vitals {
    /// Reaches zero only through starvation in this crate.
    pub health: f32,
    /// Fullness; starvation sets in at zero.
    pub hunger: f32,
    /// Spent by harvesting, recovered by decay steps.
    pub stamina: f32,
    /// Shared upper bound of all three stats.
    pub max: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self::full(STAT_MAX)
    }
}

impl Vitals {
    /// All stats at `max`.
    #[must_use]
    pub const fn full(max: f32) -> Self {
        Self {
            health: max,
            hunger: max,
            stamina: max,
            max,
        }
    }

    fn clamped(value: f32, max: f32) -> f32 {
        value.clamp(0.0, max)
    }

    /// Adds `delta` to health, clamped into `[0, max]`.
    pub fn adjust_health(&mut self, delta: f32) {
        self.health = Self::clamped(self.health + delta, self.max);
    }

    /// Adds `delta` to hunger, clamped into `[0, max]`.
    pub fn adjust_hunger(&mut self, delta: f32) {
        self.hunger = Self::clamped(self.hunger + delta, self.max);
    }

    /// Adds `delta` to stamina, clamped into `[0, max]`.
    pub fn adjust_stamina(&mut self, delta: f32) {
        self.stamina = Self::clamped(self.stamina + delta, self.max);
    }

    /// Whether hunger has run out and health is draining.
    #[must_use]
    pub fn is_starving(&self) -> bool {
        self.hunger <= 0.0
    }

    /// Runs one decay step.
    ///
    /// Hunger drops while any is left, stamina recovers, and an empty belly
    /// costs health. The starvation check sees the hunger value left by this
    /// same step.
    pub fn apply_decay(&mut self, stats: &StatSettings) {
        if self.hunger > 0.0 {
            self.adjust_hunger(-stats.hunger_decay);
        }
        self.adjust_stamina(stats.stamina_regen);
        if self.is_starving() {
            self.adjust_health(-stats.starvation_damage);
        }
    }
}

/// Repeating timer driving [`Vitals::apply_decay`].
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct StatDecay {
    /// Fires once per decay interval.
    pub timer: Timer,
}

impl StatDecay {
    /// A timer repeating every configured decay interval.
    #[must_use]
    pub fn new(stats: &StatSettings) -> Self {
        Self {
            timer: Timer::new(stats.decay_interval(), TimerMode::Repeating),
        }
    }
}

impl Default for StatDecay {
    fn default() -> Self {
        Self::new(&StatSettings::default())
    }
}

/// Advances each decay timer and applies one step per elapsed interval.
///
/// A long frame can complete several intervals at once; every one of them is
/// applied.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn stat_decay_system(
    time: Res<Time>,
    settings: Res<SurvivalSettings>,
    mut query: Query<(Entity, &mut Vitals, &mut StatDecay)>,
) {
    for (entity, mut vitals, mut decay) in &mut query {
        decay.timer.tick(time.delta());
        let steps = decay.timer.times_finished_this_tick();
        if steps == 0 {
            continue;
        }
        let was_starving = vitals.is_starving();
        for _ in 0..steps {
            vitals.apply_decay(&settings.stats);
        }
        debug!(
            "{entity:?} decayed {steps} step(s): health {:.1} hunger {:.1} stamina {:.1}",
            vitals.health, vitals.hunger, vitals.stamina
        );
        if vitals.is_starving() && !was_starving {
            warn!("{entity:?} is starving");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bevy::ecs::system::RunSystemOnce;
    use rstest::{fixture, rstest};
    use std::time::Duration;

    #[fixture]
    fn stats() -> StatSettings {
        StatSettings::default()
    }

    #[rstest]
    #[case::heal_caps_at_max(95.0, 10.0, 100.0)]
    #[case::damage_stops_at_zero(2.0, -3.0, 0.0)]
    #[case::ordinary_damage(50.0, -3.0, 47.0)]
    fn health_is_clamped(#[case] start: f32, #[case] delta: f32, #[case] expected: f32) {
        let mut vitals = Vitals {
            health: start,
            ..Vitals::default()
        };
        vitals.adjust_health(delta);
        assert_relative_eq!(vitals.health, expected);
    }

    #[rstest]
    fn stamina_can_reach_exact_max() {
        let mut vitals = Vitals {
            stamina: 90.0,
            ..Vitals::default()
        };
        vitals.adjust_stamina(10.0);
        assert_relative_eq!(vitals.stamina, 100.0);
    }

    #[rstest]
    fn fed_player_loses_hunger_and_regains_stamina(stats: StatSettings) {
        let mut vitals = Vitals {
            hunger: 50.0,
            stamina: 20.0,
            ..Vitals::default()
        };
        vitals.apply_decay(&stats);
        assert_relative_eq!(vitals.hunger, 49.0);
        assert_relative_eq!(vitals.stamina, 30.0);
        assert_relative_eq!(vitals.health, 100.0);
    }

    #[rstest]
    fn starving_player_loses_health(stats: StatSettings) {
        let mut vitals = Vitals {
            hunger: 0.0,
            ..Vitals::default()
        };
        vitals.apply_decay(&stats);
        assert_relative_eq!(vitals.hunger, 0.0);
        assert_relative_eq!(vitals.health, 97.0);
    }

    #[rstest]
    fn reaching_zero_hunger_hurts_in_the_same_step(stats: StatSettings) {
        let mut vitals = Vitals {
            hunger: 1.0,
            ..Vitals::default()
        };
        vitals.apply_decay(&stats);
        assert_relative_eq!(vitals.hunger, 0.0);
        assert_relative_eq!(vitals.health, 97.0);
    }

    #[rstest]
    fn health_never_goes_negative(stats: StatSettings) {
        let mut vitals = Vitals {
            health: 1.0,
            hunger: 0.0,
            stamina: 0.0,
            max: STAT_MAX,
        };
        vitals.apply_decay(&stats);
        vitals.apply_decay(&stats);
        assert_relative_eq!(vitals.health, 0.0);
        assert_relative_eq!(vitals.stamina, 20.0);
    }

    #[rstest]
    fn decay_timer_uses_configured_interval(stats: StatSettings) {
        let decay = StatDecay::new(&stats);
        assert_eq!(decay.timer.duration(), stats.decay_interval());
        assert_eq!(decay.timer.mode(), TimerMode::Repeating);
    }

    #[rstest]
    fn a_long_frame_applies_every_elapsed_step() {
        let mut world = World::new();
        world.insert_resource(SurvivalSettings::default());
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs(6));
        world.insert_resource(time);
        let player = world.spawn((Vitals::default(), StatDecay::default())).id();

        world
            .run_system_once(stat_decay_system)
            .expect("decay system runs");

        let vitals = world.get::<Vitals>(player).expect("vitals");
        assert_relative_eq!(vitals.hunger, 97.0);
        assert_relative_eq!(vitals.health, 100.0);
    }
}
